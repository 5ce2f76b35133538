use crate::server::error::AppError;

/// Parses a comma-separated list of ids such as `"1,2,3"`.
///
/// Whitespace around each id and empty segments are ignored, so an empty string
/// yields an empty list.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Parsed ids in the order given
/// - `Err(AppError::BadRequest)` - A segment is not an integer
pub fn parse_id_list(value: &str) -> Result<Vec<i32>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid id '{}'", segment)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!(parse_id_list("1,2, 3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_string_is_empty_list() {
        assert!(parse_id_list("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_id() {
        let result = parse_id_list("1,abc");

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("abc")));
    }
}
