use crate::server::error::AppError;

/// Sale status shared by dishes and combos.
///
/// Stored as an integer column: 0 = off-sale, 1 = on-sale. Only the batch status
/// operations move an item between the two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    OffSale,
    OnSale,
}

impl SaleStatus {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::OffSale => 0,
            Self::OnSale => 1,
        }
    }

    /// Message reported when a batch status change touches no rows.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::OffSale => "stop sale failed",
            Self::OnSale => "start sale failed",
        }
    }
}

impl TryFrom<i32> for SaleStatus {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::OffSale),
            1 => Ok(Self::OnSale),
            other => Err(AppError::BadRequest(format!(
                "Invalid status {}, expected 0 or 1",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_values() {
        assert_eq!(SaleStatus::try_from(0).unwrap(), SaleStatus::OffSale);
        assert_eq!(SaleStatus::try_from(1).unwrap(), SaleStatus::OnSale);
        assert_eq!(SaleStatus::OnSale.as_i32(), 1);
    }

    #[test]
    fn rejects_unknown_value() {
        let result = SaleStatus::try_from(2);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn failure_message_depends_on_direction() {
        assert_eq!(SaleStatus::OffSale.failure_message(), "stop sale failed");
        assert_eq!(SaleStatus::OnSale.failure_message(), "start sale failed");
    }
}
