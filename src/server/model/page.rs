use crate::{model::api::PageDto, server::error::AppError};

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: u64 = 500;

/// Validated paging request.
///
/// `page` is 1-based. A requested page of 0 is served as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a page request from optional query values.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Page defaults to 1 and page size to 10
    /// - `Err(AppError::BadRequest)` - Page size of 0 or above `MAX_PAGE_SIZE`, or a
    ///   page whose row offset does not fit in an SQL offset
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Result<Self, AppError> {
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "pageSize must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        let page = page.unwrap_or(1).max(1);

        let offset = (page - 1).checked_mul(page_size);
        if !offset.is_some_and(|offset| offset <= i64::MAX as u64) {
            return Err(AppError::BadRequest(format!("page {} is out of range", page)));
        }

        Ok(Self { page, page_size })
    }

    /// Zero-based page index as used by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// One page of domain records with paging metadata.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(records: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            records,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total.div_ceil(request.page_size),
        }
    }

    /// Converts to DTO at the controller boundary, mapping every record with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        PageDto {
            records: self.records.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let request = PageRequest::new(None, None).unwrap();

        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.index(), 0);
    }

    #[test]
    fn treats_page_zero_as_first_page() {
        let request = PageRequest::new(Some(0), Some(5)).unwrap();

        assert_eq!(request.page, 1);
        assert_eq!(request.index(), 0);
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = PageRequest::new(Some(1), Some(0));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_page_size_above_limit() {
        let result = PageRequest::new(Some(1), Some(MAX_PAGE_SIZE + 1));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(PageRequest::new(Some(1), Some(MAX_PAGE_SIZE)).is_ok());
    }

    #[test]
    fn rejects_page_with_overflowing_offset() {
        let result = PageRequest::new(Some(u64::MAX), Some(10));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_offset_beyond_sql_range() {
        // offset fits in u64 but not in a signed 64-bit SQL integer
        let page = (i64::MAX as u64) / 10 + 2;
        let result = PageRequest::new(Some(page), Some(10));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn computes_total_pages() {
        let request = PageRequest::new(Some(2), Some(10)).unwrap();
        let page = Paginated::new(vec![1, 2, 3], 23, request);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
    }
}
