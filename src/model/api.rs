use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response code for a successful request.
pub const CODE_SUCCESS: i32 = 1;
/// Response code for a failed request.
pub const CODE_ERROR: i32 = 0;

/// Uniform envelope wrapping every response body.
///
/// Successful responses carry `code = 1`, no message, and the payload in `data`.
/// Failures use [`ErrorDto`] instead.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: None,
            data: Some(data),
        }
    }
}

/// Envelope returned for every failed request.
///
/// Shares the shape of [`ApiResponse`] so clients can inspect `code` and `msg`
/// without knowing which endpoint failed. `data` is always null.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    pub code: i32,
    pub msg: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl ErrorDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_ERROR,
            msg: msg.into(),
            data: None,
        }
    }
}

/// One page of records together with paging metadata.
///
/// `page` is 1-based and echoes the page that was actually served.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}
