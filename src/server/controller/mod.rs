//! HTTP request handlers.
//!
//! Handlers convert DTOs to parameters, call a service, and wrap the result in the
//! success envelope. Authentication is enforced by the login gate in front of them;
//! handlers that write read the caller from the `EmployeeContext` extension.

pub mod dish;
pub mod employee;
pub mod setmeal;

use serde::Deserialize;

/// Query parameters for the paginated listings.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub name: Option<String>,
}

/// Comma-separated id list, e.g. `?ids=1,2,3`.
#[derive(Deserialize, Debug, Default)]
pub struct IdsParams {
    #[serde(default)]
    pub ids: String,
}
