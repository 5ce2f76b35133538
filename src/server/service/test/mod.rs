use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, model::status::SaleStatus};
