use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{is_exempt, AuthGuard},
        session::AuthSession,
    },
};
