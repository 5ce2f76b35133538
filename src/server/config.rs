use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_INACTIVITY_MINUTES: i64 = 30;

/// Credentials for the admin account seeded into an empty employee table.
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Minutes of inactivity after which a session expires.
    pub session_inactivity_minutes: i64,

    /// Present only when both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set.
    pub admin: Option<AdminCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_inactivity_minutes = match std::env::var("SESSION_INACTIVITY_MINUTES") {
            Ok(value) => parse_positive_minutes("SESSION_INACTIVITY_MINUTES", value)?,
            Err(_) => DEFAULT_SESSION_INACTIVITY_MINUTES,
        };

        let admin = match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some(AdminCredentials { username, password }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_inactivity_minutes,
            admin,
        })
    }
}

fn parse_positive_minutes(name: &str, value: String) -> Result<i64, ConfigError> {
    match value.parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}
