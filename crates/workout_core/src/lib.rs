//! Core domain logic for the workout log.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod service;

pub use config::{ConfigError, NavigatorConfig, CONFIRM_DELETE_ENV};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{RecordId, RecordValidationError, WorkoutRecord};
pub use nav::form::{
    parse_form_field, FieldErrors, FormDraft, FormField, FormInput, ValidatedInput,
};
pub use nav::navigator::{
    NavAction, NavError, NavOutcome, NavResult, Navigator, Screen, WorkoutNavigator,
};
pub use nav::route::{parse_route, Route, RouteParseError};
pub use repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoError, RepoResult};
pub use service::record_service::{RecordService, RecordStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
