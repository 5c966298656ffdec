//! File persistence.

mod settings_repository;

pub use settings_repository::{
    FETCH_TIMEOUT_ENV, SERVER_URL_ENV, SettingsError, SettingsRepository,
};
