//! Relay Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings persistence.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{
    AdapterError, ReqwestFragmentSource, SystemClock, WsChannel, WsChannelConnector, server_base,
};
pub use persistence::{FETCH_TIMEOUT_ENV, SERVER_URL_ENV, SettingsError, SettingsRepository};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
