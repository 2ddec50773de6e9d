//! Chairside Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: file-backed session persistence and
//! reqwest-backed HTTP gateways, plus runtime configuration.

pub mod config;
pub mod http;
pub mod persistence;

pub use config::{ConfigError, PortalConfig};
pub use http::{HttpAuthGateway, ReqwestApiClient, default_client};
pub use persistence::{FileSessionStore, TokioFileSystem};
