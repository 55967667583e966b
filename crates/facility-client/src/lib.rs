//! Facility Client - HTTP client for the facility management REST API
//!
//! This crate provides:
//! - `FacilityHttpClient`: cookie-session HTTP transport with envelope handling
//! - `ResourceClient`: typed operations returning `Option<T>`, with every
//!   failure reported to a `DiagnosticSink` before it is collapsed to `None`
//! - The client error taxonomy

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;

pub use client::{FilePayload, ResourceClient, UploadDocumentRequest};
pub use config::HttpClientConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use error::{ClientError, FailureKind};
pub use http::FacilityHttpClient;

pub use facility_api as api;
