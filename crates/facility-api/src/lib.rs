//! Facility API - wire models for the facility management REST backend
//!
//! This crate provides:
//! - The `{ success, message, data }` response envelope
//! - Page request/result models shared by every paginated resource
//! - Notice, document and user models
//! - API path constants
//! - Client-side field validation rules

pub mod constants;
pub mod model;
pub mod validation;

pub use constants::api_path;
pub use model::*;
