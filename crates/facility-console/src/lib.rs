//! Facility Console - state controllers for the facility management console
//!
//! This crate provides:
//! - `ListController`: one paginated list, generic over the resource type
//! - `DetailFetcher`: one entity keyed by an optional identifier
//! - `MutationController`: validated create/upload forms
//! - `DownloadController` and `SessionController`
//! - 1-based/0-based page translation for the presentation layer
//!
//! Controllers read through the source traits in [`source`], which
//! `ResourceClient` implements; tests substitute in-memory sources.

pub mod detail;
pub mod download;
pub mod error;
pub mod list;
pub mod messages;
pub mod mutation;
pub mod pagination;
pub mod resource;
pub mod session;
pub mod source;

pub use detail::{DetailFetcher, DetailState};
pub use download::{DownloadController, DownloadState};
pub use error::FieldError;
pub use list::{ListController, ListState};
pub use mutation::{
    CreateNotice, DocumentDraft, Mutation, MutationController, MutationState, NoticeDraft,
    SubmitOutcome, Submitter, UploadDocument,
};
pub use pagination::PaginationView;
pub use resource::{Documents, Notices, Resource};
pub use session::{SessionController, SessionState};
pub use source::{DetailSource, FileSource, PageSource};
