//! API client core for the blog posts service.
//!
//! # Overview
//! `PostClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` performs the round-trip, and
//! `PostListController` ties both to a `PostListState` that mirrors the
//! server's post collection.
//!
//! # Design
//! - `PostClient` is stateless: it holds only the base URL.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the client is testable without a server.
//! - State changes go through a single reducer; server-backed actions are
//!   dispatched only after the server confirmed them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;

pub use client::PostClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use controller::PostListController;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{Action, DraftField, DraftScope, EditDraft, Failure, Operation, PostListState};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreatePost, Post, PostId};
