//! # cityinfo-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the REST JSON API (`/api/cities`, nested
//!   `/api/cities/{city_id}/pointsofinterest`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `cityinfo-app` (for port traits and services) and
//! `cityinfo-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
