//! # cityinfo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CityRepository` — read access to cities
//!   - `PointOfInterestRepository` — CRUD for points of interest keyed by
//!     the composite (city id, point id)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CityService` — list, get
//!   - `PointOfInterestService` — list, get, create, update, delete, patch
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `cityinfo-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
