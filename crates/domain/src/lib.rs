//! # cityinfo-domain
//!
//! Pure domain model for the cityinfo service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Cities** (top-level resources owning points of interest)
//! - Define **Points of interest** (child resources with id, name, description)
//! - Define the **patch model** (tagged operations applied to an editable
//!   field document before committing a partial update)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod city;
pub mod patch;
pub mod point_of_interest;
