//! # hasspower-domain
//!
//! Pure domain model for the hasspower voice skill.
//!
//! ## Responsibilities
//! - Define **Entities** (fragments of a recognized voice command, tagged with a category)
//! - Define **Power actions** (`turn on` / `turn off`) and the JSON command payload
//! - Define **Outcomes** (termination signal, symbolic code, localized message)
//! - Define the **endpoint rules** for reaching Home Assistant (scheme defaulting, paths)
//! - Define the error types shared across port boundaries
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod action;
pub mod endpoint;
pub mod entity;
pub mod error;
pub mod outcome;
