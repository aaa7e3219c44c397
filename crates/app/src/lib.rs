//! # hasspower-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ConfigProvider` — read-only access to `apikey`, `hostname`, `port`
//!   - `Localizer` — turn an outcome code into a user-facing message
//!   - `HttpClient` — the two HTTP exchanges with Home Assistant
//! - Define the **driving/inbound** use-case:
//!   - `PowerService` — `power_on`, `power_off`, connectivity probe
//! - Orchestrate domain objects without knowing *how* HTTP or localization works
//!
//! ## Dependency rule
//! Depends on `hasspower-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod ports;
pub mod services;
