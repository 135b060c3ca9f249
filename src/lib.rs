//! Profile classification and readiness scoring for the collaborative debt
//! quiz. The scoring engine is a pure, synchronous computation over an
//! injected question catalog; transport and rendering live with the callers.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
