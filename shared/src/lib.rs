//! Shared components for the occultation study.
//!
//! Physical units live in [`units`]; chart rendering lives in [`viz`].

pub mod units;
pub mod viz;
