//! Data model for the Sightline trace dashboard.
//!
//! This crate defines the trace summaries the dashboard consumes and the
//! attribute values it displays. It does no I/O of its own.

pub mod attributes;
pub mod trace;

pub use attributes::*;
pub use trace::*;
