//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the parsed dataset row (`Record`)
//! - the prefecture enumeration (`Prefecture`)
//! - the report configuration (`Calendar`)

pub mod types;

pub use types::*;
