//! Browser environment adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue behind small traits and functions so
//! the preference controller can be exercised natively with in-memory fakes.

pub mod color_scheme;
pub mod current_date;
pub mod document;
pub mod storage;
