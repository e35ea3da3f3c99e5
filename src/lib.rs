//! declmark - A CLI tool to inspect metadata markers attached to program
//! declarations
//!
//! This library models declarations (types, constructors, methods, fields)
//! carrying attached metadata markers in an explicit registry, and produces
//! reports over that metadata.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod output;
pub mod registry;
pub mod report;
pub mod sample;
pub mod storage;
