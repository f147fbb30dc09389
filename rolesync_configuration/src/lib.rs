//! This crate contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_default_path_or_defaults`].
//! Every table and every key is optional; missing values fall back to defaults
//! that match a local Jenkins instance (`http://localhost:8080`, `admin`/`admin`).
//!
//! # Internals
//! The configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated configuration structures.
//!
//! The configuration file is first deserialized into the [`UnresolvedConfiguration`] structure.
//! Its `try_resolve` method then recursively turns it
//! (and its fields) into validated ("resolved") versions, raising an error
//! if e.g. a logging filter does not parse.
//!
//! The output is the [`Configuration`].

#![allow(rustdoc::private_intra_doc_links)]

mod error;
mod structure;
mod traits;
mod utilities;

pub use error::*;
pub use structure::*;
pub use utilities::get_default_configuration_file_path;
