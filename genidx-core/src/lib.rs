//! Core building blocks for genidx.
//!
//! This crate holds the pieces shared by every file format the parser understands:
//! the 32-bit hash functions used for file and record keys, the [`Strand`] and
//! [`Interval`] primitives, and [`ReferenceAssembly`] tables of expected chromosome
//! lengths.
//!
//! # Example
//!
//! ```
//! use genidx_core::hashing::{HashFunction, one_at_a_time};
//! use genidx_core::models::ReferenceAssembly;
//!
//! let hg38: ReferenceAssembly = "hg38".parse().unwrap();
//! assert_eq!(hg38.length("chr1"), Some(248_956_422));
//!
//! assert_eq!(HashFunction::OneAtATime.hash("a"), one_at_a_time("a"));
//! ```
pub mod consts;
pub mod errors;
pub mod hashing;
pub mod models;
pub mod utils;

// re-exports
pub use errors::ReferenceAssemblyError;
pub use hashing::HashFunction;
pub use models::{Interval, ReferenceAssembly, Scored, Strand};
