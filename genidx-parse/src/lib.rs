//! Streaming parse engine for tab-delimited genomic interval files.
//!
//! A [`Parser`] reads a BED, GTF, VCF or RefSeq gene table line by line, extracts the
//! coordinate columns, hands the remaining fields to a format-specific
//! [`RecordBuilder`], and indexes every accepted interval by chromosome and strand.
//! Malformed lines are dropped and logged on the resulting [`ParsedDataset`] instead of
//! failing the whole file. Once the file is read, per-chromosome statistics are
//! finalized and the observed chromosomes are reconciled against an optional
//! [`ReferenceAssembly`](genidx_core::ReferenceAssembly).
//!
//! # Example
//!
//! ```no_run
//! use genidx_parse::{ParseOptions, Parser};
//! use genidx_parse::builders::BedPeakBuilder;
//!
//! let parser = Parser::new(ParseOptions::bed(), BedPeakBuilder::default())
//!     .with_assembly("hg38".parse().unwrap());
//!
//! let dataset = parser.parse("peaks.bed").unwrap();
//! for (chr, bucket) in dataset.chromosomes() {
//!     println!("{}: {} peaks", chr, bucket.len());
//! }
//! ```

pub mod builders;
pub mod columns;
pub mod engine;
pub mod errors;
pub mod models;
pub mod options;
pub mod progress;
pub mod reconcile;
pub mod record;
pub mod statistics;

// re-exports
pub use columns::{ColumnExtractor, ExtractedColumns};
pub use engine::Parser;
pub use errors::ParseError;
pub use models::{ChromosomeBucket, ParsedDataset};
pub use options::ParseOptions;
pub use progress::{ParseStatus, ParserState};
pub use reconcile::{AssemblyReconciler, Reconciliation};
pub use record::{Decoded, RecordBuilder};
pub use statistics::{ChrStatistics, DatasetStatistics, Summary};
