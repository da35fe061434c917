//! Record builders for the supported file formats.
//!
//! | format | builder | payload | value used for statistics |
//! |--------|---------|---------|---------------------------|
//! | BED peaks | [`BedPeakBuilder`] | [`Peak`] | p-value |
//! | GTF | [`GtfFeatureBuilder`] | [`Feature`] | score |
//! | VCF | [`VcfVariantBuilder`] | [`Variant`] | quality |
//! | RefSeq genes | [`RefSeqGeneBuilder`] | [`Gene`] | none |
pub mod bed;
pub mod gtf;
pub mod refseq;
pub mod vcf;

pub use self::bed::{BedOptions, BedPeakBuilder, InvalidValuePolicy, PValueFormat, Peak};
pub use self::gtf::{Feature, GtfFeatureBuilder, GtfOptions};
pub use self::refseq::{Gene, RefSeqGeneBuilder, RefSeqOptions};
pub use self::vcf::{Base, Variant, VcfOptions, VcfVariantBuilder};
pub use crate::record::CoordinatesOnly;
