use genidx_core::HashFunction;

use crate::errors::ParseError;

///
/// Column layout and reading limits for a single parse.
///
/// Column indices are 0-based. `right_column = None` marks a single-position format
/// (the right coordinate is derived as `left + 1`), `strand_column = None` disables
/// strand parsing and `max_lines_to_read = None` reads to the end of the file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    pub chr_column: usize,
    pub left_column: usize,
    pub right_column: Option<usize>,
    pub strand_column: Option<usize>,
    /// Lines skipped unconditionally before reading starts.
    pub start_offset: usize,
    /// Cap on data lines read after the skipped header lines.
    pub max_lines_to_read: Option<usize>,
    pub delimiter: char,
    pub hash_function: HashFunction,
    /// Drop intervals on chromosomes absent from the reference assembly while reading.
    pub strict_chromosome_filtering: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            chr_column: 0,
            left_column: 1,
            right_column: Some(2),
            strand_column: None,
            start_offset: 0,
            max_lines_to_read: None,
            delimiter: '\t',
            hash_function: HashFunction::OneAtATime,
            strict_chromosome_filtering: false,
        }
    }
}

impl ParseOptions {
    /// `chr start end name value ...`
    pub fn bed() -> Self {
        ParseOptions::default()
    }

    /// `seqname source feature start end score strand frame attribute`
    pub fn gtf() -> Self {
        ParseOptions {
            left_column: 3,
            right_column: Some(4),
            strand_column: Some(6),
            ..ParseOptions::default()
        }
    }

    /// `CHROM POS ID REF ALT QUAL FILTER INFO`
    pub fn vcf() -> Self {
        ParseOptions {
            right_column: None,
            ..ParseOptions::default()
        }
    }

    /// `chr start end refseq_id gene_symbol strand`
    pub fn refseq() -> Self {
        ParseOptions {
            strand_column: Some(5),
            ..ParseOptions::default()
        }
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(ParseError::InvalidOptions(format!(
                "delimiter {:?} would split across lines",
                self.delimiter
            )));
        }
        Ok(())
    }
}
