use genidx_core::Strand;

use crate::options::ParseOptions;

///
/// The shared columns of a line: chromosome, coordinates and strand.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedColumns {
    pub chromosome: String,
    pub left: i64,
    pub right: i64,
    pub strand: Strand,
}

///
/// Pulls the shared columns out of a tokenized line.
///
/// Extraction is pure: it either returns the populated columns or the reason the line
/// has to be dropped. Logging and counting drops is left to the caller.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnExtractor {
    chr_column: usize,
    left_column: usize,
    right_column: Option<usize>,
    strand_column: Option<usize>,
}

impl From<&ParseOptions> for ColumnExtractor {
    fn from(options: &ParseOptions) -> Self {
        ColumnExtractor {
            chr_column: options.chr_column,
            left_column: options.left_column,
            right_column: options.right_column,
            strand_column: options.strand_column,
        }
    }
}

impl ColumnExtractor {
    pub fn extract(&self, fields: &[&str]) -> Result<ExtractedColumns, String> {
        let left = parse_position(fields, self.left_column, "left")?;

        let right = match self.right_column {
            Some(column) => parse_position(fields, column, "right")?,
            None => left
                .checked_add(1)
                .ok_or_else(|| format!("right position overflows after left position {}", left))?,
        };

        let chr_token = fields.get(self.chr_column).ok_or_else(|| {
            format!(
                "chromosome column {} is out of range ({} columns)",
                self.chr_column,
                fields.len()
            )
        })?;
        let chromosome = normalize_chromosome(chr_token)
            .ok_or_else(|| format!("invalid chromosome name `{}`", chr_token))?;

        // a missing strand column is not an error
        let strand = self
            .strand_column
            .and_then(|column| fields.get(column))
            .map_or(Strand::Unstranded, |token| Strand::from_token(token));

        Ok(ExtractedColumns {
            chromosome,
            left,
            right,
            strand,
        })
    }
}

fn parse_position(fields: &[&str], column: usize, name: &str) -> Result<i64, String> {
    let token = fields.get(column).ok_or_else(|| {
        format!(
            "{} position column {} is out of range ({} columns)",
            name,
            column,
            fields.len()
        )
    })?;

    token
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid {} position `{}`", name, token))
}

///
/// Normalize a chromosome token to its `chr`-prefixed form.
///
/// Tokens that already start with `chr` (in any case) are kept as they are, bare
/// integers `N` become `chrN`, and anything else is rejected.
///
pub fn normalize_chromosome(token: &str) -> Option<String> {
    let token = token.trim();
    match token.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => Some(token.to_string()),
        _ => token.parse::<u32>().ok().map(|n| format!("chr{}", n)),
    }
}
