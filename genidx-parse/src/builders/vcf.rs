use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use genidx_core::Scored;

use crate::columns::ExtractedColumns;
use crate::record::{Decoded, RecordBuilder};

///
/// A single base of a reference or alternate allele.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    N,
    /// `.`, no allele
    Missing,
    /// `*`, allele removed by an upstream deletion
    Deletion,
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            'N' => Ok(Base::N),
            '.' => Ok(Base::Missing),
            '*' => Ok(Base::Deletion),
            _ => Err(value),
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
            Base::N => 'N',
            Base::Missing => '.',
            Base::Deletion => '*',
        };
        write!(f, "{}", c)
    }
}

///
/// Parse an allele string into bases.
///
pub fn parse_bases(token: &str) -> Result<Vec<Base>, String> {
    let token = token.trim();
    if token.is_empty() {
        return Err("empty allele".to_string());
    }
    token
        .chars()
        .map(|c| Base::try_from(c).map_err(|c| format!("invalid base `{}` in `{}`", c, token)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcfOptions {
    pub id_column: usize,
    pub ref_column: usize,
    pub alt_column: usize,
    pub quality_column: usize,
    pub filter_column: usize,
    pub info_column: usize,
}

impl Default for VcfOptions {
    fn default() -> Self {
        VcfOptions {
            id_column: 2,
            ref_column: 3,
            alt_column: 4,
            quality_column: 5,
            filter_column: 6,
            info_column: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub id: String,
    pub reference: Vec<Base>,
    /// One entry per comma separated alternate allele.
    pub alternates: Vec<Vec<Base>>,
    pub quality: f64,
    pub filter: String,
    pub info: String,
}

impl Scored for Variant {
    fn value(&self) -> f64 {
        self.quality
    }
}

#[derive(Debug, Clone, Default)]
pub struct VcfVariantBuilder {
    options: VcfOptions,
}

impl VcfVariantBuilder {
    pub fn new(options: VcfOptions) -> Self {
        VcfVariantBuilder { options }
    }

    fn decode_fields(&self, fields: &[&str]) -> Result<Variant, String> {
        let column = |index: usize, name: &str| {
            fields
                .get(index)
                .map(|s| s.trim())
                .ok_or_else(|| format!("missing {} column {}", name, index))
        };

        let reference = parse_bases(column(self.options.ref_column, "REF")?)?;
        let alternates = column(self.options.alt_column, "ALT")?
            .split(',')
            .map(parse_bases)
            .collect::<Result<Vec<_>, _>>()?;

        let quality = match fields.get(self.options.quality_column).map(|s| s.trim()) {
            None | Some(".") | Some("") => f64::NAN,
            Some(token) => token
                .parse::<f64>()
                .map_err(|_| format!("invalid quality `{}`", token))?,
        };

        let optional = |index: usize| {
            fields
                .get(index)
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        Ok(Variant {
            id: optional(self.options.id_column),
            reference,
            alternates,
            quality,
            filter: optional(self.options.filter_column),
            info: optional(self.options.info_column),
        })
    }
}

impl RecordBuilder for VcfVariantBuilder {
    type Payload = Variant;

    fn decode(&self, fields: &[&str], _columns: &ExtractedColumns) -> Decoded<Variant> {
        match self.decode_fields(fields) {
            Ok(variant) => Decoded::Accepted(variant),
            Err(reason) => Decoded::Dropped(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use genidx_core::Strand;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn columns() -> ExtractedColumns {
        ExtractedColumns {
            chromosome: "chr20".to_string(),
            left: 14370,
            right: 14371,
            strand: Strand::Unstranded,
        }
    }

    #[rstest]
    #[case("A", Ok(vec![Base::A]))]
    #[case("acgtn", Ok(vec![Base::A, Base::C, Base::G, Base::T, Base::N]))]
    #[case("*", Ok(vec![Base::Deletion]))]
    #[case("<DEL>", Err("invalid base `<` in `<DEL>`".to_string()))]
    #[case("", Err("empty allele".to_string()))]
    fn test_parse_bases(#[case] token: &str, #[case] expected: Result<Vec<Base>, String>) {
        assert_eq!(parse_bases(token), expected);
    }

    #[rstest]
    fn test_decode_variant() {
        let fields = [
            "20", "14370", "rs6054257", "G", "A,T", "29", "PASS", "NS=3;DP=14",
        ];
        let Decoded::Accepted(variant) = VcfVariantBuilder::default().decode(&fields, &columns())
        else {
            panic!("variant should decode");
        };
        assert_eq!(variant.id, "rs6054257");
        assert_eq!(variant.reference, vec![Base::G]);
        assert_eq!(variant.alternates, vec![vec![Base::A], vec![Base::T]]);
        assert_eq!(variant.quality, 29.0);
        assert_eq!(variant.filter, "PASS");
        assert_eq!(variant.info, "NS=3;DP=14");
    }

    #[rstest]
    fn test_missing_quality_is_nan() {
        let fields = ["20", "14370", ".", "G", "A", "."];
        let Decoded::Accepted(variant) = VcfVariantBuilder::default().decode(&fields, &columns())
        else {
            panic!("variant should decode");
        };
        assert!(variant.value().is_nan());
        assert_eq!(variant.info, "");
    }

    #[rstest]
    #[case(&["20", "14370", ".", "G", "Q", "29"], "invalid base `Q` in `Q`")]
    #[case(&["20", "14370", ".", "G"], "missing ALT column 4")]
    #[case(&["20", "14370", ".", "G", "A", "high"], "invalid quality `high`")]
    fn test_drops(#[case] fields: &[&str], #[case] reason: &str) {
        assert_eq!(
            VcfVariantBuilder::default().decode(fields, &columns()),
            Decoded::Dropped(reason.to_string())
        );
    }

    #[rstest]
    fn test_base_display() {
        let rendered: String = parse_bases("ACN*")
            .unwrap()
            .iter()
            .map(|b| b.to_string())
            .collect();
        assert_eq!(rendered, "ACN*");
    }
}
