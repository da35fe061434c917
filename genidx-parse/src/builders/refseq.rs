use serde::{Deserialize, Serialize};

use genidx_core::Scored;

use crate::columns::ExtractedColumns;
use crate::record::{Decoded, RecordBuilder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefSeqOptions {
    pub refseq_id_column: usize,
    pub gene_symbol_column: usize,
}

impl Default for RefSeqOptions {
    fn default() -> Self {
        RefSeqOptions {
            refseq_id_column: 3,
            gene_symbol_column: 4,
        }
    }
}

///
/// A RefSeq gene annotation.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    pub refseq_id: String,
    pub gene_symbol: String,
}

impl Scored for Gene {
    fn value(&self) -> f64 {
        f64::NAN
    }
}

#[derive(Debug, Clone, Default)]
pub struct RefSeqGeneBuilder {
    options: RefSeqOptions,
}

impl RefSeqGeneBuilder {
    pub fn new(options: RefSeqOptions) -> Self {
        RefSeqGeneBuilder { options }
    }
}

impl RecordBuilder for RefSeqGeneBuilder {
    type Payload = Gene;

    fn decode(&self, fields: &[&str], _columns: &ExtractedColumns) -> Decoded<Gene> {
        let field = |column: usize| {
            fields
                .get(column)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        match (
            field(self.options.refseq_id_column),
            field(self.options.gene_symbol_column),
        ) {
            (Some(refseq_id), Some(gene_symbol)) => Decoded::Accepted(Gene {
                refseq_id: refseq_id.to_string(),
                gene_symbol: gene_symbol.to_string(),
            }),
            (None, _) => Decoded::Dropped(format!(
                "missing RefSeq ID in column {}",
                self.options.refseq_id_column
            )),
            (_, None) => Decoded::Dropped(format!(
                "missing gene symbol in column {}",
                self.options.gene_symbol_column
            )),
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
            chromosome: "chr17".to_string(),
            left: 43044294,
            right: 43125483,
            strand: Strand::Negative,
        }
    }

    #[rstest]
    fn test_decode_gene() {
        let fields = ["chr17", "43044294", "43125483", "NM_007294", "BRCA1", "-"];
        assert_eq!(
            RefSeqGeneBuilder::default().decode(&fields, &columns()),
            Decoded::Accepted(Gene {
                refseq_id: "NM_007294".to_string(),
                gene_symbol: "BRCA1".to_string(),
            })
        );
    }

    #[rstest]
    #[case(&["chr17", "1", "2"], "missing RefSeq ID in column 3")]
    #[case(&["chr17", "1", "2", "NM_007294", " "], "missing gene symbol in column 4")]
    fn test_drops(#[case] fields: &[&str], #[case] reason: &str) {
        assert_eq!(
            RefSeqGeneBuilder::default().decode(fields, &columns()),
            Decoded::Dropped(reason.to_string())
        );
    }
}
