use serde::{Deserialize, Serialize};

use genidx_core::Scored;

use crate::columns::ExtractedColumns;
use crate::record::{Decoded, RecordBuilder};

///
/// How p-values are written in the value column.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueFormat {
    #[default]
    SameAsInput,
    /// `-log10(p)`
    MinusOneLog10,
    /// `-10 * log10(p)`
    MinusTenLog10,
    /// `-100 * log10(p)`
    MinusHundredLog10,
}

impl PValueFormat {
    /// Convert a value written in this format back to a plain p-value.
    pub fn to_p_value(&self, value: f64) -> f64 {
        match self {
            PValueFormat::SameAsInput => value,
            PValueFormat::MinusOneLog10 => 10f64.powf(-value),
            PValueFormat::MinusTenLog10 => 10f64.powf(-value / 10.0),
            PValueFormat::MinusHundredLog10 => 10f64.powf(-value / 100.0),
        }
    }
}

///
/// What to do with a record whose value can't be read.
///
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidValuePolicy {
    #[default]
    Drop,
    UseDefault(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedOptions {
    pub name_column: Option<usize>,
    pub value_column: usize,
    /// Summit offset from the left coordinate, as in narrowPeak files.
    pub summit_column: Option<usize>,
    pub value_format: PValueFormat,
    pub invalid_value: InvalidValuePolicy,
}

impl Default for BedOptions {
    fn default() -> Self {
        BedOptions {
            name_column: Some(3),
            value_column: 4,
            summit_column: None,
            value_format: PValueFormat::SameAsInput,
            invalid_value: InvalidValuePolicy::Drop,
        }
    }
}

///
/// A called peak.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    pub name: String,
    pub value: f64,
    pub summit: i64,
}

impl Scored for Peak {
    fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, Default)]
pub struct BedPeakBuilder {
    options: BedOptions,
}

impl BedPeakBuilder {
    pub fn new(options: BedOptions) -> Self {
        BedPeakBuilder { options }
    }

    fn summit(&self, fields: &[&str], columns: &ExtractedColumns) -> i64 {
        // lies between left and right, so it always fits back into i64
        let (left, right) = (columns.left as i128, columns.right as i128);
        let midpoint = (left + (right - left) / 2) as i64;
        self.options
            .summit_column
            .and_then(|column| fields.get(column))
            .and_then(|token| token.trim().parse::<i64>().ok())
            .filter(|offset| *offset >= 0)
            .and_then(|offset| columns.left.checked_add(offset))
            .unwrap_or(midpoint)
    }
}

impl RecordBuilder for BedPeakBuilder {
    type Payload = Peak;

    fn decode(&self, fields: &[&str], columns: &ExtractedColumns) -> Decoded<Peak> {
        let name = self
            .options
            .name_column
            .and_then(|column| fields.get(column))
            .map(|token| token.to_string())
            .unwrap_or_default();
        let summit = self.summit(fields, columns);

        let parsed = fields
            .get(self.options.value_column)
            .and_then(|token| token.trim().parse::<f64>().ok())
            .filter(|value| !value.is_nan());

        match (parsed, self.options.invalid_value) {
            (Some(value), _) => Decoded::Accepted(Peak {
                name,
                value: self.options.value_format.to_p_value(value),
                summit,
            }),
            (None, InvalidValuePolicy::UseDefault(value)) => Decoded::Substituted(Peak {
                name,
                value,
                summit,
            }),
            (None, InvalidValuePolicy::Drop) => Decoded::Dropped(format!(
                "invalid p-value `{}`",
                fields.get(self.options.value_column).copied().unwrap_or("")
            )),
        }
    }
}
