use serde::{Deserialize, Serialize};

use genidx_core::Scored;

use crate::columns::ExtractedColumns;
use crate::record::{Decoded, RecordBuilder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GtfOptions {
    pub source_column: usize,
    pub feature_column: usize,
    pub score_column: usize,
    pub frame_column: usize,
    pub attribute_column: usize,
}

impl Default for GtfOptions {
    fn default() -> Self {
        GtfOptions {
            source_column: 1,
            feature_column: 2,
            score_column: 5,
            frame_column: 7,
            attribute_column: 8,
        }
    }
}

///
/// A GTF feature line. The attribute string is kept as written.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub source: String,
    pub feature: String,
    pub score: f64,
    pub frame: Option<u8>,
    pub attribute: String,
}

impl Scored for Feature {
    fn value(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone, Default)]
pub struct GtfFeatureBuilder {
    options: GtfOptions,
}

impl GtfFeatureBuilder {
    pub fn new(options: GtfOptions) -> Self {
        GtfFeatureBuilder { options }
    }
}

fn text(fields: &[&str], column: usize) -> String {
    fields.get(column).map(|s| s.trim().to_string()).unwrap_or_default()
}

impl RecordBuilder for GtfFeatureBuilder {
    type Payload = Feature;

    fn decode(&self, fields: &[&str], _columns: &ExtractedColumns) -> Decoded<Feature> {
        let feature = text(fields, self.options.feature_column);
        if feature.is_empty() {
            return Decoded::Dropped("missing feature type".to_string());
        }

        let score = match fields.get(self.options.score_column).map(|s| s.trim()) {
            None | Some(".") | Some("") => f64::NAN,
            Some(token) => match token.parse::<f64>() {
                Ok(score) => score,
                Err(_) => return Decoded::Dropped(format!("invalid score `{}`", token)),
            },
        };

        let frame = match fields.get(self.options.frame_column).map(|s| s.trim()) {
            None | Some(".") | Some("") => None,
            Some(token) => match token.parse::<u8>() {
                Ok(frame) if frame <= 2 => Some(frame),
                _ => return Decoded::Dropped(format!("invalid frame `{}`", token)),
            },
        };

        Decoded::Accepted(Feature {
            source: text(fields, self.options.source_column),
            feature,
            score,
            frame,
            attribute: text(fields, self.options.attribute_column),
        })
    }
}
