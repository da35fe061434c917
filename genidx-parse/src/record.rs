use genidx_core::Scored;

use crate::columns::ExtractedColumns;

///
/// Result of decoding the format-specific fields of a line.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<P> {
    /// Every field decoded as written.
    Accepted(P),
    /// A field failed to decode and was replaced with a configured default value.
    Substituted(P),
    /// The line has to be dropped, with the reason why.
    Dropped(String),
}

///
/// Decodes the format-specific fields of a line once the shared columns have been
/// extracted. There is one builder per file format; the engine itself never looks at
/// anything but the shared columns.
///
/// Any `Fn(&[&str], &ExtractedColumns) -> Decoded<P>` closure is a builder too.
///
pub trait RecordBuilder {
    type Payload: Scored;

    fn decode(&self, fields: &[&str], columns: &ExtractedColumns) -> Decoded<Self::Payload>;
}

impl<F, P> RecordBuilder for F
where
    F: Fn(&[&str], &ExtractedColumns) -> Decoded<P>,
    P: Scored,
{
    type Payload = P;

    fn decode(&self, fields: &[&str], columns: &ExtractedColumns) -> Decoded<P> {
        self(fields, columns)
    }
}

///
/// Builder for callers that only need coordinates.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinatesOnly;

impl RecordBuilder for CoordinatesOnly {
    type Payload = ();

    fn decode(&self, _fields: &[&str], _columns: &ExtractedColumns) -> Decoded<()> {
        Decoded::Accepted(())
    }
}
