use std::fmt::{self, Display};

///
/// Stage of a single parse.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserState {
    Idle,
    HeaderSkip,
    Reading,
    Finalizing,
    Done,
}

impl Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Idle => "Idle",
            ParserState::HeaderSkip => "Skipping header",
            ParserState::Reading => "Reading",
            ParserState::Finalizing => "Finalizing",
            ParserState::Done => "Done",
        };
        write!(f, "{}", name)
    }
}

///
/// Progress event emitted after every line. Purely observational.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStatus {
    pub state: ParserState,
    /// Share of the file's bytes consumed so far, 0 to 100
    pub percent: u8,
}

impl ParseStatus {
    pub fn new(state: ParserState, bytes_read: u64, file_size: u64) -> Self {
        ParseStatus {
            state,
            percent: percent_consumed(bytes_read, file_size),
        }
    }
}

impl Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ... {}%", self.state, self.percent)
    }
}

///
/// `round(bytes_read * 100 / file_size)`, clamped to 100. An empty file counts as fully read.
///
pub fn percent_consumed(bytes_read: u64, file_size: u64) -> u8 {
    if file_size == 0 {
        return 100;
    }
    let percent = (bytes_read as f64 * 100.0 / file_size as f64).round();
    percent.min(100.0) as u8
}
