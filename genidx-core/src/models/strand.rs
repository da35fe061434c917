use std::fmt::{self, Display};

///
/// Orientation of an interval. Anything other than `+` or `-` is [`Strand::Unstranded`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Strand {
    Positive,
    Negative,
    #[default]
    Unstranded,
}

impl Strand {
    pub fn as_char(&self) -> char {
        match self {
            Strand::Positive => '+',
            Strand::Negative => '-',
            Strand::Unstranded => '*',
        }
    }

    ///
    /// Normalize a strand column token. Only a single `+`, `-` or `*` character is
    /// recognized; every other token, including the empty one, becomes unstranded.
    ///
    pub fn from_token(token: &str) -> Strand {
        let mut chars = token.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Strand::from(c),
            _ => Strand::Unstranded,
        }
    }
}

impl From<char> for Strand {
    fn from(value: char) -> Self {
        match value {
            '+' => Strand::Positive,
            '-' => Strand::Negative,
            _ => Strand::Unstranded,
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        value.as_char()
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
