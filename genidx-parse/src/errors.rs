use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("The file `{0}` does not exist or is inaccessible.")]
    FileNotFound(String),

    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
