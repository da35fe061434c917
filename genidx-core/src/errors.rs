use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceAssemblyError {
    #[error("Unknown reference assembly: {0}. Expected one of hg19, hg38 or a chrom sizes file")]
    UnknownAssembly(String),

    #[error("Error parsing chrom sizes file at line {line}: {message}")]
    ChromSizesParseError { line: usize, message: String },

    #[error("Chrom sizes file contains no chromosomes: {0}")]
    EmptyChromSizes(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
