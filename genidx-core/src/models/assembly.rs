use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::consts::{HG19_CHROM_SIZES, HG19_NAME, HG38_CHROM_SIZES, HG38_NAME};
use crate::errors::ReferenceAssemblyError;

///
/// Expected chromosomes of a reference assembly and their lengths.
///
/// Used for reconciliation and coverage only; parsing never depends on it.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceAssembly {
    name: String,
    sizes: HashMap<String, u64>,
}

impl ReferenceAssembly {
    pub fn new(name: &str, sizes: HashMap<String, u64>) -> Self {
        ReferenceAssembly {
            name: name.to_string(),
            sizes,
        }
    }

    ///
    /// Read a reference assembly from a `chrom.sizes` file: whitespace separated
    /// chromosome name and length per line. Blank lines and `#` comments are skipped.
    ///
    /// # Arguments
    /// - path: path to the chrom sizes file
    pub fn from_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<Self, ReferenceAssemblyError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let mut sizes: HashMap<String, u64> = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(chr), Some(size)) = (parts.next(), parts.next()) else {
                return Err(ReferenceAssemblyError::ChromSizesParseError {
                    line: index + 1,
                    message: "expected a chromosome name and a length".to_string(),
                });
            };

            let size = size.parse::<u64>().map_err(|_| {
                ReferenceAssemblyError::ChromSizesParseError {
                    line: index + 1,
                    message: format!("invalid chromosome length `{}`", size),
                }
            })?;

            sizes.insert(chr.to_string(), size);
        }

        if sizes.is_empty() {
            return Err(ReferenceAssemblyError::EmptyChromSizes(
                path.display().to_string(),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = name.strip_suffix(".chrom.sizes").unwrap_or(&name).to_string();

        Ok(ReferenceAssembly { name, sizes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    ///
    /// Length of a chromosome, matched exactly as stored.
    ///
    pub fn length(&self, chr: &str) -> Option<u64> {
        self.sizes.get(chr).copied()
    }

    pub fn contains(&self, chr: &str) -> bool {
        self.sizes.contains_key(chr)
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &String> {
        self.sizes.keys()
    }

    pub fn sizes(&self) -> &HashMap<String, u64> {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    fn from_table(name: &str, table: &[(&str, u64)]) -> Self {
        let sizes = table
            .iter()
            .map(|(chr, size)| (chr.to_string(), *size))
            .collect();
        ReferenceAssembly::new(name, sizes)
    }
}

impl FromStr for ReferenceAssembly {
    type Err = ReferenceAssemblyError;

    ///
    /// Look up a built-in assembly by name (`hg19`/`GRCh37`, `hg38`/`GRCh38`).
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hg19" | "grch37" => Ok(ReferenceAssembly::from_table(HG19_NAME, &HG19_CHROM_SIZES)),
            "hg38" | "grch38" => Ok(ReferenceAssembly::from_table(HG38_NAME, &HG38_CHROM_SIZES)),
            _ => Err(ReferenceAssemblyError::UnknownAssembly(s.to_string())),
        }
    }
}

impl From<HashMap<String, u64>> for ReferenceAssembly {
    fn from(sizes: HashMap<String, u64>) -> Self {
        ReferenceAssembly::new("custom", sizes)
    }
}
