use std::collections::HashMap;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use genidx_core::utils::karyotype_cmp;
use genidx_core::{Interval, Scored, Strand};

use crate::statistics::{ChrStatistics, DatasetStatistics};

///
/// Intervals of one chromosome, partitioned by strand, with their statistics.
///
/// Buckets are only created for chromosomes with at least one accepted interval.
///
#[derive(Debug, Clone)]
pub struct ChromosomeBucket<P> {
    strands: HashMap<Strand, Vec<Interval<P>>>,
    statistics: ChrStatistics,
}

impl<P> Default for ChromosomeBucket<P> {
    fn default() -> Self {
        ChromosomeBucket {
            strands: HashMap::new(),
            statistics: ChrStatistics::default(),
        }
    }
}

impl<P: Scored> ChromosomeBucket<P> {
    pub(crate) fn push(&mut self, strand: Strand, interval: Interval<P>) {
        self.statistics.accumulate(&interval);
        self.strands.entry(strand).or_default().push(interval);
    }

    pub(crate) fn finalize(&mut self, reference_length: Option<u64>) {
        let intervals = self.strands.values().flatten();
        self.statistics.finalize(intervals, reference_length);
    }
}

impl<P> ChromosomeBucket<P> {
    ///
    /// Intervals on one strand, in file order.
    ///
    pub fn intervals(&self, strand: Strand) -> Option<&[Interval<P>]> {
        self.strands.get(&strand).map(|v| v.as_slice())
    }

    pub fn strands(&self) -> impl Iterator<Item = (&Strand, &Vec<Interval<P>>)> {
        self.strands.iter()
    }

    ///
    /// Iterate every interval of the chromosome, strand by strand.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &Interval<P>> + Clone {
        self.strands.values().flatten()
    }

    pub fn statistics(&self) -> &ChrStatistics {
        &self.statistics
    }

    pub fn len(&self) -> usize {
        self.strands.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// Everything read from one file: intervals indexed by chromosome and strand,
/// statistics, reconciliation results and the diagnostic log.
///
/// Returned by [`Parser::parse`](crate::Parser::parse) fully finalized; it exposes no
/// way to change it afterwards.
///
#[derive(Debug, Clone)]
pub struct ParsedDataset<P> {
    pub(crate) path: PathBuf,
    pub(crate) file_hash_key: u32,
    pub(crate) chromosomes: HashMap<String, ChromosomeBucket<P>>,
    pub(crate) excess_chromosomes: Vec<String>,
    pub(crate) missing_chromosomes: Vec<String>,
    pub(crate) messages: Vec<String>,
    pub(crate) intervals_count: usize,
    pub(crate) dropped_lines: usize,
    pub(crate) substituted_values: usize,
    pub(crate) statistics: DatasetStatistics,
}

impl<P> ParsedDataset<P> {
    pub(crate) fn new(path: &Path, file_hash_key: u32) -> Self {
        ParsedDataset {
            path: path.to_path_buf(),
            file_hash_key,
            chromosomes: HashMap::new(),
            excess_chromosomes: Vec::new(),
            missing_chromosomes: Vec::new(),
            messages: Vec::new(),
            intervals_count: 0,
            dropped_lines: 0,
            substituted_values: 0,
            statistics: DatasetStatistics::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_hash_key(&self) -> u32 {
        self.file_hash_key
    }

    pub fn chromosomes(&self) -> &HashMap<String, ChromosomeBucket<P>> {
        &self.chromosomes
    }

    pub fn chromosome(&self, chr: &str) -> Option<&ChromosomeBucket<P>> {
        self.chromosomes.get(chr)
    }

    ///
    /// Chromosome names in karyotype order.
    ///
    pub fn chromosome_names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.chromosomes.keys().collect();
        names.sort_by(|a, b| karyotype_cmp(a, b));
        names
    }

    ///
    /// Iterate every interval of the dataset with its chromosome and strand.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&String, Strand, &Interval<P>)> {
        self.chromosomes.iter().flat_map(|(chr, bucket)| {
            bucket.strands().flat_map(move |(strand, intervals)| {
                intervals.iter().map(move |i| (chr, *strand, i))
            })
        })
    }

    pub fn excess_chromosomes(&self) -> &[String] {
        &self.excess_chromosomes
    }

    pub fn missing_chromosomes(&self) -> &[String] {
        &self.missing_chromosomes
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn intervals_count(&self) -> usize {
        self.intervals_count
    }

    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    pub fn substituted_values(&self) -> usize {
        self.substituted_values
    }

    pub fn statistics(&self) -> &DatasetStatistics {
        &self.statistics
    }

    pub fn is_empty(&self) -> bool {
        self.intervals_count == 0
    }
}

impl<P: Scored> ParsedDataset<P> {
    pub(crate) fn insert(&mut self, chromosome: String, strand: Strand, interval: Interval<P>) {
        self.statistics.accumulate(&interval);
        self.intervals_count += 1;
        self.chromosomes
            .entry(chromosome)
            .or_default()
            .push(strand, interval);
    }
}

impl<P> Display for ParsedDataset<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParsedDataset with {} intervals on {} chromosomes.",
            self.intervals_count,
            self.chromosomes.len()
        )
    }
}
