//! The streaming parse engine.
//!
//! A parse moves through `Idle → HeaderSkip → Reading → Finalizing → Done`. Header lines
//! are skipped purely by count, data lines are read one at a time until the end of the
//! file or the configured line cap, and each line is turned into a [`LineOutcome`] by a
//! side-effect free step. The loop then applies the outcome to the dataset and the
//! [`ParseCounters`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use genidx_core::hashing::{one_at_a_time, record_key_input};
use genidx_core::{Interval, ReferenceAssembly, Strand};

use crate::columns::ColumnExtractor;
use crate::errors::ParseError;
use crate::models::ParsedDataset;
use crate::options::ParseOptions;
use crate::progress::{ParseStatus, ParserState};
use crate::reconcile::AssemblyReconciler;
use crate::record::{Decoded, RecordBuilder};

///
/// What a single line turned into.
///
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome<P> {
    /// Empty or whitespace-only; ignored without counting as a drop.
    Blank,
    Dropped(String),
    Accepted(AcceptedRecord<P>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedRecord<P> {
    pub chromosome: String,
    pub strand: Strand,
    pub interval: Interval<P>,
    /// A field was replaced with its default value.
    pub substituted: bool,
}

///
/// Per-parse line counters.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseCounters {
    pub data_lines: usize,
    pub dropped_lines: usize,
    pub substituted_values: usize,
}

impl ParseCounters {
    pub fn record<P>(&mut self, outcome: &LineOutcome<P>) {
        match outcome {
            LineOutcome::Blank => {}
            LineOutcome::Dropped(_) => {
                self.data_lines += 1;
                self.dropped_lines += 1;
            }
            LineOutcome::Accepted(record) => {
                self.data_lines += 1;
                if record.substituted {
                    self.substituted_values += 1;
                }
            }
        }
    }

    ///
    /// Summary message for the head of the message log, if anything was dropped or
    /// substituted.
    ///
    pub fn summary(&self) -> Option<String> {
        if self.dropped_lines == 0 && self.substituted_values == 0 {
            return None;
        }
        Some(format!(
            "Read {} data lines: dropped {} invalid lines and used the default value for {} records.",
            self.data_lines, self.dropped_lines, self.substituted_values
        ))
    }
}

///
/// Parses files into [`ParsedDataset`]s.
///
/// A parser holds only configuration, so one instance can parse any number of files,
/// each parse owning its own dataset and counters.
///
pub struct Parser<B: RecordBuilder> {
    options: ParseOptions,
    extractor: ColumnExtractor,
    builder: B,
    assembly: Option<ReferenceAssembly>,
}

impl<B: RecordBuilder> Parser<B> {
    pub fn new(options: ParseOptions, builder: B) -> Self {
        let extractor = ColumnExtractor::from(&options);
        Parser {
            options,
            extractor,
            builder,
            assembly: None,
        }
    }

    ///
    /// Reconcile against (and compute coverage from) a reference assembly.
    ///
    pub fn with_assembly(mut self, assembly: ReferenceAssembly) -> Self {
        self.assembly = Some(assembly);
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn assembly(&self) -> Option<&ReferenceAssembly> {
        self.assembly.as_ref()
    }

    ///
    /// Parse a file.
    ///
    /// # Arguments
    /// - path: path to the file on disk
    ///
    /// # Errors
    /// Only a missing or unreadable file fails the parse; malformed lines are dropped
    /// and reported in [`ParsedDataset::messages`].
    pub fn parse<T: AsRef<Path>>(&self, path: T) -> Result<ParsedDataset<B::Payload>, ParseError> {
        self.parse_with_progress(path, |_| {})
    }

    ///
    /// Parse a file, reporting a [`ParseStatus`] after every line.
    ///
    pub fn parse_with_progress<T, F>(
        &self,
        path: T,
        mut on_status: F,
    ) -> Result<ParsedDataset<B::Payload>, ParseError>
    where
        T: AsRef<Path>,
        F: FnMut(ParseStatus),
    {
        self.options.validate()?;

        let path = path.as_ref();
        let not_found = || ParseError::FileNotFound(path.display().to_string());
        if !path.is_file() {
            return Err(not_found());
        }
        let file = File::open(path).map_err(|_| not_found())?;
        let file_size = file.metadata()?.len();

        let absolute = std::path::absolute(path)?;
        let file_hash_key = one_at_a_time(&absolute.to_string_lossy());

        let mut dataset = ParsedDataset::new(path, file_hash_key);
        let mut counters = ParseCounters::default();
        let mut reader = BufReader::new(file);
        let mut buffer: Vec<u8> = Vec::new();
        let mut bytes_read: u64 = 0;
        let mut line_number: usize = 0;

        on_status(ParseStatus::new(ParserState::Idle, 0, file_size));

        debug!("{}: skipping {} header lines", path.display(), self.options.start_offset);
        for _ in 0..self.options.start_offset {
            buffer.clear();
            let n = reader.read_until(b'\n', &mut buffer)?;
            if n == 0 {
                break;
            }
            bytes_read += n as u64;
            line_number += 1;
            on_status(ParseStatus::new(ParserState::HeaderSkip, bytes_read, file_size));
        }

        debug!("{}: reading from line {}", path.display(), line_number + 1);
        loop {
            if self
                .options
                .max_lines_to_read
                .is_some_and(|max| counters.data_lines >= max)
            {
                break;
            }

            buffer.clear();
            let n = reader.read_until(b'\n', &mut buffer)?;
            if n == 0 {
                break;
            }
            bytes_read += n as u64;
            line_number += 1;

            let line = String::from_utf8_lossy(&buffer);
            let line = line.trim_end_matches(&['\n', '\r'][..]);
            let outcome = self.process_line(line, line_number, file_hash_key);
            counters.record(&outcome);

            match outcome {
                LineOutcome::Blank => {}
                LineOutcome::Dropped(reason) => {
                    dataset.messages.push(format!("Line {}: {}", line_number, reason));
                }
                LineOutcome::Accepted(record) => {
                    dataset.insert(record.chromosome, record.strand, record.interval);
                }
            }

            on_status(ParseStatus::new(ParserState::Reading, bytes_read, file_size));
        }

        on_status(ParseStatus::new(ParserState::Finalizing, bytes_read, file_size));
        self.finalize(&mut dataset, &counters);

        info!(
            "{}: {} intervals on {} chromosomes, {} lines dropped, {} default values used",
            path.display(),
            dataset.intervals_count,
            dataset.chromosomes.len(),
            counters.dropped_lines,
            counters.substituted_values
        );

        on_status(ParseStatus::new(ParserState::Done, bytes_read, file_size));
        Ok(dataset)
    }

    ///
    /// Turn one line into an outcome. Reads nothing but its arguments and the parser
    /// configuration.
    ///
    /// # Arguments
    /// - line: the line without its line terminator
    /// - line_number: 1-based line number in the file
    /// - file_hash_key: key of the file, folded into the record key
    pub fn process_line(
        &self,
        line: &str,
        line_number: usize,
        file_hash_key: u32,
    ) -> LineOutcome<B::Payload> {
        if line.trim().is_empty() {
            return LineOutcome::Blank;
        }

        let fields: Vec<&str> = line.split(self.options.delimiter).collect();

        let columns = match self.extractor.extract(&fields) {
            Ok(columns) => columns,
            Err(reason) => return LineOutcome::Dropped(reason),
        };

        if self.options.strict_chromosome_filtering {
            if let Some(assembly) = &self.assembly {
                if !AssemblyReconciler::new(assembly).admits(&columns.chromosome) {
                    return LineOutcome::Dropped(format!(
                        "chromosome `{}` is not part of the {} assembly",
                        columns.chromosome,
                        assembly.name()
                    ));
                }
            }
        }

        let (payload, substituted) = match self.builder.decode(&fields, &columns) {
            Decoded::Accepted(payload) => (payload, false),
            Decoded::Substituted(payload) => (payload, true),
            Decoded::Dropped(reason) => return LineOutcome::Dropped(reason),
        };

        let key_input = record_key_input(file_hash_key, columns.left, columns.right, line_number);
        let hash_key = self.options.hash_function.hash(&key_input);

        LineOutcome::Accepted(AcceptedRecord {
            chromosome: columns.chromosome,
            strand: columns.strand,
            interval: Interval::new(columns.left, columns.right, hash_key, payload),
            substituted,
        })
    }

    fn finalize(&self, dataset: &mut ParsedDataset<B::Payload>, counters: &ParseCounters) {
        let mut covered_length: u64 = 0;
        for (chr, bucket) in dataset.chromosomes.iter_mut() {
            let length = self.assembly.as_ref().and_then(|a| a.length(chr));
            covered_length += length.unwrap_or(0);
            bucket.finalize(length);
        }

        let reference_length = self.assembly.as_ref().map(|_| covered_length);
        let intervals = dataset.chromosomes.values().flat_map(|bucket| bucket.iter());
        dataset.statistics.finalize(intervals, reference_length);

        if let Some(assembly) = &self.assembly {
            let reconciliation = AssemblyReconciler::new(assembly)
                .reconcile(dataset.chromosomes.keys().map(|chr| chr.as_str()));

            if !reconciliation.excess.is_empty() {
                warn!(
                    "{}: chromosomes not in the {} assembly: {}",
                    dataset.path.display(),
                    assembly.name(),
                    reconciliation.excess.join(", ")
                );
            }
            if !reconciliation.missing.is_empty() {
                debug!(
                    "{}: {} assembly chromosomes not in the file: {}",
                    dataset.path.display(),
                    assembly.name(),
                    reconciliation.missing.join(", ")
                );
            }

            dataset.excess_chromosomes = reconciliation.excess;
            dataset.missing_chromosomes = reconciliation.missing;
        }

        dataset.dropped_lines = counters.dropped_lines;
        dataset.substituted_values = counters.substituted_values;
        if let Some(summary) = counters.summary() {
            dataset.messages.insert(0, summary);
        }
    }
}
