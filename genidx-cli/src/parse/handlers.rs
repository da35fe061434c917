use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use serde::{Deserialize, Serialize};

use genidx_core::{HashFunction, ReferenceAssembly, Strand};
use genidx_parse::builders::{
    BedOptions, BedPeakBuilder, GtfFeatureBuilder, GtfOptions, RefSeqGeneBuilder, RefSeqOptions,
    VcfOptions, VcfVariantBuilder,
};
use genidx_parse::{
    ChrStatistics, DatasetStatistics, ParseOptions, ParseStatus, ParsedDataset, Parser,
    RecordBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bed,
    Gtf,
    Vcf,
    RefSeq,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bed" => Ok(Format::Bed),
            "gtf" => Ok(Format::Gtf),
            "vcf" => Ok(Format::Vcf),
            "refseq" => Ok(Format::RefSeq),
            _ => bail!("Unknown file format: {}", s),
        }
    }
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Bed => "bed",
            Format::Gtf => "gtf",
            Format::Vcf => "vcf",
            Format::RefSeq => "refseq",
        }
    }

    /// Column layout preset for the format.
    pub fn parse_options(&self) -> ParseOptions {
        match self {
            Format::Bed => ParseOptions::bed(),
            Format::Gtf => ParseOptions::gtf(),
            Format::Vcf => ParseOptions::vcf(),
            Format::RefSeq => ParseOptions::refseq(),
        }
    }
}

///
/// Contents of a `--config` TOML file.
///
/// ```toml
/// [parse]
/// start_offset = 1
/// hash_function = "fnv1"
///
/// [bed]
/// value_column = 7
/// value_format = "minus_one_log10"
/// invalid_value = { use_default = 1.0 }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub parse: ParseSection,
    pub bed: BedOptions,
    pub gtf: GtfOptions,
    pub vcf: VcfOptions,
    pub refseq: RefSeqOptions,
}

///
/// Overrides applied on top of the format preset. Unset keys keep the preset value.
///
/// `single_position = true` clears the right column and `unstranded = true` clears the
/// strand column, since TOML has no way to write a missing value.
///
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseSection {
    pub chr_column: Option<usize>,
    pub left_column: Option<usize>,
    pub right_column: Option<usize>,
    pub strand_column: Option<usize>,
    pub single_position: Option<bool>,
    pub unstranded: Option<bool>,
    pub start_offset: Option<usize>,
    pub max_lines_to_read: Option<usize>,
    pub delimiter: Option<char>,
    pub hash_function: Option<HashFunction>,
    pub strict_chromosome_filtering: Option<bool>,
}

impl ParseSection {
    pub fn apply(&self, options: &mut ParseOptions) {
        if let Some(column) = self.chr_column {
            options.chr_column = column;
        }
        if let Some(column) = self.left_column {
            options.left_column = column;
        }
        if let Some(column) = self.right_column {
            options.right_column = Some(column);
        }
        if let Some(column) = self.strand_column {
            options.strand_column = Some(column);
        }
        if self.single_position == Some(true) {
            options.right_column = None;
        }
        if self.unstranded == Some(true) {
            options.strand_column = None;
        }
        if let Some(offset) = self.start_offset {
            options.start_offset = offset;
        }
        if let Some(max) = self.max_lines_to_read {
            options.max_lines_to_read = Some(max);
        }
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        if let Some(hash_function) = self.hash_function {
            options.hash_function = hash_function;
        }
        if let Some(strict) = self.strict_chromosome_filtering {
            options.strict_chromosome_filtering = strict;
        }
    }
}

impl ParseConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn parse_delimiter(token: &str) -> Result<char> {
    if token == "tab" || token == "\\t" {
        return Ok('\t');
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("--delimiter must be a single character or `tab`, got `{}`", token),
    }
}

///
/// Format preset, then the config file, then command line flags.
///
pub fn build_options(
    matches: &ArgMatches,
    format: Format,
    config: &ParseConfig,
) -> Result<ParseOptions> {
    let mut options = format.parse_options();
    config.parse.apply(&mut options);

    if let Some(offset) = matches.get_one::<usize>("start-offset") {
        options.start_offset = *offset;
    }
    if let Some(max) = matches.get_one::<usize>("max-lines") {
        options.max_lines_to_read = Some(*max);
    }
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        options.delimiter = parse_delimiter(delimiter)?;
    }
    if let Some(hash) = matches.get_one::<String>("hash") {
        options.hash_function = HashFunction::from_str(hash).map_err(|e| anyhow!(e))?;
    }
    if matches.get_flag("strict") {
        options.strict_chromosome_filtering = true;
    }

    Ok(options)
}

fn load_assembly(matches: &ArgMatches) -> Result<Option<ReferenceAssembly>> {
    if let Some(name) = matches.get_one::<String>("assembly") {
        let assembly = name
            .parse::<ReferenceAssembly>()
            .with_context(|| format!("Failed to load assembly: {}", name))?;
        return Ok(Some(assembly));
    }

    match matches.get_one::<String>("chrom-sizes") {
        Some(path) => {
            let assembly = ReferenceAssembly::from_chrom_sizes(path)
                .with_context(|| format!("Failed to load chrom sizes file: {}", path))?;
            Ok(Some(assembly))
        }
        None => Ok(None),
    }
}

fn progress_bar(hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:>16} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}%")?
            .progress_chars("##-"),
    );
    Ok(pb)
}

#[derive(Debug, Serialize)]
pub struct ChromosomeSummary {
    pub name: String,
    pub positive: usize,
    pub negative: usize,
    pub unstranded: usize,
    pub statistics: ChrStatistics,
}

#[derive(Debug, Serialize)]
pub struct ParseSummary {
    pub file: String,
    pub format: &'static str,
    pub file_hash_key: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
    pub intervals: usize,
    pub dropped_lines: usize,
    pub substituted_values: usize,
    pub statistics: DatasetStatistics,
    pub chromosomes: Vec<ChromosomeSummary>,
    pub excess_chromosomes: Vec<String>,
    pub missing_chromosomes: Vec<String>,
    pub messages: Vec<String>,
}

impl ParseSummary {
    pub fn new<P>(
        dataset: &ParsedDataset<P>,
        format: Format,
        assembly: Option<&ReferenceAssembly>,
    ) -> Self {
        let chromosomes = dataset
            .chromosome_names()
            .into_iter()
            .filter_map(|name| {
                dataset.chromosome(name).map(|bucket| {
                    let count = |strand| bucket.intervals(strand).map_or(0, |i| i.len());
                    ChromosomeSummary {
                        name: name.clone(),
                        positive: count(Strand::Positive),
                        negative: count(Strand::Negative),
                        unstranded: count(Strand::Unstranded),
                        statistics: bucket.statistics().clone(),
                    }
                })
            })
            .collect();

        ParseSummary {
            file: dataset.path().display().to_string(),
            format: format.as_str(),
            file_hash_key: dataset.file_hash_key(),
            assembly: assembly.map(|a| a.name().to_string()),
            intervals: dataset.intervals_count(),
            dropped_lines: dataset.dropped_lines(),
            substituted_values: dataset.substituted_values(),
            statistics: dataset.statistics().clone(),
            chromosomes,
            excess_chromosomes: dataset.excess_chromosomes().to_vec(),
            missing_chromosomes: dataset.missing_chromosomes().to_vec(),
            messages: dataset.messages().to_vec(),
        }
    }
}

fn run<B: RecordBuilder>(
    parser: Parser<B>,
    assembly: Option<ReferenceAssembly>,
    file: &Path,
    format: Format,
    progress: &ProgressBar,
) -> Result<ParseSummary> {
    let parser = match assembly {
        Some(assembly) => parser.with_assembly(assembly),
        None => parser,
    };

    let dataset = parser.parse_with_progress(file, |status: ParseStatus| {
        progress.set_message(status.state.to_string());
        progress.set_position(status.percent as u64);
    })?;
    progress.finish_and_clear();

    Ok(ParseSummary::new(&dataset, format, parser.assembly()))
}

pub fn parse_file(
    file: &Path,
    format: Format,
    options: ParseOptions,
    config: ParseConfig,
    assembly: Option<ReferenceAssembly>,
    progress: &ProgressBar,
) -> Result<ParseSummary> {
    match format {
        Format::Bed => {
            let parser = Parser::new(options, BedPeakBuilder::new(config.bed));
            run(parser, assembly, file, format, progress)
        }
        Format::Gtf => {
            let parser = Parser::new(options, GtfFeatureBuilder::new(config.gtf));
            run(parser, assembly, file, format, progress)
        }
        Format::Vcf => {
            let parser = Parser::new(options, VcfVariantBuilder::new(config.vcf));
            run(parser, assembly, file, format, progress)
        }
        Format::RefSeq => {
            let parser = Parser::new(options, RefSeqGeneBuilder::new(config.refseq));
            run(parser, assembly, file, format, progress)
        }
    }
}

pub fn run_parse(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .expect("A path to an interval file is required.");
    let format: Format = matches
        .get_one::<String>("format")
        .expect("--format has a default")
        .parse()?;
    let output_path = matches.get_one::<String>("output");

    let config = match matches.get_one::<String>("config") {
        Some(path) => ParseConfig::from_file(Path::new(path))?,
        None => ParseConfig::default(),
    };
    let options = build_options(matches, format, &config)?;
    let assembly = load_assembly(matches)?;

    if options.strict_chromosome_filtering && assembly.is_none() {
        warn!("Strict chromosome filtering needs --assembly or --chrom-sizes, keeping every chromosome.");
    }

    let progress = progress_bar(matches.get_flag("no-progress"))?;
    let summary = parse_file(Path::new(file), format, options, config, assembly, &progress)?;

    let json =
        serde_json::to_string_pretty(&summary).context("Failed to serialize output to JSON")?;

    match output_path {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            eprintln!("Output written to {}", p);
        }
        None => {
            io::stdout().write_all(json.as_bytes())?;
            println!();
        }
    }

    Ok(())
}
