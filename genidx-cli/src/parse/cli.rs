use clap::{Arg, ArgAction, Command, arg};

pub const PARSE_CMD: &str = "parse";

pub fn create_parse_cli() -> Command {
    Command::new(PARSE_CMD)
        .about("Parse an interval file and print a JSON summary of its intervals, statistics and chromosomes.")
        .arg(Arg::new("file").required(true).help("Path to the interval file"))
        .arg(
            arg!(--format <FORMAT>)
                .required(false)
                .value_parser(["bed", "gtf", "vcf", "refseq"])
                .default_value("bed")
                .help("Input file format"),
        )
        .arg(
            arg!(--assembly <ASSEMBLY>)
                .required(false)
                .conflicts_with("chrom-sizes")
                .help("Built-in reference assembly to reconcile against (hg19, hg38)"),
        )
        .arg(
            Arg::new("chrom-sizes")
                .long("chrom-sizes")
                .required(false)
                .help("Path to a chrom.sizes file to reconcile against"),
        )
        .arg(
            arg!(--strict)
                .action(ArgAction::SetTrue)
                .help("Drop intervals on chromosomes that are not part of the reference assembly"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("TOML file with [parse] and per-format option sections"),
        )
        .arg(
            Arg::new("start-offset")
                .long("start-offset")
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .help("Number of header lines to skip"),
        )
        .arg(
            Arg::new("max-lines")
                .long("max-lines")
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .help("Stop after this many data lines"),
        )
        .arg(
            arg!(--delimiter <DELIMITER>)
                .required(false)
                .help("Field delimiter, a single character or `tab`"),
        )
        .arg(
            arg!(--hash <HASH>)
                .required(false)
                .value_parser(["one_at_a_time", "fnv1"])
                .help("Hash function for record keys"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Do not draw a progress bar"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
