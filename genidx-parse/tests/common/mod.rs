#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use genidx_parse::ParseOptions;
use genidx_parse::builders::BedOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Chr,
    Left,
    Right,
    Strand,
    Name,
    Value,
}

///
/// Column assignment for generated peak files.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: BTreeMap<Field, usize>,
}

///
/// Builds a [`ColumnLayout`] where no two fields share a column: assigning a column that
/// is already taken moves the field holding it to `max + 1`.
///
#[derive(Debug, Clone)]
pub struct ColumnLayoutBuilder {
    columns: BTreeMap<Field, usize>,
}

impl Default for ColumnLayoutBuilder {
    fn default() -> Self {
        let columns = [
            (Field::Chr, 0),
            (Field::Left, 1),
            (Field::Right, 2),
            (Field::Name, 3),
            (Field::Value, 4),
        ]
        .into_iter()
        .collect();
        ColumnLayoutBuilder { columns }
    }
}

impl ColumnLayoutBuilder {
    pub fn set(mut self, field: Field, column: usize) -> Self {
        let holder = self
            .columns
            .iter()
            .find(|(f, c)| **c == column && **f != field)
            .map(|(f, _)| *f);

        self.columns.insert(field, column);

        if let Some(holder) = holder {
            let max = self.columns.values().copied().max().unwrap_or(0);
            self.columns.insert(holder, max + 1);
        }
        self
    }

    pub fn build(self) -> ColumnLayout {
        ColumnLayout {
            columns: self.columns,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeakLine {
    pub chr: String,
    pub left: i64,
    pub right: i64,
    pub strand: char,
    pub name: String,
    pub value: f64,
}

impl PeakLine {
    pub fn new(chr: &str, left: i64, right: i64, name: &str, value: f64) -> Self {
        PeakLine {
            chr: chr.to_string(),
            left,
            right,
            strand: '*',
            name: name.to_string(),
            value,
        }
    }

    pub fn with_strand(mut self, strand: char) -> Self {
        self.strand = strand;
        self
    }
}

impl ColumnLayout {
    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn width(&self) -> usize {
        self.columns.values().copied().max().map_or(0, |m| m + 1)
    }

    pub fn render(&self, peak: &PeakLine) -> String {
        let mut tokens = vec![".".to_string(); self.width()];
        for (field, column) in &self.columns {
            tokens[*column] = match field {
                Field::Chr => peak.chr.clone(),
                Field::Left => peak.left.to_string(),
                Field::Right => peak.right.to_string(),
                Field::Strand => peak.strand.to_string(),
                Field::Name => peak.name.clone(),
                Field::Value => peak.value.to_string(),
            };
        }
        tokens.join("\t")
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            chr_column: self.columns[&Field::Chr],
            left_column: self.columns[&Field::Left],
            right_column: self.column(Field::Right),
            strand_column: self.column(Field::Strand),
            ..ParseOptions::default()
        }
    }

    pub fn bed_options(&self) -> BedOptions {
        BedOptions {
            name_column: self.column(Field::Name),
            value_column: self.columns[&Field::Value],
            ..BedOptions::default()
        }
    }
}

///
/// The four peaks used throughout the tests, one per chromosome.
///
pub fn four_peaks() -> Vec<PeakLine> {
    vec![
        PeakLine::new("chr1", 10, 20, "GeUtilities_00", 0.01),
        PeakLine::new("chr2", 30, 40, "GeUtilities_01", 0.1),
        PeakLine::new("chr3", 50, 60, "GeUtilities_02", 0.001),
        PeakLine::new("chr4", 70, 80, "GeUtilities_03", 0.0001),
    ]
}

pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> PathBuf {
    let path = path.as_ref();
    let mut file = File::create(path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path.to_path_buf()
}

pub fn write_peaks<P: AsRef<Path>>(path: P, layout: &ColumnLayout, peaks: &[PeakLine]) -> PathBuf {
    let lines: Vec<String> = peaks.iter().map(|p| layout.render(p)).collect();
    write_lines(path, &lines)
}

pub fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data")
        .join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_conflicting_column_moves_to_max_plus_one() {
        let layout = ColumnLayoutBuilder::default().set(Field::Value, 0).build();
        assert_eq!(layout.column(Field::Value), Some(0));
        assert_eq!(layout.column(Field::Chr), Some(5));
        assert_eq!(layout.width(), 6);
    }
}
