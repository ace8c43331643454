//! In-memory postal code reference table.
//!
//! The table is parsed once from `ZIP,LAT,LNG` text and is read-only
//! afterwards. Parsing is lenient by default: malformed rows are dropped and
//! counted in a [`BuildReport`] rather than failing the build.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::models::Coordinate;

/// Errors raised by strict parsing or dataset loading
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row at line {line}: {reason}")]
    Malformed { line: usize, reason: SkipReason },
}

/// Why a data row was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields,
    InvalidCoordinate,
    EmptyCode,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields => write!(f, "fewer than 3 fields"),
            SkipReason::InvalidCoordinate => write!(f, "invalid latitude/longitude"),
            SkipReason::EmptyCode => write!(f, "empty zip code"),
        }
    }
}

/// Row counts collected while building a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub loaded: usize,
    pub overwritten: usize,
    pub too_few_fields: usize,
    pub invalid_coordinate: usize,
    pub empty_code: usize,
}

impl BuildReport {
    pub fn skipped(&self) -> usize {
        self.too_few_fields + self.invalid_coordinate + self.empty_code
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::TooFewFields => self.too_few_fields += 1,
            SkipReason::InvalidCoordinate => self.invalid_coordinate += 1,
            SkipReason::EmptyCode => self.empty_code += 1,
        }
    }
}

/// Exact-match lookup from zip code to coordinate
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    entries: HashMap<String, Coordinate>,
}

impl ReferenceStore {
    /// Build a store from raw CSV text. Never fails; bad rows are dropped.
    pub fn build(raw: &str) -> Self {
        Self::build_with_report(raw).0
    }

    /// Build a store and return the row counts alongside it
    pub fn build_with_report(raw: &str) -> (Self, BuildReport) {
        let mut store = Self::default();
        let mut report = BuildReport::default();

        for (line_no, line) in data_lines(raw) {
            match parse_row(line) {
                Ok((code, coord)) => {
                    if store.entries.insert(code.to_string(), coord).is_some() {
                        report.overwritten += 1;
                    }
                    report.loaded += 1;
                }
                Err(reason) => {
                    tracing::debug!("Skipping zip row {}: {} ({:?})", line_no, reason, line);
                    report.record_skip(reason);
                }
            }
        }

        tracing::info!(
            "Reference store built: {} zips ({} rows loaded, {} overwritten, {} skipped)",
            store.len(),
            report.loaded,
            report.overwritten,
            report.skipped()
        );

        (store, report)
    }

    /// Build a store, failing on the first malformed row
    pub fn build_strict(raw: &str) -> Result<Self, DatasetError> {
        let mut store = Self::default();

        for (line_no, line) in data_lines(raw) {
            let (code, coord) = parse_row(line)
                .map_err(|reason| DatasetError::Malformed { line: line_no, reason })?;
            store.entries.insert(code.to_string(), coord);
        }

        tracing::info!("Reference store built (strict): {} zips", store.len());
        Ok(store)
    }

    /// Read a dataset file and build a store from it
    pub fn load<P: AsRef<Path>>(path: P, strict: bool) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Read {} bytes from {}", raw.len(), path.as_ref().display());
        if strict {
            Self::build_strict(&raw)
        } else {
            Ok(Self::build(&raw))
        }
    }

    /// Look up a zip code verbatim
    pub fn get(&self, code: &str) -> Option<Coordinate> {
        self.entries.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-empty trimmed data lines with their 1-based line numbers.
/// A first line starting with `ZIP` is treated as a header.
fn data_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    let body = raw.trim();
    let has_header = body.starts_with("ZIP");
    // Line numbers are relative to the original text
    let leading = raw.len() - raw.trim_start().len();
    let offset = raw[..leading].matches('\n').count();

    body.split('\n')
        .enumerate()
        .skip(usize::from(has_header))
        .map(move |(idx, line)| (idx + offset + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_row(line: &str) -> Result<(&str, Coordinate), SkipReason> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(SkipReason::TooFewFields);
    }

    let code = fields[0];
    if code.is_empty() {
        return Err(SkipReason::EmptyCode);
    }

    let lat = fields[1].parse::<f64>().ok();
    let lng = fields[2].parse::<f64>().ok();
    let coord = match (lat, lng) {
        (Some(lat), Some(lng)) => Coordinate::new(lat, lng),
        _ => None,
    };

    coord.map(|c| (code, c)).ok_or(SkipReason::InvalidCoordinate)
}
