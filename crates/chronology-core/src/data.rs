// File: crates/chronology-core/src/data.rs
// Summary: Publication/event records and the YAML (series) and CSV (single events) loaders.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ChartError, Result};

/// A year, or an inclusive span of years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearSpec {
    Scalar(i64),
    Range(i64, i64),
}

impl YearSpec {
    /// Midpoint of a range, the year itself otherwise.
    pub fn average(&self) -> f64 {
        match *self {
            YearSpec::Scalar(y) => y as f64,
            YearSpec::Range(start, end) => (start as f64 + end as f64) / 2.0,
        }
    }

    pub fn span(&self) -> f64 {
        match *self {
            YearSpec::Scalar(_) => 0.0,
            YearSpec::Range(start, end) => end as f64 - start as f64,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, YearSpec::Range(..))
    }
}

impl From<i64> for YearSpec {
    fn from(y: i64) -> Self { YearSpec::Scalar(y) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub name: Option<String>,
    pub written_in: YearSpec,
    pub set_in: YearSpec,
}

impl Event {
    pub fn new(name: Option<String>, written_in: impl Into<YearSpec>, set_in: impl Into<YearSpec>) -> Self {
        Self { name, written_in: written_in.into(), set_in: set_in.into() }
    }

    pub fn written_in_average(&self) -> f64 { self.written_in.average() }
    pub fn set_in_average(&self) -> f64 { self.set_in.average() }
}

/// A book, film or series. `series` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Publication {
    pub name: String,
    pub author: Option<String>,
    pub series: Vec<Event>,
}

// ---- on-disk shapes ---------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Scalar(i64),
    List(Vec<i64>),
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    name: Option<String>,
    written_in: RawYear,
    set_in: RawYear,
}

#[derive(Deserialize)]
struct RawPublication {
    publication: String,
    #[serde(default)]
    author: Option<String>,
    series: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct CsvRow {
    publication: String,
    author: Option<String>,
    written_in: i64,
    set_in: i64,
}

fn year_spec(raw: RawYear, path: &Path, field: &str, publication: &str) -> Result<YearSpec> {
    match raw {
        RawYear::Scalar(y) => Ok(YearSpec::Scalar(y)),
        RawYear::List(v) => match v.as_slice() {
            &[start, end] if start <= end => Ok(YearSpec::Range(start, end)),
            &[start, end] => Err(ChartError::malformed(
                path,
                format!("`{field}` of \"{publication}\" runs backwards ({start} > {end})"),
            )),
            other => Err(ChartError::malformed(
                path,
                format!("`{field}` of \"{publication}\" must be a year or [start, end], got {} values", other.len()),
            )),
        },
    }
}

fn load_series(path: &Path) -> Result<Vec<Publication>> {
    let text = std::fs::read_to_string(path)?;
    let raw: Vec<RawPublication> = serde_yaml::from_str(&text)?;
    raw.into_iter()
        .map(|p| {
            if p.series.is_empty() {
                return Err(ChartError::malformed(path, format!("\"{}\" has an empty series", p.publication)));
            }
            let series = p
                .series
                .into_iter()
                .map(|e| {
                    Ok(Event {
                        name: e.name,
                        written_in: year_spec(e.written_in, path, "written_in", &p.publication)?,
                        set_in: year_spec(e.set_in, path, "set_in", &p.publication)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Publication { name: p.publication, author: p.author, series })
        })
        .collect()
}

fn load_events(path: &Path) -> Result<Vec<Publication>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        let row = row?;
        out.push(Publication {
            name: row.publication,
            author: row.author.filter(|a| !a.is_empty()),
            series: vec![Event::new(None, row.written_in, row.set_in)],
        });
    }
    Ok(out)
}

/// Load one file, choosing the format by suffix (`.yaml`/`.yml` or `.csv`).
pub fn load_file(path: &Path) -> Result<Vec<Publication>> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    let publications = match ext.as_deref() {
        Some("yaml") | Some("yml") => load_series(path)?,
        Some("csv") => load_events(path)?,
        _ => return Err(ChartError::malformed(path, "unknown data format (expected .yaml, .yml or .csv)")),
    };
    debug!(path = %path.display(), count = publications.len(), "loaded data file");
    Ok(publications)
}

/// Load every file in order and concatenate the publications.
pub fn load_data<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Result<Vec<Publication>> {
    let mut out = Vec::new();
    let mut n_files = 0usize;
    for f in files {
        out.extend(load_file(f.as_ref())?);
        n_files += 1;
    }
    info!(files = n_files, publications = out.len(), "data loaded");
    Ok(out)
}

/// Load every regular file of `dir`, in sorted path order.
pub fn load_dir(dir: &Path) -> Result<Vec<Publication>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    files.retain(|p| p.is_file());
    files.sort();
    load_data(files)
}
