//! Project store: one table file per project
//!
//! A data directory holds one file per project, `<name>.csv.gz` (or
//! `<name>.parquet` with the `parquet` feature). The project name is the
//! file name up to the first `.`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flate2::read::GzDecoder;

use super::schema::{self, ColumnKind, TableSchema};
use super::{BugMatrix, Churn, CommitRecord, FeatureSchema, Frame, ProjectTable};
use crate::{Error, Result};

/// Untyped table as read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names
    pub headers: Vec<String>,
    /// Cells, row-major
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Read a CSV table from any reader
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV is malformed
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = csv.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in csv.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Read a gzip-compressed CSV file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    pub fn read_csv_gz(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(GzDecoder::new(BufReader::new(file)))
    }

    /// Classify columns and build a typed project table
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyProject`] for a table without rows, and usage
    /// or data errors for malformed columns and cells
    pub fn into_project(self, name: &str) -> Result<ProjectTable> {
        if self.rows.is_empty() {
            return Err(Error::EmptyProject(name.to_string()));
        }

        let layout = TableSchema::infer(&self.headers, &self.rows)?;
        let feature_positions = layout.feature_positions();
        let bug_columns = layout.bug_columns();

        let schema = Arc::new(FeatureSchema::new(
            feature_positions
                .iter()
                .map(|&i| self.headers[i].clone())
                .collect(),
        ));
        let project: Arc<str> = Arc::from(name);

        let n_rows = self.rows.len();
        let mut cells: Vec<Vec<bool>> = vec![Vec::with_capacity(n_rows); bug_columns.len()];
        let mut records = Vec::with_capacity(n_rows);

        for (line, row) in self.rows.iter().enumerate() {
            let cell = |i: usize| row.get(i).map_or("", String::as_str);
            let number = |i: usize| {
                schema::parse_number(cell(i)).ok_or_else(|| {
                    Error::Data(format!(
                        "project '{name}' row {line}: column '{}' is not numeric",
                        self.headers[i]
                    ))
                })
            };

            let features = feature_positions
                .iter()
                .map(|&i| number(i))
                .collect::<Result<Vec<f64>>>()?;

            for (column, (i, _)) in cells.iter_mut().zip(&bug_columns) {
                let flag = schema::parse_bool(cell(*i)).ok_or_else(|| {
                    Error::Data(format!(
                        "project '{name}' row {line}: bug-matrix cell '{}' is not boolean",
                        cell(*i)
                    ))
                })?;
                column.push(flag);
            }

            records.push(CommitRecord {
                project: Arc::clone(&project),
                commit: cell(layout.commit).to_string(),
                committer_date: schema::parse_timestamp(cell(layout.committer_date))?,
                churn: Churn::new(number(layout.lines_added)?, number(layout.lines_deleted)?),
                schema: Arc::clone(&schema),
                features,
            });
        }

        let descriptors = bug_columns.into_iter().map(|(_, fix)| fix.clone()).collect();
        let metadata = layout
            .kinds
            .iter()
            .filter(|k| **k == ColumnKind::Metadata)
            .count();
        tracing::debug!(
            project = name,
            rows = n_rows,
            features = schema.len(),
            bug_columns = cells.len(),
            metadata,
            "classified project table"
        );

        Ok(ProjectTable {
            name: name.to_string(),
            schema,
            frame: Frame::new(records, BugMatrix::new(descriptors, cells, n_rows)?)?,
        })
    }
}

/// Project name of a data file: the file name up to the first `.`
#[must_use]
pub fn project_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.split('.').next()?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Names of all projects in a data directory, sorted
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_projects(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = project_name(&entry.path()) {
            names.push(name);
        }
    }
    names.sort();
    names.dedup();
    Ok(names)
}

fn project_file(dir: &Path, name: &str) -> Option<PathBuf> {
    let csv = dir.join(format!("{name}.csv.gz"));
    if csv.is_file() {
        return Some(csv);
    }
    let parquet = dir.join(format!("{name}.parquet"));
    (cfg!(feature = "parquet") && parquet.is_file()).then_some(parquet)
}

/// Load one project table
///
/// # Errors
///
/// Returns [`Error::UnknownProject`] if no table file exists for `name`,
/// or any load error of the file itself
pub fn load_project(dir: impl AsRef<Path>, name: &str) -> Result<ProjectTable> {
    let dir = dir.as_ref();
    let path = project_file(dir, name).ok_or_else(|| Error::UnknownProject(name.to_string()))?;

    tracing::debug!(project = name, path = %path.display(), "loading project");
    read_raw(&path)?.into_project(name)
}

#[cfg(feature = "parquet")]
fn read_raw(path: &Path) -> Result<RawTable> {
    if path.extension().is_some_and(|e| e == "parquet") {
        super::parquet::read_raw_table(path)
    } else {
        RawTable::read_csv_gz(path)
    }
}

#[cfg(not(feature = "parquet"))]
fn read_raw(path: &Path) -> Result<RawTable> {
    RawTable::read_csv_gz(path)
}

/// All project tables of a data directory, ordered by name
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: BTreeMap<String, ProjectTable>,
}

impl ProjectStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every project listed in `dir`
    ///
    /// # Errors
    ///
    /// Returns the first load error
    pub fn load_all(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut store = Self::new();
        for name in list_projects(dir)? {
            store.insert(load_project(dir, &name)?);
        }
        tracing::info!(projects = store.len(), dir = %dir.display(), "loaded project store");
        Ok(store)
    }

    /// Add or replace a project
    pub fn insert(&mut self, table: ProjectTable) {
        self.projects.insert(table.name.clone(), table);
    }

    /// Look up a project
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProject`] if absent
    pub fn get(&self, name: &str) -> Result<&ProjectTable> {
        self.projects
            .get(name)
            .ok_or_else(|| Error::UnknownProject(name.to_string()))
    }

    /// Project names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Projects in name order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectTable> {
        self.projects.values()
    }

    /// Number of projects
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl FromIterator<ProjectTable> for ProjectStore {
    fn from_iter<I: IntoIterator<Item = ProjectTable>>(iter: I) -> Self {
        let mut store = Self::new();
        for table in iter {
            store.insert(table);
        }
        store
    }
}
