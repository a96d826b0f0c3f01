//! Grade Data Loader Module
//! Reads a single student's grade record from a JSON file.

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name shown when the record carries no student name.
pub const DEFAULT_STUDENT_NAME: &str = "Elev";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Grade file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse grade data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One student's grades: subject -> (assessment -> score on the 0-12 scale).
///
/// Subject and assessment order follow the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeRecord {
    #[serde(default)]
    pub student: Option<String>,
    pub subjects: IndexMap<String, IndexMap<String, f64>>,
}

impl GradeRecord {
    /// Student name for display, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        self.student.as_deref().unwrap_or(DEFAULT_STUDENT_NAME)
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

/// Handles grade file loading. Stateless: each call reads the file once.
pub struct DataLoader;

impl DataLoader {
    /// Load and parse a grade record from `file_path`.
    pub fn load_grade_data(file_path: &Path) -> Result<GradeRecord, LoaderError> {
        debug!(path = %file_path.display(), "reading grade file");

        let contents = fs::read_to_string(file_path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoaderError::NotFound {
                    path: file_path.to_path_buf(),
                }
            } else {
                LoaderError::Io {
                    path: file_path.to_path_buf(),
                    source,
                }
            }
        })?;

        let record = Self::parse_grade_data(&contents)?;
        info!(
            student = record.display_name(),
            subjects = record.subject_count(),
            "loaded grade data"
        );
        Ok(record)
    }

    /// Parse a grade record from JSON text.
    pub fn parse_grade_data(contents: &str) -> Result<GradeRecord, LoaderError> {
        Ok(serde_json::from_str(contents)?)
    }
}
