//! Dashboard configuration, read from an optional TOML file beside the program.

use crate::gui::Theme;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "elevdashboard.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Grade file; relative paths are looked up beside the program first.
    pub data_file: PathBuf,
    pub window_title: String,
    pub theme: Theme,
    /// Theme applied by the header's theme button.
    pub alternate_theme: Theme,
    /// Upper bound of the grade axis.
    pub grade_scale_max: f64,
    /// Bar colours as `#RRGGBB`, cycled per subject.
    pub palette: Vec<String>,
    /// Append the overall average to the overview chart.
    pub show_overall: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("peter_jensen_grades.json"),
            window_title: "Elevdashboard".to_string(),
            theme: Theme::Flatly,
            alternate_theme: Theme::Cosmo,
            grade_scale_max: 12.0,
            palette: vec![
                "#4CB5F5".to_string(),
                "#7BC043".to_string(),
                "#FFA500".to_string(),
            ],
            show_overall: true,
        }
    }
}

impl DashboardConfig {
    /// Load the config file in `dir`, or defaults when it does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let config: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Location of the grade file.
    ///
    /// Relative paths are tried beside the executable, then in the crate
    /// directory and the working directory. When none exists the path beside
    /// the executable is returned, so the load error names it.
    pub fn data_path(&self, program_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            return self.data_file.clone();
        }

        let beside_program = program_dir.join(&self.data_file);
        if beside_program.exists() {
            return beside_program;
        }

        let fallbacks = [
            Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
            std::env::current_dir().ok(),
        ];
        for dir in fallbacks.into_iter().flatten() {
            let candidate = dir.join(&self.data_file);
            if candidate.exists() {
                debug!(path = %candidate.display(), "grade file not beside program, using fallback");
                return candidate;
            }
        }

        beside_program
    }
}

/// Directory holding the running executable.
pub fn program_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
