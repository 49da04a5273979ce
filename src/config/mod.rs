use crate::errors::{AppError, AppResult};
use crate::models::{Rgba, VacationStatus};
use crate::utils::path::resolve_data_path;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `init`; `config --check` reports the ones missing from a file.
pub const KNOWN_KEYS: [&str; 5] = [
    "data_file",
    "urgent_days",
    "border_darken",
    "chart_width",
    "palette",
];

/// Fill colors of the vacation timeline, one per status plus the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_done")]
    pub done: Rgba,
    #[serde(default = "default_todo_urgent")]
    pub todo_urgent: Rgba,
    #[serde(default = "default_todo")]
    pub todo: Rgba,
    #[serde(default = "default_in_progress")]
    pub in_progress: Rgba,
    #[serde(default = "default_waiting")]
    pub waiting: Rgba,
    #[serde(default = "default_other")]
    pub other: Rgba,
}

fn default_done() -> Rgba {
    Rgba::new(46, 204, 113, 0.9)
}
fn default_todo_urgent() -> Rgba {
    Rgba::new(231, 76, 60, 0.9)
}
fn default_todo() -> Rgba {
    Rgba::new(189, 195, 199, 0.9)
}
fn default_in_progress() -> Rgba {
    Rgba::new(52, 152, 219, 0.9)
}
fn default_waiting() -> Rgba {
    Rgba::new(241, 196, 15, 0.9)
}
fn default_other() -> Rgba {
    Rgba::new(149, 165, 166, 0.9)
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            done: default_done(),
            todo_urgent: default_todo_urgent(),
            todo: default_todo(),
            in_progress: default_in_progress(),
            waiting: default_waiting(),
            other: default_other(),
        }
    }
}

impl Palette {
    /// Fill color of a status. `urgent` only matters for `todo`.
    pub fn fill(&self, status: &VacationStatus, urgent: bool) -> Rgba {
        match status {
            VacationStatus::Done => self.done,
            VacationStatus::Todo if urgent => self.todo_urgent,
            VacationStatus::Todo => self.todo,
            VacationStatus::InProgress => self.in_progress,
            VacationStatus::Waiting => self.waiting,
            VacationStatus::Other(_) => self.other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_urgent_days")]
    pub urgent_days: u32,
    #[serde(default = "default_border_darken")]
    pub border_darken: u8,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default)]
    pub palette: Palette,
}

fn default_data_file() -> String {
    "vacations.json".to_string()
}
fn default_urgent_days() -> u32 {
    7
}
fn default_border_darken() -> u8 {
    30
}
fn default_chart_width() -> usize {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            urgent_days: default_urgent_days(),
            border_darken: default_border_darken(),
            chart_width: default_chart_width(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.vacboard`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vacboard")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("vacboard.conf")
    }

    /// Load configuration from the standard location, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.chart_width < 10 {
            return Err(AppError::Config(format!(
                "chart_width must be at least 10 (got {})",
                self.chart_width
            )));
        }
        Ok(())
    }

    /// Data file with `~` expanded and relative paths anchored to the config dir.
    pub fn data_path(&self) -> PathBuf {
        resolve_data_path(&self.data_file, &Self::config_dir())
    }

    /// Keys of `KNOWN_KEYS` absent from the YAML file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    /// Write a default configuration file. In test mode nothing is written.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }
}
