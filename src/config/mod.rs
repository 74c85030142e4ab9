use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Deadline windows of the driver compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSettings {
    /// Hours added to the local clock before deadlines are compared.
    #[serde(default = "default_offset_hours")]
    pub reference_offset_hours: i64,
    #[serde(default = "default_urgent_days")]
    pub urgent_days: i64,
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
}

/// Largest accepted `reference_offset_hours`, either sign.
pub const MAX_OFFSET_HOURS: i64 = 48;

fn default_offset_hours() -> i64 {
    3
}
fn default_urgent_days() -> i64 {
    10
}
fn default_upcoming_days() -> i64 {
    30
}
fn default_active_only() -> bool {
    true
}

impl Default for ComplianceSettings {
    fn default() -> Self {
        Self {
            reference_offset_hours: default_offset_hours(),
            urgent_days: default_urgent_days(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// List only active drivers unless `--all` is given.
    #[serde(default = "default_active_only")]
    pub active_only: bool,
    #[serde(default)]
    pub compliance: ComplianceSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            active_only: default_active_only(),
            compliance: ComplianceSettings::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfleetlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rfleetlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfleetlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfleetlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        let c = &self.compliance;
        if c.urgent_days < 0 || c.upcoming_days < c.urgent_days {
            return Err(AppError::Config(format!(
                "compliance windows must satisfy 0 <= urgent_days ({}) <= upcoming_days ({})",
                c.urgent_days, c.upcoming_days
            )));
        }
        if !(-MAX_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&c.reference_offset_hours) {
            return Err(AppError::Config(format!(
                "compliance.reference_offset_hours ({}) must be within -{MAX_OFFSET_HOURS}..={MAX_OFFSET_HOURS}",
                c.reference_offset_hours
            )));
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {:?}", Self::config_file()));
        }

        Ok(config)
    }
}
