//! Identity configuration loading
//!
//! The identity fields echoed in every `POST /bfhl` response are resolved
//! once at startup. Each field follows the same priority order:
//! 1. Environment variable (highest priority)
//! 2. `[identity]` table of the TOML config file
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const ENV_FULL_NAME: &str = "BFHL_FULL_NAME";
pub const ENV_DOB: &str = "BFHL_DOB_DDMMYYYY";
pub const ENV_EMAIL: &str = "BFHL_EMAIL";
pub const ENV_ROLL_NUMBER: &str = "BFHL_ROLL_NUMBER";

/// Compiled identity defaults
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub full_name: &'static str,
    pub dob_ddmmyyyy: &'static str,
    pub email: &'static str,
    pub roll_number: &'static str,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            full_name: "john_doe",
            dob_ddmmyyyy: "17091999",
            email: "john@xyz.com",
            roll_number: "ABCD123",
        }
    }
}

/// TOML config file contents
///
/// ```toml
/// [identity]
/// full_name = "jane_roe"
/// dob_ddmmyyyy = "01012000"
/// email = "jane@xyz.com"
/// roll_number = "XYZ789"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub identity: IdentityToml,
}

/// `[identity]` table; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityToml {
    pub full_name: Option<String>,
    pub dob_ddmmyyyy: Option<String>,
    pub email: Option<String>,
    pub roll_number: Option<String>,
}

/// Immutable identity echoed in every response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// `{lowercased_full_name}_{DDMMYYYY}`
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl IdentityConfig {
    /// Build from raw fields; `full_name` is lowercased
    pub fn new(full_name: &str, dob_ddmmyyyy: &str, email: &str, roll_number: &str) -> Self {
        Self {
            user_id: format!("{}_{}", full_name.to_lowercase(), dob_ddmmyyyy),
            email: email.to_string(),
            roll_number: roll_number.to_string(),
        }
    }

    /// Resolve from environment variables and compiled defaults only
    pub fn from_env() -> Self {
        Self::resolve(&TomlConfig::default())
    }

    /// Resolve from environment, TOML config file and compiled defaults
    ///
    /// `config_path` names an explicit file that must exist and parse. When
    /// `None`, the platform default path is used if present; its absence is
    /// not an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let toml_config = match config_path {
            Some(path) => load_toml_config(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => load_toml_config(&path)?,
                None => {
                    debug!("No config file found, using environment and defaults");
                    TomlConfig::default()
                }
            },
        };

        Ok(Self::resolve(&toml_config))
    }

    /// Apply env > TOML > default per field
    pub fn resolve(toml_config: &TomlConfig) -> Self {
        let defaults = CompiledDefaults::default();
        let ident = &toml_config.identity;

        let full_name = resolve_field(ENV_FULL_NAME, ident.full_name.as_deref(), defaults.full_name);
        let dob = resolve_field(ENV_DOB, ident.dob_ddmmyyyy.as_deref(), defaults.dob_ddmmyyyy);
        let email = resolve_field(ENV_EMAIL, ident.email.as_deref(), defaults.email);
        let roll_number =
            resolve_field(ENV_ROLL_NUMBER, ident.roll_number.as_deref(), defaults.roll_number);

        if !is_valid_dob(&dob) {
            warn!("Date of birth {:?} is not a valid DDMMYYYY date; using it as-is", dob);
        }

        Self::new(&full_name, &dob, &email, &roll_number)
    }
}

fn resolve_field(env_var_name: &str, toml_value: Option<&str>, default: &str) -> String {
    // Priority 1: Environment variable
    if let Ok(value) = std::env::var(env_var_name) {
        debug!("{} loaded from environment", env_var_name);
        return value;
    }

    // Priority 2: TOML config file
    if let Some(value) = toml_value {
        debug!("{} loaded from TOML config", env_var_name);
        return value.to_string();
    }

    // Priority 3: Compiled default
    default.to_string()
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    let config = toml::from_str::<TomlConfig>(&content)?;
    info!("Loaded config file: {}", path.display());
    Ok(config)
}

/// Platform config file location, e.g. `~/.config/bfhl/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bfhl").join("config.toml"))
}

/// True when `dob` is eight digits forming a real calendar date
pub fn is_valid_dob(dob: &str) -> bool {
    dob.len() == 8
        && dob.bytes().all(|b| b.is_ascii_digit())
        && NaiveDate::parse_from_str(dob, "%d%m%Y").is_ok()
}
