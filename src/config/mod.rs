use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(alias = "patients")]
    pub patients_file: Option<String>,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub no_color: Option<bool>,
    #[serde(alias = "reset_page")]
    pub reset_page_on_filter: Option<bool>,
    pub as_of: Option<String>,
    pub listen: Option<String>,
    pub log_level: Option<String>,
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".patientdesk").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn load_config(path: &Path, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(ConfigFile::default()),
        Ok(contents) => serde_yaml::from_str::<ConfigFile>(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

pub(crate) fn default_config_yaml() -> String {
    r#"# patientdesk config
#
# Location (default):
#   ~/.patientdesk/config.yml

# Records (optional). JSON array or YAML list of patient records.
# Without it the built-in seed records are browsed.
# patients_file: ./patients.json

# Directory view
page_size: 10
# search: ""
status: ALL
# Go back to page 1 whenever the search term or status filter changes.
reset_page_on_filter: false
# Evaluate ages on a fixed date instead of today (YYYY-MM-DD).
# as_of: 2024-07-20

# Output: plain, vivid, json or html
format: plain
# output: ./patients.html
no_color: false

# Server (used by --serve when no address is given on the command line)
listen: 127.0.0.1:8080

# Logging: error, warn, info, debug, trace (RUST_LOG overrides)
log_level: warn
"#
    .to_string()
}

/// Writes the commented default config unless a file already exists.
/// Returns whether a file was written.
pub fn ensure_default_config_file(path: &Path) -> Result<bool, String> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    std::fs::write(path, default_config_yaml())
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(true)
}
