//! Server configuration and data-file path resolution.

use std::fmt;
use std::path::PathBuf;

/// Environment variable naming the data file directly.
pub const ENV_DATA: &str = "VOLUNTEER_HUB_DATA";
/// Environment variable naming a directory that holds the data file.
pub const ENV_CONFIG_DIR: &str = "VOLUNTEER_HUB_CONFIG_DIR";
/// File name looked for in directory-based locations.
pub const DATA_FILENAME: &str = "opportunities.json";
/// Directory name under the XDG config root and /etc.
pub const APP_DIR: &str = "volunteer-hub";

/// Where the resolved data path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// `--data` on the command line.
    CliArgument,
    /// `VOLUNTEER_HUB_DATA`.
    Environment,
    /// `VOLUNTEER_HUB_CONFIG_DIR` plus the default file name.
    EnvironmentDir,
    /// `~/.config/volunteer-hub/opportunities.json`.
    XdgConfig,
    /// `/etc/volunteer-hub/opportunities.json`.
    SystemConfig,
    /// `./opportunities.json` in the working directory.
    #[default]
    BuiltinDefault,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataSource::CliArgument => "command-line argument",
            DataSource::Environment => "environment variable",
            DataSource::EnvironmentDir => "environment config dir",
            DataSource::XdgConfig => "XDG config directory",
            DataSource::SystemConfig => "system config directory",
            DataSource::BuiltinDefault => "built-in default",
        };
        write!(f, "{s}")
    }
}

/// Resolve the data file path and report where the decision came from.
///
/// Precedence: CLI argument, `VOLUNTEER_HUB_DATA`, `VOLUNTEER_HUB_CONFIG_DIR`,
/// the XDG config dir, `/etc/volunteer-hub`, then `./opportunities.json`.
/// The first three are explicit choices and win even when the file does not
/// exist, so a typo surfaces as a visible load error instead of silently
/// falling through; the shared locations are only taken when the file is
/// actually there.
pub fn resolve_data_path(cli: Option<PathBuf>) -> (PathBuf, DataSource) {
    if let Some(path) = cli {
        return (path, DataSource::CliArgument);
    }
    if let Ok(path) = std::env::var(ENV_DATA) {
        return (PathBuf::from(path), DataSource::Environment);
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return (
            PathBuf::from(dir).join(DATA_FILENAME),
            DataSource::EnvironmentDir,
        );
    }
    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(APP_DIR).join(DATA_FILENAME);
        if path.exists() {
            return (path, DataSource::XdgConfig);
        }
    }
    let system = PathBuf::from("/etc").join(APP_DIR).join(DATA_FILENAME);
    if system.exists() {
        return (system, DataSource::SystemConfig);
    }
    (PathBuf::from(DATA_FILENAME), DataSource::BuiltinDefault)
}

/// Resolved server configuration for one run.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Data file the catalog was (or will be) loaded from.
    pub data_path: PathBuf,
    /// Where `data_path` came from.
    pub data_source: DataSource,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            data_path: PathBuf::from(DATA_FILENAME),
            data_source: DataSource::BuiltinDefault,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
