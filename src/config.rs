//! Viewer settings resolved from layered key/value sources.
//!
//! Precedence, highest first: process environment, optional `.env` dotfile,
//! built-in defaults. The dotfile is read without touching the process
//! environment, so the hosting-mode check always sees how the process was
//! actually launched. [`resolve`] captures both layers once at startup and
//! delegates to the pure [`resolve_from`].

use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Serialize;

use crate::error::AppError;

/// Conventional dotfile name, looked up in the current directory and its
/// ancestors.
const DOTFILE: &str = ".env";

/// Dataset identifiers pinned to the viewer's landing page, in display
/// order. Not configurable.
pub const FEATURED_DATASETS: [&str; 6] = [
    "local",
    "anonymous/example_dataset",
    "anonymous/example_dataset2",
    "anonymous/example-djmax",
    "anonymous/example-aimlab",
    "anonymous/example-pubg-battleground",
];

/// Fully-resolved viewer settings.
///
/// Built once at process entry and passed by reference to every component
/// that needs it; no field is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Base directory for exported recording artifacts (already expanded,
    /// no `~`).
    pub export_path: PathBuf,
    /// `true` when no `EXPORT_PATH` was supplied by the process environment:
    /// the viewer serves a shared public deployment rather than a local
    /// export tree. Derived, never read from a variable of its own.
    pub public_hosting_mode: bool,
    /// Seconds a fetched dataset file stays cached.
    pub file_cache_ttl: u64,
    /// Seconds for all other cached values.
    pub default_cache_ttl: u64,
    /// Directory for cached files; created during resolution.
    pub cache_dir: PathBuf,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    /// Dataset identifiers surfaced on the landing page, in display order.
    pub featured_datasets: Vec<String>,
}

impl Settings {
    /// `host:port` string for the hosting server to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Ordered key/value layers feeding resolution, lowest precedence first.
#[derive(Debug, Default)]
pub struct Sources {
    /// Pairs read from the optional dotfile. Never written back to the
    /// process environment.
    pub dotfile: HashMap<String, String>,
    /// Snapshot of the process environment.
    pub process: HashMap<String, String>,
}

impl Sources {
    /// Capture the runtime layers: the optional `.env` dotfile plus the
    /// real process environment.
    pub fn from_runtime() -> Self {
        Self {
            dotfile: dotfile_vars(),
            process: env::vars().collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.process
            .get(key)
            .or_else(|| self.dotfile.get(key))
            .map(String::as_str)
    }

    /// Whether `key` carries a non-empty value in the process environment.
    /// Dotfile entries do not count: hosting mode reflects how the process
    /// itself was launched.
    fn set_in_process(&self, key: &str) -> bool {
        self.process.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// Resolve settings from the runtime environment and ensure the cache
/// directory exists. Call once at startup.
pub fn resolve() -> Result<Settings, AppError> {
    let settings = resolve_from(&Sources::from_runtime())?;
    ensure_cache_dir(&settings.cache_dir)?;
    Ok(settings)
}

/// Pure resolution over explicit layers. Touches neither the process
/// environment nor the filesystem; tests build [`Sources`] directly instead
/// of mutating env vars.
pub fn resolve_from(sources: &Sources) -> Result<Settings, AppError> {
    let export_path = sources.get("EXPORT_PATH").unwrap_or("./data");

    Ok(Settings {
        export_path: expand_home(export_path),
        public_hosting_mode: !sources.set_in_process("EXPORT_PATH"),
        file_cache_ttl: integer(sources, "FILE_CACHE_TTL", 600)?,
        default_cache_ttl: integer(sources, "DEFAULT_CACHE_TTL", 3600)?,
        cache_dir: expand_home(sources.get("CACHE_DIR").unwrap_or("./cache")),
        port: integer(sources, "PORT", 7860)?,
        host: sources.get("HOST").unwrap_or("0.0.0.0").to_string(),
        log_level: sources.get("LOG_LEVEL").unwrap_or("INFO").to_string(),
        featured_datasets: FEATURED_DATASETS.iter().map(ToString::to_string).collect(),
    })
}

/// Create the cache directory, including missing parents. Succeeds silently
/// when it already exists; existing contents are left alone.
pub fn ensure_cache_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|source| AppError::CacheDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Integer field lookup: absent means `default`, present-and-unparseable is
/// a hard error.
fn integer<T: FromStr>(sources: &Sources, key: &'static str, default: T) -> Result<T, AppError> {
    match sources.get(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| AppError::MalformedInteger {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Read the optional dotfile without touching the process environment.
/// A missing or unreadable file yields an empty layer: the dotfile only
/// supplies defaults and is never required.
fn dotfile_vars() -> HashMap<String, String> {
    match dotenvy::from_filename_iter(DOTFILE) {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(_) => HashMap::new(),
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
