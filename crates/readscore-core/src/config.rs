//! Scoring and logging settings, layered from files and the environment.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file, `config.<ext>` in the platform config dir
//!    (`~/.config/readscore/` on Linux)
//! 3. project files: `.readscore.<ext>` then `readscore.<ext>`, taken from the
//!    nearest directory at or above the search start that has any
//! 4. files passed explicitly, in the order given
//! 5. `READSCORE_*` environment variables (`READSCORE_GATE=smog-index`)
//!
//! `<ext>` is one of `toml`, `yaml`, `yml`, `json`; when one directory holds
//! several, they merge in that order.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use readscore_core::config::ConfigLoader;
//!
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(Utf8Path::new("docs/posts"))
//!     .load()?;
//! println!("gate {} from {:?}", config.gate, sources.primary_file());
//! # Ok::<(), readscore_core::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::readability::Formula;

/// Default input size limit: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

const ENV_PREFIX: &str = "READSCORE_";
const APP_NAME: &str = "readscore";
/// Directory entry that ends the upward project search by default.
const DEFAULT_STOP_MARKER: &str = ".git";

/// Effective settings after every layer is merged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Verbosity when neither `RUST_LOG` nor `-q`/`-v` is given.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Threshold `score` applies when `--max-grade` is not passed.
    pub max_grade: Option<f64>,
    /// Formula the threshold applies to.
    pub gate: Formula,
    /// Largest input accepted, in bytes. [`DEFAULT_MAX_INPUT_BYTES`] when unset.
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size, whatever `max_input_bytes` says.
    pub disable_input_limit: bool,
}

impl Config {
    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Default log verbosity.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Command steps and intermediate counts.
    Debug,
    /// Configuration and results.
    #[default]
    Info,
    /// Only problems.
    Warn,
    /// Only failures.
    Error,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which layer a config file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The per-user config directory.
    User,
    /// Found by searching upward from the working directory.
    Project,
    /// Named on the command line.
    Explicit,
}

/// A config file that took part in a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Where the file lives.
    pub path: Utf8PathBuf,
    /// The layer it was merged in.
    pub origin: Origin,
}

/// Every config file merged by [`ConfigLoader::load`], lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigSources {
    files: Vec<SourceFile>,
}

impl ConfigSources {
    /// Files in merge order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Files from one layer, in merge order.
    pub fn from_origin(&self, origin: Origin) -> impl Iterator<Item = &Utf8Path> {
        self.files
            .iter()
            .filter(move |file| file.origin == origin)
            .map(|file| file.path.as_path())
    }

    /// The file merged last, which wins wherever it sets a key.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files.last().map(|file| file.path.as_path())
    }

    /// Whether no file was found at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn push_all(&mut self, paths: impl IntoIterator<Item = Utf8PathBuf>, origin: Origin) {
        self.files
            .extend(paths.into_iter().map(|path| SourceFile { path, origin }));
    }
}

/// File formats a config file can use, in merge order within one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Yml,
    Json,
}

impl FileFormat {
    const ALL: [Self; 4] = [Self::Toml, Self::Yaml, Self::Yml, Self::Json];

    const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Yml => "yml",
            Self::Json => "json",
        }
    }

    /// Format for a path; anything unrecognized is read as TOML.
    fn of(path: &Utf8Path) -> Self {
        Self::ALL
            .into_iter()
            .find(|format| path.extension() == Some(format.extension()))
            .unwrap_or(Self::Toml)
    }

    fn merge_into(self, figment: Figment, path: &Utf8Path) -> Figment {
        match self {
            Self::Toml => figment.merge(Toml::file_exact(path)),
            Self::Yaml | Self::Yml => figment.merge(Yaml::file_exact(path)),
            Self::Json => figment.merge(Json::file_exact(path)),
        }
    }
}

/// Project files one directory could hold, lowest precedence first.
fn project_candidates(dir: &Utf8Path) -> impl Iterator<Item = Utf8PathBuf> + '_ {
    [".", ""].into_iter().flat_map(move |prefix| {
        FileFormat::ALL
            .into_iter()
            .map(move |format| dir.join(format!("{prefix}{APP_NAME}.{}", format.extension())))
    })
}

/// Upward search for project config files.
#[derive(Debug, Clone)]
struct ProjectSearch {
    start: Utf8PathBuf,
    stop_marker: Option<String>,
}

impl ProjectSearch {
    /// Files from the nearest directory that has any.
    ///
    /// A directory holding the stop marker is still searched; its parents are
    /// not. The marker in the start directory itself does not stop the walk.
    fn discover(&self) -> Vec<Utf8PathBuf> {
        for dir in self.start.ancestors() {
            let found: Vec<_> = project_candidates(dir).filter(|p| p.is_file()).collect();
            if !found.is_empty() {
                tracing::debug!(dir = %dir, files = found.len(), "project config found");
                return found;
            }
            let at_stop = self
                .stop_marker
                .as_deref()
                .is_some_and(|marker| dir.join(marker).exists());
            if at_stop && dir != self.start.as_path() {
                break;
            }
        }
        Vec::new()
    }
}

/// Builds a [`Config`] from the layers described in the module docs.
#[derive(Debug)]
pub struct ConfigLoader {
    search_start: Option<Utf8PathBuf>,
    stop_marker: Option<String>,
    user_layer: bool,
    explicit: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader with the user layer on, no project search and a `.git` stop marker.
    pub fn new() -> Self {
        Self {
            search_start: None,
            stop_marker: Some(DEFAULT_STOP_MARKER.to_owned()),
            user_layer: true,
            explicit: Vec::new(),
        }
    }

    /// Search for project files from `dir` upward.
    pub fn with_project_search(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_start = Some(dir.as_ref().to_owned());
        self
    }

    /// Leave out the per-user config file.
    pub const fn skip_user_config(mut self) -> Self {
        self.user_layer = false;
        self
    }

    /// End the project search at the first directory containing `marker`.
    pub fn stop_at(mut self, marker: impl Into<String>) -> Self {
        self.stop_marker = Some(marker.into());
        self
    }

    /// Search for project files all the way to the filesystem root.
    pub fn search_to_root(mut self) -> Self {
        self.stop_marker = None;
        self
    }

    /// Merge `path` above every discovered file. Later calls win.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.explicit.push(path.as_ref().to_owned());
        self
    }

    /// Find every file that would be merged, without reading any of them.
    pub fn sources(&self) -> ConfigSources {
        let mut sources = ConfigSources::default();
        if self.user_layer {
            sources.push_all(find_user_config(), Origin::User);
        }
        if let Some(ref start) = self.search_start {
            let search = ProjectSearch {
                start: start.clone(),
                stop_marker: self.stop_marker.clone(),
            };
            sources.push_all(search.discover(), Origin::Project);
        }
        sources.push_all(self.explicit.iter().cloned(), Origin::Explicit);
        sources
    }

    /// Merge defaults, files and environment into a [`Config`].
    ///
    /// Returns the files that were merged alongside the result, so callers
    /// can report them without searching again.
    #[tracing::instrument(skip(self), fields(search_start = ?self.search_start))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.sources();
        let config = extract(&sources)?;
        tracing::info!(
            gate = %config.gate,
            max_grade = ?config.max_grade,
            files = sources.files().len(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails with [`ConfigError::NotFound`]
    /// when there is no config file in any layer.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        if self.sources().is_empty() {
            return Err(ConfigError::NotFound);
        }
        self.load()
    }
}

fn extract(sources: &ConfigSources) -> ConfigResult<Config> {
    let figment = sources.files().iter().fold(
        Figment::from(Serialized::defaults(Config::default())),
        |figment, file| FileFormat::of(&file.path).merge_into(figment, &file.path),
    );
    figment
        .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
        .extract()
        .map_err(|e| ConfigError::Deserialize(Box::new(e)))
}

/// First `config.<ext>` in the user config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    FileFormat::ALL
        .into_iter()
        .map(|format| dir.join(format!("config.{}", format.extension())))
        .find(|path| path.is_file())
}

/// The per-user config directory, if the platform has one and it is UTF-8.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
