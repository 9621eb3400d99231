use std::fs;
use std::path::{ Path, PathBuf };

use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::models::analysis::AnalysisOptions;
use crate::models::common::{ GenerationMode, Language, RhymeScheme };
use crate::models::poem::{ DEFAULT_LINES_PER_STANZA, DEFAULT_STANZAS };

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "POEME_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Configuration for the Poeme Assistant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Language used when the command line does not pick one
    pub language: Language,

    pub generation: GenerationDefaults,

    pub analysis: AnalysisOptions,
}

/// Defaults for poem requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    pub stanzas: usize,
    pub lines_per_stanza: usize,
    pub rhyme_scheme: RhymeScheme,
    pub mode: GenerationMode,
    /// Fit generated lines to the analysis target range
    pub fit_meter: bool,
    /// Fixed seed for reproducible poems and themes
    pub seed: Option<u64>,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            stanzas: DEFAULT_STANZAS,
            lines_per_stanza: DEFAULT_LINES_PER_STANZA,
            rhyme_scheme: RhymeScheme::default(),
            mode: GenerationMode::default(),
            fit_meter: true,
            seed: None,
        }
    }
}

impl AssistantConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: AssistantConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Load from `path`, else from the file named by `POEME_CONFIG`, else
    /// fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match resolved {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration file given; using defaults");
                Ok(Self::default())
            }
        }
    }
}
