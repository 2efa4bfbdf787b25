//! Configuration file support for the slidekit showcase.
//!
//! The configuration carries user preferences and the card slider options,
//! and is read as JSON from disk (native) or from localStorage (WASM).

use serde::{Deserialize, Serialize};
use slidekit_ui::slider::{Breakpoint, ItemClass, LayoutConfig};
use slidekit_ui::CssSize;

use crate::constants::DEFAULT_VIEWPORT_WIDTH;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Card slider options
    #[serde(default)]
    pub slider: SliderConfig,
}

fn default_app_name() -> String {
    "slidekit".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Viewport width used for headless runs
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
}

fn default_viewport_width() -> f32 {
    DEFAULT_VIEWPORT_WIDTH
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            viewport_width: default_viewport_width(),
        }
    }
}

/// Per-item class rule for expanded mode.
///
/// Either one class for every item, or a class applied to every `every`-th
/// item (starting with the first) and `otherwise` for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemClassConfig {
    Fixed(String),
    Alternating {
        every: usize,
        class: String,
        #[serde(default)]
        otherwise: String,
    },
}

impl ItemClassConfig {
    fn to_item_class(&self) -> ItemClass {
        match self {
            ItemClassConfig::Fixed(class) => ItemClass::Fixed(class.clone()),
            ItemClassConfig::Alternating {
                every,
                class,
                otherwise,
            } => {
                let every = (*every).max(1);
                let class = class.clone();
                let otherwise = otherwise.clone();
                ItemClass::per_index(move |index| {
                    if index % every == 0 {
                        class.clone()
                    } else {
                        otherwise.clone()
                    }
                })
            }
        }
    }
}

/// Card slider section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default)]
    pub breakpoint: Breakpoint,

    #[serde(default = "default_mobile_item_width")]
    pub mobile_item_width: CssSize,

    #[serde(default)]
    pub desktop_item_width: Option<CssSize>,

    #[serde(default)]
    pub desktop_item_class: Option<ItemClassConfig>,

    #[serde(default = "default_desktop_class_name")]
    pub desktop_class_name: String,

    #[serde(default)]
    pub class_name: String,

    #[serde(default = "default_label")]
    pub label: String,
}

fn default_mobile_item_width() -> CssSize {
    LayoutConfig::default().mobile_item_width
}

fn default_desktop_class_name() -> String {
    LayoutConfig::default().desktop_class_name
}

fn default_label() -> String {
    "ERP modules".to_string()
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            mobile_item_width: default_mobile_item_width(),
            desktop_item_width: None,
            desktop_item_class: None,
            desktop_class_name: default_desktop_class_name(),
            class_name: String::new(),
            label: default_label(),
        }
    }
}

impl SliderConfig {
    /// Build the widget layout configuration.
    pub fn to_layout_config(&self) -> LayoutConfig {
        let mut layout = LayoutConfig::new()
            .breakpoint(self.breakpoint)
            .mobile_item_width(self.mobile_item_width.clone())
            .desktop_class_name(self.desktop_class_name.clone())
            .class_name(self.class_name.clone())
            .label(self.label.clone());
        if let Some(width) = &self.desktop_item_width {
            layout = layout.desktop_item_width(width.clone());
        }
        if let Some(class) = &self.desktop_item_class {
            layout = layout.desktop_item_class(class.to_item_class());
        }
        layout
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            slider: SliderConfig::default(),
        }
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// File name of the configuration inside the config directory.
    pub fn default_filename() -> &'static str {
        "slidekit-config.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("slidekit").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("slidekit")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load configuration from `path`, or `Ok(None)` if there is no file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_if_present(path: &std::path::Path) -> Result<Option<Self>, ConfigError> {
        match Self::load_from_path(path) {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Load configuration from the default path, or `Ok(None)` if there is
    /// no config directory or no file in it.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_if_present(&path),
            None => Ok(None),
        }
    }

    /// LocalStorage key holding the configuration.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "slidekit-config";

    /// Load configuration from localStorage, or `Ok(None)` if none is stored.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Result<Option<Self>, ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

        let json = storage.get_item(Self::LOCALSTORAGE_KEY).map_err(|e| {
            ConfigError::StorageError(format!("Failed to read from localStorage: {:?}", e))
        })?;
        json.map(|json| Self::from_json(&json)).transpose()
    }

    /// Log level to start with for a load result: the loaded one, or the
    /// default when there is nothing usable.
    pub fn startup_log_level(loaded: &Result<Option<Self>, ConfigError>) -> LogLevel {
        match loaded {
            Ok(Some(config)) => config.preferences.log_level,
            _ => LogLevel::default(),
        }
    }

    /// Take a load result, falling back to defaults with a logged warning
    /// when it failed. Call this once logging is installed.
    pub fn or_default_logged(loaded: Result<Option<Self>, ConfigError>, source: &str) -> Self {
        match loaded {
            Ok(Some(config)) => {
                log::info!("Loaded configuration from {}", source);
                config
            }
            Ok(None) => {
                log::debug!("No configuration in {}, using defaults", source);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load configuration from {}: {}; using defaults", source, e);
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(String),
}
