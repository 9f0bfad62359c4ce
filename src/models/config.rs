use palette_dither::{
    AlphaMode, ChannelOrder, DitherMethod, DEFAULT_KEY_THRESHOLD, DEFAULT_PROGRESS_ROWS,
    TRANSPARENT_KEY,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "SPRITE_FORGE_CONFIG";

/// Tool configuration loaded from a YAML file
///
/// ```yaml
/// palette: palettes/norcal.hex
/// method: ordered
/// channel_order: bgr
/// color_key: true
/// key_threshold: 128
/// progress_rows: 25
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Palette file used when none is given on the command line
    pub palette: Option<PathBuf>,

    /// Dithering method used when none is given on the command line
    pub method: DitherMethod,

    /// Channel layout for RGB565 output
    pub channel_order: ChannelOrder,

    /// Write transparent pixels as the magenta sprite key instead of
    /// compositing them over black
    pub color_key: bool,

    /// Alpha below which a pixel counts as transparent with `color_key`
    pub key_threshold: u8,

    /// Rows between progress log lines while dithering (0 disables)
    pub progress_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: None,
            method: DitherMethod::default(),
            channel_order: ChannelOrder::default(),
            color_key: false,
            key_threshold: DEFAULT_KEY_THRESHOLD,
            progress_rows: DEFAULT_PROGRESS_ROWS,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from the file named by
    /// `SPRITE_FORGE_CONFIG`, or fall back to defaults.
    ///
    /// A missing or malformed file is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(path, env_path)
    }

    fn load_from(path: Option<&Path>, env_path: Option<PathBuf>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or(env_path) else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        method = %config.method,
                        channel_order = %config.channel_order,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Alpha handling for RGB565 output. `force_key` comes from the
    /// command line and turns keying on regardless of the file.
    pub fn alpha_mode(&self, force_key: bool) -> AlphaMode {
        if self.color_key || force_key {
            AlphaMode::ColorKey {
                threshold: self.key_threshold,
                key: TRANSPARENT_KEY,
            }
        } else {
            AlphaMode::OverBlack
        }
    }

    /// Parse configuration YAML. Missing keys take their default values.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
