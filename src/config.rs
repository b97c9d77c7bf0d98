use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default playing field width in cells, border ring included.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default playing field height in cells, border ring included.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default cap on the number of snake segments.
pub const DEFAULT_MAX_SNAKE_LENGTH: usize = 100;

/// Score at which the game is won.
pub const DEFAULT_WIN_SCORE: u32 = 100;

/// Points awarded per fruit eaten.
pub const DEFAULT_FRUIT_POINTS: u32 = 5;

/// Smallest grid side that leaves a playable interior.
pub const MIN_GRID_SIDE: u16 = 5;

const APP_DIR_NAME: &str = "viper";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Logical grid dimensions passed through the game as a named type.
///
/// The outermost ring of cells is the wall: the playable interior spans
/// rows `1..=height-2` and columns `1..=width-2`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the number of playable interior cells.
    #[must_use]
    pub fn interior_cells(self) -> usize {
        usize::from(self.width.saturating_sub(2)) * usize::from(self.height.saturating_sub(2))
    }
}

/// Simulation parameters for one game session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid: GridSize,
    pub max_snake_length: usize,
    pub win_score: u32,
    pub fruit_points: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            max_snake_length: DEFAULT_MAX_SNAKE_LENGTH,
            win_score: DEFAULT_WIN_SCORE,
            fruit_points: DEFAULT_FRUIT_POINTS,
        }
    }
}

/// Rejected configuration, reported before the terminal enters raw mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small; both sides must be at least 5")]
    GridTooSmall { width: u16, height: u16 },
    #[error("maximum snake length must be at least 1")]
    ZeroMaxLength,
    #[error("winning score must be at least 1")]
    ZeroWinScore,
    #[error("fruit points must be at least 1")]
    ZeroFruitPoints,
}

impl GameConfig {
    /// Validates the configuration, consuming and returning it on success.
    ///
    /// Called once at startup; a `GameState` is only ever built from a
    /// validated config, so ticks never re-check these bounds.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.grid.width < MIN_GRID_SIDE || self.grid.height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
            });
        }
        if self.max_snake_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.fruit_points == 0 {
            return Err(ConfigError::ZeroFruitPoints);
        }
        Ok(self)
    }
}

/// Optional user settings read from the platform config directory.
///
/// Every field is optional; command-line flags take precedence over the file,
/// and the file over the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub theme: Option<String>,
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads user settings from disk.
///
/// Returns default (all-`None`) settings when the file does not exist.
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_settings() -> io::Result<Settings> {
    load_settings_from_path(&settings_path())
}

fn load_settings_from_path(path: &Path) -> io::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_settings_from_path, GameConfig, GridSize};

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validated().is_ok());
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 4,
                height: 20,
            },
            ..GameConfig::default()
        };

        assert!(config.validated().is_err());
    }

    #[test]
    fn zero_valued_parameters_are_rejected() {
        let zero_cap = GameConfig {
            max_snake_length: 0,
            ..GameConfig::default()
        };
        let zero_win = GameConfig {
            win_score: 0,
            ..GameConfig::default()
        };
        let zero_points = GameConfig {
            fruit_points: 0,
            ..GameConfig::default()
        };

        assert!(zero_cap.validated().is_err());
        assert!(zero_win.validated().is_err());
        assert!(zero_points.validated().is_err());
    }

    #[test]
    fn interior_excludes_the_wall_ring() {
        let grid = GridSize {
            width: 10,
            height: 8,
        };
        assert_eq!(grid.interior_cells(), 48);
    }

    #[test]
    fn missing_settings_file_returns_defaults() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let settings =
            load_settings_from_path(&path).expect("missing file should return defaults");

        assert!(settings.width.is_none());
        assert!(settings.height.is_none());
        assert!(settings.theme.is_none());
    }

    #[test]
    fn settings_file_fields_are_optional() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "width": 60, "theme": "ocean" }"#);

        let settings = load_settings_from_path(&path).expect("partial file should parse");

        assert_eq!(settings.width, Some(60));
        assert_eq!(settings.height, None);
        assert_eq!(settings.theme.as_deref(), Some("ocean"));
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_settings_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(
            load_settings_from_path(&path).is_err(),
            "malformed file should return Err"
        );

        cleanup_test_path(&path);
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("viper-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
