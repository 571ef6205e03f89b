use crate::game::{default_palette, Board, BoardError, Paint, Palette};
use ratatui::style::{Color, ParseColorError};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the playing area
    #[serde(default)]
    pub(crate) board: Board,

    /// Colors used to draw the game
    #[serde(default)]
    pub(crate) colors: Colors,

    /// Where & what to log
    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("boostsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoard {
    width: u32,
    height: u32,
    cell_size: NonZeroU32,
}

impl Default for RawBoard {
    fn default() -> RawBoard {
        let board = Board::default();
        RawBoard {
            width: board.width(),
            height: board.height(),
            cell_size: board.cell_size(),
        }
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(value: RawBoard) -> Result<Board, BoardError> {
        Board::new(value.width, value.height, value.cell_size)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
        let raw = RawBoard::deserialize(deserializer)?;
        Board::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// The colors to draw each kind of thing in
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawColors")]
pub(crate) struct Colors(Palette);

impl Colors {
    pub(crate) fn palette(&self) -> Palette {
        self.0
    }
}

impl Default for Colors {
    fn default() -> Colors {
        Colors(default_palette())
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawColors {
    head: Option<String>,
    boosted_head: Option<String>,
    body: Option<String>,
    food: Option<String>,
    speed_boost: Option<String>,
}

impl TryFrom<RawColors> for Colors {
    type Error = ColorError;

    fn try_from(value: RawColors) -> Result<Colors, ColorError> {
        let mut palette = default_palette();
        for (paint, name) in [
            (Paint::Head, value.head),
            (Paint::BoostedHead, value.boosted_head),
            (Paint::Body, value.body),
            (Paint::Food, value.food),
            (Paint::SpeedBoost, value.speed_boost),
        ] {
            let Some(name) = name else {
                continue;
            };
            match Color::from_str(&name) {
                Ok(color) => palette[paint] = color,
                Err(source) => {
                    return Err(ColorError {
                        value: name,
                        source,
                    })
                }
            }
        }
        Ok(Colors(palette))
    }
}

#[derive(Debug, Error)]
#[error("invalid color {value:?}")]
pub(crate) struct ColorError {
    value: String,
    source: ParseColorError,
}

/// Logging settings
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Which messages to log, in `tracing-subscriber`'s `EnvFilter` syntax.
    /// The `RUST_LOG` environment variable takes precedence.
    pub(crate) filter: String,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            filter: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
