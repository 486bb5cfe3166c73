//! Game configuration and construction errors.

use thiserror::Error;

use crate::piece::template;
use crate::types::{
    ShapeKind, BORDER_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, TICK_MS,
};

/// Construction-time failures. These are programmer or operator errors; a game
/// is never built from a configuration that produced one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: i32 },

    #[error("board {name} must be at most {max}, got {value}")]
    DimensionTooLarge {
        name: &'static str,
        value: i32,
        max: i32,
    },

    #[error("border size must not be negative, got {0}")]
    InvalidBorder(i32),

    #[error("board width {width} cannot fit a spawned {kind:?} piece")]
    BoardTooNarrow { width: i32, kind: ShapeKind },

    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("tick interval must be at least 1ms")]
    InvalidTick,

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Board geometry, timing and seed for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub border_size: i32,
    pub tick_ms: u64,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            border_size: BORDER_SIZE,
            tick_ms: TICK_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Read overrides from the environment.
    ///
    /// - `BRICKS_WIDTH`, `BRICKS_HEIGHT`: board interior size
    /// - `BRICKS_TICK_MS`: descend interval
    /// - `BRICKS_SEED`: shape sequence seed
    ///
    /// Unset variables keep their defaults; unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GameConfig::from_env`] with an explicit variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, "BRICKS_WIDTH")? {
            config.width = v;
        }
        if let Some(v) = parse_var(&lookup, "BRICKS_HEIGHT")? {
            config.height = v;
        }
        if let Some(v) = parse_var(&lookup, "BRICKS_TICK_MS")? {
            config.tick_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "BRICKS_SEED")? {
            config.seed = v;
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Check geometry and timing against a shape catalog
    pub fn validate(&self, catalog: &[ShapeKind]) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::InvalidDimension {
                name: "width",
                value: self.width,
            });
        }
        if self.height <= 0 {
            return Err(ConfigError::InvalidDimension {
                name: "height",
                value: self.height,
            });
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }
        if self.border_size < 0 {
            return Err(ConfigError::InvalidBorder(self.border_size));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTick);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let anchor_x = self.spawn_x();
        for &kind in catalog {
            let fits = template(kind)
                .iter()
                .all(|&(dx, _)| (self.border_size..=self.width).contains(&(anchor_x + dx)));
            if !fits {
                return Err(ConfigError::BoardTooNarrow {
                    width: self.width,
                    kind,
                });
            }
        }

        Ok(())
    }

    /// Column of the spawn anchor
    pub fn spawn_x(&self) -> i32 {
        self.width / 2
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(&ShapeKind::ALL), Ok(()));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(&ShapeKind::ALL),
            Err(ConfigError::InvalidDimension {
                name: "width",
                value: 0
            })
        );

        let config = GameConfig {
            height: -3,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(&ShapeKind::ALL),
            Err(ConfigError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let config = GameConfig::from_lookup(|var| {
            (var == "BRICKS_WIDTH").then(|| "40000".to_string())
        })
        .unwrap();
        assert_eq!(
            config.validate(&ShapeKind::ALL),
            Err(ConfigError::DimensionTooLarge {
                name: "width",
                value: 40_000,
                max: MAX_DIMENSION
            })
        );

        let config = GameConfig {
            height: i32::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(&ShapeKind::ALL),
            Err(ConfigError::DimensionTooLarge { name: "height", .. })
        ));

        let config = GameConfig {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(&ShapeKind::ALL), Ok(()));
    }

    #[test]
    fn test_rejects_empty_catalog_and_zero_tick() {
        let config = GameConfig::default();
        assert_eq!(config.validate(&[]), Err(ConfigError::EmptyCatalog));

        let config = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(&ShapeKind::ALL), Err(ConfigError::InvalidTick));
    }

    #[test]
    fn test_narrow_board_rejects_i_but_accepts_o() {
        // Anchor x = 2, so the I bar would start at column 0 (the margin).
        let config = GameConfig {
            width: 4,
            height: 4,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(&[ShapeKind::I]),
            Err(ConfigError::BoardTooNarrow {
                width: 4,
                kind: ShapeKind::I
            })
        );
        assert_eq!(config.validate(&[ShapeKind::O]), Ok(()));
    }

    #[test]
    fn test_from_lookup_overrides_and_errors() {
        let config = GameConfig::from_lookup(|var| match var {
            "BRICKS_WIDTH" => Some("12".to_string()),
            "BRICKS_SEED" => Some(" 99 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, 99);

        let err = GameConfig::from_lookup(|var| {
            (var == "BRICKS_TICK_MS").then(|| "fast".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                var: "BRICKS_TICK_MS",
                value: "fast".to_string()
            }
        );
    }
}
