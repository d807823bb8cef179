//! Game tunables
//!
//! Sizes and speed ranges for the ball and paddle. The playfield size is not
//! part of the config: it always comes from the drawing surface.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::Playfield;

/// Tunable parameters, overridable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Ball ===
    pub ball_radius: f32,
    pub spawn_x_min: f32,
    pub spawn_x_max: f32,
    pub spawn_y: f32,
    /// Per-axis speed magnitude range, sampled once at spawn
    pub min_axis_speed: f32,
    pub max_axis_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle top sits this far above the playfield bottom
    pub paddle_bottom_offset: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            spawn_x_min: BALL_SPAWN_X_MIN,
            spawn_x_max: BALL_SPAWN_X_MAX,
            spawn_y: BALL_SPAWN_Y,
            min_axis_speed: BALL_MIN_AXIS_SPEED,
            max_axis_speed: BALL_MAX_AXIS_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parse and validate an optional override, falling back to defaults
    pub fn load_or_default(json: Option<&str>, playfield: Playfield) -> Self {
        let Some(json) = json else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_json(json).and_then(|c| c.validate(playfield).map(|_| c)) {
            Ok(config) => {
                log::info!("Loaded config override");
                config
            }
            Err(e) => {
                log::warn!("Ignoring config override: {}", e);
                Self::default()
            }
        }
    }

    /// Reject configs that cannot produce a playable game on this playfield
    pub fn validate(&self, playfield: Playfield) -> Result<(), GameError> {
        let finite = [
            ("spawn_x_min", self.spawn_x_min),
            ("spawn_x_max", self.spawn_x_max),
            ("spawn_y", self.spawn_y),
            ("max_axis_speed", self.max_axis_speed),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("ball_radius", self.ball_radius),
            ("min_axis_speed", self.min_axis_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("playfield width", playfield.width),
            ("playfield height", playfield.height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.min_axis_speed > self.max_axis_speed {
            return Err(GameError::InvalidConfig(format!(
                "speed range inverted: {}..{}",
                self.min_axis_speed, self.max_axis_speed
            )));
        }
        if self.spawn_x_min > self.spawn_x_max {
            return Err(GameError::InvalidConfig(format!(
                "spawn range inverted: {}..{}",
                self.spawn_x_min, self.spawn_x_max
            )));
        }
        if self.paddle_width > playfield.width {
            return Err(GameError::InvalidConfig(format!(
                "paddle ({}) wider than playfield ({})",
                self.paddle_width, playfield.width
            )));
        }
        if self.paddle_bottom_offset > playfield.height {
            return Err(GameError::InvalidConfig(format!(
                "paddle offset ({}) above playfield top",
                self.paddle_bottom_offset
            )));
        }
        // Paddle must sit fully inside the playfield
        if self.paddle_bottom_offset < self.paddle_height {
            return Err(GameError::InvalidConfig(format!(
                "paddle offset ({}) leaves the paddle ({} tall) below the floor",
                self.paddle_bottom_offset, self.paddle_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(GameConfig::default().validate(Playfield::default()).is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "ball_radius": 8.0 }"#).unwrap();
        assert_eq!(config.ball_radius, 8.0);
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_rejects_wide_paddle() {
        let config = GameConfig {
            paddle_width: 600.0,
            ..Default::default()
        };
        let err = config.validate(Playfield::new(560.0, 640.0)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let config = GameConfig {
            min_axis_speed: 12.0,
            max_axis_speed: 6.0,
            ..Default::default()
        };
        assert!(config.validate(Playfield::default()).is_err());
    }

    #[test]
    fn test_rejects_infinite_values() {
        let playfield = Playfield::default();
        // 1e39 overflows f32 to infinity
        let config = GameConfig::from_json(r#"{ "max_axis_speed": 1e39 }"#).unwrap();
        assert!(config.max_axis_speed.is_infinite());
        assert!(matches!(
            config.validate(playfield),
            Err(GameError::InvalidConfig(_))
        ));

        for json in [
            r#"{ "max_axis_speed": 1e39 }"#,
            r#"{ "spawn_y": 1e39 }"#,
            r#"{ "spawn_x_max": 1e39 }"#,
            r#"{ "paddle_bottom_offset": -1e39 }"#,
        ] {
            let config = GameConfig::load_or_default(Some(json), playfield);
            assert_eq!(config, GameConfig::default(), "{}", json);
        }
    }

    #[test]
    fn test_rejects_paddle_below_floor() {
        let playfield = Playfield::default();
        for offset in [-100.0, 0.0, 20.0] {
            let config = GameConfig {
                paddle_bottom_offset: offset,
                ..Default::default()
            };
            assert!(config.validate(playfield).is_err(), "offset {}", offset);
        }

        // Resting exactly on the floor is allowed
        let config = GameConfig {
            paddle_bottom_offset: PADDLE_HEIGHT,
            ..Default::default()
        };
        assert!(config.validate(playfield).is_ok());

        let config =
            GameConfig::load_or_default(Some(r#"{ "paddle_bottom_offset": -100 }"#), playfield);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let playfield = Playfield::default();
        let config = GameConfig::load_or_default(Some(r#"{ "ball_radius": -1 }"#), playfield);
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::load_or_default(Some(r#"{ "paddle_height": 20 }"#), playfield);
        assert_eq!(config.paddle_height, 20.0);
    }
}
