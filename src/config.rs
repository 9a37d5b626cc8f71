use std::path::Path;

use crate::ai::RandomPlayer;
use crate::console::ConsolePlayer;
use crate::error::ConfigError;
use crate::game::{Color, Player};

/// Who picks the columns for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Prompt on the terminal.
    Human,
    /// Uniformly random free column.
    Random,
}

impl PlayerKind {
    /// Build the player. A seed makes a random player deterministic.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Player> {
        match (self, seed) {
            (PlayerKind::Human, _) => Box::new(ConsolePlayer::stdio()),
            (PlayerKind::Random, Some(seed)) => Box::new(RandomPlayer::with_seed(seed)),
            (PlayerKind::Random, None) => Box::new(RandomPlayer::new()),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub red: PlayerKind,
    pub yellow: PlayerKind,
    /// Color of the opening move.
    pub first: Color,
    /// Seed for random players; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::Random,
            first: Color::Red,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed.is_some() && self.red == PlayerKind::Human && self.yellow == PlayerKind::Human {
            tracing::warn!(seed = self.seed, "seed is set but both players are human");
            return Err(ConfigError::Validation(
                "seed is set but neither player is random".into(),
            ));
        }
        Ok(())
    }

    /// The player for `color`. Two random players get distinct seeds.
    pub fn player(&self, color: Color) -> Box<dyn Player> {
        match color {
            Color::Red => self.red.build(self.seed),
            Color::Yellow => self.yellow.build(self.seed.map(|s| s.wrapping_add(1))),
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
yellow = "human"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.yellow, PlayerKind::Human);
        // Other fields should be defaults
        assert_eq!(config.red, PlayerKind::Human);
        assert_eq!(config.first, Color::Red);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_player_kind_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(r#"red = "robot""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_seed_without_random_player() {
        let config = AppConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::Human,
            seed: Some(3),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect-four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
red = "random"
first = "yellow"
seed = 11
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.red, PlayerKind::Random);
        assert_eq!(config.first, Color::Yellow);
        assert_eq!(config.seed, Some(11));
        // Others are defaults
        assert_eq!(config.yellow, PlayerKind::Random);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect-four.toml");
        std::fs::write(&path, "red = \"human\"\nyellow = \"human\"\nseed = 1\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("nonexistent_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_two_human_players_can_be_built() {
        let config = AppConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::Human,
            ..AppConfig::default()
        };
        config.validate().unwrap();

        let red = config.player(Color::Red);
        let yellow = config.player(Color::Yellow);

        assert_eq!(red.name(), "Human");
        assert_eq!(yellow.name(), "Human");
    }

    #[test]
    fn test_seeded_random_players_are_reproducible() {
        let config = AppConfig {
            red: PlayerKind::Random,
            yellow: PlayerKind::Random,
            seed: Some(5),
            ..AppConfig::default()
        };
        let grid = crate::game::Grid::new();
        let mut a = config.player(Color::Red);
        let mut b = config.player(Color::Red);
        for _ in 0..10 {
            assert_eq!(
                a.select_column(Color::Red, &grid),
                b.select_column(Color::Red, &grid)
            );
        }
        assert_eq!(config.player(Color::Yellow).name(), "Random");
    }
}
