//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config TOML.
    ///
    /// Rejects damage parameters the resolver cannot roll with. The damage
    /// floor must be at least 1 so every hit makes progress.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &BattleConfig) -> LoadResult<()> {
        let damage = &config.damage;

        if damage.minimum_damage == 0 {
            anyhow::bail!("damage.minimum_damage must be at least 1");
        }
        if !(0.0..=1.0).contains(&damage.critical_chance) {
            anyhow::bail!(
                "damage.critical_chance must be within 0.0..=1.0, got {}",
                damage.critical_chance
            );
        }
        if damage.random_factor_min <= 0.0 || !(0.0..=1.0).contains(&damage.random_factor_min) {
            anyhow::bail!(
                "damage.random_factor_min must be within (0.0, 1.0], got {}",
                damage.random_factor_min
            );
        }
        if !(1.0..).contains(&damage.critical_multiplier) {
            anyhow::bail!(
                "damage.critical_multiplier must be at least 1.0, got {}",
                damage.critical_multiplier
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            attack_pause_ms = 100

            [damage]
            critical_chance = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(config.attack_pause_ms, 100);
        assert_eq!(config.faint_pause_ms, BattleConfig::DEFAULT_FAINT_PAUSE_MS);
        assert_eq!(config.damage.critical_chance, 0.0);
        assert_eq!(config.damage.minimum_damage, 1);
    }

    #[test]
    fn zero_minimum_damage_is_rejected() {
        let err = ConfigLoader::parse(
            r#"
            [damage]
            minimum_damage = 0
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("minimum_damage"));
    }

    #[test]
    fn out_of_range_rolls_are_rejected() {
        assert!(ConfigLoader::parse("[damage]\ncritical_chance = 1.5").is_err());
        assert!(ConfigLoader::parse("[damage]\nrandom_factor_min = 1.2").is_err());
        assert!(ConfigLoader::parse("[damage]\nrandom_factor_min = 0.0").is_err());
        assert!(ConfigLoader::parse("[damage]\ncritical_multiplier = 0.5").is_err());
        assert!(ConfigLoader::parse("[damage]\nrandom_factor_min = 1.0").is_ok());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ConfigLoader::parse("attack_pause_ms = \"slow\"").is_err());
    }
}
