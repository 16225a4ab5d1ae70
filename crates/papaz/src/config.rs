//! Preset configuration.

/// Environment variable consulted by [`PresetConfig::from_env`].
pub const ENV_VAR: &str = "PAPAZ_ENV";

/// The runtime environment a preset is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Use the real medium.
    #[default]
    Production,
    /// Swap file-backed adapters for in-memory ones.
    Test,
}

impl Environment {
    /// Interpret a value of [`ENV_VAR`]. Only `test` (any case) selects
    /// [`Environment::Test`].
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("test") {
            Environment::Test
        } else {
            Environment::Production
        }
    }

    /// Read [`ENV_VAR`]. Unset means production.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Configuration for presets.
#[derive(Debug, Clone, Default)]
pub struct PresetConfig {
    /// Which environment to build adapters for.
    pub environment: Environment,
}

impl PresetConfig {
    /// Configuration derived from the process environment.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
        }
    }

    /// Configuration that always uses in-memory adapters.
    pub fn test() -> Self {
        Self {
            environment: Environment::Test,
        }
    }
}
