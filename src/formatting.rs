//! Terminal output formatting configuration.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Let the colored crate detect terminal support
    Always, // Force colors on
    Never,  // Force colors off
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    /// Resolve from environment variables, then optional CLI override.
    ///
    /// Honors NO_COLOR (per no-color.org) and CLICOLOR/CLICOLOR_FORCE.
    pub fn from_env(plain: bool) -> Self {
        let mut config = Self::default();

        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        if plain {
            config.color = ColorMode::Never;
        }

        config
    }

    /// Push the resolved color decision into the `colored` crate.
    pub fn apply(&self) {
        match self.color {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_flag_wins() {
        let config = FormattingConfig::from_env(true);
        assert_eq!(config.color, ColorMode::Never);
    }
}
