use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Sanitization profile selected by the rendering context.
///
/// The default profile keeps styling attributes and still refuses embeds;
/// embeds are opted into per call-site (admin previews). Strict mode is for
/// surfaces that render model output or student-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    /// Additionally drop `style`/`class` attributes and refuse embeds.
    #[serde(default)]
    pub strict: bool,
    /// Permit the embed tag with its dedicated attribute list.
    /// Has no effect in strict mode.
    #[serde(default)]
    pub allow_embeds: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SanitizeOptions {
    pub const DEFAULT: Self = Self {
        strict: false,
        allow_embeds: false,
    };

    pub const STRICT: Self = Self {
        strict: true,
        allow_embeds: false,
    };

    /// Embeds are never allowed in strict mode, regardless of the flag.
    pub fn embeds_enabled(&self) -> bool {
        self.allow_embeds && !self.strict
    }

    /// Read the profile from the environment (`HTMLSAFE_STRICT`,
    /// `HTMLSAFE_ALLOW_EMBEDS`). Unset variables keep their defaults;
    /// values that are present but not recognizable booleans are an error.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            strict: env_flag("HTMLSAFE_STRICT")?.unwrap_or(false),
            allow_embeds: env_flag("HTMLSAFE_ALLOW_EMBEDS")?.unwrap_or(false),
        })
    }
}

fn env_flag(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "" | "0" | "false" | "no" | "off" => Ok(Some(false)),
            other => bail!("unrecognized boolean {:?} in {}", other, name),
        },
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_overrides_embeds() {
        let opts = SanitizeOptions {
            strict: true,
            allow_embeds: true,
        };
        assert!(!opts.embeds_enabled());
        assert!(SanitizeOptions {
            strict: false,
            allow_embeds: true,
        }
        .embeds_enabled());
    }

    #[test]
    fn test_from_env_roundtrip() {
        // Single test so the fixed variable names are not raced by
        // parallel test threads.
        std::env::remove_var("HTMLSAFE_STRICT");
        std::env::remove_var("HTMLSAFE_ALLOW_EMBEDS");
        assert_eq!(SanitizeOptions::from_env().unwrap(), SanitizeOptions::DEFAULT);

        std::env::set_var("HTMLSAFE_STRICT", "true");
        std::env::set_var("HTMLSAFE_ALLOW_EMBEDS", "0");
        let opts = SanitizeOptions::from_env().unwrap();
        assert!(opts.strict);
        assert!(!opts.allow_embeds);

        std::env::set_var("HTMLSAFE_STRICT", "maybe");
        assert!(SanitizeOptions::from_env().is_err());

        std::env::remove_var("HTMLSAFE_STRICT");
        std::env::remove_var("HTMLSAFE_ALLOW_EMBEDS");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: SanitizeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, SanitizeOptions::DEFAULT);
        let opts: SanitizeOptions =
            serde_json::from_str(r#"{"strict":true,"allow_embeds":true}"#).unwrap();
        assert!(opts.strict && opts.allow_embeds);
    }
}
