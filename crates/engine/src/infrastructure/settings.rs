//! Conversion settings loaded from the environment.

/// Environment variable toggling relationship-derived metadata.
pub const VIRTUAL_METADATA_VAR: &str = "LIBRIS_VIRTUAL_METADATA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSettings {
    /// Append metadata derived from the item's relationships (`relation.*`).
    pub include_virtual_metadata: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            include_virtual_metadata: true,
        }
    }
}

impl ConversionSettings {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset or unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(VIRTUAL_METADATA_VAR) {
            match parse_flag(&raw) {
                Some(flag) => settings.include_virtual_metadata = flag,
                None => tracing::warn!(
                    variable = VIRTUAL_METADATA_VAR,
                    value = %raw,
                    "Ignoring unrecognised boolean, keeping default"
                ),
            }
        }

        settings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
