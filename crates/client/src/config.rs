use std::env;

use slotsync_core::availability::BUCKET_COUNT;

/// Default log filter when neither `RUST_LOG` nor `SLOTSYNC_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "slotsync=info";

/// Default characters for drawing heat buckets, lightest first.
pub const DEFAULT_HEAT_GLYPHS: &str = " .:-=+*#%@";

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive (default: "slotsync=info")
    pub log_filter: String,
    /// One glyph per heat bucket (default: " .:-=+*#%@")
    pub heat_glyphs: Vec<char>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SLOTSYNC_LOG` - Log filter used when `RUST_LOG` is unset (default: "slotsync=info")
    /// - `SLOTSYNC_HEAT_GLYPHS` - Exactly ten bucket glyphs (default: " .:-=+*#%@")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Runs before the subscriber exists, so a bad value falls back silently.
        let heat_glyphs = lookup("SLOTSYNC_HEAT_GLYPHS")
            .and_then(|raw| parse_glyphs(&raw))
            .unwrap_or_else(default_glyphs);

        Self {
            log_filter: lookup("SLOTSYNC_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            heat_glyphs,
        }
    }

    /// Glyph for `bucket`, clamped to the darkest one.
    pub fn glyph(&self, bucket: u8) -> char {
        let index = (bucket as usize).min(self.heat_glyphs.len().saturating_sub(1));
        self.heat_glyphs.get(index).copied().unwrap_or('?')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            heat_glyphs: default_glyphs(),
        }
    }
}

fn default_glyphs() -> Vec<char> {
    DEFAULT_HEAT_GLYPHS.chars().collect()
}

fn parse_glyphs(raw: &str) -> Option<Vec<char>> {
    let glyphs: Vec<char> = raw.chars().collect();
    (glyphs.len() == BUCKET_COUNT as usize).then_some(glyphs)
}
