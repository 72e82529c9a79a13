//! # Configuration
//!
//! Presentation defaults for clients, loaded by [`confique`] from a TOML
//! file with environment-variable overrides (`KEEPSAKE__PAGE_SIZE`, ...).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `25` | Rows per rendered table page |
//! | `default_range` | `"any"` | Date-range preset applied when none is given |
//! | `show_resolved` | `false` | Whether report lists include dismissed/removed rows by default |

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::facets::DateRange;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeepsakeConfig {
    /// Rows per rendered table page.
    #[config(default = 25, env = "KEEPSAKE__PAGE_SIZE")]
    pub page_size: usize,

    /// Date-range preset applied when none is given
    /// ("any", "today", "week", "month").
    #[config(default = "any", env = "KEEPSAKE__DEFAULT_RANGE")]
    pub default_range: String,

    /// Whether report lists include dismissed/removed rows by default.
    #[config(default = false, env = "KEEPSAKE__SHOW_RESOLVED")]
    pub show_resolved: bool,
}

impl Default for KeepsakeConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            default_range: "any".to_string(),
            show_resolved: false,
        }
    }
}

impl KeepsakeConfig {
    /// Load from a TOML file if it exists, otherwise compiled defaults.
    /// Environment variables win over the file.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            if path.exists() {
                builder = builder.file(path);
            }
        }
        builder
            .load()
            .map_err(|e| crate::error::KeepsakeError::Store(format!("config: {}", e)))
    }

    /// The configured default range, validated.
    pub fn default_range(&self) -> Result<DateRange> {
        DateRange::parse(&self.default_range)
    }
}
