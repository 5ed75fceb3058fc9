//! # Form Configuration
//!
//! Business defaults the form session needs at construction time.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CAJA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};

/// Form session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Fractional tax rate applied when a quick-add payload carries no
    /// rate of its own (the business default; 0.16 = 16% IVA).
    pub default_tax_rate: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            default_tax_rate: 0.16,
        }
    }
}

impl FormConfig {
    /// Creates a FormConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CAJA_DEFAULT_TAX_RATE`: Override the default tax rate (e.g. "0.16")
    pub fn from_env() -> Self {
        let mut config = FormConfig::default();

        if let Ok(rate_str) = std::env::var("CAJA_DEFAULT_TAX_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.default_tax_rate = rate;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let config = FormConfig::default();
        assert!((config.default_tax_rate - 0.16).abs() < 1e-9);
    }
}
