//! Panel display configuration.
//!
//! The firmware build embeds the configuration as a postcard blob; string
//! fields borrow from that blob.

use alloc::vec::Vec;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::datetime::{DateStyle, TimeStyle};
use crate::glyph::{Glyph, GlyphError};
use crate::icons::{FALLBACK_CODEPOINT, MDI_PREFIX};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config decoding failed: {0}")]
    Decode(postcard::Error),
    #[error("Config encoding failed: {0}")]
    Encode(postcard::Error),
    #[error("Invalid fallback icon: {0}")]
    Fallback(GlyphError),
    #[error("Icon prefix must not be empty")]
    EmptyPrefix,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(bound(deserialize = "'de: 'a"))]
pub struct Config<'a> {
    pub clock: ClockConfig,
    pub icons: IconConfig<'a>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub date_style: DateStyle,
    pub time_style: TimeStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconConfig<'a> {
    /// Stripped from icon names before lookup, e.g. `"mdi:"`.
    pub prefix: &'a str,
    /// Codepoint rendered for unknown icon names.
    pub fallback_codepoint: u32,
}

impl Default for IconConfig<'_> {
    fn default() -> Self {
        Self {
            prefix: MDI_PREFIX,
            fallback_codepoint: FALLBACK_CODEPOINT,
        }
    }
}

impl IconConfig<'_> {
    /// Check the section and return the encoded fallback glyph.
    pub fn validate(&self) -> Result<Glyph, ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Glyph::from_codepoint(self.fallback_codepoint).map_err(ConfigError::Fallback)
    }
}

impl<'a> Config<'a> {
    /// Decode and validate a postcard-encoded configuration.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ConfigError> {
        let config: Config<'a> = postcard::from_bytes(bytes).map_err(ConfigError::Decode)?;
        config.icons.validate()?;
        debug!("Loaded display config: {:?}", config);
        Ok(config)
    }

    /// Encode the configuration with postcard.
    pub fn to_vec(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }
}
