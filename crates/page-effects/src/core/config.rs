//! Tunables for the page effects.
//!
//! # Design
//! - Every field has a default matching the stock markup, so an empty or
//!   absent override document yields the stock behavior.
//! - Overrides come from an inline JSON `<script>` block; any subset of
//!   fields may be given.
//! - Validation rejects values that would stall or break a timer loop.

use crate::core::breakpoints;
use crate::core::error::EffectsError;
use crate::core::particles::{DEFAULT_CONTAINERS, SpawnPlan};
use crate::core::typing::{DEFAULT_PHRASES, TypingTimings};
use serde::Deserialize;
use thiserror::Error;

/// Id of the optional inline override block.
pub const CONFIG_SCRIPT_ID: &str = "page-effects-config";

/// Validation failures for [`EffectsConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No phrases to animate.
    #[error("typing phrase list is empty")]
    NoPhrases,
    /// A phrase with no characters would never reach its end state.
    #[error("typing phrase {index} is empty")]
    EmptyPhrase {
        /// Position in the phrase list.
        index: usize,
    },
    /// A timer period of zero would spin the event loop.
    #[error("{field} must be greater than zero")]
    ZeroInterval {
        /// Offending field name.
        field: &'static str,
    },
}

/// Typing animation settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// Phrases cycled in order.
    pub phrases: Vec<String>,
    /// Delay before the first tick.
    pub start_delay_ms: u32,
    /// Per-character typing delay.
    pub type_ms: u32,
    /// Per-character deletion delay.
    pub delete_ms: u32,
    /// Hold on the complete phrase.
    pub hold_ms: u32,
    /// Pause before the next phrase.
    pub next_phrase_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        let timings = TypingTimings::default();
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            start_delay_ms: 500,
            type_ms: timings.type_ms,
            delete_ms: timings.delete_ms,
            hold_ms: timings.hold_ms,
            next_phrase_ms: timings.next_phrase_ms,
        }
    }
}

impl TypingConfig {
    /// Step delays for the animator.
    #[must_use]
    pub const fn timings(&self) -> TypingTimings {
        TypingTimings {
            type_ms: self.type_ms,
            delete_ms: self.delete_ms,
            hold_ms: self.hold_ms,
            next_phrase_ms: self.next_phrase_ms,
        }
    }
}

/// Particle settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// Container element ids.
    pub containers: Vec<String>,
    /// Particles created at start.
    pub initial_burst: u32,
    /// Gap between burst particles.
    pub burst_stagger_ms: u32,
    /// Continuous spawn period.
    pub interval_ms: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        let plan = SpawnPlan::default();
        Self {
            containers: DEFAULT_CONTAINERS.iter().map(|c| (*c).to_string()).collect(),
            initial_burst: plan.initial_burst,
            burst_stagger_ms: plan.burst_stagger_ms,
            interval_ms: plan.interval_ms,
        }
    }
}

impl ParticleConfig {
    /// Spawn cadence shared by every container.
    #[must_use]
    pub const fn plan(&self) -> SpawnPlan {
        SpawnPlan {
            initial_burst: self.initial_burst,
            burst_stagger_ms: self.burst_stagger_ms,
            interval_ms: self.interval_ms,
        }
    }
}

/// Sidebar settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Link clicks below this viewport width close the sidebar.
    pub auto_close_below_px: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            auto_close_below_px: breakpoints::MD.min_width,
        }
    }
}

/// Complete effects configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    /// Typing animation.
    pub typing: TypingConfig,
    /// Floating particles.
    pub particles: ParticleConfig,
    /// Sidebar navigation.
    pub sidebar: SidebarConfig,
}

impl EffectsConfig {
    /// Decode an override document.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when `raw` is not a valid document.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Check the values the timer loops depend on.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(index) = self.typing.phrases.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyPhrase { index });
        }
        let periods = [
            ("typing.type_ms", self.typing.type_ms),
            ("typing.delete_ms", self.typing.delete_ms),
            ("particles.interval_ms", self.particles.interval_ms),
        ];
        if let Some(&(field, _)) = periods.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroInterval { field });
        }
        Ok(())
    }

    /// Resolve the configuration from an optional override document.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::Decode`] or [`EffectsError::Invalid`]; callers
    /// fall back to [`EffectsConfig::default`].
    pub fn from_override(raw: Option<&str>) -> Result<Self, EffectsError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        let config = Self::from_json(raw)?;
        config.validate()?;
        Ok(config)
    }
}
