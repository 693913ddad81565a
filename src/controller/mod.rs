//! UI-facing controller
//!
//! Owns the current configuration and the most recent password, and
//! regenerates whenever the configuration changes. Rendering is left to the
//! caller, which reads [`Controller::current`] after each call.

mod debounce;

pub use debounce::Debouncer;

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::generator::password::clamp_length;
use crate::generator::{generate, CharacterClass, GenerationConfig, OsRandom, RandomSource};
use crate::strength::{score, StrengthScore};
use crate::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// One generation cycle: a password and its strength
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation {
    pub password: String,
    pub strength: StrengthScore,
}

/// Password generator state machine
pub struct Controller<R: RandomSource = OsRandom> {
    config: GenerationConfig,
    rng: R,
    current: Generation,
}

impl Controller<OsRandom> {
    /// Controller with the default configuration and the OS random source
    pub fn new() -> Result<Self> {
        Self::with_source(GenerationConfig::default(), OsRandom)
    }
}

impl<R: RandomSource> Controller<R> {
    /// Create a controller and produce the initial password
    pub fn with_source(config: GenerationConfig, mut rng: R) -> Result<Self> {
        let config = config.clamped();
        let current = Self::cycle(&config, &mut rng)?;
        Ok(Self { config, rng, current })
    }

    fn cycle(config: &GenerationConfig, rng: &mut R) -> Result<Generation> {
        let password = generate(config, rng)?;
        let strength = score(&password);
        debug!(
            "new password: length={}, score={}, level={}",
            config.length,
            strength.value,
            strength.level.index()
        );
        Ok(Generation { password, strength })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Most recent password and its strength
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Draw a fresh password with the current configuration
    pub fn regenerate(&mut self) -> Result<&Generation> {
        self.current = Self::cycle(&self.config, &mut self.rng)?;
        Ok(&self.current)
    }

    /// Set the length (clamped) and regenerate.
    ///
    /// Returns whether the length changed. The password is regenerated
    /// either way, matching a slider release.
    pub fn set_length(&mut self, length: usize) -> Result<bool> {
        let length = clamp_length(length);
        let changed = length != self.config.length;
        self.config.length = length;
        self.regenerate()?;
        Ok(changed)
    }

    /// Add one character. No-op at the maximum.
    pub fn increase_length(&mut self) -> Result<bool> {
        if !self.can_increase() {
            return Ok(false);
        }
        self.set_length(self.config.length + 1)
    }

    /// Remove one character. No-op at the minimum.
    pub fn decrease_length(&mut self) -> Result<bool> {
        if !self.can_decrease() {
            return Ok(false);
        }
        self.set_length(self.config.length - 1)
    }

    pub fn can_increase(&self) -> bool {
        self.config.length < MAX_PASSWORD_LENGTH
    }

    pub fn can_decrease(&self) -> bool {
        self.config.length > MIN_PASSWORD_LENGTH
    }

    /// Whether `class` is the only enabled class and so cannot be turned off
    pub fn is_class_locked(&self, class: CharacterClass) -> bool {
        self.config.classes.len() == 1 && self.config.classes.contains(class)
    }

    /// Enable or disable a class and regenerate if the set changed.
    ///
    /// Disabling the last enabled class is refused and returns `false`.
    pub fn set_class_enabled(&mut self, class: CharacterClass, enabled: bool) -> Result<bool> {
        if !enabled && self.is_class_locked(class) {
            debug!("refusing to disable last enabled class {:?}", class);
            return Ok(false);
        }

        let changed = if enabled {
            self.config.classes.insert(class)
        } else {
            self.config.classes.remove(class)
        };

        if changed {
            self.regenerate()?;
        }
        Ok(changed)
    }

    /// Slider fill for the current length, 0.0 at the minimum to 100.0 at the maximum
    pub fn fill_percent(&self) -> f64 {
        let span = (MAX_PASSWORD_LENGTH - MIN_PASSWORD_LENGTH) as f64;
        100.0 * (self.config.length - MIN_PASSWORD_LENGTH) as f64 / span
    }
}
