//! Password generation functionality

use log::debug;
use serde::{Deserialize, Serialize};

use super::charset::{effective_alphabet, CharacterClass, ClassSet};
use super::random::{OsRandom, RandomSource};
use crate::error::Result;
use crate::{DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Options for password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Password length, kept within [`MIN_PASSWORD_LENGTH`, `MAX_PASSWORD_LENGTH`]
    pub length: usize,
    /// Enabled character classes; empty means "all classes"
    pub classes: ClassSet,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            classes: [
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digits,
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl GenerationConfig {
    /// Create a config, clamping `length` into the supported range
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self {
            length: clamp_length(length),
            classes,
        }
    }

    /// Copy of this config with the length clamped into the supported range
    pub fn clamped(&self) -> Self {
        Self::new(self.length, self.classes)
    }

    /// Parse a config from JSON, e.g. `{"length": 20, "classes": ["lowercase"]}`.
    ///
    /// Missing fields take their default values and the length is clamped.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GenerationConfig = serde_json::from_str(json)?;
        Ok(config.clamped())
    }
}

/// Clamp a requested length into [`MIN_PASSWORD_LENGTH`, `MAX_PASSWORD_LENGTH`]
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

/// Generate a password from `config`, drawing from `rng`.
///
/// Each position is drawn independently and uniformly from the effective
/// alphabet. There is no guarantee that every enabled class appears. Out of
/// range lengths are clamped rather than rejected.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use strongpass::generator::{generate, CharacterClass, ClassSet, GenerationConfig};
///
/// let classes: ClassSet = [CharacterClass::Digits].into_iter().collect();
/// let config = GenerationConfig::new(6, classes);
/// let mut rng = StdRng::seed_from_u64(7);
/// let pin = generate(&config, &mut rng).unwrap();
/// assert_eq!(pin.len(), 6);
/// assert!(pin.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate<R: RandomSource + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<String> {
    let config = config.clamped();
    let alphabet = effective_alphabet(&config.classes);
    let mut password = String::with_capacity(config.length);

    for _ in 0..config.length {
        let idx = rng.next_index(alphabet.len())?;
        password.push(alphabet[idx]);
    }

    debug!(
        "generated password: length={}, alphabet={}",
        config.length,
        alphabet.len()
    );
    Ok(password)
}

/// Generate a password using the operating system RNG
pub fn generate_password(config: &GenerationConfig) -> Result<String> {
    generate(config, &mut OsRandom)
}
