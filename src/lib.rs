//! # strongpass
//!
//! Password generator core: random passwords from configurable character
//! classes, plus a heuristic strength score.
//!
//! ## Features
//!
//! - Four character classes (uppercase, lowercase, digits, special)
//! - Injectable randomness source, OS-backed by default
//! - Strength score in `[0, 100]` quantized into five levels
//! - A UI-agnostic controller with length stepping and input debouncing
//!
//! ## Example
//!
//! ```
//! use strongpass::{generate_password, score, GenerationConfig};
//!
//! let config = GenerationConfig::default();
//! let password = generate_password(&config).unwrap();
//! assert_eq!(password.chars().count(), 15);
//!
//! let strength = score(&password);
//! println!("{} ({})", strength.level.label(), strength.value);
//! ```

pub mod controller;
pub mod error;
pub mod generator;
pub mod strength;

// Re-export main types
pub use error::{PasswordError, Result};
pub use generator::{
    effective_alphabet, generate, generate_password, CharacterClass, ClassSet, GenerationConfig,
    OsRandom, RandomSource,
};
pub use strength::{level_for, score, score_value, CharacterProfile, StrengthLevel, StrengthScore};
pub use controller::{Controller, Debouncer, Generation};

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 1;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 50;

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 15;

/// Quiet period before a burst of length changes is applied, in milliseconds
pub const DEBOUNCE_DELAY_MS: u64 = 50;
