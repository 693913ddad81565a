//! Password generation
//!
//! Builds an alphabet from the enabled character classes and draws each
//! position independently from an injected randomness source.

pub mod charset;
pub mod random;
pub mod password;

pub use charset::{effective_alphabet, CharacterClass, ClassSet};
pub use random::{OsRandom, RandomSource};
pub use password::{generate, generate_password, GenerationConfig};
