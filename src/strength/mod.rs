//! Password strength estimation
//!
//! The score is the sum of three capped terms:
//! - length (up to 60 points)
//! - character class diversity (7.5 points per class present, up to 30)
//! - completeness bonus for long, diverse passwords (up to 10)
//!
//! The score is then quantized into five [`StrengthLevel`]s. The scorer makes
//! no assumption that the password came from this crate's generator.

use serde::{Deserialize, Serialize};

use crate::generator::CharacterClass;

const LENGTH_CAP: f64 = 60.0;
const CLASS_POINTS: f64 = 7.5;
const COMPLETENESS_STEP: f64 = 5.0;

/// Which character classes occur in a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterProfile {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterProfile {
    /// Analyze a password. Each predicate is tested independently.
    pub fn of(password: &str) -> Self {
        let present = |class: CharacterClass| password.chars().any(|c| class.matches(c));
        Self {
            has_upper: present(CharacterClass::Uppercase),
            has_lower: present(CharacterClass::Lowercase),
            has_digit: present(CharacterClass::Digits),
            has_special: present(CharacterClass::Special),
        }
    }

    /// Number of classes present, 0 to 4
    pub fn class_count(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .into_iter()
            .filter(|p| *p)
            .count()
    }
}

/// Discrete strength band derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Mediocre,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Numeric level, 0 (very weak) to 4 (very strong)
    pub fn index(self) -> u8 {
        match self {
            StrengthLevel::VeryWeak => 0,
            StrengthLevel::Weak => 1,
            StrengthLevel::Mediocre => 2,
            StrengthLevel::Strong => 3,
            StrengthLevel::VeryStrong => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(StrengthLevel::VeryWeak),
            1 => Some(StrengthLevel::Weak),
            2 => Some(StrengthLevel::Mediocre),
            3 => Some(StrengthLevel::Strong),
            4 => Some(StrengthLevel::VeryStrong),
            _ => None,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Mediocre => "Mediocre",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    /// Indicator colour as a hex RGB string, red for weak through green for strong
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "#FF4D4F",
            StrengthLevel::Weak => "#FF7A45",
            StrengthLevel::Mediocre => "#FFA940",
            StrengthLevel::Strong => "#73D13D",
            StrengthLevel::VeryStrong => "#52C41A",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric score together with its level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthScore {
    /// Score in `[0, 100]`
    pub value: f64,
    pub level: StrengthLevel,
}

/// Points for a password of `length` characters, capped at 60
pub fn length_points(length: usize) -> f64 {
    let l = length as f64;
    match length {
        0..=4 => 3.0 * l,
        5..=8 => 12.0 + 4.0 * (l - 4.0),
        9..=12 => 28.0 + 5.0 * (l - 8.0),
        _ => LENGTH_CAP.min(48.0 + 3.0 * (l - 12.0)),
    }
}

/// 7.5 points per character class present, capped at 30
pub fn diversity_points(profile: &CharacterProfile) -> f64 {
    CLASS_POINTS * profile.class_count() as f64
}

/// Bonus for long passwords that mix classes, capped at 10.
///
/// +5 at length 10 with three or more classes, a further +5 at length 14
/// with all four.
pub fn completeness_points(length: usize, profile: &CharacterProfile) -> f64 {
    let classes = profile.class_count();
    let mut points = 0.0;
    if length >= 10 && classes >= 3 {
        points += COMPLETENESS_STEP;
    }
    if length >= 14 && classes >= 4 {
        points += COMPLETENESS_STEP;
    }
    points
}

/// Strength score of `password` in `[0, 100]`.
///
/// Length is measured in characters. The empty string scores 0.
pub fn score_value(password: &str) -> f64 {
    let length = password.chars().count();
    let profile = CharacterProfile::of(password);
    length_points(length) + diversity_points(&profile) + completeness_points(length, &profile)
}

/// Quantize a score into a level using thresholds 20, 40, 60 and 80.
///
/// Each threshold belongs to the band above it.
pub fn level_for(score: f64) -> StrengthLevel {
    if score < 20.0 {
        StrengthLevel::VeryWeak
    } else if score < 40.0 {
        StrengthLevel::Weak
    } else if score < 60.0 {
        StrengthLevel::Mediocre
    } else if score < 80.0 {
        StrengthLevel::Strong
    } else {
        StrengthLevel::VeryStrong
    }
}

/// Score `password` and quantize the result
pub fn score(password: &str) -> StrengthScore {
    let value = score_value(password);
    StrengthScore {
        value,
        level: level_for(value),
    }
}
