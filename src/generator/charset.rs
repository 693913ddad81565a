//! Character classes and alphabet construction

use serde::{Deserialize, Serialize};

const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A class of characters that can be enabled for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// All classes, in alphabet concatenation order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    /// Literal characters the generator draws from for this class
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPER_LETTERS,
            CharacterClass::Lowercase => LOWER_LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL_SYMBOLS,
        }
    }

    /// Whether `ch` belongs to this class for strength analysis.
    ///
    /// `Special` covers anything outside `A-Z`, `a-z` and `0-9`, so it is
    /// wider than the generator's own punctuation set.
    pub fn matches(self, ch: char) -> bool {
        match self {
            CharacterClass::Uppercase => ch.is_ascii_uppercase(),
            CharacterClass::Lowercase => ch.is_ascii_lowercase(),
            CharacterClass::Digits => ch.is_ascii_digit(),
            CharacterClass::Special => !ch.is_ascii_alphanumeric(),
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 0b0001,
            CharacterClass::Lowercase => 0b0010,
            CharacterClass::Digits => 0b0100,
            CharacterClass::Special => 0b1000,
        }
    }
}

/// Set of enabled character classes. Order of insertion is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CharacterClass>", into = "Vec<CharacterClass>")]
pub struct ClassSet(u8);

impl ClassSet {
    /// The empty set
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    /// Every class enabled
    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Add a class, returning whether it was newly added
    pub fn insert(&mut self, class: CharacterClass) -> bool {
        let added = !self.contains(class);
        self.0 |= class.bit();
        added
    }

    /// Remove a class, returning whether it was present
    pub fn remove(&mut self, class: CharacterClass) -> bool {
        let present = self.contains(class);
        self.0 &= !class.bit();
        present
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl From<Vec<CharacterClass>> for ClassSet {
    fn from(classes: Vec<CharacterClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<ClassSet> for Vec<CharacterClass> {
    fn from(set: ClassSet) -> Self {
        set.iter().collect()
    }
}

/// Build the alphabet for a set of classes.
///
/// Literals are concatenated in fixed order (upper, lower, digits, special)
/// regardless of how the set was built. An empty set falls back to the
/// union of all four classes, so generation always has characters to draw.
pub fn effective_alphabet(classes: &ClassSet) -> Vec<char> {
    let selected = if classes.is_empty() {
        ClassSet::all()
    } else {
        *classes
    };

    selected
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Special.alphabet().len(), 26);
    }

    #[test]
    fn test_alphabets_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a == b {
                    continue;
                }
                assert!(a.alphabet().chars().all(|c| !b.alphabet().contains(c)));
            }
        }
    }

    #[test]
    fn test_matches_own_alphabet() {
        for class in CharacterClass::ALL {
            assert!(class.alphabet().chars().all(|c| class.matches(c)), "{:?}", class);
        }
    }

    #[test]
    fn test_special_matches_foreign_chars() {
        assert!(CharacterClass::Special.matches(' '));
        assert!(CharacterClass::Special.matches('~'));
        assert!(CharacterClass::Special.matches('é'));
        assert!(CharacterClass::Special.matches('密'));
        assert!(!CharacterClass::Special.matches('Z'));
        assert!(!CharacterClass::Special.matches('5'));
        // Non-ASCII letters are not counted as upper or lower
        assert!(!CharacterClass::Uppercase.matches('É'));
        assert!(!CharacterClass::Lowercase.matches('é'));
    }

    #[test]
    fn test_class_set_operations() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        assert!(set.insert(CharacterClass::Digits));
        assert!(!set.insert(CharacterClass::Digits));
        assert!(set.insert(CharacterClass::Uppercase));
        assert_eq!(set.len(), 2);
        assert!(set.contains(CharacterClass::Digits));
        assert!(!set.contains(CharacterClass::Special));

        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Uppercase, CharacterClass::Digits]);

        assert!(set.remove(CharacterClass::Digits));
        assert!(!set.remove(CharacterClass::Digits));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_effective_alphabet_fixed_order() {
        let set: ClassSet = [CharacterClass::Special, CharacterClass::Uppercase]
            .into_iter()
            .collect();
        let alphabet: String = effective_alphabet(&set).into_iter().collect();
        assert_eq!(alphabet, format!("{}{}", UPPER_LETTERS, SPECIAL_SYMBOLS));
    }

    #[test]
    fn test_effective_alphabet_empty_fallback() {
        let alphabet: String = effective_alphabet(&ClassSet::empty()).into_iter().collect();
        assert_eq!(
            alphabet,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?"
        );
        assert_eq!(alphabet.len(), 88);
    }

    #[test]
    fn test_class_set_serde() {
        let set: ClassSet = [CharacterClass::Lowercase, CharacterClass::Uppercase]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["uppercase","lowercase"]"#);

        let parsed: ClassSet = serde_json::from_str(r#"["special","digits","special"]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains(CharacterClass::Special));
        assert!(parsed.contains(CharacterClass::Digits));
    }
}
