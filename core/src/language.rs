use serde::{Deserialize, Serialize};

/// Language of clues and answers; selects the answer alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

const ENGLISH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SPANISH_ALPHABET: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    /// Name shown in the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    pub fn alphabet(&self) -> &'static str {
        match self {
            Language::English => ENGLISH_ALPHABET,
            Language::Spanish => SPANISH_ALPHABET,
        }
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Uppercase `answer` and drop everything outside the alphabet.
    pub fn normalize(&self, answer: &str) -> String {
        answer
            .to_uppercase()
            .chars()
            .filter(|&c| self.is_letter(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_english() {
        assert_eq!(Language::English.normalize("New York!"), "NEWYORK");
        assert_eq!(Language::English.normalize("año"), "AO");
    }

    #[test]
    fn test_normalize_spanish_keeps_enye() {
        assert_eq!(Language::Spanish.normalize("año"), "AÑO");
        assert_eq!(Language::Spanish.normalize("canción"), "CANCIN");
    }
}
