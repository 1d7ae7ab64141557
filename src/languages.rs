//! Supported languages and their seed lessons
//!
//! Each language maps to a fixed profile:
//! - Three vocabulary pairs
//! - The "Subject-Verb Agreement" rule with two examples
//! - The verb forms accepted when grading that rule

use std::fmt;

use clap::ValueEnum;

/// Name of the only grammar rule that is actually graded
pub const SUBJECT_VERB_AGREEMENT: &str = "Subject-Verb Agreement";

const AGREEMENT_DESCRIPTION: &str = "The verb must agree with the subject in number and person.";

/// Languages offered at startup, in prompt order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    English,
    Spanish,
    French,
    Turkish,
    Italian,
}

/// Seed data for one language
#[derive(Clone, Copy, Debug)]
pub struct LanguageProfile {
    /// (word, translation) pairs
    pub vocabulary: &'static [(&'static str, &'static str)],
    /// (rule name, description, examples)
    pub grammar: &'static [(&'static str, &'static str, &'static [&'static str])],
    /// Lowercase verb forms accepted for subject-verb agreement
    pub verb_forms: &'static [&'static str],
}

impl Language {
    /// All languages in the order they are listed to the user
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Turkish,
        Language::Italian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Turkish => "Turkish",
            Language::Italian => "Italian",
        }
    }

    /// Pick a language by its 1-based position in the startup list
    pub fn from_position(position: usize) -> Option<Language> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
            Language::French => &FRENCH,
            Language::Turkish => &TURKISH,
            Language::Italian => &ITALIAN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static ENGLISH: LanguageProfile = LanguageProfile {
    vocabulary: &[
        ("hello", "hola"),
        ("thank you", "gracias"),
        ("goodbye", "adiós"),
    ],
    grammar: &[(
        SUBJECT_VERB_AGREEMENT,
        AGREEMENT_DESCRIPTION,
        &["I speak English.", "We speak English."],
    )],
    verb_forms: &["am", "is", "are", "was", "were"],
};

static SPANISH: LanguageProfile = LanguageProfile {
    vocabulary: &[
        ("hola", "hello"),
        ("gracias", "thank you"),
        ("adiós", "goodbye"),
    ],
    grammar: &[(
        SUBJECT_VERB_AGREEMENT,
        AGREEMENT_DESCRIPTION,
        &["Yo hablo español.", "Nosotros hablamos español."],
    )],
    verb_forms: &["hablo", "hablas", "habla", "hablamos", "habláis", "hablan"],
};

static FRENCH: LanguageProfile = LanguageProfile {
    vocabulary: &[
        ("bonjour", "hello"),
        ("merci", "thank you"),
        ("au revoir", "goodbye"),
    ],
    grammar: &[(
        SUBJECT_VERB_AGREEMENT,
        AGREEMENT_DESCRIPTION,
        &["Je parle français.", "Nous parlons français."],
    )],
    verb_forms: &["parle", "parles", "parlons", "parlez", "parlent"],
};

static TURKISH: LanguageProfile = LanguageProfile {
    vocabulary: &[
        ("merhaba", "hello"),
        ("teşekkür ederim", "thank you"),
        ("güle güle", "goodbye"),
    ],
    grammar: &[(
        SUBJECT_VERB_AGREEMENT,
        AGREEMENT_DESCRIPTION,
        &["Ben Türkçe konuşuyorum.", "Biz Türkçe konuşuyoruz."],
    )],
    verb_forms: &[
        "konuşuyorum",
        "konuşuyorsun",
        "konuşuyor",
        "konuşuyoruz",
        "konuşuyorsunuz",
        "konuşuyorlar",
    ],
};

static ITALIAN: LanguageProfile = LanguageProfile {
    vocabulary: &[
        ("ciao", "hello"),
        ("grazie", "thank you"),
        ("arrivederci", "goodbye"),
    ],
    grammar: &[(
        SUBJECT_VERB_AGREEMENT,
        AGREEMENT_DESCRIPTION,
        &["Io parlo italiano.", "Noi parliamo italiano."],
    )],
    verb_forms: &["parlo", "parli", "parla", "parliamo", "parlate", "parlano"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position() {
        assert_eq!(Language::from_position(1), Some(Language::English));
        assert_eq!(Language::from_position(4), Some(Language::Turkish));
        assert_eq!(Language::from_position(5), Some(Language::Italian));
        assert_eq!(Language::from_position(0), None);
        assert_eq!(Language::from_position(6), None);
    }

    #[test]
    fn test_every_profile_seeds_three_words_and_one_rule() {
        for language in Language::ALL {
            let profile = language.profile();
            assert_eq!(profile.vocabulary.len(), 3, "{language}");
            assert_eq!(profile.grammar.len(), 1, "{language}");
            let (name, _, examples) = profile.grammar[0];
            assert_eq!(name, SUBJECT_VERB_AGREEMENT);
            assert_eq!(examples.len(), 2);
            assert!(!profile.verb_forms.is_empty());
        }
    }

    #[test]
    fn test_verb_forms_are_lowercase() {
        for language in Language::ALL {
            for form in language.profile().verb_forms {
                assert_eq!(form.to_lowercase(), *form);
            }
        }
    }
}
