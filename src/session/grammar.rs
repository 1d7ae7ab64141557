//! Grammar answer verification
//!
//! Only subject-verb agreement is graded. It passes when the answer contains
//! one of the language's verb forms, compared case-insensitively as a
//! substring. Every other rule is reported as a work in progress.

use crate::languages::{Language, SUBJECT_VERB_AGREEMENT};

/// How a grammar rule's answers are checked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrammarCheck {
    /// Accept answers containing any of these lowercase verb forms
    SubjectVerbAgreement(&'static [&'static str]),
    /// No checker exists for this rule
    Unimplemented,
}

/// Outcome of grading one answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    WorkInProgress,
}

impl Verdict {
    pub fn earns_point(self) -> bool {
        self == Verdict::Correct
    }
}

impl GrammarCheck {
    /// Choose the checker for a rule in the given language
    pub fn for_rule(rule_name: &str, language: Language) -> Self {
        if rule_name != SUBJECT_VERB_AGREEMENT {
            return GrammarCheck::Unimplemented;
        }

        let forms = language.profile().verb_forms;
        if forms.is_empty() {
            GrammarCheck::Unimplemented
        } else {
            GrammarCheck::SubjectVerbAgreement(forms)
        }
    }

    pub fn evaluate(&self, answer: &str) -> Verdict {
        match self {
            GrammarCheck::SubjectVerbAgreement(forms) => {
                let answer = answer.to_lowercase();
                if forms.iter().any(|form| answer.contains(form)) {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                }
            }
            GrammarCheck::Unimplemented => Verdict::WorkInProgress,
        }
    }
}

/// Grade `answer` for `rule_name` in `language`
pub fn grade(rule_name: &str, language: Language, answer: &str) -> Verdict {
    GrammarCheck::for_rule(rule_name, language).evaluate(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_agreement() {
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::English, "We are happy"),
            Verdict::Correct
        );
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::English, "We happy"),
            Verdict::Incorrect
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::Spanish, "YO HABLO INGLÉS"),
            Verdict::Correct
        );
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::Turkish, "Onlar KONUŞUYORLAR"),
            Verdict::Correct
        );
    }

    #[test]
    fn test_substring_match() {
        // "this" contains "is"
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::English, "this"),
            Verdict::Correct
        );
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::Italian, "Noi parliamo"),
            Verdict::Correct
        );
        assert_eq!(
            grade(SUBJECT_VERB_AGREEMENT, Language::French, "Je mange"),
            Verdict::Incorrect
        );
    }

    #[test]
    fn test_other_rules_are_work_in_progress() {
        for language in Language::ALL {
            let verdict = grade("Past Tense", language, "I was there");
            assert_eq!(verdict, Verdict::WorkInProgress);
            assert!(!verdict.earns_point());
        }
    }

    #[test]
    fn test_rule_name_is_exact() {
        assert_eq!(
            GrammarCheck::for_rule("subject-verb agreement", Language::English),
            GrammarCheck::Unimplemented
        );
    }
}
