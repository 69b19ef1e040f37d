//! Built-in rewrite steps

use super::{RewriteRule, RewriteStep, RuleStep};
use crate::error::{CoreError, Result};
use crate::pattern::{Flags, Fragment, Template};
use unicode_normalization::UnicodeNormalization;

/// Insert a space after tone-modifying punctuation glued to the next word
///
/// The tone-mark boundary splits on the character following the mark, so
/// that character should be whitespace.
pub fn tone_mark_spacer(tone_marks: &str) -> Result<RuleStep> {
    let rule = RewriteRule::new(
        &Fragment::chars(tone_marks),
        &Template::lookbehind(r"(?=\S)"),
        " ",
        Flags::NONE,
    )?;
    Ok(RuleStep::new("tone_marks", rule))
}

/// Re-join words cut by an end-of-line hyphen
pub fn end_of_line_joiner() -> Result<RuleStep> {
    let rule = RewriteRule::new(
        &[Fragment::literal("-")],
        &Template::suffix(r"\r?\n"),
        "",
        Flags::NONE,
    )?;
    Ok(RuleStep::new("end_of_line", rule))
}

/// Drop the period directly after a known abbreviation (case-insensitive)
///
/// Note: this also drops a sentence-final period after a word that ends
/// with one of the abbreviations.
pub fn abbreviation_stripper<S: AsRef<str>>(abbreviations: &[S]) -> Result<RuleStep> {
    let rule = RewriteRule::new(
        &Fragment::words(abbreviations.iter().map(|a| a.as_ref().to_string())),
        &Template::lookbehind(r"(?=\.)."),
        "",
        Flags::IGNORE_CASE,
    )?;
    Ok(RuleStep::new("abbreviations", rule))
}

fn word_start(fragment: &str) -> String {
    let normalized: String = fragment.nfc().collect();
    format!(r"(?<!\w){normalized}")
}

/// Ordered word-for-word substitutions
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    rules: Vec<RewriteRule>,
}

impl SubstitutionTable {
    /// Build from `(pattern, replacement)` pairs
    pub fn new<I, P, R>(pairs: I, ignore_case: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: AsRef<str>,
    {
        let flags = Flags::NONE.case_insensitive(ignore_case);
        let mut rules = Vec::new();

        for (pattern, replacement) in pairs {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(CoreError::config("substitution pattern is empty"));
            }
            rules.push(RewriteRule::new(
                &[Fragment::literal(pattern)],
                &Template::Custom(word_start),
                replacement.as_ref(),
                flags,
            )?);
        }

        Ok(Self { rules })
    }

    /// Rules in application order
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }
}

impl RewriteStep for SubstitutionTable {
    fn name(&self) -> &str {
        "substitutions"
    }

    fn apply(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule.apply(&current)?;
        }
        Ok(current)
    }
}

/// Build a [`SubstitutionTable`] from configuration pairs
///
/// Every pair must hold exactly a pattern and its replacement.
pub fn substitution_table(pairs: &[Vec<String>], ignore_case: bool) -> Result<SubstitutionTable> {
    let mut checked = Vec::with_capacity(pairs.len());
    for pair in pairs {
        match pair.as_slice() {
            [pattern, replacement] => checked.push((pattern.as_str(), replacement.as_str())),
            [pattern] => {
                return Err(CoreError::config(format!(
                    "substitution pair '{pattern}' is missing its replacement"
                )))
            }
            other => {
                return Err(CoreError::config(format!(
                    "substitution pair must have 2 entries, found {}",
                    other.len()
                )))
            }
        }
    }
    SubstitutionTable::new(checked, ignore_case)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_marks_get_a_space() {
        let step = tone_mark_spacer("?!？！").unwrap();
        assert_eq!(step.apply("Really?Yes!").unwrap(), "Really? Yes!");
        assert_eq!(step.apply("Already? Spaced!").unwrap(), "Already? Spaced!");
        assert_eq!(step.apply("好吗？好！").unwrap(), "好吗？ 好！");
    }

    #[test]
    fn test_end_of_line_hyphen() {
        let step = end_of_line_joiner().unwrap();
        assert_eq!(step.apply("exam-\nple").unwrap(), "example");
        assert_eq!(step.apply("exam-\r\nple").unwrap(), "example");
        assert_eq!(step.apply("well-known").unwrap(), "well-known");
    }

    #[test]
    fn test_abbreviation_period_removed() {
        let step = abbreviation_stripper(&["dr", "mr", "st"]).unwrap();
        assert_eq!(step.apply("Dr. Who and MR. Bean").unwrap(), "Dr Who and MR Bean");
        assert_eq!(step.apply("Dr Who").unwrap(), "Dr Who");
        assert_eq!(step.apply("Main St.").unwrap(), "Main St");
    }

    #[test]
    fn test_word_ending_in_abbreviation_loses_period() {
        let step = abbreviation_stripper(&["dr", "mr", "st"]).unwrap();
        assert_eq!(step.apply("First.").unwrap(), "First");
        assert_eq!(step.apply("Come first. Then go.").unwrap(), "Come first Then go.");
        assert_eq!(step.apply("Going FAST.").unwrap(), "Going FAST");
        assert_eq!(step.apply("Second.").unwrap(), "Second.");
    }

    #[test]
    fn test_substitution_pairs() {
        let table = SubstitutionTable::new([("Mac", "PC"), ("Firefox", "Chrome")], true).unwrap();
        assert_eq!(
            table.apply("I use firefox on my mac").unwrap(),
            "I use Chrome on my PC"
        );
        assert_eq!(table.rules().len(), 2);
    }

    #[test]
    fn test_substitution_case_sensitive() {
        let table = SubstitutionTable::new([("Mac", "PC")], false).unwrap();
        assert_eq!(table.apply("mac and Mac").unwrap(), "mac and PC");
    }

    #[test]
    fn test_substitution_anchored_at_word_start() {
        let table = SubstitutionTable::new([("M.", "Monsieur")], true).unwrap();
        assert_eq!(table.apply("M. Dupont").unwrap(), "Monsieur Dupont");
        assert_eq!(table.apply("Call him.").unwrap(), "Call him.");
    }

    #[test]
    fn test_substitution_pair_validation() {
        let missing = vec![vec!["Esq.".to_string()]];
        assert!(matches!(
            substitution_table(&missing, true),
            Err(CoreError::Configuration(_))
        ));

        let too_many = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
        assert!(matches!(
            substitution_table(&too_many, true),
            Err(CoreError::Configuration(_))
        ));

        let empty_pattern = vec![vec![String::new(), "x".to_string()]];
        assert!(matches!(
            substitution_table(&empty_pattern, true),
            Err(CoreError::Configuration(_))
        ));

        let ok = vec![vec!["Esq.".to_string(), "Esquire".to_string()]];
        let table = substitution_table(&ok, true).unwrap();
        assert_eq!(table.apply("John Smith, Esq.").unwrap(), "John Smith, Esquire");
    }
}
