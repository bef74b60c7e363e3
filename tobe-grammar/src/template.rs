//! Sentence templates
//!
//! Each [`Template`] is assembled from every [`SubjectClass`] paired with the
//! copula form that agrees with it in the template's tense. The pairs are an
//! ordered alternation: a sentence matches when some split of its leading
//! words parses as a subject whose paired copula comes next.

use crate::subject::{Casing, Pronoun, SubjectClass};
use crate::{Label, Number, Polarity, Tense};

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
pub enum Copula {
    Am,
    Is,
    Are,
    Was,
    Were,
}

impl Copula {
    /// The agreement table for "to be".
    pub fn agreeing_with(subject: SubjectClass, tense: Tense) -> Copula {
        if subject == SubjectClass::Pronoun(Pronoun::I) {
            return match tense {
                Tense::Present => Copula::Am,
                Tense::Past => Copula::Was,
            };
        }
        match (subject.number(), tense) {
            (Number::Singular, Tense::Present) => Copula::Is,
            (Number::Singular, Tense::Past) => Copula::Was,
            (Number::Plural, Tense::Present) => Copula::Are,
            (Number::Plural, Tense::Past) => Copula::Were,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Copula::Am => "am",
            Copula::Is => "is",
            Copula::Are => "are",
            Copula::Was => "was",
            Copula::Were => "were",
        }
    }

    /// "am" has no standard negative contraction; "I'm not" is handled as
    /// its own form.
    pub fn negative_contraction(&self) -> Option<&'static str> {
        match self {
            Copula::Am => None,
            Copula::Is => Some("isn't"),
            Copula::Are => Some("aren't"),
            Copula::Was => Some("wasn't"),
            Copula::Were => Some("weren't"),
        }
    }
}

impl std::fmt::Display for Copula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One branch of a template's alternation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alternative {
    pub subject: SubjectClass,
    pub copula: Copula,
}

#[derive(Clone, Debug)]
pub struct Template {
    label: Label,
    alternatives: Vec<Alternative>,
}

/// Subject and copula merged into one word.
const FUSED_FIRST_PERSON: &str = "I'm";

impl Template {
    pub fn assemble(label: Label) -> Template {
        let tense = label.tense();
        let alternatives = SubjectClass::ALL
            .into_iter()
            .map(|subject| Alternative {
                subject,
                copula: Copula::agreeing_with(subject, tense),
            })
            .collect();
        Template {
            label,
            alternatives,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    fn copula_for(&self, subject: SubjectClass) -> Option<Copula> {
        self.alternatives
            .iter()
            .find(|alternative| alternative.subject == subject)
            .map(|alternative| alternative.copula)
    }

    /// Full-sentence match against an already normalized sentence.
    ///
    /// Runs in time linear in the number of words: only the subject
    /// prefixes found in one pass are tried.
    pub fn matches(&self, sentence: &str) -> bool {
        // Questions are the only templates without a fixed polarity.
        match self.label.polarity() {
            Some(polarity) => match sentence.strip_suffix('.') {
                Some(body) => self.matches_statement(&words(body), polarity),
                None => false,
            },
            None => match sentence.strip_suffix('?') {
                Some(body) => self.matches_question(&words(body.trim_end())),
                None => false,
            },
        }
    }

    fn matches_statement(&self, words: &[&str], polarity: Polarity) -> bool {
        if let Some((&first, predicate)) = words.split_first() {
            if first == FUSED_FIRST_PERSON {
                return self.label.tense() == Tense::Present
                    && after_copula(predicate, polarity);
            }
        }

        // The copula is lowercase and proper nouns are capitalized, so at
        // most one prefix gets past the verb check.
        SubjectClass::prefixes(words, Casing::Exact)
            .into_iter()
            .any(|(len, subject)| {
                let Some(copula) = self.copula_for(subject) else {
                    return false;
                };
                let Some((&verb, predicate)) = words[len..].split_first() else {
                    return false;
                };

                if verb == copula.as_str() {
                    after_copula(predicate, polarity)
                } else if copula.negative_contraction() == Some(verb) {
                    polarity == Polarity::Negative && is_complement(predicate)
                } else {
                    false
                }
            })
    }

    fn matches_question(&self, words: &[&str]) -> bool {
        let Some((&verb, rest)) = words.split_first() else {
            return false;
        };

        // Capitalized words are complement words too, so a long name offers
        // one split per word. Where a valid complement may start is found
        // once instead of rechecking the tail for every split.
        let complement_start = rest
            .iter()
            .rposition(|word| !is_complement_word(word))
            .map_or(0, |i| i + 1);

        SubjectClass::prefixes(rest, Casing::Insensitive)
            .into_iter()
            .any(|(len, subject)| {
                let Some(copula) = self.copula_for(subject) else {
                    return false;
                };
                let inverted = Casing::Insensitive.matches(verb, copula.as_str())
                    || copula
                        .negative_contraction()
                        .is_some_and(|contracted| Casing::Insensitive.matches(verb, contracted));

                // An optional "not" after the subject is itself a complement
                // word, so it needs no branch of its own.
                inverted && len < rest.len() && len >= complement_start
            })
    }
}

fn words(body: &str) -> Vec<&str> {
    body.split(' ').collect()
}

fn after_copula(predicate: &[&str], polarity: Polarity) -> bool {
    match polarity {
        Polarity::Negative => match predicate.split_first() {
            Some((not, complement)) => is_not(not) && is_complement(complement),
            None => false,
        },
        Polarity::Affirmative => match predicate.first() {
            Some(first) => !is_negation_marker(first) && is_complement(predicate),
            None => false,
        },
    }
}

fn is_not(word: &str) -> bool {
    word.eq_ignore_ascii_case("not")
}

fn is_negation_marker(word: &str) -> bool {
    is_not(word) || word.eq_ignore_ascii_case("n't")
}

fn is_complement(words: &[&str]) -> bool {
    !words.is_empty() && words.iter().all(|word| is_complement_word(word))
}

/// Starts with an ASCII letter; the rest are letters or apostrophes.
fn is_complement_word(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_alphabetic())
        && word.chars().all(|c| c.is_ascii_alphabetic() || c == '\'')
}
