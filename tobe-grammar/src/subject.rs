//! Subject-phrase grammars
//!
//! A subject is the run of words before the copula in a statement, or after
//! it in a question. Every subject the classifier accepts falls into exactly
//! one [`SubjectClass`].

use crate::{Number, Person};

/// How function words (pronouns, "The", "This", ...) are compared.
///
/// Statements put the subject first, so its capital letter is significant.
/// Questions move the subject after the copula, where learners write it in
/// either case ("Were the students late?").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Casing {
    Exact,
    Insensitive,
}

impl Casing {
    pub fn matches(self, word: &str, expected: &str) -> bool {
        match self {
            Casing::Exact => word == expected,
            Casing::Insensitive => word.eq_ignore_ascii_case(expected),
        }
    }
}

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
pub enum Pronoun {
    I,
    You,
    He,
    She,
    It,
    We,
    They,
}

impl Pronoun {
    pub const ALL: [Pronoun; 7] = [
        Pronoun::I,
        Pronoun::You,
        Pronoun::He,
        Pronoun::She,
        Pronoun::It,
        Pronoun::We,
        Pronoun::They,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pronoun::I => "I",
            Pronoun::You => "You",
            Pronoun::He => "He",
            Pronoun::She => "She",
            Pronoun::It => "It",
            Pronoun::We => "We",
            Pronoun::They => "They",
        }
    }

    pub fn person(&self) -> Person {
        match self {
            Pronoun::I | Pronoun::We => Person::First,
            Pronoun::You => Person::Second,
            Pronoun::He | Pronoun::She | Pronoun::It | Pronoun::They => Person::Third,
        }
    }

    /// "You" always takes plural agreement ("you are", "you were").
    pub fn number(&self) -> Number {
        match self {
            Pronoun::I | Pronoun::He | Pronoun::She | Pronoun::It => Number::Singular,
            Pronoun::You | Pronoun::We | Pronoun::They => Number::Plural,
        }
    }

    pub fn from_word(word: &str, casing: Casing) -> Option<Pronoun> {
        Pronoun::ALL
            .into_iter()
            .find(|pronoun| casing.matches(word, pronoun.as_str()))
    }
}

impl std::fmt::Display for Pronoun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

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
pub enum SubjectClass {
    /// One of the closed set I / You / He / She / It / We / They
    Pronoun(Pronoun),
    /// "The" followed by a single head noun
    DeterminerPhrase { number: Number },
    /// "This"/"That" + singular noun, or "These"/"Those" + plural noun
    DemonstrativePhrase { number: Number },
    /// One or more capitalized words that do not start with a pronoun.
    /// Always agrees as singular.
    ProperNounPhrase,
}

impl SubjectClass {
    /// Every subject class, in the order templates list their alternatives.
    pub const ALL: [SubjectClass; 12] = [
        SubjectClass::Pronoun(Pronoun::I),
        SubjectClass::Pronoun(Pronoun::You),
        SubjectClass::Pronoun(Pronoun::He),
        SubjectClass::Pronoun(Pronoun::She),
        SubjectClass::Pronoun(Pronoun::It),
        SubjectClass::Pronoun(Pronoun::We),
        SubjectClass::Pronoun(Pronoun::They),
        SubjectClass::DeterminerPhrase {
            number: Number::Singular,
        },
        SubjectClass::DeterminerPhrase {
            number: Number::Plural,
        },
        SubjectClass::ProperNounPhrase,
        SubjectClass::DemonstrativePhrase {
            number: Number::Singular,
        },
        SubjectClass::DemonstrativePhrase {
            number: Number::Plural,
        },
    ];

    /// Number used for copula agreement.
    pub fn number(&self) -> Number {
        match self {
            SubjectClass::Pronoun(pronoun) => pronoun.number(),
            SubjectClass::DeterminerPhrase { number }
            | SubjectClass::DemonstrativePhrase { number } => *number,
            SubjectClass::ProperNounPhrase => Number::Singular,
        }
    }

    /// Classify the words of a subject, or `None` if no subject grammar
    /// accepts them.
    pub fn parse(words: &[&str], casing: Casing) -> Option<SubjectClass> {
        SubjectClass::prefixes(words, casing)
            .into_iter()
            .find(|&(len, _)| len == words.len())
            .map(|(_, class)| class)
    }

    /// Every leading run of `words` that forms a subject, shortest first,
    /// as `(word count, class)`. A single pass over the words.
    ///
    /// Phrases led by "The" or a demonstrative are only ever parsed as
    /// those phrases, so "These Cats" is a plural demonstrative and never a
    /// proper noun.
    pub fn prefixes(words: &[&str], casing: Casing) -> Vec<(usize, SubjectClass)> {
        let Some(&first) = words.first() else {
            return Vec::new();
        };

        if let Some(pronoun) = Pronoun::from_word(first, casing) {
            return vec![(1, SubjectClass::Pronoun(pronoun))];
        }

        if PHRASE_LEADS.iter().any(|lead| casing.matches(first, lead)) {
            return words
                .get(1)
                .and_then(|head| noun_phrase(first, head, casing))
                .map(|class| vec![(2, class)])
                .unwrap_or_default();
        }

        // Pronouns share the capital letter of names and were returned
        // above, so only names are left here.
        words
            .iter()
            .take_while(|word| is_capitalized_word(word))
            .enumerate()
            .map(|(i, _)| (i + 1, SubjectClass::ProperNounPhrase))
            .collect()
    }
}

const PHRASE_LEADS: [&str; 5] = ["The", "This", "That", "These", "Those"];

/// "The", "This"/"That" or "These"/"Those" followed by its head noun.
fn noun_phrase(lead: &str, head: &str, casing: Casing) -> Option<SubjectClass> {
    let number = head_number(head)?;
    if casing.matches(lead, "The") {
        return Some(SubjectClass::DeterminerPhrase { number });
    }
    let lead_number = if casing.matches(lead, "This") || casing.matches(lead, "That") {
        Number::Singular
    } else {
        Number::Plural
    };
    (number == lead_number).then_some(SubjectClass::DemonstrativePhrase { number })
}

/// A trailing "s" means plural. Irregular plurals ("sheep", "children")
/// therefore read as singular.
fn head_number(head: &str) -> Option<Number> {
    if !is_head_word(head) {
        return None;
    }
    Some(if head.ends_with(['s', 'S']) {
        Number::Plural
    } else {
        Number::Singular
    })
}

fn is_head_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// An uppercase ASCII letter followed by at least one lowercase one.
fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let tail = chars.as_str();
            !tail.is_empty() && tail.chars().all(|c| c.is_ascii_lowercase())
        }
        _ => false,
    }
}
