use std::sync::LazyLock;

use crate::Label;
use crate::template::Template;
use crate::text_cleanup::{fold_apostrophes, normalize};

/// Why a sentence was rejected. The `Display` text is shown to learners.
#[derive(
    Clone,
    Copy,
    Debug,
    thiserror::Error,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Does not start with an uppercase letter or end with "." or "?"
    #[error("Invalid sentence. Remember: Start with uppercase and end with '.' or '?'")]
    FormatError,
    /// Well formatted, but not a "to be" sentence the grammar knows
    #[error("Invalid sentence.")]
    NoTemplateMatched,
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
)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    Valid { label: Label },
    Invalid { reason: InvalidReason },
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid { .. })
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Classification::Valid { label } => Some(*label),
            Classification::Invalid { .. } => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Valid { label } => write!(f, "Correct sentence in {label}"),
            Classification::Invalid { reason } => write!(f, "{reason}"),
        }
    }
}

/// Owns the six templates and tries them in a fixed order.
///
/// Negative statements are tried before affirmative ones in each tense.
#[derive(Clone, Debug)]
pub struct Classifier {
    templates: Vec<Template>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            templates: Label::ALL.into_iter().map(Template::assemble).collect(),
        }
    }

    /// Templates in the order they are tried.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn classify(&self, sentence: &str) -> Classification {
        let sentence = normalize(&fold_apostrophes(sentence));

        if !has_sentence_shape(&sentence) {
            log::debug!("rejecting {sentence:?}: bad capitalization or punctuation");
            return Classification::Invalid {
                reason: InvalidReason::FormatError,
            };
        }

        for template in &self.templates {
            log::trace!("trying {} on {sentence:?}", template.label());
            if template.matches(&sentence) {
                log::debug!("{sentence:?} is {}", template.label());
                return Classification::Valid {
                    label: template.label(),
                };
            }
        }

        log::debug!("no template matched {sentence:?}");
        Classification::Invalid {
            reason: InvalidReason::NoTemplateMatched,
        }
    }
}

/// Starts with an uppercase ASCII letter and ends with "." or "?".
fn has_sentence_shape(sentence: &str) -> bool {
    let mut chars = sentence.chars();
    let starts_uppercase = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    let ends_terminated = chars.next_back().is_some_and(|c| c == '.' || c == '?');
    starts_uppercase && ends_terminated
}

static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::new);

/// Classify with the process-wide classifier.
pub fn classify(sentence: &str) -> Classification {
    CLASSIFIER.classify(sentence)
}
