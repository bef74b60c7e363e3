pub mod classify;
pub mod subject;
pub mod template;
pub mod text_cleanup;

pub use classify::{Classification, Classifier, InvalidReason, classify};
pub use subject::{Pronoun, SubjectClass};
pub use template::{Copula, Template};

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
pub enum Tense {
    Present,
    Past,
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
pub enum Polarity {
    Affirmative,
    Negative,
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
pub enum Mood {
    Statement,
    Question,
}

/// Grammatical number of a subject. For phrases headed by a noun this is
/// inferred from the spelling of the head noun only.
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
pub enum Number {
    Singular,
    Plural,
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
pub enum Person {
    First,
    Second,
    Third,
}

/// The six sentence shapes a well-formed "to be" sentence can take.
///
/// The declaration order is the order in which the classifier tries the
/// templates, and the `Display` form is the label shown to learners.
#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[display("present negative")]
    PresentNegative,
    #[display("present affirmative")]
    PresentAffirmative,
    #[display("present question")]
    PresentQuestion,
    #[display("past negative")]
    PastNegative,
    #[display("past affirmative")]
    PastAffirmative,
    #[display("past question")]
    PastQuestion,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::PresentNegative,
        Label::PresentAffirmative,
        Label::PresentQuestion,
        Label::PastNegative,
        Label::PastAffirmative,
        Label::PastQuestion,
    ];

    pub fn tense(&self) -> Tense {
        match self {
            Label::PresentNegative | Label::PresentAffirmative | Label::PresentQuestion => {
                Tense::Present
            }
            Label::PastNegative | Label::PastAffirmative | Label::PastQuestion => Tense::Past,
        }
    }

    pub fn mood(&self) -> Mood {
        match self {
            Label::PresentQuestion | Label::PastQuestion => Mood::Question,
            _ => Mood::Statement,
        }
    }

    /// Statements have a fixed polarity. Questions accept either, so this
    /// is `None` exactly for the two question labels.
    pub fn polarity(&self) -> Option<Polarity> {
        match self {
            Label::PresentNegative | Label::PastNegative => Some(Polarity::Negative),
            Label::PresentAffirmative | Label::PastAffirmative => Some(Polarity::Affirmative),
            Label::PresentQuestion | Label::PastQuestion => None,
        }
    }
}
