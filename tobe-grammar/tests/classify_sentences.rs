use tobe_grammar::text_cleanup::normalize;
use tobe_grammar::{Classification, Classifier, InvalidReason, Label, classify};

fn valid(label: Label) -> Classification {
    Classification::Valid { label }
}

const FORMAT_ERROR: Classification = Classification::Invalid {
    reason: InvalidReason::FormatError,
};

const NO_MATCH: Classification = Classification::Invalid {
    reason: InvalidReason::NoTemplateMatched,
};

#[test]
fn test_one_sentence_per_category() {
    let cases = [
        ("I am not happy.", Label::PresentNegative),
        ("The cat is sleeping.", Label::PresentAffirmative),
        ("Is She ready?", Label::PresentQuestion),
        ("They were not at home.", Label::PastNegative),
        ("He was tired.", Label::PastAffirmative),
        ("Were the students late?", Label::PastQuestion),
    ];
    for (sentence, label) in cases {
        assert_eq!(classify(sentence), valid(label), "{sentence}");
    }
}

#[test]
fn test_more_sentences() {
    let cases = [
        ("You aren't alone.", Label::PresentNegative),
        ("These books are not mine.", Label::PresentNegative),
        ("Maria isn't here.", Label::PresentNegative),
        ("We are friends.", Label::PresentAffirmative),
        ("That house is very old.", Label::PresentAffirmative),
        ("Those dogs are loud.", Label::PresentAffirmative),
        ("New York is beautiful.", Label::PresentAffirmative),
        ("Are they at school?", Label::PresentQuestion),
        ("Is this seat free?", Label::PresentQuestion),
        ("Am I late?", Label::PresentQuestion),
        ("I wasn't ready.", Label::PastNegative),
        ("The children was not happy.", Label::PastNegative),
        ("The games were fun.", Label::PastAffirmative),
        ("Paris was cold.", Label::PastAffirmative),
        ("Was that movie good?", Label::PastQuestion),
        ("Weren't you there?", Label::PastQuestion),
    ];
    for (sentence, label) in cases {
        assert_eq!(classify(sentence), valid(label), "{sentence}");
    }
}

#[test]
fn test_format_errors() {
    for sentence in [
        "",
        "   ",
        "\n\t",
        "the cat is happy.",
        "I am happy",
        "I am happy!",
        "¿Is she ready?",
        "1 is a number.",
        "Éste es bueno.",
    ] {
        assert_eq!(classify(sentence), FORMAT_ERROR, "{sentence:?}");
    }
}

#[test]
fn test_rejected_sentences() {
    for sentence in [
        "The dogs is loud.",
        "The cat are sleeping.",
        "I is happy.",
        "He are tired.",
        "You was late.",
        "He is.",
        "She is happy?",
        "Is she ready.",
        "He goes home.",
        "He is 5 years old.",
        "He Smith is here.",
        "This books are mine.",
        "These Cats is happy.",
        "Hello world.",
    ] {
        assert_eq!(classify(sentence), NO_MATCH, "{sentence:?}");
    }
}

#[test]
fn test_whitespace_is_normalized_before_matching() {
    assert_eq!(
        classify("  They   were\tnot \n at home.  "),
        valid(Label::PastNegative)
    );
    assert_eq!(classify("Is she ready ?"), valid(Label::PresentQuestion));
}

#[test]
fn test_format_check_matches_pattern_after_normalization() {
    let classifier = Classifier::new();
    for sentence in [
        "a.", "A", "A.", "Z?", " z?", "Hi", "?", ".", "Ab.c", "No!", "Yes .", "X ?",
    ] {
        let normalized = normalize(sentence);
        let well_formed = normalized.starts_with(|c: char| c.is_ascii_uppercase())
            && normalized.len() >= 2
            && normalized.ends_with(['.', '?']);
        let result = classifier.classify(sentence);
        assert_eq!(result == FORMAT_ERROR, !well_formed, "{sentence:?}");
    }
}

fn repeat_words(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}

#[test]
fn test_long_sentences_classify_quickly() {
    let names = repeat_words("Aa", 30_000);
    let cases = [
        (format!("{names}."), NO_MATCH),
        (format!("{names} is here."), valid(Label::PresentAffirmative)),
        (format!("{names} were here."), NO_MATCH),
        (format!("Is {names}?"), valid(Label::PresentQuestion)),
        (format!("Was {names} 1?"), NO_MATCH),
        (
            format!("{names} {}.", repeat_words("is", 30_000)),
            valid(Label::PresentAffirmative),
        ),
        (
            format!("The cat is {}.", repeat_words("happy", 30_000)),
            valid(Label::PresentAffirmative),
        ),
    ];

    let classifier = Classifier::new();
    for (sentence, expected) in cases {
        let started = std::time::Instant::now();
        let result = classifier.classify(&sentence);
        let elapsed = started.elapsed();
        assert_eq!(result, expected, "{}...", &sentence[..40]);
        assert!(
            elapsed < std::time::Duration::from_secs(2),
            "{} words took {elapsed:?}",
            sentence.split(' ').count()
        );
    }
}

#[test]
fn test_default_and_explicit_classifiers_agree() {
    let classifier = Classifier::default();
    for sentence in ["He was tired.", "the cat.", "The dogs is loud."] {
        assert_eq!(classifier.classify(sentence), classify(sentence));
    }
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = std::sync::Arc::new(Classifier::new());
    let handles = (0..4)
        .map(|_| {
            let classifier = classifier.clone();
            std::thread::spawn(move || classifier.classify("Were the students late?"))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), valid(Label::PastQuestion));
    }
}
