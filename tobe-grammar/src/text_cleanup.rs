//! Text cleanup applied to learner input before classification

/// Trim the sentence and collapse every run of whitespace (spaces, tabs,
/// newlines, and other Unicode whitespace) into a single ASCII space.
///
/// Never fails, and `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace typographic apostrophe variants with `'`, so that text typed on
/// phones ("I’m not") matches the contractions the grammar knows.
pub fn fold_apostrophes(sentence: &str) -> String {
    sentence
        .chars()
        .map(|c| match c {
            // ' (U+2018), ' (U+2019), ‛ (U+201B), ′ (U+2032), ‵ (U+2035),
            // ＇ (U+FF07), ʻ (U+02BB), ʼ (U+02BC), `, ´ (U+00B4)
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' | '\u{2035}' | '\u{FF07}'
            | '\u{02BB}' | '\u{02BC}' | '`' | '\u{00B4}' => '\'',
            _ => c,
        })
        .collect()
}
