use crate::error::TextUtilityError;
use rand::Rng;
use std::str::FromStr;

/// Text casing transform applied by [`convert_case`].
///
/// The word-aware styles treat any run of one-or-more non-alphanumeric
/// characters as a single separator. The joined styles (snake, constant,
/// kebab, cobol, train) strip leading and trailing separators; camel and
/// pascal drop a separator run only when a word follows it, so a trailing
/// run survives; title and sentence rewrite in place without joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Every character lowercased.
    Lower,
    /// Every character uppercased.
    Upper,
    /// Lowercase, then capitalize the start of the string and of each sentence.
    Sentence,
    /// Lowercase, then capitalize the first letter of every word.
    Title,
    /// Words joined with no separator, first word lowercased: `helloWorldTest`.
    Camel,
    /// Words joined with no separator, every word capitalized: `HelloWorldTest`.
    Pascal,
    /// Lowercase words joined with `_`: `hello_world_test`.
    Snake,
    /// Uppercase words joined with `_`: `HELLO_WORLD_TEST`.
    Constant,
    /// Lowercase words joined with `-`: `hello-world-test`.
    Kebab,
    /// Uppercase words joined with `-`: `HELLO-WORLD-TEST`.
    Cobol,
    /// Capitalized words joined with `-`: `Hello-World-Test`.
    Train,
    /// Even character indexes lowercased, odd uppercased, letter or not.
    Alternating,
    /// Lowercase becomes uppercase and vice versa.
    Inverse,
    /// Each character independently upper or lower with probability 1/2.
    Random,
}

impl FromStr for CaseStyle {
    type Err = TextUtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            "sentence" => Ok(Self::Sentence),
            "title" => Ok(Self::Title),
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            "snake" => Ok(Self::Snake),
            "constant" => Ok(Self::Constant),
            "kebab" => Ok(Self::Kebab),
            "cobol" => Ok(Self::Cobol),
            "train" => Ok(Self::Train),
            "alternating" => Ok(Self::Alternating),
            "inverse" => Ok(Self::Inverse),
            "random" => Ok(Self::Random),
            other => Err(TextUtilityError::UnknownCaseStyle {
                value: other.to_string(),
            }),
        }
    }
}

/// Converts `text` to the requested case style.
///
/// The random style draws from the thread-local RNG; use
/// [`convert_case_with`] to supply a seeded source instead.
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    convert_case_with(text, style, &mut rand::thread_rng())
}

/// Converts `text` to the requested case style using the given RNG.
///
/// Only [`CaseStyle::Random`] consumes randomness; every other style is
/// deterministic. Empty input returns an empty string for every style.
pub fn convert_case_with<R: Rng>(text: &str, style: CaseStyle, rng: &mut R) -> String {
    match style {
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Sentence => sentence_case(text),
        CaseStyle::Title => title_case(text),
        CaseStyle::Camel => word_joined(text, false),
        CaseStyle::Pascal => word_joined(text, true),
        CaseStyle::Snake => separator_joined(text, '_', WordCase::Lower),
        CaseStyle::Constant => separator_joined(text, '_', WordCase::Upper),
        CaseStyle::Kebab => separator_joined(text, '-', WordCase::Lower),
        CaseStyle::Cobol => separator_joined(text, '-', WordCase::Upper),
        CaseStyle::Train => separator_joined(text, '-', WordCase::Capitalized),
        CaseStyle::Alternating => alternating_case(text),
        CaseStyle::Inverse => inverse_case(text),
        CaseStyle::Random => random_case(text, rng),
    }
}

/// How each word is cased in the separator-joined styles.
#[derive(Clone, Copy)]
enum WordCase {
    Lower,
    Upper,
    Capitalized,
}

/// Splits on non-alphanumeric runs and joins the words with `separator`,
/// dropping leading and trailing separator runs.
fn separator_joined(text: &str, separator: char, word_case: WordCase) -> String {
    let mut out = String::with_capacity(text.len());
    let words = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty());
    for (i, word) in words.enumerate() {
        if i > 0 {
            out.push(separator);
        }
        match word_case {
            WordCase::Lower => out.push_str(&word.to_lowercase()),
            WordCase::Upper => out.push_str(&word.to_uppercase()),
            WordCase::Capitalized => push_capitalized(&mut out, word),
        }
    }
    out
}

/// Appends `word` lowercased with its first character uppercased.
fn push_capitalized(out: &mut String, word: &str) {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Camel/pascal joining: lowercase, drop each separator run that precedes a
/// word and uppercase that word's first character, then force the case of
/// the very first character.
fn word_joined(text: &str, pascal: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut separator_run = String::new();
    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if separator_run.is_empty() {
                out.push(ch);
            } else {
                out.extend(ch.to_uppercase());
                separator_run.clear();
            }
        } else {
            separator_run.push(ch);
        }
    }
    // A trailing separator run has no following word to absorb it and stays.
    out.push_str(&separator_run);

    let mut result = String::with_capacity(out.len());
    let mut chars = out.chars();
    if let Some(first) = chars.next() {
        if pascal {
            result.extend(first.to_uppercase());
        } else {
            result.extend(first.to_lowercase());
        }
        result.push_str(chars.as_str());
    }
    result
}

/// Lowercases everything, then uppercases the first word character of each
/// word-boundary run. Underscore counts as a word character and does not
/// start a new word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for ch in text.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        prev_is_word = is_word;
    }
    out
}

/// Lowercases everything, then uppercases the first non-whitespace character
/// of the string and the first character after each period-plus-whitespace
/// sequence.
fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // A period arms `pending`; whitespace promotes it to `capitalize`.
    // The flag starts set so the string's first letter is capitalized too.
    let mut pending = false;
    let mut capitalize = true;
    for ch in text.chars() {
        if capitalize && !ch.is_whitespace() {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        if ch == '.' {
            pending = true;
            capitalize = false;
        } else if ch.is_whitespace() {
            capitalize = capitalize || pending;
            pending = false;
        } else {
            pending = false;
            capitalize = false;
        }
    }
    out
}

/// Even character index lowercased, odd uppercased, whether or not the
/// character is alphabetic.
fn alternating_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

/// Swaps the case of every cased character; everything else passes through.
fn inverse_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Flips each character to upper or lower with probability 1/2.
fn random_case<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if rng.gen_bool(0.5) {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
