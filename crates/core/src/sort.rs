use crate::error::TextUtilityError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::str::FromStr;

/// Line ordering applied by [`sort_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSortStyle {
    /// Collated lexicographic order, ascending.
    Alphabetize,
    /// Collated lexicographic order, descending.
    ReverseAlphabetize,
    /// Ascending by each line's trailing whitespace-delimited token.
    AlphabetizeByLastWord,
    /// Descending by each line's trailing whitespace-delimited token.
    ReverseAlphabetizeByLastWord,
    /// Reverses the line order without re-sorting.
    Reverse,
    /// Uniform random permutation of the lines.
    Randomize,
}

impl FromStr for LineSortStyle {
    type Err = TextUtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabetize" => Ok(Self::Alphabetize),
            "reverse-alphabetize" => Ok(Self::ReverseAlphabetize),
            "alphabetize-by-last-word" => Ok(Self::AlphabetizeByLastWord),
            "reverse-alphabetize-by-last-word" => Ok(Self::ReverseAlphabetizeByLastWord),
            "reverse" => Ok(Self::Reverse),
            "randomize" => Ok(Self::Randomize),
            other => Err(TextUtilityError::UnknownSortStyle {
                value: other.to_string(),
            }),
        }
    }
}

/// Reorders the `\n`-separated lines of `text` by the requested style.
///
/// Randomize draws from the thread-local RNG; use [`sort_lines_with`] to
/// supply a seeded source instead.
pub fn sort_lines(text: &str, style: LineSortStyle) -> String {
    sort_lines_with(text, style, &mut rand::thread_rng())
}

/// Reorders the `\n`-separated lines of `text` using the given RNG.
///
/// Splitting happens on `\n` only; a stray `\r` stays attached to its line
/// and compares as an ordinary character (line break normalization is
/// [`crate::convert_line_breaks`]'s job). Blank lines are real entries and
/// sort like any other line. All sorts are stable: lines with equal keys
/// keep their input order. Only [`LineSortStyle::Randomize`] consumes
/// randomness.
pub fn sort_lines_with<R: Rng>(text: &str, style: LineSortStyle, rng: &mut R) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    match style {
        LineSortStyle::Alphabetize => lines.sort_by(|a, b| collate(a, b)),
        LineSortStyle::ReverseAlphabetize => lines.sort_by(|a, b| collate(b, a)),
        LineSortStyle::AlphabetizeByLastWord => {
            lines.sort_by(|a, b| collate(last_word(a), last_word(b)));
        }
        LineSortStyle::ReverseAlphabetizeByLastWord => {
            lines.sort_by(|a, b| collate(last_word(b), last_word(a)));
        }
        LineSortStyle::Reverse => lines.reverse(),
        LineSortStyle::Randomize => lines.shuffle(rng),
    }
    lines.join("\n")
}

/// Trailing whitespace-delimited token of a line; empty line yields "".
fn last_word(line: &str) -> &str {
    line.split_whitespace().last().unwrap_or("")
}

/// Case-insensitive primary comparison with a code-point tiebreak,
/// the locale-independent stand-in for collated string comparison.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn alphabetizes_ascending() {
        assert_eq!(
            sort_lines("zebra\napple\nbanana\ncherry", LineSortStyle::Alphabetize),
            "apple\nbanana\ncherry\nzebra"
        );
    }

    #[test]
    fn alphabetizes_descending() {
        assert_eq!(
            sort_lines("zebra\napple\nbanana\ncherry", LineSortStyle::ReverseAlphabetize),
            "zebra\ncherry\nbanana\napple"
        );
    }

    #[test]
    fn alphabetize_by_last_word_keeps_full_lines_and_input_order_on_ties() {
        assert_eq!(
            sort_lines(
                "zebra animal\napple fruit\nbanana fruit\ncherry fruit",
                LineSortStyle::AlphabetizeByLastWord
            ),
            "zebra animal\napple fruit\nbanana fruit\ncherry fruit"
        );
    }

    #[test]
    fn reverse_alphabetize_by_last_word_is_stable_descending() {
        assert_eq!(
            sort_lines(
                "apple fruit\nzebra animal\nbanana fruit",
                LineSortStyle::ReverseAlphabetizeByLastWord
            ),
            "apple fruit\nbanana fruit\nzebra animal"
        );
    }

    #[test]
    fn last_word_ignores_trailing_whitespace() {
        assert_eq!(
            sort_lines("b item  \na widget", LineSortStyle::AlphabetizeByLastWord),
            "b item  \na widget"
        );
    }

    #[test]
    fn reverse_does_not_resort() {
        assert_eq!(
            sort_lines("one\ntwo\nthree", LineSortStyle::Reverse),
            "three\ntwo\none"
        );
    }

    #[test]
    fn empty_and_single_line_inputs_pass_through() {
        for style in [
            LineSortStyle::Alphabetize,
            LineSortStyle::ReverseAlphabetize,
            LineSortStyle::AlphabetizeByLastWord,
            LineSortStyle::ReverseAlphabetizeByLastWord,
            LineSortStyle::Reverse,
            LineSortStyle::Randomize,
        ] {
            assert_eq!(sort_lines("", style), "", "empty input, style {style:?}");
            assert_eq!(
                sort_lines("only line", style),
                "only line",
                "single line, style {style:?}"
            );
        }
    }

    #[test]
    fn blank_lines_participate_in_sorting() {
        assert_eq!(
            sort_lines("b\n\na", LineSortStyle::Alphabetize),
            "\na\nb"
        );
        assert_eq!(
            sort_lines("b\n\na", LineSortStyle::Reverse),
            "a\n\nb"
        );
    }

    #[test]
    fn sorting_preserves_the_line_multiset() {
        let input = "pear\nApple\npear\n\nbanana\nzed q\nApple";
        let mut expected: Vec<&str> = input.split('\n').collect();
        expected.sort_unstable();

        let mut rng = StdRng::seed_from_u64(3);
        for style in [
            LineSortStyle::Alphabetize,
            LineSortStyle::ReverseAlphabetize,
            LineSortStyle::AlphabetizeByLastWord,
            LineSortStyle::ReverseAlphabetizeByLastWord,
            LineSortStyle::Reverse,
            LineSortStyle::Randomize,
        ] {
            let output = sort_lines_with(input, style, &mut rng);
            let mut actual: Vec<&str> = output.split('\n').collect();
            actual.sort_unstable();
            assert_eq!(actual, expected, "multiset changed for {style:?}");
        }
    }

    #[test]
    fn randomize_is_seed_deterministic() {
        let input = "a\nb\nc\nd\ne\nf";
        let a = sort_lines_with(input, LineSortStyle::Randomize, &mut StdRng::seed_from_u64(11));
        let b = sort_lines_with(input, LineSortStyle::Randomize, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn collation_is_case_insensitive_first() {
        assert_eq!(
            sort_lines("Banana\napple\nCherry", LineSortStyle::Alphabetize),
            "apple\nBanana\nCherry"
        );
    }

    #[test]
    fn stray_carriage_returns_stay_attached() {
        // Mixed endings are the converter's job; the sorter treats \r as content.
        assert_eq!(
            sort_lines("b\r\na", LineSortStyle::Alphabetize),
            "a\nb\r"
        );
    }

    #[test]
    fn parses_style_tags() {
        assert_eq!(
            "alphabetize-by-last-word".parse::<LineSortStyle>().unwrap(),
            LineSortStyle::AlphabetizeByLastWord
        );
        let err = "shuffled".parse::<LineSortStyle>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown sort type: shuffled");
    }
}
