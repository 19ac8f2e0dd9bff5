//! Command-line flag parsing: turns `-<letters>` style arguments into a
//! selected piece-letter set.

use std::collections::BTreeSet;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a flag-shaped argument: a dash followed by one or more letters.
/// Anything not shaped like this is silently ignored rather than rejected —
/// this CLI does not error out on garbage input.
static FLAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[A-Za-z]+$").expect("valid regex"));

/// Parses `args` (typically `std::env::args().skip(1)`) into the selected
/// piece letters. Every alphabetic character following a leading dash is
/// upper-cased and inserted into the set; unknown letters are silently
/// dropped by the caller later (the catalog is the only place that knows
/// which 12 letters are valid). An empty result means "use all twelve".
pub fn parse_selection<I, S>(args: I) -> BTreeSet<char>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected = BTreeSet::new();

    for arg in args {
        let arg = arg.as_ref();
        if !FLAG_PATTERN.is_match(arg) {
            continue;
        }
        for ch in arg.chars().skip(1) {
            selected.insert(ch.to_ascii_uppercase());
        }
    }

    debug!("parsed {} selected letter(s) from argv", selected.len());
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_flag_matches_separate_flags() {
        let combined = parse_selection(["-lyvtwz"]);
        let separate = parse_selection(["-l", "-y", "-v", "-t", "-w", "-z"]);
        assert_eq!(combined, separate);
    }

    #[test]
    fn duplicate_letters_collapse() {
        let with_dupes = parse_selection(["-l", "-l", "-y"]);
        let without = parse_selection(["-l", "-y"]);
        assert_eq!(with_dupes, without);
    }

    #[test]
    fn mixed_case_is_folded_to_upper() {
        let mixed = parse_selection(["-lYvTwZ"]);
        let upper: BTreeSet<char> = ['L', 'Y', 'V', 'T', 'W', 'Z'].into_iter().collect();
        assert_eq!(mixed, upper);
    }

    #[test]
    fn empty_argv_yields_empty_selection() {
        assert!(parse_selection(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn non_flag_arguments_are_ignored() {
        let selected = parse_selection(["board.txt", "-l"]);
        assert_eq!(selected, ['L'].into_iter().collect());
    }
}
