//! Exercises the CLI flag grammar end to end, independent of the solver.

use std::collections::BTreeSet;

use pentomino_dlx::cli::parse_selection;

#[test]
fn duplicate_flags_collapse_to_a_set() {
    let via_repeats = parse_selection(["-l", "-l", "-y"]);
    let via_set = parse_selection(["-l", "-y"]);
    assert_eq!(via_repeats, via_set);
    assert_eq!(via_repeats, BTreeSet::from(['L', 'Y']));
}

#[test]
fn combined_and_separate_flags_are_equivalent() {
    let combined = parse_selection(["-lyvtwz"]);
    let separate = parse_selection(["-l", "-y", "-v", "-t", "-w", "-z"]);
    assert_eq!(combined, separate);
}

#[test]
fn mixed_case_combined_flag_matches_uppercase_separate_flags() {
    let mixed = parse_selection(["-lYvTwZ"]);
    let upper = parse_selection(["-L", "-Y", "-V", "-T", "-W", "-Z"]);
    assert_eq!(mixed, upper);
}
