// mediasort-core/tests/bracket_filter_tests.rs
//! Behaviour table for the bracket content filter.

use mediasort_core::{remove_brackets, replace_in_brackets, BracketSpec};

const FEELGOOD: &str = "Feelgood (limited edition superduper) [digital] {fuzzy}";

#[test]
fn test_bracket_filter_table() {
    let cases: &[(&str, &str, &str, &str)] = &[
        ("simple bracket replacement", "(limited)", "Feelgood (limited edition superduper)", "Feelgood "),
        ("simple non-matching content", "(limited)", "Feelgood (enhanced edition)", "Feelgood (enhanced edition)"),
        ("case-insensitive", "(limited)", "Feelgood (Limited Edition)", "Feelgood "),
        ("ignore non-specified brackets", "(limited)", FEELGOOD, "Feelgood  [digital] {fuzzy}"),
        ("ignore non-specified brackets even when content matches", "(limited,fuzzy,digital)", FEELGOOD, "Feelgood  [digital] {fuzzy}"),
        ("replace multiple brackets", "([{limited,fuzzy,digital}])", FEELGOOD, "Feelgood   "),
        ("replace multiple brackets, with content left out", "([{limited,digital}])", FEELGOOD, "Feelgood   {fuzzy}"),
        ("replace angle brackets", "([<limited,digital>])", "Feelgood <limited edition> [digital] {fuzzy}", "Feelgood   {fuzzy}"),
        ("empty brackets match all content", "({})", FEELGOOD, "Feelgood  [digital] "),
        ("star matches all content", "([*])", FEELGOOD, "Feelgood   {fuzzy}"),
        ("ignores content outside brackets", "intro-ignored-text([*])fuzzy", FEELGOOD, "Feelgood   {fuzzy}"),
        ("nested brackets, outer match removed", "([({limited,digital})])", "Feelgood (limited edition superduper [digital]) {fuzzy}", "Feelgood  {fuzzy}"),
        ("nested brackets, inner content decides outer", "([({digital})])", "Feelgood (limited edition superduper [digital]) {fuzzy}", "Feelgood  {fuzzy}"),
        ("nested brackets of the same type", "([({digital})])", "Feelgood (limited edition superduper (digital)) {fuzzy}", "Feelgood  {fuzzy}"),
        ("regex metacharacters in patterns", "([{.,+}])", "Feelgood (limited edition++) [1/2] {1.1}", "Feelgood  [1/2] "),
        ("other special characters in patterns", "([{/,#}])", "Feelgood (un/limited edition) [1.2] {#1}", "Feelgood  [1.2] "),
        // mismatched brackets in the input
        ("no closing bracket leaves input as is", "([({limited,digital})])", "Feelgood (limited edition [digital {fuzzy}", "Feelgood (limited edition [digital {fuzzy}"),
        ("outer match despite mismatched inner bracket", "([({limited,digital})])", "Feelgood (limited edition [digital) {fuzzy}", "Feelgood  {fuzzy}"),
        ("mismatched outer bracket leaves input as is", "([({limited,digital})])", "Feelgood (limited edition [digital] {fuzzy}", "Feelgood (limited edition [digital] {fuzzy}"),
        ("no opening bracket leaves input as is", "([({limited,digital})])", "Feelgood limited edition digital]) {fuzzy}", "Feelgood limited edition digital]) {fuzzy}"),
        // lenient configurations
        ("empty config means no replacement", "", "Feelgood (limited edition superduper)", "Feelgood (limited edition superduper)"),
        ("no brackets in input", "({[fuzzy,digital]})", "Feelgood, no specifiers", "Feelgood, no specifiers"),
        ("additional closing brackets in config", "([{limited,digital})])", FEELGOOD, "Feelgood   {fuzzy}"),
        ("missing closing brackets in config", "([({limited,digital", FEELGOOD, "Feelgood   {fuzzy}"),
        ("repeated opening brackets in config", "({[({limited,digital})])", FEELGOOD, "Feelgood   {fuzzy}"),
        ("config without brackets is inert", "limited,digital", "Feelgood (limited edition) [digital]", "Feelgood (limited edition) [digital]"),
    ];

    for (description, config, input, expected) in cases {
        let spec = BracketSpec::new(config);
        assert_eq!(
            spec.replace(input, ""),
            *expected,
            "{}: BracketSpec({:?}).replace({:?})",
            description,
            config,
            input
        );
    }
}

#[test]
fn unbalanced_span_stops_further_processing() {
    let spec = BracketSpec::new("([*])");
    assert_eq!(spec.replace("[a] (b [c]", ""), " (b [c]");
}

#[test]
fn replacement_is_inserted_once_per_span() {
    let spec = BracketSpec::new("(live)");
    assert_eq!(
        spec.replace("Song (Live) and (LIVE at Wembley) (studio)", "[L]"),
        "Song [L] and [L] (studio)"
    );
}

#[test]
fn inert_filters_are_identity() {
    let inputs = ["", "plain", "(x) [y] {z} <w>", "unbalanced ((("];
    for config in ["", "limited", ")]}>", "no brackets, just, words"] {
        let spec = BracketSpec::new(config);
        assert!(spec.is_inert(), "config {:?}", config);
        for input in inputs {
            assert_eq!(spec.replace(input, "REPLACED"), input);
        }
    }
}

#[test]
fn spec_is_shareable_across_threads() {
    let spec = BracketSpec::new("(bonus)");
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let spec = spec.clone();
            std::thread::spawn(move || spec.replace(&format!("Track {} (Bonus)", i), ""))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("Track {} ", i));
    }
}

#[test]
fn template_helpers() {
    assert_eq!(
        replace_in_brackets("(extended)", "XXL", "All that she wants (Extended Version)"),
        "All that she wants XXL"
    );
    assert_eq!(
        remove_brackets("(extended)", "All that she wants (Extended Version)"),
        "All that she wants "
    );
}
