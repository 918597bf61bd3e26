//! Tests for formatting and defaulting helpers.

use proptest::prelude::{any, prop_assert_eq, prop_assume, proptest};

use rules_transform::{
    bench_slots, is_set, join_positions, or_na, or_zero, points_display, undef, waiver_type_label,
};

#[test]
fn or_na_renders_value_or_placeholder() {
    assert_eq!(or_na(Some(12)), "12");
    assert_eq!(or_na(None::<i64>), "N/A");
}

#[test]
fn or_zero_defaults_absent_counts() {
    assert_eq!(or_zero(Some(3)), 3);
    assert_eq!(or_zero(None), 0);
}

#[test]
fn undef_passes_absence_through_literally() {
    assert_eq!(undef(Some(15)), "15");
    assert_eq!(undef(None::<i64>), "undefined");
}

#[test]
fn points_render_in_shortest_form() {
    assert_eq!(points_display(4.0), "4");
    assert_eq!(points_display(0.04), "0.04");
    assert_eq!(points_display(-2.0), "-2");
    assert_eq!(points_display(0.5), "0.5");
}

#[test]
fn absent_flags_count_as_unset() {
    assert!(is_set(Some(true)));
    assert!(!is_set(Some(false)));
    assert!(!is_set(None));
}

#[test]
fn waiver_codes_map_to_labels() {
    assert_eq!(waiver_type_label(Some(0)), "None");
    assert_eq!(waiver_type_label(Some(1)), "Waivers");
    assert_eq!(waiver_type_label(Some(2)), "FAAB");
    assert_eq!(waiver_type_label(Some(7)), "code:7");
    assert_eq!(waiver_type_label(None), "code:undefined");
}

#[test]
fn positions_join_with_middle_dot() {
    let positions: Vec<String> = ["QB", "RB", "BN"].iter().map(ToString::to_string).collect();
    assert_eq!(join_positions(&positions), "QB · RB · BN");
    assert_eq!(join_positions(&[]), "");
}

#[test]
fn bench_slots_require_exact_code_match() {
    let positions: Vec<String> = ["QB", "RB", "WR", "TE", "BN", "BN", "BN"]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(bench_slots(&positions), 3);

    // Other bench conventions are not recognized.
    let other: Vec<String> = ["bn", "BENCH", "BN2"].iter().map(ToString::to_string).collect();
    assert_eq!(bench_slots(&other), 0);
}

proptest! {
    // Forward compatibility: the transform never fails on a waiver code it
    // does not know, it renders the code instead.
    #[test]
    fn unknown_waiver_codes_render_as_code_labels(code in any::<i64>()) {
        prop_assume!(!(0..=2).contains(&code));
        prop_assert_eq!(waiver_type_label(Some(code)), format!("code:{code}"));
    }
}
