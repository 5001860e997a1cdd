//! Tests for the XP award/spend rules and the threshold-consuming level curve.

use studybuddy_progress::progress::leveling::{apply_award, spend, xp_to_level_up};

#[test]
fn threshold_scales_with_level() {
    assert_eq!(xp_to_level_up(1), 100);
    assert_eq!(xp_to_level_up(2), 200);
    assert_eq!(xp_to_level_up(7), 700);
}

#[test]
fn award_below_threshold_banks_xp() {
    let res = apply_award(40, 1, 30);
    assert_eq!(res.new_xp, 70);
    assert_eq!(res.new_level, 1);
    assert!(!res.did_level_up);
}

#[test]
fn award_hitting_exact_threshold_consumes_it() {
    let res = apply_award(90, 1, 10);
    assert_eq!(res.new_xp, 0);
    assert_eq!(res.new_level, 2);
    assert!(res.did_level_up);
}

#[test]
fn award_overflow_carries_into_next_level() {
    let res = apply_award(95, 1, 10);
    assert_eq!(res.new_xp, 5);
    assert_eq!(res.new_level, 2);
    assert!(res.did_level_up);
}

#[test]
fn large_award_levels_up_multiple_times() {
    // 350 XP from a fresh ledger: 100 to reach level 2, 200 to reach level 3.
    let res = apply_award(0, 1, 350);
    assert_eq!(res.new_level, 3);
    assert_eq!(res.new_xp, 50);
    assert!(res.did_level_up);
}

#[test]
fn non_positive_awards_leave_the_ledger_alone() {
    for points in [0, -5] {
        let res = apply_award(70, 2, points);
        assert_eq!(res.new_xp, 70);
        assert_eq!(res.new_level, 2);
        assert!(!res.did_level_up);
    }
}

#[test]
fn awards_never_regress() {
    let mut xp = 0;
    let mut level = 1;
    for points in [5, 40, 110, 999, 1] {
        let res = apply_award(xp, level, points);
        assert!(res.new_level >= level);
        assert!(res.new_xp >= 0);
        xp = res.new_xp;
        level = res.new_level;
    }
}

#[test]
fn spend_deducts_when_covered() {
    assert_eq!(spend(50, 20), Ok(30));
    assert_eq!(spend(50, 50), Ok(0));
}

#[test]
fn spend_rejects_a_shortfall_unchanged() {
    let err = spend(20, 50).expect_err("should not cover");
    assert_eq!(err.have, 20);
    assert_eq!(err.need, 50);
}
