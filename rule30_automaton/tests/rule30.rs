// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the Rule 30 transition and seeded history.
//!
//! These pin the rule table, ring wraparound, and the first generations of a
//! small grid computed by hand.

use rule30_automaton::{ElementaryRule, History, Row, rule30, transition};

#[test]
fn rule_table_is_exhaustively_correct() {
    for a in 0_u8..=1 {
        for b in 0_u8..=1 {
            for c in 0_u8..=1 {
                let p = 4 * a + 2 * b + c;
                let expected = u8::from(matches!(p, 1 | 2 | 3 | 4));
                assert_eq!(rule30(a, b, c), expected, "f({a},{b},{c})");
            }
        }
    }
}

#[test]
fn seven_wide_grid_first_generations() {
    let mut history = History::initialize(7).unwrap();
    assert_eq!(history.row(0).unwrap().cells(), &[0, 0, 0, 1, 0, 0, 0]);

    history.extend(2);
    assert_eq!(history.row(1).unwrap().cells(), &[0, 0, 1, 1, 1, 0, 0]);
    assert_eq!(history.row(2).unwrap().cells(), &[0, 1, 1, 0, 0, 1, 0]);
}

#[test]
fn neighbors_wrap_around_the_ring() {
    // The active cell sits at index 0, so index 4 sees it as its right
    // neighbor and index 0 sees index 4 as its left neighbor.
    let row = Row::from_states([1, 0, 0, 0, 0]);
    let next = transition(&row, ElementaryRule::RULE_30);
    assert_eq!(next.cells(), &[1, 1, 0, 0, 1]);

    let row = Row::from_states([0, 0, 0, 0, 1]);
    let next = transition(&row, ElementaryRule::RULE_30);
    assert_eq!(next.cells(), &[1, 0, 0, 1, 1]);
}

#[test]
fn three_wide_history_wraps_into_itself() {
    let mut history = History::initialize(3).unwrap();
    history.extend(2);
    assert_eq!(history.row(1).unwrap().cells(), &[1, 1, 1]);
    assert_eq!(history.row(2).unwrap().cells(), &[0, 0, 0]);
}

#[test]
fn single_cell_ring_dies_out() {
    let mut history = History::initialize(1).unwrap();
    history.extend(3);
    assert_eq!(history.row(0).unwrap().cells(), &[1]);
    assert_eq!(history.row(1).unwrap().cells(), &[0]);
    assert_eq!(history.row(3).unwrap().cells(), &[0]);
}
