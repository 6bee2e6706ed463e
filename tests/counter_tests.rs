// Host-side tests for the stat counter parse/format/step logic.

#![allow(dead_code)]
mod counter {
    include!("../src/core/counter.rs");
}

use counter::{format_final, format_step, parse_target, CounterAnim};

#[test]
fn parses_plain_and_suffixed_numbers() {
    let t = parse_target("250+").unwrap();
    assert_eq!(t.value, 250.0);
    assert!(t.has_plus && !t.has_k && !t.has_m);

    let t = parse_target("12.5K").unwrap();
    assert_eq!(t.value, 12.5);
    assert!(t.has_k);

    let t = parse_target(" 3M ").unwrap();
    assert_eq!(t.value, 3.0);
    assert!(t.has_m);
}

#[test]
fn label_text_is_left_alone() {
    assert_eq!(parse_target("Top 10"), None);
    assert_eq!(parse_target("toptier 5"), None);
    assert_eq!(parse_target("N/A"), None);
    assert_eq!(parse_target(""), None);
}

#[test]
fn final_text_matches_the_parsed_display() {
    assert_eq!(format_final(&parse_target("250+").unwrap()), "250+");
    assert_eq!(format_final(&parse_target("12.5K").unwrap()), "12.5K");
    assert_eq!(format_final(&parse_target("40").unwrap()), "40");
}

#[test]
fn intermediate_steps_floor_to_one_decimal() {
    let t = parse_target("100").unwrap();
    assert_eq!(format_step(&t, 33.333), "33.3");
    assert_eq!(format_step(&t, 50.0), "50");
}

#[test]
fn animation_finishes_on_the_exact_target() {
    let t = parse_target("250+").unwrap();
    let mut anim = CounterAnim::new(t, 50);
    let mut last = String::new();
    let mut steps = 0;
    while !anim.is_done() {
        last = anim.step();
        steps += 1;
        assert!(steps <= 50, "ran past the configured step count");
    }
    assert_eq!(last, "250+");
    assert_eq!(steps, 50);
}

#[test]
fn fractional_target_still_terminates_exactly() {
    let t = parse_target("12.5K").unwrap();
    let mut anim = CounterAnim::new(t, 50);
    let mut last = String::new();
    while !anim.is_done() {
        last = anim.step();
    }
    assert_eq!(last, "12.5K");
}
