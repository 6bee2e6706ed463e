// Host-side tests for the text scramble cipher.

#![allow(dead_code)]
mod scramble {
    include!("../src/core/scramble.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use scramble::{Glyph, Scramble};

fn run_to_completion(s: &mut Scramble, rng: &mut StdRng) -> (Vec<Glyph>, u32) {
    let mut frames = 0;
    loop {
        let (row, done) = s.step(0.28, rng);
        frames += 1;
        if done {
            return (row, frames);
        }
        assert!(frames < 10_000, "scramble never resolved");
    }
}

#[test]
fn resolves_to_the_new_text() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = Scramble::new("OLD", "NEW TEXT", 40, &mut rng);
    assert_eq!(s.final_text(), "NEW TEXT");

    let (row, _) = run_to_completion(&mut s, &mut rng);
    let settled: String = row
        .iter()
        .map(|g| match g {
            Glyph::New(Some(c)) => *c,
            other => panic!("unresolved glyph {other:?}"),
        })
        .collect();
    assert_eq!(settled, "NEW TEXT");
}

#[test]
fn shrinking_text_leaves_empty_tails() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut s = Scramble::new("LONG OLD TEXT", "HI", 10, &mut rng);
    let (row, _) = run_to_completion(&mut s, &mut rng);
    assert_eq!(row.len(), 13);
    assert_eq!(row[0], Glyph::New(Some('H')));
    assert_eq!(row[1], Glyph::New(Some('I')));
    for g in &row[2..] {
        assert_eq!(*g, Glyph::New(None));
    }
    assert_eq!(s.final_text(), "HI");
}

#[test]
fn old_characters_show_before_their_window() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut s = Scramble::new("AB", "XY", 40, &mut rng);
    // Frame 0: every slot is before or at its window; none can be New yet
    // unless its window is empty and starts at 0.
    let (row, done) = s.step(0.28, &mut rng);
    assert!(!done || row.iter().all(|g| matches!(g, Glyph::New(_))));
    for g in &row {
        match g {
            Glyph::Old(Some(c)) => assert!(*c == 'A' || *c == 'B'),
            Glyph::Dud(_) | Glyph::New(_) => {}
            Glyph::Old(None) => panic!("old text has no empty slots here"),
        }
    }
}

#[test]
fn completion_bound_by_window_max() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut s = Scramble::new("ABCDEFGH", "IJKLMNOP", 40, &mut rng);
    let (_, frames) = run_to_completion(&mut s, &mut rng);
    // start < 40 and end < start + 40, so 80 frames always suffice.
    assert!(frames <= 80, "frames = {frames}");
}

#[test]
fn empty_transition_is_immediately_done() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = Scramble::new("", "", 40, &mut rng);
    let (row, done) = s.step(0.28, &mut rng);
    assert!(done);
    assert!(row.is_empty());
    assert_eq!(s.final_text(), "");
}
