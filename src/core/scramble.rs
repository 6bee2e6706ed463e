use rand::Rng;

const SYMBOLS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#', '_',
    '_', '_', '_', '_', '_', '_', '_',
];

#[derive(Clone, Copy, Debug)]
struct Slot {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
    churn: Option<char>,
}

/// Per-frame output for one character position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Unchanged old character (empty at indexes past the old text).
    Old(Option<char>),
    /// A scramble symbol, rendered in the "dud" style.
    Dud(char),
    /// Locked-in new character (empty at indexes past the new text).
    New(Option<char>),
}

#[derive(Clone, Debug)]
pub struct Scramble {
    slots: Vec<Slot>,
    frame: u32,
}

impl Scramble {
    /// Start a transition from `old` to `new`. `window_max` bounds both the
    /// random start frame and the window length.
    pub fn new(old: &str, new: &str, window_max: u32, rng: &mut impl Rng) -> Self {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let len = old.len().max(new.len());
        let slots = (0..len)
            .map(|i| {
                let start = rng.gen_range(0..window_max);
                Slot {
                    from: old.get(i).copied(),
                    to: new.get(i).copied(),
                    start,
                    end: start + rng.gen_range(0..window_max),
                    churn: None,
                }
            })
            .collect();
        Self { slots, frame: 0 }
    }

    /// Advance one frame. Returns the glyph row and whether every slot has
    /// reached its end frame.
    pub fn step(&mut self, churn_chance: f64, rng: &mut impl Rng) -> (Vec<Glyph>, bool) {
        let frame = self.frame;
        let mut complete = 0usize;
        let row = self
            .slots
            .iter_mut()
            .map(|slot| {
                if frame >= slot.end {
                    complete += 1;
                    Glyph::New(slot.to)
                } else if frame >= slot.start {
                    if slot.churn.is_none() || rng.gen::<f64>() < churn_chance {
                        slot.churn = Some(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]);
                    }
                    Glyph::Dud(slot.churn.unwrap_or('_'))
                } else {
                    Glyph::Old(slot.from)
                }
            })
            .collect();
        let done = complete == self.slots.len();
        if !done {
            self.frame += 1;
        }
        (row, done)
    }

    /// The settled text once (or as if) every window has closed.
    pub fn final_text(&self) -> String {
        self.slots.iter().filter_map(|s| s.to).collect()
    }
}
