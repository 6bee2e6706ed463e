#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub has_k: bool,
    pub has_m: bool,
    pub has_plus: bool,
}

/// Parse a display text. Returns `None` for labels that must be left
/// unanimated: "Top ..." style text or anything without a parsable number.
pub fn parse_target(text: &str) -> Option<CounterTarget> {
    let text = text.trim();
    if text.to_ascii_lowercase().contains("top") {
        return None;
    }
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value: f64 = numeric.parse().ok()?;
    Some(CounterTarget {
        value,
        has_k: text.contains('K'),
        has_m: text.contains('M'),
        has_plus: text.contains('+'),
    })
}

fn suffixes(t: &CounterTarget) -> String {
    let mut s = String::new();
    if t.has_k {
        s.push('K');
    }
    if t.has_m {
        s.push('M');
    }
    if t.has_plus {
        s.push('+');
    }
    s
}

/// Format one intermediate step value. Keeps the observed one-decimal floor
/// arithmetic, so non-multiple-of-ten targets briefly show a truncated value.
pub fn format_step(target: &CounterTarget, current: f64) -> String {
    let shown = (current * 10.0).floor() / 10.0;
    format!("{}{}", fmt_number(shown), suffixes(target))
}

/// The exact terminal text.
pub fn format_final(target: &CounterTarget) -> String {
    format!("{}{}", fmt_number(target.value), suffixes(target))
}

// Render like a float-to-string in JS: no trailing ".0".
fn fmt_number(v: f64) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Stepper state across the fixed-count animation.
#[derive(Clone, Debug)]
pub struct CounterAnim {
    target: CounterTarget,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnim {
    pub fn new(target: CounterTarget, steps: u32) -> Self {
        Self {
            increment: target.value / steps as f64,
            target,
            current: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one step; returns the text to render.
    pub fn step(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target.value {
            self.done = true;
            format_final(&self.target)
        } else {
            format_step(&self.target, self.current)
        }
    }
}
