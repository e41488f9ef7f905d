use crate::constants::COUNTER_DURATION_MS;
use std::ops::ControlFlow;

/// Ease-out quartic: fast start, gentle landing.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

/// A number counting up from 0 to its declared target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    decimal: bool,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Option<Self> {
        target.is_finite().then(|| Self {
            target,
            decimal: target.fract() != 0.0,
            duration_ms: COUNTER_DURATION_MS,
        })
    }

    /// Parse a `data-target` attribute value. Only the leading number is
    /// read, so `"98%"` counts to 98 and `"10k"` to 10.
    pub fn parse(attr: &str) -> Option<Self> {
        leading_float(attr).and_then(Self::new)
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn is_decimal(&self) -> bool {
        self.decimal
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        self.target * ease_out_quart(self.progress(elapsed_ms))
    }

    /// Text shown at `elapsed_ms`: one decimal digit for fractional targets,
    /// a whole number (floored) otherwise.
    pub fn text_at(&self, elapsed_ms: f64) -> String {
        let v = self.value_at(elapsed_ms);
        if self.decimal {
            one_decimal(v)
        } else {
            format!("{}", v.floor() as i64)
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Longest numeric prefix after leading whitespace: optional sign, digits
/// with an optional fraction, then an optional exponent.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if b.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// One fractional digit, exact ties rounded away from zero and no `-0.0`.
fn one_decimal(v: f64) -> String {
    let twenty = v.abs() * 20.0;
    let exact = v.abs().mul_add(20.0, -twenty) == 0.0;
    if exact && twenty.fract() == 0.0 && twenty % 2.0 == 1.0 && twenty < 1e15 {
        let tenths = (twenty as i64 + 1) / 2;
        let sign = if v < 0.0 { "-" } else { "" };
        return format!("{}{}.{}", sign, tenths / 10, tenths % 10);
    }
    let text = format!("{:.1}", v);
    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}

/// Drives one counter from frame timestamps; the first frame seen is t = 0.
#[derive(Clone, Debug)]
pub struct CounterRun {
    anim: CounterAnimation,
    start_ts: Option<f64>,
}

impl CounterRun {
    pub fn new(anim: CounterAnimation) -> Self {
        Self {
            anim,
            start_ts: None,
        }
    }

    /// Returns the text to show for this frame and whether to keep going.
    pub fn tick(&mut self, timestamp_ms: f64) -> (String, ControlFlow<()>) {
        let start = *self.start_ts.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - start;
        let text = self.anim.text_at(elapsed);
        let flow = if self.anim.is_finished(elapsed) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        };
        (text, flow)
    }
}
