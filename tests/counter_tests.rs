// Host-side tests for counter animation and its frame loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
    pub mod counter {
        include!("../src/core/counter.rs");
    }
}

use crate::core::counter::*;
use crate::core::schedule::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ManualScheduler {
    pending: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
}

impl ManualScheduler {
    fn run_frame(&self, ts: f64) {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        for cb in due {
            cb(ts);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_next_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        self.pending.borrow_mut().push(callback);
    }
}

#[test]
fn ease_out_quart_shape() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert_eq!(ease_out_quart(0.5), 0.9375);
    assert_eq!(ease_out_quart(-1.0), 0.0);
    assert_eq!(ease_out_quart(2.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_out_quart(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn integer_target_never_shows_a_decimal_point() {
    let c = CounterAnimation::parse("42").expect("valid target");
    assert!(!c.is_decimal());
    assert_eq!(c.text_at(0.0), "0");
    let mut t = 0.0;
    while t <= 2100.0 {
        let text = c.text_at(t);
        assert!(!text.contains('.'), "{} at {}ms", text, t);
        let v: i64 = text.parse().expect("whole number");
        assert!((0..=42).contains(&v));
        t += 16.0;
    }
    assert_eq!(c.text_at(2000.0), "42");
    assert_eq!(c.text_at(1000.0), "39");
}

#[test]
fn decimal_target_always_shows_one_digit() {
    let c = CounterAnimation::parse("4.5").expect("valid target");
    assert!(c.is_decimal());
    assert_eq!(c.text_at(0.0), "0.0");
    let mut t = 0.0;
    while t <= 2100.0 {
        let text = c.text_at(t);
        let (_, frac) = text.split_once('.').expect("decimal point");
        assert_eq!(frac.len(), 1, "{} at {}ms", text, t);
        t += 16.0;
    }
    assert_eq!(c.text_at(2000.0), "4.5");
}

#[test]
fn progress_clamps_and_finishes() {
    let c = CounterAnimation::new(10.0).expect("finite");
    assert_eq!(c.progress(-50.0), 0.0);
    assert_eq!(c.progress(1000.0), 0.5);
    assert_eq!(c.progress(5000.0), 1.0);
    assert!(!c.is_finished(1999.0));
    assert!(c.is_finished(2000.0));

    let instant = c.with_duration(0.0);
    assert_eq!(instant.text_at(0.0), "10");
}

#[test]
fn parse_rejects_garbage() {
    assert!(CounterAnimation::parse("abc").is_none());
    assert!(CounterAnimation::parse("").is_none());
    assert!(CounterAnimation::parse("NaN").is_none());
    assert!(CounterAnimation::parse("inf").is_none());
    assert_eq!(CounterAnimation::parse(" 98 ").map(|c| c.target()), Some(98.0));
}

#[test]
fn counter_run_uses_first_frame_as_start() {
    let c = CounterAnimation::new(42.0).expect("finite");
    let mut run = CounterRun::new(c);
    let (text, flow) = run.tick(5000.0);
    assert_eq!(text, "0");
    assert!(flow.is_continue());
    let (text, _) = run.tick(6000.0);
    assert_eq!(text, "39");
    let (text, flow) = run.tick(7000.0);
    assert_eq!(text, "42");
    assert!(flow.is_break());
}

#[test]
fn counter_loop_stops_after_duration() {
    let scheduler = Rc::new(ManualScheduler::default());
    let shown: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = shown.clone();
    let mut run = CounterRun::new(CounterAnimation::new(4.5).expect("finite"));
    drive(scheduler.clone(), move |ts| {
        let (text, flow) = run.tick(ts);
        sink.borrow_mut().push(text);
        flow
    });

    let mut ts = 100.0;
    for _ in 0..200 {
        scheduler.run_frame(ts);
        ts += 16.0;
    }
    let shown = shown.borrow();
    assert_eq!(shown.last().map(String::as_str), Some("4.5"));
    // 2000ms at 16ms per frame, plus the starting frame
    assert_eq!(shown.len(), 126);
    assert!(scheduler.pending.borrow().is_empty());
}

#[test]
fn parse_reads_leading_number() {
    assert_eq!(CounterAnimation::parse("98%").map(|c| c.target()), Some(98.0));
    assert_eq!(CounterAnimation::parse("10k").map(|c| c.target()), Some(10.0));
    assert_eq!(CounterAnimation::parse("4.5g").map(|c| c.target()), Some(4.5));
    assert_eq!(leading_float("-2.5e1x"), Some(-25.0));
    assert_eq!(leading_float("1e"), Some(1.0));
    assert_eq!(leading_float(".5"), Some(0.5));
    assert_eq!(leading_float("7."), Some(7.0));
    assert_eq!(leading_float("."), None);
    assert_eq!(leading_float("+"), None);
    assert_eq!(leading_float("k10"), None);
}

#[test]
fn decimal_ties_round_away_from_zero() {
    let c = CounterAnimation::new(2.25).expect("finite");
    assert_eq!(c.text_at(2000.0), "2.3");
    let c = CounterAnimation::new(-2.25).expect("finite");
    assert_eq!(c.text_at(2000.0), "-2.3");
    let c = CounterAnimation::new(0.15).expect("finite");
    assert_eq!(c.text_at(2000.0), "0.1");
}

#[test]
fn negative_decimal_starts_at_plain_zero() {
    let c = CounterAnimation::new(-4.5).expect("finite");
    assert_eq!(c.text_at(0.0), "0.0");
    assert_eq!(c.text_at(2000.0), "-4.5");
}
