//! Randomized and stress tests for SLW
//!
//! The throughput test is ignored by default.
//! Run with: cargo test --release stress -- --ignored

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slw::*;
use std::collections::VecDeque;
use std::time::Instant;

/// Straightforward reference: a deque trimmed from the front.
struct Model {
    width: usize,
    history: VecDeque<Category>,
}

impl Model {
    fn new(width: usize) -> Self {
        Self {
            width,
            history: VecDeque::new(),
        }
    }

    fn apply(&mut self, op: &WindowOp) -> bool {
        match *op {
            WindowOp::Io { category, count } => {
                for _ in 0..count {
                    if self.history.len() == self.width {
                        self.history.pop_front();
                    }
                    self.history.push_back(category);
                }
            }
            WindowOp::Resize(width) => {
                if width <= 0 {
                    return false;
                }
                self.width = width as usize;
                while self.history.len() > self.width {
                    self.history.pop_front();
                }
            }
            WindowOp::Reset => self.history.clear(),
            WindowOp::Noop => {}
        }
        true
    }

    fn count(&self, category: Category) -> usize {
        self.history.iter().filter(|c| **c == category).count()
    }
}

fn random_category(rng: &mut StdRng) -> Category {
    Category::ALL[rng.gen_range(0..Category::COUNT)]
}

fn random_op(rng: &mut StdRng) -> WindowOp {
    match rng.gen_range(0..100) {
        0..=79 => WindowOp::io(random_category(rng), rng.gen_range(1..30)),
        80..=91 => WindowOp::Resize(rng.gen_range(-3..64)),
        92..=96 => WindowOp::Reset,
        _ => WindowOp::Noop,
    }
}

fn assert_matches_model(slw: &SlidingWindow, model: &Model, step: usize) {
    assert_eq!(slw.width(), model.width, "width at step {}", step);
    assert_eq!(slw.len(), model.history.len(), "len at step {}", step);
    for category in Category::ALL {
        assert_eq!(
            slw.total(category),
            model.count(category),
            "{} total at step {}",
            category,
            step
        );
    }
    assert!(
        slw.iter().eq(model.history.iter().copied()),
        "history order at step {}",
        step
    );
    slw.debug_validate_invariants();
}

#[test]
fn random_sequences_match_model() {
    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let width = rng.gen_range(1..40);
        let mut slw = SlidingWindow::new(width).unwrap();
        let mut model = Model::new(width);

        for step in 0..500 {
            let op = random_op(&mut rng);
            let accepted = model.apply(&op);
            assert_eq!(slw.apply(&op).is_ok(), accepted, "op {:?}", op);
            assert_matches_model(&slw, &model, step);
        }
    }
}

#[test]
fn random_sequences_count_as_none() {
    let mut rng = StdRng::seed_from_u64(0x5157);
    let mut slw = SlidingWindow::with_config(WindowConfig {
        width: 20,
        unfilled: UnfilledPolicy::CountAsNone,
    })
    .unwrap();

    for _ in 0..2_000 {
        let op = random_op(&mut rng);
        let _ = slw.apply(&op);

        let reported: usize = Category::ALL.iter().map(|c| slw.total(*c)).sum();
        assert_eq!(reported, slw.width());
        assert_eq!(
            slw.total(Category::None),
            slw.recorded(Category::None) + slw.vacant()
        );
    }
}

#[test]
fn overflow_evicts_in_fifo_order() {
    let mut slw = SlidingWindow::new(5).unwrap();
    let pattern = [
        Category::Read,
        Category::Write,
        Category::None,
        Category::Write,
        Category::Read,
        Category::Read,
        Category::Write,
    ];
    for (i, category) in pattern.iter().enumerate() {
        slw.advance(*category);
        let start = (i + 1).saturating_sub(5);
        assert!(slw.iter().eq(pattern[start..=i].iter().copied()));
    }
}

#[test]
#[ignore] // Run manually with --ignored
fn stress_test_advance() {
    let mut slw = SlidingWindow::new(1024).unwrap();
    let iterations = 10_000_000u64;
    let start = Instant::now();

    for i in 0..iterations {
        let category = match i % 7 {
            0 | 1 | 2 => Category::Read,
            3 | 4 => Category::Write,
            _ => Category::None,
        };
        slw.advance(category);
    }

    let elapsed = start.elapsed();
    let rate = iterations as f64 / elapsed.as_secs_f64();

    println!("Advanced {} events in {:?}", iterations, elapsed);
    println!("Rate: {:.0} events/second", rate);

    let sum: usize = Category::ALL.iter().map(|c| slw.total(*c)).sum();
    assert_eq!(sum, 1024);
    assert!(
        rate > 10_000_000.0,
        "Should advance at least 10M events/s, got {:.0}",
        rate
    );
}
