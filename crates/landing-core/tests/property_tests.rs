//! Property-based tests for carousel navigation
//!
//! Uses proptest to verify the wrap-around arithmetic of the carousel index.

use landing_core::{Carousel, SlideSet};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate a slide set of 1..=32 slides
fn slide_set_strategy() -> impl Strategy<Value = SlideSet> {
    (1usize..=32).prop_map(|n| {
        SlideSet::new((0..n).map(|i| format!("slide-{i}.png"))).expect("non-empty")
    })
}

/// A carousel positioned at an arbitrary valid index
fn positioned_carousel() -> impl Strategy<Value = Carousel> {
    slide_set_strategy().prop_flat_map(|slides| {
        let len = slides.len();
        (Just(slides), 0..len).prop_map(|(slides, start)| {
            let mut carousel = Carousel::new(slides);
            carousel.select(start).expect("start in range");
            carousel
        })
    })
}

/// Navigation actions a visitor (or the timer) can take
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Previous,
    Tick,
    Select(usize),
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Next),
            3 => Just(NavOp::Previous),
            2 => Just(NavOp::Tick),
            1 => (0..64usize).prop_map(NavOp::Select),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// k `next` calls from i land on (i + k) mod N
    #[test]
    fn next_k_times(mut carousel in positioned_carousel(), k in 0usize..200) {
        let n = carousel.len();
        let start = carousel.current_index();

        for _ in 0..k {
            carousel.next();
        }

        prop_assert_eq!(carousel.current_index(), (start + k) % n);
    }

    /// k `previous` calls from i land on (i - k mod N + N) mod N
    #[test]
    fn previous_k_times(mut carousel in positioned_carousel(), k in 0usize..200) {
        let n = carousel.len();
        let start = carousel.current_index();

        for _ in 0..k {
            carousel.previous();
        }

        prop_assert_eq!(carousel.current_index(), (start + n - k % n) % n);
    }

    /// One timer tick from i lands on (i + 1) mod N
    #[test]
    fn tick_advances_by_one(mut carousel in positioned_carousel()) {
        let n = carousel.len();
        let start = carousel.current_index();

        carousel.advance();

        prop_assert_eq!(carousel.current_index(), (start + 1) % n);
    }

    /// Direct selection of j always yields j, whatever happened before
    #[test]
    fn select_is_absolute(
        mut carousel in positioned_carousel(),
        ops in nav_ops_strategy(30),
        target in 0usize..32,
    ) {
        for op in ops {
            match op {
                NavOp::Next => carousel.next(),
                NavOp::Previous => carousel.previous(),
                NavOp::Tick => carousel.advance(),
                NavOp::Select(i) => { let _ = carousel.select(i); }
            }
        }

        let target = target % carousel.len();
        carousel.select(target).unwrap();
        prop_assert_eq!(carousel.current_index(), target);
    }

    /// The index stays in [0, N) under any sequence of operations
    #[test]
    fn index_stays_in_range(mut carousel in positioned_carousel(), ops in nav_ops_strategy(100)) {
        for op in ops {
            match op {
                NavOp::Next => carousel.next(),
                NavOp::Previous => carousel.previous(),
                NavOp::Tick => carousel.advance(),
                NavOp::Select(i) => {
                    let before = carousel.current_index();
                    if carousel.select(i).is_err() {
                        prop_assert!(i >= carousel.len());
                        prop_assert_eq!(carousel.current_index(), before);
                    }
                }
            }
            prop_assert!(carousel.current_index() < carousel.len());
            prop_assert_eq!(carousel.offset_percent(), carousel.current_index() * 100);
        }
    }

    /// `next` then `previous` is the identity
    #[test]
    fn next_previous_inverse(mut carousel in positioned_carousel()) {
        let start = carousel.current_index();
        carousel.next();
        carousel.previous();
        prop_assert_eq!(carousel.current_index(), start);
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn four_slides_forward_then_wrap() {
    let mut carousel = Carousel::new(SlideSet::new(["1", "2", "3", "4"]).unwrap());
    carousel.next();
    carousel.next();
    carousel.next();
    assert_eq!(carousel.current_index(), 3);

    carousel.next();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn four_slides_previous_wraps_to_last() {
    let mut carousel = Carousel::new(SlideSet::new(["1", "2", "3", "4"]).unwrap());
    carousel.previous();
    assert_eq!(carousel.current_index(), 3);
}
