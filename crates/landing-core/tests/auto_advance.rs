//! Auto-advance timer tests
//!
//! Runs on a paused tokio clock: sleeping in the test advances virtual time
//! instantly, so 5 second intervals cost nothing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use landing_core::auto_advance::{self, AutoAdvance, DEFAULT_SLIDE_INTERVAL};
use landing_core::{Carousel, LandingError, SlideSet};
use parking_lot::Mutex;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

const PERIOD: Duration = DEFAULT_SLIDE_INTERVAL;
const EPSILON: Duration = Duration::from_millis(1);

fn shared_carousel(n: usize) -> Arc<Mutex<Carousel>> {
    let slides = SlideSet::new((0..n).map(|i| format!("{i}.png"))).unwrap();
    Arc::new(Mutex::new(Carousel::new(slides)))
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_before_first_period() {
    let carousel = shared_carousel(4);
    let _timer = AutoAdvance::attach(carousel.clone(), PERIOD).unwrap();

    sleep(PERIOD - EPSILON).await;
    assert_eq!(carousel.lock().current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_one_interval_advances_by_one() {
    let carousel = shared_carousel(4);
    let _timer = AutoAdvance::attach(carousel.clone(), PERIOD).unwrap();

    sleep(PERIOD + EPSILON).await;
    assert_eq!(carousel.lock().current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_ticks_wrap_around() {
    let carousel = shared_carousel(4);
    let _timer = AutoAdvance::attach(carousel.clone(), PERIOD).unwrap();

    // 5 ticks over 4 slides
    sleep(PERIOD * 5 + EPSILON).await;
    assert_eq!(carousel.lock().current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_does_not_reschedule() {
    let carousel = shared_carousel(4);
    let _timer = AutoAdvance::attach(carousel.clone(), PERIOD).unwrap();

    // Click "next" just before the tick is due
    sleep(PERIOD - EPSILON).await;
    carousel.lock().next();
    assert_eq!(carousel.lock().current_index(), 1);

    // The pending tick still fires on schedule and applies on top
    sleep(EPSILON * 2).await;
    assert_eq!(carousel.lock().current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_select_then_tick_last_write_wins() {
    let carousel = shared_carousel(4);
    let _timer = AutoAdvance::attach(carousel.clone(), PERIOD).unwrap();

    sleep(PERIOD / 2).await;
    carousel.lock().select(3).unwrap();

    sleep(PERIOD / 2 + EPSILON).await;
    assert_eq!(carousel.lock().current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_mutation() {
    let carousel = shared_carousel(4);
    let timer = AutoAdvance::attach(carousel.clone(), PERIOD).unwrap();

    sleep(PERIOD + EPSILON).await;
    assert_eq!(carousel.lock().current_index(), 1);

    drop(timer);

    sleep(PERIOD * 10).await;
    assert_eq!(carousel.lock().current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stop_before_first_tick() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = ticks.clone();
    let timer = AutoAdvance::spawn(PERIOD, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    // Let the loop register its interval before tearing it down
    tokio::task::yield_now().await;
    timer.stop();

    sleep(PERIOD * 3).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_zero_interval_rejected() {
    let result = AutoAdvance::spawn(Duration::ZERO, || {});
    assert!(matches!(result, Err(LandingError::ZeroInterval)));

    let result = auto_advance::run(Duration::ZERO, CancellationToken::new(), || {}).await;
    assert!(matches!(result, Err(LandingError::ZeroInterval)));
}

#[tokio::test(start_paused = true)]
async fn test_run_counts_ticks_until_cancelled() {
    let cancel = CancellationToken::new();
    let mut ticks = 0;

    let stopper = async {
        sleep(PERIOD * 3 + EPSILON).await;
        cancel.cancel();
        // Three more periods pass with the loop stopped
        sleep(PERIOD * 3).await;
    };
    let ticker = auto_advance::run(PERIOD, cancel.clone(), || ticks += 1);
    let (result, ()) = tokio::join!(ticker, stopper);

    result.unwrap();
    assert_eq!(ticks, 3);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_when_tick_is_due_skips_tick() {
    let cancel = CancellationToken::new();
    let ticks = std::cell::Cell::new(0);

    let ticker = auto_advance::run(PERIOD, cancel.clone(), || ticks.set(ticks.get() + 1));
    tokio::pin!(ticker);

    // First poll registers the interval, due one period from now
    tokio::select! {
        biased;
        _ = &mut ticker => panic!("timer exited before cancellation"),
        _ = std::future::ready(()) => {}
    }

    // Tick due and token cancelled before the loop is polled again
    tokio::time::advance(PERIOD).await;
    cancel.cancel();

    ticker.await.unwrap();
    assert_eq!(ticks.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_run_with_local_state() {
    // Non-Send state, as a single-threaded UI would hold it
    let carousel = std::rc::Rc::new(std::cell::RefCell::new(Carousel::new(
        SlideSet::new(["a", "b", "c"]).unwrap(),
    )));
    let cancel = CancellationToken::new();

    let ticker = {
        let carousel = carousel.clone();
        auto_advance::run(PERIOD, cancel.clone(), move || carousel.borrow_mut().advance())
    };
    let stopper = async {
        sleep(PERIOD * 2 + EPSILON).await;
        cancel.cancel();
    };
    let (result, ()) = tokio::join!(ticker, stopper);

    result.unwrap();
    assert_eq!(carousel.borrow().current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_timer_keeps_running_while_held() {
    let timer = AutoAdvance::spawn(PERIOD, || {}).unwrap();
    sleep(PERIOD * 4).await;
    assert!(!timer.is_finished());
}
