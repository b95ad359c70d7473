//! Image slider - auto-advancing carousel of product screenshots.
//!
//! The strip holds every slide side by side and is translated by
//! `index × 100%`, so changes slide rather than cut. A repeating timer
//! advances the index for as long as the slider is mounted; arrows and
//! dots mutate the same index without touching the timer.

use std::time::Duration;

use dioxus::prelude::*;
use landing_core::auto_advance::{self, DEFAULT_SLIDE_INTERVAL};
use landing_core::{Carousel, SlideSet};
use landing_ui::IconButton;
use tokio_util::sync::CancellationToken;

/// Props for the image slider.
#[derive(Props, Clone, PartialEq)]
pub struct ImageSliderProps {
    /// Slides, fixed for the lifetime of the slider
    pub slides: SlideSet,
    /// Auto-advance period
    #[props(default = DEFAULT_SLIDE_INTERVAL)]
    pub interval: Duration,
}

#[component]
pub fn ImageSlider(props: ImageSliderProps) -> Element {
    let mut carousel = use_signal(|| Carousel::new(props.slides.clone()));
    let interval = props.interval;

    // Auto-advance, cancelled when the slider unmounts
    let cancel = use_hook(CancellationToken::new);
    use_hook({
        let cancel = cancel.clone();
        move || {
            spawn(async move {
                let ticker = auto_advance::run(interval, cancel, move || {
                    carousel.write().advance();
                });
                if let Err(e) = ticker.await {
                    tracing::warn!("Carousel timer did not start: {}", e);
                }
            });
        }
    });
    use_drop(move || cancel.cancel());

    let (transform, active, count) = {
        let state = carousel.read();
        (state.transform(), state.current_index(), state.len())
    };

    rsx! {
        div { class: "slider",
            div {
                class: "slider-track",
                style: "transform: {transform};",
                for (idx, slide) in props.slides.iter().enumerate() {
                    div { class: "slide",
                        img {
                            class: "slide-image",
                            src: "{slide}",
                            alt: SlideSet::alt_text(idx),
                        }
                    }
                }
            }

            IconButton {
                class: "slider-arrow prev".to_string(),
                aria_label: "Slide anterior".to_string(),
                onclick: move |_| carousel.write().previous(),
                "\u{2039}"
            }
            IconButton {
                class: "slider-arrow next".to_string(),
                aria_label: "Próximo slide".to_string(),
                onclick: move |_| carousel.write().next(),
                "\u{203A}"
            }

            div { class: "slider-dots",
                for idx in 0..count {
                    button {
                        class: if idx == active { "slider-dot active" } else { "slider-dot" },
                        "aria-label": SlideSet::alt_text(idx),
                        onclick: move |_| {
                            if let Err(e) = carousel.write().select(idx) {
                                tracing::warn!("Ignoring slide selection: {}", e);
                            }
                        },
                    }
                }
            }
        }
    }
}
