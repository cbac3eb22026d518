use std::collections::HashMap;

use dioxus::document;
use dioxus::prelude::*;
use serde::Deserialize;

use folio_core::reveal::{ElementBounds, RevealState, RevealTransition, TriggerBand, Viewport};
use folio_core::scroll::ScrollRatio;

use crate::scripts::scroll_feed_script;

/// Scroll offset past which the back-to-top control appears.
pub const BACK_TO_TOP_OFFSET_PX: f64 = 300.0;

/// One sample reported by the injected scroll feed.
#[derive(Debug, Clone, Deserialize)]
struct ScrollSample {
    scroll_top: f64,
    scroll_height: f64,
    viewport_height: f64,
    #[serde(default)]
    sections: Vec<SectionSample>,
}

#[derive(Debug, Clone, Deserialize)]
struct SectionSample {
    id: String,
    top: f64,
    bottom: f64,
}

/// Scroll-derived state shared with the page's components.
#[derive(Clone, Copy)]
pub struct ScrollMetrics {
    ratio: Signal<ScrollRatio>,
    offset: Signal<f64>,
    reveals: Signal<HashMap<String, RevealState>>,
}

impl ScrollMetrics {
    #[must_use]
    pub fn ratio(&self) -> ScrollRatio {
        (self.ratio)()
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        (self.offset)()
    }

    /// Sections start hidden until the feed reports otherwise.
    #[must_use]
    pub fn reveal_state(&self, id: &str) -> RevealState {
        self.reveals.read().get(id).copied().unwrap_or_default()
    }
}

#[must_use]
pub fn use_scroll_metrics() -> ScrollMetrics {
    use_context::<ScrollMetrics>()
}

/// Installs the scroll feed and shares the derived state with descendants.
///
/// The feed task belongs to the calling component's scope: unmounting drops
/// the task, and the injected listener removes itself once the page root id
/// is gone. All reveal decisions happen here, in Rust; the script only
/// reports geometry.
pub fn use_scroll_observer() -> ScrollMetrics {
    let mut ratio = use_signal(ScrollRatio::default);
    let mut offset = use_signal(|| 0.0_f64);
    let mut reveals = use_signal(HashMap::<String, RevealState>::new);
    let metrics = use_context_provider(|| ScrollMetrics {
        ratio,
        offset,
        reveals,
    });

    use_future(move || async move {
        let band = TriggerBand::default();
        let mut feed = document::eval(scroll_feed_script());
        while let Ok(sample) = feed.recv::<ScrollSample>().await {
            offset.set(sample.scroll_top);
            ratio.set(ScrollRatio::compute(sample.scroll_top, sample.scroll_height));
            let viewport = Viewport {
                height: sample.viewport_height,
            };
            for section in sample.sections {
                let bounds = ElementBounds {
                    top: section.top,
                    bottom: section.bottom,
                };
                let current = reveals
                    .read()
                    .get(section.id.as_str())
                    .copied()
                    .unwrap_or_default();
                let next = band.next_state(current, bounds, viewport);
                if next != current {
                    reveals.write().insert(section.id, next);
                }
            }
        }
    });

    metrics
}

/// A page section that fades in and rises when scrolled into the trigger
/// band, and reverses when it leaves the band upward.
#[component]
pub fn RevealSection(id: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let metrics = use_scroll_metrics();
    let transition = RevealTransition::default();
    let revealed = metrics.reveal_state(id) == RevealState::Visible;
    let state_class = if revealed {
        "reveal reveal--visible"
    } else {
        "reveal"
    };
    let extra = class.unwrap_or("");
    let style = format!(
        "--reveal-rise: {}px; transition-duration: {}ms; transition-timing-function: {};",
        transition.rise_px(),
        transition.duration().as_millis(),
        transition.easing().css(),
    );
    rsx! {
        section {
            id: "{id}",
            class: "{state_class} {extra}",
            style: "{style}",
            "data-reveal": "",
            {children}
        }
    }
}

/// Fixed indicator at the top of the page tracking the scroll ratio.
#[component]
pub fn ScrollProgressBar() -> Element {
    let metrics = use_scroll_metrics();
    let width = metrics.ratio().percent();
    rsx! {
        div { class: "scroll-progress", aria_hidden: "true",
            div { class: "scroll-progress__fill", style: "width: {width}%;" }
        }
    }
}
