use dioxus::prelude::*;

use folio_core::progress::{COMPLETION_HOLD, LoadProgress, ProgressSimulation, TICK_INTERVAL, TickOutcome};
use services::ProgressDriver;

use crate::context::AppContext;
use crate::vm::percent_label;

/// Full-screen overlay shown until the simulated load completes.
///
/// The driver task is owned by this view's scope, so teardown cancels it;
/// the loop itself stops the instant the simulation reports completion, so
/// no tick ever lands after the terminal value.
#[component]
pub fn LoadingView(on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut progress = use_signal(LoadProgress::zero);

    use_future(move || async move {
        let mut simulation = ProgressSimulation::new();
        let mut driver = ProgressDriver::new();
        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        // The first interval tick resolves immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let outcome = simulation.tick(driver.next_increment());
            progress.set(simulation.progress());
            match outcome {
                TickOutcome::Advanced => {}
                TickOutcome::Completed | TickOutcome::Saturated => break,
            }
        }
        tokio::time::sleep(COMPLETION_HOLD).await;
        on_complete.call(());
    });

    let percent = progress().percent();
    let label = percent_label(progress());
    let brand = ctx.profile().name().to_string();

    rsx! {
        div { class: "loading-screen", id: "loading-root",
            div { class: "loading-screen__inner",
                h1 { class: "loading-screen__brand", "{brand}" }
                p { class: "loading-screen__tagline", "Loading amazing experiences" }
                div { class: "loading-screen__track",
                    div { class: "loading-screen__fill", style: "width: {percent}%;" }
                }
                p { class: "loading-screen__label", "{label}" }
                div { class: "loading-screen__dots", aria_hidden: "true",
                    span { class: "loading-screen__dot" }
                    span { class: "loading-screen__dot loading-screen__dot--second" }
                    span { class: "loading-screen__dot loading-screen__dot--third" }
                }
            }
        }
    }
}
