use dioxus::prelude::*;

use crate::views::{LoadingView, PageView};

#[component]
pub fn App() -> Element {
    // One-way Loading -> Ready gate: nothing below the loading screen is
    // mounted until the simulation finishes, and there is no path back.
    let mut loading = use_signal(|| true);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Folio" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if loading() {
                    LoadingView { on_complete: move |()| loading.set(false) }
                } else {
                    PageView {}
                }
            }
        }
    }
}
