use std::sync::Arc;

use dioxus::prelude::*;

use folio_core::model::Profile;

/// The hero plays a staggered entrance on mount rather than a scroll
/// reveal; each `hero__item` carries its own animation delay in CSS.
#[component]
pub fn HeroSection(profile: Arc<Profile>) -> Element {
    let monogram: String = profile.name().chars().take(1).collect();

    rsx! {
        section { class: "hero", id: "hero",
            div { class: "hero__copy",
                p { class: "hero__kicker hero__item", "{profile.tagline()}" }
                h1 { class: "hero__headline hero__item",
                    "{profile.headline()}"
                    span { class: "hero__headline-accent", "{profile.headline_accent()}" }
                }
                p { class: "hero__intro hero__item", "{profile.intro()}" }
                div { class: "hero__actions hero__item",
                    a { class: "btn btn--primary magnetic-btn", href: "#projects", "View Projects" }
                    a { class: "btn btn--ghost magnetic-btn", href: "#contact", "Let's Connect" }
                }
            }
            div { class: "hero__portrait",
                div { class: "hero__portrait-frame",
                    span { class: "hero__portrait-mark", "{monogram}" }
                }
                span { class: "hero__float hero__float--one", aria_hidden: "true" }
                span { class: "hero__float hero__float--two", aria_hidden: "true" }
                span { class: "hero__float hero__float--three", aria_hidden: "true" }
            }
        }
    }
}
