use chrono::Datelike;
use dioxus::document;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::scripts::{cursor_script, parallax_script};
use crate::views::scroll_observer::{ScrollProgressBar, use_scroll_observer};
use crate::views::{
    AboutSection, BackToTop, ContactSection, Header, HeroSection, ProjectsSection, SkillsSection,
};

/// The whole page once loading has finished. Mounting this activates the
/// scroll observer; nothing here exists while the loading screen is up.
#[component]
pub fn PageView() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = ctx.profile();
    let _metrics = use_scroll_observer();

    // DOM-side flourishes. Both scripts find their roots by ids rendered
    // below and drop their listeners once those ids are gone.
    use_effect(|| {
        let _ = document::eval(cursor_script());
        let _ = document::eval(parallax_script());
    });

    let year = ctx.clock().now().year();
    let owner = profile.name().to_string();
    let socials: Vec<(String, String)> = profile
        .socials()
        .iter()
        .map(|social| (social.label().to_string(), social.url().to_string()))
        .collect();

    rsx! {
        div { class: "page", id: "page-root",
            ScrollProgressBar {}
            div { class: "cursor-inner", id: "cursor-inner", aria_hidden: "true" }
            div { class: "cursor-outer", id: "cursor-outer", aria_hidden: "true" }
            div { class: "backdrop", aria_hidden: "true",
                div { class: "backdrop__blob backdrop__blob--one", "data-parallax": "0.12" }
                div { class: "backdrop__blob backdrop__blob--two", "data-parallax": "0.2" }
                div { class: "backdrop__blob backdrop__blob--three", "data-parallax": "0.16" }
            }
            Header {}
            main { class: "page__main",
                HeroSection { profile: profile.clone() }
                AboutSection { profile: profile.clone() }
                SkillsSection { profile: profile.clone() }
                ProjectsSection { profile: profile.clone() }
                ContactSection { profile: profile.clone() }
            }
            footer { class: "footer",
                div { class: "footer__inner",
                    p { class: "footer__copyright", "© {year} {owner}. All rights reserved." }
                    div { class: "footer__socials",
                        for (label, url) in socials {
                            a {
                                class: "footer__social",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{label}"
                            }
                        }
                    }
                }
            }
            BackToTop {}
        }
    }
}
