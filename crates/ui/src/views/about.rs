use std::sync::Arc;

use dioxus::prelude::*;

use folio_core::model::Profile;

use crate::views::scroll_observer::RevealSection;
use crate::vm::render_markdown;

#[component]
pub fn AboutSection(profile: Arc<Profile>) -> Element {
    let about_html = render_markdown(profile.about_markdown());
    let stats = profile.stats().to_vec();

    rsx! {
        RevealSection { id: "about", class: "about",
            div { class: "about__copy",
                h2 { class: "section-title", "About Me" }
                div { class: "about__body", dangerous_inner_html: "{about_html}" }
            }
            div { class: "about__stats",
                for stat in stats {
                    div { class: "stat-tile",
                        h3 { class: "stat-tile__figure", "{stat.figure()}" }
                        p { class: "stat-tile__caption", "{stat.caption()}" }
                    }
                }
            }
        }
    }
}
