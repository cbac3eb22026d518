use std::sync::Arc;

use dioxus::prelude::*;

use folio_core::model::Profile;

use crate::views::scroll_observer::RevealSection;
use crate::vm::{ProjectCardVm, map_project_cards};

#[component]
pub fn ProjectsSection(profile: Arc<Profile>) -> Element {
    let cards = map_project_cards(&profile);

    rsx! {
        RevealSection { id: "projects", class: "projects",
            h2 { class: "section-title section-title--center", "Featured Projects" }
            div { class: "projects__grid",
                for card in cards {
                    ProjectCard { card }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(card: ProjectCardVm) -> Element {
    rsx! {
        article { class: "project-card",
            div { class: "project-card__media", aria_hidden: "true",
                span { class: "project-card__mark", "{card.monogram}" }
            }
            div { class: "project-card__body",
                h3 { class: "project-card__title", "{card.title}" }
                div {
                    class: "project-card__description",
                    dangerous_inner_html: "{card.description_html}",
                }
                div { class: "project-card__tags",
                    for tag in card.tags.clone() {
                        span { class: "project-card__tag", "{tag}" }
                    }
                }
                if let Some(link) = card.link.clone() {
                    a {
                        class: "project-card__link",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Project ↗"
                    }
                }
            }
        }
    }
}
