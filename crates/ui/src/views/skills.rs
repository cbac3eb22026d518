use std::sync::Arc;

use dioxus::prelude::*;

use folio_core::model::Profile;

use crate::views::scroll_observer::RevealSection;
use crate::vm::{SkillCardVm, map_skill_cards};

#[component]
pub fn SkillsSection(profile: Arc<Profile>) -> Element {
    let cards = map_skill_cards(&profile);

    rsx! {
        RevealSection { id: "skills", class: "skills",
            h2 { class: "section-title section-title--center", "Skills & Expertise" }
            div { class: "skills__grid",
                for card in cards {
                    SkillCard { card }
                }
            }
        }
    }
}

#[component]
fn SkillCard(card: SkillCardVm) -> Element {
    rsx! {
        div { class: "skill-card",
            span { class: "skill-card__icon", aria_hidden: "true", "{card.icon}" }
            h3 { class: "skill-card__name", "{card.name}" }
            p { class: "skill-card__blurb", "{card.blurb}" }
        }
    }
}
