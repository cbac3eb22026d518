use dioxus::document;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::scripts::scroll_to_top_script;
use crate::views::scroll_observer::{BACK_TO_TOP_OFFSET_PX, use_scroll_metrics};

#[component]
pub fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let brand = ctx.profile().name().to_string();
    let mut menu_open = use_signal(|| false);

    let nav_class = if menu_open() {
        "header__nav header__nav--open"
    } else {
        "header__nav"
    };
    let menu_btn_class = if menu_open() {
        "header__menu-btn header__menu-btn--open"
    } else {
        "header__menu-btn"
    };

    rsx! {
        header { class: "header",
            div { class: "header__inner",
                a { class: "header__brand", href: "#hero", "{brand}" }
                nav { class: "{nav_class}",
                    for (label, target) in [
                        ("About", "#about"),
                        ("Skills", "#skills"),
                        ("Projects", "#projects"),
                        ("Contact", "#contact"),
                    ] {
                        a {
                            class: "header__link",
                            href: "{target}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
                button {
                    class: "{menu_btn_class}",
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    span { class: "header__menu-bar" }
                    span { class: "header__menu-bar" }
                    span { class: "header__menu-bar" }
                }
            }
        }
    }
}

/// Appears once the page has been scrolled past a fixed offset.
#[component]
pub fn BackToTop() -> Element {
    let metrics = use_scroll_metrics();
    let visible = metrics.offset() > BACK_TO_TOP_OFFSET_PX;

    rsx! {
        if visible {
            button {
                class: "back-to-top",
                r#type: "button",
                aria_label: "Back to top",
                onclick: move |_| {
                    let _ = document::eval(scroll_to_top_script());
                },
                "↑"
            }
        }
    }
}
