use std::sync::Arc;

use dioxus::prelude::*;

use folio_core::model::{ContactDraft, Profile};

use crate::context::AppContext;
use crate::views::scroll_observer::RevealSection;
use crate::vm::{
    ContactIntent, ContactPhase, ContactViewError, SUBMITTED_RESET_DELAY, classify_submit_error,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ContactSection(profile: Arc<Profile>) -> Element {
    let ctx = use_context::<AppContext>();
    let contact = ctx.contact();
    let mut draft = use_signal(ContactDraft::default);
    let mut phase = use_signal(|| ContactPhase::Editing);

    let dispatch = use_callback(move |intent: ContactIntent| match intent {
        ContactIntent::Submit | ContactIntent::Retry => {
            if phase() == ContactPhase::Submitting {
                return;
            }
            let contact = contact.clone();
            spawn(async move {
                phase.set(ContactPhase::Submitting);
                let current = draft();
                match contact.submit(&current).await {
                    Ok(_receipt) => {
                        phase.set(ContactPhase::Submitted);
                        // Linger on the confirmation, then offer a fresh form.
                        tokio::time::sleep(SUBMITTED_RESET_DELAY).await;
                        draft.set(ContactDraft::default());
                        phase.set(ContactPhase::Editing);
                    }
                    Err(err) => {
                        phase.set(ContactPhase::Failed(classify_submit_error(&err)));
                    }
                }
            });
        }
        ContactIntent::Reset => {
            draft.set(ContactDraft::default());
            phase.set(ContactPhase::Editing);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ContactTestHandles>() {
                handles.register(dispatch, draft, phase);
            }
        }
    }

    let phase_now = phase();
    let submitting = phase_now == ContactPhase::Submitting;
    let failure = match phase_now {
        ContactPhase::Failed(err) => Some(err),
        _ => None,
    };
    let email = profile.contact_email().to_string();

    rsx! {
        RevealSection { id: "contact", class: "contact",
            div { class: "contact__heading",
                h2 { class: "section-title section-title--center", "Let's Build Something" }
                p { class: "contact__lede",
                    "Have a project in mind? I'm always glad to talk it through."
                }
            }
            if phase_now == ContactPhase::Submitted {
                div { class: "contact__success",
                    span { class: "contact__success-mark", aria_hidden: "true", "✓" }
                    h3 { class: "contact__success-title", "Message Sent!" }
                    p { class: "contact__success-note",
                        "Thanks for reaching out. I'll get back to you soon."
                    }
                }
            } else {
                form {
                    class: "contact__form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch.call(ContactIntent::Submit);
                    },
                    div { class: "contact__row",
                        div { class: "contact__field",
                            label { class: "contact__label", r#for: "contact-name", "Name" }
                            input {
                                class: "contact__input",
                                id: "contact-name",
                                name: "name",
                                placeholder: "Your name",
                                value: "{draft().name}",
                                oninput: move |evt| draft.write().name = evt.value(),
                            }
                        }
                        div { class: "contact__field",
                            label { class: "contact__label", r#for: "contact-email", "Email" }
                            input {
                                class: "contact__input",
                                id: "contact-email",
                                name: "email",
                                r#type: "email",
                                placeholder: "your@email.com",
                                value: "{draft().email}",
                                oninput: move |evt| draft.write().email = evt.value(),
                            }
                        }
                    }
                    div { class: "contact__field",
                        label { class: "contact__label", r#for: "contact-message", "Message" }
                        textarea {
                            class: "contact__input contact__input--area",
                            id: "contact-message",
                            name: "message",
                            rows: "6",
                            placeholder: "Tell me about your project...",
                            value: "{draft().message}",
                            oninput: move |evt| draft.write().message = evt.value(),
                        }
                    }
                    if let Some(err) = failure {
                        p { class: "contact__error", id: "contact-error", "{err.message()}" }
                    }
                    div { class: "contact__actions",
                        button {
                            class: "btn btn--primary contact__submit magnetic-btn",
                            id: "contact-submit",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting { "Sending…" } else { "Send Message" }
                        }
                        if failure.is_some_and(ContactViewError::is_retryable) {
                            button {
                                class: "btn btn--ghost",
                                id: "contact-retry",
                                r#type: "button",
                                onclick: move |_| dispatch.call(ContactIntent::Retry),
                                "Retry"
                            }
                        }
                    }
                }
            }
            p { class: "contact__direct",
                "Or reach out directly: "
                a { class: "contact__email", href: "mailto:{email}", "{email}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ContactTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ContactIntent>>>>,
    draft: Rc<RefCell<Option<Signal<ContactDraft>>>>,
    phase: Rc<RefCell<Option<Signal<ContactPhase>>>>,
}

#[cfg(test)]
impl ContactTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<ContactIntent>,
        draft: Signal<ContactDraft>,
        phase: Signal<ContactPhase>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.draft.borrow_mut() = Some(draft);
        *self.phase.borrow_mut() = Some(phase);
    }

    pub(crate) fn dispatch(&self) -> Callback<ContactIntent> {
        (*self.dispatch.borrow()).expect("contact dispatch registered")
    }

    pub(crate) fn draft(&self) -> Signal<ContactDraft> {
        (*self.draft.borrow()).expect("contact draft registered")
    }

    pub(crate) fn phase(&self) -> Signal<ContactPhase> {
        (*self.phase.borrow()).expect("contact phase registered")
    }
}
