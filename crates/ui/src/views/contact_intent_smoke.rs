use std::sync::Arc;

use async_trait::async_trait;

use dioxus::prelude::WritableExt;

use folio_core::model::{ContactDraft, ContactMessage};
use services::{ContactGateway, ContactGatewayError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_gateway};
use crate::vm::{ContactIntent, ContactPhase, ContactViewError};

struct FailingGateway;

#[async_trait]
impl ContactGateway for FailingGateway {
    async fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactGatewayError> {
        Err(ContactGatewayError::InvalidEndpoint {
            raw: "unreachable".to_string(),
        })
    }
}

fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Let's build something.".to_string(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn submitting_a_valid_draft_shows_the_confirmation() {
    let mut harness = setup_view_harness(ViewKind::Contact);
    harness.rebuild();
    let handles = harness.contact_handles.clone().expect("contact handles");

    let mut draft = handles.draft();
    draft.set(valid_draft());
    handles.dispatch().call(ContactIntent::Submit);

    for _ in 0..5 {
        harness.drive_async().await;
        if handles.phase()() == ContactPhase::Submitted {
            break;
        }
    }

    assert_eq!(handles.phase()(), ContactPhase::Submitted);
    let html = harness.render();
    assert!(html.contains("Message Sent!"), "missing confirmation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn a_failing_gateway_offers_a_retry() {
    let mut harness =
        setup_view_harness_with_gateway(ViewKind::Contact, Arc::new(FailingGateway));
    harness.rebuild();
    let handles = harness.contact_handles.clone().expect("contact handles");

    let mut draft = handles.draft();
    draft.set(valid_draft());
    handles.dispatch().call(ContactIntent::Submit);

    for _ in 0..5 {
        harness.drive_async().await;
        if matches!(handles.phase()(), ContactPhase::Failed(_)) {
            break;
        }
    }

    assert_eq!(
        handles.phase()(),
        ContactPhase::Failed(ContactViewError::Delivery)
    );
    let html = harness.render();
    assert!(html.contains("Sending failed"), "missing error copy in {html}");
    assert!(html.contains("Retry"), "missing retry affordance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn validation_failures_never_reach_the_gateway() {
    let mut harness = setup_view_harness(ViewKind::Contact);
    harness.rebuild();
    let handles = harness.contact_handles.clone().expect("contact handles");

    let mut draft = handles.draft();
    draft.set(ContactDraft {
        name: String::new(),
        email: "ada@example.com".to_string(),
        message: "Hi".to_string(),
    });
    handles.dispatch().call(ContactIntent::Submit);

    for _ in 0..5 {
        harness.drive_async().await;
        if matches!(handles.phase()(), ContactPhase::Failed(_)) {
            break;
        }
    }

    assert_eq!(
        handles.phase()(),
        ContactPhase::Failed(ContactViewError::EmptyName)
    );
    let html = harness.render();
    assert!(html.contains("Please tell me your name."), "missing field message in {html}");
    // Field errors are fixed by editing, not by resubmitting the same draft.
    assert!(!html.contains("contact-retry"), "retry offered for a field error in {html}");
}
