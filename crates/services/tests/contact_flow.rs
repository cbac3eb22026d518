use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use folio_core::model::{ContactDraft, ContactError, ContactMessage};
use folio_core::time::{fixed_clock, fixed_now};
use services::{
    ContactGateway, ContactGatewayError, ContactService, ContactServiceError, HttpGateway,
    SimulatedGateway,
};

fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Let's build something.".to_string(),
    }
}

#[derive(Default)]
struct CountingGateway {
    delivered: AtomicU32,
}

#[async_trait]
impl ContactGateway for CountingGateway {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactGatewayError> {
        assert_eq!(message.name(), "Ada");
        self.delivered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct RejectingGateway;

#[async_trait]
impl ContactGateway for RejectingGateway {
    async fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactGatewayError> {
        Err(ContactGatewayError::HttpStatus(
            reqwest::StatusCode::BAD_GATEWAY,
        ))
    }
}

#[tokio::test]
async fn simulated_submission_succeeds_with_a_receipt() {
    let gateway = Arc::new(SimulatedGateway::with_delay(Duration::ZERO));
    let service = ContactService::new(fixed_clock(), gateway);

    let receipt = service.submit(&valid_draft()).await.expect("submit");
    assert_eq!(receipt.accepted_at(), fixed_now());
}

#[tokio::test]
async fn validation_fails_before_any_delivery() {
    let gateway = Arc::new(CountingGateway::default());
    let service = ContactService::new(fixed_clock(), Arc::clone(&gateway) as _);

    let mut draft = valid_draft();
    draft.email = "not-an-email".to_string();

    let err = service.submit(&draft).await.unwrap_err();
    assert!(matches!(
        err,
        ContactServiceError::Invalid(ContactError::InvalidEmail)
    ));
    assert_eq!(gateway.delivered.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn gateway_failure_surfaces_and_a_retry_can_succeed() {
    let failing = ContactService::new(fixed_clock(), Arc::new(RejectingGateway));
    let err = failing.submit(&valid_draft()).await.unwrap_err();
    assert!(matches!(
        err,
        ContactServiceError::Gateway(ContactGatewayError::HttpStatus(status))
            if status == reqwest::StatusCode::BAD_GATEWAY
    ));

    // The draft is untouched by a failed submit; retrying it works.
    let gateway = Arc::new(CountingGateway::default());
    let retrying = ContactService::new(fixed_clock(), Arc::clone(&gateway) as _);
    retrying.submit(&valid_draft()).await.expect("retry");
    assert_eq!(gateway.delivered.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn each_submit_delivers_exactly_once() {
    let gateway = Arc::new(CountingGateway::default());
    let service = ContactService::new(fixed_clock(), Arc::clone(&gateway) as _);

    service.submit(&valid_draft()).await.expect("first");
    service.submit(&valid_draft()).await.expect("second");
    assert_eq!(gateway.delivered.load(Ordering::SeqCst), 2);
}

#[test]
fn http_gateway_rejects_non_http_endpoints() {
    assert!(HttpGateway::new("https://example.com/contact").is_ok());
    assert!(matches!(
        HttpGateway::new("ftp://example.com/contact"),
        Err(ContactGatewayError::InvalidEndpoint { .. })
    ));
    assert!(matches!(
        HttpGateway::new("not a url"),
        Err(ContactGatewayError::InvalidEndpoint { .. })
    ));
}
