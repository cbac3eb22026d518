use std::time::Duration;

use folio_core::model::ContactError;
use services::ContactServiceError;

/// How long the confirmation panel stays before the form resets.
pub const SUBMITTED_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIntent {
    Submit,
    Retry,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Editing,
    Submitting,
    Submitted,
    Failed(ContactViewError),
}

/// User-facing failure classification for the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactViewError {
    EmptyName,
    InvalidEmail,
    EmptyMessage,
    MessageTooLong,
    Delivery,
}

impl ContactViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ContactViewError::EmptyName => "Please tell me your name.",
            ContactViewError::InvalidEmail => "That email address doesn't look right.",
            ContactViewError::EmptyMessage => "Please write a short message.",
            ContactViewError::MessageTooLong => "That message is a little too long.",
            ContactViewError::Delivery => "Sending failed. Please try again.",
        }
    }

    /// Whether resubmitting the same draft can help.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, ContactViewError::Delivery)
    }
}

#[must_use]
pub fn classify_submit_error(err: &ContactServiceError) -> ContactViewError {
    match err {
        ContactServiceError::Invalid(ContactError::EmptyName) => ContactViewError::EmptyName,
        ContactServiceError::Invalid(ContactError::InvalidEmail) => ContactViewError::InvalidEmail,
        ContactServiceError::Invalid(ContactError::EmptyMessage) => ContactViewError::EmptyMessage,
        ContactServiceError::Invalid(ContactError::MessageTooLong) => {
            ContactViewError::MessageTooLong
        }
        _ => ContactViewError::Delivery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::ContactGatewayError;

    #[test]
    fn validation_errors_map_to_their_field_messages() {
        let err = ContactServiceError::Invalid(ContactError::InvalidEmail);
        assert_eq!(classify_submit_error(&err), ContactViewError::InvalidEmail);
        assert!(!classify_submit_error(&err).is_retryable());
    }

    #[test]
    fn gateway_errors_are_retryable_deliveries() {
        let err = ContactServiceError::Gateway(ContactGatewayError::InvalidEndpoint {
            raw: "nope".to_string(),
        });
        let classified = classify_submit_error(&err);
        assert_eq!(classified, ContactViewError::Delivery);
        assert!(classified.is_retryable());
    }
}
