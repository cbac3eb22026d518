use std::sync::Arc;

use folio_core::model::Profile;
use services::{Clock, ContactService};

/// UI-facing application surface, implemented by the composition root.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn profile(&self) -> Arc<Profile>;
    fn contact(&self) -> Arc<ContactService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    profile: Arc<Profile>,
    contact: Arc<ContactService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            profile: app.profile(),
            contact: app.contact(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn profile(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn contact(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
