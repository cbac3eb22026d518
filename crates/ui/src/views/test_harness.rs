use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use folio_core::model::Profile;
use folio_core::time::fixed_clock;
use services::{Clock, ContactGateway, ContactService, ProfileService, SimulatedGateway};

use crate::context::{UiApp, build_app_context};
use crate::views::contact::ContactTestHandles;
use crate::views::scroll_observer::use_scroll_observer;
use crate::views::{ContactSection, LoadingView, PageView};

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    profile: Arc<Profile>,
    contact: Arc<ContactService>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn profile(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }

    fn contact(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    Page,
    Contact,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    contact_handles: Option<ContactTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    // Standalone sections still expect scroll metrics in context.
    let _metrics = use_scroll_observer();
    if let Some(handles) = props.contact_handles.clone() {
        use_context_provider(|| handles);
    }
    let profile = props.app.profile();
    match props.view {
        ViewKind::Loading => rsx! { LoadingView { on_complete: move |()| {} } },
        ViewKind::Page => rsx! { PageView {} },
        ViewKind::Contact => rsx! { ContactSection { profile } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub contact_handles: Option<ContactTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_gateway(view, Arc::new(SimulatedGateway::with_delay(Duration::ZERO)))
}

pub fn setup_view_harness_with_gateway(
    view: ViewKind,
    gateway: Arc<dyn ContactGateway>,
) -> ViewHarness {
    let clock = fixed_clock();
    let profile = Arc::new(ProfileService.load_default().expect("default profile"));
    let contact = Arc::new(ContactService::new(clock, gateway));
    let contact_handles = matches!(view, ViewKind::Contact).then(ContactTestHandles::default);

    let app = Arc::new(TestApp {
        clock,
        profile,
        contact,
    });

    let dom = VirtualDom::new_with_props(
        ViewRoot,
        ViewHarnessProps {
            app,
            view,
            contact_handles: contact_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        contact_handles,
    }
}
