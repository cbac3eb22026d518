mod about;
mod contact;
mod hero;
mod loading;
mod nav;
mod page;
mod projects;
mod scroll_observer;
mod skills;

#[cfg(test)]
mod contact_intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use loading::LoadingView;
pub use nav::{BackToTop, Header};
pub use page::PageView;
pub use projects::ProjectsSection;
pub use scroll_observer::{
    BACK_TO_TOP_OFFSET_PX, RevealSection, ScrollMetrics, ScrollProgressBar, use_scroll_metrics,
    use_scroll_observer,
};
pub use skills::SkillsSection;
