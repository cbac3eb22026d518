mod contact_vm;
mod markdown;
mod percent_fmt;
mod profile_vm;

pub use contact_vm::{
    ContactIntent, ContactPhase, ContactViewError, SUBMITTED_RESET_DELAY, classify_submit_error,
};
pub use markdown::render_markdown;
pub use percent_fmt::percent_label;
pub use profile_vm::{ProjectCardVm, SkillCardVm, map_project_cards, map_skill_cards};
