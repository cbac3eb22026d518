mod contact;
mod profile;
mod project;
mod skill;

pub use contact::{ContactDraft, ContactError, ContactMessage};
pub use profile::{Profile, ProfileError, SocialLink, StatTile};
pub use project::{Project, ProjectError};
pub use skill::{Skill, SkillError};
