use thiserror::Error;
use url::Url;

use crate::model::project::Project;
use crate::model::skill::Skill;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("headline cannot be empty")]
    EmptyHeadline,

    #[error("contact email is not valid")]
    InvalidContactEmail,

    #[error("stat tile fields cannot be empty")]
    EmptyStat,

    #[error("social link label cannot be empty")]
    EmptySocialLabel,

    #[error("social link URL is not valid")]
    InvalidSocialUrl(#[from] url::ParseError),
}

/// A small figure-plus-caption tile shown in the about section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    figure: String,
    caption: String,
}

impl StatTile {
    /// # Errors
    ///
    /// Returns an error when either field is blank.
    pub fn new(figure: impl Into<String>, caption: impl Into<String>) -> Result<Self, ProfileError> {
        let figure = figure.into();
        let caption = caption.into();
        if figure.trim().is_empty() || caption.trim().is_empty() {
            return Err(ProfileError::EmptyStat);
        }
        Ok(Self { figure, caption })
    }

    #[must_use]
    pub fn figure(&self) -> &str {
        &self.figure
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// A footer link to an external profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    label: String,
    url: Url,
}

impl SocialLink {
    /// # Errors
    ///
    /// Returns an error for a blank label or an unparsable URL.
    pub fn new(label: impl Into<String>, url: &str) -> Result<Self, ProfileError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ProfileError::EmptySocialLabel);
        }
        Ok(Self {
            label,
            url: Url::parse(url)?,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Everything the page renders: copy, skills, projects, and links.
///
/// Built once at startup by the profile service and shared immutably with
/// the UI; nothing here changes while the window is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    headline: String,
    headline_accent: String,
    tagline: String,
    intro: String,
    about_markdown: String,
    contact_email: String,
    stats: Vec<StatTile>,
    skills: Vec<Skill>,
    projects: Vec<Project>,
    socials: Vec<SocialLink>,
}

impl Profile {
    /// # Errors
    ///
    /// Returns an error for a blank headline or an implausible contact email.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        headline: impl Into<String>,
        headline_accent: impl Into<String>,
        tagline: impl Into<String>,
        intro: impl Into<String>,
        about_markdown: impl Into<String>,
        contact_email: impl Into<String>,
        stats: Vec<StatTile>,
        skills: Vec<Skill>,
        projects: Vec<Project>,
        socials: Vec<SocialLink>,
    ) -> Result<Self, ProfileError> {
        let headline = headline.into();
        if headline.trim().is_empty() {
            return Err(ProfileError::EmptyHeadline);
        }
        let contact_email = contact_email.into();
        if !contact_email.contains('@') {
            return Err(ProfileError::InvalidContactEmail);
        }
        Ok(Self {
            name: name.into(),
            headline,
            headline_accent: headline_accent.into(),
            tagline: tagline.into(),
            intro: intro.into(),
            about_markdown: about_markdown.into(),
            contact_email,
            stats,
            skills,
            projects,
            socials,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }

    #[must_use]
    pub fn headline_accent(&self) -> &str {
        &self.headline_accent
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn intro(&self) -> &str {
        &self.intro
    }

    #[must_use]
    pub fn about_markdown(&self) -> &str {
        &self.about_markdown
    }

    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    #[must_use]
    pub fn stats(&self) -> &[StatTile] {
        &self.stats
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn socials(&self) -> &[SocialLink] {
        &self.socials
    }
}
