use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkillError {
    #[error("skill name cannot be empty")]
    EmptyName,

    #[error("skill blurb cannot be empty")]
    EmptyBlurb,
}

/// One entry in the skills grid: a glyph, a name, and a one-line blurb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: String,
    icon: String,
    blurb: String,
}

impl Skill {
    /// # Errors
    ///
    /// Returns an error when the name or blurb is blank.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        blurb: impl Into<String>,
    ) -> Result<Self, SkillError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkillError::EmptyName);
        }
        let blurb = blurb.into();
        if blurb.trim().is_empty() {
            return Err(SkillError::EmptyBlurb);
        }
        Ok(Self {
            name,
            icon: icon.into(),
            blurb,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn blurb(&self) -> &str {
        &self.blurb
    }
}
