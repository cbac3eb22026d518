use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectError {
    #[error("project title cannot be empty")]
    EmptyTitle,

    #[error("project description cannot be empty")]
    EmptyDescription,

    #[error("project link is not a valid URL")]
    InvalidLink(#[from] url::ParseError),
}

/// A featured project card: copy, tag chips, and an optional external link.
///
/// The description is markdown; rendering and sanitization happen in the UI
/// layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    title: String,
    description_markdown: String,
    tags: Vec<String>,
    link: Option<Url>,
}

impl Project {
    /// # Errors
    ///
    /// Returns an error for a blank title/description or an unparsable link.
    pub fn new(
        title: impl Into<String>,
        description_markdown: impl Into<String>,
        tags: Vec<String>,
        link: Option<&str>,
    ) -> Result<Self, ProjectError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ProjectError::EmptyTitle);
        }
        let description_markdown = description_markdown.into();
        if description_markdown.trim().is_empty() {
            return Err(ProjectError::EmptyDescription);
        }
        let link = link.map(Url::parse).transpose()?;
        Ok(Self {
            title,
            description_markdown,
            tags,
            link,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description_markdown(&self) -> &str {
        &self.description_markdown
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn link(&self) -> Option<&Url> {
        self.link.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_parsed_and_optional() {
        let linked = Project::new(
            "Weather",
            "A live weather board.",
            vec!["ui".into()],
            Some("https://example.com/weather"),
        )
        .unwrap();
        assert_eq!(linked.link().unwrap().host_str(), Some("example.com"));

        let unlinked = Project::new("Weather", "A live weather board.", vec![], None).unwrap();
        assert!(unlinked.link().is_none());
    }

    #[test]
    fn bad_input_is_rejected() {
        assert_eq!(
            Project::new(" ", "desc", vec![], None).unwrap_err(),
            ProjectError::EmptyTitle
        );
        assert_eq!(
            Project::new("T", "  ", vec![], None).unwrap_err(),
            ProjectError::EmptyDescription
        );
        assert!(matches!(
            Project::new("T", "desc", vec![], Some("not a url")).unwrap_err(),
            ProjectError::InvalidLink(_)
        ));
    }
}
