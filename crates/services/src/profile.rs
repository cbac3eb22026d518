use folio_core::model::{Profile, Project, Skill, SocialLink, StatTile};

use crate::error::ProfileServiceError;

/// Assembles the portfolio's content model.
///
/// Content is compiled in rather than loaded from disk; the site has no
/// persistence layer and the copy changes with the code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileService;

impl ProfileService {
    /// Build the default profile.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in entry fails model validation,
    /// which would be a bug in the content below.
    pub fn load_default(&self) -> Result<Profile, ProfileServiceError> {
        let stats = vec![
            StatTile::new("6+", "Years shipping interfaces")?,
            StatTile::new("40+", "Projects delivered")?,
            StatTile::new("12", "Open-source contributions")?,
            StatTile::new("3", "Conference talks")?,
        ];

        let skills = vec![
            Skill::new(
                "Interface Engineering",
                "◳",
                "Component-driven interfaces with careful state ownership",
            )?,
            Skill::new(
                "Motion Design",
                "✦",
                "Purposeful transitions, easing, and scroll choreography",
            )?,
            Skill::new(
                "Design Systems",
                "▤",
                "Tokens, primitives, and theming that scale across products",
            )?,
            Skill::new(
                "Accessibility",
                "◎",
                "Keyboard-first flows and assistive-tech friendly markup",
            )?,
            Skill::new(
                "Performance",
                "↯",
                "Fast first paint and animations that hold a steady frame rate",
            )?,
            Skill::new(
                "Tooling",
                "⚙",
                "Build pipelines and test harnesses teams actually keep using",
            )?,
            Skill::new(
                "Prototyping",
                "✎",
                "Quick, honest prototypes that answer real product questions",
            )?,
            Skill::new(
                "Responsive Layout",
                "▥",
                "Small screens first, with layouts that earn their breakpoints",
            )?,
        ];

        let projects = vec![
            Project::new(
                "Weather Deck",
                "A live weather board with animated radar layers and *hour-by-hour* forecasts.",
                vec!["UI".into(), "Realtime".into(), "Maps".into()],
                Some("https://example.com/weather-deck"),
            )?,
            Project::new(
                "Gradient Workbench",
                "A generator for gradients, glass effects, and shadows with copy-ready output.",
                vec!["Tooling".into(), "Design".into()],
                Some("https://example.com/gradient-workbench"),
            )?,
            Project::new(
                "Ops Dashboard",
                "An operations dashboard with streaming updates and *interactive* charts.",
                vec!["Dashboards".into(), "Streaming".into()],
                Some("https://example.com/ops-dashboard"),
            )?,
            Project::new(
                "Storefront",
                "A storefront with smooth checkout flows and careful loading states.",
                vec!["Commerce".into(), "UX".into()],
                None,
            )?,
        ];

        let socials = vec![
            SocialLink::new("GitHub", "https://github.com/example")?,
            SocialLink::new("Mastodon", "https://hachyderm.io/@example")?,
        ];

        let profile = Profile::new(
            "Folio",
            "Crafting Digital",
            "Experiences",
            "Interface engineer & motion enthusiast",
            "I turn ideas into fast, accessible interfaces with deliberate \
             motion and pixel-level care.",
            "I'm an interface engineer with a soft spot for typography and \
             honest motion. My work pairs clean architecture with animation \
             that explains, never decorates.\n\n\
             Away from the editor I contribute to open source, sketch \
             interaction ideas, and write about building calmer software.",
            "hello@example.com",
            stats,
            skills,
            projects,
            socials,
        )?;
        Ok(profile)
    }
}
