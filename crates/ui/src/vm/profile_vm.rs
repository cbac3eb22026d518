use folio_core::model::Profile;

use crate::vm::markdown::render_markdown;

/// One card in the skills grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCardVm {
    pub name: String,
    pub icon: String,
    pub blurb: String,
}

/// One card in the projects grid, with its description already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardVm {
    pub title: String,
    pub monogram: String,
    pub description_html: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[must_use]
pub fn map_skill_cards(profile: &Profile) -> Vec<SkillCardVm> {
    profile
        .skills()
        .iter()
        .map(|skill| SkillCardVm {
            name: skill.name().to_string(),
            icon: skill.icon().to_string(),
            blurb: skill.blurb().to_string(),
        })
        .collect()
}

#[must_use]
pub fn map_project_cards(profile: &Profile) -> Vec<ProjectCardVm> {
    profile
        .projects()
        .iter()
        .map(|project| ProjectCardVm {
            title: project.title().to_string(),
            monogram: project.title().chars().take(1).collect(),
            description_html: render_markdown(project.description_markdown()),
            tags: project.tags().to_vec(),
            link: project.link().map(ToString::to_string),
        })
        .collect()
}
