use anyhow::Context;

use gnc_core::entities::{CreateProjectPlanTemplate, CreateSection, ProjectPlanTemplateWithRelations};
use gnc_store::Repositories;
use gnc_store::plan::ProjectPlanService;
use gnc_store::relations::RelationSnapshot;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlanArgs;
use crate::context::AppContext;
use crate::output::output;

const DESCRIPTION: &str = "Comprehensive reference guide for the AI agent to understand the \
    project context, navigate files, manage knowledge, and execute tasks efficiently.";

/// Top-level sections of the rendered plan, in display order.
const SECTIONS: [(&str, &str); 6] = [
    ("Tech Stack", "Frameworks, libraries and tools the site is built with."),
    ("File Structure", "Where code lives and which directories are read-only."),
    ("Learning Strategy", "How to pick up an unfamiliar technology or pattern."),
    ("Knowledge Management", "Practices for keeping notes and documentation current."),
    ("Database & Auth Plan", "Persistence and authentication features and their status."),
    ("Next Steps", "Prioritised work for the next session."),
];

/// Handle `gnc plan`.
pub fn handle(args: &PlanArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let composed = build_plan(args, &ctx.repos)?;
    output(&composed, flags.format, ctx.config.general.pretty)
}

fn build_plan(args: &PlanArgs, repos: &Repositories) -> anyhow::Result<ProjectPlanTemplateWithRelations> {
    let relations = if args.placeholder {
        RelationSnapshot::default()
    } else {
        RelationSnapshot::from_repositories(repos)
    };
    let mut service = ProjectPlanService::new().with_relations(relations);

    let template = service
        .create_project_plan_template(CreateProjectPlanTemplate::new(
            args.title.as_str(),
            DESCRIPTION,
            args.version.as_str(),
        ))
        .context("failed to create project plan template")?;

    for (order, (title, content)) in (0..).zip(SECTIONS) {
        service
            .add_section(&template.id, CreateSection::new(title, content, order))
            .with_context(|| format!("failed to add section '{title}'"))?;
    }

    service
        .get_project_plan_template_with_relations(&template.id)
        .context("created template is missing")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::build_plan;
    use crate::cli::root_commands::PlanArgs;
    use gnc_store::Repositories;

    fn args(placeholder: bool) -> PlanArgs {
        PlanArgs {
            title: "Game Night Central - Project Plan Template".into(),
            version: "1.0.0".into(),
            placeholder,
        }
    }

    #[test]
    fn live_plan_uses_seeded_repositories() {
        let mut repos = Repositories::new();
        repos.initialize();
        let plan = build_plan(&args(false), &repos).expect("plan");

        assert_eq!(plan.template.sections.len(), 6);
        assert_eq!(plan.template.sections[0].title, "Tech Stack");
        assert_eq!(plan.file_structures.len(), 9);
        assert_eq!(plan.next_steps.len(), 8);
        assert!(plan.tech_stack.is_some());
    }

    #[test]
    fn placeholder_plan_ignores_repositories() {
        let plan = build_plan(&args(true), &Repositories::new()).expect("plan");
        assert_eq!(
            plan.tech_stack.map(|t| t.id),
            Some("default-tech-stack".to_string())
        );
    }

    #[test]
    fn blank_version_is_rejected() {
        let mut bad = args(true);
        bad.version = "  ".into();
        let err = build_plan(&bad, &Repositories::new()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to create project plan template"));
    }
}
