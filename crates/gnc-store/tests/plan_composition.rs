//! Project plan composition tests
//!
//! - Relations are the same for every template (placeholder snapshot)
//! - Live relation snapshots from seeded repositories
//! - Deleting a template leaves its sections behind

use gnc_core::entities::{CreateProjectPlanTemplate, CreateSection};
use gnc_store::Repositories;
use gnc_store::plan::ProjectPlanService;
use gnc_store::relations::RelationSnapshot;
use pretty_assertions::assert_eq;

fn two_templates(service: &mut ProjectPlanService) -> (String, String) {
    let a = service
        .create_project_plan_template(CreateProjectPlanTemplate::new("Plan A", "First", "1.0.0"))
        .unwrap();
    let b = service
        .create_project_plan_template(CreateProjectPlanTemplate::new("Plan B", "Second", "2.0.0"))
        .unwrap();
    (a.id, b.id)
}

// Relations are not resolved per template. If this starts failing, the
// composition has been changed to look relations up by template and this
// test should be replaced, not patched.
#[test]
fn distinct_templates_share_identical_relations() {
    let mut service = ProjectPlanService::new();
    let (a, b) = two_templates(&mut service);

    let a = service.get_project_plan_template_with_relations(&a).unwrap();
    let b = service.get_project_plan_template_with_relations(&b).unwrap();

    assert_ne!(a.template.id, b.template.id);
    assert_eq!(a.tech_stack, b.tech_stack);
    assert_eq!(a.learning_strategy, b.learning_strategy);
    assert_eq!(a.database_auth_plan, b.database_auth_plan);
    assert_eq!(a.tech_stack.map(|t| t.id), Some("default-tech-stack".to_string()));
}

#[test]
fn live_snapshot_is_also_template_independent() {
    let mut repos = Repositories::new();
    repos.initialize();
    let mut service =
        ProjectPlanService::new().with_relations(RelationSnapshot::from_repositories(&repos));
    let (a, b) = two_templates(&mut service);

    let a = service.get_project_plan_template_with_relations(&a).unwrap();
    let b = service.get_project_plan_template_with_relations(&b).unwrap();
    assert_eq!(a.tech_stack, b.tech_stack);
    assert_eq!(a.file_structures.len(), 9);
    assert_eq!(a.next_steps, b.next_steps);
    assert_eq!(
        a.tech_stack.map(|t| t.id),
        repos.tech_stack.list_tech_stack().first().map(|t| t.id.clone())
    );
}

#[test]
fn composed_template_reflects_added_sections() {
    let mut service = ProjectPlanService::new();
    let (a, _) = two_templates(&mut service);
    service
        .add_section(&a, CreateSection::new("Overview", "# Game Night Central", 0))
        .unwrap();

    let composed = service.get_project_plan_template_with_relations(&a).unwrap();
    assert_eq!(composed.template.sections.len(), 1);
    assert!(composed.template.updated_at >= composed.template.created_at);
}

#[test]
fn deleting_template_orphans_sections() {
    let mut service = ProjectPlanService::new();
    let (a, _) = two_templates(&mut service);
    let section = service
        .add_section(&a, CreateSection::new("Overview", "text", 0))
        .unwrap();

    assert!(service.delete_project_plan_template(&a));
    assert!(service.get_project_plan_template_with_relations(&a).is_none());
    assert!(service.section_tree(&a).is_none());
    assert_eq!(service.get_section(&section.id), Some(section));
}
