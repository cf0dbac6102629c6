//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use gnc_core::entities::*;
use gnc_core::enums::*;
use gnc_core::validation::{ValidationErrors, ValidationReport};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn section(id: &str, parent_id: Option<&str>) -> Section {
    Section {
        id: id.into(),
        title: "Tech Stack".into(),
        content: "## Tech Stack\n- Next.js".into(),
        order: 2,
        parent_id: parent_id.map(String::from),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn tech_stack() -> TechStack {
    TechStack {
        id: "tch-00000001".into(),
        name: "Next.js".into(),
        version: "15+".into(),
        description: "React framework for production".into(),
        category: TechCategory::Framework,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn file_structure() -> FileStructure {
    FileStructure {
        id: "fil-00000003".into(),
        path: "src/components/ui/".into(),
        file_type: FileType::Directory,
        description: "Shadcn UI components (read-only)".into(),
        read_only: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn template() -> ProjectPlanTemplate {
    ProjectPlanTemplate {
        id: "tpl-00000001".into(),
        title: "Game Night Central".into(),
        description: "Project plan for the event site".into(),
        version: "1.0.0".into(),
        sections: vec![section("sec-00000001", None)],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

roundtrip_and_validate!(section_roundtrip, Section, section("sec-00000002", Some("sec-00000001")));

roundtrip_and_validate!(
    section_with_subsections_roundtrip,
    SectionWithSubsections,
    SectionWithSubsections {
        section: section("sec-00000001", None),
        subsections: vec![section("sec-00000002", Some("sec-00000001"))],
    }
);

roundtrip_and_validate!(tech_stack_roundtrip, TechStack, tech_stack());

roundtrip_and_validate!(file_structure_roundtrip, FileStructure, file_structure());

roundtrip_and_validate!(
    file_structure_node_roundtrip,
    FileStructureNode,
    FileStructureNode {
        entry: file_structure(),
        children: vec![FileStructureNode {
            entry: FileStructure {
                path: "src/components/ui/button.tsx".into(),
                file_type: FileType::File,
                ..file_structure()
            },
            children: Vec::new(),
            depth: 1,
            expanded: true,
        }],
        depth: 0,
        expanded: true,
    }
);

roundtrip_and_validate!(
    learning_strategy_roundtrip,
    LearningStrategy,
    LearningStrategy {
        id: "lrn-00000001".into(),
        goal: "Learn a new technology or concept".into(),
        steps: vec!["Check existing documentation".into(), "Write a note".into()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    knowledge_roundtrip,
    KnowledgeManagement,
    KnowledgeManagement {
        id: "knw-00000006".into(),
        practice: "Read-Only Respect".into(),
        description: "Never modify read-only directories like src/components/ui/".into(),
        category: KnowledgeCategory::Documentation,
        priority: KnowledgePriority::Critical,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    create_knowledge_entry_roundtrip,
    CreateKnowledgeEntry,
    CreateKnowledgeEntry::new("Version Control", "Commit docs").priority(KnowledgePriority::High)
);

roundtrip_and_validate!(
    database_auth_plan_roundtrip,
    DatabaseAuthPlan,
    DatabaseAuthPlan {
        id: "dap-00000001".into(),
        status: ImplementationStatus::InProgress,
        features: vec!["Session management".into()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    next_steps_roundtrip,
    NextSteps,
    NextSteps {
        id: "nxt-00000001".into(),
        step: "Load README.md and project plan on startup".into(),
        priority: NextStepsPriority::High.value(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(project_plan_template_roundtrip, ProjectPlanTemplate, template());

roundtrip_and_validate!(
    project_plan_with_relations_roundtrip,
    ProjectPlanTemplateWithRelations,
    ProjectPlanTemplateWithRelations {
        template: template(),
        tech_stack: Some(tech_stack()),
        file_structures: vec![file_structure()],
        learning_strategy: None,
        knowledge_management: None,
        database_auth_plan: None,
        next_steps: Vec::new(),
    }
);

roundtrip_and_validate!(
    validation_report_roundtrip,
    ValidationReport,
    {
        let mut errors = ValidationErrors::new();
        errors.require_text("title", "Title", "");
        ValidationReport::from(errors.into_result())
    }
);

#[test]
fn flattened_read_model_exposes_template_fields_at_top_level() {
    let composed = ProjectPlanTemplateWithRelations {
        template: template(),
        tech_stack: None,
        file_structures: Vec::new(),
        learning_strategy: None,
        knowledge_management: None,
        database_auth_plan: None,
        next_steps: Vec::new(),
    };
    let json = serde_json::to_value(&composed).unwrap();
    assert_eq!(json["title"], "Game Night Central");
    assert_eq!(json["sections"].as_array().map(Vec::len), Some(1));
    assert!(json["tech_stack"].is_null());
}
