use schemars::{Schema, schema_for};

use gnc_core::entities::{
    DatabaseAuthPlan, FileStructure, FileStructureNode, KnowledgeManagement, LearningStrategy,
    NextSteps, ProjectPlanTemplate, ProjectPlanTemplateWithRelations, Section, TechStack,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaEntity};
use crate::output::output;

/// Handle `gnc schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.entity), flags.format, true)
}

fn schema(entity: SchemaEntity) -> Schema {
    match entity {
        SchemaEntity::TechStack => schema_for!(TechStack),
        SchemaEntity::FileStructure => schema_for!(FileStructure),
        SchemaEntity::FileStructureNode => schema_for!(FileStructureNode),
        SchemaEntity::LearningStrategy => schema_for!(LearningStrategy),
        SchemaEntity::Knowledge => schema_for!(KnowledgeManagement),
        SchemaEntity::DatabaseAuthPlan => schema_for!(DatabaseAuthPlan),
        SchemaEntity::NextSteps => schema_for!(NextSteps),
        SchemaEntity::Section => schema_for!(Section),
        SchemaEntity::Template => schema_for!(ProjectPlanTemplate),
        SchemaEntity::TemplateWithRelations => schema_for!(ProjectPlanTemplateWithRelations),
    }
}
