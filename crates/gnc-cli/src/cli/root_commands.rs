use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a project plan template and print it with its relations.
    Plan(PlanArgs),
    /// Search one repository.
    List(ListArgs),
    /// Report whether a path may be edited.
    Classify(ClassifyArgs),
    /// Print the directory tree under a path.
    Tree(TreeArgs),
    /// Check the project root for required directories and files.
    Check,
    /// Learning strategy and knowledge statistics.
    Stats,
    /// Dump JSON schema for an entity type.
    Schema(SchemaArgs),
}

/// Arguments for `gnc plan`.
#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// Template title.
    #[arg(long, default_value = "Game Night Central - Project Plan Template")]
    pub title: String,
    /// Template version.
    #[arg(long, default_value = "1.0.0")]
    pub version: String,
    /// Attach the fixed placeholder relations instead of the seeded repositories.
    #[arg(long)]
    pub placeholder: bool,
}

/// Repositories that `gnc list` can search.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ListEntity {
    TechStack,
    FileStructure,
    LearningStrategy,
    Knowledge,
    DatabaseAuthPlan,
    NextSteps,
}

/// Arguments for `gnc list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    pub entity: ListEntity,
    /// Page size (defaults to `store.default_limit`).
    #[arg(long)]
    pub limit: Option<usize>,
    /// Number of matches to skip.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
    /// Oldest first instead of newest first.
    #[arg(long)]
    pub asc: bool,
}

/// Arguments for `gnc classify`.
#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Path, absolute or relative to the project root. Need not exist.
    pub path: String,
}

/// Arguments for `gnc tree`.
#[derive(Clone, Debug, Args)]
pub struct TreeArgs {
    /// Directory, absolute or relative to the project root.
    #[arg(default_value = ".")]
    pub path: String,
    /// Depth limit (defaults to `inspector.max_depth`).
    #[arg(long)]
    pub depth: Option<usize>,
}

/// Types `gnc schema` can describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    TechStack,
    FileStructure,
    FileStructureNode,
    LearningStrategy,
    Knowledge,
    DatabaseAuthPlan,
    NextSteps,
    Section,
    Template,
    TemplateWithRelations,
}

/// Arguments for `gnc schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub entity: SchemaEntity,
}
