use gnc_core::search::{SearchOptions, SortDirection};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ListArgs, ListEntity};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gnc list`.
pub fn handle(args: &ListArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.store.default_limit);
    let pretty = ctx.config.general.pretty;
    let repos = &ctx.repos;

    match args.entity {
        ListEntity::TechStack => output(
            &repos.tech_stack.search_tech_stack(&options(args, limit)),
            flags.format,
            pretty,
        ),
        ListEntity::FileStructure => output(
            &repos.file_structures.search_file_structures(&options(args, limit)),
            flags.format,
            pretty,
        ),
        ListEntity::LearningStrategy => output(
            &repos
                .learning_strategies
                .search_learning_strategies(&options(args, limit)),
            flags.format,
            pretty,
        ),
        ListEntity::Knowledge => output(
            &repos.knowledge.search_knowledge_entries(&options(args, limit)),
            flags.format,
            pretty,
        ),
        ListEntity::DatabaseAuthPlan => output(
            &repos
                .database_auth_plans
                .search_database_auth_plans(&options(args, limit)),
            flags.format,
            pretty,
        ),
        ListEntity::NextSteps => output(
            &repos.next_steps.search_next_steps(&options(args, limit)),
            flags.format,
            pretty,
        ),
    }
}

/// Unfiltered search on the repository's default sort field.
fn options<F: Default, S: Default>(args: &ListArgs, limit: usize) -> SearchOptions<F, S> {
    let direction = if args.asc {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    SearchOptions::new()
        .order_by(S::default(), direction)
        .limit(limit)
        .offset(args.offset)
}
