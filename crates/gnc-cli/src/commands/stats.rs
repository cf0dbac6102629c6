use serde::Serialize;

use gnc_store::Repositories;
use gnc_store::repos::knowledge::KnowledgeStatistics;
use gnc_store::repos::learning_strategy::LearningStrategyStatistics;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatsResponse {
    learning_strategies: LearningStrategyStatistics,
    knowledge: KnowledgeStatistics,
}

fn collect(repos: &Repositories) -> StatsResponse {
    StatsResponse {
        learning_strategies: repos.learning_strategies.learning_strategy_statistics(),
        knowledge: repos.knowledge.knowledge_statistics(),
    }
}

/// Handle `gnc stats`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&collect(&ctx.repos), flags.format, ctx.config.general.pretty)
}
