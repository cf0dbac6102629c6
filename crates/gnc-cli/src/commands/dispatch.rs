use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Plan(args) => commands::plan::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Classify(args) => commands::classify::handle(&args, ctx, flags),
        Commands::Tree(args) => commands::tree::handle(&args, ctx, flags),
        Commands::Check => commands::check::handle(ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
