use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TreeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gnc tree`.
pub fn handle(args: &TreeArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut inspector = ctx.inspector()?;
    let depth = args.depth.unwrap_or_else(|| inspector.max_depth());
    let tree = inspector
        .get_directory_tree(&args.path, depth)
        .with_context(|| format!("failed to read directory tree for '{}'", args.path))?;
    output(&tree, flags.format, ctx.config.general.pretty)
}
