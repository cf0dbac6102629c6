use serde::Serialize;

use gnc_inspect::ReadOnlyStatus;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Classification<'a> {
    path: &'a str,
    #[serde(flatten)]
    status: ReadOnlyStatus,
}

/// Handle `gnc classify`.
pub fn handle(args: &ClassifyArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let inspector = ctx.inspector()?;
    let response = Classification {
        path: &args.path,
        status: inspector.validate_read_only_status(&args.path),
    };
    output(&response, flags.format, ctx.config.general.pretty)
}
