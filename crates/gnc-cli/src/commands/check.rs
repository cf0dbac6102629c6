use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gnc check`.
///
/// Prints the report either way; an invalid structure is not an error.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.inspector()?.validate_project_structure();
    if !report.is_valid {
        tracing::warn!(issues = report.issues.len(), "project structure has issues");
    }
    output(&report, flags.format, ctx.config.general.pretty)
}
