use crate::core::{
    command_init::DecorationContext,
    decorator::decorate,
    error::{GitDecoratorError, Result},
    output::{print_decoration_lines, print_error, DecorationLine},
};

/// Decorate each path (the repository root when none are given) and print one line per path.
///
/// A path that fails is reported on its own and the others are still
/// decorated; the command then fails with the number of failed paths.
pub fn execute_decorate(paths: Vec<String>, json: bool) -> Result<()> {
    let context = DecorationContext::initialize()?;
    let paths = if paths.is_empty() {
        vec![".".to_string()]
    } else {
        paths
    };

    let mut lines = Vec::with_capacity(paths.len());
    let mut failed = 0;

    for argument in &paths {
        match decorate_argument(&context, argument) {
            Ok(line) => lines.push(line),
            Err(e) => {
                log::debug!("Decoration of '{argument}' failed: {e}");
                print_error(&format!("{argument}: {e}"));
                failed += 1;
            }
        }
    }

    print_decoration_lines(&lines, json)?;

    if failed > 0 {
        return Err(GitDecoratorError::DecorationFailed { failed });
    }
    Ok(())
}

fn decorate_argument(context: &DecorationContext, argument: &str) -> Result<DecorationLine> {
    let resource = context.resolve_resource(argument)?;
    let decoration = decorate(
        &context.state.snapshot,
        context.state.leaves.as_ref(),
        &resource,
    )?;
    Ok(context.decoration_line(decoration))
}
