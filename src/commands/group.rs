use crate::core::{
    command_init::DecorationContext,
    decorator::{aggregate, decorate},
    error::{GitDecoratorError, Result},
    output::print_decoration_lines,
};

/// Decorate `paths` as one named collection: a line per member, then the aggregate line.
///
/// Each member is classified once; the aggregate reduces those same results.
pub fn execute_group(name: String, paths: Vec<String>, json: bool) -> Result<()> {
    if paths.is_empty() {
        return Err(GitDecoratorError::empty_grouping(name));
    }

    let context = DecorationContext::initialize()?;
    let snapshot = &context.state.snapshot;
    let leaves = context.state.leaves.as_ref();

    let mut members = Vec::with_capacity(paths.len());
    let mut lines = Vec::with_capacity(paths.len() + 1);

    for argument in &paths {
        let resource = context.resolve_resource(argument)?;
        let decoration = decorate(snapshot, leaves, &resource)?;
        members.push(decoration.classification);
        lines.push(context.decoration_line(decoration));
    }

    lines.push(context.decoration_line(aggregate(&name, &members)?));

    print_decoration_lines(&lines, json)
}
