use tracing::{Level, debug, trace};

use super::{EvaluationMode, LinkContext, NetworkInvariantViolation};

pub(super) fn check_symmetry(
    ctx: LinkContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    if tracing::enabled!(Level::TRACE) {
        trace!(
            edges = ctx.links.directed_edges().count(),
            "checking link symmetry"
        );
    }
    for (origin, target) in ctx.links.directed_edges() {
        if !ctx.links.contains(target, origin) {
            debug!(origin, target, "missing backlink");
            mode.record(NetworkInvariantViolation::MissingBacklink { origin, target })?;
        }
    }
    Ok(())
}

pub(super) fn check_no_self_loops(
    ctx: LinkContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    for (origin, target) in ctx.links.directed_edges() {
        if origin == target {
            mode.record(NetworkInvariantViolation::SelfLoop { node: origin })?;
        }
    }
    Ok(())
}

pub(super) fn check_in_range(
    ctx: LinkContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    let node_count = ctx.node_count;
    for (origin, target) in ctx.links.directed_edges() {
        if origin >= node_count || target >= node_count {
            mode.record(NetworkInvariantViolation::OutOfRange {
                origin,
                target,
                node_count,
            })?;
        }
    }
    Ok(())
}
