//! Filter phase - removes stale generated entries.

use eyre::Result;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that keeps only user-authored entries of the loaded launch.json.
///
/// Generated entries from the previous run are dropped wholesale; the
/// current run regenerates them, which keeps output idempotent.
pub struct FilterPhase;

impl Phase for FilterPhase {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn description(&self) -> &'static str {
        "Drop generated entries from the previous run"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        ctx.removed = ctx.spec.retain_user_entries();
        tracing::info!(
            retained = ctx.spec.configurations.len(),
            removed = ctx.removed,
            "filtered existing configurations"
        );
        for name in ctx.spec.names() {
            tracing::debug!(name, "retaining");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::pipeline::GenerateOptions;

    #[test]
    fn test_filter_keeps_user_entries_in_order() {
        let mut ctx = GenerationContext::new("/project", GenerateOptions::default());
        let user_a = json!({ "name": "Attach", "type": "node", "request": "attach" });
        let user_b = json!({ "name": "Custom", "env": { "LAUNCHGEN": "no" } });
        ctx.spec.configurations = vec![
            json!({ "name": "Debug old.test.ts", "env": { "LAUNCHGEN": "true" } }),
            user_a.clone(),
            json!({ "name": "Debug gone.test.ts", "env": { "LAUNCHGEN": "true" } }),
            user_b.clone(),
        ];

        FilterPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.spec.configurations, [user_a, user_b]);
        assert_eq!(ctx.removed, 2);
    }
}
