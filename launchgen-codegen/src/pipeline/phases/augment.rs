//! Augment phase - entries for custom launch groups.

use eyre::{Result, eyre};

use crate::{
    entries::{duplicate_arg_message, duplicate_args, group_entries},
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that appends one entry per script of every group declared in
/// launch.config.json, after the discovered test entries.
pub struct AugmentPhase;

impl Phase for AugmentPhase {
    fn name(&self) -> &'static str {
        "augment"
    }

    fn description(&self) -> &'static str {
        "Add entries for custom launch groups"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let runtime = ctx
            .runtime
            .ok_or_else(|| eyre!("runtime not set - AugmentPhase must run after DetectPhase"))?;

        let groups = ctx.config.groups.clone();
        for (index, group) in groups.iter().enumerate() {
            for arg in duplicate_args(runtime.run_args(), &group.runtime_args) {
                ctx.add_diagnostic(
                    Diagnostic::info(self.name(), duplicate_arg_message(arg))
                        .at(format!("groups[{}]", index)),
                );
            }

            let entries = group_entries(group, runtime, &ctx.config);
            tracing::debug!(
                program = %group.program,
                entries = entries.len(),
                "adding group"
            );
            for entry in entries {
                ctx.push_entry(self.name(), entry);
            }
        }

        tracing::info!(groups = groups.len(), "added custom groups");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use launchgen_core::Runtime;
    use launchgen_manifest::LaunchConfig;
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::{
        GenerateOptions,
        phases::{DiscoverPhase, LoadPhase},
    };

    fn context(config: &str) -> GenerationContext {
        let mut ctx = GenerationContext::new("/project", GenerateOptions::default());
        ctx.runtime = Some(Runtime::Deno);
        ctx.config = serde_json::from_str::<LaunchConfig>(config).unwrap();
        ctx
    }

    #[test]
    fn test_group_duplicate_arg_is_advisory() {
        let mut ctx = context(r#"{ "groups": [{ "program": "main.ts", "runtimeArgs": ["-A"] }] }"#);

        AugmentPhase.run(&mut ctx).unwrap();

        let info = ctx.infos().next().expect("expected an advisory");
        assert_eq!(info.location.as_deref(), Some("groups[0]"));
        assert_eq!(ctx.entries.len(), 1);
        assert_eq!(
            ctx.entries[0].runtime_args,
            ["run", "--inspect-brk", "-A", "-A"]
        );
    }

    #[test]
    fn test_group_name_collision_warns() {
        let mut ctx = context(
            r#"{ "groups": [
                { "program": "main.ts", "scripts": ["serve"] },
                { "program": "main.ts", "scripts": ["serve", "build"] }
            ] }"#,
        );

        AugmentPhase.run(&mut ctx).unwrap();

        let names: Vec<_> = ctx.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Debug main.ts serve", "Debug main.ts build"]);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_groups_follow_discovered_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("deno.json"), "{}").unwrap();
        fs::write(temp.path().join("my.test.ts"), "").unwrap();
        fs::write(
            temp.path().join("launch.config.json"),
            r#"{ "groups": [{ "program": "src/cli.ts", "scripts": ["sync"] }] }"#,
        )
        .unwrap();
        let mut ctx = GenerationContext::new(temp.path(), GenerateOptions::default());
        ctx.runtime = Some(Runtime::Deno);

        LoadPhase.run(&mut ctx).unwrap();
        DiscoverPhase.run(&mut ctx).unwrap();
        AugmentPhase.run(&mut ctx).unwrap();

        let names: Vec<_> = ctx.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Debug my.test.ts", "Debug src/cli.ts sync"]);
    }
}
