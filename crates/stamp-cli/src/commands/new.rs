//! Implementation of the `stamp new` command.
//!
//! Responsibility: validate the project name, wire the adapters into a
//! `ProjectGenerator`, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use stamp_adapters::{HandlebarsRenderer, LocalFilesystem, resolve_tree};
use stamp_core::{
    application::ProjectGenerator,
    domain::{GenerationPlan, PlannedEntry, ProjectName},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stamp new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Resolve template source and output directory (flags, then config)
/// 3. Early-exit with a listing if `--dry-run`
/// 4. Generate via `ProjectGenerator`
/// 5. Print the confirmation line and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate
    let name = ProjectName::parse(&args.name).map_err(|e| CliError::invalid_name(&args.name, e))?;

    // 2. Resolve settings
    let settings = Settings::resolve(&args, &config);
    debug!(
        template_dir = ?settings.template_dir,
        output_dir = %settings.output_dir.display(),
        "Settings resolved"
    );

    let tree = resolve_tree(settings.template_dir.as_deref())?;
    let generator = ProjectGenerator::new(
        tree,
        Box::new(LocalFilesystem::new()),
        Box::new(HandlebarsRenderer::new()),
    )
    .with_output_dir(&settings.output_dir);

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = generator.plan(&name)?;
        output.header(&format!(
            "Dry run: would create '{}' at {}",
            name,
            plan.root().display()
        ))?;
        for line in plan_lines(&plan) {
            output.print(&line)?;
        }
        return Ok(());
    }

    // 4. Generate
    let project_path = settings.output_dir.join(name.as_str());
    if project_path.exists() {
        output.warning(&format!(
            "'{}' already exists; files from the template will be overwritten",
            project_path.display()
        ))?;
    }

    info!(project = %name, path = %project_path.display(), "Generation started");
    let report = generator.generate(&name)?;
    info!(
        project = %name,
        directories = report.directories_created,
        files = report.files_written,
        "Generation completed"
    );

    // 5. Success + next steps
    output.success(&format!("Project created: {name}"))?;

    if global.verbose > 0 {
        output.print(&format!(
            "  {} directories, {} files under {}",
            report.directories_created,
            report.files_written,
            report.root.display()
        ))?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.root.display()))?;
    output.print("  make run")?;

    Ok(())
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Values taken from flags first, then from config.
#[derive(Debug, PartialEq)]
struct Settings {
    template_dir: Option<PathBuf>,
    output_dir: PathBuf,
}

impl Settings {
    fn resolve(args: &NewArgs, config: &AppConfig) -> Self {
        Self {
            template_dir: args
                .template_dir
                .clone()
                .or_else(|| config.templates.dir.clone()),
            output_dir: args
                .output
                .clone()
                .or_else(|| config.generate.output_dir.clone())
                .unwrap_or_default(),
        }
    }
}

// ── Dry-run listing ───────────────────────────────────────────────────────────

fn plan_lines(plan: &GenerationPlan) -> Vec<String> {
    let mut lines: Vec<String> = plan
        .entries()
        .iter()
        .map(|entry| match entry {
            PlannedEntry::Directory { output } => format!("  {}/", output.display()),
            PlannedEntry::File {
                output, templated, ..
            } if *templated => format!("  {}  (from .tmpl)", output.display()),
            PlannedEntry::File { output, .. } => format!("  {}", output.display()),
        })
        .collect();

    lines.push(format!(
        "{} directories, {} files",
        plan.directories().count(),
        plan.files().count()
    ));
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_core::domain::RelativePath;
    use std::path::Path;

    fn args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            output: None,
            template_dir: None,
            dry_run: false,
        }
    }

    #[test]
    fn settings_default_to_bundle_and_cwd() {
        let settings = Settings::resolve(&args("svc"), &AppConfig::default());
        assert_eq!(settings.template_dir, None);
        assert_eq!(settings.output_dir, PathBuf::new());
    }

    #[test]
    fn config_fills_unset_flags() {
        let mut config = AppConfig::default();
        config.templates.dir = Some(PathBuf::from("skeleton"));
        config.generate.output_dir = Some(PathBuf::from("projects"));

        let settings = Settings::resolve(&args("svc"), &config);
        assert_eq!(settings.template_dir, Some(PathBuf::from("skeleton")));
        assert_eq!(settings.output_dir, PathBuf::from("projects"));
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.templates.dir = Some(PathBuf::from("skeleton"));
        config.generate.output_dir = Some(PathBuf::from("projects"));

        let mut new_args = args("svc");
        new_args.template_dir = Some(PathBuf::from("other"));
        new_args.output = Some(PathBuf::from("elsewhere"));

        let settings = Settings::resolve(&new_args, &config);
        assert_eq!(settings.template_dir, Some(PathBuf::from("other")));
        assert_eq!(settings.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn empty_name_is_rejected_before_generation() {
        let err = ProjectName::parse("").map_err(|e| CliError::invalid_name("", e));
        assert_eq!(err.unwrap_err().exit_code(), 2);
    }

    #[test]
    fn plan_lines_mark_templated_files() {
        let mut plan = GenerationPlan::new("svc");
        plan.push(PlannedEntry::Directory {
            output: PathBuf::from("svc/pkg"),
        });
        plan.push(PlannedEntry::File {
            source: RelativePath::try_new("template/pkg/main.go.tmpl").unwrap(),
            output: PathBuf::from("svc/pkg/main.go"),
            templated: true,
        });
        plan.push(PlannedEntry::File {
            source: RelativePath::try_new("template/Makefile").unwrap(),
            output: PathBuf::from("svc/Makefile"),
            templated: false,
        });

        let lines = plan_lines(&plan);
        assert_eq!(lines[0], format!("  {}/", Path::new("svc/pkg").display()));
        assert!(lines[1].ends_with("(from .tmpl)"));
        assert!(!lines[2].contains(".tmpl"));
        assert_eq!(lines.last().unwrap(), "1 directories, 2 files");
    }
}
