//! Project Generator - main application orchestrator.
//!
//! This service runs the whole generation workflow:
//! 1. Walk the template tree (root first, directories before children)
//! 2. Create the project directory, then map each entry to its output path
//! 3. Create directories, render and write files
//! 4. Remove the leftover `<project>/<tree root>` directory
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//! Execution is strictly sequential. Any error aborts the run and nothing
//! already written is rolled back.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateTree},
    },
    domain::{
        GenerationPlan, OutputMapping, PlannedEntry, ProjectName, RelativePath, TemplateData,
    },
    error::StampResult,
};

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub directories_created: usize,
    pub files_written: usize,
}

/// Generates a project from a template tree.
pub struct ProjectGenerator {
    tree: Box<dyn TemplateTree>,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    output_dir: PathBuf,
}

impl ProjectGenerator {
    /// Create a generator with the given adapters.
    ///
    /// Projects are created relative to the current working directory
    /// unless [`ProjectGenerator::with_output_dir`] says otherwise.
    pub fn new(
        tree: Box<dyn TemplateTree>,
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            tree,
            filesystem,
            renderer,
            output_dir: PathBuf::new(),
        }
    }

    /// Create projects inside `dir` instead of the current directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Generate the project `name`.
    ///
    /// The caller guarantees `name` is non-empty (the `ProjectName` type does).
    #[instrument(skip_all, fields(project = %name))]
    pub fn generate(&self, name: &ProjectName) -> StampResult<GenerationReport> {
        let mapping = self.mapping(name);
        let data = TemplateData::new(name);

        info!(root = %mapping.project_root().display(), "Generating project");

        let mut report = GenerationReport {
            root: mapping.project_root().to_path_buf(),
            directories_created: 0,
            files_written: 0,
        };

        let entries = self.tree.walk()?;

        // The tree root maps to the project directory itself.
        self.filesystem.create_dir_all(mapping.project_root())?;

        for entry in entries {
            let Some(planned) = mapping.map(&entry)? else {
                continue;
            };

            match planned {
                PlannedEntry::Directory { output } => {
                    debug!(path = %output.display(), "Creating directory");
                    self.filesystem.create_dir_all(&output)?;
                    report.directories_created += 1;
                }
                PlannedEntry::File {
                    source,
                    output,
                    templated,
                } => {
                    debug!(source = %source, path = %output.display(), "Writing file");
                    self.write_file(&source, &output, templated, &data)?;
                    report.files_written += 1;
                }
            }
        }

        self.remove_artifact_dir(&mapping.artifact_dir())?;

        info!(
            directories = report.directories_created,
            files = report.files_written,
            "Project generated"
        );
        Ok(report)
    }

    /// Compute every output path without reading content or writing anything.
    #[instrument(skip_all, fields(project = %name))]
    pub fn plan(&self, name: &ProjectName) -> StampResult<GenerationPlan> {
        let mapping = self.mapping(name);
        let mut plan = GenerationPlan::new(mapping.project_root());

        for entry in self.tree.walk()? {
            if let Some(planned) = mapping.map(&entry)? {
                plan.push(planned);
            }
        }

        Ok(plan)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn mapping(&self, name: &ProjectName) -> OutputMapping {
        OutputMapping::new(self.tree.root_name(), &self.output_dir, name)
    }

    /// Read, substitute, render and write a single file.
    ///
    /// Plain files that are not UTF-8 (images, archives) are copied as-is.
    /// A `.tmpl` file must be UTF-8.
    fn write_file(
        &self,
        source: &RelativePath,
        output: &Path,
        templated: bool,
        data: &TemplateData,
    ) -> StampResult<()> {
        let bytes = self.tree.read(source.as_path())?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) if !templated => {
                debug!(source = %source, "Copying binary file verbatim");
                return self.filesystem.write_file(output, &e.into_bytes());
            }
            Err(e) => {
                return Err(ApplicationError::InvalidEncoding {
                    path: source.as_path().to_path_buf(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        // Stage 1 always runs before stage 2.
        let text = data.substitute_name(&text);
        let rendered = self.renderer.render(&source.to_string(), &text, data)?;

        self.filesystem.write_file(output, rendered.as_bytes())
    }

    fn remove_artifact_dir(&self, artifact: &Path) -> StampResult<()> {
        if self.filesystem.exists(artifact) {
            warn!(path = %artifact.display(), "Removing nested template root from output");
        }
        self.filesystem.remove_dir_all(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer, MockTemplateTree};
    use crate::domain::{DomainError, TreeEntry};
    use crate::error::StampError;

    type Files = &'static [(&'static str, &'static str)];

    fn tree(entries: Vec<TreeEntry>, files: Files) -> MockTemplateTree {
        let mut tree = MockTemplateTree::new();
        tree.expect_root_name().return_const("template".to_string());
        tree.expect_walk().returning(move || Ok(entries.clone()));
        tree.expect_read().returning(move |path| {
            files
                .iter()
                .find(|(p, _)| Path::new(p) == path)
                .map(|(_, content)| content.as_bytes().to_vec())
                .ok_or_else(|| {
                    ApplicationError::TreeTraversal {
                        reason: format!("no such file: {}", path.display()),
                    }
                    .into()
                })
        });
        tree
    }

    fn passthrough_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|_, source, _| Ok(source.to_string()));
        renderer
    }

    fn name(s: &str) -> ProjectName {
        ProjectName::parse(s).unwrap()
    }

    fn sample_entries() -> Vec<TreeEntry> {
        vec![
            TreeEntry::directory("template"),
            TreeEntry::file("template/README.md.tmpl"),
            TreeEntry::directory("template/pkg"),
            TreeEntry::file("template/pkg/main.go.tmpl"),
        ]
    }

    const SAMPLE_FILES: Files = &[
        ("template/README.md.tmpl", "# {{.name}}"),
        ("template/pkg/main.go.tmpl", "package {{.name}}"),
    ];

    #[test]
    fn generate_writes_mapped_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("svc"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("svc/pkg"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("svc/README.md") && content == b"# svc")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("svc/pkg/main.go") && content == b"package svc"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_remove_dir_all()
            .withf(|path| path == Path::new("svc/template"))
            .times(1)
            .returning(|_| Ok(()));

        let generator = ProjectGenerator::new(
            Box::new(tree(sample_entries(), SAMPLE_FILES)),
            Box::new(fs),
            Box::new(passthrough_renderer()),
        );

        let report = generator.generate(&name("svc")).unwrap();
        assert_eq!(
            report,
            GenerationReport {
                root: PathBuf::from("svc"),
                directories_created: 1,
                files_written: 2,
            }
        );
    }

    #[test]
    fn renderer_sees_stage_one_output() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|name, source, data| {
                name == "template/hello.txt"
                    && source == "Hello foo! {{ProjectName}}"
                    && data.project_name == "foo"
                    && data.module_name == "foo"
            })
            .times(1)
            .returning(|_, _, _| Ok("Hello foo! foo".into()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("foo/hello.txt") && content == b"Hello foo! foo")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_remove_dir_all().returning(|_| Ok(()));

        let generator = ProjectGenerator::new(
            Box::new(tree(
                vec![
                    TreeEntry::directory("template"),
                    TreeEntry::file("template/hello.txt"),
                ],
                &[("template/hello.txt", "Hello {{.name}}! {{ProjectName}}")],
            )),
            Box::new(fs),
            Box::new(renderer),
        );

        generator.generate(&name("foo")).unwrap();
    }

    #[test]
    fn parse_error_aborts_after_earlier_files() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|name, _, _| name == "template/a.txt")
            .returning(|_, source, _| Ok(source.to_string()));
        renderer
            .expect_render()
            .withf(|name, _, _| name == "template/b.txt")
            .returning(|name, _, _| {
                Err(ApplicationError::TemplateParse {
                    path: PathBuf::from(name),
                    reason: "unclosed expression".into(),
                }
                .into())
            });

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("svc/a.txt"))
            .times(1)
            .returning(|_, _| Ok(()));
        // No further writes, no cleanup.
        fs.expect_remove_dir_all().never();

        let generator = ProjectGenerator::new(
            Box::new(tree(
                vec![
                    TreeEntry::directory("template"),
                    TreeEntry::file("template/a.txt"),
                    TreeEntry::file("template/b.txt"),
                    TreeEntry::file("template/c.txt"),
                ],
                &[
                    ("template/a.txt", "a"),
                    ("template/b.txt", "{{#if}}"),
                    ("template/c.txt", "c"),
                ],
            )),
            Box::new(fs),
            Box::new(renderer),
        );

        let err = generator.generate(&name("svc")).unwrap_err();
        assert!(matches!(
            err,
            StampError::Application(ApplicationError::TemplateParse { .. })
        ));
    }

    #[test]
    fn filesystem_error_stops_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .times(1)
            .returning(|path, _| {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("svc"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_remove_dir_all().never();

        let generator = ProjectGenerator::new(
            Box::new(tree(sample_entries(), SAMPLE_FILES)),
            Box::new(fs),
            Box::new(passthrough_renderer()),
        );

        let err = generator.generate(&name("svc")).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Io);
    }

    #[test]
    fn traversal_error_touches_nothing() {
        let mut tree = MockTemplateTree::new();
        tree.expect_root_name().return_const("template".to_string());
        tree.expect_walk().returning(|| {
            Err(ApplicationError::TreeTraversal {
                reason: "unreadable".into(),
            }
            .into())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let generator = ProjectGenerator::new(
            Box::new(tree),
            Box::new(fs),
            Box::new(MockTemplateRenderer::new()),
        );

        assert!(generator.generate(&name("svc")).is_err());
    }

    #[test]
    fn binary_file_is_copied_verbatim() {
        let mut tree = MockTemplateTree::new();
        tree.expect_root_name().return_const("template".to_string());
        tree.expect_walk().returning(|| {
            Ok(vec![
                TreeEntry::directory("template"),
                TreeEntry::file("template/favicon.ico"),
            ])
        });
        tree.expect_read()
            .returning(|_| Ok(vec![0, 0, 1, 0, 0xff, 0xfe, 0x89]));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("svc/favicon.ico") && content == &[0u8, 0, 1, 0, 0xff, 0xfe, 0x89][..]
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_remove_dir_all().returning(|_| Ok(()));

        // Neither stage runs on binary content.
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let generator = ProjectGenerator::new(Box::new(tree), Box::new(fs), Box::new(renderer));

        let report = generator.generate(&name("svc")).unwrap();
        assert_eq!(report.files_written, 1);
    }

    #[test]
    fn non_utf8_template_is_rejected() {
        let mut tree = MockTemplateTree::new();
        tree.expect_root_name().return_const("template".to_string());
        tree.expect_walk()
            .returning(|| Ok(vec![TreeEntry::file("template/logo.bin.tmpl")]));
        tree.expect_read().returning(|_| Ok(vec![0xff, 0xfe, 0x00]));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().never();

        let generator = ProjectGenerator::new(
            Box::new(tree),
            Box::new(fs),
            Box::new(MockTemplateRenderer::new()),
        );

        let err = generator.generate(&name("svc")).unwrap_err();
        assert!(matches!(
            err,
            StampError::Application(ApplicationError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn entry_outside_root_is_a_domain_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().never();

        let generator = ProjectGenerator::new(
            Box::new(tree(vec![TreeEntry::file("elsewhere/x.txt")], &[])),
            Box::new(fs),
            Box::new(MockTemplateRenderer::new()),
        );

        let err = generator.generate(&name("svc")).unwrap_err();
        assert!(matches!(
            err,
            StampError::Domain(DomainError::EntryOutsideRoot { .. })
        ));
    }

    #[test]
    fn output_dir_prefixes_every_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|path| path.starts_with("out/svc"))
            .times(2)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.starts_with("out/svc"))
            .times(2)
            .returning(|_, _| Ok(()));
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all()
            .withf(|path| path == Path::new("out/svc/template"))
            .times(1)
            .returning(|_| Ok(()));

        let generator = ProjectGenerator::new(
            Box::new(tree(sample_entries(), SAMPLE_FILES)),
            Box::new(fs),
            Box::new(passthrough_renderer()),
        )
        .with_output_dir("out");

        let report = generator.generate(&name("svc")).unwrap();
        assert_eq!(report.root, PathBuf::from("out/svc"));
    }

    #[test]
    fn plan_reads_and_writes_nothing() {
        let mut tree = MockTemplateTree::new();
        tree.expect_root_name().return_const("template".to_string());
        tree.expect_walk().returning(|| Ok(sample_entries()));
        tree.expect_read().never();

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let generator = ProjectGenerator::new(
            Box::new(tree),
            Box::new(fs),
            Box::new(MockTemplateRenderer::new()),
        );

        let plan = generator.plan(&name("svc")).unwrap();
        let outputs: Vec<_> = plan.entries().iter().map(|e| e.output()).collect();
        assert_eq!(
            outputs,
            vec![
                Path::new("svc/README.md"),
                Path::new("svc/pkg"),
                Path::new("svc/pkg/main.go"),
            ]
        );
    }
}
