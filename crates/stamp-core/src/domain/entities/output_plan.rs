use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        common::RelativePath,
        tree::{EntryKind, TEMPLATE_SUFFIX, TreeEntry},
    },
    error::DomainError,
    value_objects::ProjectName,
};

/// Maps template tree entries onto output paths for one project.
///
/// The mapping is pure: it never touches the filesystem.
#[derive(Debug, Clone)]
pub struct OutputMapping {
    root_name: String,
    project_root: PathBuf,
}

impl OutputMapping {
    /// `base` is the directory the project is created in (empty for CWD).
    pub fn new(root_name: impl Into<String>, base: &Path, project: &ProjectName) -> Self {
        Self {
            root_name: root_name.into(),
            project_root: base.join(project.as_str()),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// `<project>/<tree root>`: the leftover that is removed after a run.
    pub fn artifact_dir(&self) -> PathBuf {
        self.project_root.join(&self.root_name)
    }

    /// Map one entry. The tree root itself maps to `None`.
    pub fn map(&self, entry: &TreeEntry) -> Result<Option<PlannedEntry>, DomainError> {
        let relative =
            entry
                .path
                .strip_prefix(&self.root_name)
                .ok_or_else(|| DomainError::EntryOutsideRoot {
                    path: entry.path.to_string(),
                    root: self.root_name.clone(),
                })?;

        if relative.is_empty() {
            return Ok(None);
        }

        let planned = match entry.kind {
            EntryKind::Directory => PlannedEntry::Directory {
                output: self.project_root.join(relative.as_path()),
            },
            EntryKind::File => {
                let (output_rel, templated) = strip_template_suffix(relative.as_path());
                PlannedEntry::File {
                    source: entry.path.clone(),
                    output: self.project_root.join(output_rel),
                    templated,
                }
            }
        };

        Ok(Some(planned))
    }
}

/// Drop a trailing `.tmpl` from the file name of `path`.
///
/// A file named exactly `.tmpl` keeps its name: stripping would leave
/// nothing to write to.
fn strip_template_suffix(path: &Path) -> (PathBuf, bool) {
    let stripped = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(TEMPLATE_SUFFIX))
        .filter(|stem| !stem.is_empty());

    match stripped {
        Some(stem) => (path.with_file_name(stem), true),
        None => (path.to_path_buf(), false),
    }
}

/// Where a single tree entry lands in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedEntry {
    Directory {
        output: PathBuf,
    },
    File {
        source: RelativePath,
        output: PathBuf,
        /// The source name carried the `.tmpl` marker.
        templated: bool,
    },
}

impl PlannedEntry {
    pub fn output(&self) -> &Path {
        match self {
            Self::Directory { output } | Self::File { output, .. } => output,
        }
    }
}

/// Every output path a generation run would produce, in traversal order.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<PlannedEntry>,
}

impl GenerationPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: PlannedEntry) {
        self.entries.push(entry);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PlannedEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, PlannedEntry::File { .. }))
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, PlannedEntry::Directory { .. }))
    }
}
