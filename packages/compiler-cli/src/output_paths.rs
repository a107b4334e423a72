//! Output Paths
//!
//! Derives each component's output directory and file names from its input
//! path: every path segment relative to the input root is hyphenated and
//! re-rooted under the output root. Directory creation is recursive and
//! idempotent.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use vue_compiler::util::to_hyphenated;

#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub component_file: PathBuf,
    pub style_file: PathBuf,
    /// The component's display name (input file stem).
    pub name: String,
    pub converted_name: String,
}

/// Compute the output target for one input component file.
pub fn output_target(input_root: &Path, output_root: &Path, input_file: &Path) -> OutputTarget {
    let file_name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = file_name.split('.').next().unwrap_or("").to_string();
    let converted_name = to_hyphenated(&name);

    let relative_dir = input_file
        .parent()
        .and_then(|parent| parent.strip_prefix(input_root).ok())
        .unwrap_or_else(|| Path::new(""));

    let mut dir = output_root.to_path_buf();
    for component in relative_dir.components() {
        if let Component::Normal(segment) = component {
            dir.push(to_hyphenated(&segment.to_string_lossy()));
        }
    }
    dir.push(&converted_name);

    let component_file = dir.join(format!("{}.jsx", converted_name));
    let style_file = dir.join("styles.css");

    OutputTarget {
        dir,
        component_file,
        style_file,
        name,
        converted_name,
    }
}

/// Create the target directory, tolerating re-runs.
pub fn ensure_output_dir(target: &OutputTarget) -> io::Result<()> {
    fs::create_dir_all(&target.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_hyphenated() {
        let target = output_target(
            Path::new("/src"),
            Path::new("/out"),
            Path::new("/src/AdminPanel/widgets/UserBadge.vue"),
        );
        assert_eq!(
            target.component_file,
            PathBuf::from("/out/admin-panel/widgets/user-badge/user-badge.jsx")
        );
        assert_eq!(
            target.style_file,
            PathBuf::from("/out/admin-panel/widgets/user-badge/styles.css")
        );
        assert_eq!(target.name, "UserBadge");
        assert_eq!(target.converted_name, "user-badge");
    }

    #[test]
    fn test_root_level_file() {
        let target = output_target(
            Path::new("/src"),
            Path::new("/out"),
            Path::new("/src/App.vue"),
        );
        assert_eq!(target.dir, PathBuf::from("/out/app"));
    }
}
