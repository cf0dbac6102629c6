//! Inspector integration tests over a temporary project checkout.
//!
//! - Tree ordering, depth bound, auto-expansion
//! - Read-only directories are not descended
//! - Hidden and git-ignored entries are listed, symlinks are not followed
//! - Cache behaviour and explicit clearing
//! - Project structure report

use std::fs;
use std::path::Path;

use gnc_core::enums::FileType;
use gnc_inspect::{FileStructureInspector, InspectError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

/// A small Next.js-shaped checkout.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    for file in [
        "package.json",
        "tsconfig.json",
        "jest.config.mjs",
        "README.md",
        "src/app/page.tsx",
        "src/components/header.tsx",
        "src/components/ui/button.tsx",
        "src/lib/utils.ts",
        "src/hooks/use-events.ts",
        "tests/unit/lib/prisma.test.ts",
        "notes/project-plan.md",
        "node_modules/react/index.js",
    ] {
        touch(root, file);
    }
    tmp
}

fn names(nodes: &[gnc_core::entities::FileStructureNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.entry.path.as_str()).collect()
}

#[test]
fn top_level_directories_first_then_files() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();
    let tree = inspector.get_directory_tree(tmp.path(), 3).unwrap();

    assert_eq!(
        names(&tree),
        vec![
            "node_modules",
            "notes",
            "src",
            "tests",
            "README.md",
            "jest.config.mjs",
            "package.json",
            "tsconfig.json",
        ]
    );
    assert!(tree.iter().all(|n| n.depth == 0 && n.expanded));
}

#[test]
fn read_only_directories_are_leaves() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();
    let tree = inspector.get_directory_tree(tmp.path(), 5).unwrap();

    let node_modules = tree.iter().find(|n| n.entry.path == "node_modules").unwrap();
    assert!(node_modules.entry.read_only);
    assert!(node_modules.children.is_empty());

    let src = tree.iter().find(|n| n.entry.path == "src").unwrap();
    let components = src.children.iter().find(|n| n.entry.path == "src/components").unwrap();
    assert_eq!(names(&components.children), vec!["src/components/ui", "src/components/header.tsx"]);
    let ui = &components.children[0];
    assert!(ui.entry.read_only);
    assert_eq!(ui.entry.description, "UI components (typically read-only)");
    assert!(ui.children.is_empty());
}

#[test]
fn depth_bound_and_expansion() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();
    let tree = inspector.get_directory_tree("tests", 3).unwrap();

    let unit = &tree[0];
    assert_eq!(unit.entry.path, "tests/unit");
    assert!(unit.expanded);
    let lib = &unit.children[0];
    assert_eq!((lib.depth, lib.expanded), (1, true));
    let file = &lib.children[0];
    assert_eq!(file.entry.path, "tests/unit/lib/prisma.test.ts");
    assert_eq!((file.depth, file.expanded), (2, false));

    let shallow = inspector.get_directory_tree("tests", 1).unwrap();
    assert!(shallow[0].children.is_empty());
}

#[test]
fn hidden_and_git_ignored_entries_are_listed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join(".gitignore"), "notes/\nnode_modules/\n").unwrap();
    touch(root, ".git/HEAD");
    touch(root, ".env.local");
    touch(root, "notes/plan.md");

    let mut inspector = FileStructureInspector::new(root).unwrap();
    let tree = inspector.get_directory_tree(root, 3).unwrap();
    assert_eq!(names(&tree), vec![".git", "notes", ".env.local", ".gitignore"]);

    let git = &tree[0];
    assert!(git.entry.read_only);
    assert!(git.children.is_empty());
    assert_eq!(names(&tree[1].children), vec!["notes/plan.md"]);
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_followed() {
    let tmp = project();
    let root = tmp.path();
    std::os::unix::fs::symlink(".", root.join("notes/loop")).unwrap();

    let mut inspector = FileStructureInspector::new(root).unwrap();
    let tree = inspector.get_directory_tree("notes", 5).unwrap();

    assert_eq!(names(&tree), vec!["notes/loop", "notes/project-plan.md"]);
    assert!(tree[0].children.is_empty());
}

#[test]
fn walking_a_read_only_root_lists_one_level() {
    let tmp = project();
    touch(tmp.path(), "node_modules/react/cjs/react.js");
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();

    let tree = inspector.get_directory_tree("node_modules", 5).unwrap();
    assert_eq!(names(&tree), vec!["node_modules/react"]);
    assert!(tree[0].children.is_empty());
}

#[test]
fn tree_root_errors() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();
    assert!(matches!(
        inspector.get_directory_tree("missing", 3),
        Err(InspectError::NotFound(_))
    ));
    assert!(matches!(
        inspector.get_directory_tree("package.json", 3),
        Err(InspectError::NotADirectory(_))
    ));
}

#[test]
fn file_structure_is_cached_until_cleared() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();

    let first = inspector.get_file_structure("src/lib/utils.ts").unwrap().unwrap();
    assert_eq!(first.file_type, FileType::File);
    assert!(!first.read_only);
    assert_eq!(first.description, "utils.ts file");
    assert!(first.updated_at >= first.created_at);

    fs::remove_file(tmp.path().join("src/lib/utils.ts")).unwrap();
    let stale = inspector.get_file_structure("src/lib/utils.ts").unwrap();
    assert_eq!(stale, Some(first));

    let stats = inspector.cache_stats();
    assert_eq!(stats.size, 1);
    assert!(stats.keys[0].ends_with("src/lib/utils.ts"));

    inspector.clear_cache();
    assert_eq!(inspector.cache_stats().size, 0);
    assert!(inspector.get_file_structure("src/lib/utils.ts").unwrap().is_none());
}

#[test]
fn config_files_are_read_only_and_described() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();
    let package = inspector.get_file_structure("package.json").unwrap().unwrap();
    assert!(package.read_only);
    assert_eq!(package.description, "Project dependencies and configuration");

    let status = inspector.validate_read_only_status("package.json");
    assert_eq!(status.reason.as_deref(), Some("Configuration file should not be modified"));
}

#[test]
fn project_structure_report() {
    let tmp = project();
    let inspector = FileStructureInspector::new(tmp.path()).unwrap();
    let report = inspector.validate_project_structure();
    assert!(report.is_valid, "{:?}", report.issues);

    let empty = TempDir::new().unwrap();
    let report = FileStructureInspector::new(empty.path())
        .unwrap()
        .validate_project_structure();
    assert!(!report.is_valid);
    assert!(report.issues.contains(&"Missing required directory: src/".to_string()));
    assert!(report.issues.contains(&"Missing configuration file: package.json".to_string()));
    assert!(report.recommendations.contains(&"Create directory: notes/".to_string()));
    assert!(
        report.issues.iter().all(|issue| issue.starts_with("Missing ")),
        "{:?}",
        report.issues
    );
}

#[test]
fn node_serializes_flat() {
    let tmp = project();
    let mut inspector = FileStructureInspector::new(tmp.path()).unwrap();
    let tree = inspector.get_directory_tree("notes", 2).unwrap();
    let json = serde_json::to_value(&tree[0]).unwrap();
    assert_eq!(json["path"], "notes/project-plan.md");
    assert_eq!(json["file_type"], "file");
    assert_eq!(json["depth"], 0);
}
