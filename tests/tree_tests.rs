use pretty_assertions::assert_eq;
use project_tree::{ProjectTree, TreeError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

fn project(files: &[&str], dirs: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in dirs {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    for file in files {
        touch(&tmp.path().join(file));
    }
    tmp
}

#[test]
fn directories_listed_before_files_and_vcs_hidden() {
    let tmp = project(&["a.txt", ".git/HEAD"], &["sub"]);
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "├── sub\n└── a.txt");
}

#[test]
fn nested_prefixes_follow_sibling_position() {
    let tmp = project(
        &["docs/guide.md", "src/main.rs", "src/lib.rs", "README.md", "Cargo.toml"],
        &[],
    );
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    let expected = [
        "├── docs",
        "│   └── guide.md",
        "├── src",
        "│   ├── lib.rs",
        "│   └── main.rs",
        "├── Cargo.toml",
        "└── README.md",
    ]
    .join("\n");
    assert_eq!(tree, expected);
}

#[test]
fn last_directory_children_use_blank_continuation() {
    let tmp = project(&["only/inner/deep.txt"], &[]);
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "└── only\n    └── inner\n        └── deep.txt");
}

#[test]
fn sorting_ignores_case() {
    let tmp = project(&["b.txt", "A.txt", "c.TXT"], &["Zoo", "apple"]);
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "├── apple\n├── Zoo\n├── A.txt\n├── b.txt\n└── c.TXT");
}

#[test]
fn ignored_entries_and_their_descendants_are_absent() {
    let tmp = project(
        &[
            "node_modules/left-pad/index.js",
            "pkg.egg-info/PKG-INFO",
            "app.py",
            "app.pyc",
            "debug.log",
        ],
        &["__pycache__"],
    );
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "└── app.py");
}

#[test]
fn terminal_connector_goes_to_last_visible_sibling() {
    // "zz.bak" sorts last but is ignored, so "notes.md" closes the listing.
    let tmp = project(&["notes.md", "zz.bak"], &[]);
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "└── notes.md");
}

#[test]
fn custom_patterns_replace_defaults() {
    let tmp = project(&[".git/HEAD", "target/debug/app", "main.rs"], &[]);
    let patterns = vec!["target".to_string()];
    let tree = ProjectTree::new(tmp.path(), Some(patterns.as_slice())).generate_tree(None).unwrap();
    assert_eq!(tree, "├── .git\n│   └── HEAD\n└── main.rs");
}

#[test]
fn generator_name_is_always_hidden() {
    let tmp = project(&["project-tree", "keep.txt"], &[]);
    let patterns = vec!["nothing".to_string()];
    let tree = ProjectTree::new(tmp.path(), Some(patterns.as_slice())).generate_tree(None).unwrap();
    assert_eq!(tree, "└── keep.txt");
}

#[test]
fn empty_directory_renders_empty_string() {
    let tmp = TempDir::new().unwrap();
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "");
}

#[test]
fn repeated_generation_is_identical() {
    let tmp = project(&["a/b/c.txt", "a/d.txt", "e.txt"], &["f"]);
    let generator = ProjectTree::new(tmp.path(), None);
    let first = generator.generate_tree(None).unwrap();
    let second = generator.generate_tree(None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn output_file_matches_result_and_is_excluded() {
    let tmp = project(&["main.rs"], &["src"]);
    let output = tmp.path().join("tree.txt");
    let generator = ProjectTree::new(tmp.path(), None);

    let tree = generator.generate_tree(Some(output.as_path())).unwrap();
    assert_eq!(tree, "├── src\n└── main.rs");
    assert_eq!(fs::read_to_string(&output).unwrap(), tree);

    // The exclusion only lasts for the call that wrote the file.
    let again = generator.generate_tree(None).unwrap();
    assert_eq!(again, "├── src\n├── main.rs\n└── tree.txt");
}

#[test]
fn output_file_is_overwritten() {
    let tmp = project(&["one.txt"], &[]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("tree.txt");
    fs::write(&output, "stale content that is much longer than the tree").unwrap();

    let tree = ProjectTree::new(tmp.path(), None).generate_tree(Some(output.as_path())).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), tree);
}

#[test]
fn unwritable_output_fails_but_keeps_tree() {
    let tmp = project(&["one.txt"], &[]);
    let output = tmp.path().join("missing-dir").join("tree.txt");
    let err = ProjectTree::new(tmp.path(), None).generate_tree(Some(output.as_path())).unwrap_err();
    match &err {
        TreeError::Write { path, tree, .. } => {
            assert_eq!(path, &output);
            assert_eq!(tree, "└── one.txt");
        }
    }
    assert_eq!(err.tree(), Some("└── one.txt"));
}

#[test]
fn missing_root_renders_error_marker() {
    let tmp = TempDir::new().unwrap();
    let tree = ProjectTree::new(tmp.path().join("gone"), None).generate_tree(None).unwrap();
    assert!(tree.starts_with("└── [Error: "), "got {:?}", tree);
    assert_eq!(tree.lines().count(), 1);
}

#[test]
fn generator_can_be_shared_between_threads() {
    let tmp = project(&["a.txt", "b/c.txt"], &[]);
    let generator = ProjectTree::new(tmp.path(), None);
    let expected = generator.generate_tree(None).unwrap();
    let out_dir = TempDir::new().unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let generator = &generator;
                let output = out_dir.path().join(format!("tree-{}.txt", i));
                s.spawn(move || generator.generate_tree(Some(output.as_path())).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[cfg(unix)]
#[test]
fn unreadable_directory_gets_permission_marker() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = project(&["locked/secret.txt", "notes.txt"], &[]);
    let locked = tmp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can list it anyway; nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(tree, "├── locked\n│   └── [Permission Denied]\n└── notes.txt");
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_listed_not_followed() {
    let tmp = project(&["a.txt"], &[]);
    std::os::unix::fs::symlink(tmp.path(), tmp.path().join("loop")).unwrap();
    let tree = ProjectTree::new(tmp.path(), None).generate_tree(None).unwrap();
    assert_eq!(tree, "├── loop\n└── a.txt");
}
