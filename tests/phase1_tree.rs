mod common;

use common::SYSTEM_PATHS;
use trusttree::input::PathFilter;
use trusttree::tree::{path_to_segments, ExtMode, TrieBuilder, ROOT};

fn bucket(path: &str, mode: ExtMode) -> String {
    path_to_segments(path, mode).pop().unwrap()
}

// --- Normalization ---

#[test]
fn test_root_path_in_every_mode() {
    for mode in [ExtMode::Last, ExtMode::Full, ExtMode::Star] {
        assert_eq!(path_to_segments("/", mode), vec!["/", "*"]);
    }
}

#[test]
fn test_multi_dot_buckets() {
    assert_eq!(bucket("/a/b/report.tar.gz", ExtMode::Last), "*.gz");
    assert_eq!(bucket("/a/b/report.tar.gz", ExtMode::Full), "*.tar.gz");
    assert_eq!(bucket("/a/b/report.tar.gz", ExtMode::Star), "*");
}

#[test]
fn test_dotfile_is_star_in_every_mode() {
    for mode in [ExtMode::Last, ExtMode::Full, ExtMode::Star] {
        assert_eq!(bucket("/a/.hidden", mode), "*");
        assert_eq!(bucket("/a/.config.bak", mode), "*");
    }
}

#[test]
fn test_no_dot_is_star() {
    assert_eq!(bucket("/a/noext", ExtMode::Last), "*");
    assert_eq!(bucket("/a/noext", ExtMode::Full), "*");
}

#[test]
fn test_segments_start_at_root_and_end_in_bucket() {
    for path in SYSTEM_PATHS.iter().chain(["relative/x.txt", "./a/../b"].iter()) {
        let segments = path_to_segments(path, ExtMode::Last);
        assert!(segments.len() >= 2, "{path}: {segments:?}");
        assert_eq!(segments[0], ROOT);
        let leaf = segments.last().unwrap();
        assert!(leaf == "*" || leaf.starts_with("*."), "{path}: {leaf}");
        for dir in &segments[1..segments.len() - 1] {
            assert!(!dir.is_empty() && !dir.contains('/'), "{path}: {dir:?}");
        }
    }
}

#[test]
fn test_directory_components_survive_normalization() {
    assert_eq!(
        path_to_segments("/usr/lib/python3.11/os.py", ExtMode::Last),
        vec!["/", "usr", "lib", "python3.11", "*.py"]
    );
}

// --- Building ---

#[test]
fn test_root_count_equals_accepted_paths() {
    let filter = PathFilter::new("/usr", "", r"python").unwrap();
    let mut builder = TrieBuilder::new(ExtMode::Last);
    let accepted = builder.extend(SYSTEM_PATHS, &filter);

    let expected = SYSTEM_PATHS
        .iter()
        .filter(|p| p.starts_with("/usr") && !p.contains("python"))
        .count();
    assert_eq!(accepted, expected);
    assert_eq!(builder.root().count, expected);
}

#[test]
fn test_parent_count_bounds_child_counts() {
    let mut builder = TrieBuilder::new(ExtMode::Full);
    builder.extend(SYSTEM_PATHS, &PathFilter::accept_all());

    fn check(node: &trusttree::tree::TreeNode) {
        let sum: usize = node.children.values().map(|c| c.count).sum();
        assert!(sum <= node.count);
        for child in node.children.values() {
            assert!(child.count >= 1);
            check(child);
        }
    }
    check(builder.root());
}

#[test]
fn test_every_leaf_is_a_bucket() {
    let mut builder = TrieBuilder::new(ExtMode::Last);
    builder.extend(SYSTEM_PATHS, &PathFilter::accept_all());

    fn check(name: &str, node: &trusttree::tree::TreeNode) {
        if node.children.is_empty() {
            assert!(name == "*" || name.starts_with("*."), "leaf {name:?}");
        }
        for (child_name, child) in &node.children {
            check(child_name, child);
        }
    }
    check(ROOT, builder.root());
}

#[test]
fn test_all_filtered_out_yields_empty_tree() {
    let filter = PathFilter::new("/nowhere", "", "").unwrap();
    let mut builder = TrieBuilder::new(ExtMode::Last);
    assert_eq!(builder.extend(SYSTEM_PATHS, &filter), 0);
    assert!(builder.finish(1).is_empty());
}
