//! Keeps `tests/unit/` in step with `src/`: one unit test file per source
//! file, no stale test files, and no test file without a `#[test]`

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Entry points and module roots, which carry no behaviour of their own
fn is_module_root(relative: &Path) -> bool {
    matches!(
        relative.file_name().and_then(|name| name.to_str()),
        Some("lib.rs" | "main.rs" | "mod.rs")
    )
}

/// Every `.rs` file and directory below `root`, relative to `root`
fn tree(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
    let mut found = BTreeSet::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(io::Error::other)?
                .to_path_buf();

            if path.is_dir() {
                pending.push(path);
                found.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.insert(relative);
            }
        }
    }

    Ok(found)
}

fn source_and_unit_trees() -> (BTreeSet<PathBuf>, BTreeSet<PathBuf>) {
    let sources = tree(Path::new("src")).unwrap_or_else(|e| unreachable!("src is readable: {e}"));
    let units = tree(Path::new("tests/unit")).unwrap_or_default();
    (sources, units)
}

fn listing(paths: &[&PathBuf], prefix: &str) -> String {
    paths
        .iter()
        .map(|path| format!("  - {prefix}/{}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_every_source_file_has_unit_tests() {
    let (sources, units) = source_and_unit_trees();

    let missing: Vec<&PathBuf> = sources
        .iter()
        .filter(|path| !is_module_root(path) && !units.contains(*path))
        .collect();

    assert!(
        missing.is_empty(),
        "source files without a tests/unit counterpart:\n{}",
        listing(&missing, "src")
    );
}

#[test]
fn test_every_unit_test_file_has_a_source() {
    let (sources, units) = source_and_unit_trees();

    let orphaned: Vec<&PathBuf> = units
        .iter()
        .filter(|path| !is_module_root(path) && !sources.contains(*path))
        .collect();

    assert!(
        orphaned.is_empty(),
        "unit test files without a src counterpart:\n{}",
        listing(&orphaned, "tests/unit")
    );
}

#[test]
fn test_every_test_file_declares_tests() {
    let root = Path::new("tests");
    let files = tree(root).unwrap_or_else(|e| unreachable!("tests is readable: {e}"));

    let empty: Vec<&PathBuf> = files
        .iter()
        .filter(|path| path.extension().is_some() && !is_module_root(path))
        .filter(|path| {
            !fs::read_to_string(root.join(path)).is_ok_and(|body| body.contains("#[test]"))
        })
        .collect();

    assert!(
        empty.is_empty(),
        "test files without any #[test] function:\n{}",
        listing(&empty, "tests")
    );
}
