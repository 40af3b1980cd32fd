//! Filesystem fixture source.
//!
//! Discovery rules:
//! - only `*.json` regular files are collected
//! - symlinks are not followed unless `follow_links` is set
//! - every collected path must resolve inside its scan root
//! - `target`, `node_modules` and `.git` directories are never entered
//! - reads are bounded by `max_file_size`

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::SuiteConfig;
use crate::error::{ScanError, ScanErrorKind};

/// Directory names the walk never descends into.
pub const SKIP_DIRS: &[&str] = &["target", "node_modules", ".git"];

fn is_fixture_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    let full = path.to_string_lossy();
    let name = path.file_name().map(|n| n.to_string_lossy());
    patterns.iter().any(|pattern| {
        pattern.matches(&full) || name.as_deref().is_some_and(|n| pattern.matches(n))
    })
}

/// `true` for entries the walk may enter or yield.
fn is_walkable(entry: &DirEntry) -> bool {
    !(entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name)))
}

fn compile_excludes(exclude: &[String], scan_errors: &mut Vec<ScanError>) -> Vec<Pattern> {
    exclude
        .iter()
        .filter_map(|raw| match Pattern::new(raw) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                scan_errors.push(ScanError {
                    file: PathBuf::from(raw),
                    kind: ScanErrorKind::InvalidExcludePattern,
                    message: format!("Invalid exclude glob pattern '{raw}': {e}"),
                });
                None
            }
        })
        .collect()
}

/// Check that `path` resolves inside `root`; `None` when it does.
fn escape_error(path: &Path, root: &Path) -> Option<ScanError> {
    match path.canonicalize() {
        Ok(resolved) if resolved.starts_with(root) => None,
        Ok(resolved) => Some(ScanError {
            file: path.to_path_buf(),
            kind: ScanErrorKind::OutsideRoot,
            message: format!(
                "Path resolves outside scan root: {} -> {}",
                path.display(),
                resolved.display()
            ),
        }),
        Err(e) => Some(ScanError {
            file: path.to_path_buf(),
            kind: ScanErrorKind::IoError,
            message: format!("Failed to canonicalize path: {e}"),
        }),
    }
}

/// Collect the fixture files under `config.paths`.
///
/// Returns `(files, scan_errors)`. Files are sorted and deduplicated so
/// runs are reproducible. Walk failures and root escapes are reported, never
/// dropped.
pub fn find_fixture_files(config: &SuiteConfig) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut scan_errors = Vec::new();
    let excludes = compile_excludes(&config.exclude, &mut scan_errors);
    let mut files = Vec::new();

    for root in &config.paths {
        if root.is_file() {
            if is_fixture_file(root) && !is_excluded(root, &excludes) {
                files.push(root.clone());
            }
            continue;
        }

        let canonical_root = match root.canonicalize() {
            Ok(r) => r,
            Err(e) => {
                scan_errors.push(ScanError {
                    file: root.clone(),
                    kind: ScanErrorKind::IoError,
                    message: format!("Failed to canonicalize root path: {e}"),
                });
                continue;
            }
        };

        let walker = WalkDir::new(root)
            .follow_links(config.follow_links)
            .max_depth(config.max_depth)
            .into_iter()
            .filter_entry(is_walkable);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let file = e.path().map_or_else(|| root.clone(), Path::to_path_buf);
                    scan_errors.push(ScanError {
                        file,
                        kind: ScanErrorKind::WalkError,
                        message: format!("Directory traversal error: {e}"),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_fixture_file(path) || is_excluded(path, &excludes) {
                continue;
            }
            if let Some(err) = escape_error(path, &canonical_root) {
                scan_errors.push(err);
                continue;
            }
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    (files, scan_errors)
}

/// Read at most `max_file_size` bytes of `path` as UTF-8.
///
/// The size check and the read are one bounded operation (`Read::take`),
/// so a file growing between stat and read cannot slip past the limit.
///
/// # Errors
///
/// Returns a `ScanError` when the file cannot be read, is larger than
/// `max_file_size`, or is not UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ScanError> {
    let scan_error = |kind: ScanErrorKind, message: String| ScanError {
        file: path.to_owned(),
        kind,
        message,
    };

    let file = std::fs::File::open(path)
        .map_err(|e| scan_error(ScanErrorKind::IoError, format!("Failed to open file: {e}")))?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| scan_error(ScanErrorKind::IoError, format!("Failed to read file: {e}")))?;

    if buffer.len() as u64 > max_file_size {
        return Err(scan_error(
            ScanErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer).map_err(|_| {
        scan_error(
            ScanErrorKind::InvalidEncoding,
            "File is not valid UTF-8".to_owned(),
        )
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(paths: Vec<PathBuf>) -> SuiteConfig {
        let mut config = SuiteConfig::default();
        config.paths = paths;
        config
    }

    #[test]
    fn test_finds_only_json_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.json"), "[]").unwrap();
        fs::write(tmp.path().join("a.json"), "[]").unwrap();
        fs::write(tmp.path().join("notes.md"), "# notes").unwrap();

        let (files, errors) = find_fixture_files(&config_for(vec![tmp.path().to_path_buf()]));
        assert!(errors.is_empty(), "{errors:?}");
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.json", "b.json"]);
    }

    #[test]
    fn test_skip_dirs_are_not_entered() {
        let tmp = TempDir::new().unwrap();
        let skipped = tmp.path().join("node_modules");
        fs::create_dir(&skipped).unwrap();
        fs::write(skipped.join("pkg.json"), "[]").unwrap();
        fs::write(tmp.path().join("date.json"), "[]").unwrap();

        let (files, _) = find_fixture_files(&config_for(vec![tmp.path().to_path_buf()]));
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("date.json"));
    }

    #[test]
    fn test_exclude_by_file_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("date.json"), "[]").unwrap();
        fs::write(tmp.path().join("idn-email.json"), "[]").unwrap();

        let mut config = config_for(vec![tmp.path().to_path_buf()]);
        config.exclude = vec!["idn-*.json".to_owned()];
        let (files, errors) = find_fixture_files(&config);
        assert!(errors.is_empty());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("date.json"));
    }

    #[test]
    fn test_invalid_exclude_pattern_is_reported() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_for(vec![tmp.path().to_path_buf()]);
        config.exclude = vec!["[".to_owned()];
        let (_, errors) = find_fixture_files(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::InvalidExcludePattern);
    }

    #[test]
    fn test_explicit_file_root() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("uri.json");
        fs::write(&file, "[]").unwrap();

        let (files, errors) = find_fixture_files(&config_for(vec![file.clone()]));
        assert!(errors.is_empty());
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_read_file_bounded_limits() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("big.json");
        fs::write(&file, "[1234567890]").unwrap();

        assert_eq!(read_file_bounded(&file, 12).unwrap(), "[1234567890]");
        let err = read_file_bounded(&file, 11).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::FileTooLarge);
    }

    #[test]
    fn test_read_file_bounded_rejects_non_utf8() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("latin1.json");
        fs::write(&file, [b'[', 0xE9, b']']).unwrap();

        let err = read_file_bounded(&file, 1024).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::InvalidEncoding);
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_file_bounded(&tmp.path().join("missing.json"), 1024).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::IoError);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_is_reported_when_following_links() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.json"), "[]").unwrap();
        let root = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("secret.json"),
            root.path().join("link.json"),
        )
        .unwrap();

        let mut config = config_for(vec![root.path().to_path_buf()]);
        config.follow_links = true;
        let (files, errors) = find_fixture_files(&config);
        assert!(files.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::OutsideRoot);
    }
}
