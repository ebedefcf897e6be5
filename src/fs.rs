//! Forgiving filesystem helpers.
//!
//! [`FileSystem`] lists directories and reads files asynchronously. Each
//! operation comes in two forms:
//!
//! - `try_*` returns an [`FsResult`] with a categorized [`FsError`].
//! - The plain form applies the suppress-and-log policy: the failure is
//!   written as one warning through the injected [`Logger`] and the caller
//!   gets an empty value. Callers of the plain form cannot tell "nothing
//!   there" from "could not read".
//!
//! Outstanding operations complete independently; no ordering between two
//! concurrent calls is implied.
//!
//! The synchronous helpers [`by_line`] and [`reduce`] never fail.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::{ExtensionMatch, IoConfig};
use crate::error::{FsError, FsResult};
use crate::inspect::Arg;
use crate::logging::Logger;
use crate::paths;

// ============================================================================
// FileSystem
// ============================================================================

/// Directory listing and file reading relative to a base path.
#[derive(Debug, Clone)]
pub struct FileSystem {
    logger: Logger,
    base_path: PathBuf,
    extension_match: ExtensionMatch,
}

impl FileSystem {
    /// Create a facade reporting failures through `logger`.
    ///
    /// Relative paths resolve against `config.base_path`, or the working
    /// directory at construction time when unset.
    pub fn new(logger: Logger, config: &IoConfig) -> Self {
        let base_path = config
            .base_path
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            logger,
            base_path,
            extension_match: config.extension_match,
        }
    }

    /// The directory relative paths are resolved against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// List file names in `path`, optionally keeping only those with
    /// `extension`. Names are sorted.
    pub async fn try_list_files(&self, path: &str, extension: Option<&str>) -> FsResult<Vec<String>> {
        let dir = self.resolve(&paths::normalize(path));
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| FsError::from_io(&dir, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| FsError::from_io(&dir, e))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(match extension {
            Some(extension) => reduce_with(Some(names.as_slice()), extension, self.extension_match),
            None => names,
        })
    }

    /// [`try_list_files`](Self::try_list_files), with failures logged and
    /// replaced by an empty list.
    pub async fn list_files(&self, path: &str, extension: Option<&str>) -> Vec<String> {
        let result = self.try_list_files(path, extension).await;
        self.suppress_and_log(result)
    }

    /// Read `path` (joined with `filename` when given) as UTF-8 text.
    pub async fn try_read_file(&self, path: &str, filename: Option<&str>) -> FsResult<String> {
        let file = self.resolve(&paths::join(path, filename.unwrap_or_default()));
        fs::read_to_string(&file)
            .await
            .map_err(|e| FsError::from_io(&file, e))
    }

    /// [`try_read_file`](Self::try_read_file), with failures logged and
    /// replaced by an empty string.
    pub async fn read_file(&self, path: &str, filename: Option<&str>) -> String {
        let result = self.try_read_file(path, filename).await;
        self.suppress_and_log(result)
    }

    /// Suppress-and-log policy: a failure becomes one warning on the logger
    /// and the default value of `T`.
    pub fn suppress_and_log<T: Default>(&self, result: FsResult<T>) -> T {
        result.unwrap_or_else(|e| {
            self.logger.warn([Arg::display(&e)]);
            T::default()
        })
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

// ============================================================================
// Text Helpers
// ============================================================================

/// Split text into lines on `\n`.
///
/// Absent or empty text yields no lines. A trailing newline yields a final
/// empty line.
///
/// ```
/// use foundation_io::{Arg, by_line};
///
/// assert_eq!(by_line(Some("a\nb\nc")), vec!["a", "b", "c"]);
/// assert!(by_line(Arg::from(42).as_text()).is_empty());
/// ```
pub fn by_line(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) if !text.is_empty() => text.split('\n').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Keep the file names ending with `extension`.
///
/// Absent input yields an empty list.
pub fn reduce(files: Option<&[String]>, extension: &str) -> Vec<String> {
    reduce_with(files, extension, ExtensionMatch::Suffix)
}

/// Keep the file names that have `extension` under the given rule.
pub fn reduce_with(files: Option<&[String]>, extension: &str, rule: ExtensionMatch) -> Vec<String> {
    let Some(files) = files else {
        return Vec::new();
    };
    files
        .iter()
        .filter(|name| has_extension(name, extension, rule))
        .cloned()
        .collect()
}

fn has_extension(name: &str, extension: &str, rule: ExtensionMatch) -> bool {
    match rule {
        ExtensionMatch::Suffix => name.ends_with(extension),
        ExtensionMatch::Legacy => {
            let Some(first) = extension.as_bytes().first() else {
                return true;
            };
            let at_suffix = name
                .len()
                .checked_sub(extension.len())
                .and_then(|start| name.as_bytes().get(start));
            name.contains(extension) && at_suffix == Some(first)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
