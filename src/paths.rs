//! Pure path string helpers.
//!
//! Paths here are forward-slash delimited strings, handled lexically: nothing
//! in this module touches the filesystem.

/// Default number of separators kept by [`shorten`].
pub const DEFAULT_SHORTEN_MAX: usize = 3;

/// Normalize a path lexically.
///
/// Collapses repeated separators, drops `.` segments and resolves `..`
/// against the preceding segment. A trailing separator is kept. `..` above
/// the root of an absolute path is dropped; leading `..` of a relative path
/// is kept. The empty path normalizes to `"."`.
///
/// ```
/// use foundation_io::paths::normalize;
///
/// assert_eq!(normalize("/srv//app/./lib/../src/"), "/srv/app/src/");
/// assert_eq!(normalize("../a/b/.."), "../a");
/// ```
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            segment => parts.push(segment),
        }
    }

    let joined = parts.join("/");
    if joined.is_empty() {
        let empty = match (absolute, trailing) {
            (true, _) => "/",
            (false, true) => "./",
            (false, false) => ".",
        };
        return empty.to_string();
    }

    let mut out = String::with_capacity(joined.len() + 2);
    if absolute {
        out.push('/');
    }
    out.push_str(&joined);
    if trailing {
        out.push('/');
    }
    out
}

/// Join a directory and a name, then [`normalize`]. Empty parts are ignored.
pub fn join(path: &str, name: &str) -> String {
    let joined = [path, name]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}

/// Shorten a long path for display.
///
/// Paths with at most `max` separators are returned unchanged. Longer paths
/// lose leading segments until `max` separators' worth of segments have been
/// removed, and the remainder is prefixed with `...`. A leading `/` is dropped
/// without counting as a removed segment. The result cannot be turned back
/// into the original path.
///
/// ```
/// use foundation_io::paths::shorten;
///
/// assert_eq!(shorten("/srv/app/lib/foundation/io.rs", 3), ".../lib/foundation/io.rs");
/// assert_eq!(shorten("lib/io.rs", 3), "lib/io.rs");
/// ```
pub fn shorten(path: &str, max: usize) -> String {
    let count = path.matches('/').count();
    if count == 0 || count <= max {
        return path.to_string();
    }

    let to_remove = count - max;
    let mut removed = 0;
    let mut rest = path;
    while removed < to_remove {
        let Some(index) = rest.find('/') else {
            break;
        };
        if index == 0 {
            rest = &rest[1..];
        } else {
            rest = &rest[index..];
            removed += 1;
        }
    }

    format!("...{rest}")
}
