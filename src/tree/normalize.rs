use super::{ExtMode, ROOT};

/// Bucket marker for a file with no usable extension.
pub const STAR: &str = "*";

/// Compute the extension-bucket leaf (`*` or `*.<ext>`) for a basename.
pub fn ext_bucket(basename: &str, mode: ExtMode) -> String {
    if mode == ExtMode::Star || basename.starts_with('.') {
        return STAR.to_string();
    }
    let ext = match mode {
        ExtMode::Last => basename.rsplit_once('.').map(|(_, ext)| ext),
        ExtMode::Full => basename.split_once('.').map(|(_, ext)| ext),
        ExtMode::Star => None,
    };
    match ext {
        Some(ext) if !ext.is_empty() => format!("*.{ext}"),
        _ => STAR.to_string(),
    }
}

/// Lexically normalize a POSIX path into its components.
///
/// Drops empty and `.` components and resolves `..` against the preceding
/// component. `..` directly under the root is discarded; leading `..` of a
/// relative path is kept. No symlinks are resolved.
fn normalized_components(path: &str) -> Vec<&str> {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for comp in path.split('/') {
        match comp {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }
    if parts.is_empty() && !absolute {
        parts.push(".");
    }
    parts
}

/// Turn a raw path into `[ROOT, dir.., bucket]`.
///
/// Every path is treated as rooted. The basename is replaced by its
/// extension bucket, so the result always has at least two segments.
pub fn path_to_segments(path: &str, mode: ExtMode) -> Vec<String> {
    let mut components = normalized_components(path);
    let Some(basename) = components.pop() else {
        return vec![ROOT.to_string(), STAR.to_string()];
    };

    let mut segments = Vec::with_capacity(components.len() + 2);
    segments.push(ROOT.to_string());
    segments.extend(components.into_iter().map(str::to_string));
    segments.push(ext_bucket(basename, mode));
    segments
}
