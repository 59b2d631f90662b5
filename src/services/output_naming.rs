//! Destination path normalization.

use std::path::{Path, PathBuf};

/// Extension of the packed bitmap.
pub const PACKED_EXTENSION: &str = "cg3";
/// Extension of every diagnostic image.
pub const DIAGNOSTIC_EXTENSION: &str = "png";

/// Force `path` to end in `.{extension}`.
///
/// The final extension is replaced; a name without one gets it appended.
/// Extension matching is case-insensitive, so `OUT.CG3` is kept as is. A
/// rewrite is logged at warn level.
pub fn with_forced_extension(path: &Path, extension: &str) -> PathBuf {
    let current = path.extension().and_then(|e| e.to_str());
    if current.is_some_and(|e| e.eq_ignore_ascii_case(extension)) {
        return path.to_path_buf();
    }

    let rewritten = path.with_extension(extension);
    tracing::warn!(
        requested = %path.display(),
        written = %rewritten.display(),
        "Rewriting output extension"
    );
    rewritten
}

/// Path of the packed artifact for a requested destination.
pub fn packed_path(path: &Path) -> PathBuf {
    with_forced_extension(path, PACKED_EXTENSION)
}

/// Path of a diagnostic image for a requested destination.
pub fn diagnostic_path(path: &Path) -> PathBuf {
    with_forced_extension(path, DIAGNOSTIC_EXTENSION)
}
