//! Resolve paths found in the configuration file.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` and anchor relative paths to `base`.
///
/// `-` is kept as is: it means "read from stdin".
pub fn resolve_data_path(raw: &str, base: &Path) -> PathBuf {
    if raw == "-" {
        return PathBuf::from(raw);
    }

    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    let p = PathBuf::from(raw);
    if p.is_absolute() { p } else { base.join(p) }
}
