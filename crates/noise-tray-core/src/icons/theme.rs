//! Freedesktop icon theme lookups.
//!
//! A minimal raster-only subset of the icon theme spec: themes are scanned
//! for `<name>.png` without parsing `index.theme`. The tray surface wants
//! pixel buffers, so vector icons are skipped on purpose.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::trace;

/// Theme trees nest context and size directories a few levels deep.
const MAX_SCAN_DEPTH: usize = 4;

/// One icon theme rooted at the session's standard icon directories.
#[derive(Debug, Clone)]
pub struct IconTheme {
    name: String,
    roots: Vec<PathBuf>,
}

impl IconTheme {
    /// Theme `name` rooted at the standard icon directories.
    ///
    /// Roots that do not exist are dropped up front; a theme with no roots
    /// simply resolves nothing.
    pub fn named(name: &str) -> Self {
        let roots = icon_roots()
            .into_iter()
            .map(|root| root.join(name))
            .filter(|root| root.is_dir())
            .collect();

        Self {
            name: name.to_string(),
            roots,
        }
    }

    /// Theme with explicit roots.
    pub fn with_roots(name: &str, roots: Vec<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            roots,
        }
    }

    /// Theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the theme carries `icon_name` at any size.
    pub fn has_icon(&self, icon_name: &str) -> bool {
        self.lookup(icon_name).is_some()
    }

    /// Resolve `icon_name` to an absolute file path.
    pub fn lookup(&self, icon_name: &str) -> Option<PathBuf> {
        let file_name = format!("{icon_name}.png");
        self.roots
            .iter()
            .find_map(|root| find_file(root, &file_name, 0))
    }

    /// Resolve both names, all-or-nothing.
    pub fn lookup_pair(&self, first: &str, second: &str) -> Option<(PathBuf, PathBuf)> {
        Some((self.lookup(first)?, self.lookup(second)?))
    }
}

/// Icon theme configured for the desktop session, from the GTK settings
/// file. `None` when unset or unreadable.
pub fn session_theme_name() -> Option<String> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    let settings = fs::read_to_string(config_home.join("gtk-3.0/settings.ini")).ok()?;

    settings.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        (key.trim() == "gtk-icon-theme-name").then(|| value.trim().trim_matches('"').to_string())
    })
}

/// Standard per-session icon roots: `$HOME/.icons`, then every
/// `$XDG_DATA_DIRS/icons`, then the pixmaps directory.
fn icon_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(home) = std::env::var_os("HOME") {
        roots.push(PathBuf::from(home).join(".icons"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
    for dir in data_dirs.split(':').filter(|dir| !dir.is_empty()) {
        roots.push(PathBuf::from(dir).join("icons"));
    }

    roots.push(PathBuf::from("/usr/share/pixmaps"));
    roots
}

/// Depth-limited scan for `file_name` under `dir`.
fn find_file(dir: &Path, file_name: &str, depth: usize) -> Option<PathBuf> {
    if depth > MAX_SCAN_DEPTH {
        return None;
    }

    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.file_name().and_then(|name| name.to_str()) == Some(file_name) {
            trace!(path = ?path, "Icon file found");
            return Some(path);
        }
    }

    subdirs
        .into_iter()
        .find_map(|sub| find_file(&sub, file_name, depth + 1))
}
