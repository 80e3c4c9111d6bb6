use crate::config;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

/// Characters escaped inside a single URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Connection URL for `DATABASE_PATH`.
///
/// Full DSNs (`sqlite:`, `postgres://`, `mysql://`) pass through; anything else is
/// taken as a SQLite file path and opened in read-write-create mode.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_string();
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}

/// The SQLite file behind `DATABASE_PATH`, if it names one.
///
/// `None` for in-memory databases and non-SQLite DSNs.
pub fn sqlite_file(path_or_url: &str) -> Option<PathBuf> {
    if path_or_url.starts_with("postgres://") || path_or_url.starts_with("mysql://") {
        return None;
    }
    let rest = path_or_url
        .strip_prefix("sqlite://")
        .or_else(|| path_or_url.strip_prefix("sqlite:"))
        .unwrap_or(path_or_url);
    let file = rest.split('?').next().unwrap_or(rest);
    if file.is_empty() || file == ":memory:" {
        None
    } else {
        Some(PathBuf::from(file))
    }
}

/// Global storage root (absolute), from `config::storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    absolute(PathBuf::from(config::storage_root()))
}

pub fn absolute(p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Makes a user-supplied name safe to use as one path segment.
///
/// Separators become `_`, and empty or dot-only names collapse to `_`.
pub fn sanitize_segment(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        cleaned
    }
}

/// Object key for a submission: `{folder}/{class}/{filename}`.
///
/// Only the final component of `file_name` is kept, so client paths such as
/// `C:\Users\me\tugas.pdf` store as `tugas.pdf`.
pub fn submission_key(folder: &str, class_name: &str, file_name: &str) -> String {
    format!(
        "{}/{}/{}",
        sanitize_segment(folder),
        sanitize_segment(class_name),
        sanitize_segment(base_name(file_name))
    )
}

/// Last component of a client-supplied file name, whichever separator it uses.
pub fn base_name(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or(file_name)
}

/// Resolves an object key under `root`, refusing anything that would escape it.
pub fn resolve_key(root: &Path, key: &str) -> Option<PathBuf> {
    let relative = Path::new(key);
    if key.is_empty() || relative.is_absolute() {
        return None;
    }
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    safe.then(|| root.join(relative))
}

/// Public URL under which an object key is served.
pub fn public_url(base_url: &str, key: &str) -> String {
    let encoded = key
        .split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/api/storage/{}", base_url.trim_end_matches('/'), encoded)
}
