//! Mirrored-path arithmetic and display helpers shared across the crate.

use chrono::{Local, TimeZone};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Returns true when the input string should be resolved against the
/// current working directory. Anything starting with `/`, `~` or `\` is
/// taken as given, without tilde expansion.
pub fn is_relative_path(input: &str) -> bool {
    !input.starts_with('/') && !input.starts_with('~') && !input.starts_with('\\')
}

/// Appends an absolute path to the bin root at the string level, preserving
/// the leading separator: `/home/u/recyclebin` + `/tmp/a` =
/// `/home/u/recyclebin/tmp/a`. This mirrored scheme replicates the original
/// absolute path under the root, so same-named files from different
/// directories never collide inside the bin.
pub fn mirror_path(root: &Path, abs: &Path) -> PathBuf {
    let mut joined = OsString::from(root.as_os_str());
    joined.push(abs.as_os_str());
    PathBuf::from(joined)
}

/// Inverse of [`mirror_path`]: strips the bin root prefix at the string
/// level, yielding the original absolute path. A path not under the root is
/// returned unchanged.
pub fn strip_root(root: &Path, path: &Path) -> PathBuf {
    let root_str = root.to_string_lossy();
    let path_str = path.to_string_lossy();
    match path_str.strip_prefix(&*root_str) {
        Some(rest) => PathBuf::from(rest),
        None => path.to_path_buf(),
    }
}

/// Human readable size rendering for bin listings.
///
/// Binary multiples; the mantissa is rounded up to the nearest 0.1 and
/// printed with one decimal digit. When the chosen unit is larger than
/// bytes, the raw count follows in parentheses.
pub fn human_size(bytes: u64) -> String {
    const SUFFIXES: [char; 7] = ['B', 'K', 'M', 'G', 'T', 'P', 'E'];
    let mut mantissa = bytes as f64;
    let mut idx = 0usize;

    while mantissa >= 1024.0 && idx < SUFFIXES.len() - 1 {
        mantissa /= 1024.0;
        idx += 1;
    }
    mantissa = (mantissa * 10.0).ceil() / 10.0;

    if idx == 0 {
        format!("{mantissa:.1}{}", SUFFIXES[idx])
    } else {
        format!("{mantissa:.1}{} ({bytes})", SUFFIXES[idx])
    }
}

/// Formats a unix change time as a ctime-style local timestamp, whole
/// seconds, without the trailing newline `ctime(3)` would produce.
pub fn format_change_time(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format("%a %b %e %H:%M:%S %Y").to_string())
        .unwrap_or_else(|| "????".to_string())
}
