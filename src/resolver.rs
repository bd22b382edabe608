//! Maps a user-supplied path string to a `(source, destination)` pair.

use crate::errors::TossError;
use crate::helpers::is_relative_path;
use crate::models::{Direction, RecycleBin, TossEntry};
use std::path::{Path, PathBuf};

/// Resolves one input string into a pending move.
///
/// Purely a string/path transformation: no existence check happens here.
/// Relative inputs are resolved against `cwd`; inputs starting with `/`,
/// `~` or `\` are used as given, without tilde expansion. Tossing maps
/// `abs` to `root + abs`; recovering is the exact inverse.
pub fn resolve(
    bin: &RecycleBin,
    cwd: &Path,
    input: &str,
    direction: Direction,
) -> crate::Result<TossEntry> {
    if bin.contains_input(input) {
        return Err(TossError::PathConflict(bin.root().to_path_buf()));
    }

    let abs = if is_relative_path(input) {
        cwd.join(input)
    } else {
        PathBuf::from(input)
    };

    Ok(match direction {
        Direction::Toss => TossEntry::new(abs.clone(), bin.mirror(&abs)),
        Direction::Recover => TossEntry::new(bin.mirror(&abs), abs),
    })
}
