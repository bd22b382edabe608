//! Expands a directory operand into one pending move per contained file.

use crate::errors::TossError;
use crate::fs::FileSystem;
use crate::models::{Direction, RecycleBin, TossEntry};
use std::path::Path;

/// Expands a resolved pair whose source is a directory.
///
/// Without the recursive flag this is an error. With it, every leaf file
/// under the source becomes its own pair; directory nodes themselves are
/// descended into but never emitted, their counterparts in the destination
/// tree are created lazily during the move step. The mapping is symmetric
/// in both directions: tossing mirrors each file under the root, recovery
/// strips the root prefix. Order follows directory iteration order.
pub fn expand(
    bin: &RecycleBin,
    entry: &TossEntry,
    direction: Direction,
    recursive: bool,
    fs: &dyn FileSystem,
) -> crate::Result<Vec<TossEntry>> {
    if !recursive {
        return Err(TossError::DirectoryNeedsRecursive(entry.source.clone()));
    }
    let mut pairs = Vec::new();
    walk(bin, &entry.source, direction, fs, &mut pairs)?;
    Ok(pairs)
}

fn walk(
    bin: &RecycleBin,
    dir: &Path,
    direction: Direction,
    fs: &dyn FileSystem,
    out: &mut Vec<TossEntry>,
) -> crate::Result<()> {
    for child in fs.list_dir(dir)? {
        if fs.is_dir(&child) {
            walk(bin, &child, direction, fs, out)?;
        } else {
            let pair = match direction {
                Direction::Toss => TossEntry::new(child.clone(), bin.mirror(&child)),
                Direction::Recover => TossEntry::new(child.clone(), bin.strip(&child)),
            };
            out.push(pair);
        }
    }
    Ok(())
}
