//! Bin listing: scan the mirrored tree, sort, render a table.

use crate::fs::FileSystem;
use crate::helpers::{format_change_time, human_size};
use crate::models::{BinItem, RecycleBin, SortKey};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Walks the bin recursively and collects one item per regular file, with
/// the root prefix stripped so rows show the original absolute path.
pub fn scan(bin: &RecycleBin, fs: &dyn FileSystem) -> crate::Result<Vec<BinItem>> {
    let mut items = Vec::new();
    collect(bin, bin.root(), fs, &mut items)?;
    Ok(items)
}

fn collect(
    bin: &RecycleBin,
    dir: &Path,
    fs: &dyn FileSystem,
    out: &mut Vec<BinItem>,
) -> crate::Result<()> {
    for child in fs.list_dir(dir)? {
        if fs.is_dir(&child) {
            collect(bin, &child, fs, out)?;
        } else {
            let meta = fs.metadata(&child)?;
            out.push(BinItem {
                relative_path: bin.strip(&child),
                change_time: meta.ctime(),
                size: meta.len(),
            });
        }
    }
    Ok(())
}

/// Sorts items in place for the requested order.
pub fn sort_items(items: &mut [BinItem], key: SortKey) {
    match key {
        SortKey::Recent => items.sort_by(|a, b| b.change_time.cmp(&a.change_time)),
        SortKey::Name => items.sort_by(|a, b| a.relative_path.cmp(&b.relative_path)),
        SortKey::Size => items.sort_by(|a, b| b.size.cmp(&a.size)),
    }
}

/// Renders the listing table, header included, one string per output line.
pub fn render(items: &[BinItem]) -> Vec<String> {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!("{:<30}{:<50}{}", "Date Tossed", "Filename", "Size"));
    lines.push("=".repeat(90));
    for item in items {
        lines.push(format!(
            "{:<30}{:<50}{}",
            format_change_time(item.change_time),
            item.relative_path.display(),
            human_size(item.size)
        ));
    }
    lines
}
