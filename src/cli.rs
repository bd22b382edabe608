//! Command-line definition and the top-level driver.

use crate::conflict::{self, ConfirmPrompt};
use crate::errors::TossError;
use crate::expand;
use crate::fs::FileSystem;
use crate::list;
use crate::models::{Direction, RecycleBin, SortKey, TossEntry};
use crate::resolver;
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Move files into a per-user recycle bin instead of deleting them.
#[derive(Parser, Debug)]
#[command(name = "toss", version, about)]
pub struct Cli {
    /// Force toss or force recover files from recycle bin
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// List items in recycle bin by most recent
    #[arg(short = 'l', long = "list", visible_alias = "list-recent")]
    pub list: bool,

    /// List items in recycle bin by size
    #[arg(long = "list-size", alias = "ls")]
    pub list_size: bool,

    /// List items in recycle bin by name
    #[arg(long = "list-name", alias = "ln")]
    pub list_name: bool,

    /// Enable regex matching for files to toss/recover (accepted, not yet
    /// wired to any behavior)
    #[arg(short = 'g', long = "regex", alias = "reg")]
    pub regex: bool,

    /// Recursively toss directories into the recycle bin
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Recover or restore a file
    #[arg(short = 'c', long = "recover", visible_alias = "restore")]
    pub recover: bool,

    /// Files or directories to toss into recycle bin
    pub files: Vec<String>,
}

impl Cli {
    /// Listing order requested by the flags, if any. When several flags are
    /// set only one is honored: recency first, then name, then size.
    pub fn sort_key(&self) -> Option<SortKey> {
        if self.list {
            Some(SortKey::Recent)
        } else if self.list_name {
            Some(SortKey::Name)
        } else if self.list_size {
            Some(SortKey::Size)
        } else {
            None
        }
    }

    pub fn direction(&self) -> Direction {
        if self.recover {
            Direction::Recover
        } else {
            Direction::Toss
        }
    }
}

/// Runs one invocation against an already bootstrapped bin.
///
/// Listing is terminal: when a list flag is set the table is printed and
/// nothing else happens. Otherwise inputs are resolved and expanded into a
/// flat queue first, then the queue is drained entry by entry; the first
/// failure aborts the run and already-moved entries stay moved.
pub fn run(
    cli: &Cli,
    bin: &RecycleBin,
    fs: &dyn FileSystem,
    prompt: &mut dyn ConfirmPrompt,
) -> crate::Result<()> {
    if let Some(key) = cli.sort_key() {
        let mut items = list::scan(bin, fs)?;
        list::sort_items(&mut items, key);
        for line in list::render(&items) {
            println!("{line}");
        }
        return Ok(());
    }

    if cli.files.is_empty() {
        return Err(TossError::usage("no files provided"));
    }

    let direction = cli.direction();
    let cwd = env::current_dir().map_err(|err| TossError::io(PathBuf::from("."), err))?;

    let mut entries: Vec<TossEntry> = Vec::new();
    for input in &cli.files {
        let entry = resolver::resolve(bin, &cwd, input, direction)?;
        if fs.is_dir(&entry.source) {
            entries.extend(expand::expand(bin, &entry, direction, cli.recursive, fs)?);
        } else {
            entries.push(entry);
        }
    }

    println!("all caught files");
    for entry in &entries {
        println!(
            "src: {} ----- dest: {}",
            entry.source.display(),
            entry.destination.display()
        );
    }

    for entry in &entries {
        conflict::settle(entry, direction, cli.force, fs, prompt)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse")
    }

    #[test]
    fn flag_aliases_are_accepted() {
        assert!(parse(&["toss", "-f", "a"]).force);
        assert!(parse(&["toss", "--force", "a"]).force);
        assert!(parse(&["toss", "--list-recent"]).list);
        assert!(parse(&["toss", "--ls"]).list_size);
        assert!(parse(&["toss", "--ln"]).list_name);
        assert!(parse(&["toss", "--reg", "a"]).regex);
        assert!(parse(&["toss", "--restore", "a"]).recover);
        assert!(parse(&["toss", "-r", "a"]).recursive);
    }

    #[test]
    fn positional_paths_are_collected_in_order() {
        let cli = parse(&["toss", "a", "b", "c"]);
        assert_eq!(cli.files, vec!["a", "b", "c"]);
    }

    #[test]
    fn listing_precedence_is_recent_then_name_then_size() {
        let cli = parse(&["toss", "--list", "--list-name", "--list-size"]);
        assert_eq!(cli.sort_key(), Some(SortKey::Recent));

        let cli = parse(&["toss", "--list-name", "--list-size"]);
        assert_eq!(cli.sort_key(), Some(SortKey::Name));

        let cli = parse(&["toss", "--list-size"]);
        assert_eq!(cli.sort_key(), Some(SortKey::Size));

        assert_eq!(parse(&["toss", "a"]).sort_key(), None);
    }

    #[test]
    fn direction_follows_the_recover_flag() {
        assert_eq!(parse(&["toss", "a"]).direction(), Direction::Toss);
        assert_eq!(parse(&["toss", "-c", "a"]).direction(), Direction::Recover);
    }
}
