//! `toss` moves files and directories into a per-user recycle bin instead
//! of deleting them, and can list or recover what was tossed.
//!
//! The bin mirrors original absolute paths under a fixed root
//! (`<home>/recyclebin`), so `/tmp/a.txt` is stored at
//! `<root>/tmp/a.txt` and no two files can collide however they are named.
//! The mirrored tree is the only state: there is no metadata database.

pub mod cli;
pub mod conflict;
pub mod errors;
pub mod expand;
pub mod fs;
pub mod helpers;
pub mod list;
pub mod models;
pub mod resolver;

pub use errors::{Result, TossError};
pub use fs::{FileSystem, RealFileSystem};
pub use helpers::{format_change_time, human_size, is_relative_path, mirror_path, strip_root};
pub use models::{BinItem, Direction, RecycleBin, SortKey, TossEntry, BIN_DIR_NAME};

/// Re-export a small stable API surface for the binary and for tests.
pub mod prelude {
    pub use crate::{
        cli::{run, Cli},
        conflict::{ConfirmPrompt, StdinPrompt},
        errors::{Result, TossError},
        fs::{FileSystem, RealFileSystem},
        helpers::*,
        models::*,
    };
}
