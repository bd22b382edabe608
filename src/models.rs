use crate::errors::TossError;
use crate::helpers::{mirror_path, strip_root};
use std::env;
use std::ffi::CStr;
use std::fs::DirBuilder;
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

/// Name of the bin directory created under the user's home.
pub const BIN_DIR_NAME: &str = "recyclebin";

/// Direction of a run. Threaded explicitly through resolution, expansion
/// and conflict handling; never re-derived from path prefixes mid-walk.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Toss,
    Recover,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toss => "toss",
            Self::Recover => "recover",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One pending move. Exactly one of the two paths lies under the bin root
/// and equals the root plus the other side's absolute path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TossEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl TossEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// One row of a bin listing, derived from filesystem metadata at scan time.
/// Nothing is persisted beyond the mirrored tree itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BinItem {
    /// Path with the bin root prefix stripped, i.e. the original absolute path.
    pub relative_path: PathBuf,
    /// Unix change time in whole seconds.
    pub change_time: i64,
    pub size: u64,
}

/// Sort order for bin listings. When several listing flags are given only
/// one is honored, in the fixed precedence recent, name, size.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortKey {
    /// Most recent change time first.
    Recent,
    /// Path ascending.
    Name,
    /// Size descending.
    Size,
}

/// The recycle bin root, computed once at startup and passed explicitly
/// into every component that needs it.
#[derive(Debug, Clone)]
pub struct RecycleBin {
    root: PathBuf,
}

impl RecycleBin {
    /// Bin rooted at an explicit directory. Used by tests and by callers
    /// that already know where the bin lives.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Bin rooted at `<home>/recyclebin`, where home comes from `$HOME` or,
    /// when that is unset or empty, the user's passwd record.
    pub fn from_home() -> crate::Result<Self> {
        let home = env::var("HOME")
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(home_from_passwd)
            .ok_or_else(|| TossError::usage("cannot determine home directory"))?;
        Ok(Self::at(Path::new(&home).join(BIN_DIR_NAME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the bin root with mode 0775. An already existing root is
    /// fine; any other creation failure is fatal.
    pub fn bootstrap(&self) -> crate::Result<()> {
        let mut builder = DirBuilder::new();
        builder.mode(0o775);
        match builder.create(&self.root) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(TossError::io(&self.root, err)),
        }
    }

    /// String-level prefix test used to reject operands that already name
    /// a location inside the bin.
    pub fn contains_input(&self, input: &str) -> bool {
        input.starts_with(&*self.root.to_string_lossy())
    }

    /// Maps an absolute path to its slot under the bin root.
    pub fn mirror(&self, abs: &Path) -> PathBuf {
        mirror_path(&self.root, abs)
    }

    /// Maps a path under the bin root back to its original absolute path.
    pub fn strip(&self, path: &Path) -> PathBuf {
        strip_root(&self.root, path)
    }
}

fn home_from_passwd() -> Option<String> {
    // getpwuid reads static storage; fine in this single-threaded tool.
    unsafe {
        let record = libc::getpwuid(libc::getuid());
        if record.is_null() {
            return None;
        }
        let dir = (*record).pw_dir;
        if dir.is_null() {
            return None;
        }
        Some(CStr::from_ptr(dir).to_string_lossy().into_owned())
    }
}
