//! Per-entry conflict handling: decide, confirm, then hand off to the
//! filesystem primitive.

use crate::errors::TossError;
use crate::fs::FileSystem;
use crate::models::{Direction, TossEntry};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// What to do with one resolved entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Decision {
    /// Move without asking.
    Proceed,
    /// Recovery would overwrite an existing destination; ask first.
    ConfirmOverwrite,
}

/// Decides the fate of one entry.
///
/// A missing source fails the entry with a direction-specific message.
/// An existing destination only matters on unforced recovery; tossing into
/// the bin never prompts because the mirrored scheme cannot collide.
pub fn decide(
    entry: &TossEntry,
    direction: Direction,
    force: bool,
    fs: &dyn FileSystem,
) -> crate::Result<Decision> {
    if !fs.exists(&entry.source) {
        return Err(match direction {
            Direction::Recover => TossError::NotFoundInBin(entry.source.clone()),
            Direction::Toss => TossError::NotFound(entry.source.clone()),
        });
    }
    if fs.exists(&entry.destination) && direction == Direction::Recover && !force {
        return Ok(Decision::ConfirmOverwrite);
    }
    Ok(Decision::Proceed)
}

/// Performs the move: ensure the destination's parent exists, then rename.
pub fn apply(entry: &TossEntry, fs: &dyn FileSystem) -> crate::Result<()> {
    if let Some(parent) = entry.destination.parent() {
        fs.create_dir_all(parent)?;
    }
    fs.rename(&entry.source, &entry.destination)
}

/// Interactive confirmation seam, so the driver can be tested without a tty.
pub trait ConfirmPrompt {
    /// Asks whether the existing destination may be replaced. Accepts a
    /// case-insensitive `y` or `yes`.
    fn confirm_overwrite(&mut self, destination: &Path) -> crate::Result<bool>;
}

/// Production prompt reading one line from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm_overwrite(&mut self, destination: &Path) -> crate::Result<bool> {
        println!(
            "There currently exists a file you want to replace: {}",
            destination.display()
        );
        println!("Are you sure you want to replace this? (y/n)");
        io::stdout()
            .flush()
            .map_err(|err| TossError::io(PathBuf::from("stdout"), err))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|err| TossError::io(PathBuf::from("stdin"), err))?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Resolves and executes one entry end to end. A declined overwrite aborts
/// the whole run, not just this entry.
pub fn settle(
    entry: &TossEntry,
    direction: Direction,
    force: bool,
    fs: &dyn FileSystem,
    prompt: &mut dyn ConfirmPrompt,
) -> crate::Result<()> {
    match decide(entry, direction, force, fs)? {
        Decision::Proceed => apply(entry, fs),
        Decision::ConfirmOverwrite => {
            if prompt.confirm_overwrite(&entry.destination)? {
                apply(entry, fs)
            } else {
                Err(TossError::OverwriteDeclined(entry.destination.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs::Metadata;
    use std::sync::Mutex;

    /// Scripted filesystem: a set of existing paths plus a record of renames.
    struct FakeFs {
        existing: Mutex<HashSet<PathBuf>>,
        renames: Mutex<Vec<(PathBuf, PathBuf)>>,
    }

    impl FakeFs {
        fn with(paths: &[&str]) -> Self {
            Self {
                existing: Mutex::new(paths.iter().map(PathBuf::from).collect()),
                renames: Mutex::new(Vec::new()),
            }
        }

        fn rename_count(&self) -> usize {
            self.renames.lock().unwrap().len()
        }
    }

    impl FileSystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.existing.lock().unwrap().contains(path)
        }

        fn is_dir(&self, _path: &Path) -> bool {
            false
        }

        fn metadata(&self, path: &Path) -> crate::Result<Metadata> {
            Err(TossError::io(
                path,
                io::Error::new(io::ErrorKind::Unsupported, "not scripted"),
            ))
        }

        fn create_dir_all(&self, _path: &Path) -> crate::Result<()> {
            Ok(())
        }

        fn rename(&self, from: &Path, to: &Path) -> crate::Result<()> {
            let mut existing = self.existing.lock().unwrap();
            existing.remove(from);
            existing.insert(to.to_path_buf());
            self.renames
                .lock()
                .unwrap()
                .push((from.to_path_buf(), to.to_path_buf()));
            Ok(())
        }

        fn list_dir(&self, path: &Path) -> crate::Result<Vec<PathBuf>> {
            Err(TossError::io(
                path,
                io::Error::new(io::ErrorKind::Unsupported, "not scripted"),
            ))
        }
    }

    struct ScriptedPrompt {
        answer: bool,
        asked: usize,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self { answer, asked: 0 }
        }
    }

    impl ConfirmPrompt for ScriptedPrompt {
        fn confirm_overwrite(&mut self, _destination: &Path) -> crate::Result<bool> {
            self.asked += 1;
            Ok(self.answer)
        }
    }

    fn entry() -> TossEntry {
        TossEntry::new("/bin-root/tmp/a.txt", "/tmp/a.txt")
    }

    #[test]
    fn missing_toss_source_fails_entry() {
        let fs = FakeFs::with(&[]);
        let entry = TossEntry::new("/tmp/a.txt", "/bin-root/tmp/a.txt");
        let err = decide(&entry, Direction::Toss, false, &fs).expect_err("missing");
        assert!(matches!(err, TossError::NotFound(_)));
    }

    #[test]
    fn missing_recover_source_fails_with_bin_message() {
        let fs = FakeFs::with(&[]);
        let err = decide(&entry(), Direction::Recover, false, &fs).expect_err("missing");
        assert!(matches!(err, TossError::NotFoundInBin(_)));
    }

    #[test]
    fn fresh_destination_proceeds() {
        let fs = FakeFs::with(&["/bin-root/tmp/a.txt"]);
        let decision = decide(&entry(), Direction::Recover, false, &fs).expect("decide");
        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn occupied_destination_on_unforced_recovery_asks() {
        let fs = FakeFs::with(&["/bin-root/tmp/a.txt", "/tmp/a.txt"]);
        let decision = decide(&entry(), Direction::Recover, false, &fs).expect("decide");
        assert_eq!(decision, Decision::ConfirmOverwrite);
    }

    #[test]
    fn force_skips_the_question() {
        let fs = FakeFs::with(&["/bin-root/tmp/a.txt", "/tmp/a.txt"]);
        let decision = decide(&entry(), Direction::Recover, true, &fs).expect("decide");
        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn occupied_destination_while_tossing_proceeds() {
        // The mirrored scheme makes toss collisions structural, not prompted.
        let fs = FakeFs::with(&["/tmp/a.txt", "/bin-root/tmp/a.txt"]);
        let entry = TossEntry::new("/tmp/a.txt", "/bin-root/tmp/a.txt");
        let decision = decide(&entry, Direction::Toss, false, &fs).expect("decide");
        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn settle_moves_on_accept() {
        let fs = FakeFs::with(&["/bin-root/tmp/a.txt", "/tmp/a.txt"]);
        let mut prompt = ScriptedPrompt::answering(true);
        settle(&entry(), Direction::Recover, false, &fs, &mut prompt).expect("settle");
        assert_eq!(prompt.asked, 1);
        assert_eq!(fs.rename_count(), 1);
    }

    #[test]
    fn settle_aborts_without_moving_on_decline() {
        let fs = FakeFs::with(&["/bin-root/tmp/a.txt", "/tmp/a.txt"]);
        let mut prompt = ScriptedPrompt::answering(false);
        let err = settle(&entry(), Direction::Recover, false, &fs, &mut prompt)
            .expect_err("declined");
        assert!(matches!(err, TossError::OverwriteDeclined(_)));
        assert_eq!(fs.rename_count(), 0);
    }
}
