use clap::Parser;
use std::process::exit;
use toss::cli::{self, Cli};
use toss::conflict::StdinPrompt;
use toss::fs::RealFileSystem;
use toss::models::RecycleBin;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version land on stdout and exit 0; real usage
            // errors exit 1 like every other failure.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            exit(code);
        }
    };

    let bin = match RecycleBin::from_home() {
        Ok(bin) => bin,
        Err(err) => {
            eprintln!("toss error: {err}");
            exit(1);
        }
    };
    if let Err(err) = bin.bootstrap() {
        eprintln!("cannot create recyclebin for unknown reason: {err}");
        exit(1);
    }

    let mut prompt = StdinPrompt;
    if let Err(err) = cli::run(&cli, &bin, &RealFileSystem, &mut prompt) {
        if err.is_filesystem() {
            eprintln!("filesystem error: {err}");
        } else {
            eprintln!("toss error: {err}");
        }
        exit(1);
    }
}
