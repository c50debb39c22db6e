use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use sqlfix::FileStatus;

/// sqlfix - rewrites SELECT projection lists inside triple-quoted SQL
/// string literals, one column per indented line.
#[derive(Parser, Debug)]
#[command(name = "sqlfix", version, about)]
struct Cli {
    /// Source file to rewrite in place.
    filename: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(_) => {
            println!("Usage: sqlfix <FILENAME>");
            process::exit(1);
        }
    };

    match sqlfix::rewrite_file(&cli.filename) {
        Ok(FileStatus::Changed) => {
            println!("Fixed SQL formatting in {}", cli.filename.display());
        }
        Ok(FileStatus::Unchanged) => {
            println!("No SQL formatting fixes needed in {}", cli.filename.display());
        }
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}
