//! deskwall CLI
//!
//! Resolves the command line into wallpaper preferences, writes them to the
//! Dock's preference store in one transaction, then asks the Dock to
//! restart so they take effect.

use clap::Parser;
use deskwall_core::logging;
use deskwall_store::StoreError;

mod args;
mod notify;

/// Store location relative to the user's home directory.
const STORE_RELATIVE_PATH: &str = "Library/Application Support/Dock/desktoppicture.db";

// Exit codes are the program's only contract beyond the store's contents.
const EXIT_USAGE: i32 = 1;
const EXIT_STORE_OPEN: i32 = 2;
const EXIT_STORE_WRITE: i32 = 3;
const EXIT_STORE_ROLLBACK: i32 = 4;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    logging::init();

    let cli = match args::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version short-circuit successfully
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return code;
        }
    };

    let store_path = match &cli.db {
        Some(path) => path.clone(),
        None => match dirs::home_dir() {
            Some(home) => home.join(STORE_RELATIVE_PATH),
            None => {
                eprintln!("error opening preference store: cannot determine home directory");
                return EXIT_STORE_OPEN;
            }
        },
    };

    let prefs = match deskwall_core::resolve(&cli.decode()) {
        Ok(prefs) => prefs,
        Err(err) => {
            eprintln!("{err}");
            return EXIT_USAGE;
        }
    };

    let mut conn = match deskwall_store::db::open(&store_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("{err}");
            return EXIT_STORE_OPEN;
        }
    };

    if let Err(err) = deskwall_store::apply(&mut conn, &prefs) {
        eprintln!("{err}");
        return match err {
            StoreError::Rollback { .. } => EXIT_STORE_ROLLBACK,
            _ => EXIT_STORE_WRITE,
        };
    }

    notify::refresh_dock();

    0
}
