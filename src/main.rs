mod cipher;
mod cli;
mod errors;
mod filesystem;
mod menu;


use cipher::CipherManager;
use cli::{Cli, Commands};
use errors::CipherError;

use clap::Parser;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Classical shift and digraph text ciphers with file-based workflows
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CipherError> {
    let manager = CipherManager::new();
    let cipher = cli.settings.cipher();
    tracing::debug!(%cipher, "resolved cipher settings");

    match cli.command {
        Commands::Encrypt {
            input,
            output,
            force,
        } => manager.encrypt_to_file(&cipher, &input, &output, force),
        Commands::Decrypt {
            source,
            output,
            force,
        } => manager.decrypt_to_file(&cipher, &source, &output, force),
        Commands::Show { source } => manager.show_file(&cipher, &source, &mut io::stdout().lock()),
        Commands::List { dir } => manager.list_files(&dir, &mut io::stdout().lock()),
        Commands::Table => {
            manager.print_table(&cli.settings.key);
            Ok(())
        }
        Commands::Menu => menu::main_menu(&manager, &cli.settings),
    }
}

/// Log to stderr; TEXT_CIPHER_LOG overrides the -v derived level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("TEXT_CIPHER_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
