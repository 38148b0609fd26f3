use std::fs::File;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;

use clap::Parser;
use pathpick::app::FilePicker;
use pathpick::cli::Cli;
use pathpick::infra::fs::RealFileSystem;
use tracing::Level;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(log_file) = &cli.log_file {
        init_logging(log_file, cli.verbose)?;
    }

    let editor_command = cli.editor_command(std::env::var("EDITOR").ok());
    let mut picker = FilePicker::new(
        Rc::new(RealFileSystem),
        cli.display_options(),
        cli.file.clone(),
    );

    pathpick::runtime::run(&mut picker, &editor_command)
}

/// Sends log events to `path` as plain text so they never draw over the
/// terminal UI.
fn init_logging(path: &Path, verbose: bool) -> io::Result<()> {
    let file = File::create(path)?;
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
