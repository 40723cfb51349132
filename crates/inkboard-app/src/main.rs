//! Headless replay entry point.

use clap::{CommandFactory, FromArgMatches};
use inkboard_app::{AppResult, CliArgs, Script, Session, ShortcutRegistry};
use inkboard_core::{BoardConfig, FileStorage, Storage};

fn run(args: CliArgs) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let storage: Box<dyn Storage> = match &args.data_dir {
        Some(dir) => Box::new(FileStorage::new(dir.clone())?),
        None => Box::new(FileStorage::default_location()?),
    };
    let script = Script::load(&args.script)?;
    let document = args.document_id();

    let mut session = Session::open(config, storage, &document)?;
    let summary = session.run(&script);
    log::info!(
        "Replayed {} steps ({} rejected), {} saves ({} failed), {} elements in {}",
        summary.steps,
        summary.rejected,
        summary.saves,
        summary.failed_saves,
        session.board().elements().len(),
        document
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = CliArgs::command().after_help(ShortcutRegistry::help()).get_matches();
    let args = CliArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    log::info!("Starting Inkboard");
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
