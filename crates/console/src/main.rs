//! `shelfkeep` binary entry point.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use clap::Parser;

use shelfkeep_catalog::CatalogStore;
use shelfkeep_console::{AppState, Cli, ConsoleConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from(Cli::parse());
    shelfkeep_observability::init(&config.tracing);

    let store = if config.seed {
        CatalogStore::seeded().context("failed to load the sample catalog")?
    } else {
        CatalogStore::new()
    };
    tracing::info!(books = store.list_all().len(), "catalog ready");

    let input: Box<dyn BufRead> = match &config.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(AppState::new(store), input, io::stdout().lock(), config.output);
    session.run().context("console session failed")?;
    Ok(())
}
