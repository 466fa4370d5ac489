use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use roster_core::config::RosterConfig;
use roster_core::store::FileStore;

pub fn run(config: &RosterConfig, data_path: &Path) -> Result<()> {
    let store = FileStore::new(data_path);

    println!("{} {}", "config: ".dimmed(), RosterConfig::config_path()?.display());
    println!("{} {}", "data:   ".dimmed(), store.dir().display());
    println!("{} {}", "roster: ".dimmed(), store.path_for(&config.storage_key).display());

    Ok(())
}
