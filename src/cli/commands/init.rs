use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the JSON store, seeded with the default technology list
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing techtrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Store       : {}", &cfg.store);

    if Path::new(&cfg.store).exists() {
        info("Store already present, keeping existing data.");
    } else {
        let seed = store::default_technologies();
        store::save(&cfg.store, &seed)?;
        success(format!("Store seeded with {} technologies.", seed.len()));
    }

    println!("🎉 techtrack initialization completed!");
    Ok(())
}
