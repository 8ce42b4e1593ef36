use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::transfer::parse_import;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

/// Import a JSON document, fully replacing the store.
///
/// Any failure (unreadable file, non-array document, bad first element,
/// malformed entry) leaves the existing store untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let text = fs::read_to_string(&path)?;

        let imported = parse_import(&text)?;

        store::save(&cfg.store, &imported)?;
        success(format!("Imported {} technologies.", imported.len()));
    }
    Ok(())
}
