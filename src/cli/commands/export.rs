use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file, force } = cmd {
        let items = store::load(&cfg.store);
        ExportLogic::export(&items, *format, file, *force)?;
    }
    Ok(())
}
