use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive::pick_not_started;
use crate::core::mutate::set_status;
use crate::errors::AppResult;
use crate::models::Status;
use crate::store;
use crate::ui::messages::{info, success};

/// Random pick: suggest a not-started technology and mark it in-progress.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pick { dry_run } = cmd {
        let items = store::load(&cfg.store);

        let mut rng = rand::rng();
        let Some(pick) = pick_not_started(&items, &mut rng) else {
            info("Every technology has been started: nothing left to pick.");
            return Ok(());
        };

        println!("🎯 {}: {}", pick.title, pick.description);

        if !*dry_run {
            let updated = set_status(&items, pick.id, Status::InProgress);
            store::save(&cfg.store, &updated)?;
            success(format!("'{}' marked as in-progress.", pick.title));
        }
    }
    Ok(())
}
