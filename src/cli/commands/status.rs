use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate::{bulk_set_status, mark_all_completed, reset_all_statuses};
use crate::errors::{AppError, AppResult};
use crate::models::Status;
use crate::store;
use crate::ui::messages::success;

/// Set the status of one id, a set of ids, or the whole store.
/// Unknown ids are silent no-ops.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { status, ids, all } = cmd {
        if !*all && ids.is_empty() {
            return Err(AppError::Other(
                "nothing selected: pass --id or --all".to_string(),
            ));
        }

        let items = store::load(&cfg.store);

        let updated = if *all {
            match status {
                Status::Completed => mark_all_completed(&items),
                Status::NotStarted => reset_all_statuses(&items),
                Status::InProgress => {
                    let every: Vec<i64> = items.iter().map(|t| t.id).collect();
                    bulk_set_status(&items, &every, *status)
                }
            }
        } else {
            bulk_set_status(&items, ids, *status)
        };

        store::save(&cfg.store, &updated)?;

        if *all {
            success(format!(
                "Status '{}' applied to all {} technologies.",
                status.as_str(),
                updated.len()
            ));
        } else {
            success(format!("Status updated to '{}'.", status.as_str()));
        }
    }
    Ok(())
}
