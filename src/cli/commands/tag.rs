use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate::{add_tag, remove_tag};
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tag { id, add, remove } = cmd {
        let items = store::load(&cfg.store);

        let updated = match (add, remove) {
            (Some(tag), _) => {
                if tag.trim().is_empty() {
                    return Err(AppError::Validation("tag: empty".to_string()));
                }
                add_tag(&items, *id, tag)
            }
            (None, Some(tag)) => remove_tag(&items, *id, tag),
            (None, None) => {
                return Err(AppError::Other("pass --add or --remove".to_string()));
            }
        };

        store::save(&cfg.store, &updated)?;
        success(format!("Tags updated for id {id}."));
    }
    Ok(())
}
