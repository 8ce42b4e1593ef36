use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate::{add_resource, remove_resource};
use crate::core::validate::is_valid_url;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Resource { id, add, remove } = cmd {
        let items = store::load(&cfg.store);

        let updated = match (add, remove) {
            (Some(url), _) => {
                if !is_valid_url(url) {
                    return Err(AppError::Validation(format!(
                        "resource: invalid URL '{url}' (must start with http:// or https://)"
                    )));
                }
                add_resource(&items, *id, url)
            }
            (None, Some(url)) => remove_resource(&items, *id, url),
            (None, None) => {
                return Err(AppError::Other("pass --add or --remove".to_string()));
            }
        };

        store::save(&cfg.store, &updated)?;
        success(format!("Resources updated for id {id}."));
    }
    Ok(())
}
