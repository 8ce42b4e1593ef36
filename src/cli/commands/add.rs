use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate::add_item;
use crate::core::validate::{Draft, validate};
use crate::errors::AppResult;
use crate::models::{Status, Technology, next_id};
use crate::store;
use crate::ui::messages::success;

/// Add a new technology.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        description,
        category,
        tags,
        resources,
        start,
    } = cmd
    {
        //
        // 1. Validate the draft (all problems reported at once)
        //
        let draft = Draft {
            title: title.clone(),
            description: description.clone(),
            category: category.clone().unwrap_or_else(|| cfg.default_category.clone()),
            tags: tags.clone(),
            resources: resources.clone(),
        };
        validate(&draft)?;

        //
        // 2. Build the item; ids are max + 1
        //
        let items = store::load(&cfg.store);
        let id = next_id(&items);

        let status = if *start { Status::InProgress } else { Status::NotStarted };
        let mut tech = Technology::new(
            id,
            draft.title.trim(),
            draft.description.trim(),
            status,
            draft.category.trim(),
        );
        tech.tags = draft.tags.iter().map(|t| t.trim().to_string()).collect();
        tech.resources = draft.resources.clone();

        //
        // 3. Persist the whole list
        //
        let updated = add_item(&items, tech);
        store::save(&cfg.store, &updated)?;

        success(format!("Added '{}' with id {id}.", title.trim()));
    }
    Ok(())
}
