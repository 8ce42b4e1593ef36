use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate::set_notes;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

/// Set, clear or show the notes of one technology.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notes { id, text, clear } = cmd {
        let items = store::load(&cfg.store);

        match (text, clear) {
            (Some(t), _) => {
                let updated = set_notes(&items, *id, t);
                store::save(&cfg.store, &updated)?;
                success(format!("Notes updated for id {id}."));
            }
            (None, true) => {
                let updated = set_notes(&items, *id, "");
                store::save(&cfg.store, &updated)?;
                success(format!("Notes cleared for id {id}."));
            }
            (None, false) => match items.iter().find(|t| t.id == *id) {
                Some(t) if !t.notes.is_empty() => println!("{}", t.notes),
                Some(_) => println!("No notes yet."),
                None => println!("No technology with id {id}."),
            },
        }
    }
    Ok(())
}
