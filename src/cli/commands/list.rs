use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive::filter_items;
use crate::errors::AppResult;
use crate::models::Technology;
use crate::store;
use crate::ui::messages::colored_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search, status } = cmd {
        let items = store::load(&cfg.store);
        let needle = search.as_deref().unwrap_or("");
        let filtered = filter_items(&items, needle, status.to_status());

        if filtered.is_empty() {
            println!("No technologies found. Try a different search or filter.");
            return Ok(());
        }

        print_items(&filtered);
        println!("\n{} of {} technologies", filtered.len(), items.len());
    }
    Ok(())
}

pub(crate) fn print_items(items: &[Technology]) {
    for t in items {
        println!(
            "[{:>3}] {:<30} {:<22} {}",
            t.id,
            t.title,
            colored_status(t.status),
            t.category
        );
        if !t.description.is_empty() {
            println!("      {}", t.description);
        }
        if !t.tags.is_empty() {
            println!("      tags: {}", t.tags.join(", "));
        }
        if !t.notes.is_empty() {
            println!("      notes: {}", t.notes);
        }
        for r in &t.resources {
            println!("      → {}", r);
        }
    }
}
