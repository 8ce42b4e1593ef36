use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::debounce::Debouncer;
use crate::core::derive::filter_items;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;
use std::io::{self, BufRead};
use std::time::Duration;

/// Interactive search over the store. Each input line restarts the
/// debounce timer; results render only once typing has been quiet for the
/// configured period. EOF (Ctrl-D) quits and cancels any pending render.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search = cmd {
        let items = store::load(&cfg.store);

        info(format!(
            "Type to search ({} ms debounce). Empty line lists everything, Ctrl-D quits.",
            cfg.debounce_ms
        ));

        let snapshot = items.clone();
        let debouncer = Debouncer::new(Duration::from_millis(cfg.debounce_ms), move |query| {
            let hits = filter_items(&snapshot, &query, None);
            if hits.is_empty() {
                println!("No technologies found for '{query}'.");
                return;
            }
            for t in &hits {
                println!("[{:>3}] {:<30} {}", t.id, t.title, t.description);
            }
            println!("{} match(es)", hits.len());
        });

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            debouncer.submit(line.trim().to_string());
        }
        // debouncer dropped here: a pending render never fires after quit
    }
    Ok(())
}
