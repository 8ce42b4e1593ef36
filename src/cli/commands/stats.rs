use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive::{compute_category_stats, compute_stats};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{FG_GREEN, FG_GREY, FG_YELLOW, RESET, header};

/// Progress dashboard: overall counters, completion rate and (optionally)
/// the per-category breakdown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { by_category } = cmd {
        let items = store::load(&cfg.store);
        let stats = compute_stats(&items);

        header("Progress");
        println!("Total:        {}", stats.total);
        println!("Completed:    {FG_GREEN}{}{RESET}", stats.completed);
        println!("In progress:  {FG_YELLOW}{}{RESET}", stats.in_progress);
        println!("Not started:  {FG_GREY}{}{RESET}", stats.not_started);
        println!("Completion:   {}%", stats.completion_rate);

        if *by_category {
            println!();
            header("By category");
            for (category, c) in compute_category_stats(&items) {
                println!(
                    "{:<14} {}/{} ({}%)",
                    category,
                    c.completed,
                    c.total,
                    c.completion_rate()
                );
            }
        }

        println!();
        if stats.not_started > 0 {
            println!(
                "🎯 {} technologies not started yet, try `techtrack pick`.",
                stats.not_started
            );
        }
        if stats.in_progress > 0 {
            println!("⚡ {} in progress, keep going!", stats.in_progress);
        }
        if stats.total > 0 && stats.completion_rate >= 75 {
            println!("🏆 Great progress: {}% completed.", stats.completion_rate);
        }
    }
    Ok(())
}
