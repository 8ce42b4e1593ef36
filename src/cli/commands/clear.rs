use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

/// Delete every technology by removing the store document. The next load
/// falls back to the seeded defaults.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("This removes every technology and cannot be undone.");
            print!("Continue? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            let ans = answer.trim().to_ascii_lowercase();
            if ans != "y" && ans != "yes" {
                info("Nothing removed.");
                return Ok(());
            }
        }

        store::clear(&cfg.store)?;
        success("All data removed.");
    }
    Ok(())
}
