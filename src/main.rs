//! techtrack main entrypoint.

use techtrack::run;
use techtrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
