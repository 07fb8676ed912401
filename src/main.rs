//! visitor-kiosk main entrypoint.

use visitor_kiosk::run;
use visitor_kiosk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
