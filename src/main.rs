//! rMapty main entrypoint.

use rmapty::run;
use rmapty::ui::messages::alert;

fn main() {
    if let Err(e) = run() {
        alert(format!("Error: {}", e));
        std::process::exit(1);
    }
}
