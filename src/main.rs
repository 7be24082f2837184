use iris::commands::ROOT_NAME;
use iris::error::is_unknown_command;
use std::process;

fn main() {
    if let Err(e) = iris::cli::run() {
        eprintln!("Error: {}", e);
        if is_unknown_command(&e) {
            eprintln!("Run '{} help' for usage.", ROOT_NAME);
        }
        process::exit(1);
    }
}
