use std::process;

use pwform::cli::CLI;

fn main() {
    env_logger::init();

    if let Err(error) = CLI::from_args().run() {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
