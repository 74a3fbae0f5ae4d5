#![forbid(unsafe_code)]

//! FitUI demo binary entry point.

use fitui_demo::app::{self, App};
use fitui_demo::cli;

fn main() {
    let opts = cli::Opts::parse();
    let app = App::new(opts.start_screen, opts.width);
    if let Err(e) = app::run(app, opts.exit_after_ms) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
