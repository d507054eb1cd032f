use clap::Parser;
use treecsv2dot::app::{run_app, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
