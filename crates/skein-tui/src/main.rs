//! Standalone player binary.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use skein_tui::app::App;

#[derive(Parser)]
#[command(
    name = "skein-tui",
    about = "Terminal player for branching stories",
    version
)]
struct Args {
    /// Path to the story JSON file
    story: PathBuf,
}

fn main() {
    let args = Args::parse();

    let story = match skein_core::load_story(&args.story) {
        Ok(story) => story,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let app = App::new(story);

    if let Err(e) = skein_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
