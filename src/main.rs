use clap::Parser;
use recipebook::core::config::{self, CliOverrides};
use recipebook::core::navigation::Destination;
use recipebook::core::state::App;
use recipebook::core::store::RecipeStore;
use recipebook::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "recipebook", about = "Terminal recipe book")]
struct Args {
    /// Route to open first (home, add_recipe, settings, recipe_detail/<id>)
    #[arg(long, value_name = "ROUTE")]
    start: Option<Destination>,

    /// Start with an empty recipe list
    #[arg(long)]
    no_seed: bool,

    /// Write the log here instead of recipebook.log
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let cli = CliOverrides {
        start: args.start,
        no_seed: args.no_seed,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Recipebook starting at {} (seeded: {})",
        resolved.start,
        resolved.seed_recipes
    );

    let store = if resolved.seed_recipes {
        RecipeStore::seeded()
    } else {
        RecipeStore::empty()
    };
    let app = App::from_config(Arc::new(store), &resolved);
    let config_path = config::config_path().map(|p| p.display().to_string());

    tui::run(app, config_path)
}
