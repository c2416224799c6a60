use clap::Parser;
use log::info;
use oneclass_experiments::experiment::{self, ExperimentConfig};
use std::path::Path;

/// Runs decision tree training and evaluation over numbered folds
#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// Path to a TOML experiment configuration; defaults apply when omitted
    #[clap(long)]
    config: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match args.config {
        Some(path) => match ExperimentConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(why) => panic!("Could not load configuration: {}", why),
        },
        None => ExperimentConfig::default(),
    };

    info!(
        "Running folds for entity {} (feature set {})",
        config.entity, config.featureset
    );
    experiment::run(&config);
}
