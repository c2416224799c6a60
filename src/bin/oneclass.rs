use clap::Parser;
use log::info;
use oneclass_experiments::model::svm;
use oneclass_experiments::{arff, dataset};
use std::path::Path;

/// Creates a one-class SVM from a labeled ARFF dataset
#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// Path to the training ARFF file
    #[clap(long)]
    train: String,
    /// Name of the labels column
    #[clap(long)]
    labels: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let training = match arff::read(Path::new(&args.train)) {
        Ok(training) => training,
        Err(why) => panic!("Could not load dataset: {}", why),
    };
    info!(
        "Loaded {} with {} rows and {} attributes",
        args.train,
        training.num_rows(),
        training.num_attributes()
    );

    let labels = match dataset::convert_labels(&training, &args.labels) {
        Ok(labels) => labels,
        Err(why) => panic!("Could not convert labels: {}", why),
    };
    let features = match dataset::feature_matrix(&training, &args.labels) {
        Ok(features) => features,
        Err(why) => panic!("Could not build feature matrix: {}", why),
    };
    let nu = dataset::derive_nu(&labels);
    info!("Training with shape {:?} and nu = {}", features.shape(), nu);

    let model = match svm::train(features, nu) {
        Ok(model) => model,
        Err(why) => panic!("Could not train model: {}", why),
    };
    match svm::save(&model, Path::new(svm::MODEL_PATH)) {
        Ok(()) => info!("Model written to {}", svm::MODEL_PATH),
        Err(why) => panic!("Could not save model: {}", why),
    }
}
