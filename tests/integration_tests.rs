//! End-to-end test of the one-class training pipeline: ARFF file on
//! disk through label conversion, fitting, persistence, and reload.

use oneclass_experiments::{arff, dataset, model};
use std::io::Write;

const TRAINING_SET: &str = "\
@relation adversereaction

@attribute width numeric
@attribute height numeric
@attribute label {Yes,No}

@data
0.0, 0.1, No
0.1, 0.0, No
0.2, 0.1, No
0.1, 0.2, No
10.0, 10.1, Yes
10.1, 10.0, Yes
10.2, 10.1, Yes
10.1, 10.2, Yes
";

fn write_training_set() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Could not create temp file");
    file.write_all(TRAINING_SET.as_bytes())
        .expect("Could not write training set");
    file
}

#[test]
fn trains_persists_and_reloads_a_model() {
    let training_file = write_training_set();
    let training = arff::read(training_file.path()).expect("Could not load dataset");
    assert_eq!(training.num_rows(), 8);

    let labels = dataset::convert_labels(&training, "label").expect("Could not convert labels");
    assert_eq!(labels.len(), training.num_rows());
    assert!(labels.iter().all(|l| *l == -1.0 || *l == 1.0));

    let nu = dataset::derive_nu(&labels);
    assert_eq!(nu, 0.5);

    let features = dataset::feature_matrix(&training, "label").expect("Could not build features");
    assert_eq!(features.nrows(), training.num_rows());
    assert_eq!(features.ncols(), training.num_attributes() - 1);

    let fitted = model::svm::train(features.clone(), nu).expect("Could not train model");

    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let path = dir.path().join("models").join("oneclass");
    model::svm::save(&fitted, &path).expect("Could not save model");

    let reloaded = model::svm::load(&path).expect("Could not load model");
    let verdicts = model::svm::predict(&reloaded, &features);
    assert_eq!(verdicts.len(), features.nrows());
}

#[test]
fn saving_twice_overwrites_the_artifact() {
    let training_file = write_training_set();
    let training = arff::read(training_file.path()).expect("Could not load dataset");
    let labels = dataset::convert_labels(&training, "label").expect("Could not convert labels");
    let features = dataset::feature_matrix(&training, "label").expect("Could not build features");
    let fitted =
        model::svm::train(features, dataset::derive_nu(&labels)).expect("Could not train model");

    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let path = dir.path().join("oneclass");
    model::svm::save(&fitted, &path).expect("Could not save model");
    model::svm::save(&fitted, &path).expect("Could not save model again");
    assert!(model::svm::load(&path).is_ok());
}
