//! Training and persistence of the one-class classifier.

pub mod svm {
    use crate::error::Error;
    use linfa::dataset::Dataset;
    use linfa::prelude::*;
    use linfa_svm::Svm;
    use ndarray::{Array1, Array2};
    use std::fs;
    use std::path::Path;

    /// Fixed bandwidth of the radial basis function kernel.
    pub const GAMMA: f64 = 0.0005;

    /// Where the fitted model is persisted. Consecutive runs overwrite
    /// the artifact in place.
    pub const MODEL_PATH: &str = "models/oneclass";

    /// Fits a one-class support vector machine over the feature matrix.
    ///
    /// `nu` is the expected outlier fraction of the training data and
    /// must lie in (0, 1]. The kernel is the radial basis function with
    /// the fixed [`GAMMA`] bandwidth; linfa's Gaussian kernel takes
    /// `eps = 1 / gamma`.
    pub fn train(records: Array2<f64>, nu: f64) -> Result<Svm<f64, bool>, Error> {
        if nu <= 0.0 || nu > 1.0 {
            return Err(Error::DegenerateNu(nu));
        }
        let targets = Array1::from(vec![(); records.nrows()]);
        let dataset = Dataset::new(records, targets);
        let model = Svm::<f64, _>::params()
            .gaussian_kernel(1.0 / GAMMA)
            .nu_weight(nu)
            .fit(&dataset)?;
        Ok(model)
    }

    /// Runs the fitted model over a feature matrix, one verdict per row.
    /// `true` marks a row the model considers normal.
    pub fn predict(model: &Svm<f64, bool>, records: &Array2<f64>) -> Array1<bool> {
        model.predict(records)
    }

    /// Serializes the fitted model to `path`, creating the parent
    /// directory if needed. An existing artifact is overwritten.
    pub fn save(model: &Svm<f64, bool>, path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, bincode::serialize(model)?)?;
        Ok(())
    }

    /// Reads a previously persisted model back from `path`.
    pub fn load(path: &Path) -> Result<Svm<f64, bool>, Error> {
        let bin = fs::read(path)?;
        Ok(bincode::deserialize(&bin)?)
    }

}
