//! Harness for one-class classifier experiments over ARFF datasets.
//!
//! Two independent pipelines share this library: the `experiment`
//! binary sequences external decision tree runs across numbered
//! cross-validation folds, and the `oneclass` binary trains and
//! persists a one-class support vector machine from a labeled dataset.

pub mod arff;
pub mod dataset;
pub mod error;
pub mod experiment;
pub mod model;

pub use error::Error;
