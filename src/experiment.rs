//! Sequencing of external decision tree training and evaluation runs
//! across numbered cross-validation folds.
//!
//! The driver only constructs fold file paths and issues one blocking
//! subprocess invocation per fold. Nothing flows back: exit status and
//! output of the invoked programs are logged and otherwise ignored, and
//! a failing fold never stops the run.

use crate::error::Error;
use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Inclusive-exclusive range of cross-validation fold numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FoldRange {
    pub start: u32,
    pub end: u32,
}

impl FoldRange {
    pub fn new(start: u32, end: u32) -> FoldRange {
        FoldRange { start, end }
    }

    /// Fold numbers covered by this range, in ascending order.
    pub fn folds(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Which half of a cross-validation split a fold file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one experiment run, passed explicitly into [`run`].
///
/// The defaults reproduce the standing experiment: entity
/// `adversereaction` with feature set `o`, no training folds, and
/// evaluation folds 1 through 10.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Name of the entity whose datasets are used.
    pub entity: String,
    /// Tag of the attribute subset the datasets were generated with.
    pub featureset: String,
    /// Directory containing the per-entity ARFF trees.
    pub arff_root: PathBuf,
    /// Folds to run training on.
    pub train: FoldRange,
    /// Folds to run evaluation on.
    pub evaluate: FoldRange,
    /// Program invoked with `-tr <path>` for each training fold.
    pub train_command: String,
    /// Program invoked with `-te <path>` for each evaluation fold.
    pub evaluate_command: String,
}

impl Default for ExperimentConfig {
    fn default() -> ExperimentConfig {
        ExperimentConfig {
            entity: "adversereaction".to_string(),
            featureset: "o".to_string(),
            arff_root: PathBuf::from("../ARFF_Files"),
            train: FoldRange::new(1, 1),
            evaluate: FoldRange::new(1, 11),
            train_command: "decisiontree".to_string(),
            evaluate_command: "evaluate_decisiontree".to_string(),
        }
    }
}

impl ExperimentConfig {
    /// Reads a configuration from a TOML file. Missing keys fall back
    /// to the defaults.
    pub fn from_file(path: &Path) -> Result<ExperimentConfig, Error> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|why| Error::Parse(why.to_string()))
    }
}

/// Constructs the path of one fold's ARFF file under `root`, following
/// the dataset naming convention:
/// `<entity>_ARFF/_<featureset>/_<split>/<entity>_<split>-<fold>.arff`.
pub fn arff_path(root: &Path, entity: &str, featureset: &str, split: Split, fold: u32) -> PathBuf {
    root.join(format!("{}_ARFF", entity))
        .join(format!("_{}", featureset))
        .join(format!("_{}", split))
        .join(format!("{}_{}-{}.arff", entity, split, fold))
}

/// Runs an external program to completion, inheriting stdio, and hands
/// the exit status back to the caller. The experiment driver is the one
/// caller and deliberately discards it.
pub fn run_external(command: &str, args: &[&str]) -> io::Result<ExitStatus> {
    Command::new(command).args(args).status()
}

/// Issues one training invocation per training fold, then one
/// evaluation invocation per evaluation fold. Invocations are
/// sequential and blocking; there are no retries.
pub fn run(config: &ExperimentConfig) {
    for fold in config.train.folds() {
        let data = arff_path(
            &config.arff_root,
            &config.entity,
            &config.featureset,
            Split::Train,
            fold,
        );
        invoke(&config.train_command, "-tr", &data);
    }
    for fold in config.evaluate.folds() {
        let data = arff_path(
            &config.arff_root,
            &config.entity,
            &config.featureset,
            Split::Test,
            fold,
        );
        invoke(&config.evaluate_command, "-te", &data);
    }
}

fn invoke(command: &str, flag: &str, data: &Path) {
    let data = data.to_string_lossy();
    info!("{} {} {}", command, flag, data);
    match run_external(command, &[flag, data.as_ref()]) {
        Ok(status) if !status.success() => {
            warn!("{} exited with {}; continuing", command, status)
        }
        Ok(_) => (),
        Err(why) => warn!("Could not run {}: {}; continuing", command, why),
    }
}
