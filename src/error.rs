//! Error types shared by the dataset and model modules.

use std::fmt;
use std::io;

/// Errors that can occur while loading datasets or training models.
#[derive(Debug)]
pub enum Error {
    /// An input file could not be read.
    Io(io::Error),
    /// The data section of an input file could not be parsed.
    Csv(csv::Error),
    /// Malformed input file structure.
    Parse(String),
    /// The named column does not exist in the dataset.
    MissingColumn(String),
    /// A label value outside the two recognized class strings.
    UnknownLabel(String),
    /// The dataset contains no rows.
    EmptyDataset,
    /// A feature value that could not be interpreted as a number.
    NonNumericFeature { column: String, value: String },
    /// The derived contamination ratio is outside (0, 1].
    DegenerateNu(f64),
    /// The solver rejected the training set.
    Svm(linfa_svm::SvmError),
    /// The model artifact could not be encoded or decoded.
    Model(bincode::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(why) => write!(f, "io error: {}", why),
            Error::Csv(why) => write!(f, "data section error: {}", why),
            Error::Parse(msg) => write!(f, "parse error: {}", msg),
            Error::MissingColumn(name) => write!(f, "no column named {}", name),
            Error::UnknownLabel(value) => write!(f, "unrecognized label value: {}", value),
            Error::EmptyDataset => write!(f, "dataset contains no rows"),
            Error::NonNumericFeature { column, value } => {
                write!(f, "non-numeric value {} in feature column {}", value, column)
            }
            Error::DegenerateNu(nu) => write!(f, "contamination ratio {} is outside (0, 1]", nu),
            Error::Svm(why) => write!(f, "solver error: {}", why),
            Error::Model(why) => write!(f, "model serialization error: {}", why),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(why: io::Error) -> Error {
        Error::Io(why)
    }
}

impl From<csv::Error> for Error {
    fn from(why: csv::Error) -> Error {
        Error::Csv(why)
    }
}

impl From<linfa_svm::SvmError> for Error {
    fn from(why: linfa_svm::SvmError) -> Error {
        Error::Svm(why)
    }
}

impl From<bincode::Error> for Error {
    fn from(why: bincode::Error) -> Error {
        Error::Model(why)
    }
}
