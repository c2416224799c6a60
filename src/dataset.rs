//! Conversion of labeled ARFF datasets into feature matrices and
//! signed label vectors.

use crate::arff::ArffFile;
use crate::error::Error;
use ndarray::{Array1, Array2};

/// Label string marking a row as an outlier. Mapped to -1.
pub const OUTLIER_LABEL: &str = "Yes";
/// Label string marking a row as normal. Mapped to +1.
pub const NORMAL_LABEL: &str = "No";

/// Maps the label column onto the signed two-class convention: the
/// outlier string becomes -1, the normal string +1.
///
/// Any other value is rejected; the conversion never defaults.
pub fn convert_labels(arff: &ArffFile, label_column: &str) -> Result<Array1<f64>, Error> {
    let column = arff.column(label_column)?;
    let mut labels = Vec::with_capacity(column.len());
    for value in column {
        match value {
            OUTLIER_LABEL => labels.push(-1.0),
            NORMAL_LABEL => labels.push(1.0),
            other => return Err(Error::UnknownLabel(other.to_string())),
        }
    }
    Ok(Array1::from(labels))
}

/// Empirical outlier fraction of a signed label vector, used as the
/// solver's nu parameter. Always recomputed from the labels, never
/// cached.
pub fn derive_nu(labels: &Array1<f64>) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let outliers = labels.iter().filter(|label| **label == -1.0).count();
    outliers as f64 / labels.len() as f64
}

/// Builds the training feature matrix: every column except the label
/// column, parsed as `f64`, with row count and order preserved.
pub fn feature_matrix(arff: &ArffFile, label_column: &str) -> Result<Array2<f64>, Error> {
    let label_index = arff
        .attribute_index(label_column)
        .ok_or_else(|| Error::MissingColumn(label_column.to_string()))?;
    if arff.rows.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let width = arff.num_attributes() - 1;
    let mut values = Vec::with_capacity(arff.num_rows() * width);
    for row in &arff.rows {
        for (index, value) in row.iter().enumerate() {
            if index == label_index {
                continue;
            }
            let value: f64 = value.parse().map_err(|_| Error::NonNumericFeature {
                column: arff.attributes[index].name.clone(),
                value: value.clone(),
            })?;
            values.push(value);
        }
    }

    Array2::from_shape_vec((arff.num_rows(), width), values)
        .map_err(|why| Error::Parse(why.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arff;

    fn labeled(labels: &[&str]) -> ArffFile {
        let mut text = String::from(
            "@relation test\n@attribute a numeric\n@attribute b numeric\n@attribute label {Yes,No}\n@data\n",
        );
        for (i, label) in labels.iter().enumerate() {
            text.push_str(&format!("{}.0, {}.5, {}\n", i, i, label));
        }
        arff::parse(&text).unwrap()
    }

    #[test]
    fn converts_recognized_labels_to_signed_classes() {
        let arff = labeled(&["Yes", "No", "No", "Yes"]);
        let labels = convert_labels(&arff, "label").unwrap();
        assert_eq!(labels.to_vec(), vec![-1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn rejects_unrecognized_label() {
        let arff = labeled(&["Yes", "Maybe"]);
        assert!(matches!(
            convert_labels(&arff, "label"),
            Err(Error::UnknownLabel(value)) if value == "Maybe"
        ));
    }

    #[test]
    fn nu_is_the_outlier_fraction() {
        let arff = labeled(&["Yes", "No", "No", "Yes"]);
        let labels = convert_labels(&arff, "label").unwrap();
        assert_eq!(derive_nu(&labels), 0.5);
    }

    #[test]
    fn nu_is_zero_without_outliers() {
        let arff = labeled(&["No", "No", "No"]);
        let labels = convert_labels(&arff, "label").unwrap();
        assert_eq!(labels.to_vec(), vec![1.0, 1.0, 1.0]);
        assert_eq!(derive_nu(&labels), 0.0);
    }

    #[test]
    fn nu_is_one_with_only_outliers() {
        let labels = Array1::from(vec![-1.0, -1.0]);
        assert_eq!(derive_nu(&labels), 1.0);
    }

    #[test]
    fn nu_is_idempotent() {
        let arff = labeled(&["Yes", "No"]);
        let labels = convert_labels(&arff, "label").unwrap();
        assert_eq!(derive_nu(&labels), derive_nu(&labels));
    }

    #[test]
    fn feature_matrix_drops_exactly_the_label_column() {
        let arff = labeled(&["Yes", "No", "No"]);
        let features = feature_matrix(&arff, "label").unwrap();
        assert_eq!(features.nrows(), 3);
        assert_eq!(features.ncols(), arff.num_attributes() - 1);
        // Row order preserved.
        assert_eq!(features.row(0).to_vec(), vec![0.0, 0.5]);
        assert_eq!(features.row(2).to_vec(), vec![2.0, 2.5]);
    }

    #[test]
    fn feature_matrix_rejects_non_numeric_values() {
        let text = "@relation t\n@attribute a numeric\n@attribute label {Yes,No}\n@data\nx, Yes\n";
        let arff = arff::parse(text).unwrap();
        assert!(matches!(
            feature_matrix(&arff, "label"),
            Err(Error::NonNumericFeature { column, .. }) if column == "a"
        ));
    }

    #[test]
    fn feature_matrix_rejects_empty_dataset() {
        let text = "@relation t\n@attribute a numeric\n@attribute label {Yes,No}\n@data\n";
        let arff = arff::parse(text).unwrap();
        assert!(matches!(
            feature_matrix(&arff, "label"),
            Err(Error::EmptyDataset)
        ));
    }
}
