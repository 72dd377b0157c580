use std::path::Path;

use crate::error::{Result, TreeError};
use super::sample_struct::Sample;


/// A builder that reads a CSV file into [`Sample<String>`](Sample).
///
/// ```no_run
/// use entrotree::SampleReader;
///
/// let sample = SampleReader::default()
///     .file("Iris.csv")
///     .has_header(true)
///     .target_feature("Species")
///     .feature_columns(["PetalLengthCm", "PetalWidthCm"])
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    target: Option<String>,
    features: Option<Vec<String>>,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
            features: None,
        }
    }
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for target label.
    pub fn target_feature<S: ToString>(mut self, column: S) -> Self {
        self.target = Some(column.to_string());
        self
    }


    /// Use only the given columns as features, in the given order.
    /// By default, every column other than the target is used.
    pub fn feature_columns<T, S>(mut self, columns: T) -> Self
        where T: IntoIterator<Item = S>,
              S: ToString,
    {
        let columns = columns.into_iter()
            .map(|c| c.to_string())
            .collect();
        self.features = Some(columns);
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample<String>> {
        let file = self.file.ok_or_else(|| TreeError::InvalidInput(
            "the file name is not set. use `SampleReader::file`".to_string()
        ))?;
        let target = self.target.ok_or_else(|| TreeError::InvalidInput(
            "target (class) column is not specified. \
             use `SampleReader::target_feature`".to_string()
        ))?;

        Sample::from_csv(
            file, self.has_header, &target, self.features.as_deref()
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_without_file() {
        let res = SampleReader::<&str>::default()
            .target_feature("class")
            .read();
        assert!(matches!(res, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_read_without_target() {
        let res = SampleReader::default()
            .file("no_such_file.csv")
            .read();
        assert!(matches!(res, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let res = SampleReader::default()
            .file("no_such_file.csv")
            .target_feature("class")
            .read();
        assert!(matches!(res, Err(TreeError::Io(_))));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join("entrotree_reader_test.csv");
        std::fs::write(&path, "a,b,class\n1,2,x\n3,4,y\n").unwrap();

        let sample = SampleReader::default()
            .file(&path)
            .has_header(true)
            .target_feature("class")
            .feature_columns(["b"])
            .read()
            .unwrap();
        assert_eq!(sample.shape(), (2, 1));
        assert_eq!(sample.rows(), &[vec![2.0], vec![4.0]]);

        let _ = std::fs::remove_file(path);
    }
}
