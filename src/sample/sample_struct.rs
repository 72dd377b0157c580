use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Index;
use std::path::Path;

use crate::common::checker;
use crate::error::{Result, TreeError};


/// A set of labeled examples.
/// Each row has the same number of features.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<L> {
    pub(super) feature_names: Vec<String>,
    pub(super) rows: Vec<Vec<f64>>,
    pub(super) target: Vec<L>,
}


impl<L> Sample<L> {
    /// Construct a new instance of `Sample`.
    ///
    /// Returns `Err` if `rows` is empty, the rows have different lengths,
    /// `rows` and `target` have different lengths,
    /// or the number of names does not match the number of features.
    pub fn new<S>(
        feature_names: Vec<S>,
        rows: Vec<Vec<f64>>,
        target: Vec<L>,
    ) -> Result<Self>
        where S: ToString,
    {
        let n_feature = checker::check_sample(&rows, &target)?;
        let feature_names = feature_names.into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        checker::check_feature_names(Some(&feature_names[..]), n_feature)?;

        Ok(Self { feature_names, rows, target, })
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.feature_names.len())
    }


    /// Returns the feature rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows[..]
    }


    /// Returns the slice of target values.
    pub fn target(&self) -> &[L] {
        &self.target[..]
    }


    /// Returns the feature (column) names.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (&[f64], &L) {
        (&self.rows[idx][..], &self.target[idx])
    }


    /// Returns the feature rows and the labels.
    pub fn into_parts(self) -> (Vec<Vec<f64>>, Vec<L>) {
        (self.rows, self.target)
    }
}


impl<L> Sample<L>
    where L: Clone,
{
    /// Returns the sub-sample made of the rows `ix`, in that order.
    pub fn select<T>(&self, ix: T) -> Self
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let rows = ix.iter()
            .map(|&i| self.rows[i].clone())
            .collect();
        let target = ix.iter()
            .map(|&i| self.target[i].clone())
            .collect();

        Self {
            feature_names: self.feature_names.clone(),
            rows,
            target,
        }
    }
}


impl Sample<String> {
    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    ///
    /// If the CSV file does not header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    ///
    /// The column named `target` holds the labels.
    /// If `features` is `Some`, only the listed columns are used,
    /// in the listed order.
    /// Otherwise, every other column is used.
    pub(crate) fn from_csv<P>(
        file: P,
        has_header: bool,
        target: &str,
        features: Option<&[String]>,
    ) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, target, features)
    }


    /// read a csv from [`BufReader`].
    pub fn from_reader<R>(
        reader: BufReader<R>,
        has_header: bool,
        target: &str,
        features: Option<&[String]>,
    ) -> Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines()
            .enumerate()
            .map(|(i, line)| line.map(|l| (i + 1, l)))
            .filter(|line| {
                !matches!(line, Ok((_, l)) if l.trim().is_empty())
            });

        let mut pending = None;
        let header = if has_header {
            match lines.next() {
                Some(line) => {
                    let (_, line) = line?;
                    line.split(',')
                        .map(|name| name.trim().to_string())
                        .collect::<Vec<_>>()
                },
                None => Vec::new(),
            }
        } else {
            // Peek the first row to count the columns.
            match lines.next() {
                Some(line) => {
                    let (i, line) = line?;
                    let n_column = line.split(',').count();
                    pending = Some((i, line));
                    (1..=n_column).map(|k| format!("Feat. [{k}]"))
                        .collect::<Vec<_>>()
                },
                None => Vec::new(),
            }
        };

        let position = |name: &str| {
            header.iter()
                .position(|col| col == name)
                .ok_or_else(|| TreeError::MissingColumn(name.to_string()))
        };

        let target_ix = position(target)?;
        let feature_ix = match features {
            Some(names) => {
                names.iter()
                    .map(|name| position(name))
                    .collect::<Result<Vec<_>>>()?
            },
            None => {
                (0..header.len()).filter(|&k| k != target_ix)
                    .collect::<Vec<_>>()
            },
        };
        let feature_names = feature_ix.iter()
            .map(|&k| header[k].clone())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        let mut labels = Vec::new();

        // For each line of the file
        for line in pending.into_iter().map(Ok).chain(lines) {
            let (i, line) = line?;
            let words = line.split(',')
                .map(|word| word.trim())
                .collect::<Vec<_>>();

            if words.len() != header.len() {
                return Err(TreeError::InvalidInput(format!(
                    "line {i} has {} columns, expected {}",
                    words.len(),
                    header.len(),
                )));
            }

            let row = feature_ix.iter()
                .map(|&k| {
                    words[k].parse::<f64>()
                        .map_err(|_| TreeError::Parse {
                            line: i,
                            value: words[k].to_string(),
                        })
                })
                .collect::<Result<Vec<f64>>>()?;

            rows.push(row);
            labels.push(words[target_ix].to_string());
        }

        log::info!(
            "read {} rows with {} features (target: `{target}`)",
            rows.len(),
            feature_names.len(),
        );

        Self::new(feature_names, rows, labels)
    }
}


impl<L> Index<usize> for Sample<L> {
    type Output = [f64];

    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx][..]
    }
}
