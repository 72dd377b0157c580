//! An end-to-end run: read a CSV file, split it, train a tree,
//! and score the tree on the held-out rows.
use colored::Colorize;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::decision_tree::{DecisionTreeBuilder, DecisionTreeClassifier};
use crate::error::{Result, TreeError};
use crate::hypothesis::Classifier;
use crate::sample::{SampleReader, TrainTestSplit};
use super::metrics::{accuracy, ConfusionMatrix};


/// Default ratio of the test rows of an [`Experiment`].
pub const DEFAULT_EXPERIMENT_TEST_RATIO: f64 = 0.3;
/// Default seed of an [`Experiment`].
pub const DEFAULT_EXPERIMENT_SEED: u64 = 42;


/// A struct that runs a train/test experiment on a CSV file.
///
/// Nothing happens until [`Experiment::run`] is called.
///
/// # Example
/// ```no_run
/// use entrotree::DecisionTreeBuilder;
/// use entrotree::research::Experiment;
///
/// let features = [
///     "PetalLengthCm", "PetalWidthCm", "SepalLengthCm", "SepalWidthCm"
/// ];
/// let report = Experiment::new("Iris.csv", "Species")
///     .feature_columns(features)
///     .tree(DecisionTreeBuilder::new().max_depth(10))
///     .verbose(true)
///     .run()
///     .unwrap();
/// println!("{:.2}", report.accuracy);
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    file: PathBuf,
    target: String,
    features: Option<Vec<String>>,
    splitter: TrainTestSplit,
    builder: DecisionTreeBuilder,
    verbose: bool,
}


/// The result of [`Experiment::run`].
#[derive(Debug, Clone)]
pub struct Report {
    /// The trained tree.
    pub classifier: DecisionTreeClassifier<String>,
    /// Accuracy on the test rows.
    pub accuracy: f64,
    /// Confusion matrix on the test rows.
    pub confusion: ConfusionMatrix<String>,
    /// Number of training rows.
    pub n_train: usize,
    /// Number of test rows.
    pub n_test: usize,
}


impl Experiment {
    /// Construct a new instance of `Experiment`.
    /// The file must have a header row, and `target` names the label column.
    pub fn new<P, S>(file: P, target: S) -> Self
        where P: AsRef<Path>,
              S: ToString,
    {
        let splitter = TrainTestSplit::new()
            .test_ratio(DEFAULT_EXPERIMENT_TEST_RATIO)
            .seed(DEFAULT_EXPERIMENT_SEED);
        Self {
            file: file.as_ref().to_path_buf(),
            target: target.to_string(),
            features: None,
            splitter,
            builder: DecisionTreeBuilder::new(),
            verbose: false,
        }
    }


    /// Use only the given columns as features, in the given order.
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


    /// Set the ratio of the test rows.
    /// Default value is `0.3`.
    pub fn test_ratio(mut self, ratio: f64) -> Self {
        self.splitter = self.splitter.test_ratio(ratio);
        self
    }


    /// Set the seed of the train/test split.
    /// Default value is `42`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.splitter = self.splitter.seed(seed);
        self
    }


    /// Set the parameters of the tree.
    pub fn tree(mut self, builder: DecisionTreeBuilder) -> Self {
        self.builder = builder;
        self
    }


    /// If `true`, [`Experiment::run`] prints the report to stdout.
    /// Default value is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Read, split, train, and score.
    pub fn run(self) -> Result<Report> {
        let mut reader = SampleReader::default()
            .file(&self.file)
            .has_header(true)
            .target_feature(&self.target);
        if let Some(features) = self.features.as_ref() {
            reader = reader.feature_columns(features);
        }
        let sample = reader.read()?;

        let (train, test) = self.splitter.split(&sample)?;

        let mut tree = self.builder.build();
        tree.fit_sample(&train)?;
        let classifier = tree.into_classifier()
            .ok_or(TreeError::UntrainedModel)?;

        let predictions = classifier.predict_all(test.rows())?;
        let accuracy = accuracy(test.target(), &predictions)?;
        let confusion = ConfusionMatrix::new(test.target(), &predictions)?;

        let report = Report {
            classifier,
            accuracy,
            confusion,
            n_train: train.shape().0,
            n_test: test.shape().0,
        };
        log::info!(
            "experiment on {}: accuracy {:.4} ({} train / {} test)",
            self.file.display(),
            report.accuracy,
            report.n_train,
            report.n_test,
        );

        if self.verbose {
            println!("{report}");
        }
        Ok(report)
    }
}


impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.classifier)?;
        writeln!(
            f,
            "{}    {}",
            format!("[TRAIN {:>5}]", self.n_train).bold().green(),
            format!("[TEST {:>5}]", self.n_test).bold().yellow(),
        )?;
        writeln!(
            f,
            "{}",
            format!("Accuracy: {:.2}%", self.accuracy * 100f64).bold().red(),
        )?;
        write!(f, "Confusion Matrix:\n{}", self.confusion)
    }
}
