//! Train a decision tree on the Iris data set and print it.
//!
//! ```text
//! RUST_LOG=info cargo run --example iris -- path/to/Iris.csv
//! ```
use entrotree::DecisionTreeBuilder;
use entrotree::research::Experiment;

use std::env;
use std::process;


const FEATURES: [&str; 4] = [
    "PetalLengthCm",
    "PetalWidthCm",
    "SepalLengthCm",
    "SepalWidthCm",
];


fn main() {
    env_logger::init();

    let path = env::args().nth(1)
        .unwrap_or_else(|| "Iris.csv".to_string());

    let builder = DecisionTreeBuilder::new()
        .max_depth(10)
        .feature_names(FEATURES);

    let result = Experiment::new(&path, "Species")
        .feature_columns(FEATURES)
        .test_ratio(0.3)
        .seed(42)
        .tree(builder)
        .verbose(true)
        .run();

    if let Err(e) = result {
        eprintln!("failed to run the experiment on {path}: {e}");
        process::exit(1);
    }
}
