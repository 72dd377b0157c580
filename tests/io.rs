use entrotree::prelude::*;
use entrotree::research::Experiment;

use std::path::PathBuf;


fn write_tmp(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, body).unwrap();
    path
}


// A small Iris-like table.
// The petal columns are constant within each species.
fn flowers() -> String {
    let mut body = String::from(
        "Id,SepalLengthCm,PetalLengthCm,PetalWidthCm,Species\n"
    );
    for i in 0..30 {
        let (petal, width, species) = match i % 3 {
            0 => (1.4, 0.2, "Iris-setosa"),
            1 => (4.5, 1.4, "Iris-versicolor"),
            _ => (5.8, 2.2, "Iris-virginica"),
        };
        let jitter = (i / 3) as f64 * 0.01;
        body.push_str(&format!(
            "{},{},{},{},{species}\n",
            i + 1,
            5.0 + jitter,
            petal,
            width,
        ));
    }
    body
}


#[test]
fn read_fit_save_load() {
    let csv = write_tmp("entrotree_io_flowers.csv", &flowers());
    let json = std::env::temp_dir().join("entrotree_io_flowers.json");

    let sample = SampleReader::default()
        .file(&csv)
        .has_header(true)
        .target_feature("Species")
        .feature_columns(["PetalLengthCm", "PetalWidthCm"])
        .read()
        .unwrap();
    assert_eq!(sample.shape(), (30, 2));

    let mut tree = DecisionTreeBuilder::new().max_depth(10).build();
    tree.fit_sample(&sample).unwrap();
    let f = tree.into_classifier().unwrap();

    let text = f.to_string();
    assert!(text.starts_with("If PetalLengthCm <= "), "got {text}");
    assert!(text.contains("Class: Iris-setosa"));

    let predictions = f.predict_all(sample.rows()).unwrap();
    assert_eq!(predictions, sample.target());

    f.save(&json).unwrap();
    let g = DecisionTreeClassifier::<String>::load(&json).unwrap();
    assert_eq!(g.predict_all(sample.rows()).unwrap(), predictions);
    assert_eq!(g.feature_names(), f.feature_names());

    let _ = std::fs::remove_file(csv);
    let _ = std::fs::remove_file(json);
}


#[test]
fn config_from_json_file() {
    let path = write_tmp(
        "entrotree_io_config.json",
        r#"{ "max_depth": 0, "feature_names": ["size"] }"#,
    );
    let config = TreeConfig::from_json_file(&path).unwrap();
    let mut tree = DecisionTreeBuilder::from_config(config).build();
    tree.fit(&[[1.0], [2.0], [3.0]], &["a", "b", "b"]).unwrap();

    let f = tree.classifier().unwrap();
    assert!(f.depth() <= 1);
    assert_eq!(f.feature_names(), Some(&["size".to_string()][..]));

    let _ = std::fs::remove_file(path);
}


#[test]
fn experiment_on_flowers() {
    let csv = write_tmp("entrotree_io_experiment.csv", &flowers());

    let report = Experiment::new(&csv, "Species")
        .feature_columns(["PetalLengthCm", "PetalWidthCm", "SepalLengthCm"])
        .tree(DecisionTreeBuilder::new().max_depth(10))
        .run()
        .unwrap();

    // ceil(0.3 * 30) == 9
    assert_eq!(report.n_test, 9);
    assert_eq!(report.n_train, 21);
    assert_eq!(report.confusion.total(), 9);
    assert_eq!(report.accuracy, 1.0);

    let _ = std::fs::remove_file(csv);
}
