use entrotree::prelude::*;

use std::collections::HashMap;


// Toy example (values of the single feature, with labels)
//
//   A A       B B
//   1 1       2 2
//     |
//    1.0
#[test]
fn stump_on_four_examples() {
    let x = vec![[1.0], [1.0], [2.0], [2.0]];
    let y = vec!["A", "A", "B", "B"];

    let mut tree = DecisionTreeBuilder::new()
        .min_samples_split(2)
        .max_depth(1)
        .build();
    tree.fit(&x, &y).unwrap();

    let f = tree.classifier().unwrap();
    let expected = Node::branch(
        Splitter::new(0, 1.0),
        1.0,
        Box::new(Node::leaf("A")),
        Box::new(Node::leaf("B")),
    );
    assert_eq!(*f.root(), expected);
    assert_eq!(f.predict(&[1.0]).unwrap(), "A");
    assert_eq!(f.predict(&[2.0]).unwrap(), "B");
}


#[test]
fn inseparable_rows_become_a_majority_leaf() {
    let x = vec![[5.0], [5.0], [5.0]];
    let y = vec!["A", "B", "B"];

    let mut tree = DecisionTreeBuilder::new().build();
    tree.fit(&x, &y).unwrap();

    assert_eq!(*tree.classifier().unwrap().root(), Node::leaf("B"));
}


#[test]
fn tie_prefers_the_lower_feature() {
    // Feature 1 is feature 0 mirrored, so both separate the labels.
    let x = vec![
        [0.0, 3.0],
        [1.0, 2.0],
        [2.0, 1.0],
        [3.0, 0.0],
    ];
    let y = vec![0, 0, 1, 1];

    let mut tree = DecisionTreeBuilder::new().build();
    tree.fit(&x, &y).unwrap();

    match tree.classifier().unwrap().root() {
        Node::Branch { splitter, .. } => {
            assert_eq!(splitter.feature, 0);
            assert_eq!(splitter.threshold, 1.0);
        },
        leaf => panic!("expected a branch, got {leaf:?}"),
    }
}


fn two_moons() -> (Vec<Vec<f64>>, Vec<&'static str>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in 0..60 {
        let t = i as f64 / 10.0;
        let a = (t * 7.0) % 5.0;
        let b = (t * 3.0) % 4.0;
        x.push(vec![a, b, t]);
        let label = if a + b < 4.0 {
            "left"
        } else if a < 2.5 {
            "middle"
        } else {
            "right"
        };
        y.push(label);
    }
    (x, y)
}


#[test]
fn training_is_deterministic() {
    let (x, y) = two_moons();

    let fit = || {
        let mut tree = DecisionTreeBuilder::new().max_depth(6).build();
        tree.fit(&x, &y).unwrap();
        tree.into_classifier().unwrap()
    };

    let f = fit();
    let g = fit();
    assert_eq!(f, g);
    assert_eq!(f.predict_all(&x).unwrap(), g.predict_all(&x).unwrap());
}


#[test]
fn leaf_label_occurs_in_its_partition() {
    let (x, y) = two_moons();
    for max_depth in 0..5 {
        let mut tree = DecisionTreeBuilder::new()
            .max_depth(max_depth)
            .min_samples_split(3)
            .build();
        tree.fit(&x, &y).unwrap();
        let root = tree.classifier().unwrap().root();

        // Group the training labels by the leaf they reach.
        let mut reached: HashMap<*const &str, Vec<&str>> = HashMap::new();
        for (row, &label) in x.iter().zip(&y) {
            let leaf = root.leaf_for(row).unwrap();
            reached.entry(leaf as *const &str).or_default().push(label);
        }

        for visit in root.depth_first() {
            if let Visit::Leaf { label, .. } = visit {
                let labels = reached.get(&(label as *const &str))
                    .expect("every leaf is reached by a training row");
                assert!(labels.contains(label));
            }
        }
    }
}


#[test]
fn zero_max_depth_splits_the_root_once() {
    // A node may still split at `depth == max_depth`,
    // so the root splits and its children become leaves.
    let (x, y) = two_moons();
    let mut tree = DecisionTreeBuilder::new().max_depth(0).build();
    tree.fit(&x, &y).unwrap();

    let f = tree.classifier().unwrap();
    match f.root() {
        Node::Branch { left, right, .. } => {
            assert!(left.is_leaf(), "got {left:?}");
            assert!(right.is_leaf(), "got {right:?}");
        },
        leaf => panic!("expected a branch, got {leaf:?}"),
    }
    assert_eq!(f.depth(), 1);
}


#[test]
fn rows_with_distinct_values_are_fit_perfectly() {
    // Alternating labels force a deep tree.
    let n = 200;
    let x = (0..n).map(|i| [i as f64]).collect::<Vec<_>>();
    let y = (0..n).map(|i| i % 2).collect::<Vec<_>>();

    let mut tree = DecisionTreeBuilder::new().max_depth(n).build();
    tree.fit(&x, &y).unwrap();

    let predictions = tree.predict(&x).unwrap();
    assert_eq!(predictions, y);
    assert_eq!(tree.classifier().unwrap().n_leaves(), n);
}


#[test]
fn deep_trees_are_traversed_without_recursion() {
    // x[0] <= 0 ? 0 : (x[0] <= 1 ? 1 : (x[0] <= 2 ? 2 : ...))
    let height = 2_000;
    let mut node = Node::leaf(height);
    for k in (0..height).rev() {
        node = Node::branch(
            Splitter::new(0, k as f64),
            1.0,
            Box::new(Node::leaf(k)),
            Box::new(node),
        );
    }
    let f = DecisionTreeClassifier::from(node);

    assert_eq!(f.depth(), height);
    assert_eq!(f.n_leaves(), height + 1);
    assert_eq!(f.predict(&[1e9]).unwrap(), height);
    assert_eq!(f.predict(&[17.0]).unwrap(), 17);

    let text = f.render().to_string();
    // An `If` and an `Else` line per branch, one line per leaf.
    assert_eq!(text.lines().count(), 3 * height + 1);
}


#[test]
fn very_deep_trees_are_cloned_compared_and_dropped() {
    let height = 500_000;
    let mut node = Node::leaf(height);
    for k in (0..height).rev() {
        node = Node::branch(
            Splitter::new(0, k as f64),
            1.0,
            Box::new(Node::leaf(k)),
            Box::new(node),
        );
    }
    let f = DecisionTreeClassifier::from(node);
    assert_eq!(f.depth(), height);
    assert_eq!(f.predict(&[1e9]).unwrap(), height);

    let g = f.clone();
    assert_eq!(f, g);

    drop(f);
    assert_eq!(g.n_leaves(), height + 1);
    drop(g);
}


#[test]
fn errors() {
    let mut tree = DecisionTreeBuilder::new().build();

    let res = tree.predict(&[[0.0]]);
    assert!(matches!(res, Err(TreeError::UntrainedModel)));

    let res = tree.fit(&[[0.0], [1.0]], &[1]);
    assert!(matches!(res, Err(TreeError::ShapeMismatch { .. })));

    let x: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![0.0]];
    let res = tree.fit(&x, &[1, 2]);
    assert!(matches!(res, Err(TreeError::InvalidInput(_))));

    tree.fit(&[[0.0], [1.0]], &[1, 2]).unwrap();
    let empty: Vec<f64> = Vec::new();
    let res = tree.predict(&[empty]);
    assert!(matches!(
        res,
        Err(TreeError::FeatureIndexOutOfRange { feature: 0, .. })
    ));
}
