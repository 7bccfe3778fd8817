#![cfg(test)]

use std::io::Write;

use ndarray::{ArrayView2, array};

use crate::{
    MlErr, Model, Regressor,
    arch::{Sequential, activations::ActFn, layers::Layer},
    ensemble::{GradientBoosting, Node},
};

fn stump(feature: usize, threshold: f32, left: f32, right: f32) -> Vec<Node> {
    vec![
        Node::Split {
            feature,
            threshold,
            left: 1,
            right: 2,
        },
        Node::Leaf { value: left },
        Node::Leaf { value: right },
    ]
}

#[test]
fn test_gradient_boosting_sums_shrunk_trees() {
    let model = GradientBoosting::new(
        2,
        100.0,
        0.5,
        [stump(0, 0.5, -10.0, 10.0), stump(1, 1.5, 4.0, 8.0)],
    )
    .unwrap();

    let x = array![[0.0, 1.0], [1.0, 2.0], [0.5, 1.5]];
    let y = model.predict(x.view()).unwrap();

    assert_eq!(y.to_vec(), vec![97.0, 109.0, 97.0]);
}

#[test]
fn test_gradient_boosting_rejects_wrong_width() {
    let model = GradientBoosting::new(2, 0.0, 1.0, [stump(0, 0.0, 0.0, 1.0)]).unwrap();
    let x = array![[1.0, 2.0, 3.0]];

    let err = model.predict(x.view()).unwrap_err();
    assert!(matches!(
        err,
        MlErr::SizeMismatch {
            got: 3,
            expected: 2,
            ..
        }
    ));
}

#[test]
fn test_tree_rejects_backward_children() {
    let nodes = vec![
        Node::Leaf { value: 1.0 },
        Node::Split {
            feature: 0,
            threshold: 0.0,
            left: 0,
            right: 2,
        },
        Node::Leaf { value: 2.0 },
    ];

    let err = GradientBoosting::new(1, 0.0, 1.0, [nodes]).unwrap_err();
    assert!(matches!(err, MlErr::InvalidNode { tree: 0, node: 1, .. }));
}

#[test]
fn test_tree_rejects_out_of_range_feature() {
    let err = GradientBoosting::new(1, 0.0, 1.0, [stump(3, 0.0, 0.0, 1.0)]).unwrap_err();
    assert!(matches!(err, MlErr::InvalidNode { node: 0, .. }));
}

#[test]
fn test_tree_rejects_out_of_range_child() {
    let mut nodes = stump(0, 0.5, 1.0, 2.0);
    nodes[0] = Node::Split {
        feature: 0,
        threshold: 0.5,
        left: 1,
        right: 5,
    };

    let err = GradientBoosting::new(1, 0.0, 1.0, [nodes]).unwrap_err();
    assert!(matches!(
        err,
        MlErr::InvalidNode {
            tree: 0,
            node: 0,
            reason: "child index is out of range"
        }
    ));
}

#[test]
fn test_tree_rejects_non_finite_threshold() {
    for threshold in [f32::NAN, f32::INFINITY] {
        let err =
            GradientBoosting::new(1, 0.0, 1.0, [stump(0, threshold, 1.0, 2.0)]).unwrap_err();
        assert!(matches!(
            err,
            MlErr::InvalidNode {
                node: 0,
                reason: "split threshold is not finite",
                ..
            }
        ));
    }
}

#[test]
fn test_gradient_boosting_without_trees_is_empty() {
    let err = GradientBoosting::new(8, 0.0, 1.0, Vec::<Vec<Node>>::new()).unwrap_err();
    assert!(matches!(err, MlErr::EmptyModel));
}

#[test]
fn test_sequential_linear_regression() {
    // y = 2 * x0 - x1 + 3
    let model = Sequential::new([Layer::dense((2, 1), vec![2.0, -1.0], vec![3.0], None).unwrap()])
        .unwrap();

    let y = model.predict(array![[1.0, 1.0], [0.0, 4.0]].view()).unwrap();
    assert_eq!(y.to_vec(), vec![4.0, -1.0]);
}

#[test]
fn test_sequential_hidden_relu_layer() {
    let model = Sequential::new([
        Layer::dense((1, 2), vec![1.0, -1.0], vec![0.0, 0.0], Some(ActFn::relu())).unwrap(),
        Layer::dense((2, 1), vec![1.0, 1.0], vec![0.0], None).unwrap(),
    ])
    .unwrap();

    // |x|
    let y = model.predict(array![[3.0], [-2.0]].view()).unwrap();
    assert_eq!(y.to_vec(), vec![3.0, 2.0]);
    assert_eq!(model.size(), 7);
}

#[test]
fn test_sequential_sigmoid_amplitude() {
    let model = Sequential::new([
        Layer::dense((1, 1), vec![0.0], vec![0.0], Some(ActFn::sigmoid(4.0))).unwrap(),
    ])
    .unwrap();

    let y = model.predict_one(&[123.0]).unwrap();
    assert_eq!(y, 2.0);
}

#[test]
fn test_sequential_rejects_mismatched_layers() {
    let err = Sequential::new([
        Layer::dense((2, 3), vec![0.0; 6], vec![0.0; 3], None).unwrap(),
        Layer::dense((2, 1), vec![0.0; 2], vec![0.0], None).unwrap(),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        MlErr::LayerDimMismatch {
            layer: 1,
            got: 2,
            expected: 3
        }
    ));
}

#[test]
fn test_sequential_requires_scalar_output() {
    let err = Sequential::new([Layer::dense((2, 2), vec![0.0; 4], vec![0.0; 2], None).unwrap()])
        .unwrap_err();
    assert!(matches!(err, MlErr::SizeMismatch { got: 2, .. }));
}

#[test]
fn test_dense_rejects_wrong_parameter_count() {
    let err = Layer::dense((2, 2), vec![0.0; 3], vec![0.0; 2], None).unwrap_err();
    assert!(matches!(
        err,
        MlErr::SizeMismatch {
            got: 3,
            expected: 4,
            ..
        }
    ));
}

#[test]
fn test_non_finite_prediction_is_an_error() {
    let model =
        Sequential::new([Layer::dense((1, 1), vec![f32::MAX], vec![0.0], None).unwrap()]).unwrap();

    let x = [f32::MAX];
    let err = model
        .predict(ArrayView2::from_shape((1, 1), &x).unwrap())
        .unwrap_err();
    assert!(matches!(err, MlErr::NonFinite { row: 0 }));
}

#[test]
fn test_model_from_json_gradient_boosting() {
    let json = r#"{ "gradient_boosting": {
        "n_features": 2, "init": 50.0, "learning_rate": 1.0,
        "trees": [[
            { "split": { "feature": 1, "threshold": 0.5, "left": 1, "right": 2 } },
            { "leaf": { "value": -5.0 } },
            { "leaf": { "value": 5.0 } }
        ]]
    } }"#;

    let model = Model::from_json(json).unwrap();
    assert_eq!(model.kind(), "gradient_boosting");
    assert_eq!(model.n_features(), 2);
    assert_eq!(model.predict_one(&[0.0, 1.0]).unwrap(), 55.0);
}

#[test]
fn test_model_from_json_sequential() {
    let json = r#"{ "sequential": { "layers": [
        { "dense": { "dim": [2, 1], "weights": [1.0, 1.0], "biases": [0.5] } }
    ] } }"#;

    let model = Model::from_json(json).unwrap();
    assert_eq!(model.kind(), "sequential");
    assert_eq!(model.predict_one(&[1.0, 2.0]).unwrap(), 3.5);
}

#[test]
fn test_model_from_invalid_json() {
    let err = Model::from_json(r#"{ "random_forest": {} }"#).unwrap_err();
    assert!(matches!(err, MlErr::Parse(_)));
}

#[test]
fn test_model_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "sequential": {{ "layers": [
            {{ "dense": {{ "dim": [1, 1], "weights": [2.0], "biases": [0.0],
                           "act_fn": "relu" }} }}
        ] }} }}"#
    )
    .unwrap();

    let model = Model::load(file.path()).unwrap();
    assert_eq!(model.predict_one(&[-3.0]).unwrap(), 0.0);
    assert_eq!(model.predict_one(&[3.0]).unwrap(), 6.0);
}

#[test]
fn test_model_load_missing_file() {
    let err = Model::load("/definitely/not/here/model.json").unwrap_err();
    assert!(matches!(err, MlErr::Io(_)));
}
