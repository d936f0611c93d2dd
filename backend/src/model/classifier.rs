use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

use super::{ArtifactError, Classifier, ModelError, check_width, ensure_finite};

fn default_classes() -> [u8; 2] {
    [0, 1]
}

/// Fitted classifier parameters as exported by the training job.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression {
        coef: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_classes")]
        classes: [u8; 2],
    },
    RandomForest {
        n_features: usize,
        #[serde(default = "default_classes")]
        classes: [u8; 2],
        trees: Vec<TreeArtifact>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<NodeArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeArtifact {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: Vec<f64>,
    },
}

impl ClassifierArtifact {
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>, ArtifactError> {
        match self {
            ClassifierArtifact::LogisticRegression {
                coef,
                intercept,
                classes,
            } => {
                ensure_finite("coef", &coef)?;
                ensure_finite("intercept", &[intercept])?;
                check_classes(classes)?;
                Ok(Box::new(LogisticRegression {
                    coef: Array1::from(coef),
                    intercept,
                    classes,
                }))
            }
            ClassifierArtifact::RandomForest {
                n_features,
                classes,
                trees,
            } => {
                check_classes(classes)?;
                if n_features == 0 {
                    return Err(ArtifactError::Invalid("'n_features' is zero".to_string()));
                }
                if trees.is_empty() {
                    return Err(ArtifactError::Invalid("forest has no trees".to_string()));
                }
                let trees = trees
                    .into_iter()
                    .enumerate()
                    .map(|(i, tree)| DecisionTree::build(tree, n_features, i))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Box::new(RandomForest {
                    n_features,
                    classes,
                    trees,
                }))
            }
        }
    }
}

fn check_classes(classes: [u8; 2]) -> Result<(), ArtifactError> {
    if classes[0] == classes[1] || classes.iter().any(|c| *c > 1) {
        return Err(ArtifactError::Invalid(format!(
            "classes must be 0 and 1, got {:?}",
            classes
        )));
    }
    Ok(())
}

/// Linear decision function; a positive score selects the second class.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coef: Array1<f64>,
    intercept: f64,
    classes: [u8; 2],
}

impl LogisticRegression {
    pub fn decision_function(&self, row: &[f64]) -> Result<f64, ModelError> {
        check_width("LogisticRegression", self.coef.len(), row.len())?;
        Ok(self.coef.dot(&ArrayView1::from(row)) + self.intercept)
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, row: &[f64]) -> Result<u8, ModelError> {
        let score = self.decision_function(row)?;
        Ok(if score > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(Array1<f64>),
}

#[derive(Debug, Clone)]
struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    // Children must sit after their parent so traversal always terminates.
    fn build(tree: TreeArtifact, n_features: usize, tree_index: usize) -> Result<Self, ArtifactError> {
        let invalid = |node: usize, reason: String| {
            ArtifactError::Invalid(format!("tree {} node {}: {}", tree_index, node, reason))
        };
        if tree.nodes.is_empty() {
            return Err(ArtifactError::Invalid(format!("tree {} has no nodes", tree_index)));
        }

        let len = tree.nodes.len();
        let mut nodes = Vec::with_capacity(len);
        for (i, node) in tree.nodes.into_iter().enumerate() {
            match node {
                NodeArtifact::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(invalid(i, format!("feature {} out of range", feature)));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(i, "non-finite threshold".to_string()));
                    }
                    for child in [left, right] {
                        if child <= i || child >= len {
                            return Err(invalid(i, format!("child {} out of order", child)));
                        }
                    }
                    nodes.push(Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    });
                }
                NodeArtifact::Leaf { leaf } => {
                    if leaf.len() != 2 {
                        return Err(invalid(i, format!("leaf has {} class weights", leaf.len())));
                    }
                    let total: f64 = leaf.iter().sum();
                    if leaf.iter().any(|w| !w.is_finite() || *w < 0.0) || total <= 0.0 {
                        return Err(invalid(i, "leaf weights must be non-negative with a positive sum".to_string()));
                    }
                    nodes.push(Node::Leaf(Array1::from(leaf) / total));
                }
            }
        }
        Ok(Self { nodes })
    }

    fn leaf_for(&self, row: &[f64]) -> &Array1<f64> {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold { *left } else { *right };
                }
                Node::Leaf(proba) => return proba,
            }
        }
    }
}

/// Averages per-tree class probabilities and picks the larger one; ties go to the first class.
#[derive(Debug, Clone)]
pub struct RandomForest {
    n_features: usize,
    classes: [u8; 2],
    trees: Vec<DecisionTree>,
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, row: &[f64]) -> Result<u8, ModelError> {
        check_width("RandomForestClassifier", self.n_features, row.len())?;
        let mut votes = Array1::<f64>::zeros(2);
        for tree in &self.trees {
            votes += tree.leaf_for(row);
        }
        Ok(if votes[1] > votes[0] {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Box<dyn Classifier> {
        serde_json::from_str::<ClassifierArtifact>(json)
            .unwrap()
            .into_classifier()
            .unwrap()
    }

    #[test]
    fn logistic_regression_thresholds_decision_at_zero() {
        let model = LogisticRegression {
            coef: Array1::from(vec![1.0, -2.0]),
            intercept: 0.5,
            classes: [0, 1],
        };
        assert_eq!(model.decision_function(&[1.0, 1.0]).unwrap(), -0.5);
        assert_eq!(model.predict(&[1.0, 1.0]).unwrap(), 0);
        assert_eq!(model.predict(&[2.0, 0.0]).unwrap(), 1);
        // exactly zero stays with the first class
        assert_eq!(model.predict(&[1.5, 1.0]).unwrap(), 0);
    }

    #[test]
    fn logistic_regression_defaults_classes() {
        let model = decode(r#"{"kind":"logistic_regression","coef":[1.0],"intercept":0.0}"#);
        assert_eq!(model.n_features(), 1);
        assert_eq!(model.predict(&[3.0]).unwrap(), 1);
        assert_eq!(model.predict(&[-3.0]).unwrap(), 0);
    }

    #[test]
    fn duplicate_or_unknown_classes_are_rejected() {
        for classes in ["[1,1]", "[0,2]"] {
            let json = format!(
                r#"{{"kind":"logistic_regression","coef":[1.0],"intercept":0.0,"classes":{}}}"#,
                classes
            );
            let artifact: ClassifierArtifact = serde_json::from_str(&json).unwrap();
            assert!(matches!(artifact.into_classifier(), Err(ArtifactError::Invalid(_))));
        }
    }

    #[test]
    fn random_forest_averages_tree_probabilities() {
        let model = decode(
            r#"{
                "kind": "random_forest",
                "n_features": 2,
                "trees": [
                    {"nodes": [
                        {"feature": 0, "threshold": 0.5, "left": 1, "right": 2},
                        {"leaf": [9.0, 1.0]},
                        {"leaf": [1.0, 3.0]}
                    ]},
                    {"nodes": [
                        {"feature": 1, "threshold": 0.0, "left": 1, "right": 2},
                        {"leaf": [1.0, 0.0]},
                        {"leaf": [0.0, 1.0]}
                    ]}
                ]
            }"#,
        );
        // tree 0 right (0.25, 0.75) + tree 1 left (1.0, 0.0)
        assert_eq!(model.predict(&[1.0, -1.0]).unwrap(), 0);
        // tree 0 right (0.25, 0.75) + tree 1 right (0.0, 1.0)
        assert_eq!(model.predict(&[1.0, 1.0]).unwrap(), 1);
        // tree 0 left (0.9, 0.1) + tree 1 right (0.0, 1.0)
        assert_eq!(model.predict(&[0.0, 1.0]).unwrap(), 1);
    }

    #[test]
    fn random_forest_tie_picks_first_class() {
        let model = decode(
            r#"{"kind":"random_forest","n_features":1,"trees":[{"nodes":[{"leaf":[1.0,1.0]}]}]}"#,
        );
        assert_eq!(model.predict(&[0.0]).unwrap(), 0);
    }

    #[test]
    fn backward_child_reference_is_rejected() {
        let artifact: ClassifierArtifact = serde_json::from_str(
            r#"{"kind":"random_forest","n_features":1,"trees":[{"nodes":[
                {"feature":0,"threshold":0.0,"left":1,"right":0},
                {"leaf":[1.0,0.0]}
            ]}]}"#,
        )
        .unwrap();
        let err = artifact.into_classifier().err().unwrap();
        assert!(err.to_string().contains("tree 0 node 0"));
    }

    #[test]
    fn forest_checks_input_width() {
        let model = decode(
            r#"{"kind":"random_forest","n_features":3,"trees":[{"nodes":[{"leaf":[0.0,1.0]}]}]}"#,
        );
        assert!(matches!(
            model.predict(&[0.0]),
            Err(ModelError::DimensionMismatch { expected: 3, got: 1, .. })
        ));
    }
}
