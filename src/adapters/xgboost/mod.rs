//! XGBoost adapter: Implementation of PriceModel over XGBoost JSON models.
//!
//! Reads the JSON document written by `Booster.save_model("model.json")`
//! and evaluates the tree ensemble directly. Only regression-style
//! single-target models are accepted.
//!
//! # Evaluation
//!
//! - A node is a leaf when `left_children[i] == -1`; its value is stored
//!   in `split_conditions[i]`.
//! - Internal nodes send a row left when `x[split_indices[i]] < split_conditions[i]`,
//!   or when the value is missing (NaN) and `default_left[i]` is set.
//! - Comparisons and accumulation use `f32`, as XGBoost does.
//! - The output is `link(base_margin + sum(weight_t * leaf_t))`.
//! - When the model records `best_iteration` (early stopping), only the trees
//!   of rounds `0..=best_iteration` are kept, located via `iteration_indptr`
//!   or one tree per round when that is absent.
//! - Categorical splits are not supported and are rejected at load.
//!
//! # Thread Safety
//!
//! The model is immutable after loading; `predict` only reads it.

mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::manifest::{verify_manifest, MODEL_FILE};
use crate::domain::FeatureVector;
use crate::ports::{ModelError, PriceModel};

use schema::{parse_param, RawModel, RawTree};

/// Inverse link applied to the summed margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Identity,
    Logistic,
    Log,
}

impl Link {
    /// Map an objective name to its link.
    ///
    /// # Errors
    /// Returns `ModelError::Unsupported` for ranking, classification into
    /// several classes, survival and other non-scalar objectives.
    pub fn from_objective(name: &str) -> Result<Self, ModelError> {
        match name {
            "reg:squarederror"
            | "reg:linear"
            | "reg:squaredlogerror"
            | "reg:pseudohubererror"
            | "reg:absoluteerror"
            | "reg:quantileerror" => Ok(Self::Identity),
            "reg:logistic" | "binary:logistic" => Ok(Self::Logistic),
            "count:poisson" | "reg:gamma" | "reg:tweedie" => Ok(Self::Log),
            other => Err(ModelError::Unsupported(format!("objective {other:?}"))),
        }
    }

    /// Convert `base_score` from output space into margin space.
    fn base_margin(&self, base_score: f32) -> Result<f32, ModelError> {
        match self {
            Self::Identity => Ok(base_score),
            Self::Logistic => {
                if !(base_score > 0.0 && base_score < 1.0) {
                    return Err(ModelError::Format(format!(
                        "base_score {base_score} must be in (0, 1) for a logistic objective"
                    )));
                }
                Ok((base_score / (1.0 - base_score)).ln())
            }
            Self::Log => {
                if base_score <= 0.0 {
                    return Err(ModelError::Format(format!(
                        "base_score {base_score} must be positive for a log-link objective"
                    )));
                }
                Ok(base_score.ln())
            }
        }
    }

    fn apply(&self, margin: f32) -> f32 {
        match self {
            Self::Identity => margin,
            Self::Logistic => 1.0 / (1.0 + (-margin).exp()),
            Self::Log => margin.exp(),
        }
    }
}

/// One regression tree in flat array form.
#[derive(Debug, Clone)]
struct RegTree {
    left: Vec<i32>,
    right: Vec<i32>,
    split_index: Vec<usize>,
    split_condition: Vec<f32>,
    default_left: Vec<bool>,
}

impl RegTree {
    fn from_raw(raw: RawTree, num_feature: usize, tree_id: usize) -> Result<Self, ModelError> {
        let n = raw.left_children.len();
        let bad = |msg: String| ModelError::Format(format!("tree {tree_id}: {msg}"));

        if n == 0 {
            return Err(bad("tree has no nodes".into()));
        }
        if raw.right_children.len() != n
            || raw.split_indices.len() != n
            || raw.split_conditions.len() != n
            || raw.default_left.len() != n
        {
            return Err(bad("node arrays have different lengths".into()));
        }
        if let Some(node) = raw.split_type.iter().position(|t| *t != 0) {
            return Err(ModelError::Unsupported(format!(
                "tree {tree_id}: categorical split at node {node}"
            )));
        }

        let mut split_index = Vec::with_capacity(n);
        for i in 0..n {
            let (l, r) = (raw.left_children[i], raw.right_children[i]);
            if l == -1 || r == -1 {
                if l != r {
                    return Err(bad(format!("node {i} has exactly one child")));
                }
                split_index.push(0);
                continue;
            }

            // Children always come after their parent; this also rules out cycles.
            let in_range = |c: i32| c > i as i32 && (c as usize) < n;
            if !in_range(l) || !in_range(r) {
                return Err(bad(format!("node {i} has out-of-range children ({l}, {r})")));
            }

            let feature = raw.split_indices[i] as usize;
            if feature >= num_feature {
                return Err(bad(format!(
                    "node {i} splits on feature {feature}, model has {num_feature}"
                )));
            }
            split_index.push(feature);
        }

        Ok(Self {
            left: raw.left_children,
            right: raw.right_children,
            split_index,
            split_condition: raw.split_conditions,
            default_left: raw.default_left.iter().map(|f| f.is_set()).collect(),
        })
    }

    fn leaf_value(&self, row: &[f32]) -> f32 {
        let mut node = 0usize;
        loop {
            let left = self.left[node];
            if left == -1 {
                return self.split_condition[node];
            }

            let value = row[self.split_index[node]];
            let go_left = if value.is_nan() {
                self.default_left[node]
            } else {
                value < self.split_condition[node]
            };

            node = if go_left {
                left as usize
            } else {
                self.right[node] as usize
            };
        }
    }
}

/// Number of trees in rounds `0..=best`.
fn best_iteration_end(best: usize, indptr: Option<&[usize]>) -> Result<usize, ModelError> {
    match indptr {
        Some(indptr) => indptr.get(best + 1).copied().ok_or_else(|| {
            ModelError::Format(format!(
                "best_iteration {best} is past the {} recorded rounds",
                indptr.len().saturating_sub(1)
            ))
        }),
        None => Ok(best + 1),
    }
}

/// A loaded XGBoost tree ensemble.
#[derive(Debug, Clone)]
pub struct XgboostModel {
    trees: Vec<RegTree>,
    tree_weights: Vec<f32>,
    base_margin: f32,
    link: Link,
    objective: String,
    num_feature: usize,
    feature_names: Option<Vec<String>>,
    source: Option<PathBuf>,
}

impl XgboostModel {
    /// Load a model from a file, or from `model.json` inside a directory.
    ///
    /// The directory's `manifest.json` is verified first when present;
    /// with `require_manifest` set, a missing manifest is an error.
    ///
    /// # Errors
    /// Returns error if the artifact is missing, fails its integrity check,
    /// or is not a supported XGBoost model.
    pub fn load(path: &Path, require_manifest: bool) -> Result<Self, ModelError> {
        let (base_dir, model_path) = if path.is_dir() {
            (path.to_path_buf(), path.join(MODEL_FILE))
        } else {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            (parent.to_path_buf(), path.to_path_buf())
        };

        if !model_path.exists() {
            return Err(ModelError::Io(format!(
                "No model found at {model_path:?} (expected an XGBoost {MODEL_FILE})"
            )));
        }

        let model_file = model_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(MODEL_FILE);
        verify_manifest(&base_dir, model_file, require_manifest)?;

        let content = fs::read_to_string(&model_path)
            .map_err(|e| ModelError::Io(format!("Failed to read {model_path:?}: {e}")))?;
        let mut model = Self::from_json_str(&content)?;
        model.source = Some(model_path.clone());

        tracing::info!(
            "Loaded model from {:?} (objective={}, trees={}, n_features={})",
            model_path,
            model.objective,
            model.trees.len(),
            model.num_feature
        );

        Ok(model)
    }

    /// Parse a model from its JSON text.
    ///
    /// # Errors
    /// Returns error if the document is malformed or unsupported.
    pub fn from_json_str(content: &str) -> Result<Self, ModelError> {
        let raw: RawModel = serde_json::from_str(content)
            .map_err(|e| ModelError::Format(format!("Invalid XGBoost JSON: {e}")))?;
        let learner = raw.learner;
        let params = learner.learner_model_param;

        let num_feature: usize = parse_param("num_feature", &params.num_feature)?;
        if num_feature == 0 {
            return Err(ModelError::Format("num_feature must be positive".into()));
        }

        let num_class: usize = parse_param("num_class", &params.num_class)?;
        let num_target: usize = parse_param("num_target", &params.num_target)?;
        if num_class > 1 || num_target > 1 {
            return Err(ModelError::Unsupported(format!(
                "multi-output model (num_class={num_class}, num_target={num_target})"
            )));
        }

        let objective = learner.objective.name;
        let link = Link::from_objective(&objective)?;
        let base_score: f32 = parse_param("base_score", &params.base_score)?;
        let base_margin = link.base_margin(base_score)?;

        let booster = learner.gradient_booster;
        let (tree_model, mut tree_weights) = match booster.name.as_str() {
            "gbtree" => {
                let model = booster
                    .model
                    .ok_or_else(|| ModelError::Format("gbtree booster has no model".into()))?;
                let n = model.trees.len();
                (model, vec![1.0; n])
            }
            "dart" => {
                let model = booster
                    .gbtree
                    .and_then(|inner| inner.model)
                    .ok_or_else(|| ModelError::Format("dart booster has no gbtree model".into()))?;
                if booster.weight_drop.len() != model.trees.len() {
                    return Err(ModelError::Format(format!(
                        "dart weight_drop has {} entries for {} trees",
                        booster.weight_drop.len(),
                        model.trees.len()
                    )));
                }
                (model, booster.weight_drop)
            }
            other => {
                return Err(ModelError::Unsupported(format!("booster {other:?}")));
            }
        };
        let mut raw_trees = tree_model.trees;

        if raw_trees.is_empty() {
            return Err(ModelError::Format("model contains no trees".into()));
        }

        // An early-stopped model predicts with the trees up to its best round only.
        if let Some(best) = &learner.attributes.best_iteration {
            let best: usize = parse_param("best_iteration", best)?;
            let end = best_iteration_end(best, tree_model.iteration_indptr.as_deref())?;
            if end == 0 || end > raw_trees.len() {
                return Err(ModelError::Format(format!(
                    "best_iteration {best} selects {end} of {} trees",
                    raw_trees.len()
                )));
            }
            if end < raw_trees.len() {
                tracing::info!(
                    "Using {} of {} trees (best_iteration={})",
                    end,
                    raw_trees.len(),
                    best
                );
                raw_trees.truncate(end);
                tree_weights.truncate(end);
            }
        }

        let trees = raw_trees
            .into_iter()
            .enumerate()
            .map(|(i, t)| RegTree::from_raw(t, num_feature, i))
            .collect::<Result<Vec<_>, _>>()?;

        let feature_names = match learner.feature_names {
            Some(names) if !names.is_empty() => {
                if names.len() != num_feature {
                    return Err(ModelError::Format(format!(
                        "feature_names has {} entries, num_feature is {num_feature}",
                        names.len()
                    )));
                }
                Some(names)
            }
            _ => None,
        };

        Ok(Self {
            trees,
            tree_weights,
            base_margin,
            link,
            objective,
            num_feature,
            feature_names,
            source: None,
        })
    }

    #[must_use]
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn objective(&self) -> &str {
        &self.objective
    }

    #[must_use]
    pub fn link(&self) -> Link {
        self.link
    }

    /// File the model was loaded from, if loaded from disk.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn predict_row(&self, row: &[f32]) -> f32 {
        let margin = self
            .trees
            .iter()
            .zip(&self.tree_weights)
            .fold(self.base_margin, |acc, (tree, w)| acc + w * tree.leaf_value(row));
        self.link.apply(margin)
    }
}

impl PriceModel for XgboostModel {
    fn num_features(&self) -> usize {
        self.num_feature
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.num_feature {
            return Err(ModelError::FeatureCount {
                expected: self.num_feature,
                got: features.len(),
            });
        }

        let row: Vec<f32> = features.as_slice().iter().map(|v| *v as f32).collect();
        Ok(f64::from(self.predict_row(&row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::manifest::ModelManifest;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    /// Stump on feature `f`: `x[f] < t` -> `lo`, else `hi`.
    fn stump(f: u32, t: f32, lo: f32, hi: f32, default_left: u8) -> Value {
        json!({
            "left_children": [1, -1, -1],
            "right_children": [2, -1, -1],
            "split_indices": [f, 0, 0],
            "split_conditions": [t, lo, hi],
            "default_left": [default_left, 0, 0],
            "tree_param": {"num_nodes": "3", "num_feature": "2"}
        })
    }

    fn model_json(objective: &str, base_score: &str, booster: Value) -> String {
        json!({
            "learner": {
                "feature_names": ["a", "b"],
                "gradient_booster": booster,
                "learner_model_param": {
                    "base_score": base_score,
                    "num_class": "0",
                    "num_feature": "2",
                    "num_target": "1"
                },
                "objective": {"name": objective}
            },
            "version": [2, 0, 3]
        })
        .to_string()
    }

    fn gbtree(trees: Vec<Value>) -> Value {
        json!({"name": "gbtree", "model": {"trees": trees}})
    }

    fn row(values: &[f64]) -> FeatureVector {
        FeatureVector::from_values(values.to_vec())
    }

    #[test]
    fn test_sum_of_trees_plus_base_score() {
        let json = model_json(
            "reg:squarederror",
            "1E2",
            gbtree(vec![stump(0, 5.0, -10.0, 10.0, 1), stump(1, 0.5, 1.0, 2.0, 0)]),
        );
        let model = XgboostModel::from_json_str(&json).expect("parse");

        assert_eq!(model.num_trees(), 2);
        assert_eq!(model.link(), Link::Identity);
        assert_eq!(model.predict(&row(&[3.0, 0.0])).expect("predict"), 91.0);
        assert_eq!(model.predict(&row(&[5.0, 1.0])).expect("predict"), 112.0);
        assert_eq!(
            model.feature_names(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_missing_values_follow_default_direction() {
        let json = model_json(
            "reg:squarederror",
            "0",
            gbtree(vec![stump(0, 5.0, -10.0, 10.0, 1), stump(1, 0.5, 1.0, 2.0, 0)]),
        );
        let model = XgboostModel::from_json_str(&json).expect("parse");
        // feature a missing -> left (-10); feature b missing -> right (2)
        assert_eq!(model.predict(&row(&[f64::NAN, f64::NAN])).expect("predict"), -8.0);
    }

    #[test]
    fn test_bracketed_base_score_and_logistic_link() {
        let json = model_json(
            "reg:logistic",
            "[5E-1]",
            gbtree(vec![stump(0, 1.0, 0.0, 2.0, 0)]),
        );
        let model = XgboostModel::from_json_str(&json).expect("parse");
        let p = model.predict(&row(&[0.0, 0.0])).expect("predict");
        assert!((p - 0.5).abs() < 1e-6);
        let p = model.predict(&row(&[1.0, 0.0])).expect("predict");
        assert!((p - 1.0 / (1.0 + (-2.0f64).exp())).abs() < 1e-6);
    }

    #[test]
    fn test_log_link() {
        let json = model_json("reg:gamma", "1", gbtree(vec![stump(0, 1.0, 0.0, 1.0, 0)]));
        let model = XgboostModel::from_json_str(&json).expect("parse");
        let p = model.predict(&row(&[2.0, 0.0])).expect("predict");
        assert!((p - std::f64::consts::E).abs() < 1e-5);
    }

    #[test]
    fn test_dart_weights_scale_trees() {
        let booster = json!({
            "name": "dart",
            "gbtree": {"name": "gbtree", "model": {"trees": [
                stump(0, 1.0, 4.0, 4.0, 0),
                stump(0, 1.0, 10.0, 10.0, 0)
            ]}},
            "weight_drop": [0.5, 1.0]
        });
        let model = XgboostModel::from_json_str(&model_json("reg:squarederror", "0", booster))
            .expect("parse");
        assert_eq!(model.predict(&row(&[0.0, 0.0])).expect("predict"), 12.0);
    }

    #[test]
    fn test_boolean_default_left_is_accepted() {
        let mut tree = stump(0, 1.0, -1.0, 1.0, 0);
        tree["default_left"] = json!([true, false, false]);
        let json = model_json("reg:squarederror", "0", gbtree(vec![tree]));
        let model = XgboostModel::from_json_str(&json).expect("parse");
        assert_eq!(model.predict(&row(&[f64::NAN, 0.0])).expect("predict"), -1.0);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let json = model_json(
            "reg:squarederror",
            "0.5",
            gbtree(vec![stump(0, 0.3, 0.1, 0.7, 0), stump(1, 0.9, 0.2, 0.4, 1)]),
        );
        let model = XgboostModel::from_json_str(&json).expect("parse");
        let input = row(&[0.25, 1.5]);
        let a = model.predict(&input).expect("predict");
        let b = model.predict(&input).expect("predict");
        assert_eq!(a.to_bits(), b.to_bits());
    }

    fn with_best_iteration(json: &str, best: &str) -> String {
        let mut doc: Value = serde_json::from_str(json).expect("json");
        doc["learner"]["attributes"] = json!({"best_iteration": best, "best_score": "1.5"});
        doc.to_string()
    }

    #[test]
    fn test_best_iteration_limits_trees() {
        let booster = json!({"name": "gbtree", "model": {
            "trees": [stump(0, 1.0, 10.0, 10.0, 0), stump(0, 1.0, 1000.0, 1000.0, 0)],
            "iteration_indptr": [0, 1, 2]
        }});
        let json = with_best_iteration(&model_json("reg:squarederror", "0", booster), "0");
        let model = XgboostModel::from_json_str(&json).expect("parse");

        assert_eq!(model.num_trees(), 1);
        assert_eq!(model.predict(&row(&[0.0, 0.0])).expect("predict"), 10.0);
    }

    #[test]
    fn test_best_iteration_without_indptr_counts_one_tree_per_round() {
        let trees = vec![
            stump(0, 1.0, 1.0, 1.0, 0),
            stump(0, 1.0, 10.0, 10.0, 0),
            stump(0, 1.0, 100.0, 100.0, 0),
        ];
        let json = with_best_iteration(&model_json("reg:squarederror", "0", gbtree(trees)), "1");
        let model = XgboostModel::from_json_str(&json).expect("parse");

        assert_eq!(model.num_trees(), 2);
        assert_eq!(model.predict(&row(&[0.0, 0.0])).expect("predict"), 11.0);
    }

    #[test]
    fn test_best_iteration_on_last_round_keeps_all_trees() {
        let trees = vec![stump(0, 1.0, 1.0, 1.0, 0), stump(0, 1.0, 10.0, 10.0, 0)];
        let json = with_best_iteration(&model_json("reg:squarederror", "0", gbtree(trees)), "1");
        let model = XgboostModel::from_json_str(&json).expect("parse");
        assert_eq!(model.num_trees(), 2);
        assert_eq!(model.predict(&row(&[0.0, 0.0])).expect("predict"), 11.0);
    }

    #[test]
    fn test_best_iteration_past_last_round_is_rejected() {
        let booster = json!({"name": "gbtree", "model": {
            "trees": [stump(0, 1.0, 1.0, 1.0, 0)],
            "iteration_indptr": [0, 1]
        }});
        let json = with_best_iteration(&model_json("reg:squarederror", "0", booster), "3");
        let err = XgboostModel::from_json_str(&json).expect_err("past end");
        assert!(matches!(err, ModelError::Format(_)));

        let json = with_best_iteration(
            &model_json("reg:squarederror", "0", gbtree(vec![stump(0, 1.0, 1.0, 1.0, 0)])),
            "4",
        );
        let err = XgboostModel::from_json_str(&json).expect_err("past end");
        assert!(err.to_string().contains("best_iteration 4"));
    }

    #[test]
    fn test_categorical_splits_are_rejected() {
        let mut numerical = stump(0, 1.0, 1.0, 2.0, 0);
        numerical["split_type"] = json!([0, 0, 0]);
        let json = model_json("reg:squarederror", "0", gbtree(vec![numerical]));
        assert!(XgboostModel::from_json_str(&json).is_ok());

        let mut categorical = stump(0, 1.0, 1.0, 2.0, 0);
        categorical["split_type"] = json!([1, 0, 0]);
        categorical["categories"] = json!([2]);
        categorical["categories_nodes"] = json!([0]);
        let json = model_json("reg:squarederror", "0", gbtree(vec![categorical]));
        let err = XgboostModel::from_json_str(&json).expect_err("categorical");
        assert!(matches!(err, ModelError::Unsupported(_)));
        assert!(err.to_string().contains("categorical split"));
    }

    #[test]
    fn test_rejects_wrong_vector_length() {
        let json = model_json("reg:squarederror", "0", gbtree(vec![stump(0, 1.0, 0.0, 1.0, 0)]));
        let model = XgboostModel::from_json_str(&json).expect("parse");
        let err = model.predict(&row(&[1.0])).expect_err("wrong length");
        assert!(matches!(err, ModelError::FeatureCount { expected: 2, got: 1 }));
    }

    #[test]
    fn test_rejects_malformed_trees() {
        let mut cyclic = stump(0, 1.0, 0.0, 1.0, 0);
        cyclic["left_children"] = json!([0, -1, -1]);
        let err = XgboostModel::from_json_str(&model_json(
            "reg:squarederror",
            "0",
            gbtree(vec![cyclic]),
        ))
        .expect_err("cycle");
        assert!(err.to_string().contains("out-of-range children"));

        let out_of_range = stump(7, 1.0, 0.0, 1.0, 0);
        let err = XgboostModel::from_json_str(&model_json(
            "reg:squarederror",
            "0",
            gbtree(vec![out_of_range]),
        ))
        .expect_err("bad feature");
        assert!(err.to_string().contains("splits on feature 7"));

        let err = XgboostModel::from_json_str(&model_json("reg:squarederror", "0", gbtree(vec![])))
            .expect_err("no trees");
        assert!(err.to_string().contains("no trees"));
    }

    #[test]
    fn test_rejects_unsupported_models() {
        let err = XgboostModel::from_json_str(&model_json(
            "rank:pairwise",
            "0",
            gbtree(vec![stump(0, 1.0, 0.0, 1.0, 0)]),
        ))
        .expect_err("ranking");
        assert!(matches!(err, ModelError::Unsupported(_)));

        let err = XgboostModel::from_json_str(&model_json(
            "reg:squarederror",
            "0",
            json!({"name": "gblinear", "model": {"weights": [0.0]}}),
        ))
        .expect_err("linear booster");
        assert!(matches!(err, ModelError::Unsupported(_)));

        assert!(XgboostModel::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_from_directory_with_manifest() {
        let temp = tempdir().expect("tempdir");
        let dir = temp.path();
        let json = model_json("reg:squarederror", "10", gbtree(vec![stump(0, 1.0, 1.0, 2.0, 0)]));
        fs::write(dir.join(MODEL_FILE), &json).expect("write model");
        ModelManifest::for_files(dir, &[MODEL_FILE])
            .expect("hash")
            .write(dir)
            .expect("write manifest");

        let model = XgboostModel::load(dir, true).expect("load");
        assert_eq!(model.source(), Some(dir.join(MODEL_FILE).as_path()));
        assert_eq!(model.predict(&row(&[5.0, 0.0])).expect("predict"), 12.0);

        // Tampering after signing the digests must fail closed.
        fs::write(dir.join(MODEL_FILE), json.replace("\"10\"", "\"11\"")).expect("tamper");
        assert!(matches!(
            XgboostModel::load(dir, false),
            Err(ModelError::Integrity(_))
        ));
    }

    #[test]
    fn test_load_missing_model() {
        let temp = tempdir().expect("tempdir");
        let err = XgboostModel::load(temp.path(), false).expect_err("missing");
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn test_shipped_demo_model_loads() {
        let model = XgboostModel::load(Path::new("models"), true).expect("demo model");
        assert_eq!(model.num_features(), crate::domain::FEATURE_COUNT);
        assert_eq!(
            model.feature_names().map(<[String]>::len),
            Some(crate::domain::FEATURE_COUNT)
        );
    }
}
