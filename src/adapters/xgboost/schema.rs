//! Serde mirror of the XGBoost JSON model document.
//!
//! Only the fields needed for inference are declared; everything else in
//! the document (loss changes, hessians, attributes) is ignored.

use std::str::FromStr;

use serde::Deserialize;

use crate::ports::ModelError;

#[derive(Debug, Deserialize)]
pub(super) struct RawModel {
    pub learner: RawLearner,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawLearner {
    #[serde(default)]
    pub attributes: RawAttributes,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub gradient_booster: RawBooster,
    pub learner_model_param: RawLearnerParam,
    pub objective: RawObjective,
}

/// Booster attributes; early stopping records `best_iteration` here.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawAttributes {
    #[serde(default)]
    pub best_iteration: Option<String>,
}

/// XGBoost stores scalar parameters as strings.
#[derive(Debug, Deserialize)]
pub(super) struct RawLearnerParam {
    pub base_score: String,
    #[serde(default = "zero")]
    pub num_class: String,
    pub num_feature: String,
    #[serde(default = "one")]
    pub num_target: String,
}

fn zero() -> String {
    "0".into()
}

fn one() -> String {
    "1".into()
}

#[derive(Debug, Deserialize)]
pub(super) struct RawObjective {
    pub name: String,
}

/// `gbtree` carries `model`; `dart` nests a `gbtree` plus per-tree weights.
#[derive(Debug, Deserialize)]
pub(super) struct RawBooster {
    pub name: String,
    #[serde(default)]
    pub model: Option<RawTreeModel>,
    #[serde(default)]
    pub gbtree: Option<Box<RawBooster>>,
    #[serde(default)]
    pub weight_drop: Vec<f32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTreeModel {
    #[serde(default)]
    pub trees: Vec<RawTree>,
    /// Tree offsets per boosting round; absent in older files, which
    /// grow one tree per round.
    #[serde(default)]
    pub iteration_indptr: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTree {
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_indices: Vec<u32>,
    pub split_conditions: Vec<f32>,
    pub default_left: Vec<Flag>,
    /// 0 = numerical split, 1 = categorical split
    #[serde(default)]
    pub split_type: Vec<u8>,
}

/// `default_left` entries are written as 0/1 by current XGBoost and as
/// booleans by some older exporters.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(super) enum Flag {
    Bool(bool),
    Int(u8),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
        }
    }
}

/// Parse a string-encoded parameter; accepts the `"[1.5E4]"` form newer
/// XGBoost releases use for `base_score`.
pub(super) fn parse_param<T: FromStr>(name: &str, value: &str) -> Result<T, ModelError> {
    let trimmed = value.trim().trim_start_matches('[').trim_end_matches(']').trim();
    trimmed
        .parse()
        .map_err(|_| ModelError::Format(format!("Invalid {name} value {value:?}")))
}
