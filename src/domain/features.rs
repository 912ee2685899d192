//! Feature schema and one-hot encoder.
//!
//! The model consumes a fixed-order vector. Numeric inputs are copied into
//! their named slots; each categorical group contributes a single `1.0` at
//! `"<Group>_<Option>"` and zeros elsewhere.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vehicle::{CategoricalField, NumericField, Selection, VehicleSpec};

/// Number of features in the canonical schema.
pub const FEATURE_COUNT: usize = 36;

/// Canonical feature order the price model was trained against.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Horsepower_No",
    "Torque_No",
    "Make_Aston Martin",
    "Make_Audi",
    "Make_BMW",
    "Make_Bentley",
    "Make_Ford",
    "Make_Mercedes-Benz",
    "Make_Nissan",
    "Body Size_Compact",
    "Body Size_Large",
    "Body Size_Midsize",
    "Body Style_Cargo Minivan",
    "Body Style_Cargo Van",
    "Body Style_Convertible",
    "Body Style_Convertible SUV",
    "Body Style_Coupe",
    "Body Style_Hatchback",
    "Body Style_Passenger Minivan",
    "Body Style_Passenger Van",
    "Body Style_Pickup Truck",
    "Body Style_SUV",
    "Body Style_Sedan",
    "Body Style_Wagon",
    "Engine Aspiration_Electric Motor",
    "Engine Aspiration_Naturally Aspirated",
    "Engine Aspiration_Supercharged",
    "Engine Aspiration_Turbocharged",
    "Engine Aspiration_Twin-Turbo",
    "Engine Aspiration_Twincharged",
    "Drivetrain_4WD",
    "Drivetrain_AWD",
    "Drivetrain_FWD",
    "Drivetrain_RWD",
    "Transmission_automatic",
    "Transmission_manual",
];

/// What to do with a selection whose feature name is not in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCategoryPolicy {
    /// Fail the encoding.
    #[default]
    Reject,
    /// Drop the selection, leaving its group all zero.
    ZeroFill,
}

impl FromStr for UnknownCategoryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" | "strict" => Ok(Self::Reject),
            "zero-fill" | "zero_fill" | "zerofill" | "drop" => Ok(Self::ZeroFill),
            other => Err(format!(
                "unknown category policy {other:?} (expected \"reject\" or \"zero-fill\")"
            )),
        }
    }
}

impl std::fmt::Display for UnknownCategoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::ZeroFill => write!(f, "zero-fill"),
        }
    }
}

/// Errors raised while encoding a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("feature {feature:?} is not part of the model schema")]
    UnknownCategory { feature: String },

    #[error("model schema has no slot for numeric feature {0:?}")]
    MissingNumericFeature(&'static str),
}

/// Errors raised while building a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("feature list is empty")]
    Empty,

    #[error("duplicate feature name {0:?}")]
    Duplicate(String),
}

/// Ordered feature names with a name -> position index.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl PartialEq for FeatureSchema {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl FeatureSchema {
    /// The compile-time 36-feature schema.
    #[must_use]
    pub fn canonical() -> Self {
        Self::from_names(FEATURE_NAMES)
            .unwrap_or_else(|_| unreachable!("canonical feature names are unique"))
    }

    /// Build a schema from an ordered list of names.
    ///
    /// # Errors
    /// Returns error if the list is empty or contains duplicates.
    pub fn from_names<I, S>(names: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(SchemaError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names, index })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Value of a named feature in a vector encoded with this schema.
    #[must_use]
    pub fn value_of(&self, vector: &FeatureVector, name: &str) -> Option<f64> {
        self.index_of(name).and_then(|i| vector.get(i))
    }

    /// Feature names the form can produce that this schema lacks.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<String> {
        let numeric = NumericField::ALL
            .iter()
            .map(|f| f.feature_name().to_string());
        let categorical = CategoricalField::ALL.iter().flat_map(|field| {
            field
                .option_labels()
                .into_iter()
                .map(move |option| field.feature_name(option))
        });

        numeric
            .chain(categorical)
            .filter(|name| !self.index.contains_key(name))
            .collect()
    }

    /// Encode a vehicle into a vector ordered by this schema.
    ///
    /// # Errors
    /// Returns `EncodeError::UnknownCategory` under `Reject` when a selection
    /// has no slot, and `EncodeError::MissingNumericFeature` when a numeric
    /// slot is missing.
    pub fn encode(
        &self,
        spec: &VehicleSpec,
        policy: UnknownCategoryPolicy,
    ) -> Result<FeatureVector, EncodeError> {
        self.encode_parts(
            f64::from(spec.horsepower),
            f64::from(spec.torque),
            &spec.selections(),
            policy,
        )
    }

    /// Encode numeric values and an explicit list of selections.
    ///
    /// A group with no selection stays all zero.
    ///
    /// # Errors
    /// See [`FeatureSchema::encode`].
    pub fn encode_parts(
        &self,
        horsepower: f64,
        torque: f64,
        selections: &[Selection<'_>],
        policy: UnknownCategoryPolicy,
    ) -> Result<FeatureVector, EncodeError> {
        let mut values = vec![0.0; self.len()];

        for (field, value) in [
            (NumericField::Horsepower, horsepower),
            (NumericField::Torque, torque),
        ] {
            let name = field.feature_name();
            let i = self
                .index_of(name)
                .ok_or(EncodeError::MissingNumericFeature(name))?;
            values[i] = value;
        }

        for selection in selections {
            let feature = selection.feature_name();
            match self.index_of(&feature) {
                Some(i) => values[i] = 1.0,
                None => match policy {
                    UnknownCategoryPolicy::Reject => {
                        return Err(EncodeError::UnknownCategory { feature });
                    }
                    UnknownCategoryPolicy::ZeroFill => {
                        tracing::warn!(
                            feature = %feature,
                            "Selection has no slot in the model schema; encoding its group as all zero"
                        );
                    }
                },
            }
        }

        Ok(FeatureVector { values })
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Encoded model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::{
        BodySize, BodyStyle, Drivetrain, EngineAspiration, Make, Transmission,
    };

    fn bmw_sedan() -> VehicleSpec {
        VehicleSpec {
            horsepower: 300,
            torque: 400,
            make: Make::Bmw,
            body_size: BodySize::Midsize,
            body_style: BodyStyle::Sedan,
            engine_aspiration: EngineAspiration::Turbocharged,
            drivetrain: Drivetrain::AllWheel,
            transmission: Transmission::Automatic,
        }
    }

    fn schema_without(name: &str) -> FeatureSchema {
        FeatureSchema::from_names(FEATURE_NAMES.iter().filter(|n| **n != name).copied())
            .expect("valid schema")
    }

    #[test]
    fn test_canonical_schema() {
        let schema = FeatureSchema::canonical();
        assert_eq!(schema.len(), FEATURE_COUNT);
        assert_eq!(schema.index_of("Horsepower_No"), Some(0));
        assert_eq!(schema.index_of("Transmission_manual"), Some(35));
        assert!(schema.coverage_gaps().is_empty());
    }

    #[test]
    fn test_every_form_option_has_a_canonical_slot() {
        let schema = FeatureSchema::canonical();
        for field in CategoricalField::ALL {
            for option in field.option_labels() {
                assert!(
                    schema.index_of(&field.feature_name(option)).is_some(),
                    "{} has no slot",
                    field.feature_name(option)
                );
            }
        }
    }

    #[test]
    fn test_encode_example_vehicle() {
        let schema = FeatureSchema::canonical();
        let vector = schema
            .encode(&bmw_sedan(), UnknownCategoryPolicy::Reject)
            .expect("encode");

        assert_eq!(vector.len(), FEATURE_COUNT);
        assert_eq!(schema.value_of(&vector, "Horsepower_No"), Some(300.0));
        assert_eq!(schema.value_of(&vector, "Torque_No"), Some(400.0));

        let hot = [
            "Make_BMW",
            "Body Size_Midsize",
            "Body Style_Sedan",
            "Engine Aspiration_Turbocharged",
            "Drivetrain_AWD",
            "Transmission_automatic",
        ];
        for (name, value) in schema.names().iter().zip(vector.as_slice()) {
            let expected = match name.as_str() {
                "Horsepower_No" => 300.0,
                "Torque_No" => 400.0,
                n if hot.contains(&n) => 1.0,
                _ => 0.0,
            };
            assert_eq!(*value, expected, "unexpected value at {name}");
        }
    }

    #[test]
    fn test_exactly_one_hot_per_group() {
        let schema = FeatureSchema::canonical();
        let spec = VehicleSpec {
            horsepower: 1,
            torque: 1,
            ..bmw_sedan()
        };
        let vector = schema
            .encode(&spec, UnknownCategoryPolicy::Reject)
            .expect("encode");

        for field in CategoricalField::ALL {
            let ones = field
                .option_labels()
                .into_iter()
                .filter(|o| schema.value_of(&vector, &field.feature_name(o)) == Some(1.0))
                .count();
            assert_eq!(ones, 1, "{field} should have one hot slot");
        }

        // Six hot slots plus the two numeric slots that happen to equal 1.
        let ones = vector.as_slice().iter().filter(|v| **v == 1.0).count();
        assert_eq!(ones, 8);
        let zeros = vector.as_slice().iter().filter(|v| **v == 0.0).count();
        assert_eq!(zeros, FEATURE_COUNT - 8);
    }

    #[test]
    fn test_every_combination_sets_six_hot_slots() {
        let schema = FeatureSchema::canonical();
        let hp_slot = schema.index_of("Horsepower_No").expect("slot");
        let torque_slot = schema.index_of("Torque_No").expect("slot");
        let mut checked = 0usize;

        for &make in Make::ALL {
            for &body_size in BodySize::ALL {
                for &body_style in BodyStyle::ALL {
                    for &engine_aspiration in EngineAspiration::ALL {
                        for &drivetrain in Drivetrain::ALL {
                            for &transmission in Transmission::ALL {
                                let spec = VehicleSpec {
                                    horsepower: (checked % 1001) as u32,
                                    torque: (checked % 1501) as u32,
                                    make,
                                    body_size,
                                    body_style,
                                    engine_aspiration,
                                    drivetrain,
                                    transmission,
                                };
                                let vector = schema
                                    .encode(&spec, UnknownCategoryPolicy::Reject)
                                    .expect("encode");
                                let values = vector.as_slice();

                                assert_eq!(values[hp_slot], f64::from(spec.horsepower));
                                assert_eq!(values[torque_slot], f64::from(spec.torque));

                                let categorical = values
                                    .iter()
                                    .enumerate()
                                    .filter(|(i, _)| *i != hp_slot && *i != torque_slot);
                                let mut hot = 0;
                                for (_, v) in categorical {
                                    assert!(*v == 0.0 || *v == 1.0);
                                    if *v == 1.0 {
                                        hot += 1;
                                    }
                                }
                                assert_eq!(hot, 6, "{spec:?}");

                                for selection in spec.selections() {
                                    assert_eq!(
                                        schema.value_of(&vector, &selection.feature_name()),
                                        Some(1.0)
                                    );
                                }
                                checked += 1;
                            }
                        }
                    }
                }
            }
        }

        assert_eq!(checked, 7 * 3 * 12 * 6 * 4 * 2);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let schema = FeatureSchema::canonical();
        let a = schema
            .encode(&bmw_sedan(), UnknownCategoryPolicy::Reject)
            .expect("encode");
        let b = schema
            .encode(&bmw_sedan(), UnknownCategoryPolicy::Reject)
            .expect("encode");

        let bits = |v: &FeatureVector| v.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let schema = schema_without("Make_BMW");
        let err = schema
            .encode(&bmw_sedan(), UnknownCategoryPolicy::Reject)
            .expect_err("must reject");
        assert_eq!(
            err,
            EncodeError::UnknownCategory {
                feature: "Make_BMW".into()
            }
        );
    }

    #[test]
    fn test_zero_fill_matches_omitted_field() {
        let schema = schema_without("Make_BMW");
        let spec = bmw_sedan();

        let dropped = schema
            .encode(&spec, UnknownCategoryPolicy::ZeroFill)
            .expect("zero-fill encodes");

        let without_make: Vec<Selection<'_>> = spec
            .selections()
            .into_iter()
            .filter(|s| s.field != CategoricalField::Make)
            .collect();
        let omitted = schema
            .encode_parts(300.0, 400.0, &without_make, UnknownCategoryPolicy::Reject)
            .expect("encode without make");

        assert_eq!(dropped, omitted);
        assert_eq!(
            schema
                .names()
                .iter()
                .filter(|n| n.starts_with("Make_"))
                .filter_map(|n| schema.value_of(&dropped, n))
                .sum::<f64>(),
            0.0
        );
    }

    #[test]
    fn test_coverage_gaps_report_missing_slots() {
        let schema = schema_without("Drivetrain_RWD");
        assert_eq!(schema.coverage_gaps(), vec!["Drivetrain_RWD".to_string()]);
    }

    #[test]
    fn test_missing_numeric_slot_always_fails() {
        let schema = schema_without("Torque_No");
        let err = schema
            .encode(&bmw_sedan(), UnknownCategoryPolicy::ZeroFill)
            .expect_err("numeric slot required");
        assert_eq!(err, EncodeError::MissingNumericFeature("Torque_No"));
    }

    #[test]
    fn test_schema_from_model_order() {
        let mut names: Vec<&str> = FEATURE_NAMES.to_vec();
        names.reverse();
        let schema = FeatureSchema::from_names(names).expect("valid");
        let vector = schema
            .encode(&bmw_sedan(), UnknownCategoryPolicy::Reject)
            .expect("encode");
        assert_eq!(vector.get(35), Some(300.0));
        assert_eq!(vector.get(34), Some(400.0));
    }

    #[test]
    fn test_schema_rejects_bad_lists() {
        assert_eq!(
            FeatureSchema::from_names(Vec::<String>::new()),
            Err(SchemaError::Empty)
        );
        assert_eq!(
            FeatureSchema::from_names(["a", "b", "a"]),
            Err(SchemaError::Duplicate("a".into()))
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("reject".parse::<UnknownCategoryPolicy>(), Ok(UnknownCategoryPolicy::Reject));
        assert_eq!("Zero-Fill".parse::<UnknownCategoryPolicy>(), Ok(UnknownCategoryPolicy::ZeroFill));
        assert!("ignore".parse::<UnknownCategoryPolicy>().is_err());
    }
}
