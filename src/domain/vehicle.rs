//! Vehicle attribute types collected by the quote form.
//!
//! Every categorical attribute is a closed enum whose labels match the
//! category strings the price model was trained on, so an out-of-domain
//! value cannot be constructed from the UI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: unknown option {value:?}")]
pub struct ParseCategoryError {
    pub field: CategoricalField,
    pub value: String,
}

/// The six one-hot encoded attribute groups, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoricalField {
    Make,
    BodySize,
    BodyStyle,
    EngineAspiration,
    Drivetrain,
    Transmission,
}

impl CategoricalField {
    pub const ALL: [Self; 6] = [
        Self::Make,
        Self::BodySize,
        Self::BodyStyle,
        Self::EngineAspiration,
        Self::Drivetrain,
        Self::Transmission,
    ];

    /// Group prefix used in feature names (`"<label>_<option>"`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Make => "Make",
            Self::BodySize => "Body Size",
            Self::BodyStyle => "Body Style",
            Self::EngineAspiration => "Engine Aspiration",
            Self::Drivetrain => "Drivetrain",
            Self::Transmission => "Transmission",
        }
    }

    /// All option labels offered for this group, in display order.
    #[must_use]
    pub fn option_labels(&self) -> Vec<&'static str> {
        match self {
            Self::Make => Make::ALL.iter().map(Make::label).collect(),
            Self::BodySize => BodySize::ALL.iter().map(BodySize::label).collect(),
            Self::BodyStyle => BodyStyle::ALL.iter().map(BodyStyle::label).collect(),
            Self::EngineAspiration => EngineAspiration::ALL
                .iter()
                .map(EngineAspiration::label)
                .collect(),
            Self::Drivetrain => Drivetrain::ALL.iter().map(Drivetrain::label).collect(),
            Self::Transmission => Transmission::ALL.iter().map(Transmission::label).collect(),
        }
    }

    /// Feature name for one option of this group.
    #[must_use]
    pub fn feature_name(&self, option: &str) -> String {
        format!("{}_{}", self.label(), option)
    }
}

impl std::fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

macro_rules! categorical_domain {
    (
        $(#[$meta:meta])*
        $name:ident => $field:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The one-hot group this attribute belongs to.
            pub const FIELD: CategoricalField = CategoricalField::$field;

            /// Category string as seen by the model.
            #[must_use]
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn position(&self) -> usize {
                Self::ALL.iter().position(|v| v == self).unwrap_or(0)
            }

            /// Next option, wrapping around.
            #[must_use]
            pub fn next(&self) -> Self {
                Self::ALL[(self.position() + 1) % Self::ALL.len()]
            }

            /// Previous option, wrapping around.
            #[must_use]
            pub fn prev(&self) -> Self {
                let n = Self::ALL.len();
                Self::ALL[(self.position() + n - 1) % n]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| ParseCategoryError {
                        field: Self::FIELD,
                        value: s.to_string(),
                    })
            }
        }
    };
}

categorical_domain! {
    /// Vehicle manufacturer.
    Make => Make {
        AstonMartin => "Aston Martin",
        Audi => "Audi",
        Bmw => "BMW",
        Bentley => "Bentley",
        Ford => "Ford",
        MercedesBenz => "Mercedes-Benz",
        Nissan => "Nissan",
    }
}

categorical_domain! {
    /// Size class.
    BodySize => BodySize {
        Compact => "Compact",
        Large => "Large",
        Midsize => "Midsize",
    }
}

categorical_domain! {
    BodyStyle => BodyStyle {
        CargoMinivan => "Cargo Minivan",
        CargoVan => "Cargo Van",
        Convertible => "Convertible",
        ConvertibleSuv => "Convertible SUV",
        Coupe => "Coupe",
        Hatchback => "Hatchback",
        PassengerMinivan => "Passenger Minivan",
        PassengerVan => "Passenger Van",
        PickupTruck => "Pickup Truck",
        Suv => "SUV",
        Sedan => "Sedan",
        Wagon => "Wagon",
    }
}

categorical_domain! {
    EngineAspiration => EngineAspiration {
        ElectricMotor => "Electric Motor",
        NaturallyAspirated => "Naturally Aspirated",
        Supercharged => "Supercharged",
        Turbocharged => "Turbocharged",
        TwinTurbo => "Twin-Turbo",
        Twincharged => "Twincharged",
    }
}

categorical_domain! {
    Drivetrain => Drivetrain {
        FourWheel => "4WD",
        AllWheel => "AWD",
        FrontWheel => "FWD",
        RearWheel => "RWD",
    }
}

categorical_domain! {
    /// Gearbox. Labels are lowercase to match the training data.
    Transmission => Transmission {
        Automatic => "automatic",
        Manual => "manual",
    }
}

impl Transmission {
    /// Capitalized label for summaries ("Automatic").
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

/// Declared bounds of a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl NumericBounds {
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    #[must_use]
    pub fn clamp(&self, value: i64) -> u32 {
        // Bounds fit in u32, so the clamped value does too.
        value.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }
}

/// The two numeric inputs copied verbatim into the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Horsepower,
    Torque,
}

impl NumericField {
    pub const ALL: [Self; 2] = [Self::Horsepower, Self::Torque];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Horsepower => "Horsepower",
            Self::Torque => "Torque",
        }
    }

    /// Feature name of the numeric slot.
    #[must_use]
    pub fn feature_name(&self) -> &'static str {
        match self {
            Self::Horsepower => "Horsepower_No",
            Self::Torque => "Torque_No",
        }
    }

    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Horsepower => "HP",
            Self::Torque => "Nm",
        }
    }

    #[must_use]
    pub fn bounds(&self) -> NumericBounds {
        match self {
            Self::Horsepower => NumericBounds {
                min: 0,
                max: 1000,
                step: 1,
                default: 300,
            },
            Self::Torque => NumericBounds {
                min: 0,
                max: 1500,
                step: 1,
                default: 400,
            },
        }
    }
}

/// One categorical choice, as `(group, option label)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub field: CategoricalField,
    pub value: &'a str,
}

impl Selection<'_> {
    #[must_use]
    pub fn feature_name(&self) -> String {
        self.field.feature_name(self.value)
    }
}

/// Raw vehicle input from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub horsepower: u32,
    pub torque: u32,
    pub make: Make,
    pub body_size: BodySize,
    pub body_style: BodyStyle,
    pub engine_aspiration: EngineAspiration,
    pub drivetrain: Drivetrain,
    pub transmission: Transmission,
}

impl Default for VehicleSpec {
    fn default() -> Self {
        Self {
            horsepower: NumericField::Horsepower.bounds().default,
            torque: NumericField::Torque.bounds().default,
            make: Make::default(),
            body_size: BodySize::default(),
            body_style: BodyStyle::default(),
            engine_aspiration: EngineAspiration::default(),
            drivetrain: Drivetrain::default(),
            transmission: Transmission::default(),
        }
    }
}

impl VehicleSpec {
    /// Numeric value of a numeric field.
    #[must_use]
    pub fn numeric(&self, field: NumericField) -> u32 {
        match field {
            NumericField::Horsepower => self.horsepower,
            NumericField::Torque => self.torque,
        }
    }

    /// Set a numeric field, clamped to its declared bounds.
    pub fn set_numeric(&mut self, field: NumericField, value: i64) {
        let value = field.bounds().clamp(value);
        match field {
            NumericField::Horsepower => self.horsepower = value,
            NumericField::Torque => self.torque = value,
        }
    }

    /// Label of the current option of a categorical field.
    #[must_use]
    pub fn option_label(&self, field: CategoricalField) -> &'static str {
        match field {
            CategoricalField::Make => self.make.label(),
            CategoricalField::BodySize => self.body_size.label(),
            CategoricalField::BodyStyle => self.body_style.label(),
            CategoricalField::EngineAspiration => self.engine_aspiration.label(),
            CategoricalField::Drivetrain => self.drivetrain.label(),
            CategoricalField::Transmission => self.transmission.label(),
        }
    }

    /// Step a categorical field forward or backward through its options.
    pub fn cycle(&mut self, field: CategoricalField, forward: bool) {
        match field {
            CategoricalField::Make => {
                self.make = if forward { self.make.next() } else { self.make.prev() }
            }
            CategoricalField::BodySize => {
                self.body_size = if forward {
                    self.body_size.next()
                } else {
                    self.body_size.prev()
                }
            }
            CategoricalField::BodyStyle => {
                self.body_style = if forward {
                    self.body_style.next()
                } else {
                    self.body_style.prev()
                }
            }
            CategoricalField::EngineAspiration => {
                self.engine_aspiration = if forward {
                    self.engine_aspiration.next()
                } else {
                    self.engine_aspiration.prev()
                }
            }
            CategoricalField::Drivetrain => {
                self.drivetrain = if forward {
                    self.drivetrain.next()
                } else {
                    self.drivetrain.prev()
                }
            }
            CategoricalField::Transmission => {
                self.transmission = if forward {
                    self.transmission.next()
                } else {
                    self.transmission.prev()
                }
            }
        }
    }

    /// The six categorical choices, in schema group order.
    #[must_use]
    pub fn selections(&self) -> [Selection<'static>; 6] {
        CategoricalField::ALL.map(|field| Selection {
            field,
            value: self.option_label(field),
        })
    }

    /// Feature/Value rows for the vehicle details summary.
    #[must_use]
    pub fn display_rows(&self) -> [(&'static str, &'static str); 6] {
        [
            ("Make", self.make.label()),
            ("Body Size", self.body_size.label()),
            ("Body Style", self.body_style.label()),
            ("Drivetrain", self.drivetrain.label()),
            ("Transmission", self.transmission.display_name()),
            ("Engine Aspiration", self.engine_aspiration.label()),
        ]
    }

    /// Validate numeric fields against their declared bounds.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = NumericField::ALL
            .iter()
            .filter_map(|field| {
                let bounds = field.bounds();
                let value = self.numeric(*field);
                (!bounds.contains(value)).then(|| {
                    format!(
                        "{} {} out of range [{}, {}]",
                        field.label(),
                        value,
                        bounds.min,
                        bounds.max
                    )
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
