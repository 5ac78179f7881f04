//! Axis roles and the closed set of selectable attributes.
//!
//! Every per-attribute decision (axis eligibility, label text, CSV column,
//! value formatting, field access) goes through the static [`ATTRIBUTES`]
//! table instead of string comparisons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::dataset::Observation;
use crate::error::PlotError;

/// Which plot axis an attribute is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    X,
    Y,
}

impl AxisRole {
    pub const ALL: [AxisRole; 2] = [AxisRole::X, AxisRole::Y];

    /// The perpendicular axis.
    pub fn other(self) -> AxisRole {
        match self {
            AxisRole::X => AxisRole::Y,
            AxisRole::Y => AxisRole::X,
        }
    }

    /// Attributes that may be bound to this axis, in display order.
    /// The first entry is the startup default.
    pub fn eligible(self) -> &'static [AttributeKey; 3] {
        match self {
            AxisRole::X => &X_ELIGIBLE,
            AxisRole::Y => &Y_ELIGIBLE,
        }
    }

    /// Default attribute for this axis.
    pub fn default_attribute(self) -> AttributeKey {
        self.eligible()[0]
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => write!(f, "X"),
            AxisRole::Y => write!(f, "Y"),
        }
    }
}

/// One of the six numeric attributes carried by every observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    PovertyRate,
    MedianAge,
    MedianIncome,
    HealthcareUninsuredRate,
    SmokingRate,
    ObesityRate,
}

const X_ELIGIBLE: [AttributeKey; 3] = [
    AttributeKey::PovertyRate,
    AttributeKey::MedianAge,
    AttributeKey::MedianIncome,
];

const Y_ELIGIBLE: [AttributeKey; 3] = [
    AttributeKey::HealthcareUninsuredRate,
    AttributeKey::SmokingRate,
    AttributeKey::ObesityRate,
];

/// How an attribute's raw value reads to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Years,
    Dollars,
}

/// Static description of one attribute.
pub struct AttributeInfo {
    pub key: AttributeKey,
    /// The only axis this attribute may be bound to.
    pub role: AxisRole,
    /// Dimension-label text.
    pub label: &'static str,
    /// Short name used in tooltips.
    pub short_name: &'static str,
    /// Column header in the source CSV; also the textual tag on the label.
    pub column: &'static str,
    /// camelCase identifier (config files, serde).
    pub ident: &'static str,
    pub unit: Unit,
    pub accessor: fn(&Observation) -> f64,
}

/// The attribute table, in [`AttributeKey`] declaration order.
pub static ATTRIBUTES: [AttributeInfo; 6] = [
    AttributeInfo {
        key: AttributeKey::PovertyRate,
        role: AxisRole::X,
        label: "In Poverty (%)",
        short_name: "Poverty",
        column: "poverty",
        ident: "povertyRate",
        unit: Unit::Percent,
        accessor: |o| o.poverty_rate,
    },
    AttributeInfo {
        key: AttributeKey::MedianAge,
        role: AxisRole::X,
        label: "Age (Median)",
        short_name: "Age",
        column: "age",
        ident: "medianAge",
        unit: Unit::Years,
        accessor: |o| o.median_age,
    },
    AttributeInfo {
        key: AttributeKey::MedianIncome,
        role: AxisRole::X,
        label: "Household Income (Median)",
        short_name: "Income",
        column: "income",
        ident: "medianIncome",
        unit: Unit::Dollars,
        accessor: |o| o.median_income,
    },
    AttributeInfo {
        key: AttributeKey::HealthcareUninsuredRate,
        role: AxisRole::Y,
        label: "Lacks Healthcare (%)",
        short_name: "Healthcare",
        column: "healthcare",
        ident: "healthcareUninsuredRate",
        unit: Unit::Percent,
        accessor: |o| o.healthcare_uninsured_rate,
    },
    AttributeInfo {
        key: AttributeKey::SmokingRate,
        role: AxisRole::Y,
        label: "Smokes (%)",
        short_name: "Smokes",
        column: "smokes",
        ident: "smokingRate",
        unit: Unit::Percent,
        accessor: |o| o.smoking_rate,
    },
    AttributeInfo {
        key: AttributeKey::ObesityRate,
        role: AxisRole::Y,
        label: "Obese (%)",
        short_name: "Obesity",
        column: "obesity",
        ident: "obesityRate",
        unit: Unit::Percent,
        accessor: |o| o.obesity_rate,
    },
];

impl AttributeKey {
    pub const ALL: [AttributeKey; 6] = [
        AttributeKey::PovertyRate,
        AttributeKey::MedianAge,
        AttributeKey::MedianIncome,
        AttributeKey::HealthcareUninsuredRate,
        AttributeKey::SmokingRate,
        AttributeKey::ObesityRate,
    ];

    pub fn info(self) -> &'static AttributeInfo {
        &ATTRIBUTES[self as usize]
    }

    pub fn role(self) -> AxisRole {
        self.info().role
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn column(self) -> &'static str {
        self.info().column
    }

    pub fn is_eligible_for(self, role: AxisRole) -> bool {
        self.role() == role
    }

    /// Read this attribute from an observation.
    #[inline]
    pub fn value(self, observation: &Observation) -> f64 {
        (self.info().accessor)(observation)
    }

    /// Human-readable value with the attribute's unit.
    ///
    /// ```
    /// # use switchplot::data::attributes::AttributeKey;
    /// assert_eq!(AttributeKey::PovertyRate.format_value(12.5), "12.5%");
    /// assert_eq!(AttributeKey::MedianIncome.format_value(40000.0), "$40000");
    /// ```
    pub fn format_value(self, value: f64) -> String {
        match self.info().unit {
            Unit::Percent => format!("{value}%"),
            Unit::Years => format!("{value} yrs"),
            Unit::Dollars => format!("${value}"),
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().column)
    }
}

impl FromStr for AttributeKey {
    type Err = PlotError;

    /// Accepts the CSV column tag (`"poverty"`) or the camelCase identifier
    /// (`"povertyRate"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ATTRIBUTES
            .iter()
            .find(|info| info.column.eq_ignore_ascii_case(s) || info.ident.eq_ignore_ascii_case(s))
            .map(|info| info.key)
            .ok_or_else(|| PlotError::UnknownAttribute { tag: s.to_string() })
    }
}
