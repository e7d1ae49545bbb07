use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart axis an attribute can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Numeric record field eligible for axis binding.
///
/// Poverty, age and income drive the horizontal axis; healthcare, smokes and
/// obesity drive the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Poverty,
    Age,
    Income,
    Healthcare,
    Smokes,
    Obesity,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Self::Poverty,
        Self::Age,
        Self::Income,
        Self::Healthcare,
        Self::Smokes,
        Self::Obesity,
    ];

    pub const X_CANDIDATES: [Attribute; 3] = [Self::Poverty, Self::Age, Self::Income];
    pub const Y_CANDIDATES: [Attribute; 3] = [Self::Healthcare, Self::Smokes, Self::Obesity];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Poverty | Self::Age | Self::Income => Axis::X,
            Self::Healthcare | Self::Smokes | Self::Obesity => Axis::Y,
        }
    }

    /// Column name in the source table and value carried by label controls.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Age => "age",
            Self::Income => "income",
            Self::Healthcare => "healthcare",
            Self::Smokes => "smokes",
            Self::Obesity => "obesity",
        }
    }

    #[must_use]
    pub fn candidates(axis: Axis) -> [Attribute; 3] {
        match axis {
            Axis::X => Self::X_CANDIDATES,
            Axis::Y => Self::Y_CANDIDATES,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.key() == value)
            .ok_or_else(|| ChartError::UnknownAttribute(value.to_owned()))
    }
}

/// One row of the source table. Numeric fields that failed to parse hold NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl Record {
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Poverty => self.poverty,
            Attribute::Age => self.age,
            Attribute::Income => self.income,
            Attribute::Healthcare => self.healthcare,
            Attribute::Smokes => self.smokes,
            Attribute::Obesity => self.obesity,
        }
    }
}

/// Ordered, read-only collection of records loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one record".to_owned(),
            ));
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Minimum and maximum of `attribute`, skipping NaN values.
    ///
    /// Returns `None` when no record holds a comparable value.
    #[must_use]
    pub fn extent(&self, attribute: Attribute) -> Option<(f64, f64)> {
        self.records
            .iter()
            .map(|record| record.value(attribute))
            .filter(|value| !value.is_nan())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}
