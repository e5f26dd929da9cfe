use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::core::types::DataError;

/// A single named measurement on a well
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellStatistic {
    /// Kind of measurement (e.g. "fluorescence intensity")
    pub datatype: String,

    /// Measured variable, usually the source column name
    pub variable: String,

    pub value: f64,
}

impl WellStatistic {
    pub fn new(datatype: impl Into<String>, variable: impl Into<String>, value: f64) -> Self {
        Self {
            datatype: datatype.into(),
            variable: variable.into(),
            value,
        }
    }
}

impl fmt::Display for WellStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WellStatistic(datatype={}, variable={}, value={})",
            self.datatype, self.variable, self.value
        )
    }
}

/// Ordered statistics of one well
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WellStatisticList(Vec<WellStatistic>);

impl WellStatisticList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statistic: WellStatistic) {
        self.0.push(statistic);
    }

    /// Statistics matching every given filter, in their original order.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if neither filter is given.
    pub fn search(
        &self,
        datatype: Option<&str>,
        variable: Option<&str>,
    ) -> Result<Vec<&WellStatistic>, DataError> {
        if datatype.is_none() && variable.is_none() {
            return Err(DataError::InvalidArgument(
                "Must provide either datatype or variable or both".to_string(),
            ));
        }

        Ok(self
            .0
            .iter()
            .filter(|s| datatype.map_or(true, |d| s.datatype == d))
            .filter(|s| variable.map_or(true, |v| s.variable == v))
            .collect())
    }
}

impl Deref for WellStatisticList {
    type Target = [WellStatistic];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<WellStatistic>> for WellStatisticList {
    fn from(statistics: Vec<WellStatistic>) -> Self {
        Self(statistics)
    }
}

impl FromIterator<WellStatistic> for WellStatisticList {
    fn from_iter<I: IntoIterator<Item = WellStatistic>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for WellStatisticList {
    type Item = WellStatistic;
    type IntoIter = std::vec::IntoIter<WellStatistic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WellStatisticList {
    type Item = &'a WellStatistic;
    type IntoIter = std::slice::Iter<'a, WellStatistic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
