use std::fmt;

use super::PropertyError;

/// Closed interval `[min, max]` a correlation input must lie in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies in the range. NaN never does.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The fitted domain of a correlation.
///
/// `None` means the input is either unused or has no documented bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Temperature range, °C.
    pub temperature: Option<ValidRange>,

    /// Salinity range, wt%.
    pub salinity: Option<ValidRange>,
}

impl Domain {
    #[must_use]
    pub const fn new(temperature: Option<ValidRange>, salinity: Option<ValidRange>) -> Self {
        Self {
            temperature,
            salinity,
        }
    }

    /// Returns every bound the point `(temperature, salinity)` violates.
    pub fn violations(
        &self,
        property: &'static str,
        temperature: f64,
        salinity: f64,
    ) -> impl Iterator<Item = PropertyError> {
        let temperature = self
            .temperature
            .filter(|range| !range.contains(temperature))
            .map(|range| PropertyError::TemperatureOutOfRange {
                property,
                value: temperature,
                range,
            });

        let salinity = self
            .salinity
            .filter(|range| !range.contains(salinity))
            .map(|range| PropertyError::SalinityOutOfRange {
                property,
                value: salinity,
                range,
            });

        temperature.into_iter().chain(salinity)
    }

    /// Checks that the point lies inside the domain.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound, temperature before salinity.
    pub fn check(
        &self,
        property: &'static str,
        temperature: f64,
        salinity: f64,
    ) -> Result<(), PropertyError> {
        match self.violations(property, temperature, salinity).next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// What to do when a correlation is evaluated outside its fitted domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Fail with the first violation.
    #[default]
    Reject,

    /// Log each violation at `warn` level and evaluate anyway.
    Warn,

    /// Evaluate without checking.
    Ignore,
}
