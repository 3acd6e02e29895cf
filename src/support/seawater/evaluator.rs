use tracing::warn;

use crate::support::series::{Series, broadcast};

use super::{Conditions, Correlation, DEFAULT_SALINITY, PropertyResult, RangePolicy};

/// Evaluates correlations under a configurable [`RangePolicy`].
///
/// `Seawater::default()` rejects out-of-range input; it is what the free
/// functions in this module use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Seawater {
    policy: RangePolicy,
}

impl Seawater {
    #[must_use]
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// Evaluates correlation `C` at every broadcast point of `conditions`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`](super::PropertyError) if the temperature and
    /// salinity series cannot be broadcast, or if a point is out of range and
    /// the policy is [`RangePolicy::Reject`]. Salinity is not broadcast for
    /// correlations that do not use it, so it cannot cause a shape error there.
    pub fn evaluate<C: Correlation>(&self, conditions: &Conditions) -> PropertyResult<Vec<f64>> {
        let points = if C::USES_SALINITY {
            broadcast(&conditions.temperature, &conditions.salinity)?
        } else {
            broadcast(&conditions.temperature, &Series::Scalar(DEFAULT_SALINITY))?
        };

        points
            .into_iter()
            .map(|(temperature, salinity)| {
                self.screen::<C>(temperature, salinity)?;
                Ok(C::at(temperature, salinity))
            })
            .collect()
    }

    /// Applies the range policy to one point.
    fn screen<C: Correlation>(&self, temperature: f64, salinity: f64) -> PropertyResult<()> {
        match self.policy {
            RangePolicy::Ignore => Ok(()),
            RangePolicy::Reject => C::DOMAIN.check(C::NAME, temperature, salinity),
            RangePolicy::Warn => {
                for violation in C::DOMAIN.violations(C::NAME, temperature, salinity) {
                    warn!(
                        property = C::NAME,
                        temperature,
                        salinity,
                        "extrapolating correlation: {violation}"
                    );
                }
                Ok(())
            }
        }
    }
}
