use super::{DEFAULT_TEMPERATURE, Domain};

/// An empirical closed-form property correlation.
///
/// Implementors are zero-sized markers. The trait carries the formula
/// together with the metadata needed to use it safely: output unit, fitted
/// domain, and the published source.
pub trait Correlation {
    /// Property name used in diagnostics.
    const NAME: &'static str;

    /// Unit of the value returned by [`Correlation::at`].
    const UNIT: &'static str;

    /// Range of temperature and salinity the fit is valid over.
    const DOMAIN: Domain;

    /// Published source of the coefficients.
    const REFERENCE: Reference;

    /// Whether the formula depends on salinity.
    ///
    /// Temperature-only correlations are evaluated over the temperature
    /// series alone, whatever salinity is supplied.
    const USES_SALINITY: bool = true;

    /// Temperature used when the caller gives none, °C.
    const DEFAULT_TEMPERATURE: f64 = DEFAULT_TEMPERATURE;

    /// Evaluates the formula at a single point without any range check.
    ///
    /// Temperature is in °C and salinity in wt%. Correlations that do not
    /// depend on salinity ignore it.
    fn at(temperature: f64, salinity: f64) -> f64;
}

/// Bibliographic source of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub source: &'static str,
    pub page: Option<u16>,
}

impl Reference {
    pub(super) const fn el_dessouky_ettouney(page: u16) -> Self {
        Self {
            source: "H.T. El-Dessouky and H.M. Ettouney, Fundamentals of Salt Water Desalination, Elsevier, 2002",
            page: Some(page),
        }
    }

    pub(super) const WINTER_2011: Self = Self {
        source: "D. Winter, J. Koschikowski, M. Wieghaus, Desalination using membrane distillation: \
                 experimental studies on full scale spiral wound modules, J. Membr. Sci. 375 (2011) 104-112",
        page: Some(104),
    };

    pub(super) const NAYAR_2014: Self = Self {
        source: "K.G. Nayar, An experimental investigation of the surface tension of seawater, \
                 MIT thesis, 2014",
        page: None,
    };
}
