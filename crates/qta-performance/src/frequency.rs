//! Observation frequency of a price series.

use serde::{Deserialize, Serialize};

/// How often the observations in a price series were sampled.
///
/// The frequency fixes the annualization factor for every metric, so the
/// same price vector yields different volatility at daily and monthly
/// sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One observation per trading or calendar day.
    Daily,
    /// One observation per week.
    Weekly,
    /// One observation per month.
    Monthly,
    /// One observation per year.
    Yearly,
}

impl Frequency {
    /// Observations per year at this frequency.
    ///
    /// Daily data counts 252 business days when `only_business` is set,
    /// 365 calendar days otherwise. The flag has no effect on the other
    /// frequencies.
    #[must_use]
    pub fn periods_per_year(self, only_business: bool) -> usize {
        match self {
            Self::Daily => {
                if only_business {
                    252
                } else {
                    365
                }
            }
            Self::Weekly => 52,
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }
}
