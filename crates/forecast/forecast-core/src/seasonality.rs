//! Fourier seasonality
//!
//! Seasonal components are sums of sine/cosine pairs over days since the
//! Unix epoch, so the phase does not depend on where the history starts.

use chrono::{Datelike, NaiveDate};
use forecast_api::SeasonalityMode;

/// `num_days_from_ce` of 1970-01-01
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Days in a year, on average
pub const YEARLY_PERIOD: f64 = 365.25;

/// Days in a week
pub const WEEKLY_PERIOD: f64 = 7.0;

/// Days since 1970-01-01.
pub fn days_since_epoch(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - EPOCH_DAYS_FROM_CE) as f64
}

/// A periodic component expanded into Fourier terms
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeasonality {
    pub name: String,
    pub period: f64,
    pub order: usize,
}

impl FourierSeasonality {
    pub fn new(name: &str, period: f64, order: usize) -> Self {
        Self {
            name: name.to_string(),
            period,
            order,
        }
    }

    /// Number of design columns.
    pub fn width(&self) -> usize {
        2 * self.order
    }

    /// `[sin(2πkd/P), cos(2πkd/P)]` for `k = 1..=order`.
    pub fn features(&self, date: NaiveDate) -> Vec<f64> {
        let d = days_since_epoch(date);
        let mut out = Vec::with_capacity(self.width());
        for k in 1..=self.order {
            let angle = 2.0 * std::f64::consts::PI * k as f64 * d / self.period;
            out.push(angle.sin());
            out.push(angle.cos());
        }
        out
    }
}

/// Whether a weekly component is worth fitting on these sorted dates.
///
/// Needs at least two weeks of history and some observations closer
/// together than a week.
pub fn weekly_supported(dates: &[NaiveDate]) -> bool {
    let (first, last) = match (dates.first(), dates.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return false,
    };
    if (last - first).num_days() < 14 {
        return false;
    }
    dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .filter(|&gap| gap > 0)
        .min()
        .is_some_and(|gap| gap < 7)
}

/// Resolve the components to fit from the configured modes.
pub fn resolve_seasonalities(
    yearly: SeasonalityMode,
    yearly_order: usize,
    weekly: SeasonalityMode,
    weekly_order: usize,
    dates: &[NaiveDate],
) -> Vec<FourierSeasonality> {
    let mut out = Vec::new();

    let yearly_on = match yearly {
        SeasonalityMode::Enabled => true,
        SeasonalityMode::Disabled => false,
        SeasonalityMode::Auto => match (dates.first(), dates.last()) {
            (Some(f), Some(l)) => (*l - *f).num_days() >= 730,
            _ => false,
        },
    };
    if yearly_on {
        out.push(FourierSeasonality::new("yearly", YEARLY_PERIOD, yearly_order));
    }

    let weekly_on = match weekly {
        SeasonalityMode::Enabled => true,
        SeasonalityMode::Disabled => false,
        SeasonalityMode::Auto => weekly_supported(dates),
    };
    if weekly_on {
        out.push(FourierSeasonality::new("weekly", WEEKLY_PERIOD, weekly_order));
    }

    out
}
