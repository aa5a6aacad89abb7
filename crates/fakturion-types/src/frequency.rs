// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FakturION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing cadence of a contract. Annual amounts are prorated by
/// [`BillingFrequency::annual_fraction`]; monthly-billed items scale by
/// [`BillingFrequency::period_months`]. Unrecognized wire values fall
/// back to annual rather than failing the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingFrequency {
    Monthly,
    Quarterly,
    Biannual,
    #[default]
    #[serde(other)]
    Annual,
}

impl BillingFrequency {
    /// List all supported billing cadences
    pub fn all() -> &'static [BillingFrequency] {
        &[Self::Monthly, Self::Quarterly, Self::Biannual, Self::Annual]
    }

    /// Portion of an annual amount charged in one period of this cadence.
    pub fn annual_fraction(&self) -> f64 {
        f64::from(self.period_months()) / 12.0
    }

    /// Whole months covered by one period of this cadence.
    pub fn period_months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Biannual => 6,
            Self::Annual => 12,
        }
    }

    /// Human-readable name for summaries and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Biannual => "Biannual",
            Self::Annual => "Annual",
        }
    }
}

impl fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unit of per-site charges (site minimums, per-site renewal fees).
/// Annual charges prorate by the annual fraction; monthly charges
/// multiply by the number of months in the billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SiteChargeFrequency {
    #[default]
    Annual,
    Monthly,
}

impl SiteChargeFrequency {
    /// Multiplier applied to a per-site charge for one billing period.
    /// Takes the already-resolved fraction so a caller-supplied override
    /// flows through.
    pub fn charge_multiplier(&self, annual_fraction: f64, period_months: u32) -> f64 {
        match self {
            Self::Annual => annual_fraction,
            Self::Monthly => f64::from(period_months),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_matches_month_count() {
        for freq in BillingFrequency::all() {
            assert_eq!(
                f64::from(freq.period_months()) / 12.0,
                freq.annual_fraction()
            );
        }
    }

    #[test]
    fn test_quarterly_values() {
        assert_eq!(BillingFrequency::Quarterly.annual_fraction(), 0.25);
        assert_eq!(BillingFrequency::Quarterly.period_months(), 3);
    }

    #[test]
    fn test_unknown_wire_value_falls_back_to_annual() {
        let parsed: BillingFrequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, BillingFrequency::Annual);
    }

    #[test]
    fn test_charge_multiplier_units() {
        let quarterly = BillingFrequency::Quarterly;
        let fraction = quarterly.annual_fraction();
        let months = quarterly.period_months();
        assert_eq!(
            SiteChargeFrequency::Annual.charge_multiplier(fraction, months),
            0.25
        );
        assert_eq!(
            SiteChargeFrequency::Monthly.charge_multiplier(fraction, months),
            3.0
        );
    }
}
