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

use crate::strategy::{PackageBreakdown, PackageCharge, PackageStrategy, StrategyContext};
use crate::tiers::resolve_site_charge;
use fakturion_types::result::ElumJubailiBreakdown;

/// Elum Jubaili package: one annual fee per asset, flat or picked from the
/// minimum-charge tiers by total portfolio MW, summed over the asset count
/// and scaled to the billing period.
#[derive(Debug, Default)]
pub struct ElumJubailiStrategy;

impl PackageStrategy for ElumJubailiStrategy {
    fn name(&self) -> &str {
        "Elum Jubaili"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        let params = context.params;
        let fee_per_asset = resolve_site_charge(
            params.total_mw,
            &params.minimum_charge_tiers,
            params.annual_fee_per_site,
        );
        let asset_count = params.asset_breakdown.len();

        let total_cost = fee_per_asset * asset_count as f64 * context.annual_fraction;
        PackageCharge {
            breakdown: Some(PackageBreakdown::ElumJubaili(ElumJubailiBreakdown {
                fee_per_asset,
                asset_count,
                total_cost,
            })),
            ..PackageCharge::default()
        }
    }
}
