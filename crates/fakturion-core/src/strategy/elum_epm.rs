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
use fakturion_types::result::{ElumEpmBreakdown, EpmAssetCost};

const KWP_PER_MW: f64 = 1000.0;

/// Elum EPM package: every asset is priced on its own, at a per-MW rate
/// picked by the asset's kWp capacity against the contract's threshold.
///
/// Assets at or above the threshold take the above-threshold rate. A
/// configured minimum fee per site acts as a floor on each asset's cost,
/// never on top of it, which is the opposite of the additive per-site
/// minimums the pro family uses.
#[derive(Debug, Default)]
pub struct ElumEpmStrategy;

impl PackageStrategy for ElumEpmStrategy {
    fn name(&self) -> &str {
        "Elum EPM"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        let params = context.params;
        let floor = resolve_site_charge(
            params.total_mw,
            &params.minimum_charge_tiers,
            params.minimum_charge,
        ) * context.annual_fraction;

        let mut assets = Vec::new();
        let mut total_cost = 0.0;
        for asset in &params.asset_breakdown {
            let capacity_kwp = asset.total_mw * KWP_PER_MW;
            let rate = if capacity_kwp < params.threshold_kwp {
                params.below_threshold_rate
            } else {
                params.above_threshold_rate
            };
            let calculated_cost = asset.total_mw * rate * context.annual_fraction;
            let cost = calculated_cost.max(floor);
            total_cost += cost;
            assets.push(EpmAssetCost {
                asset_id: asset.asset_id.clone(),
                asset_name: asset.asset_name.clone(),
                capacity_kwp,
                rate,
                calculated_cost,
                minimum_applied: floor > calculated_cost,
                cost,
            });
        }

        PackageCharge {
            breakdown: Some(PackageBreakdown::ElumEpm(ElumEpmBreakdown {
                assets,
                total_cost,
            })),
            ..PackageCharge::default()
        }
    }
}
