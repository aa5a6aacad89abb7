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

use fakturion_types::catalog::PricingCatalog;
use fakturion_types::params::CalculationParams;
use fakturion_types::result::{SiteMinimumAssetLine, SiteMinimumPricingBreakdown};
use tracing::debug;

use crate::modules::combined_module_rate;
use crate::tiers::resolve_site_charge;

/// The per-asset minimum overlay runs only for pro/custom contracts that
/// opted in and supplied both an asset breakdown and minimum-charge bands.
pub fn overlay_active(params: &CalculationParams) -> bool {
    params.package_type.supports_site_minimum_overlay()
        && params.use_site_minimum_pricing
        && !params.asset_breakdown.is_empty()
        && !params.minimum_charge_tiers.is_empty()
}

/// Prices every asset individually: the combined module rate times the
/// asset's MW, or the resolved per-site minimum when that is higher. Assets
/// billed normally and assets lifted to the minimum aggregate into separate
/// totals; together they stand in for the plain module-cost and
/// minimum-charge totals of this invoice.
pub fn site_minimum_breakdown(
    params: &CalculationParams,
    catalog: &PricingCatalog,
    annual_fraction: f64,
) -> SiteMinimumPricingBreakdown {
    let per_mwp_rate = combined_module_rate(params, catalog);
    let charge_multiplier = params
        .site_charge_frequency
        .charge_multiplier(annual_fraction, params.period_months());
    let charge_per_site = resolve_site_charge(
        params.total_mw,
        &params.minimum_charge_tiers,
        params.minimum_charge,
    );
    let minimum_charge = charge_per_site * charge_multiplier;

    let mut assets = Vec::with_capacity(params.asset_breakdown.len());
    let mut normal_pricing_total = 0.0;
    let mut minimum_pricing_total = 0.0;

    for asset in &params.asset_breakdown {
        let normal_cost = asset.total_mw * per_mwp_rate * annual_fraction;
        let minimum_applied = normal_cost < minimum_charge;
        let cost = if minimum_applied {
            minimum_pricing_total += minimum_charge;
            minimum_charge
        } else {
            normal_pricing_total += normal_cost;
            normal_cost
        };
        assets.push(SiteMinimumAssetLine {
            asset_id: asset.asset_id.clone(),
            asset_name: asset.asset_name.clone(),
            asset_mw: asset.total_mw,
            normal_cost,
            minimum_charge,
            minimum_applied,
            cost,
        });
    }

    debug!(
        "Site-minimum overlay: {} asset(s), normal {:.2}, lifted {:.2}",
        assets.len(),
        normal_pricing_total,
        minimum_pricing_total
    );

    SiteMinimumPricingBreakdown {
        assets,
        normal_pricing_total,
        minimum_pricing_total,
    }
}
