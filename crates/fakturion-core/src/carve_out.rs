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

use fakturion_types::params::{CalculationParams, CustomPricingType};
use fakturion_types::result::DiscountedAsset;
use tracing::debug;

/// Outcome of the custom-asset carve-out: a rebuilt parameter set with the
/// carved assets removed from the MW pool, plus their independent cost lines.
#[derive(Debug, Clone)]
pub struct CarveOut {
    pub reduced_params: CalculationParams,
    pub discounted_assets: Vec<DiscountedAsset>,
    pub total: f64,
}

/// Removes every asset keyed in `customAssetPricing` from the asset breakdown
/// and the MW total, pricing each by its negotiated terms. Runs before any
/// strategy so carved assets never re-enter an MW-based pool. Keys without a
/// matching breakdown asset are ignored.
pub fn apply_carve_out(params: &CalculationParams, annual_fraction: f64) -> CarveOut {
    let mut reduced_params = params.clone();

    if params.custom_asset_pricing.is_empty() || params.asset_breakdown.is_empty() {
        return CarveOut {
            reduced_params,
            discounted_assets: Vec::new(),
            total: 0.0,
        };
    }

    let mut kept = Vec::with_capacity(params.asset_breakdown.len());
    let mut discounted_assets = Vec::new();
    let mut carved_mw = 0.0;

    for asset in &params.asset_breakdown {
        let Some(pricing) = params.custom_asset_pricing.get(&asset.asset_id) else {
            kept.push(asset.clone());
            continue;
        };
        let cost = match pricing.pricing_type {
            CustomPricingType::Annual => pricing.price * annual_fraction,
            CustomPricingType::PerMw => pricing.price * asset.total_mw * annual_fraction,
        };
        carved_mw += asset.total_mw;
        discounted_assets.push(DiscountedAsset {
            asset_id: asset.asset_id.clone(),
            asset_name: asset.asset_name.clone(),
            total_mw: asset.total_mw,
            pricing_type: pricing.pricing_type,
            note: pricing.note.clone(),
            cost,
        });
    }

    if !discounted_assets.is_empty() {
        debug!(
            "Carved out {} asset(s) totalling {:.3} MW from the standard pool",
            discounted_assets.len(),
            carved_mw
        );
    }

    reduced_params.asset_breakdown = kept;
    reduced_params.total_mw = (params.total_mw - carved_mw).max(0.0);

    let total = discounted_assets.iter().map(|asset| asset.cost).sum();
    CarveOut {
        reduced_params,
        discounted_assets,
        total,
    }
}
