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

use crate::modules::{module_cost_lines_excluding, module_costs_total};
use crate::strategy::{PackageBreakdown, PackageCharge, PackageStrategy, StrategyContext};
use fakturion_types::catalog::MONITORING_MODULE_ID;
use fakturion_types::params::{HYBRID_RATE_KEY, ON_GRID_RATE_KEY};
use fakturion_types::result::HybridTieredBreakdown;

/// Hybrid-tiered package: two independent per-MW rates, one for on-grid
/// capacity and one for hybrid (battery-backed) capacity.
///
/// The MW split comes from the asset breakdown's hybrid capability flags;
/// a contract without a breakdown bills its whole pool at the on-grid
/// rate. The dual rate already covers the monitoring module, so the module
/// cost lines carry every selected module except that one.
#[derive(Debug, Default)]
pub struct HybridTieredStrategy;

impl PackageStrategy for HybridTieredStrategy {
    fn name(&self) -> &str {
        "Hybrid tiered"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        let params = context.params;
        let on_grid_rate = params.price_override(ON_GRID_RATE_KEY).unwrap_or(0.0);
        let hybrid_rate = params.price_override(HYBRID_RATE_KEY).unwrap_or(0.0);

        let (on_grid_mw, hybrid_mw) = if params.asset_breakdown.is_empty() {
            (params.total_mw, 0.0)
        } else {
            params.asset_breakdown.iter().fold(
                (0.0, 0.0),
                |(on_grid, hybrid), asset| {
                    if asset.is_hybrid {
                        (on_grid, hybrid + asset.total_mw)
                    } else {
                        (on_grid + asset.total_mw, hybrid)
                    }
                },
            )
        };

        let on_grid_cost = on_grid_mw * on_grid_rate * context.annual_fraction;
        let hybrid_cost = hybrid_mw * hybrid_rate * context.annual_fraction;
        let breakdown = HybridTieredBreakdown {
            on_grid_mw,
            on_grid_rate,
            on_grid_cost,
            hybrid_mw,
            hybrid_rate,
            hybrid_cost,
            total_cost: on_grid_cost + hybrid_cost,
        };

        let module_costs = module_cost_lines_excluding(
            params,
            context.catalog,
            context.annual_fraction,
            MONITORING_MODULE_ID,
        );
        PackageCharge {
            total_mw_cost: breakdown.total_cost + module_costs_total(&module_costs),
            module_costs,
            breakdown: Some(PackageBreakdown::HybridTiered(breakdown)),
            ..PackageCharge::default()
        }
    }
}
