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

use crate::modules::{module_cost_lines, module_costs_total};
use crate::site_minimum::{overlay_active, site_minimum_breakdown};
use crate::strategy::{PackageBreakdown, PackageCharge, PackageStrategy, StrategyContext};

/// Per-MW package pricing for the pro, custom and elum_portfolio_os
/// packages: every selected module bills its rate times the MW pool.
///
/// Pro and custom contracts can opt into site-minimum pricing instead.
/// When that overlay is active the plain module lines disappear and the
/// charge comes from pricing every asset individually against a per-site
/// minimum, carried here as a breakdown whose buckets itemize the charge.
#[derive(Debug, Default)]
pub struct PerMwStrategy;

impl PackageStrategy for PerMwStrategy {
    fn name(&self) -> &str {
        "Per-MW"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        if overlay_active(context.params) {
            let breakdown =
                site_minimum_breakdown(context.params, context.catalog, context.annual_fraction);
            return PackageCharge {
                total_mw_cost: breakdown.total(),
                breakdown: Some(PackageBreakdown::SiteMinimum(breakdown)),
                ..PackageCharge::default()
            };
        }

        let module_costs =
            module_cost_lines(context.params, context.catalog, context.annual_fraction);
        PackageCharge {
            total_mw_cost: module_costs_total(&module_costs),
            module_costs,
            ..PackageCharge::default()
        }
    }
}
