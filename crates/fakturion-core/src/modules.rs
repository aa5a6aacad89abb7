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

use fakturion_types::catalog::{CatalogEntry, PricingCatalog};
use fakturion_types::params::CalculationParams;
use fakturion_types::result::ModuleCostLine;
use tracing::warn;

/// Annual per-MW rate of one module after the contract's override.
pub fn effective_module_rate(params: &CalculationParams, entry: &CatalogEntry) -> f64 {
    params.price_override(&entry.id).unwrap_or(entry.price)
}

/// Combined annual per-MW rate of every selected module. This is the rate a
/// single MW of capacity earns across the whole module selection, used by the
/// site-minimum overlay to price individual assets.
pub fn combined_module_rate(params: &CalculationParams, catalog: &PricingCatalog) -> f64 {
    params
        .selected_modules
        .iter()
        .filter_map(|id| catalog.module(id))
        .map(|entry| effective_module_rate(params, entry))
        .sum()
}

/// Cost lines for every selected module: effective rate × MW pool × annual
/// fraction. Module IDs the catalog does not know are dropped, not errors.
pub fn module_cost_lines(
    params: &CalculationParams,
    catalog: &PricingCatalog,
    annual_fraction: f64,
) -> Vec<ModuleCostLine> {
    priced_lines(params, catalog, annual_fraction, None)
}

/// Same as [`module_cost_lines`] minus one module, for strategies whose MW
/// rate already covers it.
pub fn module_cost_lines_excluding(
    params: &CalculationParams,
    catalog: &PricingCatalog,
    annual_fraction: f64,
    excluded_id: &str,
) -> Vec<ModuleCostLine> {
    priced_lines(params, catalog, annual_fraction, Some(excluded_id))
}

pub fn module_costs_total(lines: &[ModuleCostLine]) -> f64 {
    lines.iter().map(|line| line.cost).sum()
}

fn priced_lines(
    params: &CalculationParams,
    catalog: &PricingCatalog,
    annual_fraction: f64,
    excluded_id: Option<&str>,
) -> Vec<ModuleCostLine> {
    let mut lines = Vec::new();
    for id in &params.selected_modules {
        if excluded_id.is_some_and(|excluded| excluded == id) {
            continue;
        }
        let Some(entry) = catalog.module(id) else {
            warn!("Dropping unknown module id '{}'", id);
            continue;
        };
        let rate = effective_module_rate(params, entry);
        lines.push(ModuleCostLine {
            module_id: entry.id.clone(),
            module_name: entry.name.clone(),
            rate,
            cost: rate * params.total_mw * annual_fraction,
        });
    }
    lines
}
