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
use fakturion_types::params::{AddonSelection, CalculationParams};
use fakturion_types::result::AddonCostLine;
use tracing::warn;

use crate::tiers::{allocate_graduated, allocation_total};

/// Cost lines for every selected add-on, in contract order.
///
/// Volume-tiered add-ons (catalog declares tiers and the selection carries a
/// quantity) run through the graduated allocator, with the contract's
/// `customTiers` replacing the catalog list when present; only those flagged
/// monthly-billed scale by the period's month count. Everything else is a
/// one-off flat price resolved as custom price, then complexity price, then
/// catalog default, times quantity.
pub fn addon_cost_lines(
    params: &CalculationParams,
    catalog: &PricingCatalog,
    period_months: u32,
) -> Vec<AddonCostLine> {
    let mut lines = Vec::new();
    for selection in &params.selected_addons {
        let Some(entry) = catalog.addon(&selection.id) else {
            warn!("Dropping unknown add-on id '{}'", selection.id);
            continue;
        };
        lines.push(price_addon(selection, entry, period_months));
    }
    lines
}

pub fn addon_costs_total(lines: &[AddonCostLine]) -> f64 {
    lines.iter().map(|line| line.cost).sum()
}

fn price_addon(
    selection: &AddonSelection,
    entry: &CatalogEntry,
    period_months: u32,
) -> AddonCostLine {
    if let (Some(catalog_tiers), Some(quantity)) =
        (entry.tiered_pricing.as_ref(), selection.quantity)
    {
        let tiers = selection.custom_tiers.as_deref().unwrap_or(catalog_tiers);
        let allocations = allocate_graduated(quantity, tiers);
        let mut cost = allocation_total(&allocations);
        if entry.billed_monthly {
            cost *= f64::from(period_months);
        }
        return AddonCostLine {
            addon_id: entry.id.clone(),
            addon_name: entry.name.clone(),
            quantity,
            allocations,
            cost,
        };
    }

    let unit_price = flat_price(selection, entry);
    let quantity = selection.quantity.unwrap_or(1.0);
    AddonCostLine {
        addon_id: entry.id.clone(),
        addon_name: entry.name.clone(),
        quantity,
        allocations: Vec::new(),
        cost: unit_price * quantity,
    }
}

/// Flat price priority: contract custom price, complexity grade price,
/// catalog default.
fn flat_price(selection: &AddonSelection, entry: &CatalogEntry) -> f64 {
    if let Some(custom) = selection.custom_price {
        return custom;
    }
    if let (Some(complexity), Some(pricing)) =
        (selection.complexity, entry.complexity_pricing.as_ref())
    {
        return pricing.price_for(complexity);
    }
    entry.price
}
