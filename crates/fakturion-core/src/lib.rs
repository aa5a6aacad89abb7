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

pub mod addons;
pub mod carve_out;
pub mod catalog;
pub mod modules;
pub mod retainer;
pub mod site_minimum;
pub mod strategy;
pub mod tiers;
pub mod validation;

// Re-export the calculation surface for convenience
pub use addons::{addon_cost_lines, addon_costs_total};
pub use carve_out::{CarveOut, apply_carve_out};
pub use catalog::{load_catalog, parse_catalog};
pub use modules::{combined_module_rate, module_cost_lines, module_costs_total};
pub use retainer::retainer_cost;
pub use site_minimum::{overlay_active, site_minimum_breakdown};
pub use strategy::{
    InvoiceCalculator, PackageBreakdown, PackageCharge, PackageStrategy, StrategyContext,
    calculate_invoice,
};
pub use tiers::{
    allocate_graduated, allocation_total, resolve_portfolio_discount, resolve_site_charge,
    resolve_tier,
};
pub use validation::{ConfigWarning, validate_params};
