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

mod calculator;
mod capped;
mod elum_epm;
mod elum_internal;
mod elum_jubaili;
mod hybrid_tiered;
mod per_mw;
mod per_site;
mod starter;

pub use calculator::{InvoiceCalculator, calculate_invoice};
pub use capped::CappedStrategy;
pub use elum_epm::ElumEpmStrategy;
pub use elum_internal::ElumInternalStrategy;
pub use elum_jubaili::ElumJubailiStrategy;
pub use hybrid_tiered::HybridTieredStrategy;
pub use per_mw::PerMwStrategy;
pub use per_site::PerSiteStrategy;
pub use starter::StarterStrategy;

use fakturion_types::catalog::PricingCatalog;
use fakturion_types::params::CalculationParams;
use fakturion_types::result::{
    ElumEpmBreakdown, ElumInternalBreakdown, ElumJubailiBreakdown, HybridTieredBreakdown,
    ModuleCostLine, PerSiteBreakdown, SiteMinimumPricingBreakdown,
};

/// Context information for pricing the package portion of one invoice
#[derive(Debug, Clone)]
pub struct StrategyContext<'a> {
    /// Contract parameters, already reduced by the custom-asset carve-out
    pub params: &'a CalculationParams,

    /// Catalog the module and add-on rates resolve against
    pub catalog: &'a PricingCatalog,

    /// Fraction of a year covered by the billing period
    pub annual_fraction: f64,

    /// Whole months covered by the billing period
    pub period_months: u32,
}

/// Itemization detail attached to a [`PackageCharge`] by packages that
/// price per asset, per site or per tier
#[derive(Debug, Clone)]
pub enum PackageBreakdown {
    HybridTiered(HybridTieredBreakdown),
    ElumEpm(ElumEpmBreakdown),
    ElumJubaili(ElumJubailiBreakdown),
    ElumInternal(ElumInternalBreakdown),
    PerSite(PerSiteBreakdown),
    SiteMinimum(SiteMinimumPricingBreakdown),
}

/// What one package strategy priced for the billing period.
///
/// A strategy fills exactly the positions its package uses: the flat fee,
/// the capacity-driven charge with its module lines, or a breakdown whose
/// own total carries the charge. Positions it does not use stay zero so the
/// aggregator can sum them unconditionally.
#[derive(Debug, Clone, Default)]
pub struct PackageCharge {
    /// Flat package fee for the period (starter and capped packages)
    pub starter_package_cost: f64,

    /// Capacity-driven package charge for the period
    pub total_mw_cost: f64,

    /// Per-module cost lines itemizing `total_mw_cost`
    pub module_costs: Vec<ModuleCostLine>,

    /// Itemization for packages that price per unit rather than per MW pool
    pub breakdown: Option<PackageBreakdown>,
}

/// Trait for package pricing strategies
///
/// Each strategy turns the reduced contract parameters into the package
/// portion of the invoice: a flat fee, a per-MW charge with module cost
/// lines, or a per-asset/per-site/per-tier breakdown. Strategies are pure;
/// they never touch the add-on, retainer or floor steps that the
/// aggregator layers on afterwards.
pub trait PackageStrategy: Send + Sync {
    /// Get the name of this strategy
    fn name(&self) -> &str;

    /// Price the package for the given context
    ///
    /// Returns a `PackageCharge`; a contract this strategy has nothing to
    /// bill for yields an all-zero charge, never an error.
    fn compute(&self, context: &StrategyContext) -> PackageCharge;
}
