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

use crate::addons::addon_cost_lines;
use crate::carve_out::apply_carve_out;
use crate::retainer::retainer_cost;
use crate::strategy::{PackageBreakdown, PackageCharge, PackageStrategy, StrategyContext};
use crate::tiers::resolve_site_charge;
use fakturion_types::catalog::PricingCatalog;
use fakturion_types::package::PackageType;
use fakturion_types::params::CalculationParams;
use fakturion_types::result::CalculationResult;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Invoice calculator that runs the strategy for a contract's package and
/// layers the shared billing steps around it.
///
/// One calculation is a fixed pipeline: carve out custom-priced assets,
/// price the package on the reduced pool, price add-ons, add the per-site
/// minimum charges, raise the base cost to the contract floor, add the
/// retainer and the base platform fee, then total. Later steps only read
/// what earlier steps wrote, so identical parameters always produce an
/// identical result.
pub struct InvoiceCalculator {
    /// Strategy per package type; packages without one bill a zero package cost
    strategies: HashMap<PackageType, Arc<dyn PackageStrategy>>,
}

impl InvoiceCalculator {
    /// Create a new invoice calculator with an explicit strategy set
    pub fn new(strategies: HashMap<PackageType, Arc<dyn PackageStrategy>>) -> Self {
        Self { strategies }
    }

    /// Create a default calculator with every production package registered
    pub fn with_default_strategies() -> Self {
        use crate::strategy::{
            CappedStrategy, ElumEpmStrategy, ElumInternalStrategy, ElumJubailiStrategy,
            HybridTieredStrategy, PerMwStrategy, PerSiteStrategy, StarterStrategy,
        };

        let per_mw: Arc<dyn PackageStrategy> = Arc::new(PerMwStrategy);
        let mut strategies: HashMap<PackageType, Arc<dyn PackageStrategy>> = HashMap::new();
        strategies.insert(PackageType::Starter, Arc::new(StarterStrategy));
        strategies.insert(PackageType::Capped, Arc::new(CappedStrategy));
        strategies.insert(PackageType::Pro, Arc::clone(&per_mw));
        strategies.insert(PackageType::Custom, Arc::clone(&per_mw));
        strategies.insert(PackageType::ElumPortfolioOs, per_mw);
        strategies.insert(PackageType::HybridTiered, Arc::new(HybridTieredStrategy));
        strategies.insert(PackageType::PerSite, Arc::new(PerSiteStrategy));
        strategies.insert(PackageType::ElumEpm, Arc::new(ElumEpmStrategy));
        strategies.insert(PackageType::ElumJubaili, Arc::new(ElumJubailiStrategy));
        strategies.insert(PackageType::ElumInternal, Arc::new(ElumInternalStrategy));

        info!(
            "Initialized InvoiceCalculator with {} package strategies",
            strategies.len()
        );

        Self::new(strategies)
    }

    /// Register (or replace) the strategy for one package type
    pub fn register_strategy(
        &mut self,
        package_type: PackageType,
        strategy: Arc<dyn PackageStrategy>,
    ) {
        info!("Registering strategy '{}' for {package_type}", strategy.name());
        self.strategies.insert(package_type, strategy);
    }

    /// Get the number of package types with a registered strategy
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Get the names of all registered strategies
    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies
            .values()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Price one contract for one billing period.
    ///
    /// Never fails: strategies drop what they cannot resolve and bill zero
    /// for it, so the caller always gets a number to show.
    pub fn calculate(
        &self,
        params: &CalculationParams,
        catalog: &PricingCatalog,
    ) -> CalculationResult {
        let annual_fraction = params.annual_fraction();
        let period_months = params.period_months();

        debug!(
            "Calculating {} invoice over {:.3} MW (annual fraction {:.4})",
            params.package_type, params.total_mw, annual_fraction
        );

        // Carve out custom-priced assets before anything reads the MW pool.
        let carve_out = apply_carve_out(params, annual_fraction);
        let params = &carve_out.reduced_params;

        let mut result = CalculationResult {
            discounted_assets: carve_out.discounted_assets,
            discounted_assets_total: carve_out.total,
            ..CalculationResult::default()
        };

        // Package strategy on the reduced pool.
        let context = StrategyContext {
            params,
            catalog,
            annual_fraction,
            period_months,
        };
        let charge = match self.strategies.get(&params.package_type) {
            Some(strategy) => {
                debug!("Running '{}' package strategy", strategy.name());
                strategy.compute(&context)
            }
            None => {
                warn!(
                    "No strategy registered for package '{}', billing zero package cost",
                    params.package_type
                );
                PackageCharge::default()
            }
        };
        result.starter_package_cost = charge.starter_package_cost;
        result.total_mw_cost = charge.total_mw_cost;
        result.module_costs = charge.module_costs;
        let overlay_applied = matches!(charge.breakdown, Some(PackageBreakdown::SiteMinimum(_)));
        match charge.breakdown {
            Some(PackageBreakdown::HybridTiered(b)) => result.hybrid_tiered_breakdown = Some(b),
            Some(PackageBreakdown::ElumEpm(b)) => result.elum_epm_breakdown = Some(b),
            Some(PackageBreakdown::ElumJubaili(b)) => result.elum_jubaili_breakdown = Some(b),
            Some(PackageBreakdown::ElumInternal(b)) => result.elum_internal_breakdown = Some(b),
            Some(PackageBreakdown::PerSite(b)) => result.per_site_breakdown = Some(b),
            Some(PackageBreakdown::SiteMinimum(b)) => {
                result.site_minimum_pricing_breakdown = Some(b);
            }
            None => {}
        }

        // Add-ons price independently of the package.
        result.addon_costs = addon_cost_lines(params, catalog, period_months);

        // Additive per-site minimums, unless the overlay already priced
        // every asset against them.
        if !overlay_applied {
            result.minimum_charges = per_site_minimum_charges(params, annual_fraction);
        }

        // Contract floor on the base cost.
        if params.package_type.has_minimum_annual_floor() {
            let minimum_for_period = params.effective_minimum_annual_value() * annual_fraction;
            let base_cost = result.package_cost() + result.minimum_charges;
            if base_cost < minimum_for_period {
                result.minimum_contract_adjustment = minimum_for_period - base_cost;
                debug!(
                    "Raising base cost {:.2} to the contract floor {:.2}",
                    base_cost, minimum_for_period
                );
            }
        }

        if let Some(breakdown) = retainer_cost(params) {
            result.retainer_cost = breakdown.cost;
            result.retainer_breakdown = Some(breakdown);
        }

        result.base_pricing_cost = params.base_monthly_price * f64::from(period_months);

        result.total_price = result.component_total();

        debug!(
            "Invoice total {:.2} (base {:.2}, add-ons {:.2}, retainer {:.2}, carved out {:.2})",
            result.total_price,
            result.base_cost(),
            result.addons_total(),
            result.retainer_cost,
            result.discounted_assets_total
        );

        result
    }
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

/// Price one contract with the default strategy set and the standard catalog
pub fn calculate_invoice(params: &CalculationParams) -> CalculationResult {
    InvoiceCalculator::with_default_strategies().calculate(params, &PricingCatalog::standard())
}

/// Per-site minimum charges for packages that add them on top of the
/// per-MW charge. The per-site charge comes from the minimum-charge tiers
/// keyed by total MW, falling back to the flat contract charge, and is
/// owed once per billed asset.
fn per_site_minimum_charges(params: &CalculationParams, annual_fraction: f64) -> f64 {
    if !params.package_type.has_per_site_minimum_charges() || params.asset_breakdown.is_empty() {
        return 0.0;
    }
    let charge_per_site = resolve_site_charge(
        params.total_mw,
        &params.minimum_charge_tiers,
        params.minimum_charge,
    );
    let multiplier = params
        .site_charge_frequency
        .charge_multiplier(annual_fraction, params.period_months());
    charge_per_site * params.asset_breakdown.len() as f64 * multiplier
}
