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

use serde::{Deserialize, Serialize};

use crate::params::CustomPricingType;
use crate::tiers::GraduatedMwTier;

/// One module's cost line: effective annual per-MW rate applied to the
/// (post-carve-out) MW pool, prorated by the billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCostLine {
    pub module_id: String,
    pub module_name: String,
    /// Annual per-MW rate after any contract override.
    pub rate: f64,
    pub cost: f64,
}

/// One bracket of a graduated allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierAllocation {
    pub tier: GraduatedMwTier,
    pub quantity_in_tier: f64,
    pub cost: f64,
}

/// One add-on's cost line. Volume-tiered add-ons carry their bracket
/// allocations; flat ones leave the list empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonCostLine {
    pub addon_id: String,
    pub addon_name: String,
    pub quantity: f64,
    #[serde(default)]
    pub allocations: Vec<TierAllocation>,
    pub cost: f64,
}

/// Dual-rate summary of the hybrid package. Itemizes the MW portion of
/// `totalMWCost`; module lines cover the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridTieredBreakdown {
    #[serde(rename = "onGridMW")]
    pub on_grid_mw: f64,
    pub on_grid_rate: f64,
    pub on_grid_cost: f64,
    #[serde(rename = "hybridMW")]
    pub hybrid_mw: f64,
    pub hybrid_rate: f64,
    pub hybrid_cost: f64,
    pub total_cost: f64,
}

/// Per-asset cost of the elum_epm package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpmAssetCost {
    pub asset_id: String,
    pub asset_name: String,
    #[serde(rename = "capacityKWp")]
    pub capacity_kwp: f64,
    /// Annual per-MW rate picked by the threshold comparison.
    pub rate: f64,
    pub calculated_cost: f64,
    /// True when the per-site minimum fee replaced the calculated cost.
    pub minimum_applied: bool,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElumEpmBreakdown {
    pub assets: Vec<EpmAssetCost>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElumJubailiBreakdown {
    /// Fee per asset for this period, tier-resolved or flat.
    pub fee_per_asset: f64,
    pub asset_count: usize,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElumInternalBreakdown {
    pub allocations: Vec<TierAllocation>,
    pub total_cost: f64,
}

/// One site's charges in the per_site package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerSiteLine {
    pub site_id: String,
    pub site_name: String,
    pub onboarding_fee: f64,
    pub renewal_fee: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerSiteBreakdown {
    pub sites: Vec<PerSiteLine>,
    pub onboarding_total: f64,
    pub renewal_total: f64,
    pub total_cost: f64,
}

/// One asset under the site-minimum overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMinimumAssetLine {
    pub asset_id: String,
    pub asset_name: String,
    #[serde(rename = "assetMW")]
    pub asset_mw: f64,
    pub normal_cost: f64,
    /// Per-site minimum for this period, already multiplied into the
    /// site-charge unit.
    pub minimum_charge: f64,
    /// True when the minimum was charged instead of the normal cost.
    pub minimum_applied: bool,
    pub cost: f64,
}

/// Overlay summary. Its combined total replaces the plain module-cost and
/// minimum-charge totals, so `totalMWCost` already equals
/// `normal_pricing_total + minimum_pricing_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMinimumPricingBreakdown {
    pub assets: Vec<SiteMinimumAssetLine>,
    pub normal_pricing_total: f64,
    pub minimum_pricing_total: f64,
}

impl SiteMinimumPricingBreakdown {
    pub fn total(&self) -> f64 {
        self.normal_pricing_total + self.minimum_pricing_total
    }
}

/// One carved-out asset, priced by its individually negotiated terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedAsset {
    pub asset_id: String,
    pub asset_name: String,
    #[serde(rename = "totalMW")]
    pub total_mw: f64,
    pub pricing_type: CustomPricingType,
    #[serde(default)]
    pub note: Option<String>,
    pub cost: f64,
}

/// Retainer detail behind the `retainerCost` scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetainerBreakdown {
    pub hours: f64,
    pub hourly_rate: f64,
    pub calculated_cost: f64,
    pub minimum: f64,
    /// True when the configured minimum was the binding constraint.
    pub minimum_applied: bool,
    pub cost: f64,
}

/// Itemized result of one invoice calculation. Ephemeral: carries no identity
/// and is rebuilt, never patched, on any input change.
///
/// Every euro of `total_price` appears in exactly one summed position:
/// the scalar totals, plus the per-asset package breakdown totals
/// (per_site / elum_epm / elum_jubaili / elum_internal), plus the add-on
/// lines. Module lines and the hybrid/site-minimum breakdowns itemize
/// `totalMWCost` and are not summed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(default)]
    pub module_costs: Vec<ModuleCostLine>,
    #[serde(default)]
    pub addon_costs: Vec<AddonCostLine>,
    #[serde(default)]
    pub discounted_assets: Vec<DiscountedAsset>,

    #[serde(default)]
    pub hybrid_tiered_breakdown: Option<HybridTieredBreakdown>,
    #[serde(default)]
    pub elum_epm_breakdown: Option<ElumEpmBreakdown>,
    #[serde(default)]
    pub elum_jubaili_breakdown: Option<ElumJubailiBreakdown>,
    #[serde(default)]
    pub elum_internal_breakdown: Option<ElumInternalBreakdown>,
    #[serde(default)]
    pub per_site_breakdown: Option<PerSiteBreakdown>,
    #[serde(default)]
    pub site_minimum_pricing_breakdown: Option<SiteMinimumPricingBreakdown>,
    #[serde(default)]
    pub retainer_breakdown: Option<RetainerBreakdown>,

    /// Flat package cost of starter/capped contracts.
    #[serde(default)]
    pub starter_package_cost: f64,
    /// MW-driven package cost (pro family, hybrid, or the overlay total).
    #[serde(rename = "totalMWCost", default)]
    pub total_mw_cost: f64,
    /// Additive per-site minimum charges outside the overlay.
    #[serde(default)]
    pub minimum_charges: f64,
    /// Uplift that raised the base cost to the contractual floor.
    #[serde(default)]
    pub minimum_contract_adjustment: f64,
    /// Base platform fee: monthly price times months in the period.
    #[serde(default)]
    pub base_pricing_cost: f64,
    #[serde(default)]
    pub retainer_cost: f64,
    /// Sum of the carved-out asset lines.
    #[serde(default)]
    pub discounted_assets_total: f64,
    /// Grand total; equals [`CalculationResult::component_total`].
    #[serde(default)]
    pub total_price: f64,
}

impl CalculationResult {
    pub fn module_costs_total(&self) -> f64 {
        self.module_costs.iter().map(|line| line.cost).sum()
    }

    pub fn addons_total(&self) -> f64 {
        self.addon_costs.iter().map(|line| line.cost).sum()
    }

    /// Package cost before minimum charges and the annual-value floor.
    pub fn package_cost(&self) -> f64 {
        self.starter_package_cost
            + self.total_mw_cost
            + self
                .elum_epm_breakdown
                .as_ref()
                .map_or(0.0, |b| b.total_cost)
            + self
                .elum_jubaili_breakdown
                .as_ref()
                .map_or(0.0, |b| b.total_cost)
            + self
                .elum_internal_breakdown
                .as_ref()
                .map_or(0.0, |b| b.total_cost)
            + self.per_site_breakdown.as_ref().map_or(0.0, |b| b.total_cost)
    }

    /// Package cost plus minimum charges plus the floor adjustment.
    pub fn base_cost(&self) -> f64 {
        self.package_cost() + self.minimum_charges + self.minimum_contract_adjustment
    }

    /// Recomputes the grand total from the itemized parts. Consumers can
    /// compare this against `total_price` to verify nothing was hidden.
    pub fn component_total(&self) -> f64 {
        self.base_cost()
            + self.addons_total()
            + self.base_pricing_cost
            + self.retainer_cost
            + self.discounted_assets_total
    }
}
