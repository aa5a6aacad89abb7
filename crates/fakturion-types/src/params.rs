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

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::AddonComplexity;
use crate::frequency::{BillingFrequency, SiteChargeFrequency};
use crate::package::PackageType;
use crate::tiers::{DiscountTier, GraduatedMwTier, MinimumChargeTier};

/// `customPricing` key carrying the hybrid package's on-grid per-MW rate.
pub const ON_GRID_RATE_KEY: &str = "on_grid_rate";
/// `customPricing` key carrying the hybrid package's hybrid per-MW rate.
pub const HYBRID_RATE_KEY: &str = "hybrid_rate";

/// One selected add-on, normalized at the input boundary: every entry is this
/// record regardless of how the contract form captured it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSelection {
    pub id: String,
    #[serde(default)]
    pub complexity: Option<AddonComplexity>,
    #[serde(default)]
    pub custom_price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Contract-specific replacement for the catalog's volume tiers.
    #[serde(default)]
    pub custom_tiers: Option<Vec<GraduatedMwTier>>,
}

impl AddonSelection {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            complexity: None,
            custom_price: None,
            quantity: None,
            custom_tiers: None,
        }
    }
}

/// One monitored asset in the contract's current usage snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub asset_id: String,
    pub asset_name: String,
    #[serde(rename = "totalMW")]
    pub total_mw: f64,
    #[serde(default)]
    pub is_hybrid: bool,
}

impl AssetRecord {
    pub fn new(asset_id: &str, asset_name: &str, total_mw: f64) -> Self {
        Self {
            asset_id: asset_id.to_owned(),
            asset_name: asset_name.to_owned(),
            total_mw,
            is_hybrid: false,
        }
    }
}

/// How an individually negotiated asset is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomPricingType {
    /// Fixed annual price, prorated by the billing period.
    Annual,
    /// Per-MW annual price, multiplied by the asset's MW.
    PerMw,
}

/// Individually negotiated pricing for a single asset. Assets keyed in
/// `customAssetPricing` leave the standard MW pool entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAssetPricing {
    pub pricing_type: CustomPricingType,
    pub price: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Billing obligation of one site for the current period, already resolved
/// by the scheduling collaborator. The engine never inspects the calendar;
/// the due flags are authoritative and the dates are informational echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteObligation {
    pub site_id: String,
    pub site_name: String,
    #[serde(rename = "totalMW", default)]
    pub total_mw: f64,
    /// Site reaches its onboarding date within this period.
    #[serde(default)]
    pub onboarding_due: bool,
    /// Renewal falls due this period (anniversary for annually charged
    /// sites, every period for monthly charged ones).
    #[serde(default)]
    pub renewal_due: bool,
    #[serde(default)]
    pub onboarding_date: Option<NaiveDate>,
    #[serde(default)]
    pub anniversary: Option<NaiveDate>,
}

impl SiteObligation {
    pub fn new(site_id: &str, site_name: &str) -> Self {
        Self {
            site_id: site_id.to_owned(),
            site_name: site_name.to_owned(),
            total_mw: 0.0,
            onboarding_due: false,
            renewal_due: false,
            onboarding_date: None,
            anniversary: None,
        }
    }
}

/// Complete input of one invoice calculation, constructed fresh per call and
/// never mutated afterwards. Every optional field's default is visible here
/// rather than scattered through the strategies: numeric fields default to 0,
/// lists to empty, and `minimum_annual_value` to the package's own constant
/// (3000 for starter, 0 elsewhere).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculationParams {
    pub package_type: PackageType,

    /// Megawatts under management before the custom-asset carve-out.
    #[serde(rename = "totalMW", default)]
    pub total_mw: f64,

    /// Module IDs to price; order irrelevant, unknown IDs dropped.
    #[serde(default)]
    pub selected_modules: Vec<String>,

    /// Selected add-ons in contract order.
    #[serde(default)]
    pub selected_addons: Vec<AddonSelection>,

    /// Per-module (or rate-key) price overrides in annual EUR per MW.
    #[serde(default)]
    pub custom_pricing: HashMap<String, f64>,

    /// Contractual floor on the annual value; see
    /// [`CalculationParams::effective_minimum_annual_value`].
    #[serde(default)]
    pub minimum_annual_value: Option<f64>,

    /// Flat per-site minimum charge, used when no tier list is configured.
    #[serde(default)]
    pub minimum_charge: f64,

    /// Per-site minimum charge bands keyed by total portfolio MW.
    #[serde(default)]
    pub minimum_charge_tiers: Vec<MinimumChargeTier>,

    /// Portfolio-size discount bands; resolved for consumers, never applied
    /// to the totals computed here.
    #[serde(default)]
    pub portfolio_discount_tiers: Vec<DiscountTier>,

    /// Bracket pricing for the elum_internal package.
    #[serde(rename = "graduatedMWTiers", default)]
    pub graduated_mw_tiers: Vec<GraduatedMwTier>,

    /// Caller-supplied annual fraction; overrides the one derived from
    /// `billing_frequency` when present.
    #[serde(default)]
    pub frequency_multiplier: Option<f64>,

    #[serde(default)]
    pub billing_frequency: BillingFrequency,

    /// Per-asset usage snapshot; required by the hybrid, per-asset and
    /// site-minimum paths.
    #[serde(default)]
    pub asset_breakdown: Vec<AssetRecord>,

    /// Individually negotiated assets, keyed by asset ID.
    #[serde(default)]
    pub custom_asset_pricing: HashMap<String, CustomAssetPricing>,

    /// Opt-in for the pro/custom per-asset minimum overlay.
    #[serde(default)]
    pub use_site_minimum_pricing: bool,

    #[serde(default)]
    pub site_charge_frequency: SiteChargeFrequency,

    /// elum_epm: asset capacity threshold separating the two rates.
    #[serde(rename = "thresholdKWp", default)]
    pub threshold_kwp: f64,

    /// elum_epm: annual per-MW rate for assets at or below the threshold.
    #[serde(default)]
    pub below_threshold_rate: f64,

    /// elum_epm: annual per-MW rate for assets above the threshold.
    #[serde(default)]
    pub above_threshold_rate: f64,

    /// per_site: one-off fee charged when a site reaches its onboarding date.
    #[serde(default)]
    pub onboarding_fee_per_site: f64,

    /// per_site/elum_jubaili: annual fee per site (divided into months when
    /// sites are charged monthly).
    #[serde(default)]
    pub annual_fee_per_site: f64,

    /// Flat platform fee per month, billed for every package type.
    #[serde(default)]
    pub base_monthly_price: f64,

    #[serde(default)]
    pub retainer_hours: f64,
    #[serde(default)]
    pub retainer_hourly_rate: f64,
    #[serde(default)]
    pub retainer_minimum: f64,

    /// per_site: billing obligations resolved by the scheduling collaborator.
    #[serde(default)]
    pub site_obligations: Vec<SiteObligation>,
}

impl CalculationParams {
    pub fn new(package_type: PackageType) -> Self {
        Self {
            package_type,
            ..Self::default()
        }
    }

    /// Portion of an annual amount billed in this period. The explicit
    /// `frequency_multiplier` wins over the cadence-derived fraction.
    pub fn annual_fraction(&self) -> f64 {
        self.frequency_multiplier
            .unwrap_or_else(|| self.billing_frequency.annual_fraction())
    }

    /// Whole months covered by this billing period.
    pub fn period_months(&self) -> u32 {
        self.billing_frequency.period_months()
    }

    /// Configured annual floor, falling back to the package constant.
    pub fn effective_minimum_annual_value(&self) -> f64 {
        self.minimum_annual_value
            .unwrap_or_else(|| self.package_type.default_minimum_annual_value())
    }

    /// Price override for a module ID or rate key, if the contract has one.
    pub fn price_override(&self, key: &str) -> Option<f64> {
        self.custom_pricing.get(key).copied()
    }
}
