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

pub mod catalog;
pub mod frequency;
pub mod package;
pub mod params;
pub mod result;
pub mod tiers;

// Re-export common types for convenience
pub use catalog::{
    AddonComplexity, CatalogEntry, ComplexityPricing, MONITORING_MODULE_ID, PricingCatalog,
};
pub use frequency::{BillingFrequency, SiteChargeFrequency};
pub use package::{PackageType, STARTER_DEFAULT_ANNUAL_VALUE};
pub use params::{
    AddonSelection, AssetRecord, CalculationParams, CustomAssetPricing, CustomPricingType,
    HYBRID_RATE_KEY, ON_GRID_RATE_KEY, SiteObligation,
};
pub use result::{
    AddonCostLine, CalculationResult, DiscountedAsset, ElumEpmBreakdown, ElumInternalBreakdown,
    ElumJubailiBreakdown, EpmAssetCost, HybridTieredBreakdown, ModuleCostLine, PerSiteBreakdown,
    PerSiteLine, RetainerBreakdown, SiteMinimumAssetLine, SiteMinimumPricingBreakdown,
    TierAllocation,
};
pub use tiers::{DiscountTier, GraduatedMwTier, MinimumChargeTier, MwRange};
