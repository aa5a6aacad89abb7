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

use crate::tiers::GraduatedMwTier;

/// Module covered by the hybrid dual rate and therefore excluded from that
/// strategy's per-module costs.
pub const MONITORING_MODULE_ID: &str = "monitoring";

/// Complexity grade of a configurable add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonComplexity {
    Simple,
    Medium,
    Complex,
}

/// Price per complexity grade for add-ons sold in graded variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityPricing {
    pub simple: f64,
    pub medium: f64,
    pub complex: f64,
}

impl ComplexityPricing {
    pub fn price_for(&self, complexity: AddonComplexity) -> f64 {
        match complexity {
            AddonComplexity::Simple => self.simple,
            AddonComplexity::Medium => self.medium,
            AddonComplexity::Complex => self.complex,
        }
    }
}

/// One module or add-on definition. Modules read `price` as an annual per-MW
/// rate; add-ons read it as a flat default, refined by `complexity_pricing`
/// or `tiered_pricing` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub complexity_pricing: Option<ComplexityPricing>,
    #[serde(default)]
    pub tiered_pricing: Option<Vec<GraduatedMwTier>>,
    /// Tiered add-ons flagged here scale by the period's month count;
    /// everything else is one-off.
    #[serde(default)]
    pub billed_monthly: bool,
}

impl CatalogEntry {
    /// Flat-priced entry (module rate or one-off add-on).
    pub fn flat(id: &str, name: &str, price: f64) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            price,
            complexity_pricing: None,
            tiered_pricing: None,
            billed_monthly: false,
        }
    }
}

/// Read-only pricing catalog the engine resolves module/add-on IDs against.
/// Externally owned: the engine never mutates or persists it, and unknown IDs
/// simply resolve to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCatalog {
    #[serde(default)]
    pub modules: Vec<CatalogEntry>,
    #[serde(default)]
    pub addons: Vec<CatalogEntry>,
}

impl PricingCatalog {
    /// Built-in catalog used when no external catalog file is supplied.
    pub fn standard() -> Self {
        Self {
            modules: vec![
                CatalogEntry::flat(MONITORING_MODULE_ID, "Platform Monitoring", 450.0),
                CatalogEntry::flat("alarms", "Alarm & Ticketing", 120.0),
                CatalogEntry::flat("reporting", "Automated Reporting", 90.0),
                CatalogEntry::flat("analytics", "Performance Analytics", 180.0),
                CatalogEntry::flat("forecasting", "Production Forecasting", 150.0),
                CatalogEntry::flat("maintenance", "Maintenance Planner", 110.0),
            ],
            addons: vec![
                CatalogEntry::flat("api_access", "API Access", 600.0),
                CatalogEntry {
                    complexity_pricing: Some(ComplexityPricing {
                        simple: 400.0,
                        medium: 900.0,
                        complex: 1800.0,
                    }),
                    ..CatalogEntry::flat("custom_report", "Custom Report Pack", 900.0)
                },
                CatalogEntry {
                    complexity_pricing: Some(ComplexityPricing {
                        simple: 1200.0,
                        medium: 2400.0,
                        complex: 4800.0,
                    }),
                    ..CatalogEntry::flat("scada_link", "SCADA Integration", 2400.0)
                },
                CatalogEntry {
                    tiered_pricing: Some(vec![
                        GraduatedMwTier::new(0.0, Some(10.0), 12.0),
                        GraduatedMwTier::new(10.0, Some(50.0), 9.0),
                        GraduatedMwTier::new(50.0, None, 6.0),
                    ]),
                    billed_monthly: true,
                    ..CatalogEntry::flat("extra_users", "Additional User Seats", 12.0)
                },
                CatalogEntry::flat("onboarding_training", "Onboarding Training", 800.0),
                CatalogEntry {
                    tiered_pricing: Some(vec![
                        GraduatedMwTier::new(0.0, Some(100.0), 2.5),
                        GraduatedMwTier::new(100.0, Some(500.0), 1.8),
                        GraduatedMwTier::new(500.0, None, 1.2),
                    ]),
                    billed_monthly: true,
                    ..CatalogEntry::flat("data_retention", "Extended Data Retention", 2.5)
                },
            ],
        }
    }

    pub fn module(&self, id: &str) -> Option<&CatalogEntry> {
        self.modules.iter().find(|entry| entry.id == id)
    }

    pub fn addon(&self, id: &str) -> Option<&CatalogEntry> {
        self.addons.iter().find(|entry| entry.id == id)
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_monitoring_module() {
        let catalog = PricingCatalog::standard();
        let monitoring = catalog.module(MONITORING_MODULE_ID).unwrap();
        assert_eq!(monitoring.name, "Platform Monitoring");
        assert!(monitoring.price > 0.0);
    }

    #[test]
    fn test_unknown_ids_resolve_to_none() {
        let catalog = PricingCatalog::standard();
        assert!(catalog.module("does_not_exist").is_none());
        assert!(catalog.addon("does_not_exist").is_none());
    }

    #[test]
    fn test_complexity_price_lookup() {
        let catalog = PricingCatalog::standard();
        let report = catalog.addon("custom_report").unwrap();
        let pricing = report.complexity_pricing.as_ref().unwrap();
        assert_eq!(pricing.price_for(AddonComplexity::Simple), 400.0);
        assert_eq!(pricing.price_for(AddonComplexity::Complex), 1800.0);
    }

    #[test]
    fn test_monthly_flag_only_on_recurring_addons() {
        let catalog = PricingCatalog::standard();
        assert!(catalog.addon("extra_users").unwrap().billed_monthly);
        assert!(!catalog.addon("api_access").unwrap().billed_monthly);
    }
}
