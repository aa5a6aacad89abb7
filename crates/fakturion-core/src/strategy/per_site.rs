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

use crate::strategy::{PackageBreakdown, PackageCharge, PackageStrategy, StrategyContext};
use fakturion_types::frequency::SiteChargeFrequency;
use fakturion_types::result::{PerSiteBreakdown, PerSiteLine};

/// Per-site package: event-driven fees instead of capacity pricing.
///
/// The caller supplies the billing obligations; the MW pool never enters
/// the charge. Each site owes the one-off onboarding fee in the period its
/// onboarding date falls, and the renewal fee in each period containing
/// its contract anniversary. Monthly-renewal contracts spread the annual
/// fee over the period's months instead of charging it in one piece.
#[derive(Debug, Default)]
pub struct PerSiteStrategy;

impl PackageStrategy for PerSiteStrategy {
    fn name(&self) -> &str {
        "Per-site"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        let params = context.params;
        let renewal_fee_due = match params.site_charge_frequency {
            SiteChargeFrequency::Annual => params.annual_fee_per_site,
            SiteChargeFrequency::Monthly => {
                params.annual_fee_per_site / 12.0 * f64::from(context.period_months)
            }
        };

        let mut sites = Vec::new();
        let mut onboarding_total = 0.0;
        let mut renewal_total = 0.0;
        for obligation in &params.site_obligations {
            if !obligation.onboarding_due && !obligation.renewal_due {
                continue;
            }
            let onboarding_fee = if obligation.onboarding_due {
                params.onboarding_fee_per_site
            } else {
                0.0
            };
            let renewal_fee = if obligation.renewal_due {
                renewal_fee_due
            } else {
                0.0
            };
            onboarding_total += onboarding_fee;
            renewal_total += renewal_fee;
            sites.push(PerSiteLine {
                site_id: obligation.site_id.clone(),
                site_name: obligation.site_name.clone(),
                onboarding_fee,
                renewal_fee,
                cost: onboarding_fee + renewal_fee,
            });
        }

        let breakdown = PerSiteBreakdown {
            sites,
            onboarding_total,
            renewal_total,
            total_cost: onboarding_total + renewal_total,
        };
        PackageCharge {
            breakdown: Some(PackageBreakdown::PerSite(breakdown)),
            ..PackageCharge::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakturion_types::catalog::PricingCatalog;
    use fakturion_types::frequency::BillingFrequency;
    use fakturion_types::package::PackageType;
    use fakturion_types::params::{CalculationParams, SiteObligation};

    fn create_test_params() -> CalculationParams {
        let mut params = CalculationParams::new(PackageType::PerSite);
        params.onboarding_fee_per_site = 900.0;
        params.annual_fee_per_site = 600.0;
        params.site_obligations = vec![
            SiteObligation {
                onboarding_due: true,
                ..SiteObligation::new("s-1", "New rooftop")
            },
            SiteObligation {
                renewal_due: true,
                ..SiteObligation::new("s-2", "Second year rooftop")
            },
            SiteObligation::new("s-3", "Mid-contract rooftop"),
        ];
        params
    }

    fn compute(params: &CalculationParams) -> PerSiteBreakdown {
        let catalog = PricingCatalog::standard();
        let context = StrategyContext {
            params,
            catalog: &catalog,
            annual_fraction: params.annual_fraction(),
            period_months: params.period_months(),
        };
        match PerSiteStrategy.compute(&context).breakdown {
            Some(PackageBreakdown::PerSite(breakdown)) => breakdown,
            other => panic!("expected per-site breakdown, got {other:?}"),
        }
    }

    #[test]
    fn test_per_site_bills_due_obligations_only() {
        let params = create_test_params();

        let breakdown = compute(&params);

        assert_eq!(breakdown.sites.len(), 2);
        assert_eq!(breakdown.onboarding_total, 900.0);
        assert_eq!(breakdown.renewal_total, 600.0);
        assert_eq!(breakdown.total_cost, 1500.0);
    }

    #[test]
    fn test_per_site_monthly_renewal_spreads_annual_fee() {
        let mut params = create_test_params();
        params.site_charge_frequency = SiteChargeFrequency::Monthly;
        params.billing_frequency = BillingFrequency::Quarterly;

        let breakdown = compute(&params);

        // 600 a year is 50 a month, three months in the period.
        assert_eq!(breakdown.renewal_total, 150.0);
        assert_eq!(breakdown.onboarding_total, 900.0);
    }

    #[test]
    fn test_per_site_onboarding_fee_never_scales() {
        let mut params = create_test_params();
        params.billing_frequency = BillingFrequency::Monthly;

        let breakdown = compute(&params);

        assert_eq!(breakdown.onboarding_total, 900.0);
    }

    #[test]
    fn test_per_site_without_obligations_bills_zero() {
        let mut params = create_test_params();
        params.site_obligations.clear();
        params.total_mw = 40.0;

        let breakdown = compute(&params);

        assert!(breakdown.sites.is_empty());
        assert_eq!(breakdown.total_cost, 0.0);
    }

    #[test]
    fn test_per_site_site_owing_both_fees_gets_one_line() {
        let mut params = create_test_params();
        params.site_obligations = vec![SiteObligation {
            onboarding_due: true,
            renewal_due: true,
            ..SiteObligation::new("s-9", "Renewed and onboarded")
        }];

        let breakdown = compute(&params);

        assert_eq!(breakdown.sites.len(), 1);
        assert_eq!(breakdown.sites[0].cost, 1500.0);
    }
}
