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
use crate::tiers::allocate_graduated;
use fakturion_types::result::ElumInternalBreakdown;

/// Elum internal package: graduated bracket pricing over the whole MW
/// pool. Each configured tier bills only the capacity that falls inside
/// its bracket, at annual rates scaled to the billing period.
#[derive(Debug, Default)]
pub struct ElumInternalStrategy;

impl PackageStrategy for ElumInternalStrategy {
    fn name(&self) -> &str {
        "Elum internal"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        let params = context.params;
        let mut allocations = allocate_graduated(params.total_mw, &params.graduated_mw_tiers);
        for allocation in &mut allocations {
            allocation.cost *= context.annual_fraction;
        }
        let total_cost = allocations.iter().map(|allocation| allocation.cost).sum();

        PackageCharge {
            breakdown: Some(PackageBreakdown::ElumInternal(ElumInternalBreakdown {
                allocations,
                total_cost,
            })),
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
    use fakturion_types::params::CalculationParams;
    use fakturion_types::tiers::GraduatedMwTier;

    fn create_test_params() -> CalculationParams {
        let mut params = CalculationParams::new(PackageType::ElumInternal);
        params.total_mw = 150.0;
        params.graduated_mw_tiers = vec![
            GraduatedMwTier::new(0.0, Some(100.0), 150.0),
            GraduatedMwTier::new(100.0, Some(500.0), 75.0),
        ];
        params
    }

    fn compute(params: &CalculationParams) -> ElumInternalBreakdown {
        let catalog = PricingCatalog::standard();
        let context = StrategyContext {
            params,
            catalog: &catalog,
            annual_fraction: params.annual_fraction(),
            period_months: params.period_months(),
        };
        match ElumInternalStrategy.compute(&context).breakdown {
            Some(PackageBreakdown::ElumInternal(breakdown)) => breakdown,
            other => panic!("expected internal breakdown, got {other:?}"),
        }
    }

    #[test]
    fn test_internal_bills_each_bracket_at_its_rate() {
        let params = create_test_params();

        let breakdown = compute(&params);

        // First 100 MW at 150, the remaining 50 MW at 75.
        assert_eq!(breakdown.allocations.len(), 2);
        assert_eq!(breakdown.allocations[0].cost, 15_000.0);
        assert_eq!(breakdown.allocations[1].cost, 3750.0);
        assert_eq!(breakdown.total_cost, 18_750.0);
    }

    #[test]
    fn test_internal_scales_with_billing_period() {
        let mut params = create_test_params();
        params.billing_frequency = BillingFrequency::Biannual;

        let breakdown = compute(&params);

        assert_eq!(breakdown.allocations[0].cost, 7500.0);
        assert_eq!(breakdown.total_cost, 9375.0);
    }

    #[test]
    fn test_internal_without_tiers_bills_zero() {
        let mut params = create_test_params();
        params.graduated_mw_tiers.clear();

        let breakdown = compute(&params);

        assert!(breakdown.allocations.is_empty());
        assert_eq!(breakdown.total_cost, 0.0);
    }
}
