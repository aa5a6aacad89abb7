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

use crate::strategy::{PackageCharge, PackageStrategy, StrategyContext};

/// Starter package: one flat annual fee, scaled to the billing period.
///
/// The fee is the contract's minimum annual value, falling back to the
/// standard starter price when the contract does not set one. Capacity and
/// module selections carry no charge on this package.
#[derive(Debug, Default)]
pub struct StarterStrategy;

impl PackageStrategy for StarterStrategy {
    fn name(&self) -> &str {
        "Starter"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        PackageCharge {
            starter_package_cost: context.params.effective_minimum_annual_value()
                * context.annual_fraction,
            ..PackageCharge::default()
        }
    }
}
