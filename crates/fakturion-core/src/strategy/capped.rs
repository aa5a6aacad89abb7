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

/// Capped package: a negotiated flat fee regardless of portfolio growth.
///
/// The contract's minimum annual value is the whole price; the MW pool is
/// informational only and never enters the charge. Unlike starter there is
/// no fallback fee, so a contract without a negotiated value bills zero.
#[derive(Debug, Default)]
pub struct CappedStrategy;

impl PackageStrategy for CappedStrategy {
    fn name(&self) -> &str {
        "Capped"
    }

    fn compute(&self, context: &StrategyContext) -> PackageCharge {
        PackageCharge {
            starter_package_cost: context.params.effective_minimum_annual_value()
                * context.annual_fraction,
            ..PackageCharge::default()
        }
    }
}
