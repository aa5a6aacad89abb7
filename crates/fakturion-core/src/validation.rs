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

//! Configuration lint pass for contract parameters.
//!
//! The calculation itself never rejects input: a gappy tier list just
//! resolves to zero for the uncovered range. This pass runs separately and
//! names what the calculation will silently do, so the contract author can
//! fix the configuration while the caller still shows a number.

use std::cmp::Ordering;

use fakturion_types::frequency::BillingFrequency;
use fakturion_types::params::CalculationParams;
use fakturion_types::tiers::MwRange;
use thiserror::Error;
use tracing::debug;

/// One suspicious spot in a contract's configuration. Never fatal; the
/// matching calculation still runs and bills whatever the formulas yield.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigWarning {
    #[error("{list}: tier {index} has maxMW {max_mw} below its minMW {min_mw}")]
    ReversedRange {
        list: String,
        index: usize,
        min_mw: f64,
        max_mw: f64,
    },

    #[error("{list}: tiers overlap at {at} MW, the earlier tier wins")]
    Overlap { list: String, at: f64 },

    #[error("{list}: nothing covers {from} to {to} MW, quantities there resolve to zero")]
    Gap { list: String, from: f64, to: f64 },

    #[error("{list}: no tier starts at zero, quantities below {first_min} MW resolve to zero")]
    UncoveredOrigin { list: String, first_min: f64 },

    #[error("{list}: tiers are not in ascending minMW order")]
    Unsorted { list: String },

    #[error("{label}: negative price {value}")]
    NegativePrice { label: String, value: f64 },

    #[error(
        "frequencyMultiplier {multiplier} disagrees with {frequency} billing (annual fraction {fraction})"
    )]
    FrequencyMultiplierMismatch {
        multiplier: f64,
        frequency: BillingFrequency,
        fraction: f64,
    },
}

/// Lint one contract's parameters and collect everything a calculation
/// would silently paper over. An empty result means the configuration is
/// internally consistent, not that the prices are sensible.
pub fn validate_params(params: &CalculationParams) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    check_tier_list("graduatedMWTiers", &params.graduated_mw_tiers, &mut warnings);
    check_tier_list(
        "minimumChargeTiers",
        &params.minimum_charge_tiers,
        &mut warnings,
    );
    check_tier_list(
        "portfolioDiscountTiers",
        &params.portfolio_discount_tiers,
        &mut warnings,
    );
    for selection in &params.selected_addons {
        if let Some(tiers) = &selection.custom_tiers {
            let list = format!("selectedAddons['{}'].customTiers", selection.id);
            check_tier_list(&list, tiers, &mut warnings);
        }
    }

    for (index, tier) in params.graduated_mw_tiers.iter().enumerate() {
        if tier.price_per_unit < 0.0 {
            warnings.push(ConfigWarning::NegativePrice {
                label: format!("graduatedMWTiers[{index}].pricePerUnit"),
                value: tier.price_per_unit,
            });
        }
    }
    for (index, tier) in params.minimum_charge_tiers.iter().enumerate() {
        if tier.charge_per_site < 0.0 {
            warnings.push(ConfigWarning::NegativePrice {
                label: format!("minimumChargeTiers[{index}].chargePerSite"),
                value: tier.charge_per_site,
            });
        }
    }
    for (key, value) in &params.custom_pricing {
        if *value < 0.0 {
            warnings.push(ConfigWarning::NegativePrice {
                label: format!("customPricing['{key}']"),
                value: *value,
            });
        }
    }

    if let Some(multiplier) = params.frequency_multiplier {
        let fraction = params.billing_frequency.annual_fraction();
        if (multiplier - fraction).abs() > 1e-9 {
            warnings.push(ConfigWarning::FrequencyMultiplierMismatch {
                multiplier,
                frequency: params.billing_frequency,
                fraction,
            });
        }
    }

    if !warnings.is_empty() {
        debug!(
            "Contract configuration produced {} warning(s)",
            warnings.len()
        );
    }

    warnings
}

/// Range checks shared by every MW-keyed tier list: reversed bounds,
/// caller-visible ordering, and coverage of the sorted spans.
fn check_tier_list<T: MwRange>(list: &str, tiers: &[T], warnings: &mut Vec<ConfigWarning>) {
    for (index, tier) in tiers.iter().enumerate() {
        if let Some(max_mw) = tier.max_mw() {
            if max_mw < tier.min_mw() {
                warnings.push(ConfigWarning::ReversedRange {
                    list: list.to_string(),
                    index,
                    min_mw: tier.min_mw(),
                    max_mw,
                });
            }
        }
    }

    if tiers.len() < 2 {
        if let Some(first) = tiers.first() {
            if first.min_mw() > 0.0 {
                warnings.push(ConfigWarning::UncoveredOrigin {
                    list: list.to_string(),
                    first_min: first.min_mw(),
                });
            }
        }
        return;
    }

    if !tiers
        .windows(2)
        .all(|pair| pair[0].min_mw() <= pair[1].min_mw())
    {
        warnings.push(ConfigWarning::Unsorted {
            list: list.to_string(),
        });
    }

    let mut sorted: Vec<&T> = tiers.iter().collect();
    sorted.sort_by(|a, b| {
        a.min_mw()
            .partial_cmp(&b.min_mw())
            .unwrap_or(Ordering::Equal)
    });

    if sorted[0].min_mw() > 0.0 {
        warnings.push(ConfigWarning::UncoveredOrigin {
            list: list.to_string(),
            first_min: sorted[0].min_mw(),
        });
    }

    for pair in sorted.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        match previous.max_mw() {
            None => {
                warnings.push(ConfigWarning::Overlap {
                    list: list.to_string(),
                    at: next.min_mw(),
                });
            }
            Some(previous_max) if next.min_mw() < previous_max => {
                warnings.push(ConfigWarning::Overlap {
                    list: list.to_string(),
                    at: next.min_mw(),
                });
            }
            Some(previous_max) if next.min_mw() > previous_max => {
                warnings.push(ConfigWarning::Gap {
                    list: list.to_string(),
                    from: previous_max,
                    to: next.min_mw(),
                });
            }
            Some(_) => {}
        }
    }
}
