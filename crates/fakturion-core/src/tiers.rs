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

use std::cmp::Ordering;

use fakturion_types::result::TierAllocation;
use fakturion_types::tiers::{DiscountTier, GraduatedMwTier, MinimumChargeTier, MwRange};

/// First tier whose range covers `quantity`, in list order. An absent or
/// empty list resolves to `None`; callers read a zero value off that,
/// never an error.
pub fn resolve_tier<T: MwRange>(quantity: f64, tiers: &[T]) -> Option<&T> {
    tiers.iter().find(|tier| tier.matches(quantity))
}

/// Discount percent the portfolio qualifies for, or 0 when no band matches.
/// Informational for consumers: invoice totals never apply it.
pub fn resolve_portfolio_discount(total_mw: f64, tiers: &[DiscountTier]) -> f64 {
    resolve_tier(total_mw, tiers).map_or(0.0, |tier| tier.discount_percent)
}

/// Per-site charge for a portfolio of `total_mw`: the tier band wins when one
/// matches, otherwise the flat fallback (0 when nothing is configured).
pub fn resolve_site_charge(total_mw: f64, tiers: &[MinimumChargeTier], flat_charge: f64) -> f64 {
    resolve_tier(total_mw, tiers).map_or(flat_charge, |tier| tier.charge_per_site)
}

/// Bracket-style allocation of `total_quantity` across graduated tiers.
///
/// Tiers are walked in ascending `minMW` order; each consumes up to its own
/// capacity before the next applies. The final tier absorbs any remainder
/// beyond its nominal capacity, so the allocated quantities always sum to
/// `total_quantity` whenever at least one tier exists.
pub fn allocate_graduated(total_quantity: f64, tiers: &[GraduatedMwTier]) -> Vec<TierAllocation> {
    if tiers.is_empty() || total_quantity <= 0.0 {
        return Vec::new();
    }

    let mut ordered: Vec<&GraduatedMwTier> = tiers.iter().collect();
    ordered.sort_by(|a, b| a.min_mw.partial_cmp(&b.min_mw).unwrap_or(Ordering::Equal));

    let mut allocations = Vec::new();
    let mut remaining = total_quantity;
    let last = ordered.len() - 1;

    for (index, tier) in ordered.iter().enumerate() {
        if remaining <= 0.0 {
            break;
        }
        let quantity = if index == last {
            remaining
        } else {
            remaining.min(tier.capacity())
        };
        if quantity <= 0.0 {
            continue;
        }
        allocations.push(TierAllocation {
            tier: (*tier).clone(),
            quantity_in_tier: quantity,
            cost: quantity * tier.price_per_unit,
        });
        remaining -= quantity;
    }

    allocations
}

/// Sum of the allocation costs.
pub fn allocation_total(allocations: &[TierAllocation]) -> f64 {
    allocations.iter().map(|allocation| allocation.cost).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge_tiers() -> Vec<MinimumChargeTier> {
        vec![
            MinimumChargeTier {
                min_mw: 0.0,
                max_mw: Some(10.0),
                charge_per_site: 2500.0,
            },
            MinimumChargeTier {
                min_mw: 10.0,
                max_mw: Some(50.0),
                charge_per_site: 2000.0,
            },
            MinimumChargeTier {
                min_mw: 50.0,
                max_mw: None,
                charge_per_site: 1500.0,
            },
        ]
    }

    #[test]
    fn test_resolver_picks_first_match() {
        let tiers = charge_tiers();
        assert_eq!(resolve_tier(5.0, &tiers).unwrap().charge_per_site, 2500.0);
        assert_eq!(resolve_tier(25.0, &tiers).unwrap().charge_per_site, 2000.0);
        assert_eq!(resolve_tier(500.0, &tiers).unwrap().charge_per_site, 1500.0);
    }

    #[test]
    fn test_resolver_boundary_lands_in_earlier_tier() {
        // 10.0 satisfies both the first and second band; first match wins.
        let tiers = charge_tiers();
        assert_eq!(resolve_tier(10.0, &tiers).unwrap().charge_per_site, 2500.0);
    }

    #[test]
    fn test_resolver_empty_list_is_none() {
        let tiers: Vec<MinimumChargeTier> = vec![];
        assert!(resolve_tier(12.0, &tiers).is_none());
    }

    #[test]
    fn test_every_quantity_resolves_when_coverage_is_total() {
        let tiers = charge_tiers();
        for mw in [0.0, 0.5, 9.999, 10.0, 49.0, 50.0, 51.0, 10_000.0] {
            assert!(
                resolve_tier(mw, &tiers).is_some(),
                "expected a band for {mw} MW"
            );
        }
    }

    #[test]
    fn test_site_charge_falls_back_to_flat() {
        assert_eq!(resolve_site_charge(20.0, &[], 1800.0), 1800.0);
        assert_eq!(resolve_site_charge(20.0, &charge_tiers(), 1800.0), 2000.0);
    }

    #[test]
    fn test_portfolio_discount_resolution() {
        let tiers = vec![
            DiscountTier {
                min_mw: 0.0,
                max_mw: Some(100.0),
                discount_percent: 0.0,
            },
            DiscountTier {
                min_mw: 100.0,
                max_mw: None,
                discount_percent: 7.5,
            },
        ];
        assert_eq!(resolve_portfolio_discount(40.0, &tiers), 0.0);
        assert_eq!(resolve_portfolio_discount(250.0, &tiers), 7.5);
        assert_eq!(resolve_portfolio_discount(250.0, &[]), 0.0);
    }

    #[test]
    fn test_graduated_allocation_brackets() {
        let tiers = vec![
            GraduatedMwTier::new(0.0, Some(100.0), 150.0),
            GraduatedMwTier::new(100.0, Some(500.0), 75.0),
        ];
        let allocations = allocate_graduated(150.0, &tiers);
        assert_eq!(allocations.len(), 2);
        assert_eq!(allocations[0].quantity_in_tier, 100.0);
        assert_eq!(allocations[0].cost, 15000.0);
        assert_eq!(allocations[1].quantity_in_tier, 50.0);
        assert_eq!(allocations[1].cost, 3750.0);
        assert_eq!(allocation_total(&allocations), 18750.0);
    }

    #[test]
    fn test_graduated_allocation_conserves_quantity() {
        let tiers = vec![
            GraduatedMwTier::new(0.0, Some(100.0), 150.0),
            GraduatedMwTier::new(100.0, Some(500.0), 75.0),
            GraduatedMwTier::new(500.0, None, 40.0),
        ];
        for total in [0.5, 99.9, 100.0, 350.0, 2_000.0] {
            let allocated: f64 = allocate_graduated(total, &tiers)
                .iter()
                .map(|a| a.quantity_in_tier)
                .sum();
            assert!((allocated - total).abs() < 1e-9, "lost MW at {total}");
        }
    }

    #[test]
    fn test_graduated_allocation_sorts_unordered_input() {
        let tiers = vec![
            GraduatedMwTier::new(100.0, Some(500.0), 75.0),
            GraduatedMwTier::new(0.0, Some(100.0), 150.0),
        ];
        let allocations = allocate_graduated(150.0, &tiers);
        assert_eq!(allocations[0].tier.min_mw, 0.0);
        assert_eq!(allocation_total(&allocations), 18750.0);
    }

    #[test]
    fn test_graduated_allocation_overflow_spills_into_last_tier() {
        let tiers = vec![
            GraduatedMwTier::new(0.0, Some(100.0), 150.0),
            GraduatedMwTier::new(100.0, Some(200.0), 75.0),
        ];
        let allocations = allocate_graduated(400.0, &tiers);
        // 100 MW in the first bracket, the remaining 300 at the last rate.
        assert_eq!(allocations[1].quantity_in_tier, 300.0);
        assert_eq!(allocation_total(&allocations), 100.0 * 150.0 + 300.0 * 75.0);
    }

    #[test]
    fn test_graduated_allocation_empty_or_zero() {
        assert!(allocate_graduated(150.0, &[]).is_empty());
        let tiers = vec![GraduatedMwTier::new(0.0, None, 150.0)];
        assert!(allocate_graduated(0.0, &tiers).is_empty());
    }
}
