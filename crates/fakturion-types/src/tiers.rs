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

/// Common surface of every MW-keyed tier record.
///
/// `min_mw` is inclusive; `max_mw` is `None` for unbounded-above. Resolver-style
/// lookups pick the first tier whose range matches the whole quantity; graduated
/// allocation instead consumes each tier's capacity bracket by bracket.
pub trait MwRange {
    fn min_mw(&self) -> f64;
    fn max_mw(&self) -> Option<f64>;

    /// First-match predicate: `quantity >= minMW` and (`maxMW` unset or
    /// `quantity <= maxMW`). A boundary quantity therefore lands in the
    /// earlier of two adjacent tiers.
    fn matches(&self, quantity: f64) -> bool {
        quantity >= self.min_mw() && self.max_mw().is_none_or(|max| quantity <= max)
    }

    /// Bracket width consumed by graduated allocation. Unbounded tiers
    /// report infinite capacity.
    fn capacity(&self) -> f64 {
        self.max_mw()
            .map_or(f64::INFINITY, |max| (max - self.min_mw()).max(0.0))
    }
}

/// Portfolio-size discount band. Resolution reads `discount_percent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    #[serde(rename = "minMW")]
    pub min_mw: f64,
    #[serde(rename = "maxMW", default)]
    pub max_mw: Option<f64>,
    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,
}

impl MwRange for DiscountTier {
    fn min_mw(&self) -> f64 {
        self.min_mw
    }

    fn max_mw(&self) -> Option<f64> {
        self.max_mw
    }
}

/// Per-site minimum charge band, keyed by total portfolio MW.
/// Resolution reads `charge_per_site`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumChargeTier {
    #[serde(rename = "minMW")]
    pub min_mw: f64,
    #[serde(rename = "maxMW", default)]
    pub max_mw: Option<f64>,
    #[serde(rename = "chargePerSite")]
    pub charge_per_site: f64,
}

impl MwRange for MinimumChargeTier {
    fn min_mw(&self) -> f64 {
        self.min_mw
    }

    fn max_mw(&self) -> Option<f64> {
        self.max_mw
    }
}

/// Graduated (bracket) pricing tier: only the portion of the quantity that
/// falls inside the bracket is billed at `price_per_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduatedMwTier {
    #[serde(rename = "minMW")]
    pub min_mw: f64,
    #[serde(rename = "maxMW", default)]
    pub max_mw: Option<f64>,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: f64,
}

impl GraduatedMwTier {
    pub fn new(min_mw: f64, max_mw: Option<f64>, price_per_unit: f64) -> Self {
        Self {
            min_mw,
            max_mw,
            price_per_unit,
        }
    }
}

impl MwRange for GraduatedMwTier {
    fn min_mw(&self) -> f64 {
        self.min_mw
    }

    fn max_mw(&self) -> Option<f64> {
        self.max_mw
    }
}
