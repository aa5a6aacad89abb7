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

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Nominal annual value a starter contract falls back to when none is configured.
pub const STARTER_DEFAULT_ANNUAL_VALUE: f64 = 3000.0;

/// Contract package type. Each variant selects exactly one cost strategy;
/// the enum is deliberately exhaustive so a new package type cannot ship
/// without a strategy behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    #[default]
    Starter,
    Pro,
    Custom,
    HybridTiered,
    Capped,
    PerSite,
    ElumEpm,
    ElumJubaili,
    ElumPortfolioOs,
    ElumInternal,
}

impl PackageType {
    /// List all supported package types
    pub fn all() -> &'static [PackageType] {
        &[
            Self::Starter,
            Self::Pro,
            Self::Custom,
            Self::HybridTiered,
            Self::Capped,
            Self::PerSite,
            Self::ElumEpm,
            Self::ElumJubaili,
            Self::ElumPortfolioOs,
            Self::ElumInternal,
        ]
    }

    /// Human-readable name for summaries and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Pro => "Pro",
            Self::Custom => "Custom",
            Self::HybridTiered => "Hybrid Tiered",
            Self::Capped => "Capped",
            Self::PerSite => "Per Site",
            Self::ElumEpm => "Elum ePM",
            Self::ElumJubaili => "Elum Jubaili",
            Self::ElumPortfolioOs => "Elum Portfolio OS",
            Self::ElumInternal => "Elum Internal",
        }
    }

    /// Wire identifier as it appears in contract records
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Custom => "custom",
            Self::HybridTiered => "hybrid_tiered",
            Self::Capped => "capped",
            Self::PerSite => "per_site",
            Self::ElumEpm => "elum_epm",
            Self::ElumJubaili => "elum_jubaili",
            Self::ElumPortfolioOs => "elum_portfolio_os",
            Self::ElumInternal => "elum_internal",
        }
    }

    /// Packages whose base cost is subject to the minimum-annual-value floor.
    pub fn has_minimum_annual_floor(&self) -> bool {
        matches!(
            self,
            Self::Pro | Self::Custom | Self::ElumPortfolioOs | Self::ElumInternal
        )
    }

    /// Packages that may opt into per-asset site-minimum pricing.
    pub fn supports_site_minimum_overlay(&self) -> bool {
        matches!(self, Self::Pro | Self::Custom)
    }

    /// Packages that accrue per-site minimum charges on top of module costs.
    /// elum_epm is excluded here: its minimum acts per asset inside the strategy.
    pub fn has_per_site_minimum_charges(&self) -> bool {
        matches!(self, Self::Pro | Self::Custom | Self::ElumPortfolioOs)
    }

    /// Annual value assumed when `minimumAnnualValue` is not configured.
    pub fn default_minimum_annual_value(&self) -> f64 {
        match self {
            Self::Starter => STARTER_DEFAULT_ANNUAL_VALUE,
            Self::Pro
            | Self::Custom
            | Self::HybridTiered
            | Self::Capped
            | Self::PerSite
            | Self::ElumEpm
            | Self::ElumJubaili
            | Self::ElumPortfolioOs
            | Self::ElumInternal => 0.0,
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PackageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            "custom" => Ok(Self::Custom),
            "hybrid_tiered" => Ok(Self::HybridTiered),
            "capped" => Ok(Self::Capped),
            "per_site" => Ok(Self::PerSite),
            "elum_epm" => Ok(Self::ElumEpm),
            "elum_jubaili" => Ok(Self::ElumJubaili),
            "elum_portfolio_os" => Ok(Self::ElumPortfolioOs),
            "elum_internal" => Ok(Self::ElumInternal),
            _ => Err(anyhow::anyhow!(
                "Unknown package type: '{}'. Supported types: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.as_key())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
