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

//! Loading the pricing catalog from a TOML file.
//!
//! Deployments that do not ship a catalog file run on
//! [`PricingCatalog::standard`]; the calculation engine itself never reads
//! the filesystem.

use anyhow::{Context, Result, bail};
use fakturion_types::catalog::PricingCatalog;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<PricingCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&content).with_context(|| format!("Failed to load catalog {}", path.display()))
}

/// Parse catalog TOML. Both entry lists are optional; an empty document is
/// a valid catalog against which every ID resolves to nothing.
pub fn parse_catalog(content: &str) -> Result<PricingCatalog> {
    let catalog: PricingCatalog =
        toml::from_str(content).with_context(|| "Failed to parse catalog TOML")?;
    validate(&catalog)?;
    debug!(
        "Loaded catalog with {} modules and {} add-ons",
        catalog.modules.len(),
        catalog.addons.len()
    );
    Ok(catalog)
}

/// ID lookups pick the first match, so a duplicate would silently shadow
/// its twin. Refuse the file instead.
fn validate(catalog: &PricingCatalog) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in &catalog.modules {
        if !seen.insert(entry.id.as_str()) {
            bail!("duplicate module id '{}' in catalog", entry.id);
        }
    }
    seen.clear();
    for entry in &catalog.addons {
        if !seen.insert(entry.id.as_str()) {
            bail!("duplicate add-on id '{}' in catalog", entry.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG_TOML: &str = r#"
[[modules]]
id = "monitoring"
name = "Platform Monitoring"
price = 450.0

[[modules]]
id = "alarms"
name = "Alarm & Ticketing"
price = 120.0

[[addons]]
id = "custom_report"
name = "Custom Report Pack"
price = 900.0

[addons.complexity_pricing]
simple = 400.0
medium = 900.0
complex = 1800.0

[[addons]]
id = "extra_users"
name = "Additional User Seats"
price = 12.0
billed_monthly = true

[[addons.tiered_pricing]]
minMW = 0.0
maxMW = 10.0
pricePerUnit = 12.0

[[addons.tiered_pricing]]
minMW = 10.0
pricePerUnit = 9.0
"#;

    #[test]
    fn test_parse_full_catalog() {
        let catalog = parse_catalog(CATALOG_TOML).unwrap();

        assert_eq!(catalog.modules.len(), 2);
        assert_eq!(catalog.module("monitoring").unwrap().price, 450.0);

        let report = catalog.addon("custom_report").unwrap();
        assert_eq!(report.complexity_pricing.as_ref().unwrap().complex, 1800.0);

        let seats = catalog.addon("extra_users").unwrap();
        assert!(seats.billed_monthly);
        let tiers = seats.tiered_pricing.as_ref().unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[1].max_mw, None);
    }

    #[test]
    fn test_empty_document_is_an_empty_catalog() {
        let catalog = parse_catalog("").unwrap();
        assert!(catalog.modules.is_empty());
        assert!(catalog.addons.is_empty());
    }

    #[test]
    fn test_duplicate_module_id_is_refused() {
        let content = r#"
[[modules]]
id = "monitoring"
name = "First"
price = 450.0

[[modules]]
id = "monitoring"
name = "Shadowed"
price = 500.0
"#;
        let error = parse_catalog(content).unwrap_err();
        assert!(error.to_string().contains("duplicate module id"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_catalog("modules = 3").is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG_TOML.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.modules.len(), 2);
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let error = load_catalog(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/catalog.toml"));
    }
}
