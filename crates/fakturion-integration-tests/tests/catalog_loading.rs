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

//! Invoices against a deployment-supplied catalog file instead of the
//! built-in one.

use std::io::Write;

use fakturion_core::{InvoiceCalculator, load_catalog};
use fakturion_types::package::PackageType;
use fakturion_types::params::{AddonSelection, CalculationParams};
use tempfile::NamedTempFile;

const DEPLOYMENT_CATALOG: &str = r#"
[[modules]]
id = "monitoring"
name = "Monitoring (regional pricing)"
price = 380.0

[[modules]]
id = "grid_compliance"
name = "Grid Code Compliance"
price = 220.0

[[addons]]
id = "audit_pack"
name = "Audit Pack"
price = 1500.0

[[addons]]
id = "extra_users"
name = "Additional User Seats"
price = 10.0
billed_monthly = true

[[addons.tiered_pricing]]
minMW = 0.0
maxMW = 20.0
pricePerUnit = 10.0

[[addons.tiered_pricing]]
minMW = 20.0
pricePerUnit = 7.0
"#;

fn write_catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn invoice_uses_rates_from_the_loaded_catalog() {
    let file = write_catalog_file(DEPLOYMENT_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    let mut params = CalculationParams::new(PackageType::Pro);
    params.total_mw = 10.0;
    params.selected_modules = vec!["monitoring".to_string(), "grid_compliance".to_string()];

    let calculator = InvoiceCalculator::with_default_strategies();
    let result = calculator.calculate(&params, &catalog);

    // Regional monitoring rate 380 plus compliance 220, over 10 MW.
    assert_eq!(result.total_mw_cost, 6000.0);
}

#[test]
fn modules_missing_from_the_deployment_catalog_drop_out() {
    let file = write_catalog_file(DEPLOYMENT_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    let mut params = CalculationParams::new(PackageType::Pro);
    params.total_mw = 10.0;
    // "alarms" exists in the standard catalog but not in this deployment.
    params.selected_modules = vec!["monitoring".to_string(), "alarms".to_string()];

    let calculator = InvoiceCalculator::with_default_strategies();
    let result = calculator.calculate(&params, &catalog);

    assert_eq!(result.module_costs.len(), 1);
    assert_eq!(result.total_mw_cost, 3800.0);
}

#[test]
fn tiered_addon_from_loaded_catalog_prices_by_bracket() {
    let file = write_catalog_file(DEPLOYMENT_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    let mut params = CalculationParams::new(PackageType::Starter);
    params.selected_addons = vec![AddonSelection {
        quantity: Some(30.0),
        ..AddonSelection::new("extra_users")
    }];

    let calculator = InvoiceCalculator::with_default_strategies();
    let result = calculator.calculate(&params, &catalog);

    // 20 seats at 10 and 10 at 7, monthly over a year.
    assert_eq!(result.addons_total(), (200.0 + 70.0) * 12.0);
}

#[test]
fn duplicate_ids_in_catalog_file_are_refused() {
    let file = write_catalog_file(
        r#"
[[addons]]
id = "audit_pack"
name = "Audit Pack"
price = 1500.0

[[addons]]
id = "audit_pack"
name = "Audit Pack (stale copy)"
price = 900.0
"#,
    );

    let error = load_catalog(file.path()).unwrap_err();
    assert!(format!("{error:#}").contains("duplicate add-on id"));
}

#[test]
fn catalog_errors_keep_the_file_path() {
    let file = write_catalog_file("modules = \"broken\"");

    let error = load_catalog(file.path()).unwrap_err();
    let chain = format!("{error:#}");
    assert!(chain.contains(&file.path().display().to_string()));
}
