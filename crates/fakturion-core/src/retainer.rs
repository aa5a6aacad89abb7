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

use fakturion_types::params::CalculationParams;
use fakturion_types::result::RetainerBreakdown;

/// Retainer charge for the period: hours × hourly rate, raised to the
/// configured minimum when that binds. A contract has a retainer when it
/// books hours or configures a minimum; otherwise this returns `None` and
/// the invoice carries no retainer line.
pub fn retainer_cost(params: &CalculationParams) -> Option<RetainerBreakdown> {
    let has_retainer = params.retainer_hours > 0.0 || params.retainer_minimum > 0.0;
    if !has_retainer {
        return None;
    }

    let calculated_cost = params.retainer_hours * params.retainer_hourly_rate;
    let minimum_applied = params.retainer_minimum > calculated_cost;
    Some(RetainerBreakdown {
        hours: params.retainer_hours,
        hourly_rate: params.retainer_hourly_rate,
        calculated_cost,
        minimum: params.retainer_minimum,
        minimum_applied,
        cost: calculated_cost.max(params.retainer_minimum),
    })
}
