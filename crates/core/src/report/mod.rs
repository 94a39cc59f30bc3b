#![forbid(unsafe_code)]

use crate::units::{AreaUnit, from_base_unit};

pub const UNALLOCATED_ID: &str = "unallocated";
pub const UNALLOCATED_NAME: &str = "Unallocated";

/// One ownership stake as stored on a plot. Duplicate owner ids are kept;
/// each entry is an independent row.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnerShare {
    pub owner_id: String,
    pub owner_name: String,
    pub share: f64,
}

/// Display-ready report row: the percent/area formatting is part of the
/// report contract, not a renderer concern.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationRow {
    pub owner_id: String,
    pub owner_name: String,
    pub share_percent_text: String,
    pub area_text: String,
}

/// Transient per-plot allocation view. Built fresh on each request, never
/// persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationReport {
    pub plot_id: String,
    pub total_area_m2: f64,
    pub rows: Vec<AllocationRow>,
    pub unallocated_share_percent_text: String,
    pub unallocated_area_text: String,
}

fn percent_text(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}

fn area_text(area_m2: f64, unit: AreaUnit) -> String {
    format!("{:.2} {}", from_base_unit(area_m2, unit), unit.label())
}

/// Aggregates a plot's ownership shares into a report: one row per owner in
/// input order, then a synthetic trailing "Unallocated" row when a free
/// share remains. Shares summing above 1 clamp the free share to zero
/// silently instead of erroring.
pub fn build_allocation_report(
    plot_id: impl Into<String>,
    total_area_m2: f64,
    owners: &[OwnerShare],
    unit: AreaUnit,
) -> AllocationReport {
    let total_owned: f64 = owners.iter().map(|o| o.share).sum();
    let free_share = (1.0 - total_owned).max(0.0);

    let mut rows = Vec::with_capacity(owners.len() + 1);
    for owner in owners {
        rows.push(AllocationRow {
            owner_id: owner.owner_id.clone(),
            owner_name: owner.owner_name.clone(),
            share_percent_text: percent_text(owner.share),
            area_text: area_text(owner.share * total_area_m2, unit),
        });
    }
    if free_share > 0.0 {
        rows.push(AllocationRow {
            owner_id: UNALLOCATED_ID.to_string(),
            owner_name: UNALLOCATED_NAME.to_string(),
            share_percent_text: percent_text(free_share),
            area_text: area_text(free_share * total_area_m2, unit),
        });
    }

    AllocationReport {
        plot_id: plot_id.into(),
        total_area_m2,
        rows,
        unallocated_share_percent_text: percent_text(free_share),
        unallocated_area_text: area_text(free_share * total_area_m2, unit),
    }
}

#[cfg(test)]
mod tests;
