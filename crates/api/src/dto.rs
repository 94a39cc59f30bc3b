#![forbid(unsafe_code)]

use serde::Serialize;
use ur_core::report::{AllocationReport, AllocationRow};
use ur_core::units::AreaUnit;

#[derive(Clone, Debug, Serialize)]
pub struct AllocationRowDto {
    pub owner_id: String,
    pub owner_name: String,
    pub share_percent_text: String,
    pub area_text: String,
}

impl From<AllocationRow> for AllocationRowDto {
    fn from(row: AllocationRow) -> Self {
        Self {
            owner_id: row.owner_id,
            owner_name: row.owner_name,
            share_percent_text: row.share_percent_text,
            area_text: row.area_text,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AllocationReportDto {
    pub plot_id: String,
    pub total_area_m2: f64,
    /// Wire tag of the display unit the rows were rendered in.
    pub unit: String,
    pub rows: Vec<AllocationRowDto>,
    pub unallocated_share_percent_text: String,
    pub unallocated_area_text: String,
}

impl AllocationReportDto {
    pub fn new(report: AllocationReport, unit: AreaUnit) -> Self {
        Self {
            plot_id: report.plot_id,
            total_area_m2: report.total_area_m2,
            unit: unit.tag().to_string(),
            rows: report.rows.into_iter().map(AllocationRowDto::from).collect(),
            unallocated_share_percent_text: report.unallocated_share_percent_text,
            unallocated_area_text: report.unallocated_area_text,
        }
    }
}
