use super::*;
use crate::units::AreaUnit;

fn owner(id: &str, name: &str, share: f64) -> OwnerShare {
    OwnerShare {
        owner_id: id.to_string(),
        owner_name: name.to_string(),
        share,
    }
}

#[test]
fn partial_allocation_appends_unallocated_row() {
    let owners = [owner("s1", "Matej Mrkva", 0.5), owner("s2", "Tomas Kudla", 0.3)];
    let report = build_allocation_report("lp1", 1000.0, &owners, AreaUnit::SquareMeter);

    assert_eq!(report.plot_id, "lp1");
    assert_eq!(report.total_area_m2, 1000.0);
    assert_eq!(report.rows.len(), 3);

    assert_eq!(report.rows[0].owner_name, "Matej Mrkva");
    assert_eq!(report.rows[0].share_percent_text, "50.00%");
    assert_eq!(report.rows[0].area_text, "500.00 m²");

    assert_eq!(report.rows[1].share_percent_text, "30.00%");
    assert_eq!(report.rows[1].area_text, "300.00 m²");

    let unallocated = &report.rows[2];
    assert_eq!(unallocated.owner_id, UNALLOCATED_ID);
    assert_eq!(unallocated.owner_name, UNALLOCATED_NAME);
    assert_eq!(unallocated.share_percent_text, "20.00%");
    assert_eq!(unallocated.area_text, "200.00 m²");

    assert_eq!(report.unallocated_share_percent_text, "20.00%");
    assert_eq!(report.unallocated_area_text, "200.00 m²");
}

#[test]
fn full_allocation_has_no_unallocated_row() {
    let owners = [owner("s1", "A", 0.25), owner("s2", "B", 0.75)];
    let report = build_allocation_report("lp1", 400.0, &owners, AreaUnit::SquareMeter);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.unallocated_share_percent_text, "0.00%");
    assert_eq!(report.unallocated_area_text, "0.00 m²");
}

#[test]
fn over_allocation_clamps_free_share_to_zero() {
    // Documented clamp behavior: shares summing above 1 are not an error and
    // produce no unallocated row.
    let owners = [owner("s1", "A", 0.7), owner("s2", "B", 0.5)];
    let report = build_allocation_report("lp1", 1000.0, &owners, AreaUnit::SquareMeter);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].share_percent_text, "70.00%");
    assert_eq!(report.rows[1].share_percent_text, "50.00%");
    assert_eq!(report.unallocated_share_percent_text, "0.00%");
    assert_eq!(report.unallocated_area_text, "0.00 m²");
}

#[test]
fn empty_owner_list_is_fully_unallocated() {
    let report = build_allocation_report("lp1", 1000.0, &[], AreaUnit::SquareMeter);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].owner_id, UNALLOCATED_ID);
    assert_eq!(report.rows[0].share_percent_text, "100.00%");
    assert_eq!(report.rows[0].area_text, "1000.00 m²");
}

#[test]
fn areas_render_in_the_requested_display_unit() {
    let owners = [owner("s1", "A", 0.5)];
    let report = build_allocation_report("lp1", 10_000.0, &owners, AreaUnit::Hectare);

    assert_eq!(report.rows[0].area_text, "0.50 ha");
    assert_eq!(report.rows[1].area_text, "0.50 ha");
    assert_eq!(report.unallocated_area_text, "0.50 ha");

    let in_ares = build_allocation_report("lp1", 10_000.0, &owners, AreaUnit::Are);
    assert_eq!(in_ares.rows[0].area_text, "50.00 a");
}

#[test]
fn duplicate_owner_ids_stay_independent_rows() {
    let owners = [owner("s1", "A", 0.25), owner("s1", "A", 0.25)];
    let report = build_allocation_report("lp1", 800.0, &owners, AreaUnit::SquareMeter);

    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[0].area_text, "200.00 m²");
    assert_eq!(report.rows[1].area_text, "200.00 m²");
    assert_eq!(report.rows[2].share_percent_text, "50.00%");
}
