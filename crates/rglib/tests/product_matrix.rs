//! Product classifier matrix: expected node counts and support part numbers.

use rglib::{expected_nodes, support_part_number};

// ---------------------------------------------------------------------------
// expected_nodes
// ---------------------------------------------------------------------------

#[test]
fn expected_nodes_scaled_products() {
    assert_eq!(expected_nodes("S6-Pro", 2500), 3);
    assert_eq!(expected_nodes("rXg A6", 0), 1);
    assert_eq!(expected_nodes("rXg V4", 1999), 2);
    assert_eq!(expected_nodes("rXg V24", 24000), 25);
}

#[test]
fn expected_nodes_single_node_products() {
    assert_eq!(expected_nodes("Basic", 2500), 1);
    assert_eq!(expected_nodes("rXg S4", 9000), 1);
    assert_eq!(expected_nodes("rXg RS Series", 9000), 1);
    // lowercase v does not count
    assert_eq!(expected_nodes("rxg v8", 9000), 1);
}

// ---------------------------------------------------------------------------
// support_part_number
// ---------------------------------------------------------------------------

#[test]
fn support_part_number_demo_wins() {
    assert_eq!(support_part_number("XYZ Demo A4"), "");
    assert_eq!(support_part_number("Demo V Series"), "");
}

#[test]
fn support_part_number_hardware_precedence() {
    assert_eq!(support_part_number("rXg 2CC4 ECO"), "RXG 2CC4 ECOSA");
    assert_eq!(support_part_number("rXg CC4"), "RXG CC4 EOSA");
    assert_eq!(support_part_number("rXg 2A4"), "RXG 2A4 ECOSA");
    assert_eq!(support_part_number("rXg RS6"), "RXG RS6 EOSA");
    // "RS4" contains "S4" but RS4 is listed first
    assert_eq!(support_part_number("rXg RS4"), "RXG RS4 EOSA");
    // CC4 wins over the V-series list
    assert_eq!(support_part_number("V8 with CC4"), "RXG CC4 EOSA");
}

#[test]
fn support_part_number_virtual_precedence() {
    assert_eq!(support_part_number("rXg V24"), "RXG V24 SWOSA");
    assert_eq!(support_part_number("rXg V8"), "RXG V8 SWOSA");
    assert_eq!(support_part_number("rXg V4"), "RXG V4 SWOSA");
}

#[test]
fn support_part_number_series() {
    assert_eq!(support_part_number("rXg V Series"), "RXG VS SWOSA");
    assert_eq!(support_part_number("rXg A Series"), "RXG A SWOSA");
    assert_eq!(support_part_number("rXg S Series"), "RXG S SWOSA");
    assert_eq!(support_part_number("rXg CC Series"), "RXG CC4 SWOSA");
    assert_eq!(support_part_number("rXg X Series"), "");
}
