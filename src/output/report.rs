//! Plain-text rendering of a printer snapshot

use crate::printer::PrinterStatusSnapshot;
use std::fmt::Write;

/// Renders a snapshot as labeled lines, one field per line
pub fn format_report(snapshot: &PrinterStatusSnapshot) -> String {
    let [tray1, tray2, default_tray] = snapshot.tray_levels();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Model: {}", snapshot.model());
    let _ = writeln!(out, "Status: {}", snapshot.status_line());
    let _ = writeln!(out, "Tray 1: {}", tray1);
    let _ = writeln!(out, "Tray 2: {}", tray2);
    let _ = writeln!(out, "Default tray: {}", default_tray);
    let _ = writeln!(out, "Toner: {}%", snapshot.toner_pct());
    let _ = writeln!(out, "Roller kit: {}%", snapshot.roller_kit_pct());
    let _ = writeln!(out, "Maintenance kit: {}%", snapshot.maintenance_kit_pct());
    let _ = writeln!(out, "Imaging unit: {}%", snapshot.imaging_unit_pct());
    out
}

/// Prints a snapshot report to stdout under a header naming the printer
pub fn print_report(name: &str, snapshot: &PrinterStatusSnapshot) {
    println!("=== {} ({}) ===", name, snapshot.address());
    println!(
        "Captured: {}",
        snapshot.captured_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    print!("{}", format_report(snapshot));
}
