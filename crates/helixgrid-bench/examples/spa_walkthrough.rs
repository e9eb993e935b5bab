//! Shortest-path-add walkthrough.
//!
//! Demonstrates: build planner → anchor → hover preview → press → repeat,
//! then a paste preview next to the resulting bundle.
//!
//! Run with `RUST_LOG=debug` to see the planner and session log lines.

use helixgrid_bench::random_occupancy;
use helixgrid_core::{HelixId, LatticeCoord, LatticeKind};
use helixgrid_route::{
    preview_paste, ClipboardEntry, HelixIdPool, LatticeExtent, PathPlanner, PlannerConfig,
    SpaAction, SpaSession,
};
use log::info;

fn main() {
    env_logger::init();
    println!("=== helixgrid SPA walkthrough ===\n");

    let extent = LatticeExtent::from_size(30, 32);
    let config = PlannerConfig {
        extent: Some(extent),
        ..PlannerConfig::default()
    };
    let planner = PathPlanner::for_kind(LatticeKind::Honeycomb, 1.125, config).unwrap();
    let mut occupancy = random_occupancy(planner.lattice(), extent, 0.05, 42);
    let mut pool = HelixIdPool::from_used(occupancy.iter().map(|(_, &id)| id));
    println!("Part: 30x32 honeycomb, {} helices already placed", occupancy.len());

    let mut session = SpaSession::new();
    let waypoints = [
        LatticeCoord::new(2, 2),
        LatticeCoord::new(2, 14),
        LatticeCoord::new(12, 14),
        LatticeCoord::new(12, 2),
        LatticeCoord::new(29, 40),
    ];

    for (step, &target) in waypoints.iter().enumerate() {
        let hints = session
            .hover(&planner, target, &occupancy, &pool)
            .unwrap();
        if !hints.is_empty() {
            let ids: Vec<String> = hints.iter().map(|h| h.id.to_string()).collect();
            println!("  hover {target}: would create [{}]", ids.join(", "));
        }

        let action = session
            .press(&planner, target, true, &occupancy, &mut pool)
            .unwrap();
        for h in action.helices() {
            occupancy.insert(h.helix.coord, h.id).unwrap();
        }
        match action {
            SpaAction::Started { anchor, created } => println!(
                "step {step}: anchored at {anchor}{}",
                if created.is_some() { ", created its helix" } else { "" }
            ),
            SpaAction::Extended { helices, anchor } => println!(
                "step {step}: created {} helices, anchor now {anchor}",
                helices.len()
            ),
            SpaAction::Aborted { created } => println!(
                "step {step}: no route to {target}, SPA ended ({} created)",
                usize::from(created.is_some())
            ),
            SpaAction::Cleared => println!("step {step}: cleared"),
        }
    }

    let clipboard: Vec<ClipboardEntry> = occupancy
        .iter()
        .filter(|(coord, _)| (2..=12).contains(&coord.row) && (2..=14).contains(&coord.column))
        .map(|(coord, &id)| ClipboardEntry { id, coord })
        .collect();
    info!("clipboard holds {} helices", clipboard.len());

    let base: HelixId = pool.paste_base().unwrap();
    let hovered = LatticeCoord::new(16, 18);
    match preview_paste(planner.lattice(), &clipboard, hovered, &occupancy, base) {
        Some(preview) => println!(
            "\nPaste at {hovered}: {} helices from id {base}, shift ({:.3}, {:.3}) nm",
            preview.hints.len(),
            preview.translation.x,
            preview.translation.y
        ),
        None => println!("\nPaste at {hovered}: blocked"),
    }
}
