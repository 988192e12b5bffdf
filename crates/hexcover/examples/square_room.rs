//! Place devices in a square room with a pillar and print the result.
//!
//! Usage:
//!   cargo run -p hexcover --example square_room -- [radius] [overlap]
//!
//! Defaults: radius 30, overlap 0.9. Prints one line per device and the
//! coverage report.

use hexcover::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let radius = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(30.0);
    let overlap = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.9);

    let job = PlacementInput {
        service_areas: vec![Polygon::rect(0.0, 0.0, 200.0, 200.0)],
        exclusions: vec![Polygon::rect(90.0, 90.0, 110.0, 110.0)],
        scale: Some(1.0),
        radius,
        power: None,
        params: PlacementCfg {
            overlap_factor: overlap,
            ..PlacementCfg::default()
        },
    };
    match place_devices(&job) {
        Ok(out) => {
            for d in &out.devices {
                println!("{}: ({:.1}, {:.1})", d.id, d.pos.x, d.pos.y);
            }
            let r = &out.report;
            println!(
                "devices={} theoretical_min={} coverage={:.2}% mode={} cap_reached={}",
                r.device_count, r.theoretical_min, r.coverage_pct, r.mode, r.cap_reached
            );
        }
        Err(e) => eprintln!("placement failed: {e}"),
    }
}
