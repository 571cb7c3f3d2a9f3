//! Riverine trace walkthrough — builds a small catchment and traces it,
//! first freely and then against a weir.
//!
//! Usage:
//! ```text
//! cargo run --example trace_demo
//! RUST_LOG=riverine=debug cargo run --example trace_demo   # show trace decisions
//! ```

use riverine::geometry::Polyline;
use riverine::math::Point2;
use riverine::network::{NetworkStore, SegmentData};
use riverine::operations::{FlowDirection, TraceReach, TraceReachWithBarriers};
use riverine::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for riverine.
    // Override with RUST_LOG env var (e.g. RUST_LOG=riverine=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trace_demo=info".parse().unwrap_or_default())
        .add_directive("riverine=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // A small catchment in metre coordinates, digitized downstream: two
    // headwaters joining at (80, 50), a mainstem, and an outflow reach.
    let mut store = NetworkStore::new();
    let headwater_a = store.add_segment(SegmentData::new(Polyline::from_coords([
        (0.0, 80.0),
        (40.0, 60.0),
        (80.0, 50.0),
    ])));
    let headwater_b = store.add_segment(SegmentData::new(Polyline::from_coords([
        (0.0, 20.0),
        (40.0, 35.0),
        (80.0, 50.0),
    ])));
    let mainstem = store.add_segment(SegmentData::new(Polyline::from_coords([
        (80.0, 50.0),
        (110.0, 50.0),
        (140.0, 50.0),
        (170.0, 47.0),
        (200.0, 45.0),
    ])));
    let outflow = store.add_segment(SegmentData::new(Polyline::from_coords([
        (200.0, 45.0),
        (260.0, 40.0),
    ])));
    // A ditch elsewhere in the survey, connected to nothing.
    store.add_segment(SegmentData::new(Polyline::from_coords([
        (300.0, 300.0),
        (340.0, 300.0),
    ])));

    println!("network: {} segments", store.len());

    // Free trace from the left headwater to the sea.
    let reach = TraceReach::new(headwater_a, FlowDirection::Downstream).execute(&store)?;
    println!(
        "downstream of headwater A: {} segments, {:.1} m",
        reach.segments.len(),
        reach.total_length
    );

    // Everything upstream of the outflow gathers both headwaters.
    let reach = TraceReach::new(outflow, FlowDirection::Upstream).execute(&store)?;
    println!(
        "upstream of the outflow:   {} segments, {:.1} m  (includes headwater B: {})",
        reach.segments.len(),
        reach.total_length,
        reach.contains(headwater_b)
    );

    // Now drop a weir just off the mainstem near (140, 50). The barred
    // trace clips the mainstem course in place, so work on a copy of the
    // network to keep the surveyed geometry.
    let weir = Point2::new(141.0, 50.3);
    let mut barred = store.clone();
    let reach = TraceReachWithBarriers::new(headwater_a, FlowDirection::Downstream, vec![weir])
        .execute(&mut barred)?;
    println!(
        "same trace against a weir: {} segments, {:.1} m  (reaches outflow: {})",
        reach.segments.len(),
        reach.total_length,
        reach.contains(outflow)
    );

    for (id, course) in reach.courses(&barred)? {
        let tag = if id == mainstem { " (clipped at the weir)" } else { "" };
        println!(
            "  course {:?}: {} vertices, {:.1} m{}",
            id,
            course.vertices.len(),
            course.length(),
            tag
        );
    }

    Ok(())
}
