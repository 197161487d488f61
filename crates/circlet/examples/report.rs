//! Print both task results.
//!
//! Run with `RUST_LOG=debug cargo run --example report` to see the trace.

fn main() {
    env_logger::init();

    log::info!("circlet report");

    let gap = circlet::rope_clearance();
    println!("rope clearance: {:.6} m ({:.1} cm)", gap, gap * 100.0);

    let expenses = circlet::pool_expenses();
    println!("concrete: {:.2}", expenses.concrete);
    println!("fence:    {:.2}", expenses.fence);
    println!("total:    {:.2}", expenses.total());
}
