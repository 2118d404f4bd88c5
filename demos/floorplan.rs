//! Terminal floor-plan navigation demo.
//!
//! Run: cargo run --bin floorplan
//!
//! Set `RUST_LOG=floornav_paths=debug` for search diagnostics.

use floornav_core::PlanError;
use floornav_demos::{format_route, office_plan, render_route};
use floornav_paths::Pathfinder;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlanError> {
    let plan = office_plan();
    let grid = plan.build_grid();
    let start = plan.start_coord()?;
    let end = plan.end_coord()?;

    println!("{grid}");
    println!();

    match Pathfinder::new().run(&grid, start, end, plan.constraint) {
        Some(route) => {
            println!("{} hops: {}", route.len() - 1, format_route(&route));
            println!();
            println!("{}", render_route(&grid, &route));
        }
        None => println!("no route from {start} to {end}"),
    }
    Ok(())
}
