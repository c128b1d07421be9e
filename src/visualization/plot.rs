//! Static trajectory plot
//!
//! Renders every recorded trajectory, the final body positions and the
//! central body at the origin into a PNG of the configured image size.
//! Coordinates are divided by `scale`, so the axes are in display pixels.

use std::path::Path;

use anyhow::Result;
use log::info;
use plotters::prelude::*;

use crate::simulation::engine::{Simulation, SimulationRun};
use crate::simulation::states::Massive;

const CENTRAL_MARKER: i32 = 10;
const BODY_MARKER: i32 = 5;

/// Half-width of the square plot window, in pixels
///
/// 1.5 times the largest |coordinate| of the live bodies, or of the recorded
/// x samples when every body is gone.
pub fn plot_half_range(sim: &Simulation, run: &SimulationRun) -> f64 {
    let scale = sim.scale();
    let max_abs = if sim.bodies().is_empty() {
        run.trajectories
            .values()
            .flat_map(|t| t.xs())
            .map(f64::abs)
            .fold(0.0, f64::max)
    } else {
        sim.bodies()
            .iter()
            .map(|b| b.x().abs().max(b.y().abs()))
            .fold(0.0, f64::max)
    };

    let range = 1.5 * max_abs / scale;
    if range.is_finite() && range > 0.0 {
        range
    } else {
        1.0
    }
}

pub fn render_trajectories(sim: &Simulation, run: &SimulationRun, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let scale = sim.scale();
    let range = plot_half_range(sim, run);

    let root = BitMapBackend::new(path, sim.image_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Gravitational motion simulation", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-range..range, -range..range)?;

    chart
        .configure_mesh()
        .x_desc("Distance / scale")
        .y_desc("Distance / scale")
        .draw()?;

    let centre = sim.central_body().position();
    chart
        .draw_series(std::iter::once(Circle::new(
            (centre.x / scale, centre.y / scale),
            CENTRAL_MARKER,
            YELLOW.filled(),
        )))?
        .label("Central body")
        .legend(|(x, y)| Circle::new((x, y), BODY_MARKER, YELLOW.filled()));

    for (id, trajectory) in &run.trajectories {
        let color = Palette99::pick(id.index()).to_rgba();
        let points = trajectory.samples().iter().map(|p| (p.x / scale, p.y / scale));

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(1)))?
            .label(format!("Trajectory {}", id.index() + 1))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    for body in sim.bodies() {
        let color = Palette99::pick(body.id().index()).to_rgba();
        chart
            .draw_series(std::iter::once(Circle::new(
                (body.x() / scale, body.y() / scale),
                BODY_MARKER,
                color.filled(),
            )))?
            .label(format!("Object {}", body.id().index() + 1))
            .legend(move |(x, y)| Circle::new((x, y), BODY_MARKER, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("trajectory plot written to {}", path.display());
    Ok(())
}
