//! Chart rendering for sweep results
//!
//! Index sweeps render as a 2-D line chart, search sweeps as a 3-D surface
//! over the parameter grid. Charts are written as SVG; the chart kind is
//! chosen by the caller, never inferred from the data.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::sweep::{IndexSample, SearchSample};

/// 2-D line chart of index construction time against shard count.
pub fn index_chart(series: &[IndexSample], out: &Path) -> Result<()> {
    let root = SVGBackend::new(out, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_shards = series.iter().map(|s| s.shards).max().unwrap_or(1);
    let y_end = y_axis_end(series.iter().map(|s| s.seconds));

    let mut chart = ChartBuilder::on(&root)
        .caption("Index construction time", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..max_shards + 1, 0f64..y_end)?;

    chart
        .configure_mesh()
        .x_desc("Number of indexes")
        .y_desc("Time in seconds")
        .draw()?;

    let points: Vec<(u32, f64)> = series.iter().map(|s| (s.shards, s.seconds)).collect();
    chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|(x, y)| Circle::new((*x, *y), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// 3-D surface of query time over the (shard count, worker count) grid.
pub fn search_surface(series: &[SearchSample], out: &Path) -> Result<()> {
    let root = SVGBackend::new(out, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_shards = series.iter().map(|s| s.shards).max().unwrap_or(1);
    let max_workers = series.iter().map(|s| s.workers).max().unwrap_or(1);
    let y_end = y_axis_end(series.iter().map(|s| s.seconds));

    let heights: HashMap<(u32, u32), f64> = series
        .iter()
        .map(|s| ((s.shards, s.workers), s.seconds))
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Search time", ("sans-serif", 28).into_font())
        .margin(20)
        .build_cartesian_3d(
            0f64..max_shards as f64 + 1.0,
            0f64..y_end,
            0f64..max_workers as f64 + 1.0,
        )?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.6;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    chart.draw_series(
        SurfaceSeries::xoz(
            (1..=max_shards).map(f64::from),
            (1..=max_workers).map(f64::from),
            |x, z| {
                heights
                    .get(&(x as u32, z as u32))
                    .copied()
                    .unwrap_or(0.0)
            },
        )
        .style(BLUE.mix(0.4).filled()),
    )?;

    root.draw(&Text::new(
        "x: Number of indexes    z: Number of workers    y: Time in seconds",
        (20, 575),
        ("sans-serif", 16).into_font(),
    ))?;

    root.present()?;
    Ok(())
}

/// Axis extent with headroom; falls back to one second when every sample
/// timed out at zero so the range never degenerates.
fn y_axis_end(seconds: impl Iterator<Item = f64>) -> f64 {
    let max = seconds.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_index_chart_writes_labeled_svg() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("index.svg");
        let series = vec![
            IndexSample { shards: 1, seconds: 0.5 },
            IndexSample { shards: 2, seconds: 0.9 },
            IndexSample { shards: 3, seconds: 1.4 },
        ];

        index_chart(&series, &out).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Number of indexes"));
        assert!(svg.contains("Time in seconds"));
    }

    #[test]
    fn test_search_surface_writes_svg() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("search.svg");
        let series = vec![
            SearchSample { shards: 1, workers: 1, seconds: 0.8 },
            SearchSample { shards: 1, workers: 2, seconds: 0.6 },
            SearchSample { shards: 2, workers: 1, seconds: 1.1 },
            SearchSample { shards: 2, workers: 2, seconds: 0.7 },
        ];

        search_surface(&series, &out).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Number of workers"));
    }

    #[test]
    fn test_zero_timings_still_render() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("flat.svg");
        let series = vec![
            IndexSample { shards: 1, seconds: 0.0 },
            IndexSample { shards: 2, seconds: 0.0 },
        ];

        index_chart(&series, &out).unwrap();

        assert!(out.exists());
    }
}
