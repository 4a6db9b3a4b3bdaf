// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fetches the monthly global land-surface temperature dataset once and
//! writes the heatmap as a standalone HTML page.

mod loader;
mod page;
mod svg;
mod view;

use anomap_charts::HeatmapSpec;
use anomap_core::Scene;
use anyhow::Context;

const OUTPUT_PATH: &str = "anomap.html";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut view = view::ViewModel::new();
    view.apply_load(loader::fetch_dataset(loader::DATA_URL));

    let spec = HeatmapSpec::default();
    let heatmap = view.scene(&spec);

    let mut scene = Scene::new();
    let diffs = scene.tick(heatmap.all_marks());

    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(heatmap.layout.view);
    svg_scene.bind_cells(&heatmap);
    svg_scene.apply_diffs(&diffs);

    let html = page::Page {
        title: view.title(),
        description: &view.description(),
        svg: &svg_scene.to_svg_string(),
    }
    .render();

    std::fs::write(OUTPUT_PATH, html).with_context(|| format!("writing {OUTPUT_PATH}"))?;
    tracing::info!(
        path = OUTPUT_PATH,
        cells = heatmap.cells.len(),
        "wrote heatmap page"
    );
    println!("wrote {OUTPUT_PATH}");
    Ok(())
}
