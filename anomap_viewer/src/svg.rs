// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering of a mark scene.
//!
//! [`SvgScene`] consumes scene diffs and serializes the retained mark set as
//! a standalone `<svg>` element. Heatmap cells are bound by mark id so their
//! rects carry the `class="cell"` and `data-*` attributes the page's hover
//! script reads.

use std::collections::HashMap;

use anomap_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};
use anomap_charts::HeatmapScene;
use kurbo::Rect;
use peniko::Brush;

/// Data attributes attached to a cell's rect element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellAttrs {
    /// Zero-based month index.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Absolute temperature (base + variance).
    pub temp: f64,
}

/// A retained mark set rendered to SVG.
#[derive(Debug, Default)]
pub struct SvgScene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
    view_box: Option<Rect>,
    cell_attrs: HashMap<MarkId, CellAttrs>,
}

impl SvgScene {
    /// Sets an explicit view box; mark bounds can only grow it.
    pub fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Binds cell metadata from a built heatmap, keyed by cell mark id.
    pub fn bind_cells(&mut self, scene: &HeatmapScene) {
        self.cell_attrs.clear();
        let base = scene.cells_id_base();
        for cell in &scene.cells {
            self.cell_attrs.insert(
                MarkId::from_raw(base + cell.index as u64),
                CellAttrs {
                    month: cell.month_index(),
                    year: cell.year(),
                    temp: cell.temperature,
                },
            );
        }
    }

    /// Applies scene diffs to the retained mark set.
    pub fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, z_index, new } => {
                    self.marks.insert(*id, (*z_index, new.clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                } => {
                    self.marks.insert(*id, (*new_z_index, new.clone()));
                }
                MarkDiff::Exit { id } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    /// Serializes the retained marks as an `<svg id="heatmap">` element.
    pub fn to_svg_string(&self) -> String {
        let computed = self.computed_view_box();
        let view_box = match (self.view_box, computed) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        let view_box = view_box.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg id="heatmap" xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut ids: Vec<_> = self.marks.keys().copied().collect();
        ids.sort_by_key(|id| {
            let (z, _payload) = self.marks.get(id).expect("id from keys");
            (*z, id.0)
        });

        for id in ids {
            let (_z, payload) = self.marks.get(&id).expect("id from keys");
            match payload {
                MarkPayload::Rect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    if let Some(attrs) = self.cell_attrs.get(&id) {
                        out.push_str(&format!(
                            r#" class="cell" data-month="{}" data-year="{}" data-temp="{}""#,
                            attrs.month, attrs.year, attrs.temp
                        ));
                    }
                    write_paint_attr(&mut out, "fill", &r.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn computed_view_box(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for (_z, payload) in self.marks.values() {
            let b = match payload {
                MarkPayload::Text(t) => Some(estimate_text_bounds_anchored(
                    t.pos.x,
                    t.pos.y,
                    t.font_size,
                    t.anchor,
                    t.baseline,
                    &t.text,
                )),
                _ => payload.bounds(),
            }?;
            rect = Some(match rect {
                None => b,
                Some(r) => r.union(b),
            });
        }

        rect.map(|r| {
            // Small padding so edge labels don't clip.
            let pad = 10.0;
            Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
        })
    }
}

fn estimate_text_bounds_anchored(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width. Only used for
    // view-box computation, never for layout.
    let glyph_w = 0.6 * font_size;
    let width = glyph_w * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_midline = match baseline {
        TextBaseline::Middle => y,
        TextBaseline::Alphabetic => y - 0.3 * font_size,
        TextBaseline::Hanging => y + 0.3 * font_size,
        TextBaseline::Ideographic => y - 0.2 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y_midline - half_height, x1, y_midline + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (value, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use anomap_charts::{Dataset, HeatmapSpec, Observation};
    use anomap_core::Scene;

    use super::*;

    fn small_dataset() -> Dataset {
        Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                Observation {
                    year: 1900,
                    month: 1,
                    variance: -0.5,
                },
                Observation {
                    year: 1900,
                    month: 2,
                    variance: 0.25,
                },
            ],
        }
    }

    #[test]
    fn cells_carry_class_and_data_attributes() {
        let heatmap = HeatmapSpec::default().build(&small_dataset());
        let mut scene = Scene::new();
        let diffs = scene.tick(heatmap.all_marks());

        let mut svg = SvgScene::default();
        svg.set_view_box(heatmap.layout.view);
        svg.bind_cells(&heatmap);
        svg.apply_diffs(&diffs);
        let out = svg.to_svg_string();

        assert!(out.starts_with(r#"<svg id="heatmap""#));
        assert_eq!(out.matches(r#"class="cell""#).count(), 2);
        assert!(out.contains(r#"data-month="0" data-year="1900" data-temp="7.5""#));
        assert!(out.contains(r#"data-month="1" data-year="1900" data-temp="8.25""#));
    }

    #[test]
    fn guide_rects_are_not_marked_as_cells() {
        let heatmap = HeatmapSpec::default().build(&small_dataset());
        let mut scene = Scene::new();
        let diffs = scene.tick(heatmap.all_marks());

        let mut svg = SvgScene::default();
        svg.bind_cells(&heatmap);
        svg.apply_diffs(&diffs);
        let out = svg.to_svg_string();

        // Legend swatches are rects too; only observation cells get the class.
        let rect_count = out.matches("<rect ").count();
        assert!(rect_count > 2);
        assert_eq!(out.matches(r#"class="cell""#).count(), 2);
    }

    #[test]
    fn exits_remove_marks_from_the_output() {
        let heatmap = HeatmapSpec::default().build(&small_dataset());
        let mut scene = Scene::new();
        let mut svg = SvgScene::default();
        svg.apply_diffs(&scene.tick(heatmap.all_marks()));
        assert!(svg.to_svg_string().contains("<rect "));

        svg.apply_diffs(&scene.tick(Vec::new()));
        let out = svg.to_svg_string();
        assert!(!out.contains("<rect "));
        assert!(!out.contains("<text "));
    }

    #[test]
    fn text_is_xml_escaped() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
