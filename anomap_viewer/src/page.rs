// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone HTML page assembly.
//!
//! Wraps the rendered SVG in a minimal document: heading, description, chart,
//! and a hover tooltip. The inline script mirrors the typed tooltip model in
//! `anomap_charts`: same pointer offset, same three lines, same `data-year`
//! binding, so the static page behaves like the interactive model.

/// Inputs for one rendered page.
#[derive(Debug)]
pub struct Page<'a> {
    /// Heading text (`<h1 id="title">`).
    pub title: &'a str,
    /// Description text (`<p id="description">`).
    pub description: &'a str,
    /// The serialized chart (`<svg id="heatmap">`).
    pub svg: &'a str,
}

impl Page<'_> {
    /// Renders the full HTML document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(self.title)));
        out.push_str(PAGE_STYLE);
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!(
            "<h1 id=\"title\">{}</h1>\n",
            escape_html(self.title)
        ));
        out.push_str(&format!(
            "<p id=\"description\">{}</p>\n",
            escape_html(self.description)
        ));
        out.push_str(self.svg);
        out.push_str("<div id=\"tooltip\" style=\"display:none\"></div>\n");
        out.push_str(TOOLTIP_SCRIPT);
        out.push_str("</body>\n</html>\n");
        out
    }
}

const PAGE_STYLE: &str = "<style>\n\
    body { font-family: sans-serif; margin: 16px; }\n\
    #tooltip {\n\
      position: absolute;\n\
      background: rgba(0, 0, 0, 0.8);\n\
      color: #fff;\n\
      padding: 6px 8px;\n\
      font-size: 12px;\n\
      border-radius: 4px;\n\
      pointer-events: none;\n\
    }\n\
    </style>\n";

// Hover behavior over the cell data attributes. The month names, pointer
// offset, and line formats match the chart's tooltip model exactly.
const TOOLTIP_SCRIPT: &str = r##"<script>
(function () {
  var months = ["January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"];
  var tooltip = document.getElementById("tooltip");
  var description = document.getElementById("description");
  var base = parseFloat((description.textContent.match(/-?\d+(\.\d+)?/) || ["NaN"])[0]);
  document.querySelectorAll("#heatmap .cell").forEach(function (cell) {
    cell.addEventListener("mouseover", function (event) {
      var month = months[parseInt(cell.dataset.month, 10)];
      var year = cell.dataset.year;
      var temp = parseFloat(cell.dataset.temp);
      var variance = temp - base;
      tooltip.style.display = "block";
      tooltip.style.left = event.pageX + 10 + "px";
      tooltip.style.top = event.pageY + 10 + "px";
      tooltip.setAttribute("data-year", year);
      tooltip.innerHTML = month + " " + year + "<br>" +
        "Temperature: " + temp.toFixed(2) + "°C<br>" +
        "Variance: " + variance.toFixed(2) + "°C";
    });
    cell.addEventListener("mouseout", function () {
      tooltip.style.display = "none";
    });
  });
})();
</script>
"##;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_the_required_elements() {
        let page = Page {
            title: "Monthly Global Land-Surface Temperature",
            description: "Base temperature: 8.66\u{b0}C",
            svg: "<svg id=\"heatmap\"></svg>\n",
        };
        let html = page.render();
        assert!(html.contains(r#"<h1 id="title">Monthly Global Land-Surface Temperature</h1>"#));
        assert!(html.contains(r#"<p id="description">Base temperature: 8.66°C</p>"#));
        assert!(html.contains(r#"<svg id="heatmap">"#));
        assert!(html.contains(r#"<div id="tooltip" style="display:none">"#));
        assert!(html.contains("mouseover"));
    }

    #[test]
    fn title_and_description_are_escaped() {
        let page = Page {
            title: "a < b",
            description: "x & y",
            svg: "",
        };
        let html = page.render();
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("x &amp; y"));
    }
}
