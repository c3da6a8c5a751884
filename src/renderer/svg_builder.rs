//! SVG builder — accumulates SVG elements and produces the final string.

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Helvetica', 'Arial', sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.2}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    /// Note disc. `class` lets a host stylesheet tell root notes apart.
    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, class: &str) {
        self.elements.push(format!(
            r#"<circle class="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            class, cx, cy, r, fill
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escape(content)
        ));
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgBuilder::new(10.0, 10.0);
        svg.text(0.0, 0.0, "<a&b>", 12.0, "normal", "black", "start");
        let out = svg.build();
        assert!(out.contains("&lt;a&amp;b&gt;"));
        assert!(out.ends_with("</svg>\n"));
    }
}
