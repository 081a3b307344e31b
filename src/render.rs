//! SVG rendering of the ray diagram.
//!
//! Maps the plain geometry of a [`Diagram`] to SVG elements: the interface,
//! the dashed normal, arrow-tipped rays, angle arcs with their labels and
//! captions for both media.

use std::fmt::Write;

use crate::diagram::{Arc, Diagram, Segment};
use crate::result::Refraction;

const INCIDENT_COLOR: &str = "#F472B6";
const REFLECTED_COLOR: &str = "#60A5FA";
const REFRACTED_COLOR: &str = "#34D399";
const SURFACE_COLOR: &str = "#374151";
const NORMAL_COLOR: &str = "#9CA3AF";
const CAPTION_COLOR: &str = "#cbd5e1";


fn line(svg: &mut String, segment: &Segment, color: &str, extra: &str) {
    let _ = writeln!(
        svg,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" {}/>"#,
        segment.start.x, segment.start.y, segment.end.x, segment.end.y, color, extra
    );
}

fn ray(svg: &mut String, segment: &Segment, color: &str) {
    line(
        svg,
        segment,
        color,
        r#"stroke-width="3" stroke-linecap="round" marker-end="url(#arrow)" "#,
    );
}

fn arc(svg: &mut String, arc: &Arc, color: &str, label: Option<f64>) {
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        arc.svg_path(),
        color
    );
    if let Some(angle) = label {
        let pos = arc.label_position();
        let _ = writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="12" fill="{}">{:.1}°</text>"#,
            pos.x, pos.y, color, angle
        );
    }
}

fn caption(svg: &mut String, x: f64, y: f64, text: &str) {
    let _ = writeln!(
        svg,
        r##"  <rect x="{:.2}" y="{:.2}" rx="8" ry="8" width="130" height="28" fill="#0f172a" opacity="0.8"/>"##,
        x, y
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="12" fill="{}">{}</text>"#,
        x + 6.0,
        y + 20.0,
        CAPTION_COLOR,
        text
    );
}

/// Renders the diagram as a standalone SVG document.
///
/// **Context**: The geometry is renderer agnostic; SVG is the format the
/// diagram was designed for, with the view box matching the canvas frame.
///
/// **How it Works**: Emits guide lines first, then the rays with an arrow
/// marker, then the arcs with the angles from `refraction` as labels.
/// The refracted ray and its arc are skipped under total internal reflection.
pub fn render_svg(diagram: &Diagram, refraction: &Refraction) -> String {
    let mut svg = String::new();
    let origin = diagram.origin;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
        diagram.width, diagram.height, diagram.width, diagram.height
    );
    svg.push_str(
        r##"  <defs>
    <marker id="arrow" viewBox="0 0 10 10" refX="8" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse">
      <path d="M 0 0 L 10 5 L 0 10 z" fill="#fff"/>
    </marker>
  </defs>
"##,
    );
    let _ = writeln!(
        svg,
        r##"  <rect width="{}" height="{}" fill="#020617"/>"##,
        diagram.width, diagram.height
    );

    line(&mut svg, &diagram.surface, SURFACE_COLOR, r#"stroke-width="2" "#);
    line(
        &mut svg,
        &diagram.normal,
        NORMAL_COLOR,
        r#"stroke-width="1" stroke-dasharray="4 4" "#,
    );

    ray(&mut svg, &diagram.incident, INCIDENT_COLOR);
    ray(&mut svg, &diagram.reflected, REFLECTED_COLOR);
    if let Some(refracted) = &diagram.refracted {
        ray(&mut svg, refracted, REFRACTED_COLOR);
    }

    arc(
        &mut svg,
        &diagram.incident_arc,
        INCIDENT_COLOR,
        Some(refraction.reflection_angle),
    );
    arc(&mut svg, &diagram.reflected_arc, REFLECTED_COLOR, None);
    if let Some(refracted_arc) = &diagram.refracted_arc {
        arc(
            &mut svg,
            refracted_arc,
            REFRACTED_COLOR,
            refraction.refracted_angle,
        );
    }

    caption(&mut svg, 12.0, 12.0, "Medium 1 (n₁)");
    caption(&mut svg, 12.0, origin.y - 40.0, "Interface");
    caption(&mut svg, 12.0, origin.y + 12.0, "Medium 2 (n₂)");
    if refraction.total_internal_reflection {
        caption(
            &mut svg,
            12.0,
            diagram.height - 40.0,
            "Total internal reflection",
        );
    }

    let _ = writeln!(
        svg,
        r##"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="#fff"/>"##,
        origin.x, origin.y
    );
    svg.push_str("</svg>\n");
    svg
}
