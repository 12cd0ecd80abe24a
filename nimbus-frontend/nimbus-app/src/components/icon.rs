use leptos::prelude::*;
use leptos::svg;

/// Draws a single `icondata` glyph inline.
///
/// All icons on these pages are decorative and sit next to a text label, so
/// the svg is always hidden from assistive tech.
#[component]
pub fn Icon(
    icon: icondata::Icon,
    #[prop(into, optional)] width: Option<String>,
    #[prop(into, optional)] height: Option<String>,
) -> impl IntoView {
    // Wrap the icon data in a <g> to ensure InertElement always gets a single
    // top level element.
    let mut data = String::with_capacity(icon.data.len() + 7);
    data.push_str("<g>");
    data.push_str(icon.data);
    data.push_str("</g>");

    svg::svg()
        .style(icon.style.map(str::to_string))
        .attr("x", icon.x)
        .attr("y", icon.y)
        .attr("width", width.unwrap_or_else(|| "1em".to_string()))
        .attr("height", height.unwrap_or_else(|| "1em".to_string()))
        .attr("viewBox", icon.view_box)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke", icon.stroke)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("role", "graphics-symbol")
        .attr("aria-hidden", "true")
        .child(svg::InertElement::new(data))
}
