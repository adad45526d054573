use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Text, Title};

use crate::geometry::primitives::{Point, Rect, Ring};
use crate::label::Label;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw the centroid in addition to the label point
    #[serde(default = "default_true")]
    pub centroid: bool,
    ///Draw a dashed line between the centroid and the label point when they differ
    #[serde(default = "default_true")]
    pub label_offset: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            centroid: true,
            label_offset: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub ring_fill: Color,
    pub centroid_fill: Color,
    pub label_fill: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::EARTH_TONES
    }
}

impl SvgTheme {
    pub const EARTH_TONES: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        ring_fill: Color(0xFF, 0xC8, 0x79),
        centroid_fill: Color(0x2D, 0x2D, 0x2D),
        label_fill: Color(0xCC, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> anyhow::Result<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(s.len() == 6 && s.is_ascii(), "invalid color: {s}");
        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// SVG coordinates are single precision
fn svg_coords(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn ring_data(ring: &Ring) -> Data {
    let mut vertices = ring.vertices().iter();
    let mut data = match vertices.next() {
        Some(first) => Data::new().move_to(svg_coords(*first)),
        None => return Data::new(),
    };
    for v in vertices {
        data = data.line_to(svg_coords(*v));
    }
    data.close()
}

pub fn point(p: Point, fill: Color, rad: f32) -> Circle {
    let (x, y) = svg_coords(p);
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad)
        .set("fill", format!("{fill}"))
}

/// Draws a ring together with its centroid and label point.
/// Coordinates are drawn as is: SVG's y-axis points down, so geographic rings appear mirrored vertically.
pub fn ring_to_svg(
    ring: &Ring,
    centroid: Option<Point>,
    label: Option<Label>,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let bbox = ring.bbox().unwrap_or(Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: 1.0,
        y_max: 1.0,
    });
    //give degenerate rings a non-zero view box
    let extent = f64::max(f64::max(bbox.width(), bbox.height()), f64::EPSILON);
    let vbox = bbox.scale(1.20);

    let stroke_width = (extent * 0.001 * theme.stroke_width_multiplier) as f32;
    let point_radius = (extent * 0.01) as f32;

    let text = Text::new(title.to_string())
        .set("x", vbox.x_min as f32)
        .set("y", (vbox.y_min + extent * 0.05) as f32)
        .set("font-size", (extent * 0.04) as f32)
        .set("font-family", "monospace")
        .set("font-weight", "500");

    let ring_path = Path::new()
        .set("fill", format!("{}", theme.ring_fill))
        .set("stroke", "black")
        .set("stroke-width", stroke_width)
        .set("fill-rule", "evenodd")
        .set("d", ring_data(ring));

    let mut group = Group::new()
        .set("id", "ring")
        .add(Title::new(format!("ring, {} vertices", ring.n_vertices())))
        .add(ring_path);

    if let (true, Some(c)) = (options.centroid, centroid) {
        group = group.add(point(c, theme.centroid_fill, point_radius).add(Title::new("centroid")));
    }

    if let Some(l) = label {
        if let (true, Some(c)) = (options.label_offset, centroid) {
            if !c.coincides_with(&l.point) {
                let offset = Path::new()
                    .set("fill", "none")
                    .set("stroke", format!("{}", theme.label_fill))
                    .set("stroke-width", stroke_width)
                    .set(
                        "stroke-dasharray",
                        format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
                    )
                    .set(
                        "d",
                        Data::new()
                            .move_to(svg_coords(c))
                            .line_to(svg_coords(l.point)),
                    );
                group = group.add(offset);
            }
        }
        group = group.add(
            point(l.point, theme.label_fill, point_radius)
                .add(Title::new(format!("label ({:?})", l.source))),
        );
    }

    Document::new()
        .set(
            "viewBox",
            (
                vbox.x_min as f32,
                (vbox.y_min - extent * 0.1) as f32,
                f64::max(vbox.width(), extent) as f32,
                (f64::max(vbox.height(), extent) + extent * 0.1) as f32,
            ),
        )
        .add(text)
        .add(group)
}
