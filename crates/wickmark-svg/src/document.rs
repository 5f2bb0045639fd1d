//! SVG document templates.
//!
//! Templates are written for readability; every document goes through
//! [`compact`](crate::compact) before it leaves the crate.

use std::fmt::Write;

use wickmark_layout::{CandleShape, Layout, MarkerShape, Shape};
use wickmark_types::{ChartConfig, SvgVariant};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;
const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Builds the uncompacted document for a layout.
pub(crate) fn document(layout: &Layout, config: &ChartConfig) -> String {
    let mut out = String::new();
    header(&mut out, config);
    background(&mut out, config);
    for geometry in layout {
        match &geometry.shape {
            Shape::Marker(marker) => marker_fragment(&mut out, marker, &geometry.color),
            Shape::Candle(candle) => candle_fragment(&mut out, candle, &geometry.color),
        }
    }
    out.push_str("</svg>");
    out
}

fn header(out: &mut String, config: &ChartConfig) {
    let (width, height) = (config.width, config.height);
    match config.variant {
        SvgVariant::Standalone => {
            out.push_str(XML_DECLARATION);
            out.push('\n');
            out.push_str(DOCTYPE);
            out.push('\n');
            let _ = write!(
                out,
                r#"<svg
  version="1.1"
  xmlns="{SVG_NS}"
  xmlns:xlink="{XLINK_NS}"
  x="0px" y="0px" width="{width}px" height="{height}px"
  >
"#
            );
        }
        SvgVariant::Embedded => {
            let _ = write!(
                out,
                r#"<svg
  version="1.1"
  xmlns="{SVG_NS}"
  style="width: {width}px; height: {height}px; top: 0px; left: -0.5px;"
  >
"#
            );
        }
    }
}

fn background(out: &mut String, config: &ChartConfig) {
    let _ = write!(
        out,
        r#"    <rect
      y="0"
      x="0"
      width="{}"
      height="{}"
      fill="{}"
      stroke="{}"
      stroke-width="2"
      stroke-linejoin="round"
    />
"#,
        config.width, config.height, config.palette.background, config.palette.border
    );
}

fn marker_fragment(out: &mut String, marker: &MarkerShape, color: &str) {
    line(out, marker.x, marker.bottom, marker.top, color);
}

fn candle_fragment(out: &mut String, candle: &CandleShape, color: &str) {
    let h = candle.body_height();
    let w = candle.body_width;
    // Both variants close the body at `{w}.5,0.5`, never at `{w},0.5`.
    let _ = write!(
        out,
        r#"    <g transform="translate({},{})">
        <path
          d="M0.5,0.5 L0.5,{h}.5 L{w}.5,{h}.5 L{w}.5,0.5 L0.5,0.5 Z"
          fill="{color}"
          stroke="{color}"
          stroke-width="1"
          stroke-opacity="1"
        />
    </g>
"#,
        candle.left, candle.body_top
    );
    line(out, candle.wick_x, candle.body_top, candle.wick_top, color);
    line(out, candle.wick_x, candle.body_bottom, candle.wick_bottom, color);
}

/// Vertical one-pixel line from `from` to `to`, on the half-pixel grid.
fn line(out: &mut String, x: i64, from: i64, to: i64, color: &str) {
    let _ = write!(
        out,
        r#"    <path
      d="M{x}.5,{from}.5 L{x}.5,{to}.5"
      fill="none"
      stroke-width="1"
      stroke-opacity="1"
      stroke="{color}"
    />
"#
    );
}
