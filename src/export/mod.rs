//! Whiteboard export to SVG, PNG and PDF.
//!
//! The elements are drawn with the same per-kind rules as the screen
//! ([`renderer::shape_commands`]) into an SVG document. PNG rasterises that
//! SVG with resvg/tiny-skia; PDF embeds the PNG into a single page.
//! Selection and hover decorations are never exported.

use std::fmt::Write;

use egui::{Color32, Pos2, Rect, Vec2};
use image::ImageEncoder;

use crate::element::{to_hex, Element};
use crate::error::{ExportError, ExportResult};
use crate::renderer::{self, DrawCommand, BACKGROUND_COLOR, DEFAULT_GRID_SPACING};

/// Margin around the drawing in world units.
pub const EXPORT_MARGIN: f32 = 20.0;
/// Exported area of an empty whiteboard.
pub const EMPTY_EXPORT_SIZE: Vec2 = Vec2::new(800.0, 600.0);
/// Resolution the PDF page size is derived from.
const PDF_DPI: f32 = 96.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Png,
    Svg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Png, ExportFormat::Svg];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF Document",
            ExportFormat::Png => "PNG Image",
            ExportFormat::Svg => "SVG Vector",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Best for printing",
            ExportFormat::Png => "High quality raster image",
            ExportFormat::Svg => "Scalable vector graphics",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Png => "image/png",
            ExportFormat::Svg => "image/svg+xml",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportQuality {
    Low,
    Medium,
    #[default]
    High,
}

impl ExportQuality {
    pub const ALL: [ExportQuality; 3] = [ExportQuality::Low, ExportQuality::Medium, ExportQuality::High];

    pub fn label(&self) -> &'static str {
        match self {
            ExportQuality::Low => "Low (Faster)",
            ExportQuality::Medium => "Medium",
            ExportQuality::High => "High (Best quality)",
        }
    }

    /// Raster pixels per world unit.
    pub fn scale(&self) -> f32 {
        match self {
            ExportQuality::Low => 1.0,
            ExportQuality::Medium => 2.0,
            ExportQuality::High => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub quality: ExportQuality,
    pub include_background: bool,
    pub include_grid: bool,
    /// World units between grid lines, as on screen.
    pub grid_spacing: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            quality: ExportQuality::default(),
            include_background: true,
            include_grid: false,
            grid_spacing: DEFAULT_GRID_SPACING,
        }
    }
}

/// World-space area covered by an export: every element plus a margin.
pub fn export_area(elements: &[Element]) -> Rect {
    elements
        .iter()
        .filter_map(|element| {
            element
                .bounds()
                .or_else(|| crate::geometry::bounding_box(element.points()))
        })
        .reduce(|a, b| a.union(b))
        .map(|area| area.expand(EXPORT_MARGIN))
        .unwrap_or_else(|| Rect::from_min_size(Pos2::ZERO, EMPTY_EXPORT_SIZE))
}

/// File name for an export of the whiteboard titled `title`.
pub fn file_name(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let stem = stem.trim_matches('-');
    let stem = if stem.is_empty() { "whiteboard" } else { stem };
    format!("{stem}.{}", format.extension())
}

pub fn export(elements: &[Element], options: &ExportOptions) -> ExportResult<Vec<u8>> {
    log::info!(
        "exporting {} element(s) as {} ({:?})",
        elements.len(),
        options.format.extension(),
        options.quality
    );
    match options.format {
        ExportFormat::Svg => Ok(render_to_svg(elements, options).into_bytes()),
        ExportFormat::Png => render_to_png(elements, options),
        ExportFormat::Pdf => render_to_pdf(elements, options),
    }
}

/// Pixel size of the raster output.
fn output_dimensions(area: Rect, options: &ExportOptions) -> (u32, u32) {
    let scale = options.quality.scale();
    let width = (area.width() * scale).round().max(1.0) as u32;
    let height = (area.height() * scale).round().max(1.0) as u32;
    (width, height)
}

pub fn render_to_svg(elements: &[Element], options: &ExportOptions) -> String {
    let area = export_area(elements);
    let (width, height) = output_dimensions(area, options);

    let mut commands = Vec::new();
    if options.include_grid {
        renderer::grid_commands(area, options.grid_spacing, &mut commands);
    }
    for element in elements {
        renderer::shape_commands(element.shape(), element.style(), &mut commands);
    }

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{} {} {} {}\">",
        area.min.x,
        area.min.y,
        area.width(),
        area.height(),
    );
    if options.include_background {
        let _ = write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            area.min.x,
            area.min.y,
            area.width(),
            area.height(),
            paint("fill", BACKGROUND_COLOR),
        );
    }
    for command in &commands {
        write_command(&mut svg, command);
    }
    svg.push_str("</svg>");
    svg
}

fn write_command(svg: &mut String, command: &DrawCommand) {
    match command {
        DrawCommand::Clear(_) => {}
        DrawCommand::Polyline { points, stroke } => {
            let points: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            let _ = write!(
                svg,
                "<polyline points=\"{}\" fill=\"none\"{}/>",
                points.join(" "),
                stroke_attrs(stroke.width, stroke.color),
            );
        }
        DrawCommand::Rect {
            rect,
            fill,
            stroke,
            dashed,
        } => {
            let _ = write!(
                svg,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}{}{}/>",
                rect.min.x,
                rect.min.y,
                rect.width(),
                rect.height(),
                fill_attr(*fill),
                stroke_attrs(stroke.width, stroke.color),
                if *dashed { " stroke-dasharray=\"5,5\"" } else { "" },
            );
        }
        DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}{}/>",
                center.x,
                center.y,
                radius,
                fill_attr(*fill),
                stroke_attrs(stroke.width, stroke.color),
            );
        }
        DrawCommand::Segment { from, to, stroke } => {
            let _ = write!(
                svg,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(stroke.width, stroke.color),
            );
        }
        DrawCommand::Text {
            pos,
            text,
            size,
            color,
        } => {
            let _ = write!(
                svg,
                "<text x=\"{}\" y=\"{}\" font-family=\"Arial, sans-serif\" font-size=\"{}\"{}>{}</text>",
                pos.x,
                pos.y,
                size,
                paint("fill", *color),
                escape_xml(text),
            );
        }
    }
}

/// ` name="#rrggbb"`, plus an opacity attribute for translucent colors.
fn paint(name: &str, color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let hex = to_hex(Color32::from_rgb(r, g, b));
    if a == u8::MAX {
        format!(" {name}=\"{hex}\"")
    } else {
        format!(" {name}=\"{hex}\" {name}-opacity=\"{:.3}\"", f32::from(a) / 255.0)
    }
}

fn fill_attr(fill: Option<Color32>) -> String {
    match fill {
        Some(color) => paint("fill", color),
        None => " fill=\"none\"".to_owned(),
    }
}

fn stroke_attrs(width: f32, color: Color32) -> String {
    format!(
        "{} stroke-width=\"{width}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"",
        paint("stroke", color)
    )
}

pub fn render_to_png(elements: &[Element], options: &ExportOptions) -> ExportResult<Vec<u8>> {
    let svg = render_to_svg(elements, options);
    let pixmap = rasterize_svg(&svg)?;

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let mut png = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png).write_image(
        &rgba,
        pixmap.width(),
        pixmap.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}

/// A single page sized like the drawing at 96 DPI with the PNG on it.
pub fn render_to_pdf(elements: &[Element], options: &ExportOptions) -> ExportResult<Vec<u8>> {
    let png = render_to_png(elements, options)?;
    let area = export_area(elements);
    let page_width = printpdf::Mm(area.width() / PDF_DPI * 25.4);
    let page_height = printpdf::Mm(area.height() / PDF_DPI * 25.4);

    let (doc, page, layer) = printpdf::PdfDocument::new("Whiteboard", page_width, page_height, "Layer 1");
    let layer = doc.get_page(page).get_layer(layer);

    let decoded = printpdf::image_crate::load_from_memory(&png)
        .map_err(|e| ExportError::Pdf(format!("failed to decode PNG: {e}")))?;
    let transform = printpdf::ImageTransform {
        translate_x: Some(printpdf::Mm(0.0)),
        translate_y: Some(printpdf::Mm(0.0)),
        dpi: Some(PDF_DPI * options.quality.scale()),
        ..Default::default()
    };
    printpdf::Image::from_dynamic_image(&decoded).add_to_layer(layer, transform);

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

fn rasterize_svg(svg: &str) -> ExportResult<tiny_skia::Pixmap> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::Svg(e.to_string()))?;

    let width = (tree.size().width().ceil() as u32).max(1);
    let height = (tree.size().height().ceil() as u32).max(1);
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Pixmap { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
