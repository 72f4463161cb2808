//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use rough_sketch::{ArcClosure, Drawing, DrawingKind, Instruction, Point, StyleConfig};

/// Output format for generated drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
    Png,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "json" => Some(Self::Json),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Drawing surface size and background.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Background colour; no background rect when absent.
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 200.0, height: 200.0, background: None }
    }
}

impl Canvas {
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0) {
            bail!("canvas must have a positive size, got {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

/// A drawing plus the paint it is rendered with.
#[derive(Debug, Clone)]
pub struct Layer {
    pub drawing: Drawing,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

/// Flags shared by `draw` and `recipe`.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// `None` or `-` means stdout.
    pub output: Option<String>,
    pub canvas: Canvas,
    pub style: StyleConfig,
    pub seed: Option<u64>,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            output: None,
            canvas: Canvas::default(),
            style: StyleConfig::default(),
            seed: None,
            stroke: "black".to_string(),
            stroke_width: 1.0,
            fill: "#999999".to_string(),
        }
    }
}

impl OutputOptions {
    /// Consume the flag at `args[*i]` (and its value) if it is one of ours.
    ///
    /// Returns `Ok(false)` for flags this struct does not know, leaving `i`
    /// untouched so the caller can handle them.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> Result<bool> {
        let flag = args[*i].as_str();
        match flag {
            "-f" | "--format" => {
                let value = flag_value(args, i)?;
                self.format = OutputFormat::from_name(value)
                    .ok_or_else(|| anyhow!("unknown format `{}`, use svg, json or png", value))?;
            }
            "--json" => self.format = OutputFormat::Json,
            "-o" | "--output" => self.output = Some(flag_value(args, i)?.to_string()),
            "--width" => self.canvas.width = parse_number(flag, flag_value(args, i)?)?,
            "--height" => self.canvas.height = parse_number(flag, flag_value(args, i)?)?,
            "--background" => self.canvas.background = Some(flag_value(args, i)?.to_string()),
            "--stroke" => self.stroke = flag_value(args, i)?.to_string(),
            "--stroke-width" => self.stroke_width = parse_number(flag, flag_value(args, i)?)?,
            "--fill" => self.fill = flag_value(args, i)?.to_string(),
            "--seed" => {
                let value = flag_value(args, i)?;
                self.seed = Some(value.parse().with_context(|| format!("invalid --seed `{}`", value))?);
            }
            "-r" | "--roughness" => self.style.roughness = parse_number(flag, flag_value(args, i)?)?,
            "--bowing" => self.style.bowing = parse_number(flag, flag_value(args, i)?)?,
            "--max-offset" => self.style.max_randomness_offset = parse_number(flag, flag_value(args, i)?)?,
            "--curve-steps" => self.style.curve_step_count = parse_number(flag, flag_value(args, i)?)?,
            "--tightness" => self.style.curve_tightness = parse_number(flag, flag_value(args, i)?)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Paint a drawing with the stroke/fill flags.
    pub fn layer(&self, drawing: Drawing) -> Layer {
        Layer {
            drawing,
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
            fill: self.fill.clone(),
        }
    }
}

/// Advance past `args[*i]` and return the value that follows it.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} needs a value", flag))
}

pub fn parse_number(what: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .with_context(|| format!("{}: `{}` is not a number", what, value))
}

/// Parse an `x,y` pair.
pub fn parse_point(value: &str) -> Result<Point> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a point as x,y, got `{}`", value))?;
    Ok(Point::new(parse_number("point x", x.trim())?, parse_number("point y", y.trim())?))
}

pub fn parse_closure(name: &str) -> Result<ArcClosure> {
    match name.to_lowercase().as_str() {
        "open" => Ok(ArcClosure::Open),
        "straight" => Ok(ArcClosure::Straight),
        "sketched" | "pie" => Ok(ArcClosure::Sketched),
        other => bail!("unknown arc closure `{}`, use open, straight or sketched", other),
    }
}

/// Use the given seed or pick a fresh one, logging it either way so any
/// output can be reproduced.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(rand::random);
    info!("seed: {}", seed);
    seed
}

/// Render layers as a standalone SVG document.
pub fn layers_to_svg(canvas: &Canvas, layers: &[Layer]) -> String {
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
        w = canvas.width,
        h = canvas.height
    );
    if let Some(background) = &canvas.background {
        svg.push_str(&format!("<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n", background));
    }

    for layer in layers {
        if layer.drawing.is_empty() {
            continue;
        }
        let d = layer.drawing.to_svg_path_data();
        match layer.drawing.kind {
            DrawingKind::StrokePath => svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>\n",
                d, layer.stroke, layer.stroke_width
            )),
            DrawingKind::FillPath => svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"{}\" stroke=\"none\"/>\n",
                d, layer.fill
            )),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// One instruction in JSON output format.
#[derive(Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum JsonInstruction {
    Move { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicCurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
}

impl From<&Instruction> for JsonInstruction {
    fn from(op: &Instruction) -> Self {
        match *op {
            Instruction::Move(p) => Self::Move { x: p.x, y: p.y },
            Instruction::LineTo(p) => Self::LineTo { x: p.x, y: p.y },
            Instruction::CubicCurveTo { ctrl1, ctrl2, to } => Self::CubicCurveTo {
                x1: ctrl1.x,
                y1: ctrl1.y,
                x2: ctrl2.x,
                y2: ctrl2.y,
                x: to.x,
                y: to.y,
            },
        }
    }
}

/// A drawing in JSON output format.
#[derive(Serialize)]
struct JsonDrawing<'a> {
    kind: &'static str,
    paint: &'a str,
    path: String,
    instructions: Vec<JsonInstruction>,
}

/// Top-level JSON document.
#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    width: f64,
    height: f64,
    drawings: Vec<JsonDrawing<'a>>,
}

/// Render layers as a JSON document of instruction lists.
pub fn layers_to_json(canvas: &Canvas, layers: &[Layer], seed: u64) -> Result<String> {
    let drawings = layers
        .iter()
        .map(|layer| {
            let (kind, paint) = match layer.drawing.kind {
                DrawingKind::StrokePath => ("stroke", layer.stroke.as_str()),
                DrawingKind::FillPath => ("fill", layer.fill.as_str()),
            };
            JsonDrawing {
                kind,
                paint,
                path: layer.drawing.to_svg_path_data(),
                instructions: layer.drawing.instructions.iter().map(JsonInstruction::from).collect(),
            }
        })
        .collect();

    let output = JsonOutput { seed, width: canvas.width, height: canvas.height, drawings };
    serde_json::to_string_pretty(&output).context("failed to serialize drawings")
}

/// Rasterize an SVG document and write it as PNG.
pub fn write_png(svg: &str, path: &str) -> Result<()> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).context("generated SVG did not parse")?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("cannot allocate a {}x{} image", size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.save_png(path).with_context(|| format!("failed to write {}", path))
}

/// Write layers in the requested format to a file or stdout.
pub fn write_layers(options: &OutputOptions, canvas: &Canvas, layers: &[Layer], seed: u64) -> Result<()> {
    let target = options.output.as_deref().filter(|path| *path != "-");
    match options.format {
        OutputFormat::Svg => write_text(target, &layers_to_svg(canvas, layers)),
        OutputFormat::Json => write_text(target, &layers_to_json(canvas, layers, seed)?),
        OutputFormat::Png => {
            let path = target.ok_or_else(|| anyhow!("png output needs a file, pass -o <file.png>"))?;
            write_png(&layers_to_svg(canvas, layers), path)?;
            info!("wrote {}", path);
            Ok(())
        }
    }
}

fn write_text(target: Option<&str>, text: &str) -> Result<()> {
    match target {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path))?;
            info!("wrote {}", path);
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes()).context("failed to write to stdout")?;
            if !text.ends_with('\n') {
                out.write_all(b"\n").context("failed to write to stdout")?;
            }
        }
    }
    Ok(())
}
