//! Recipe system for declarative sketch compositions.
//!
//! Recipes are YAML files listing shapes to draw on one canvas. A recipe
//! carries a default style; each shape may override any style option and
//! its paint.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;

use rough_sketch::{Drawing, Point, Renderer, StyleConfig};

use super::common::{parse_closure, resolve_seed, write_layers, Canvas, Layer, OutputFormat, OutputOptions};
use super::draw::print_shared_options;

/// A complete recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    #[serde(default)]
    pub name: Option<String>,

    /// Canvas configuration
    #[serde(default)]
    pub canvas: Canvas,

    /// Seed for reproducible output (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Style applied to every shape (can be overridden per shape)
    #[serde(default)]
    pub style: StyleOverrides,

    /// Default paint
    #[serde(default)]
    pub paint: Paint,

    /// Shapes, drawn in order
    pub shapes: Vec<ShapeEntry>,
}

/// Optional style options; unset fields fall through to the next level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct StyleOverrides {
    #[serde(default)]
    pub roughness: Option<f64>,
    #[serde(default)]
    pub bowing: Option<f64>,
    #[serde(default)]
    pub max_randomness_offset: Option<f64>,
    #[serde(default)]
    pub curve_step_count: Option<f64>,
    #[serde(default)]
    pub curve_tightness: Option<f64>,
}

impl StyleOverrides {
    /// Merge with defaults, preferring self's values.
    pub fn merge_with(&self, defaults: &StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            roughness: self.roughness.or(defaults.roughness),
            bowing: self.bowing.or(defaults.bowing),
            max_randomness_offset: self.max_randomness_offset.or(defaults.max_randomness_offset),
            curve_step_count: self.curve_step_count.or(defaults.curve_step_count),
            curve_tightness: self.curve_tightness.or(defaults.curve_tightness),
        }
    }

    /// Apply the set fields on top of `base`.
    pub fn apply(&self, base: StyleConfig) -> StyleConfig {
        StyleConfig {
            roughness: self.roughness.unwrap_or(base.roughness),
            bowing: self.bowing.unwrap_or(base.bowing),
            max_randomness_offset: self.max_randomness_offset.unwrap_or(base.max_randomness_offset),
            curve_step_count: self.curve_step_count.unwrap_or(base.curve_step_count),
            curve_tightness: self.curve_tightness.unwrap_or(base.curve_tightness),
        }
    }
}

/// Stroke and fill paint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paint {
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub fill: Option<String>,
}

impl Paint {
    pub fn merge_with(&self, defaults: &Paint) -> Paint {
        Paint {
            stroke: self.stroke.clone().or_else(|| defaults.stroke.clone()),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            fill: self.fill.clone().or_else(|| defaults.fill.clone()),
        }
    }
}

/// One shape with its overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ShapeEntry {
    #[serde(flatten)]
    pub shape: Shape,

    #[serde(default)]
    pub style: StyleOverrides,

    #[serde(flatten)]
    pub paint: Paint,
}

/// Shape geometry, tagged by `shape:`.
///
/// Points are `[x, y]` pairs; arc angles are in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Shape {
    Line { from: [f64; 2], to: [f64; 2] },
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    Ellipse { cx: f64, cy: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, diameter: f64 },
    Arc {
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        start: f64,
        stop: f64,
        #[serde(default)]
        closure: Option<String>,
    },
    Polygon { points: Vec<[f64; 2]> },
    LinearPath {
        points: Vec<[f64; 2]>,
        #[serde(default)]
        close: bool,
    },
    Curve { points: Vec<[f64; 2]> },
    Path { d: String },
    Fill { points: Vec<[f64; 2]> },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Circle { .. } => "circle",
            Shape::Arc { .. } => "arc",
            Shape::Polygon { .. } => "polygon",
            Shape::LinearPath { .. } => "linear-path",
            Shape::Curve { .. } => "curve",
            Shape::Path { .. } => "path",
            Shape::Fill { .. } => "fill",
        }
    }

    /// Draw this shape with `renderer`.
    pub fn draw(&self, renderer: &mut Renderer, style: &StyleConfig) -> Result<Drawing> {
        let drawing = match self {
            Shape::Line { from, to } => renderer.line(to_point(from), to_point(to), style)?,
            Shape::Rectangle { x, y, width, height } => renderer.rectangle(*x, *y, *width, *height, style)?,
            Shape::Ellipse { cx, cy, width, height } => renderer.ellipse(*cx, *cy, *width, *height, style)?,
            Shape::Circle { cx, cy, diameter } => renderer.circle(*cx, *cy, *diameter, style)?,
            Shape::Arc { cx, cy, width, height, start, stop, closure } => {
                let closure = parse_closure(closure.as_deref().unwrap_or("open"))?;
                renderer.arc(*cx, *cy, *width, *height, start.to_radians(), stop.to_radians(), closure, style)?
            }
            Shape::Polygon { points } => renderer.polygon(&to_points(points), style)?,
            Shape::LinearPath { points, close } => renderer.linear_path(&to_points(points), *close, style)?,
            Shape::Curve { points } => renderer.curve(&to_points(points), style)?,
            Shape::Path { d } => renderer.path(d, style)?,
            Shape::Fill { points } => {
                let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
                let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
                renderer.solid_fill(&xs, &ys, style)?
            }
        };
        Ok(drawing)
    }
}

fn to_point(p: &[f64; 2]) -> Point {
    Point::new(p[0], p[1])
}

fn to_points(points: &[[f64; 2]]) -> Vec<Point> {
    points.iter().map(to_point).collect()
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in recipe {}", path.display()))
    }

    /// Parse recipe YAML.
    pub fn parse(yaml: &str) -> Result<Self> {
        let recipe: Recipe = serde_yaml::from_str(yaml).context("failed to parse recipe YAML")?;
        recipe.canvas.validate()?;
        Ok(recipe)
    }

    /// Draw every shape in order from one seeded stream.
    pub fn render(&self, seed: u64, fallback: &OutputOptions) -> Result<Vec<Layer>> {
        let mut renderer = Renderer::with_seed(seed);
        let mut layers = Vec::with_capacity(self.shapes.len());

        for (index, entry) in self.shapes.iter().enumerate() {
            let style = entry.style.merge_with(&self.style).apply(StyleConfig::default());
            let paint = entry.paint.merge_with(&self.paint);

            let drawing = entry
                .shape
                .draw(&mut renderer, &style)
                .with_context(|| format!("shape #{} ({})", index + 1, entry.shape.name()))?;
            debug!("shape #{} ({}): {} instructions", index + 1, entry.shape.name(), drawing.len());

            layers.push(Layer {
                drawing,
                stroke: paint.stroke.unwrap_or_else(|| fallback.stroke.clone()),
                stroke_width: paint.stroke_width.unwrap_or(fallback.stroke_width),
                fill: paint.fill.unwrap_or_else(|| fallback.fill.clone()),
            });
        }
        Ok(layers)
    }
}

/// Execute the recipe command.
pub fn cmd_recipe(args: &[String]) -> Result<()> {
    if args.is_empty() {
        print_usage();
        bail!("no recipe file given");
    }

    let mut recipe_path: Option<&str> = None;
    let mut options = OutputOptions::default();
    let mut format_given = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--example" => {
                print_example();
                return Ok(());
            }
            "-f" | "--format" | "--json" => {
                options.parse_flag(args, &mut i)?;
                format_given = true;
            }
            "-o" | "--output" | "--seed" => {
                options.parse_flag(args, &mut i)?;
            }
            arg if !arg.starts_with('-') => recipe_path = Some(arg),
            other => bail!("unknown option `{}`", other),
        }
        i += 1;
    }

    let recipe_path = recipe_path.context("no recipe file given")?;
    if !format_given {
        if let Some(format) = options.output.as_deref().and_then(format_from_extension) {
            options.format = format;
        }
    }

    info!("loading recipe: {}", recipe_path);
    let recipe = Recipe::load(recipe_path)?;
    if let Some(name) = &recipe.name {
        info!("recipe: {}", name);
    }

    let seed = resolve_seed(options.seed.or(recipe.seed));
    let layers = recipe.render(seed, &options)?;
    info!("drew {} shapes on {}x{}", layers.len(), recipe.canvas.width, recipe.canvas.height);

    write_layers(&options, &recipe.canvas, &layers, seed)
}

/// `out.png` implies png, `out.json` json.
fn format_from_extension(path: &str) -> Option<OutputFormat> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(OutputFormat::from_name)
}

fn print_usage() {
    eprintln!("rough-sketch recipe - Render a sketch composition from YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    rough-sketch recipe <recipe.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("    -o, --output <file>    Output file (format follows the extension)");
    eprintln!("    -f, --format <fmt>     svg, json or png");
    eprintln!("    --seed <n>             Override the recipe seed");
    eprintln!("    --example              Print an example recipe YAML");
    eprintln!();
    print_shared_options();
}

/// Example recipe, also used by the tests.
pub const EXAMPLE_RECIPE: &str = r##"# Example rough-sketch recipe
name: "Sketch demo"

canvas:
  width: 320
  height: 240
  background: "white"

seed: 42

style:
  roughness: 1.2
  bowing: 1

paint:
  stroke: "#222222"
  stroke_width: 1.5

shapes:
  - shape: rectangle
    x: 20
    y: 20
    width: 120
    height: 80

  - shape: fill
    points: [[40, 40], [120, 40], [80, 90]]
    fill: "#f4a261"

  - shape: ellipse
    cx: 230
    cy: 70
    width: 110
    height: 70
    style:
      roughness: 2.5

  - shape: arc
    cx: 80
    cy: 180
    width: 90
    height: 90
    start: 180
    stop: 360
    closure: sketched

  - shape: curve
    points: [[160, 200], [200, 150], [250, 210], [300, 160]]
    stroke: "#2a9d8f"

  - shape: path
    d: "M160 120 q 30 -30 60 0 t 60 0"
"##;

fn print_example() {
    print!("{}", EXAMPLE_RECIPE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_recipe_parses() {
        let recipe = Recipe::parse(EXAMPLE_RECIPE).unwrap();
        assert_eq!(recipe.name.as_deref(), Some("Sketch demo"));
        assert_eq!(recipe.seed, Some(42));
        assert_eq!(recipe.shapes.len(), 6);
        assert_eq!(
            recipe.shapes[0].shape,
            Shape::Rectangle { x: 20.0, y: 20.0, width: 120.0, height: 80.0 }
        );
        assert_eq!(recipe.shapes[1].paint.fill.as_deref(), Some("#f4a261"));
        assert_eq!(recipe.shapes[2].style.roughness, Some(2.5));
    }

    #[test]
    fn example_recipe_renders() {
        let recipe = Recipe::parse(EXAMPLE_RECIPE).unwrap();
        let layers = recipe.render(42, &OutputOptions::default()).unwrap();
        assert_eq!(layers.len(), 6);
        assert!(layers.iter().all(|layer| !layer.drawing.is_empty()));
        assert_eq!(layers[0].stroke, "#222222");
        assert_eq!(layers[4].stroke, "#2a9d8f");
        assert_eq!(layers[1].fill, "#f4a261");
    }

    #[test]
    fn style_overrides_merge_field_by_field() {
        let defaults = StyleOverrides { roughness: Some(2.0), bowing: Some(3.0), ..Default::default() };
        let shape = StyleOverrides { roughness: Some(0.5), ..Default::default() };
        let style = shape.merge_with(&defaults).apply(StyleConfig::default());

        assert_eq!(style.roughness, 0.5);
        assert_eq!(style.bowing, 3.0);
        assert_eq!(style.max_randomness_offset, StyleConfig::default().max_randomness_offset);
    }

    #[test]
    fn invalid_shape_style_names_the_shape() {
        let yaml = r#"
shapes:
  - shape: circle
    cx: 10
    cy: 10
    diameter: 5
  - shape: ellipse
    cx: 10
    cy: 10
    width: 5
    height: 5
    style:
      curve_step_count: 0
"#;
        let recipe = Recipe::parse(yaml).unwrap();
        let err = recipe.render(1, &OutputOptions::default()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("shape #2 (ellipse)"), "{}", message);
        assert!(message.contains("curve_step_count"), "{}", message);
    }

    #[test]
    fn unknown_shape_kind_fails_to_parse() {
        let yaml = "shapes:\n  - shape: star\n    points: 5\n";
        assert!(Recipe::parse(yaml).is_err());
    }

    #[test]
    fn extension_picks_format() {
        assert_eq!(format_from_extension("out.png"), Some(OutputFormat::Png));
        assert_eq!(format_from_extension("out.JSON"), Some(OutputFormat::Json));
        assert_eq!(format_from_extension("out.txt"), None);
        assert_eq!(format_from_extension("-"), None);
    }
}
