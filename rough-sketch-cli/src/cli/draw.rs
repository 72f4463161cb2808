//! Draw command implementation.
//!
//! One primitive per invocation:
//!
//! ```text
//! rough-sketch draw rectangle 10 10 120 80 --roughness 2 -o box.svg
//! rough-sketch draw path "M10 10 Q 50 90 90 10" --seed 4
//! ```

use anyhow::{bail, Context, Result};
use log::debug;

use rough_sketch::{ArcClosure, Drawing, Point, Renderer};

use super::common::{parse_closure, parse_number, parse_point, resolve_seed, write_layers, OutputOptions};

/// Execute the draw command.
pub fn cmd_draw(args: &[String]) -> Result<()> {
    let Some(shape) = args.first() else {
        print_usage();
        bail!("no shape given");
    };
    if matches!(shape.as_str(), "-h" | "--help") {
        print_usage();
        return Ok(());
    }

    let mut options = OutputOptions::default();
    let mut close = false;
    let mut closure = ArcClosure::Open;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if !options.parse_flag(args, &mut i)? {
            match arg {
                "--close" => close = true,
                "--closure" => {
                    i += 1;
                    let value = args.get(i).context("--closure needs a value")?;
                    closure = parse_closure(value)?;
                }
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                value if is_positional(value) => positional.push(value),
                other => bail!("unknown option `{}`", other),
            }
        }
        i += 1;
    }

    options.canvas.validate()?;
    let seed = resolve_seed(options.seed);
    let mut renderer = Renderer::with_seed(seed);
    let drawing = draw_shape(&mut renderer, shape, &positional, close, closure, &options)
        .with_context(|| format!("cannot draw {}", shape))?;
    debug!("{}: {} instructions", shape, drawing.len());

    let layers = [options.layer(drawing)];
    write_layers(&options, &options.canvas, &layers, seed)
}

/// Values, including negative numbers, as opposed to `--flags`.
fn is_positional(arg: &str) -> bool {
    !arg.starts_with('-') || arg.parse::<f64>().is_ok() || arg.contains(',')
}

fn draw_shape(
    renderer: &mut Renderer,
    shape: &str,
    args: &[&str],
    close: bool,
    closure: ArcClosure,
    options: &OutputOptions,
) -> Result<Drawing> {
    let style = &options.style;
    let drawing = match shape {
        "line" => {
            let [x1, y1, x2, y2] = numbers(shape, "x1 y1 x2 y2", args)?;
            renderer.line(Point::new(x1, y1), Point::new(x2, y2), style)?
        }
        "rectangle" | "rect" => {
            let [x, y, w, h] = numbers(shape, "x y width height", args)?;
            renderer.rectangle(x, y, w, h, style)?
        }
        "ellipse" => {
            let [cx, cy, w, h] = numbers(shape, "cx cy width height", args)?;
            renderer.ellipse(cx, cy, w, h, style)?
        }
        "circle" => {
            let [cx, cy, d] = numbers(shape, "cx cy diameter", args)?;
            renderer.circle(cx, cy, d, style)?
        }
        "arc" => {
            let [cx, cy, w, h, start, stop] = numbers(shape, "cx cy width height start-deg stop-deg", args)?;
            renderer.arc(cx, cy, w, h, start.to_radians(), stop.to_radians(), closure, style)?
        }
        "polygon" => renderer.polygon(&points(args)?, style)?,
        "linear-path" | "polyline" => renderer.linear_path(&points(args)?, close, style)?,
        "curve" => renderer.curve(&points(args)?, style)?,
        "path" => {
            if args.is_empty() {
                bail!("path needs SVG path data, e.g. \"M0 0 L10 10\"");
            }
            renderer.path(&args.join(" "), style)?
        }
        "fill" => {
            let (xs, ys): (Vec<f64>, Vec<f64>) = points(args)?.iter().map(|p| (p.x, p.y)).unzip();
            renderer.solid_fill(&xs, &ys, style)?
        }
        other => bail!(
            "unknown shape `{}`; expected line, rectangle, ellipse, circle, arc, polygon, linear-path, curve, path or fill",
            other
        ),
    };
    Ok(drawing)
}

/// Exactly `N` numeric arguments.
fn numbers<const N: usize>(shape: &str, names: &str, args: &[&str]) -> Result<[f64; N]> {
    if args.len() != N {
        bail!("{} takes {} numbers ({}), got {}", shape, N, names, args.len());
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = parse_number(shape, arg)?;
    }
    Ok(out)
}

fn points(args: &[&str]) -> Result<Vec<Point>> {
    args.iter().map(|arg| parse_point(arg)).collect()
}

fn print_usage() {
    eprintln!("rough-sketch draw - Draw one hand-drawn primitive");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    rough-sketch draw <shape> <args...> [OPTIONS]");
    eprintln!();
    eprintln!("SHAPES:");
    eprintln!("    line x1 y1 x2 y2");
    eprintln!("    rectangle x y width height");
    eprintln!("    ellipse cx cy width height");
    eprintln!("    circle cx cy diameter");
    eprintln!("    arc cx cy width height start stop   (degrees, --closure open|straight|sketched)");
    eprintln!("    polygon x,y x,y x,y ...");
    eprintln!("    linear-path x,y x,y ...             (--close to close it)");
    eprintln!("    curve x,y x,y ...");
    eprintln!("    path \"<svg path data>\"");
    eprintln!("    fill x,y x,y x,y ...");
    eprintln!();
    print_shared_options();
}

/// Options understood by every drawing command.
pub fn print_shared_options() {
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>      Output file (- for stdout, default: stdout)");
    eprintln!("    -f, --format <fmt>       svg, json or png (default: svg)");
    eprintln!("    --seed <n>               Random seed (default: random, logged at info)");
    eprintln!("    -r, --roughness <n>      Jitter amount (default: 1)");
    eprintln!("    --bowing <n>             Mid-line bend (default: 1)");
    eprintln!("    --max-offset <n>         Endpoint jitter in px (default: 2)");
    eprintln!("    --curve-steps <n>        Ellipse samples per turn (default: 9)");
    eprintln!("    --tightness <n>          Spline tightness (default: 0)");
    eprintln!("    --width, --height <n>    Canvas size (default: 200x200)");
    eprintln!("    --background <color>     Canvas background");
    eprintln!("    --stroke <color>         Stroke colour (default: black)");
    eprintln!("    --stroke-width <n>       Stroke width (default: 1)");
    eprintln!("    --fill <color>           Fill colour for `fill` (default: #999999)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_numbers_are_positional() {
        assert!(is_positional("-5"));
        assert!(is_positional("-1.5,3"));
        assert!(is_positional("12"));
        assert!(!is_positional("--seed"));
        assert!(!is_positional("-o"));
    }

    #[test]
    fn numbers_checks_count() {
        let [a, b] = numbers::<2>("test", "a b", &["1", "-2.5"]).unwrap();
        assert_eq!((a, b), (1.0, -2.5));
        assert!(numbers::<2>("test", "a b", &["1"]).is_err());
        assert!(numbers::<1>("test", "a", &["x"]).is_err());
    }

    #[test]
    fn every_shape_draws() {
        let options = OutputOptions::default();
        let cases: [(&str, &[&str]); 10] = [
            ("line", &["0", "0", "50", "50"]),
            ("rectangle", &["10", "10", "50", "30"]),
            ("ellipse", &["50", "50", "40", "20"]),
            ("circle", &["50", "50", "40"]),
            ("arc", &["50", "50", "40", "40", "0", "90"]),
            ("polygon", &["0,0", "10,0", "10,10"]),
            ("linear-path", &["0,0", "10,0", "10,10"]),
            ("curve", &["0,0", "10,5", "20,0"]),
            ("path", &["M0", "0", "L10", "10"]),
            ("fill", &["0,0", "10,0", "10,10"]),
        ];
        for (shape, args) in cases {
            let mut renderer = Renderer::with_seed(1);
            let drawing = draw_shape(&mut renderer, shape, args, false, ArcClosure::Open, &options).unwrap();
            assert!(!drawing.is_empty(), "{} drew nothing", shape);
        }
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let err = draw_shape(&mut Renderer::with_seed(1), "star", &[], false, ArcClosure::Open, &OutputOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("unknown shape"));
    }
}
