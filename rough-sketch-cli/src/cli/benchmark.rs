//! Benchmark command implementation.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use rough_sketch::{ArcClosure, Drawing, Point, Renderer, SketchError, StyleConfig};

use super::common::{flag_value, resolve_seed};

const DEFAULT_ITERATIONS: usize = 1000;

type Primitive = fn(&mut Renderer, &StyleConfig) -> Result<Drawing, SketchError>;

/// Every primitive, drawn at a representative size.
const PRIMITIVES: [(&str, Primitive); 9] = [
    ("line", |r, s| r.line(Point::new(10.0, 10.0), Point::new(190.0, 120.0), s)),
    ("rectangle", |r, s| r.rectangle(20.0, 20.0, 160.0, 100.0, s)),
    ("polygon", |r, s| {
        let star: Vec<Point> = (0..10)
            .map(|k| {
                let radius = if k % 2 == 0 { 80.0 } else { 35.0 };
                let angle = k as f64 * std::f64::consts::PI / 5.0;
                Point::new(100.0 + radius * angle.cos(), 100.0 + radius * angle.sin())
            })
            .collect();
        r.polygon(&star, s)
    }),
    ("ellipse", |r, s| r.ellipse(100.0, 100.0, 160.0, 90.0, s)),
    ("arc", |r, s| r.arc(100.0, 100.0, 150.0, 150.0, 0.3, 4.0, ArcClosure::Sketched, s)),
    ("curve", |r, s| {
        let wave: Vec<Point> = (0..8).map(|k| Point::new(k as f64 * 25.0, 100.0 + if k % 2 == 0 { 30.0 } else { -30.0 })).collect();
        r.curve(&wave, s)
    }),
    ("path", |r, s| r.path("M10 80 C40 10 65 10 95 80 S150 150 180 80 Q 150 20 100 40 T 20 60 A 30 20 0 1 0 10 80 Z", s)),
    ("linear-path", |r, s| r.linear_path(&[Point::new(0.0, 0.0), Point::new(50.0, 80.0), Point::new(120.0, 10.0), Point::new(190.0, 90.0)], false, s)),
    ("fill", |r, s| r.solid_fill(&[10.0, 190.0, 150.0, 40.0], &[10.0, 30.0, 180.0, 160.0], s)),
];

/// Execute the benchmark command.
pub fn cmd_benchmark(args: &[String]) -> Result<()> {
    let mut iterations = DEFAULT_ITERATIONS;
    let mut seed = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--iterations" => {
                let value = flag_value(args, &mut i)?;
                iterations = value
                    .parse()
                    .with_context(|| format!("invalid iteration count `{}`", value))?;
            }
            "--seed" => {
                let value = flag_value(args, &mut i)?;
                seed = Some(value.parse().with_context(|| format!("invalid --seed `{}`", value))?);
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => bail!("unknown option `{}`", other),
        }
        i += 1;
    }
    if iterations == 0 {
        bail!("iteration count must be at least 1");
    }

    let style = StyleConfig::default();
    let mut renderer = Renderer::with_seed(resolve_seed(seed));

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  ROUGH-SKETCH BENCHMARK: {} iterations", iterations);
    println!("═══════════════════════════════════════════════");
    println!("  {:<12} {:>10} {:>12} {:>10}", "primitive", "ops/draw", "total", "µs/draw");

    let mut grand_total = Duration::ZERO;
    for (name, primitive) in PRIMITIVES {
        let mut instructions = 0;
        let start = Instant::now();
        for _ in 0..iterations {
            instructions += primitive(&mut renderer, &style)?.len();
        }
        let elapsed = start.elapsed();
        grand_total += elapsed;

        println!(
            "  {:<12} {:>10} {:>10.2}ms {:>10.2}",
            name,
            instructions / iterations,
            elapsed.as_secs_f64() * 1000.0,
            elapsed.as_secs_f64() * 1e6 / iterations as f64
        );
    }

    println!("───────────────────────────────────────────────");
    println!("  Time: {:?}", grand_total);
    println!("═══════════════════════════════════════════════");
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: rough-sketch benchmark [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --iterations <n>    Draws per primitive (default: {})", DEFAULT_ITERATIONS);
    eprintln!("  --seed <n>              Random seed");
    eprintln!();
    eprintln!("Times every drawing primitive.");
}
