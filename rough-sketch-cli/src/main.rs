//! rough-sketch - CLI for hand-drawn shape generation
//!
//! Usage:
//!   rough-sketch draw <shape> <args...>   Draw one primitive
//!   rough-sketch recipe <file.yaml>       Render a composition
//!   rough-sketch benchmark [-n N]         Time every primitive

use std::env;
use std::process;

mod cli;

use cli::{cmd_benchmark, cmd_draw, cmd_recipe};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map_or("rough-sketch", String::as_str);

    let result = match args.get(1).map(String::as_str) {
        Some("draw") => cmd_draw(&args[2..]),
        Some("recipe") => cmd_recipe(&args[2..]),
        Some("benchmark") => cmd_benchmark(&args[2..]),
        Some("help" | "--help" | "-h") => {
            print_usage(prog);
            Ok(())
        }
        Some(other) => {
            print_usage(prog);
            Err(anyhow::anyhow!("unknown command `{}`", other))
        }
        None => {
            print_usage(prog);
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("rough-sketch - hand-drawn lines, shapes and SVG paths");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} draw <shape> <args...> [options]", prog);
    eprintln!("  {} recipe <file.yaml> [-o out.svg|out.png|out.json]", prog);
    eprintln!("  {} benchmark [-n <iterations>]", prog);
    eprintln!("  {} help", prog);
    eprintln!();
    eprintln!("Shapes: line, rectangle, ellipse, circle, arc, polygon, linear-path, curve, path, fill");
    eprintln!("Run `{} draw --help` for shape arguments and style options.", prog);
    eprintln!();
    eprintln!("Logging:");
    eprintln!("  RUST_LOG=info shows the seed of every drawing; debug and trace add detail.");
}
