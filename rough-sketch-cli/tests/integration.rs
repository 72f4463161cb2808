//! Integration tests for rough-sketch CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rough_sketch() -> Command {
    Command::cargo_bin("rough-sketch").expect("binary exists")
}

#[test]
fn help_command_shows_usage() {
    rough_sketch()
        .arg("help")
        .assert()
        .success()
        .stderr(predicate::str::contains("draw <shape>"))
        .stderr(predicate::str::contains("recipe <file.yaml>"));
}

#[test]
fn unknown_command_fails() {
    rough_sketch()
        .arg("sketchify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: unknown command `sketchify`"));
}

#[test]
fn draw_rectangle_produces_svg() {
    rough_sketch()
        .args(["draw", "rectangle", "10", "10", "100", "60", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<?xml"))
        .stdout(predicate::str::contains("<path d=\"M"))
        .stdout(predicate::str::contains("</svg>"));
}

#[test]
fn same_seed_same_output() {
    let run = || {
        rough_sketch()
            .args(["draw", "ellipse", "50", "50", "80", "40", "--seed", "77"])
            .output()
            .expect("command runs")
            .stdout
    };
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn smooth_line_is_exact() {
    rough_sketch()
        .args(["draw", "line", "0", "0", "100", "0", "--roughness", "0", "--bowing", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M0.00 0.00 C"))
        .stdout(predicate::str::contains("100.00 0.00"));
}

#[test]
fn negative_coordinates_are_accepted() {
    rough_sketch()
        .args(["draw", "line", "-10", "-10", "50", "-5.5", "--seed", "3"])
        .assert()
        .success();
}

#[test]
fn draw_path_as_json() {
    rough_sketch()
        .args(["draw", "path", "M10 10 Q 50 90 90 10 T 170 10", "-f", "json", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seed\": 5"))
        .stdout(predicate::str::contains("\"op\": \"cubic_curve_to\""))
        .stdout(predicate::str::contains("\"kind\": \"stroke\""));
}

#[test]
fn fill_uses_fill_paint() {
    rough_sketch()
        .args(["draw", "fill", "0,0", "50,0", "25,40", "--fill", "#ff0000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill=\"#ff0000\" stroke=\"none\""));
}

#[test]
fn malformed_path_reports_error() {
    rough_sketch()
        .args(["draw", "path", "M 10 10 L foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed path data"));
}

#[test]
fn invalid_style_reports_option() {
    rough_sketch()
        .args(["draw", "circle", "50", "50", "40", "--curve-steps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("curve_step_count"));
}

#[test]
fn too_few_points_reports_error() {
    rough_sketch()
        .args(["draw", "polygon", "5,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs at least 2 points"));
}

#[test]
fn wrong_argument_count_reports_usage() {
    rough_sketch()
        .args(["draw", "line", "0", "0", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line takes 4 numbers"));
}

#[test]
fn draw_writes_output_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("arc.svg");

    rough_sketch()
        .args(["draw", "arc", "100", "100", "80", "80", "0", "270", "--closure", "sketched", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("stroke=\"black\""));
}

#[test]
fn png_output_is_a_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("circle.png");

    rough_sketch()
        .args(["draw", "circle", "100", "100", "120", "-f", "png", "--background", "white", "-o"])
        .arg(&out)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn png_to_stdout_is_refused() {
    rough_sketch()
        .args(["draw", "circle", "100", "100", "120", "-f", "png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("png output needs a file"));
}

#[test]
fn example_recipe_round_trips_through_the_cli() {
    let temp = TempDir::new().unwrap();
    let recipe = temp.path().join("demo.yaml");
    let out = temp.path().join("demo.json");

    let example = rough_sketch()
        .args(["recipe", "--example"])
        .output()
        .expect("command runs")
        .stdout;
    std::fs::write(&recipe, example).unwrap();

    rough_sketch()
        .arg("recipe")
        .arg(&recipe)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["seed"], 42);
    assert_eq!(json["drawings"].as_array().map(Vec::len), Some(6));
}

#[test]
fn recipe_errors_name_the_shape() {
    let temp = TempDir::new().unwrap();
    let recipe = temp.path().join("bad.yaml");
    std::fs::write(
        &recipe,
        "shapes:\n  - shape: linear-path\n    points: [[0, 0]]\n",
    )
    .unwrap();

    rough_sketch()
        .arg("recipe")
        .arg(&recipe)
        .assert()
        .failure()
        .stderr(predicate::str::contains("shape #1 (linear-path)"));
}

#[test]
fn benchmark_command_runs() {
    rough_sketch()
        .args(["benchmark", "-n", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BENCHMARK"))
        .stdout(predicate::str::contains("ellipse"))
        .stdout(predicate::str::contains("Time"));
}
