//! Command-line entry point for catalogue maintenance and scene rendering.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use roomtint::catalog;
use roomtint::engine::{FsOutlineSource, SceneBundle, SceneView};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        ["dedup", path] => run_dedup(Path::new(path)),
        ["render", root, scene, photo, rest @ ..] if rest.len() >= 2 => {
            run_render(Path::new(root), scene, Path::new(photo), rest)
        }
        ["render-bundle", bundle, rest @ ..] if rest.len() >= 2 => {
            run_render_bundle(Path::new(bundle), rest)
        }
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  roomtint dedup <catalog.json>");
    eprintln!("  roomtint render <scene-root> <scene> <photo> <region>=<hex>... <out.png>");
    eprintln!("  roomtint render-bundle <bundle.zip> <region>=<hex>... <out.png>");
}

/// Run the cross-category deduplication pass on a catalogue file in place.
fn run_dedup(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = catalog::dedup_file(path)?;
    println!(
        "{} duplicate keys resolved; {} colours remain",
        report.duplicate_keys, report.total
    );
    for (category, removed) in &report.removed {
        println!("  {}: removed {}", category, removed);
    }
    Ok(())
}

/// Split trailing `region=hex` arguments from the output path.
fn split_selections<'a>(
    rest: &[&'a str],
) -> Result<(Vec<(&'a str, &'a str)>, &'a str), Box<dyn std::error::Error>> {
    let (&output, pairs) = rest.split_last().ok_or("missing output path")?;
    let mut selections = Vec::new();
    for pair in pairs {
        let (region, hex) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected <region>=<hex>, got '{}'", pair))?;
        selections.push((region, hex));
    }
    Ok((selections, output))
}

/// Pump the scene until every region fetch has settled.
fn wait_for_geometry(view: &mut SceneView) {
    while view.is_loading() {
        view.pump();
        thread::sleep(Duration::from_millis(5));
    }
    view.pump();
}

fn render_to_file(
    mut view: SceneView,
    scene: &str,
    base: image::RgbImage,
    selections: &[(&str, &str)],
    output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let regions: Vec<&str> = selections.iter().map(|(region, _)| *region).collect();
    view.open_scene(scene, base, &regions);
    wait_for_geometry(&mut view);

    for (region, hex) in selections {
        view.pick_color(region, hex);
    }

    let rendered = view.render().ok_or("no scene open")?;
    rendered.save(output)?;
    println!(
        "Rendered scene '{}' with {} tinted regions to {}",
        scene,
        view.tintable_regions().len(),
        output
    );
    Ok(())
}

/// Composite a scene from a directory of outline documents.
fn run_render(
    root: &Path,
    scene: &str,
    photo: &Path,
    rest: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let (selections, output) = split_selections(rest)?;
    let base = image::open(photo)?.to_rgb8();
    let view = SceneView::new(Arc::new(FsOutlineSource::new(root)));
    render_to_file(view, scene, base, &selections, output)
}

/// Composite a scene shipped as a ZIP bundle.
fn run_render_bundle(path: &Path, rest: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let (selections, output) = split_selections(rest)?;
    let bundle = SceneBundle::from_zip_file(path)?;
    let scene = "bundle";
    let view = SceneView::new(Arc::new(bundle.outline_source(scene)));
    render_to_file(view, scene, bundle.photo.clone(), &selections, output)
}
