//! Lumen - batch renderer for JSON scene files.
//!
//! Every `.json` input (or every `.json` under a directory input) is loaded,
//! rendered and written as `<input>.png`.

mod batch;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::load_scene;
use lumen_renderer::{render, render_parallel, RenderConfig, Scene, DEFAULT_BUCKET_SIZE};

use crate::batch::{collect_jobs, RenderJob};

#[derive(Debug, Parser)]
#[command(name = "lumen", version, about = "Render JSON scene files to PNG")]
struct Args {
    /// Scene files or directories to search for scene files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write images here instead of next to each scene
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Worker threads for the parallel renderer (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Use the single-threaded reference renderer
    #[arg(long)]
    single_threaded: bool,
}

fn render_job(job: &RenderJob, args: &Args) -> Result<()> {
    let start = Instant::now();

    let description = load_scene(&job.scene)
        .with_context(|| format!("Failed to load {}", job.scene.display()))?;
    let scene = Scene::from_description(&description)
        .with_context(|| format!("Invalid scene {}", job.scene.display()))?;

    let image = if args.single_threaded {
        render(&scene)
    } else {
        let config = RenderConfig::default().with_bucket_size(args.bucket_size);
        render_parallel(&scene, &config)
    }
    .with_context(|| format!("Failed to render {}", job.scene.display()))?;

    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    image
        .save(&job.output)
        .with_context(|| format!("Failed to write {}", job.output.display()))?;

    log::info!(
        "{} -> {} in {:.2?}",
        job.scene.display(),
        job.output.display(),
        start.elapsed()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let jobs = collect_jobs(&args.inputs, args.output_dir.as_deref());
    if jobs.is_empty() {
        anyhow::bail!("No scene files found");
    }
    log::info!("Rendering {} scene(s)", jobs.len());

    let start = Instant::now();
    let mut failed = 0;
    for job in &jobs {
        if let Err(e) = render_job(job, &args) {
            log::error!("{:#}", e);
            failed += 1;
        }
    }

    log::info!(
        "Finished {} of {} scene(s) in {:.2?}",
        jobs.len() - failed,
        jobs.len(),
        start.elapsed()
    );

    if failed > 0 {
        anyhow::bail!("{} of {} scene(s) failed", failed, jobs.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["lumen", "scene.json"]).unwrap();
        assert_eq!(args.inputs, vec![PathBuf::from("scene.json")]);
        assert_eq!(args.bucket_size, DEFAULT_BUCKET_SIZE);
        assert!(args.threads.is_none());
        assert!(!args.single_threaded);
        assert!(args.output_dir.is_none());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::try_parse_from([
            "lumen",
            "--threads",
            "4",
            "--bucket-size",
            "16",
            "--single-threaded",
            "--output-dir",
            "out",
            "a.json",
            "scenes",
        ])
        .unwrap();
        assert_eq!(args.threads, Some(4));
        assert_eq!(args.bucket_size, 16);
        assert!(args.single_threaded);
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.inputs.len(), 2);
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["lumen"]).is_err());
    }

    #[test]
    fn test_sample_scenes_build() {
        let scenes_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenes");
        let jobs = collect_jobs(&[scenes_dir], None);
        assert!(!jobs.is_empty());

        for job in &jobs {
            let description = load_scene(&job.scene).unwrap();
            assert!(
                Scene::from_description(&description).is_ok(),
                "{} failed to build",
                job.scene.display()
            );
        }
    }

    #[test]
    fn test_render_job_writes_png() {
        let dir = std::env::temp_dir().join(format!("lumen_cli_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let scene = dir.join("tiny.json");
        fs::write(
            &scene,
            r#"{ "image": { "width": 8, "height": 6 },
                 "camera": { "view_point": [0, 0, 5] },
                 "surfaces": [ { "type": "sphere" } ],
                 "lights": [ { "type": "constant" } ] }"#,
        )
        .unwrap();

        let job = RenderJob {
            scene: scene.clone(),
            output: dir.join("out/tiny.json.png"),
        };
        let args = Args::try_parse_from(["lumen", "--bucket-size", "4", "unused.json"]).unwrap();
        render_job(&job, &args).unwrap();
        assert!(job.output.is_file());

        let broken = RenderJob {
            scene: dir.join("missing.json"),
            output: dir.join("missing.json.png"),
        };
        assert!(render_job(&broken, &args).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
