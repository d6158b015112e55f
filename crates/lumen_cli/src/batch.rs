//! Input discovery: expands files and directories into render jobs.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One scene to render and where its image goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub scene: PathBuf,
    pub output: PathBuf,
}

/// Whether `path` names a JSON scene file.
fn is_scene_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Image path for a scene: `<scene file name>.png`, next to the scene or in
/// `output_dir`.
pub fn output_path(scene: &Path, output_dir: Option<&Path>) -> PathBuf {
    let mut file_name = scene
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("scene"));
    file_name.push(".png");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => scene.with_file_name(file_name),
    }
}

/// Recursively collect scene files under `dir`, sorted by file name within
/// each directory.
fn find_scene_files(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        });

    found.extend(
        entries
            .filter(|entry| !entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .filter(|path| is_scene_file(path)),
    );
}

/// Expand command-line inputs into render jobs.
///
/// Files must have a `.json` extension; directories are searched
/// recursively. Anything else is logged and skipped.
pub fn collect_jobs(inputs: &[PathBuf], output_dir: Option<&Path>) -> Vec<RenderJob> {
    let mut scenes = Vec::new();

    for input in inputs {
        if input.is_file() {
            if is_scene_file(input) {
                scenes.push(input.clone());
            } else {
                log::warn!("Skipping {}: not a .json scene file", input.display());
            }
        } else if input.is_dir() {
            let before = scenes.len();
            find_scene_files(input, &mut scenes);
            log::debug!(
                "Found {} scene files in {}",
                scenes.len() - before,
                input.display()
            );
        } else {
            log::warn!(
                "Skipping {}: neither a scene file nor a directory",
                input.display()
            );
        }
    }

    scenes
        .into_iter()
        .map(|scene| {
            let output = output_path(&scene, output_dir);
            RenderJob { scene, output }
        })
        .collect()
}
