use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use fs_extra::file::CopyOptions;
use log::{debug, info};

pub(crate) const CSS_FILE: &str = "minimal.css";

pub(crate) const DEFAULT_STYLESHEET: &str = include_str!("../assets/minimal.css");

// never overwrites an existing copy
pub(crate) fn ensure_css_exists(output_dir: &Path, css_source: &Path) -> anyhow::Result<PathBuf> {
    let css_filename = css_source
        .file_name()
        .ok_or_else(|| anyhow!("stylesheet path has no file name: {css_source:?}"))?;
    let dest_path = output_dir.join(css_filename);

    if dest_path.exists() {
        debug!("Stylesheet({dest_path:?}) already exists. skipping...");
        return Ok(dest_path);
    }

    let mut options = CopyOptions::new();
    options.skip_exist = true;
    fs_extra::file::copy(css_source, &dest_path, &options)
        .with_context(|| format!("while copying {css_source:?} to {dest_path:?}"))?;
    info!("Copied stylesheet: {dest_path:?}");

    Ok(dest_path)
}

pub(crate) fn ensure_default_stylesheet(css_path: &Path) -> anyhow::Result<bool> {
    if css_path.exists() {
        debug!("Stylesheet({css_path:?}) already exists. skipping...");
        return Ok(false);
    }

    if let Some(parent) = css_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut fd = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(css_path)
        .with_context(|| format!("while creating {css_path:?}"))?;
    fd.write_all(DEFAULT_STYLESHEET.as_bytes())?;
    info!("Created default stylesheet: {css_path:?}");

    Ok(true)
}
