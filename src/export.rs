// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rasterizing rendered graphs through the external Graphviz `dot` tool.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::config::Config;
use crate::model::Place;
use crate::render::render;

/// Name of the Graphviz layout program looked up on `PATH`.
pub const DOT_PROGRAM: &str = "dot";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("graphviz `dot` was not found on PATH")]
    DotNotFound(#[source] which::Error),
    #[error("failed to render graph: {0}")]
    Render(#[from] crate::render::RenderError),
    #[error("failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dot exited with {status}: {stderr}")]
    DotFailed { status: ExitStatus, stderr: String },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Appends `.png` unless `path` already ends with it.
pub fn png_path(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        return path.to_path_buf();
    }

    let mut raw = path.as_os_str().to_owned();
    raw.push(".png");
    PathBuf::from(raw)
}

/// Renders `roots` and rasterizes the result with `dot -Tpng`.
///
/// Returns the path written, which always ends in `.png`.
pub fn write_png(path: &Path, config: &Config, roots: &[Place<'_>]) -> Result<PathBuf, ExportError> {
    let mut description = Vec::new();
    render(&mut description, config, roots)?;

    let program = which::which(DOT_PROGRAM).map_err(|err| {
        tracing::warn!(error = %err, "graphviz dot not found");
        ExportError::DotNotFound(err)
    })?;
    let image = rasterize(&program, &description)?;

    let target = png_path(path);
    std::fs::write(&target, image)
        .map_err(|source| ExportError::Write { path: target.clone(), source })?;
    tracing::debug!(path = %target.display(), "wrote png");
    Ok(target)
}

/// Pipes a dot description through `program -Tpng` and returns the image bytes.
pub fn rasterize(program: &Path, description: &[u8]) -> Result<Vec<u8>, ExportError> {
    let spawn_error = |source| ExportError::Spawn { program: program.to_path_buf(), source };

    tracing::debug!(program = %program.display(), bytes = description.len(), "spawning dot");
    let mut child = Command::new(program)
        .arg("-Tpng")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        // Dropping stdin closes the pipe so dot sees end of input.
        stdin.write_all(description).map_err(spawn_error)?;
    }

    let output = child.wait_with_output().map_err(spawn_error)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        tracing::warn!(status = %output.status, "dot failed");
        return Err(ExportError::DotFailed { status: output.status, stderr });
    }
    Ok(output.stdout)
}
