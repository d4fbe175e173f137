//! Loading workspace configuration from disk.

use std::path::Path;

use anyhow::{Context, Result};
use jsm_resolver::{WorkspaceConfig, WorkspaceModel};
use tracing::debug;

/// Reads a workspace configuration file (JSON, see [`WorkspaceConfig`]).
pub fn load_workspace_config(path: &Path) -> Result<WorkspaceConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read workspace config: {}", path.display()))?;
    WorkspaceConfig::from_json(&source)
        .with_context(|| format!("failed to parse workspace config: {}", path.display()))
}

/// Reads a workspace configuration file and builds the model from it.
pub fn load_workspace(path: &Path) -> Result<WorkspaceModel> {
    let config = load_workspace_config(path)?;
    debug!(path = %path.display(), projects = config.projects.len(), "loaded workspace config");
    WorkspaceModel::new(&config).with_context(|| format!("invalid workspace config: {}", path.display()))
}
