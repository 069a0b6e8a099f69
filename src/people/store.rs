use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use super::model::{CENTER_ID, Project};

pub fn load_project(path: &Path) -> Result<Project> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;

    let mut project: Project = serde_json::from_str(&raw)
        .with_context(|| format!("invalid project JSON in {}", path.display()))?;

    normalize(&mut project);

    info!(
        "loaded project {}: {} people, {} relationships",
        path.display(),
        project.people.len(),
        project.relationships.len()
    );

    Ok(project)
}

pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    let serialized =
        serde_json::to_string_pretty(project).context("failed to serialize project")?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write project file {}", path.display()))?;
    Ok(())
}

fn normalize(project: &mut Project) {
    let before = project.people.len();
    let mut seen = HashSet::new();
    project
        .people
        .retain(|person| person.id != CENTER_ID && seen.insert(person.id.clone()));

    let dropped = before - project.people.len();
    if dropped > 0 {
        warn!("dropped {dropped} people with duplicate or reserved ids");
    }
}
