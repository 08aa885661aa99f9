//! Scene descriptors for [`optics2d`]: a line-based text format and a JSON format.

mod error;
mod json;
mod text;

pub use error::*;
pub use json::*;
pub use text::*;

pub use serde_json;

use optics2d::SceneObject;
use std::{fs, path::Path};

/// Reads a scene file, as JSON if its extension is `json`, as text otherwise.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Vec<SceneObject>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let objects = if path.extension().is_some_and(|ext| ext == "json") {
        deserialize_scene(&serde_json::from_str(&contents)?)?
    } else {
        parse_text(&contents)?
    };

    log::debug!("loaded {} objects from {}", objects.len(), path.display());

    if !objects.iter().any(|obj| matches!(obj, SceneObject::Ray(_))) {
        log::warn!("{} has no ray emitters, there is nothing to trace", path.display());
    }

    Ok(objects)
}
