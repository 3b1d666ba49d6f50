#![deny(missing_docs)]

//! # Spec File Output
//!
//! Writes the assembled document to disk. The rendering format is chosen by
//! file extension: `.yaml` / `.yml` produce YAML, everything else produces
//! pretty-printed JSON. An existing file is overwritten.

use crate::error::{AppError, AppResult};
use crate::generator::{generate_spec_with, OpenApiInfo};
use crate::registry::RouteRegistry;
use crate::schema::JsonSchemaConverter;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::info;

/// Generates the spec for `registry` and writes it to `path` with placeholder
/// info metadata.
pub fn write_spec_file(registry: &RouteRegistry, path: impl AsRef<Path>) -> AppResult<()> {
    write_spec_file_with(registry, &OpenApiInfo::default(), path)
}

/// Generates the spec for `registry` and writes it to `path`.
pub fn write_spec_file_with(
    registry: &RouteRegistry,
    info: &OpenApiInfo,
    path: impl AsRef<Path>,
) -> AppResult<()> {
    let path = path.as_ref();
    let spec = generate_spec_with(registry, info, &JsonSchemaConverter)?;

    let rendered = if is_yaml(path) {
        serde_yaml::to_string(&spec)
            .map_err(|e| AppError::General(format!("Failed to render OpenAPI YAML: {}", e)))?
    } else {
        serde_json::to_string_pretty(&spec)
            .map_err(|e| AppError::General(format!("Failed to render OpenAPI JSON: {}", e)))?
    };

    fs::write(path, rendered)?;
    info!("OpenAPI spec written to {}", path.display());
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_dispatch() {
        assert!(is_yaml(&PathBuf::from("openapi.yaml")));
        assert!(is_yaml(&PathBuf::from("dir/openapi.yml")));
        assert!(!is_yaml(&PathBuf::from("openapi.json")));
        assert!(!is_yaml(&PathBuf::from("openapi")));
        assert!(!is_yaml(&PathBuf::from("openapi.yaml.bak")));
    }
}
