// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ManifestLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!        |
//!        v
//!    build()
//!      each source -> config::Config -> ManifestFile
//!      bindings concatenated in source order
//!      last non-empty `name` wins
//!        |
//!        v
//!   ManifestModel (duplicate attributes rejected)
//! ```

use std::path::{Path, PathBuf};

use config::{File, FileFormat};
use tracing::debug;

use super::{ManifestFile, ManifestModel};
use crate::error::ManifestError;

enum ManifestSource {
    File { path: PathBuf, required: bool },
    Str(String),
}

/// Builder for loading a manifest model from one or more TOML sources.
#[derive(Default)]
pub struct ManifestLoader {
    sources: Vec<ManifestSource>,
    files: Vec<(String, PathBuf)>,
}

impl ManifestLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML manifest file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        self.files.push(("file".to_string(), path.clone()));
        self.sources.push(ManifestSource::File {
            path,
            required: true,
        });
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            self.files.push(("optional".to_string(), path.clone()));
        }
        self.sources.push(ManifestSource::File {
            path,
            required: false,
        });
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self.sources.push(ManifestSource::Str(content.to_string()));
        self
    }

    /// Builds the model from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required manifest file is missing.
    /// - A manifest has invalid TOML syntax or an unknown field or type.
    /// - An attribute is declared more than once across all sources.
    pub fn build(self) -> Result<ManifestModel, ManifestError> {
        let mut name = None;
        let mut bindings = Vec::new();

        for source in &self.sources {
            let builder = config::Config::builder();
            let builder = match source {
                ManifestSource::File { path, required } => builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(*required),
                ),
                ManifestSource::Str(content) => {
                    builder.add_source(File::from_str(content, FileFormat::Toml))
                }
            };
            let file: ManifestFile = builder.build()?.try_deserialize()?;

            if let Some(n) = file.name.filter(|n| !n.is_empty()) {
                name = Some(n);
            }
            bindings.extend(file.bindings);
        }

        let model = ManifestModel::new(name.unwrap_or_else(|| "manifest".to_string()), bindings)?;
        debug!(
            model = model.name(),
            bindings = model.len(),
            sources = self.files.len(),
            "loaded manifest"
        );
        Ok(model)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}
