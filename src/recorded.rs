//! Recorded binding layer.
//!
//! [`RecordedBinding`] replays a captured declaration stream and composite
//! table, either assembled in code or loaded from JSON:
//!
//! ```json
//! {
//!   "handle_type": "Handle",
//!   "declarations": [
//!     { "kind": "primitive", "id": 1, "name": "int32", "size": 4, "flags": "SIGNED" },
//!     { "kind": "class", "id": 10, "name": "Widget" },
//!     { "kind": "member", "class_id": 10, "name": "get_size", "signature": 3, "types": [1] }
//!   ],
//!   "composites": [
//!     { "id": 20, "kind": "vector", "target": 1 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use binding_reflect_core::{CompositeKind, CompositeQuery, Declaration, ReflectError, TypeId};
use binding_reflect_registry::CompositeResolver;

use crate::{BindingLayer, DeclarationSink, ReflectConfig, ReflectionModel, build_model_with};

/// Errors from loading a recorded feed and building its model.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The feed file could not be read. The I/O error is the source.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The feed is not valid JSON of the expected shape.
    #[error("malformed feed")]
    Json(#[from] serde_json::Error),

    /// The feed is inconsistent.
    #[error(transparent)]
    Reflect(#[from] ReflectError),
}

/// A binding layer replaying recorded declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordedFeed", into = "RecordedFeed")]
pub struct RecordedBinding {
    handle_type: Option<String>,
    declarations: Vec<Declaration>,
    composites: FxHashMap<TypeId, CompositeQuery>,
}

impl RecordedBinding {
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder Methods ===

    /// Name the handle value type.
    pub fn with_handle_type(mut self, name: impl Into<String>) -> Self {
        self.handle_type = Some(name.into());
        self
    }

    /// Append a declaration to the stream.
    pub fn declare(mut self, decl: impl Into<Declaration>) -> Self {
        self.declarations.push(decl.into());
        self
    }

    /// Record the composite query answer for `id`.
    pub fn composite(mut self, id: u32, kind: CompositeKind, target: u32) -> Self {
        self.composites
            .insert(TypeId::new(id), CompositeQuery::new(kind, TypeId::new(target)));
        self
    }

    /// Record a composite query answer with a param type.
    pub fn composite_with_param(
        mut self,
        id: u32,
        kind: CompositeKind,
        target: u32,
        param: u32,
    ) -> Self {
        self.composites.insert(
            TypeId::new(id),
            CompositeQuery::new(kind, TypeId::new(target)).with_param(TypeId::new(param)),
        );
        self
    }

    // === Loading ===

    /// Parse a feed from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a feed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Serialize the feed as pretty JSON. Composites are ordered by id.
    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // === Query Methods ===

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn composite_count(&self) -> usize {
        self.composites.len()
    }
}

impl CompositeResolver for RecordedBinding {
    fn query_composite(&self, id: TypeId) -> Option<CompositeQuery> {
        self.composites.get(&id).copied()
    }
}

impl BindingLayer for RecordedBinding {
    fn handle_type_name(&self) -> Option<&str> {
        self.handle_type.as_deref()
    }

    fn subscribe(&self, sink: &mut dyn DeclarationSink) -> Result<(), ReflectError> {
        for decl in &self.declarations {
            sink.declare(decl)?;
        }
        Ok(())
    }
}

/// Load a recorded feed from `path` and build its model.
pub fn load_model(
    path: impl AsRef<Path>,
    config: ReflectConfig,
) -> Result<ReflectionModel, LoadError> {
    let binding = RecordedBinding::load(path)?;
    Ok(build_model_with(&binding, config)?)
}

/// Serialized shape of a [`RecordedBinding`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecordedFeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    handle_type: Option<String>,
    #[serde(default)]
    declarations: Vec<Declaration>,
    #[serde(default)]
    composites: Vec<RecordedComposite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordedComposite {
    id: TypeId,
    #[serde(flatten)]
    query: CompositeQuery,
}

impl From<RecordedFeed> for RecordedBinding {
    fn from(feed: RecordedFeed) -> Self {
        Self {
            handle_type: feed.handle_type,
            declarations: feed.declarations,
            composites: feed
                .composites
                .into_iter()
                .map(|composite| (composite.id, composite.query))
                .collect(),
        }
    }
}

impl From<RecordedBinding> for RecordedFeed {
    fn from(binding: RecordedBinding) -> Self {
        let mut composites: Vec<_> = binding
            .composites
            .into_iter()
            .map(|(id, query)| RecordedComposite { id, query })
            .collect();
        composites.sort_by_key(|composite| composite.id);
        Self {
            handle_type: binding.handle_type,
            declarations: binding.declarations,
            composites,
        }
    }
}
