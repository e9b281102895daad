//! Default templates for the well-known namespaces.

use crate::error::LoadError;
use crate::types::{ConfigTree, ConfigValue, NamespaceValues, CROWI_NAMESPACE, MARKDOWN_NAMESPACE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Supplier of default values, one function per well-known namespace.
pub trait DefaultTemplates: Send + Sync {
    /// Defaults for the core application namespace.
    fn crowi(&self) -> NamespaceValues;

    /// Defaults for the markdown namespace.
    fn markdown(&self) -> NamespaceValues;

    /// Every templated namespace as a tree.
    fn to_tree(&self) -> ConfigTree {
        let mut tree = ConfigTree::new();
        tree.set_namespace(CROWI_NAMESPACE, self.crowi());
        tree.set_namespace(MARKDOWN_NAMESPACE, self.markdown());
        tree
    }
}

/// Templates held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTemplates {
    pub crowi: NamespaceValues,
    pub markdown: NamespaceValues,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateDocument {
    #[serde(default)]
    crowi: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    markdown: BTreeMap<String, serde_json::Value>,
}

impl StaticTemplates {
    pub fn new(crowi: NamespaceValues, markdown: NamespaceValues) -> Self {
        Self { crowi, markdown }
    }

    /// Parse `{ "crowi": {...}, "markdown": {...} }`. Values must be scalars.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, LoadError> {
        let invalid = |message: String| LoadError::Template {
            path: origin.to_path_buf(),
            message,
        };

        let doc: TemplateDocument = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;

        let convert = |namespace: &str, values: BTreeMap<String, serde_json::Value>| {
            values
                .into_iter()
                .map(|(key, value)| {
                    ConfigValue::from_json(value)
                        .map(|v| (key.clone(), v))
                        .map_err(|e| invalid(format!("{}/{}: {}", namespace, key, e)))
                })
                .collect::<Result<NamespaceValues, LoadError>>()
        };

        Ok(Self {
            crowi: convert(CROWI_NAMESPACE, doc.crowi)?,
            markdown: convert(MARKDOWN_NAMESPACE, doc.markdown)?,
        })
    }

    /// Read templates from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::Template {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json, path)
    }
}

impl DefaultTemplates for StaticTemplates {
    fn crowi(&self) -> NamespaceValues {
        self.crowi.clone()
    }

    fn markdown(&self) -> NamespaceValues {
        self.markdown.clone()
    }
}
