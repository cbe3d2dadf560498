//! Page Layout Files
//!
//! JSON description of a laid-out page, loaded into a [`MemoryDocument`].
//!
//! ```json
//! {
//!   "viewport_height": 800,
//!   "body": [
//!     { "tag": "nav", "classes": ["nav"], "height": 70, "children": [] },
//!     { "tag": "section", "id": "about", "top": 700, "height": 800 }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use kernel::id::NodeId;
use serde::{Deserialize, Serialize};

use crate::domain::document::Document;
use crate::error::{PageError, PageResult};
use crate::infra::memory::{ElementSpec, MemoryDocument};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport_height: f64,
    /// Initial scroll offset
    #[serde(default)]
    pub scroll_y: f64,
    #[serde(default)]
    pub body: Vec<NodeLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLayout {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeLayout>,
}

impl PageLayout {
    pub fn from_json(json: &str) -> PageResult<Self> {
        serde_json::from_str(json).map_err(|e| PageError::InvalidLayout(e.to_string()))
    }

    pub async fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "Page layout read");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> PageResult<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(PageError::InvalidLayout(format!(
                "viewport_height must be positive, got {}",
                self.viewport_height
            )));
        }
        if !self.scroll_y.is_finite() {
            return Err(PageError::InvalidLayout("scroll_y must be finite".into()));
        }

        let mut ids = HashSet::new();
        let mut stack: Vec<&NodeLayout> = self.body.iter().collect();
        while let Some(node) = stack.pop() {
            node.validate()?;
            if let Some(id) = &node.id
                && !ids.insert(id.as_str())
            {
                tracing::warn!(%id, "Duplicate element id in layout");
            }
            stack.extend(node.children.iter());
        }
        Ok(())
    }

    /// Build the document, placing the viewport at `scroll_y`
    pub fn build(&self) -> PageResult<MemoryDocument> {
        self.validate()?;
        let mut doc = MemoryDocument::new(self.viewport_height);
        let body = doc.body();
        for node in &self.body {
            append_tree(&mut doc, body, node);
        }
        doc.set_scroll_y(self.scroll_y);
        tracing::info!(elements = doc.len(), "Page layout built");
        Ok(doc)
    }
}

impl NodeLayout {
    fn validate(&self) -> PageResult<()> {
        if self.tag.is_empty() || !self.tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(PageError::InvalidLayout(format!("invalid tag name '{}'", self.tag)));
        }
        if !self.top.is_finite() || !self.height.is_finite() || self.height < 0.0 {
            return Err(PageError::InvalidLayout(format!(
                "<{}> has invalid geometry (top {}, height {})",
                self.tag, self.top, self.height
            )));
        }
        Ok(())
    }

    fn to_spec(&self) -> ElementSpec {
        let mut spec = ElementSpec::new(&self.tag).rect(self.top, self.height);
        if let Some(id) = &self.id {
            spec = spec.id(id);
        }
        for class in &self.classes {
            spec = spec.class(class);
        }
        for (name, value) in &self.attrs {
            spec = spec.attr(name, value);
        }
        spec
    }
}

fn append_tree(doc: &mut MemoryDocument, parent: NodeId, node: &NodeLayout) {
    let id = doc.append(parent, node.to_spec());
    for child in &node.children {
        append_tree(doc, id, child);
    }
}
