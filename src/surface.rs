//! Presentation surface abstraction.
//!
//! Renderers never touch a real page. They build [`Node`] subtrees and hand
//! them to a [`Surface`], which addresses containers by stable identifier and
//! tolerates absent ones. [`MemorySurface`] is the in-memory implementation
//! used by the binaries and by tests as a recorder.

use crate::diagram::DiagramOptions;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Kind of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Generic block element (member card, task card, priority item, ...)
    Block,
    Table,
    Row,
    /// Table header cell
    Header,
    /// Table data cell
    Cell,
    /// Plain text line
    Text,
}

/// One node of a rendered subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Presentation hook (the page styles off these, this crate never does)
    pub class: Option<String>,
    pub text: Option<String>,
    /// Header cells keep their i18n key so a text-update pass can find them
    pub i18n_key: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            class: None,
            text: None,
            i18n_key: None,
            children: Vec::new(),
        }
    }

    pub fn block(class: &str) -> Self {
        Node::new(NodeKind::Block).with_class(class)
    }

    pub fn table(class: &str) -> Self {
        Node::new(NodeKind::Table).with_class(class)
    }

    pub fn row() -> Self {
        Node::new(NodeKind::Row)
    }

    pub fn header(text: &str) -> Self {
        Node::new(NodeKind::Header).with_text(text)
    }

    pub fn cell(text: &str) -> Self {
        Node::new(NodeKind::Cell).with_text(text)
    }

    /// A cell holding child nodes instead of its own text.
    pub fn empty_cell() -> Self {
        Node::new(NodeKind::Cell)
    }

    pub fn text(text: &str) -> Self {
        Node::new(NodeKind::Text).with_text(text)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.i18n_key = Some(key.to_string());
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    fn write_text(&self, indent: usize, out: &mut String) {
        if let Some(text) = &self.text {
            let _ = writeln!(out, "{}{}", "  ".repeat(indent), text);
        }
        for node in &self.children {
            node.write_text(indent + 1, out);
        }
    }
}

/// An element whose text is driven by an i18n key (the page marks these with
/// a localization attribute; here they are registered up front).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedSlot {
    pub id: String,
    pub key: String,
    /// Title slots additionally drive the document title
    pub is_title: bool,
}

/// Rendering target addressed by stable container identifiers.
///
/// `clear` and `append` return `false` when the container is absent; callers
/// log and carry on — a missing container only silences its own section.
pub trait Surface {
    fn clear(&mut self, container: &str) -> bool;
    fn append(&mut self, container: &str, node: Node) -> bool;

    /// All elements marked with a localization key.
    fn marked_slots(&self) -> Vec<MarkedSlot>;
    fn set_slot_text(&mut self, slot: &str, text: &str);
    fn set_document_title(&mut self, text: &str);

    /// Label of the language toggle control.
    fn set_toggle_label(&mut self, text: &str);

    /// One-time diagram subsystem initialization.
    fn init_diagrams(&mut self, options: &DiagramOptions);
}

/// In-memory surface: records everything the renderers produce.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    containers: BTreeMap<String, Vec<Node>>,
    marked: Vec<MarkedSlot>,
    slot_texts: BTreeMap<String, String>,
    document_title: Option<String>,
    toggle_label: Option<String>,
    diagram_inits: Vec<DiagramOptions>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with the given containers present (and empty).
    pub fn with_containers(ids: &[&str]) -> Self {
        let mut surface = Self::new();
        for id in ids {
            surface.add_container(id);
        }
        surface
    }

    pub fn add_container(&mut self, id: &str) {
        self.containers.entry(id.to_string()).or_default();
    }

    /// Register an element whose text is driven by an i18n key.
    pub fn mark(&mut self, id: &str, key: &str) {
        self.marked.push(MarkedSlot {
            id: id.to_string(),
            key: key.to_string(),
            is_title: false,
        });
    }

    /// Register the title element; it also drives the document title.
    pub fn mark_title(&mut self, id: &str, key: &str) {
        self.marked.push(MarkedSlot {
            id: id.to_string(),
            key: key.to_string(),
            is_title: true,
        });
    }

    pub fn container(&self, id: &str) -> Option<&[Node]> {
        self.containers.get(id).map(|nodes| nodes.as_slice())
    }

    pub fn slot_text(&self, id: &str) -> Option<&str> {
        self.slot_texts.get(id).map(|s| s.as_str())
    }

    pub fn document_title(&self) -> Option<&str> {
        self.document_title.as_deref()
    }

    pub fn toggle_label(&self) -> Option<&str> {
        self.toggle_label.as_deref()
    }

    pub fn diagram_init_count(&self) -> usize {
        self.diagram_inits.len()
    }

    /// Plain-text dump of the whole surface, for the preview binaries.
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.document_title {
            let _ = writeln!(out, "=== {} ===", title);
        }
        for slot in &self.marked {
            if let Some(text) = self.slot_texts.get(&slot.id) {
                if !slot.is_title {
                    let _ = writeln!(out, "[{}] {}", slot.id, text);
                }
            }
        }
        for (id, nodes) in &self.containers {
            let _ = writeln!(out, "#{}", id);
            for node in nodes {
                node.write_text(1, &mut out);
            }
        }
        out
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self, container: &str) -> bool {
        match self.containers.get_mut(container) {
            Some(nodes) => {
                nodes.clear();
                true
            }
            None => false,
        }
    }

    fn append(&mut self, container: &str, node: Node) -> bool {
        match self.containers.get_mut(container) {
            Some(nodes) => {
                nodes.push(node);
                true
            }
            None => false,
        }
    }

    fn marked_slots(&self) -> Vec<MarkedSlot> {
        self.marked.clone()
    }

    fn set_slot_text(&mut self, slot: &str, text: &str) {
        self.slot_texts.insert(slot.to_string(), text.to_string());
    }

    fn set_document_title(&mut self, text: &str) {
        self.document_title = Some(text.to_string());
    }

    fn set_toggle_label(&mut self, text: &str) {
        self.toggle_label = Some(text.to_string());
    }

    fn init_diagrams(&mut self, options: &DiagramOptions) {
        self.diagram_inits.push(options.clone());
    }
}
