//! Sprint plan dataset structures.
//!
//! Each supported language has its own dataset document. The document doubles
//! as the i18n tree: the typed fields below are parsed out of it, and the raw
//! `serde_json::Value` is kept alongside so dotted i18n keys can be resolved
//! against the same tree (see `i18n::Resolver`).

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

/// Story priority bucket. The priority list renders these in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl Priority {
    /// Fixed bucket order for the priority list.
    pub const ALL: [Priority; 3] = [Priority::P1, Priority::P2, Priority::P3];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::P1 => write!(f, "P1"),
            Priority::P2 => write!(f, "P2"),
            Priority::P3 => write!(f, "P3"),
        }
    }
}

/// Team member. The name is display text and never localized; role and skills
/// are keys into the dataset's `team.roles` / `team.skills` i18n sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub skills: String,
}

/// Subtask of a user story.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub story_points: u32,
    pub hours: f64,
    pub assignee: String,
    pub category: String,
}

/// User story. Title and description are raw fallback text; localized
/// variants live under `user_stories.stories.<id>` in the i18n tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    pub story_points: u32,
    pub total_hours: f64,
    pub priority: Priority,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Task board item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardTask {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub story_points: u32,
    pub hours: f64,
}

/// The three fixed task board columns. Unknown status keys in the data are
/// dropped at deserialization, so the partition is total by construction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskBoard {
    #[serde(default)]
    pub todo: Vec<BoardTask>,
    #[serde(default)]
    pub in_progress: Vec<BoardTask>,
    #[serde(default)]
    pub done: Vec<BoardTask>,
}

impl TaskBoard {
    /// Columns in board order, paired with their status key.
    pub fn columns(&self) -> [(&'static str, &[BoardTask]); 3] {
        [
            ("todo", self.todo.as_slice()),
            ("in_progress", self.in_progress.as_slice()),
            ("done", self.done.as_slice()),
        ]
    }

    /// Total task count across all three columns.
    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }
}

/// Sprint capacity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Metrics {
    pub team_capacity: f64,
    pub committed_hours: f64,
    pub buffer_percentage: f64,
}

/// Deliverables grouped by category. Categories map onto fixed containers;
/// unknown categories are skipped by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Deliverables {
    #[serde(default)]
    pub items: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresentationPoint {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Presentation {
    #[serde(default)]
    pub points: Vec<PresentationPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EstimationMethod {
    pub method: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Estimation {
    #[serde(default)]
    pub methods: Vec<EstimationMethod>,
}

/// Typed view of a dataset document. Every section is optional so a dataset
/// missing one section still loads; the affected renderers degrade on their
/// own (the page renders section by section, never all-or-nothing).
#[derive(Debug, Clone, Default, Deserialize)]
struct Sections {
    #[serde(default)]
    team_members: Option<Vec<Member>>,
    #[serde(default)]
    user_stories: Option<Vec<Story>>,
    #[serde(default)]
    tasks: Option<TaskBoard>,
    #[serde(default)]
    metrics: Option<Metrics>,
    #[serde(default)]
    deliverables: Option<Deliverables>,
    #[serde(default)]
    presentation: Option<Presentation>,
    #[serde(default)]
    estimation: Option<Estimation>,
}

/// A complete per-language dataset: the typed sections plus the raw document
/// tree used for i18n key resolution. Read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    root: Value,
    pub team_members: Option<Vec<Member>>,
    pub user_stories: Option<Vec<Story>>,
    pub tasks: Option<TaskBoard>,
    pub metrics: Option<Metrics>,
    pub deliverables: Option<Deliverables>,
    pub presentation: Option<Presentation>,
    pub estimation: Option<Estimation>,
}

impl Dataset {
    /// Build a dataset from a parsed JSON document.
    pub fn from_value(root: Value) -> Result<Self, serde_json::Error> {
        let sections: Sections = serde_json::from_value(root.clone())?;
        Ok(Self {
            root,
            team_members: sections.team_members,
            user_stories: sections.user_stories,
            tasks: sections.tasks,
            metrics: sections.metrics,
            deliverables: sections.deliverables,
            presentation: sections.presentation,
            estimation: sections.estimation,
        })
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(root)
    }

    /// Load a dataset from a JSON file on disk (used by the offline preview).
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Raw document tree, for i18n key resolution.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Sum of all subtask hours across all stories. The capacity chart's
    /// per-member breakdown must conserve this total.
    pub fn subtask_hours_total(&self) -> f64 {
        self.user_stories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .flat_map(|s| &s.subtasks)
            .map(|st| st.hours)
            .sum()
    }
}
