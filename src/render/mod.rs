//! Section renderers.
//!
//! Seven independent renderers, one per page region. Each one reads the
//! active dataset through a [`RenderContext`], clears its target container(s)
//! and repopulates them from scratch (replace, not patch). A renderer that
//! finds its data section or container missing logs and aborts on its own;
//! a partial page is expected under malformed data, never a crash.

use crate::dataset::Dataset;
use crate::i18n::Resolver;
use crate::surface::Surface;

pub mod backlog;
pub mod board;
pub mod capacity;
pub mod panels;
pub mod stories;
pub mod team;

/// Stable identifiers of the page containers the renderers target.
pub mod containers {
    pub const TEAM_MEMBERS: &str = "team-members";
    pub const USER_STORIES_TABLE: &str = "user-stories-table";
    pub const PRIORITY_LIST: &str = "priority-list";
    pub const CAPACITY_CHART: &str = "capacity-chart";
    pub const BACKLOG_TABLE: &str = "backlog-table";
    pub const TODO_TASKS: &str = "todo-tasks";
    pub const PROGRESS_TASKS: &str = "progress-tasks";
    pub const DONE_TASKS: &str = "done-tasks";
    pub const FUNCTIONAL_DELIVERABLES: &str = "functional-deliverables";
    pub const DOCUMENTATION_DELIVERABLES: &str = "documentation-deliverables";
    pub const PROCESS_DELIVERABLES: &str = "process-deliverables";
    pub const PRESENTATION_POINTS: &str = "presentation-points";
    pub const ESTIMATION_LOGIC: &str = "estimation-logic";

    pub const ALL: [&str; 13] = [
        TEAM_MEMBERS,
        USER_STORIES_TABLE,
        PRIORITY_LIST,
        CAPACITY_CHART,
        BACKLOG_TABLE,
        TODO_TASKS,
        PROGRESS_TASKS,
        DONE_TASKS,
        FUNCTIONAL_DELIVERABLES,
        DOCUMENTATION_DELIVERABLES,
        PROCESS_DELIVERABLES,
        PRESENTATION_POINTS,
        ESTIMATION_LOGIC,
    ];
}

/// Everything a renderer needs for one pass: the active dataset and a
/// resolver over its tree. Renderers hold no state across calls.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub dataset: &'a Dataset,
    pub resolver: Resolver<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            resolver: Resolver::new(dataset.root()),
        }
    }

    /// Unit suffix for hour values, e.g. "16h".
    pub fn hours_suffix(&self) -> String {
        self.resolver.resolve_or("taskboard.hours_suffix", "h")
    }

    /// Unit suffix for story points, e.g. "3 SP".
    pub fn story_points_suffix(&self) -> String {
        self.resolver.resolve_or("taskboard.story_points_suffix", "SP")
    }

    /// Label prefixed to a task's assignee name.
    pub fn assignee_label(&self) -> String {
        self.resolver.resolve_or("taskboard.assignee_label", "Assignee:")
    }
}

/// One full render pass over every page section.
pub fn render_page(ctx: &RenderContext, surface: &mut dyn Surface) {
    team::render(ctx, surface);
    stories::render(ctx, surface);
    capacity::render(ctx, surface);
    backlog::render(ctx, surface);
    board::render(ctx, surface);
    panels::render_deliverables(ctx, surface);
    panels::render_presentation(ctx, surface);
    panels::render_estimation(ctx, surface);
}

/// A memory surface with every standard page container present and the
/// static heading slots marked with their i18n keys.
pub fn standard_surface() -> crate::surface::MemorySurface {
    let mut surface = crate::surface::MemorySurface::with_containers(&containers::ALL);
    surface.mark_title("page-title", "page.title");
    surface.mark("team-title", "team.title");
    surface.mark("stories-title", "stories.title");
    surface.mark("priority-title", "priority.title");
    surface.mark("backlog-title", "backlog.title");
    surface.mark("taskboard-title", "taskboard.title");
    surface.mark("deliverables-title", "deliverables.title");
    surface.mark("presentation-title", "presentation.title");
    surface.mark("estimation-title", "estimation.title");
    surface
}
