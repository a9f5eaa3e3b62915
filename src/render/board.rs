//! Task board renderer: three fixed status columns. A task's title resolves
//! through a fallback chain — board-task entry, then subtask entry, then the
//! raw title — first hit wins.

use super::{containers, RenderContext};
use crate::dataset::BoardTask;
use crate::surface::{Node, Surface};
use tracing::warn;

fn column_container(status: &str) -> &'static str {
    match status {
        "todo" => containers::TODO_TASKS,
        "in_progress" => containers::PROGRESS_TASKS,
        _ => containers::DONE_TASKS,
    }
}

pub fn render(ctx: &RenderContext, surface: &mut dyn Surface) {
    let Some(tasks) = ctx.dataset.tasks.as_ref() else {
        warn!("no tasks data available");
        return;
    };

    let assignee_label = ctx.assignee_label();
    let sp_suffix = ctx.story_points_suffix();
    let hours_suffix = ctx.hours_suffix();

    for (status, column_tasks) in tasks.columns() {
        let container = column_container(status);
        if !surface.clear(container) {
            warn!("task board column '{}' not found", container);
            continue;
        }

        for task in column_tasks {
            surface.append(
                container,
                task_card(ctx, task, &assignee_label, &sp_suffix, &hours_suffix),
            );
        }
    }
}

fn task_card(
    ctx: &RenderContext,
    task: &BoardTask,
    assignee_label: &str,
    sp_suffix: &str,
    hours_suffix: &str,
) -> Node {
    let board_key = format!("stories.board_tasks.{}.title", task.id);
    let subtask_key = format!("stories.subtasks.{}.title", task.id);
    let title = ctx
        .resolver
        .resolve_first_or(&[&board_key, &subtask_key], &task.title);

    Node::block("task-item")
        .child(Node::text(&title).with_class("task-title"))
        .child(
            Node::text(&format!("{} {}", assignee_label, task.assignee))
                .with_class("task-assignee"),
        )
        .child(
            Node::block("task-meta")
                .child(
                    Node::text(&format!("{} {}", task.story_points, sp_suffix))
                        .with_class("story-points"),
                )
                .child(
                    Node::text(&format!("{}{}", task.hours, hours_suffix))
                        .with_class("effort-hours"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::render::test_data;
    use crate::surface::MemorySurface;

    const COLUMNS: [&str; 3] = [
        containers::TODO_TASKS,
        containers::PROGRESS_TASKS,
        containers::DONE_TASKS,
    ];

    fn rendered(dataset: &Dataset) -> MemorySurface {
        let ctx = RenderContext::new(dataset);
        let mut surface = MemorySurface::with_containers(&COLUMNS);
        render(&ctx, &mut surface);
        surface
    }

    #[test]
    fn test_every_task_lands_in_exactly_one_column() {
        let dataset = test_data::dataset();
        let surface = rendered(&dataset);

        let total: usize = COLUMNS
            .iter()
            .map(|id| surface.container(id).unwrap().len())
            .sum();
        assert_eq!(total, dataset.tasks.as_ref().unwrap().total());
        assert_eq!(surface.container(containers::TODO_TASKS).unwrap().len(), 1);
        assert_eq!(
            surface.container(containers::PROGRESS_TASKS).unwrap().len(),
            1
        );
        assert_eq!(surface.container(containers::DONE_TASKS).unwrap().len(), 1);
    }

    #[test]
    fn test_title_fallback_chain_prefers_board_task_entry() {
        let dataset = test_data::dataset();
        let surface = rendered(&dataset);

        // ST-002 has both a board_tasks entry and a subtasks entry;
        // the board_tasks one wins.
        let card = &surface.container(containers::PROGRESS_TASKS).unwrap()[0];
        assert_eq!(
            card.children[0].text.as_deref(),
            Some("Session API (board)")
        );
    }

    #[test]
    fn test_title_falls_back_to_subtask_entry() {
        let dataset = test_data::dataset();
        let surface = rendered(&dataset);

        // ST-001 has no board_tasks entry but a subtasks entry
        let card = &surface.container(containers::TODO_TASKS).unwrap()[0];
        assert_eq!(card.children[0].text.as_deref(), Some("Sign-in form"));
    }

    #[test]
    fn test_title_falls_back_to_raw_title() {
        let dataset = Dataset::from_json_str(
            r#"{"tasks": {"todo": [
                {"id": "ST-999", "title": "Raw only", "assignee": "Alice",
                 "story_points": 1, "hours": 2}
            ]}}"#,
        )
        .unwrap();
        let surface = rendered(&dataset);

        let card = &surface.container(containers::TODO_TASKS).unwrap()[0];
        assert_eq!(card.children[0].text.as_deref(), Some("Raw only"));
    }

    #[test]
    fn test_card_meta_line() {
        let dataset = test_data::dataset();
        let surface = rendered(&dataset);

        let card = &surface.container(containers::TODO_TASKS).unwrap()[0];
        assert_eq!(
            card.children[1].text.as_deref(),
            Some("Assignee: Alice")
        );
        let meta = &card.children[2];
        assert_eq!(meta.children[0].text.as_deref(), Some("2 SP"));
        assert_eq!(meta.children[1].text.as_deref(), Some("6h"));
    }

    #[test]
    fn test_missing_column_container_skips_only_that_column() {
        let dataset = test_data::dataset();
        let ctx = RenderContext::new(&dataset);
        let mut surface =
            MemorySurface::with_containers(&[containers::TODO_TASKS, containers::DONE_TASKS]);

        render(&ctx, &mut surface);

        assert_eq!(surface.container(containers::TODO_TASKS).unwrap().len(), 1);
        assert_eq!(surface.container(containers::DONE_TASKS).unwrap().len(), 1);
        assert!(surface.container(containers::PROGRESS_TASKS).is_none());
    }

    #[test]
    fn test_missing_tasks_data_leaves_columns_untouched() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        let surface = rendered(&dataset);

        for id in COLUMNS {
            assert!(surface.container(id).unwrap().is_empty());
        }
    }
}
