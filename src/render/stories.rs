//! User stories renderer: one table with a header row, one row per story and
//! one indented row per subtask. Subtask rows share the column structure but
//! carry a class marker so the page can tint them.

use super::{containers, RenderContext};
use crate::surface::{Node, Surface};
use tracing::warn;

/// Fixed column order of the story table.
const HEADERS: [&str; 6] = [
    "id",
    "title",
    "description",
    "story_points",
    "hours",
    "priority",
];

pub fn render(ctx: &RenderContext, surface: &mut dyn Surface) {
    if !surface.clear(containers::USER_STORIES_TABLE) {
        warn!("user stories container not found");
        return;
    }

    let Some(stories) = ctx.dataset.user_stories.as_ref() else {
        warn!("no user stories data available");
        return;
    };

    let hours_suffix = ctx.hours_suffix();
    let mut table = Node::table("story-table");

    let mut header_row = Node::row();
    for header in HEADERS {
        let key = format!("stories.headers.{}", header);
        let label = ctx.resolver.resolve_or(&key, header);
        header_row = header_row.child(Node::header(&label).with_key(&key));
    }
    table = table.child(header_row);

    for story in stories {
        let title = ctx
            .resolver
            .resolve_or(&format!("stories.items.{}.title", story.id), &story.title);
        let description = ctx.resolver.resolve_or(
            &format!("stories.items.{}.description", story.id),
            &story.description,
        );

        let story_row = Node::row()
            .child(Node::cell(&story.id))
            .child(Node::cell(&title))
            .child(Node::cell(&description))
            .child(Node::cell(&story.story_points.to_string()).with_class("story-points"))
            .child(
                Node::cell(&format!("{}{}", story.total_hours, hours_suffix))
                    .with_class("effort-hours"),
            )
            .child(Node::cell(&story.priority.to_string()));
        table = table.child(story_row);

        for subtask in &story.subtasks {
            let subtask_title = ctx.resolver.resolve_or(
                &format!("stories.subtasks.{}.title", subtask.id),
                &subtask.title,
            );
            let subtask_description = ctx.resolver.resolve_or(
                &format!("stories.subtasks.{}.description", subtask.id),
                &subtask.description,
            );
            let category = ctx.resolver.resolve_or(
                &format!("stories.categories.{}", subtask.category),
                &subtask.category,
            );

            let subtask_row = Node::row()
                .with_class("subtask-row")
                .child(Node::cell(&subtask.id))
                .child(Node::cell(&subtask_title))
                .child(Node::cell(&subtask_description))
                .child(
                    Node::cell(&subtask.story_points.to_string()).with_class("story-points"),
                )
                .child(
                    Node::cell(&format!("{}{}", subtask.hours, hours_suffix))
                        .with_class("effort-hours"),
                )
                .child(Node::cell(&format!("{} ({})", subtask.assignee, category)));
            table = table.child(subtask_row);
        }
    }

    surface.append(containers::USER_STORIES_TABLE, table);
}
