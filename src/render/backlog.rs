//! Sprint backlog renderer: one row per team member aggregating every
//! subtask assigned to them (exact name match), with summed story points and
//! hours. Members with no assigned work still get a zero row.

use super::{containers, RenderContext};
use crate::surface::{Node, Surface};
use tracing::warn;

/// Fixed column order of the backlog table.
const HEADERS: [&str; 5] = ["member", "role", "tasks", "story_points", "hours"];

pub fn render(ctx: &RenderContext, surface: &mut dyn Surface) {
    if !surface.clear(containers::BACKLOG_TABLE) {
        warn!("backlog container not found");
        return;
    }

    let Some(members) = ctx.dataset.team_members.as_ref() else {
        warn!("no team members data available for backlog");
        return;
    };
    let Some(stories) = ctx.dataset.user_stories.as_ref() else {
        warn!("no user stories data available for backlog");
        return;
    };

    let hours_suffix = ctx.hours_suffix();
    let mut table = Node::table("backlog-table");

    let mut header_row = Node::row();
    for header in HEADERS {
        let key = format!("backlog.headers.{}", header);
        let label = ctx.resolver.resolve_or(&key, header);
        header_row = header_row.child(Node::header(&label).with_key(&key));
    }
    table = table.child(header_row);

    for member in members {
        let mut task_labels = Vec::new();
        let mut total_points: u32 = 0;
        let mut total_hours: f64 = 0.0;

        for subtask in stories.iter().flat_map(|story| &story.subtasks) {
            if subtask.assignee != member.name {
                continue;
            }
            let title = ctx.resolver.resolve_or(
                &format!("stories.subtasks.{}.title", subtask.id),
                &subtask.title,
            );
            task_labels.push(format!("{}: {}", subtask.id, title));
            total_points += subtask.story_points;
            total_hours += subtask.hours;
        }

        let role = ctx
            .resolver
            .resolve_or(&format!("team.roles.{}", member.role), &member.role);

        let mut tasks_cell = Node::empty_cell();
        for label in &task_labels {
            tasks_cell = tasks_cell.child(Node::text(label));
        }

        let row = Node::row()
            .child(Node::cell(&member.name))
            .child(Node::cell(&role))
            .child(tasks_cell)
            .child(Node::cell(&total_points.to_string()).with_class("story-points"))
            .child(
                Node::cell(&format!("{}{}", total_hours, hours_suffix))
                    .with_class("effort-hours"),
            );
        table = table.child(row);
    }

    surface.append(containers::BACKLOG_TABLE, table);
}
