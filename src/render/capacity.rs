//! Priority and capacity renderer.
//!
//! Two containers: the priority list groups stories into the three fixed
//! buckets (encounter order preserved, empty buckets omitted); the capacity
//! chart shows total/committed/buffer bars plus a per-member workload
//! breakdown. The breakdown percentage is each member's share of the total
//! committed hours, not that member's own utilization.

use super::{containers, RenderContext};
use crate::dataset::{Member, Priority, Story};
use crate::surface::{Node, Surface};
use tracing::warn;

pub fn render(ctx: &RenderContext, surface: &mut dyn Surface) {
    render_priority_list(ctx, surface);
    render_capacity_chart(ctx, surface);
}

fn render_priority_list(ctx: &RenderContext, surface: &mut dyn Surface) {
    if !surface.clear(containers::PRIORITY_LIST) {
        warn!("priority list container not found");
        return;
    }

    let Some(stories) = ctx.dataset.user_stories.as_ref() else {
        warn!("no user stories data available for priority rendering");
        return;
    };

    let stories_label = ctx.resolver.resolve_or("priority.stories_label", "Stories:");
    let mut section = Node::block("priority-section");

    for bucket in Priority::ALL {
        let ids: Vec<&str> = stories
            .iter()
            .filter(|story| story.priority == bucket)
            .map(|story| story.id.as_str())
            .collect();
        if ids.is_empty() {
            continue;
        }

        let title = ctx.resolver.resolve_or(
            &format!("priority.priorities.{}.title", bucket),
            &format!("Priority {}", bucket),
        );
        let description = ctx
            .resolver
            .resolve_or(&format!("priority.priorities.{}.description", bucket), "");

        let item = Node::block(&format!(
            "priority-item priority-{}",
            bucket.to_string().to_lowercase()
        ))
        .child(Node::text(&format!("{}: {}", bucket, title)).with_class("priority-title"))
        .child(Node::text(&description).with_class("priority-description"))
        .child(
            Node::text(&format!("{} {}", stories_label, ids.join(", ")))
                .with_class("priority-stories"),
        );
        section = section.child(item);
    }

    surface.append(containers::PRIORITY_LIST, section);
}

fn render_capacity_chart(ctx: &RenderContext, surface: &mut dyn Surface) {
    if !surface.clear(containers::CAPACITY_CHART) {
        warn!("capacity chart container not found");
        return;
    }

    let Some(metrics) = ctx.dataset.metrics else {
        warn!("no metrics data available for capacity rendering");
        return;
    };
    let Some(members) = ctx.dataset.team_members.as_ref() else {
        warn!("no team members data available for capacity rendering");
        return;
    };
    let Some(stories) = ctx.dataset.user_stories.as_ref() else {
        warn!("no user stories data available for capacity rendering");
        return;
    };

    let hours_suffix = ctx.hours_suffix();
    let commitment_pct = if metrics.team_capacity > 0.0 {
        (metrics.committed_hours / metrics.team_capacity) * 100.0
    } else {
        0.0
    };
    let buffer_hours = metrics.team_capacity - metrics.committed_hours;

    let total_label = ctx
        .resolver
        .resolve_or("priority.capacity.team_capacity", "Total Capacity");
    let committed_label = ctx
        .resolver
        .resolve_or("priority.capacity.committed_work", "Committed Work");
    let buffer_label = ctx
        .resolver
        .resolve_or("priority.capacity.buffer_time", "Buffer Time");

    let mut committed_bar = bar(
        &committed_label,
        &format!(
            "{}{} ({}%)",
            metrics.committed_hours,
            hours_suffix,
            commitment_pct.round()
        ),
        "committed",
    );

    let mut breakdown = Node::block("member-breakdown");
    for (name, hours) in member_workload(members, stories) {
        let share = if metrics.committed_hours > 0.0 {
            hours / metrics.committed_hours * 100.0
        } else {
            0.0
        };
        breakdown = breakdown.child(
            Node::text(&format!("{}: {}{} ({:.1}%)", name, hours, hours_suffix, share))
                .with_class("member-workload"),
        );
    }
    committed_bar = committed_bar.child(breakdown);

    let chart = Node::block("capacity-chart")
        .child(bar(
            &total_label,
            &format!("{}{}", metrics.team_capacity, hours_suffix),
            "total",
        ))
        .child(committed_bar)
        .child(bar(
            &buffer_label,
            &format!(
                "{}{} ({}%)",
                buffer_hours, hours_suffix, metrics.buffer_percentage
            ),
            "buffer",
        ));

    surface.append(containers::CAPACITY_CHART, chart);
}

fn bar(label: &str, value: &str, kind: &str) -> Node {
    Node::block(&format!("capacity-bar {}", kind))
        .child(Node::text(label).with_class("capacity-bar-label"))
        .child(Node::text(value).with_class("capacity-value"))
}

/// Hours assigned to each member, dataset order, zero for members with no
/// subtasks. Subtasks assigned to names that match no member are dropped,
/// exactly as the aggregation in the page has always done.
fn member_workload(members: &[Member], stories: &[Story]) -> Vec<(String, f64)> {
    members
        .iter()
        .map(|member| {
            let hours = stories
                .iter()
                .flat_map(|story| &story.subtasks)
                .filter(|subtask| subtask.assignee == member.name)
                .map(|subtask| subtask.hours)
                .sum();
            (member.name.clone(), hours)
        })
        .collect()
}
