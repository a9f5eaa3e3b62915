//! Team members renderer: one card per member, role and skills localized
//! with the raw values as fallback.

use super::{containers, RenderContext};
use crate::surface::{Node, Surface};
use tracing::warn;

pub fn render(ctx: &RenderContext, surface: &mut dyn Surface) {
    if !surface.clear(containers::TEAM_MEMBERS) {
        warn!("team members container not found");
        return;
    }

    let Some(members) = ctx.dataset.team_members.as_ref() else {
        warn!("no team members data available");
        return;
    };

    for member in members {
        let role = ctx
            .resolver
            .resolve_or(&format!("team.roles.{}", member.role), &member.role);
        let skills = ctx
            .resolver
            .resolve_or(&format!("team.skills.{}", member.skills), &member.skills);

        let card = Node::block("team-member")
            .child(Node::text(&member.name).with_class("member-name"))
            .child(Node::text(&role).with_class("member-role"))
            .child(Node::text(&skills).with_class("member-skills"));
        surface.append(containers::TEAM_MEMBERS, card);
    }
}
