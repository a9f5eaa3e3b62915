//! Deliverables, presentation points, and estimation logic renderers:
//! straightforward enumeration into fixed containers. Text in these sections
//! is already localized per dataset, so no key resolution happens here.

use super::{containers, RenderContext};
use crate::surface::{Node, Surface};
use tracing::{info, warn};

fn category_container(category: &str) -> Option<&'static str> {
    match category {
        "functional" => Some(containers::FUNCTIONAL_DELIVERABLES),
        "documentation" => Some(containers::DOCUMENTATION_DELIVERABLES),
        "process" => Some(containers::PROCESS_DELIVERABLES),
        _ => None,
    }
}

pub fn render_deliverables(ctx: &RenderContext, surface: &mut dyn Surface) {
    let Some(deliverables) = ctx.dataset.deliverables.as_ref() else {
        info!("no deliverables data available, skipping render");
        return;
    };

    for (category, items) in &deliverables.items {
        let Some(container) = category_container(category) else {
            info!("container for category {} not found", category);
            continue;
        };
        if !surface.clear(container) {
            warn!("deliverables container '{}' not found", container);
            continue;
        }

        for item in items {
            surface.append(container, Node::block("deliverable-item").with_text(item));
        }
    }
}

pub fn render_presentation(ctx: &RenderContext, surface: &mut dyn Surface) {
    let Some(presentation) = ctx.dataset.presentation.as_ref() else {
        info!("no presentation points data available, skipping render");
        return;
    };

    if !surface.clear(containers::PRESENTATION_POINTS) {
        warn!("presentation points container not found");
        return;
    }

    let mut wrapper = Node::block("presentation-points");
    for point in &presentation.points {
        wrapper = wrapper.child(
            Node::block("presentation-point")
                .child(Node::text(&point.title).with_class("point-title"))
                .child(Node::text(&point.description).with_class("point-description")),
        );
    }
    surface.append(containers::PRESENTATION_POINTS, wrapper);
}

pub fn render_estimation(ctx: &RenderContext, surface: &mut dyn Surface) {
    let Some(estimation) = ctx.dataset.estimation.as_ref() else {
        info!("no estimation logic data available, skipping render");
        return;
    };

    if !surface.clear(containers::ESTIMATION_LOGIC) {
        warn!("estimation logic container not found");
        return;
    }

    let mut wrapper = Node::block("estimation-logic");
    for method in &estimation.methods {
        wrapper = wrapper.child(
            Node::block("estimation-method")
                .child(Node::text(&method.method).with_class("method-title"))
                .child(Node::text(&method.description).with_class("method-description")),
        );
    }
    surface.append(containers::ESTIMATION_LOGIC, wrapper);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::render::test_data;
    use crate::surface::MemorySurface;

    // ==================== Deliverables Tests ====================

    #[test]
    fn test_deliverables_fill_their_category_containers() {
        let dataset = test_data::dataset();
        let ctx = RenderContext::new(&dataset);
        let mut surface = MemorySurface::with_containers(&[
            containers::FUNCTIONAL_DELIVERABLES,
            containers::DOCUMENTATION_DELIVERABLES,
            containers::PROCESS_DELIVERABLES,
        ]);

        render_deliverables(&ctx, &mut surface);

        assert_eq!(
            surface
                .container(containers::FUNCTIONAL_DELIVERABLES)
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            surface
                .container(containers::DOCUMENTATION_DELIVERABLES)
                .unwrap()
                .len(),
            1
        );
        let item = &surface.container(containers::PROCESS_DELIVERABLES).unwrap()[0];
        assert_eq!(item.text.as_deref(), Some("Retro notes"));
    }

    #[test]
    fn test_unknown_deliverable_category_is_skipped() {
        let dataset = Dataset::from_json_str(
            r#"{"deliverables": {"items": {
                "functional": ["Login flow"],
                "misc": ["Stray item"]
            }}}"#,
        )
        .unwrap();
        let ctx = RenderContext::new(&dataset);
        let mut surface =
            MemorySurface::with_containers(&[containers::FUNCTIONAL_DELIVERABLES]);

        // Must not panic on the unknown category
        render_deliverables(&ctx, &mut surface);

        assert_eq!(
            surface
                .container(containers::FUNCTIONAL_DELIVERABLES)
                .unwrap()
                .len(),
            1
        );
    }

    // ==================== Presentation Tests ====================

    #[test]
    fn test_presentation_points_render_title_and_description() {
        let dataset = test_data::dataset();
        let ctx = RenderContext::new(&dataset);
        let mut surface = MemorySurface::with_containers(&[containers::PRESENTATION_POINTS]);

        render_presentation(&ctx, &mut surface);

        let wrapper = &surface.container(containers::PRESENTATION_POINTS).unwrap()[0];
        assert_eq!(wrapper.children.len(), 1);
        assert_eq!(wrapper.children[0].children[0].text.as_deref(), Some("Demo"));
    }

    // ==================== Estimation Tests ====================

    #[test]
    fn test_estimation_methods_render() {
        let dataset = test_data::dataset();
        let ctx = RenderContext::new(&dataset);
        let mut surface = MemorySurface::with_containers(&[containers::ESTIMATION_LOGIC]);

        render_estimation(&ctx, &mut surface);

        let wrapper = &surface.container(containers::ESTIMATION_LOGIC).unwrap()[0];
        assert_eq!(
            wrapper.children[0].children[0].text.as_deref(),
            Some("Planning poker")
        );
    }

    #[test]
    fn test_missing_sections_skip_quietly() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        let ctx = RenderContext::new(&dataset);
        let mut surface = MemorySurface::with_containers(&[
            containers::PRESENTATION_POINTS,
            containers::ESTIMATION_LOGIC,
        ]);

        render_deliverables(&ctx, &mut surface);
        render_presentation(&ctx, &mut surface);
        render_estimation(&ctx, &mut surface);

        assert!(surface
            .container(containers::PRESENTATION_POINTS)
            .unwrap()
            .is_empty());
        assert!(surface
            .container(containers::ESTIMATION_LOGIC)
            .unwrap()
            .is_empty());
    }
}
