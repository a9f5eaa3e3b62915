//! Language controller: owns the loaded datasets, the current language, and
//! the presentation surface. A language switch updates the toggle label,
//! re-runs the static text pass, and re-renders every section in one
//! synchronous pass, so the surface always reflects exactly one language.

use crate::diagram::DiagramOptions;
use crate::i18n::{Language, Resolver};
use crate::render::{self, RenderContext};
use crate::store::DataStore;
use crate::surface::Surface;
use tracing::{debug, warn};

pub struct PageController<S: Surface> {
    store: DataStore,
    language: Language,
    surface: S,
}

impl<S: Surface> PageController<S> {
    pub fn new(store: DataStore, language: Language, surface: S) -> Self {
        Self {
            store,
            language,
            surface,
        }
    }

    /// First full pass: toggle label, diagram subsystem (exactly once),
    /// static texts, and every section renderer.
    pub fn initialize(&mut self) {
        self.surface.set_toggle_label(self.language.toggle_label());
        self.surface.init_diagrams(&DiagramOptions::default());
        self.update_texts();
        self.render_page();
    }

    /// Switch the active language and re-render everything.
    pub fn switch_to(&mut self, language: Language) {
        debug!("switching language to '{}'", language.code());
        self.language = language;
        self.surface.set_toggle_label(language.toggle_label());
        self.update_texts();
        self.render_page();
    }

    /// Flip to the other language, as the toggle control does.
    pub fn toggle_language(&mut self) {
        self.switch_to(self.language.toggled());
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Static text pass: every marked slot gets the resolved text for its
    /// key; on a miss the slot's existing content is left untouched. Title
    /// slots additionally drive the document title.
    pub fn update_texts(&mut self) {
        let Some(dataset) = self.store.get(self.language) else {
            debug!(
                "no dataset for language '{}'; leaving static texts as they are",
                self.language.code()
            );
            return;
        };
        let resolver = Resolver::new(dataset.root());

        for slot in self.surface.marked_slots() {
            if let Some(text) = resolver.resolve(&slot.key) {
                self.surface.set_slot_text(&slot.id, text);
                if slot.is_title {
                    self.surface.set_document_title(text);
                }
            }
        }
    }

    /// One full clear-and-repopulate pass over every section.
    pub fn render_page(&mut self) {
        match self.store.get(self.language) {
            Some(dataset) => {
                let ctx = RenderContext::new(dataset);
                render::render_page(&ctx, &mut self.surface);
            }
            None => warn!(
                "no dataset loaded for language '{}'; nothing to render",
                self.language.code()
            ),
        }
    }
}
