//! Helpers for rendering components and clicking through them in tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};

pub(crate) fn render_to_string(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A mounted dom that reports the click listeners each render creates, in
/// document order.
pub(crate) struct Harness {
    dom: VirtualDom,
}

impl Harness {
    pub(crate) fn mount(app: fn() -> Element) -> (Self, Vec<ElementId>) {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let listeners = click_listeners(dom.rebuild_to_vec());
        (Self { dom }, listeners)
    }

    /// Click `id` and re-render, returning the click listeners that appeared.
    pub(crate) fn click(&mut self, id: ElementId) -> Vec<ElementId> {
        let event = dioxus_core::Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event("click", event, id);
        click_listeners(self.dom.render_immediate_to_vec())
    }

    pub(crate) fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

fn click_listeners(mutations: Mutations) -> Vec<ElementId> {
    mutations
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(id),
            _ => None,
        })
        .collect()
}
