//! Rendered window, load-more signalling and scroll-container integration.
//!
//! The rendered window is a prefix of the master set. By default it covers
//! every item; with [`ListConfig::render_page_size`](super::ListConfig) it starts
//! smaller and the host grows it with [`ListModel::render_more`]. The list never
//! pages on its own: it only reports, through
//! [`ListModel::on_last_item_rendered`], that the end of the window was reached
//! while more data may exist.
//!
//! The scroll container is bound separately from the listener. At most one
//! listener subscription is live at a time, and removing it unregisters it from
//! the container while keeping the handler on record.

use super::types::Item;
use super::ListModel;
use crate::scroll::{ScrollContainer, ScrollHandler};
use log::debug;
use std::sync::Arc;

impl<I: Item> ListModel<I> {
    /// The rendered window of the master set.
    pub fn rendered_actions(&self) -> &[I] {
        &self.actions[..self.rendered_len]
    }

    /// Whether items past the rendered window exist.
    pub fn has_more_to_render(&self) -> bool {
        self.rendered_len < self.actions.len()
    }

    /// Grows the rendered window by up to `count` items and returns how many
    /// were added.
    pub fn render_more(&mut self, count: usize) -> usize {
        let grown = self
            .rendered_len
            .saturating_add(count)
            .min(self.actions.len());
        let added = grown - self.rendered_len;
        self.rendered_len = grown;
        added
    }

    pub(super) fn reset_render_window(&mut self) {
        self.rendered_len = match self.config.render_page_size {
            Some(page) => page.min(self.actions.len()),
            None => self.actions.len(),
        };
    }

    /// Whether the host has delivered every item.
    pub fn is_all_data_loaded(&self) -> bool {
        self.is_all_data_loaded
    }

    /// Marks whether more data may still arrive.
    pub fn set_is_all_data_loaded(&mut self, loaded: bool) {
        self.is_all_data_loaded = loaded;
    }

    /// Whether the container overflows while more data may be paged in.
    pub fn has_vertical_scroller(&self) -> bool {
        self.has_vertical_scroller
    }

    /// Overrides the vertical scroller flag.
    pub fn set_has_vertical_scroller(&mut self, value: bool) {
        self.has_vertical_scroller = value;
    }

    /// Placeholder text for an empty list.
    pub fn empty_message(&self) -> &str {
        if self.is_all_data_loaded {
            &self.config.empty_message
        } else {
            &self.config.loading_message
        }
    }

    /// Called by the rendering layer when `item` scrolled into view.
    ///
    /// If `item` is the last rendered item and not all data is loaded, the
    /// vertical scroller flag takes the bound container's overflow state and
    /// `true` is returned so the caller can trigger its loader, whether or not
    /// the container overflows. Otherwise nothing changes.
    pub fn on_last_item_rendered(&mut self, item: &I) -> bool {
        self.last_item_reached(item.id())
    }

    pub(super) fn last_item_reached(&mut self, id: &str) -> bool {
        let is_last = self
            .rendered_actions()
            .last()
            .is_some_and(|last| last.id() == id);
        if !is_last || self.is_all_data_loaded {
            return false;
        }
        self.has_vertical_scroller = self
            .scrollable_container
            .as_ref()
            .is_some_and(|container| container.has_vertical_scroller());
        debug!(
            "list: last rendered item {id} reached, more data wanted (overflow: {})",
            self.has_vertical_scroller
        );
        true
    }

    /// Binds the scroll-bearing container.
    ///
    /// A live listener moves from the previous container to the new one; a
    /// recorded but inactive handler stays inactive. A handler added before any
    /// container was bound is subscribed now.
    pub fn init_list_container(&mut self, container: Box<dyn ScrollContainer>) {
        let was_active = self.scroll_subscription.is_some();
        let pending = self.scrollable_container.is_none() && self.scroll_handler.is_some();
        self.remove_scroll_event_listener();

        debug!(
            "list: container bound (overflow: {})",
            container.has_vertical_scroller()
        );
        self.scrollable_container = Some(container);
        if was_active || pending {
            self.subscribe_recorded_handler();
        }
    }

    /// The bound container, if any.
    pub fn scrollable_container(&self) -> Option<&dyn ScrollContainer> {
        self.scrollable_container.as_deref()
    }

    /// Mutable access to the bound container.
    pub fn scrollable_container_mut(
        &mut self,
    ) -> Option<&mut (dyn ScrollContainer + 'static)> {
        self.scrollable_container.as_deref_mut()
    }

    /// Unbinds the container, unsubscribing a live listener first.
    pub fn detach_list_container(&mut self) -> Option<Box<dyn ScrollContainer>> {
        self.remove_scroll_event_listener();
        self.scrollable_container.take()
    }

    /// Installs `handler` as the one scroll listener.
    ///
    /// A live listener is unsubscribed first, so a handler never fires twice for
    /// one scroll signal. Without a bound container the handler is recorded and
    /// subscribed once a container is bound.
    pub fn add_scroll_event_listener<F>(&mut self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.remove_scroll_event_listener();
        let handler: ScrollHandler = Arc::new(handler);
        self.scroll_handler = Some(handler);
        self.subscribe_recorded_handler();
    }

    /// Unsubscribes the live listener. The handler stays recorded.
    ///
    /// Calling this without a live listener does nothing.
    pub fn remove_scroll_event_listener(&mut self) {
        let Some(id) = self.scroll_subscription.take() else {
            return;
        };
        if let Some(container) = self.scrollable_container.as_mut() {
            container.remove_scroll_listener(id);
            debug!("list: scroll listener removed");
        }
    }

    /// Whether a scroll handler was ever configured.
    pub fn has_scroll_handler(&self) -> bool {
        self.scroll_handler.is_some()
    }

    /// Whether the scroll handler is currently subscribed to a container.
    pub fn is_scroll_listener_active(&self) -> bool {
        self.scroll_subscription.is_some()
    }

    /// Releases the scroll listener and the container.
    ///
    /// Also runs when the list is dropped.
    pub fn dispose(&mut self) {
        self.detach_list_container();
    }

    fn subscribe_recorded_handler(&mut self) {
        let (Some(container), Some(handler)) =
            (self.scrollable_container.as_mut(), self.scroll_handler.as_ref())
        else {
            return;
        };
        self.scroll_subscription = Some(container.add_scroll_listener(Arc::clone(handler)));
        debug!("list: scroll listener added");
    }
}

impl<I: Item> Drop for ListModel<I> {
    fn drop(&mut self) {
        self.dispose();
    }
}
