//! Scroll-container capability consumed by the list.
//!
//! The list never scrolls anything itself. It binds to a container that owns the
//! actual scrolling, asks it whether content overflows vertically, and keeps at
//! most one subscription to its scroll signal. Anything implementing
//! [`ScrollContainer`] can play that role; [`ScrollArea`] is a small in-memory
//! implementation modeled on a line viewport, suitable for terminal hosts and
//! for tests.
//!
//! Hosts usually want to keep driving the container after handing it to a list.
//! A shared `Arc<Mutex<C>>` implements [`ScrollContainer`] for that purpose:
//!
//! ```rust
//! use bubbletea_listbox::scroll::{ScrollArea, ScrollContainer};
//! use std::sync::{Arc, Mutex};
//!
//! let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
//! let handle: Box<dyn ScrollContainer> = Box::new(area.clone());
//! assert!(handle.has_vertical_scroller());
//! ```
//!
//! Moving the offset of a [`ScrollArea`] never runs handlers by itself. A shared
//! area is scrolled through [`SharedScrollArea`], which releases the lock before
//! the handlers run, so a handler may query the same container:
//!
//! ```rust
//! use bubbletea_listbox::scroll::{ScrollArea, ScrollContainer, SharedScrollArea};
//! use std::sync::{Arc, Mutex};
//!
//! let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
//! let watched = Arc::clone(&area);
//! let mut handle = Arc::clone(&area);
//! handle.add_scroll_listener(Arc::new(move || {
//!     let _overflow = watched.has_vertical_scroller();
//! }));
//!
//! assert!(area.scroll_down(3));
//! assert_eq!(area.lock().unwrap().y_offset(), 3);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static LAST_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

fn next_listener_id() -> ListenerId {
    ListenerId(LAST_LISTENER_ID.fetch_add(1, Ordering::SeqCst) + 1)
}

/// Callback invoked on every scroll signal of a container.
pub type ScrollHandler = Arc<dyn Fn() + Send + Sync>;

/// Handle identifying one subscription on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The narrow interface the list needs from its scroll-bearing element.
pub trait ScrollContainer: Send {
    /// Whether the content currently overflows the container vertically.
    fn has_vertical_scroller(&self) -> bool;

    /// Subscribes `handler` to the scroll signal and returns its handle.
    fn add_scroll_listener(&mut self, handler: ScrollHandler) -> ListenerId;

    /// Unsubscribes a handler. Returns false if the handle was not subscribed.
    fn remove_scroll_listener(&mut self, id: ListenerId) -> bool;

    /// Snapshot of the currently subscribed handlers.
    fn scroll_handlers(&self) -> Vec<ScrollHandler>;

    /// Emits a scroll signal to every subscribed handler.
    fn dispatch_scroll(&mut self) {
        for handler in self.scroll_handlers() {
            handler();
        }
    }
}

impl<C: ScrollContainer> ScrollContainer for Arc<Mutex<C>> {
    fn has_vertical_scroller(&self) -> bool {
        self.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .has_vertical_scroller()
    }

    fn add_scroll_listener(&mut self, handler: ScrollHandler) -> ListenerId {
        self.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .add_scroll_listener(handler)
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove_scroll_listener(id)
    }

    // The guard is dropped before the default `dispatch_scroll` runs the
    // handlers, so they may query the container.
    fn scroll_handlers(&self) -> Vec<ScrollHandler> {
        self.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .scroll_handlers()
    }
}

/// Scrolling for a [`ScrollArea`] shared with a list.
///
/// Each call moves the offset under the lock, then drops the guard and emits
/// the scroll signal if the offset changed. Returns whether it changed.
pub trait SharedScrollArea {
    /// Moves the offset to `n`, clamped to the content.
    fn set_y_offset(&self, n: usize) -> bool;

    /// Scrolls down by `n` rows.
    fn scroll_down(&self, n: usize) -> bool;

    /// Scrolls up by `n` rows.
    fn scroll_up(&self, n: usize) -> bool;
}

impl SharedScrollArea for Arc<Mutex<ScrollArea>> {
    fn set_y_offset(&self, n: usize) -> bool {
        scroll_shared(self, |area| area.set_y_offset(n))
    }

    fn scroll_down(&self, n: usize) -> bool {
        scroll_shared(self, |area| area.scroll_down(n))
    }

    fn scroll_up(&self, n: usize) -> bool {
        scroll_shared(self, |area| area.scroll_up(n))
    }
}

fn scroll_shared<F>(shared: &Mutex<ScrollArea>, scroll: F) -> bool
where
    F: FnOnce(&mut ScrollArea) -> bool,
{
    let handlers = {
        let mut area = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !scroll(&mut *area) {
            return false;
        }
        area.scroll_handlers()
    };
    for handler in handlers {
        handler();
    }
    true
}

/// An in-memory vertical scroll area measured in rows.
///
/// `height` is the number of rows the area shows, `content_height` the number of
/// rows of content inside it. The offset movers report whether `y_offset`
/// changed and leave emitting the scroll signal to the caller:
///
/// ```rust
/// use bubbletea_listbox::scroll::{ScrollArea, ScrollContainer};
///
/// let mut area = ScrollArea::new(5, 20);
/// if area.scroll_down(2) {
///     area.dispatch_scroll();
/// }
/// assert_eq!(area.y_offset(), 2);
/// ```
pub struct ScrollArea {
    height: usize,
    content_height: usize,
    y_offset: usize,
    listeners: Vec<(ListenerId, ScrollHandler)>,
}

impl fmt::Debug for ScrollArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollArea")
            .field("height", &self.height)
            .field("content_height", &self.content_height)
            .field("y_offset", &self.y_offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollArea {
    /// Creates a scroll area showing `height` rows of `content_height` rows.
    pub fn new(height: usize, content_height: usize) -> Self {
        Self {
            height,
            content_height,
            y_offset: 0,
            listeners: Vec::new(),
        }
    }

    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of content rows.
    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Index of the first visible content row.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Number of active subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Resizes the visible area, keeping the offset in range.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    /// Updates the amount of content, keeping the offset in range.
    pub fn set_content_height(&mut self, content_height: usize) {
        self.content_height = content_height;
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    fn max_y_offset(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    /// Whether the first content row is visible.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Whether the last content row is visible.
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Scroll position from 0.0 (top) to 1.0 (bottom).
    pub fn scroll_percent(&self) -> f64 {
        if self.height >= self.content_height {
            return 1.0;
        }
        let y = self.y_offset as f64;
        let h = self.height as f64;
        let t = self.content_height as f64;
        (y / (t - h)).clamp(0.0, 1.0)
    }

    /// Moves the offset to `n`, clamped to the content. Returns whether the
    /// offset changed.
    pub fn set_y_offset(&mut self, n: usize) -> bool {
        let clamped = n.min(self.max_y_offset());
        if clamped == self.y_offset {
            return false;
        }
        self.y_offset = clamped;
        true
    }

    /// Scrolls down by `n` rows.
    pub fn scroll_down(&mut self, n: usize) -> bool {
        if self.at_bottom() || n == 0 {
            return false;
        }
        self.set_y_offset(self.y_offset.saturating_add(n))
    }

    /// Scrolls up by `n` rows.
    pub fn scroll_up(&mut self, n: usize) -> bool {
        if self.at_top() || n == 0 {
            return false;
        }
        self.set_y_offset(self.y_offset.saturating_sub(n))
    }
}

impl Default for ScrollArea {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ScrollContainer for ScrollArea {
    fn has_vertical_scroller(&self) -> bool {
        self.content_height > self.height
    }

    fn add_scroll_listener(&mut self, handler: ScrollHandler) -> ListenerId {
        let id = next_listener_id();
        self.listeners.push((id, handler));
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    fn scroll_handlers(&self) -> Vec<ScrollHandler> {
        self.listeners
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect()
    }
}
