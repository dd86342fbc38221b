//! Styling for list components.
//!
//! Each item is drawn with the style matching its [`ItemState`](super::ItemState),
//! in the same precedence the class string uses: focused, then selected, then
//! disabled, then normal. The filter line and the placeholder have their own
//! styles.
//!
//! ```rust
//! use bubbletea_listbox::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.focused_item = Style::new().bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Marker drawn in front of the focused item.
pub const FOCUS_MARKER: &str = "›";

/// Visual styling for the list.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Prompt in front of the filter text.
    pub filter_prompt: Style,
    /// The filter text itself.
    pub filter_text: Style,
    /// Items with no particular state.
    pub normal_item: Style,
    /// The keyboard-focused item.
    pub focused_item: Style,
    /// The selected item.
    pub selected_item: Style,
    /// Disabled items.
    pub disabled_item: Style,
    /// Placeholder shown when nothing is visible.
    pub placeholder: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_text: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            normal_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding(0, 0, 0, 2),
            focused_item: Style::new()
                .foreground(Color::from("#EE6FF8"))
                .padding(0, 0, 0, 0),
            selected_item: Style::new()
                .foreground(Color::from("#AD58B4"))
                .bold(true)
                .padding(0, 0, 0, 2),
            disabled_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#9B9B9B",
                    Dark: "#5C5C5C",
                })
                .padding(0, 0, 0, 2),
            placeholder: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
