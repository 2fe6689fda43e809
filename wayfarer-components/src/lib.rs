//! Form and list widgets for Wayfarer
//!
//! Components implement the `Component<A>` trait from `wayfarer-core` and emit
//! actions via callback functions passed through Props.
//!
//! # Components
//!
//! - [`SelectList`] - Scrollable list with vim-style navigation
//! - [`TextInput`] - Labeled single-line input with inline validation errors
//! - [`render_notice`] - Centered success/error overlay
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_components::{SelectList, SelectListProps};
//!
//! // In your render function:
//! let mut list = SelectList::default();
//! list.render(frame, area, SelectListProps {
//!     items: &rows,
//!     title: "Packages",
//!     selected: state.packages_selected,
//!     is_focused: state.focus == Focus::List,
//!     on_select: AppAction::PackageSelect,
//!     on_activate: AppAction::PackageOpen,
//! });
//! ```

mod modal;
mod select_list;
mod text_input;

pub use modal::{centered_rect, render_notice, NoticeKind};
pub use select_list::{SelectList, SelectListProps};
pub use text_input::{TextInput, TextInputProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        centered_rect, render_notice, NoticeKind, SelectList, SelectListProps, TextInput,
        TextInputProps,
    };
}
