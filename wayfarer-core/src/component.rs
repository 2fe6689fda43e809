//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component: props in, actions out.
///
/// Rules:
/// 1. Props carry ALL read-only data needed to render, borrowed from state.
/// 2. `handle_event` returns actions; it never mutates external state.
/// 3. `render` is a pure function of props, apart from internal view state
///    such as a scroll offset or cursor position kept in `&mut self`.
///
/// Focus is passed through props rather than event context, which keeps
/// components reusable between screens.
pub trait Component<A> {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = A>`: `None` (most common),
    /// `Some(action)`, or a `Vec` of actions. The default implementation
    /// ignores events, for render-only components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component into the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
