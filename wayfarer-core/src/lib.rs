//! Core state-management runtime for wayfarer
//!
//! Centralized state with a Redux/Elm-inspired architecture:
//!
//! - **Action**: Events that describe state changes
//! - **Store**: State container driven by a pure reducer that also emits effects
//! - **Component**: UI elements that render from props and map key events to actions
//! - **EffectRuntime**: The event/action/render loop plus keyed async tasks
//!
//! # Two-phase actions
//!
//! Async work follows an intent/result pattern: an intent action (e.g.
//! `PackagesFetch`) is reduced into an [`store::Dispatched`] effect, the
//! effect handler spawns the work on the [`tasks::TaskManager`], and the task
//! completes by sending a result action (`PackagesDidLoad` / `PackagesDidError`)
//! back into the same queue.
//!
//! ```ignore
//! use wayfarer_core::prelude::*;
//!
//! fn reducer(state: &mut AppState, action: AppAction) -> Dispatched<AppEffect> {
//!     match action {
//!         AppAction::PackagesFetch => {
//!             state.packages.begin();
//!             Dispatched::changed_with(AppEffect::FetchPackages)
//!         }
//!         AppAction::PackagesDidLoad(items) => {
//!             state.packages.loaded(items);
//!             Dispatched::changed()
//!         }
//!         _ => Dispatched::unchanged(),
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod event;
pub mod poller;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::EventKind;
pub use poller::{process_raw_event, spawn_event_poller, PollerConfig, RawEvent};
pub use runtime::{DispatchStore, EffectContext, EffectRuntime, EventOutcome};
pub use store::{
    Dispatched, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware,
};
pub use tasks::{TaskKey, TaskManager};
pub use testing::{
    alt_key, buffer_to_string, char_key, ctrl_key, key, parse_key_string, RenderHarness,
    TestHarness,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::event::EventKind;
    pub use crate::poller::{process_raw_event, spawn_event_poller, PollerConfig, RawEvent};
    pub use crate::runtime::{EffectContext, EffectRuntime, EventOutcome};
    pub use crate::store::{
        Dispatched, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware,
    };
    pub use crate::tasks::{TaskKey, TaskManager};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
