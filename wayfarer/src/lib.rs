//! WanderLux travel agency in the terminal
//!
//! A catalog-and-booking client over the WanderLux HTTP API: browse and
//! filter packages, walk the three-step booking wizard, send enquiries,
//! read the blog, flip through the gallery and download PDF tickets for
//! past bookings.
//!
//! State management follows the `wayfarer-core` pattern: a single
//! [`state::AppState`], a pure [`reducer::reducer`] and declarative
//! [`effect::Effect`]s executed by the runtime in `main`.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod filters;
pub mod model;
pub mod reducer;
pub mod state;
pub mod ticket;
pub mod validate;
pub mod wizard;

pub use action::Action;
pub use effect::Effect;
pub use reducer::reducer;
pub use state::{AppState, Screen};
