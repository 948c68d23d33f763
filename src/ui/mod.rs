// SPDX-License-Identifier: PMPL-1.0-or-later

//! Timer-free presentation state the rendering layer drives.
//!
//! The renderer owns the clock: it calls [`Typewriter::tick`] on its own
//! schedule and forwards clicks to [`MenuState`].

mod menu;
mod typewriter;

pub use menu::{MenuState, NavTarget};
pub use typewriter::{Phase, Typewriter, TypewriterTiming};
