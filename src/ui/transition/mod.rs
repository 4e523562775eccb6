//! Fade-out → swap → fade-in sequencing for the quote card.
//!
//! # Architecture
//!
//! - `state.rs` - Screen state and the transition phase enum
//!   (Idle → FadingOut → Swapping → FadingIn → Idle)
//! - `intent.rs` - Cycle start, fetch resolution, frame tick
//! - `reducer.rs` - Pure state transitions; all timing comes from intents

mod intent;
mod reducer;
mod state;

pub use intent::{SwapPayload, TransitionIntent};
pub use reducer::TransitionReducer;
pub use state::{
    QuoteScreenState, TransitionPhase, FADE_IN_DURATION, FADE_OUT_DURATION, OFFSCREEN_LEFT,
    SWAP_DELAY,
};
