//! Unidirectional state primitives for the screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ draw()
//!    ↑                                │
//!    └──── keys, ticks, fetches ──────┘
//! ```

/// Snapshot of everything the view needs. Cloned, compared, never shared.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a user action, a timer tick, a network result.
pub trait Intent: Send + 'static {}

/// The only place state transitions happen: `(State, Intent) -> State`.
///
/// Reducers must stay free of side effects. Anything impure, such as
/// randomness, network or clock reads, is resolved by the caller and
/// carried in the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
