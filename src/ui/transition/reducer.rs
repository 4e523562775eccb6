use std::time::Instant;

use crate::ui::animation::{AnimatedValue, Easing};
use crate::ui::mvi::Reducer;

use super::intent::TransitionIntent;
use super::state::{
    QuoteScreenState, TransitionPhase, FADE_IN_DURATION, FADE_OUT_DURATION, OFFSCREEN_LEFT,
    SWAP_DELAY,
};

/// Reducer for the quote card transition.
///
/// Pure: the caller supplies the clock, the fetched quote and the chosen
/// gradient through intents.
pub struct TransitionReducer;

impl Reducer for TransitionReducer {
    type State = QuoteScreenState;
    type Intent = TransitionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TransitionIntent::Start { cycle, now } => QuoteScreenState {
                opacity: state
                    .opacity
                    .animate_to(0.0, now, FADE_OUT_DURATION, Easing::Linear),
                phase: TransitionPhase::FadingOut {
                    cycle,
                    started_at: now,
                    pending: None,
                },
                ..state
            },

            TransitionIntent::Resolved { cycle, payload } => match state.phase {
                TransitionPhase::FadingOut {
                    cycle: active,
                    started_at,
                    pending: None,
                } if active == cycle => QuoteScreenState {
                    phase: TransitionPhase::FadingOut {
                        cycle,
                        started_at,
                        pending: Some(payload),
                    },
                    ..state
                },
                // Superseded or duplicate result.
                _ => state,
            },

            TransitionIntent::Tick { now } => Self::advance(state, now),
        }
    }
}

impl TransitionReducer {
    /// Applies every phase change due at `now`, so a single late tick can
    /// run FadingOut → Swapping → FadingIn → Idle in one call.
    pub fn advance(mut state: QuoteScreenState, now: Instant) -> QuoteScreenState {
        loop {
            let (next, changed) = Self::step(state, now);
            state = next;
            if !changed {
                return state;
            }
        }
    }

    fn step(state: QuoteScreenState, now: Instant) -> (QuoteScreenState, bool) {
        match state.phase {
            TransitionPhase::FadingOut {
                cycle,
                started_at,
                pending: Some(payload),
            } => {
                // The delay and the fetch overlap; whichever finishes last
                // decides the swap instant.
                let at = (started_at + SWAP_DELAY).max(payload.resolved_at);
                if now < at {
                    let phase = TransitionPhase::FadingOut {
                        cycle,
                        started_at,
                        pending: Some(payload),
                    };
                    return (QuoteScreenState { phase, ..state }, false);
                }
                let phase = TransitionPhase::Swapping { cycle, at, payload };
                (QuoteScreenState { phase, ..state }, true)
            }

            TransitionPhase::Swapping { cycle, at, payload } => {
                let gradient = payload.gradient.unwrap_or(state.gradient);
                let next = QuoteScreenState {
                    quote: payload.quote,
                    gradient,
                    opacity: state
                        .opacity
                        .animate_to(1.0, at, FADE_IN_DURATION, Easing::Linear),
                    offset: AnimatedValue::fixed(OFFSCREEN_LEFT).animate_to(
                        0.0,
                        at,
                        FADE_IN_DURATION,
                        Easing::EaseOutExpo,
                    ),
                    phase: TransitionPhase::FadingIn {
                        cycle,
                        started_at: at,
                    },
                };
                (next, true)
            }

            TransitionPhase::FadingIn { started_at, .. }
                if now >= started_at + FADE_IN_DURATION =>
            {
                let next = QuoteScreenState {
                    opacity: AnimatedValue::fixed(1.0),
                    offset: AnimatedValue::fixed(0.0),
                    phase: TransitionPhase::Idle,
                    ..state
                };
                (next, true)
            }

            _ => (state, false),
        }
    }
}
