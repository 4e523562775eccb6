use std::time::{Duration, Instant};

use crate::quote::Quote;
use crate::ui::animation::AnimatedValue;
use crate::ui::mvi::UiState;
use crate::ui::theme::GradientPair;

use super::intent::SwapPayload;

pub const FADE_OUT_DURATION: Duration = Duration::from_millis(300);
/// Minimum time between the start of a cycle and its swap.
pub const SWAP_DELAY: Duration = Duration::from_millis(300);
pub const FADE_IN_DURATION: Duration = Duration::from_millis(500);
/// Card offset, in screen widths, right after a swap.
pub const OFFSCREEN_LEFT: f64 = -1.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    FadingOut {
        cycle: u64,
        started_at: Instant,
        /// Result of the fetch once it has settled.
        pending: Option<SwapPayload>,
    },
    /// Committing `payload`; lasts zero time and is resolved within the
    /// tick that reaches it.
    Swapping {
        cycle: u64,
        at: Instant,
        payload: SwapPayload,
    },
    FadingIn {
        cycle: u64,
        started_at: Instant,
    },
}

impl TransitionPhase {
    pub fn cycle(&self) -> Option<u64> {
        match self {
            TransitionPhase::Idle => None,
            TransitionPhase::FadingOut { cycle, .. }
            | TransitionPhase::Swapping { cycle, .. }
            | TransitionPhase::FadingIn { cycle, .. } => Some(*cycle),
        }
    }
}

/// Everything the quote screen draws.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteScreenState {
    pub quote: Quote,
    pub gradient: GradientPair,
    pub opacity: AnimatedValue,
    /// Horizontal card offset as a fraction of the screen width.
    pub offset: AnimatedValue,
    pub phase: TransitionPhase,
}

impl Default for QuoteScreenState {
    fn default() -> Self {
        Self {
            quote: Quote::default(),
            gradient: GradientPair::default(),
            opacity: AnimatedValue::fixed(1.0),
            offset: AnimatedValue::fixed(0.0),
            phase: TransitionPhase::Idle,
        }
    }
}

impl UiState for QuoteScreenState {}

impl QuoteScreenState {
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Idle)
    }

    pub fn opacity_at(&self, now: Instant) -> f64 {
        self.opacity.value_at(now).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, now: Instant) -> f64 {
        self.offset.value_at(now)
    }
}
