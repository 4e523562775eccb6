use std::time::Instant;

use crate::quote::Quote;
use crate::ui::mvi::Intent;
use crate::ui::theme::GradientPair;

/// What gets committed at the swap step of a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapPayload {
    pub quote: Quote,
    /// New background; `None` keeps the current one (failed fetch).
    pub gradient: Option<GradientPair>,
    /// When the fetch settled.
    pub resolved_at: Instant,
}

#[derive(Debug)]
pub enum TransitionIntent {
    /// A new-quote request was issued under `cycle`; begin fading out.
    Start { cycle: u64, now: Instant },

    /// The fetch for `cycle` settled. Ignored unless `cycle` is the one
    /// currently fading out.
    Resolved { cycle: u64, payload: SwapPayload },

    /// Frame tick; advances every phase whose deadline has passed.
    Tick { now: Instant },
}

impl Intent for TransitionIntent {}
