use crate::config::OverlapPolicy;
use crate::locale::{Locale, Strings};
use crate::quote::{FetchError, Quote};
use crate::ui::layout::screen_layout;
use crate::ui::mvi::Reducer;
use crate::ui::theme::GradientPair;
use crate::ui::transition::{QuoteScreenState, SwapPayload, TransitionIntent, TransitionReducer};
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Fetch one quote and report back tagged with `cycle`.
    FetchQuote { cycle: u64 },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The quote screen.
///
/// Owns the presentation state and decides when a fetch cycle starts. The
/// fetch itself runs elsewhere; its result comes back via
/// [`App::on_quote_fetched`].
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    locale: Locale,
    overlap: OverlapPolicy,
    screen: QuoteScreenState,
    /// Id of the most recently issued cycle. Cycle ids start at 1.
    last_cycle: u64,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(locale: Locale, overlap: OverlapPolicy) -> Self {
        Self {
            should_quit: false,
            size: None,
            locale,
            overlap,
            screen: QuoteScreenState::default(),
            last_cycle: 0,
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &QuoteScreenState {
        &self.screen
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// First fetch, issued once when the screen comes up.
    pub fn on_mount(&mut self, now: Instant) -> bool {
        self.request_new_quote(now)
    }

    /// Starts a new transition cycle and asks for a quote.
    ///
    /// Returns `false` when the request is dropped under
    /// [`OverlapPolicy::Ignore`].
    pub fn request_new_quote(&mut self, now: Instant) -> bool {
        if self.overlap == OverlapPolicy::Ignore && self.screen.is_busy() {
            tracing::debug!(
                cycle = self.last_cycle,
                "Ignoring new quote request while a transition is running"
            );
            return false;
        }

        self.last_cycle += 1;
        let cycle = self.last_cycle;
        self.dispatch_transition(TransitionIntent::Start { cycle, now });

        if let Err(reason) = self.send_command(UiCommand::FetchQuote { cycle }) {
            tracing::warn!(cycle, %reason, "Could not schedule quote fetch");
            let payload = self.failure_payload(now);
            self.dispatch_transition(TransitionIntent::Resolved { cycle, payload });
        }
        true
    }

    /// Feeds a settled fetch into the transition.
    ///
    /// Failures never propagate: they become the sentinel quote with the
    /// gradient left as is.
    pub fn on_quote_fetched(&mut self, cycle: u64, result: Result<Quote, FetchError>, now: Instant) {
        let payload = match result {
            Ok(quote) => SwapPayload {
                quote: quote.localized(self.strings()),
                gradient: Some(GradientPair::random(&mut rand::rng())),
                resolved_at: now,
            },
            Err(err) => {
                tracing::warn!(cycle, kind = err.kind(), error = %err, "Failed to load quote");
                self.failure_payload(now)
            }
        };

        if self.screen.phase.cycle() != Some(cycle) {
            tracing::debug!(
                cycle,
                active = ?self.screen.phase.cycle(),
                "Dropping result of superseded cycle"
            );
        }

        self.dispatch_transition(TransitionIntent::Resolved { cycle, payload });
        self.on_tick(now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_transition(TransitionIntent::Tick { now });
    }

    /// Left click at terminal cell (`column`, `row`).
    pub fn on_click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let layout = screen_layout(Rect::new(0, 0, cols, rows), self.strings());
        if layout.button.contains(Position::new(column, row)) {
            return self.request_new_quote(now);
        }
        false
    }

    fn failure_payload(&self, now: Instant) -> SwapPayload {
        SwapPayload {
            quote: Quote::sentinel(self.strings()),
            gradient: None,
            resolved_at: now,
        }
    }

    fn dispatch_transition(&mut self, intent: TransitionIntent) {
        dispatch_mvi!(self, screen, TransitionReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("no fetch worker attached".to_string());
        };
        sender.try_send(command).map_err(|err| err.to_string())
    }
}
