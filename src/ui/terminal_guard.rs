//! Terminal modes for the quote screen and their guaranteed undo.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::queue;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Switches `out` to the screen's modes: alternate screen, optional mouse
/// capture, cleared and with the cursor hidden.
pub fn enter_screen<W: Write>(out: &mut W, mouse_capture: bool) -> io::Result<()> {
    queue!(out, EnterAlternateScreen)?;
    if mouse_capture {
        queue!(out, EnableMouseCapture)?;
    }
    queue!(out, Clear(ClearType::All), Hide)?;
    out.flush()
}

/// Undoes [`enter_screen`] in reverse order.
pub fn leave_screen<W: Write>(out: &mut W, mouse_capture: bool) -> io::Result<()> {
    queue!(out, Show)?;
    if mouse_capture {
        queue!(out, DisableMouseCapture)?;
    }
    queue!(out, LeaveAlternateScreen)?;
    out.flush()
}

/// Puts the terminal back on drop or on panic, whichever happens first.
pub struct TerminalGuard {
    mouse_capture: bool,
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn install_panic_hook(&self) {
        let restored = Arc::clone(&self.restored);
        let mouse_capture = self.mouse_capture;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&restored, mouse_capture);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored, self.mouse_capture);
    }
}

fn restore_once(restored: &AtomicBool, mouse_capture: bool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = leave_screen(&mut io::stdout(), mouse_capture);
}

pub fn setup_terminal(
    mouse_capture: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard {
        mouse_capture,
        restored: Arc::new(AtomicBool::new(false)),
    };
    guard.install_panic_hook();

    let mut stdout = io::stdout();
    enter_screen(&mut stdout, mouse_capture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
