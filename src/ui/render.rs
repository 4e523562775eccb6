use crate::quote::Quote;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::screen_layout;
use crate::ui::theme::{
    GradientPair, Rgb, AUTHOR_TEXT, BUTTON_BACKGROUND, BUTTON_TEXT, CARD_BACKGROUND, CARD_BORDER,
    QUOTE_TEXT,
};
use crate::ui::transition::QuoteScreenState;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};
use ratatui::Frame;
use std::time::Instant;

/// Draws the whole screen as it looks at `now`.
pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let state = app.screen();
    let strings = app.strings();
    let layout = screen_layout(area, strings);

    paint_gradient(frame.buffer_mut(), area, state.gradient);
    draw_card(frame.buffer_mut(), area, layout.card, state, now);
    frame.render_widget(button_widget(strings.button_label), layout.button);
    frame.render_widget(Footer::new(strings).widget(layout.footer), layout.footer);
}

fn paint_gradient(buf: &mut Buffer, area: Rect, gradient: GradientPair) {
    let span = area.height.saturating_sub(1).max(1) as f64;
    for row in 0..area.height {
        let color = gradient.sample(row as f64 / span).to_color();
        let line = Rect::new(area.x, area.y + row, area.width, 1);
        buf.set_style(line, Style::default().bg(color));
    }
}

/// Renders the card off-screen, then blends it onto `buf` shifted by the
/// offset animation and faded by the opacity animation.
fn draw_card(buf: &mut Buffer, area: Rect, card: Rect, state: &QuoteScreenState, now: Instant) {
    if card.is_empty() {
        return;
    }
    let opacity = state.opacity_at(now);
    let shift = (state.offset_at(now) * f64::from(area.width)).round() as i32;

    let local = Rect::new(0, 0, card.width, card.height);
    let mut scratch = Buffer::empty(local);
    render_card(&state.quote, local, &mut scratch);

    let right = i32::from(area.right());
    for y in 0..card.height {
        for x in 0..card.width {
            let target_x = i32::from(card.x) + i32::from(x) + shift;
            if target_x < i32::from(area.x) || target_x >= right {
                continue;
            }
            let Some(src) = scratch.cell(Position::new(x, y)) else {
                continue;
            };
            let src_style = src.style();
            let Some(dst) = buf.cell_mut(Position::new(target_x as u16, card.y + y)) else {
                continue;
            };

            let backdrop = dst
                .style()
                .bg
                .and_then(Rgb::from_color)
                .unwrap_or(CARD_BACKGROUND);
            let fade = |color: Option<ratatui::style::Color>, fallback: Rgb| {
                let rgb = color.and_then(Rgb::from_color).unwrap_or(fallback);
                backdrop.lerp(rgb, opacity).to_color()
            };
            let bg = fade(src_style.bg, CARD_BACKGROUND);
            let fg = fade(src_style.fg, QUOTE_TEXT);

            dst.set_symbol(src.symbol());
            dst.set_style(
                Style::default()
                    .fg(fg)
                    .bg(bg)
                    .add_modifier(src_style.add_modifier),
            );
        }
    }
}

/// Renders the card into `area`. The author keeps the bottom row of the card
/// so a long quote is cut short instead of the author.
fn render_card(quote: &Quote, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CARD_BORDER.to_color()))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    buf.set_style(area, Style::default().bg(CARD_BACKGROUND.to_color()));
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    let author_style = Style::default()
        .fg(AUTHOR_TEXT.to_color())
        .add_modifier(Modifier::BOLD);
    let author_row = Rect {
        y: inner.bottom() - 1,
        height: 1,
        ..inner
    };
    Paragraph::new(
        Line::from(Span::styled(format!("- {}", quote.author), author_style)).right_aligned(),
    )
    .render(author_row, buf);

    // Blank rows above and below the quote when the card is tall enough.
    let mut text_area = Rect {
        height: inner.height - 1,
        ..inner
    };
    if text_area.height >= 3 {
        text_area.y += 1;
        text_area.height -= 2;
    }
    let quote_style = Style::default()
        .fg(QUOTE_TEXT.to_color())
        .add_modifier(Modifier::ITALIC);
    let text = Line::from(Span::styled(format!("\"{}\"", quote.text), quote_style)).centered();
    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .render(text_area, buf);
}

fn button_widget(label: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(label).centered())
        .style(
            Style::default()
                .fg(BUTTON_TEXT.to_color())
                .bg(BUTTON_BACKGROUND.to_color())
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CARD_BORDER.to_color())),
        )
}
