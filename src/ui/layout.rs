use ratatui::layout::Rect;

use crate::locale::Strings;

const CARD_HEIGHT: u16 = 11;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_MIN_WIDTH: u16 = 20;
const BUTTON_PADDING: u16 = 8;
const FOOTER_HEIGHT: u16 = 3;
const CARD_BUTTON_GAP: u16 = 1;

/// Where each part of the screen goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub card: Rect,
    pub button: Rect,
    pub footer: Rect,
}

/// Card (90% wide) and button stacked and centred in the body, footer at
/// the bottom. Heights shrink in order gap → card when space runs out.
pub fn screen_layout(area: Rect, strings: &Strings) -> ScreenLayout {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let body = Rect {
        height: area.height - footer_height,
        ..area
    };
    let footer = Rect {
        y: area.y + body.height,
        height: footer_height,
        ..area
    };

    let label_width = strings.button_label.chars().count() as u16;
    let button_width = label_width
        .saturating_add(BUTTON_PADDING)
        .max(BUTTON_MIN_WIDTH)
        .min(body.width);
    let card_width = (u32::from(body.width) * 9 / 10) as u16;

    let button_height = BUTTON_HEIGHT.min(body.height);
    let gap = CARD_BUTTON_GAP.min(body.height - button_height);
    let card_height = CARD_HEIGHT.min(body.height - button_height - gap);
    let stack_height = card_height + gap + button_height;
    let top = body.y + (body.height - stack_height) / 2;

    let card = Rect::new(
        body.x + (body.width - card_width) / 2,
        top,
        card_width,
        card_height,
    );
    let button = Rect::new(
        body.x + (body.width - button_width) / 2,
        top + card_height + gap,
        button_width,
        button_height,
    );

    ScreenLayout {
        card,
        button,
        footer,
    }
}
