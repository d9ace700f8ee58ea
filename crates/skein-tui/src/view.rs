//! Drawing: passage prose, link menu, end indicator, escape overlay.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use skein_core::{EscapeItem, LINE_WIDTH, Passage};

use crate::app::App;

/// Draw one frame of the player.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let Some(passage) = app.session().current() else {
        return;
    };

    draw_content(frame, area, &app.session().render(LINE_WIDTH));

    if passage.is_ending() {
        draw_end_marker(frame, area);
    } else {
        draw_links(frame, area, passage, app.cursor().selected());
    }

    if let Some(menu) = app.escape_menu() {
        draw_escape_menu(frame, area, menu.selected());
    }
}

/// Passage prose as a 50-column block, its left edge centered, starting a
/// tenth of the way down the screen.
fn draw_content(frame: &mut Frame, area: Rect, lines: &[String]) {
    let width = LINE_WIDTH as u16;
    let x = (area.width / 2).saturating_sub(width / 2);
    let y = area.height / 10;
    let rect = Rect::new(x, y, width, lines.len() as u16).intersection(area);

    let text: Vec<Line> = lines.iter().map(|line| Line::from(line.as_str())).collect();
    frame.render_widget(Paragraph::new(text), rect);
}

/// Link options stacked below mid-screen, the block centered on the
/// longest option, the selected one in reversed video.
fn draw_links(frame: &mut Frame, area: Rect, passage: &Passage, selected: usize) {
    let widest = passage
        .links
        .iter()
        .map(|link| link.option.chars().count())
        .max()
        .unwrap_or(0)
        .min(area.width as usize) as u16;
    let x = (area.width.saturating_sub(widest)) / 2;
    let y = area.height / 2 + 2;
    let rect = Rect::new(x, y, widest, passage.links.len() as u16).intersection(area);

    let lines: Vec<Line> = passage
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if i == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(link.option.as_str(), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), rect);
}

/// Centered end-of-game indicator shown for passages with no links.
fn draw_end_marker(frame: &mut Frame, area: Rect) {
    let y = area.height / 2 + 2;
    let rect = Rect::new(area.x, y, area.width, 1).intersection(area);
    let marker = Paragraph::new("End Game").alignment(Alignment::Center);
    frame.render_widget(marker, rect);
}

/// The escape menu as a cleared, bordered popup centered on screen.
fn draw_escape_menu(frame: &mut Frame, area: Rect, selected: EscapeItem) {
    let width = 50u16.min(area.width);
    let height = 8u16.min(area.height);
    let x = (area.width - width) / 2;
    let y = (area.height - height) / 2;
    let rect = Rect::new(x, y, width, height);

    frame.render_widget(Clear, rect);

    let mut lines = vec![Line::from("")];
    for item in EscapeItem::ALL {
        let mark = if item == selected { " > " } else { "   " };
        lines.push(Line::from(format!("  {mark}{}", item.label())));
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Escape Menu ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(popup, rect);
}
