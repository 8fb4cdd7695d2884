use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{button_regions, card_regions};
use crate::ui::resources::{image_file, resolve_text};
use crate::ui::theme::{ACCENT, BUTTON_BG, BUTTON_TEXT, CARD_BORDER, CARD_SURFACE, CARD_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    // A pending status message needs the hint row even when hints are off.
    let regions = card_regions(
        frame.area(),
        app.show_key_hints() || app.status().is_some(),
    );
    let entry = app.current();
    let name = resolve_text(entry.name);

    let position = format!(
        " {}/{} ",
        app.carousel().position() + 1,
        app.carousel().len()
    );
    let image_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CARD_BORDER))
        .title(Span::styled(format!(" {name} "), Style::default().fg(ACCENT)))
        .title_bottom(Line::from(position).alignment(Alignment::Right));
    let image = Paragraph::new(image_placeholder(image_file(entry.image), regions.image))
        .alignment(Alignment::Center)
        .style(Style::default().fg(CARD_TEXT))
        .block(image_block);
    frame.render_widget(image, regions.image);

    let description = Paragraph::new(vec![
        Line::from(Span::styled(
            name,
            Style::default().fg(CARD_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(resolve_text(entry.description)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(CARD_SURFACE).fg(CARD_TEXT))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER)),
    );
    frame.render_widget(description, regions.description);

    let (prev, next) = button_regions(regions.buttons);
    frame.render_widget(button("Prev"), prev);
    frame.render_widget(button("Next"), next);

    if regions.hints.height > 0 {
        let footer = Footer::new();
        frame.render_widget(footer.widget(regions.hints, app.status()), regions.hints);
    }
}

/// Vertically centers the asset name inside the image card.
fn image_placeholder(file: String, area: Rect) -> Vec<Line<'static>> {
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines = vec![Line::from(""); inner_height.saturating_sub(1) / 2];
    lines.push(Line::from(format!("[ {file} ]")));
    lines
}

fn button(label: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(BUTTON_TEXT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(BUTTON_BG))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BUTTON_BG)),
    )
}
