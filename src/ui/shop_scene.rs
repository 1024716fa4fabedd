use math_legends::character::Coins;
use math_legends::items::Item;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draws the merchant's stock with prices against the hero's purse
pub fn draw_shop_scene(
    frame: &mut Frame,
    area: Rect,
    stock: &[Item],
    coins: &Coins,
    selected: usize,
    message: &str,
) {
    let block = Block::default()
        .title(" Merchant ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Purse
            Constraint::Min(5),    // Stock
            Constraint::Length(3), // Description
            Constraint::Length(2), // Message
        ])
        .split(inner);

    let purse = Paragraph::new(Line::from(vec![
        Span::raw("Your purse: "),
        Span::styled(
            format!("{} ({}c)", coins, coins.total()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(purse, chunks[0]);

    let items: Vec<ListItem> = stock
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let prefix = if i == selected { "> " } else { "  " };
            let style = if !coins.can_afford(item.value) {
                Style::default().fg(Color::DarkGray)
            } else if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{:<22} {:>4}c", prefix, item.name, item.value)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    if let Some(item) = stock.get(selected) {
        let description = Paragraph::new(Line::from(Span::styled(
            item.description.clone(),
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(description, chunks[2]);
    }

    let message = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Cyan),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(message, chunks[3]);
}
