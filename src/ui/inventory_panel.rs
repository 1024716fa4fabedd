use math_legends::character::Player;
use math_legends::items::{Item, Rarity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

/// Draws hero stats above the bag contents
pub fn draw_inventory_panel(
    frame: &mut Frame,
    area: Rect,
    player: &Player,
    items: &[Item],
    selected: usize,
    monsters_defeated: u32,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Stats
            Constraint::Min(3),    // Bag
        ])
        .split(area);

    draw_stats(frame, chunks[0], player, monsters_defeated);
    draw_bag(frame, chunks[1], items, selected);
}

fn draw_stats(frame: &mut Frame, area: Rect, player: &Player, monsters_defeated: u32) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Level {}", player.level),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("XP: {}/{}", player.experience, player.xp_to_next_level()),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!(
            "STR {}  DEF {}  DMG {}",
            player.strength, player.defense, player.damage
        )),
        Line::from(Span::styled(
            format!("Coins: {}", player.coins),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!("Monsters defeated: {}", monsters_defeated)),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Hero"));
    frame.render_widget(paragraph, area);
}

fn draw_bag(frame: &mut Frame, area: Rect, items: &[Item], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Bag ({})", items.len()));

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Empty",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let prefix = if i == selected { "> " } else { "  " };
            let quantity = match item.quantity {
                Some(q) if q > 1 => format!(" x{}", q),
                _ => String::new(),
            };
            let mut style = Style::default().fg(rarity_color(item.rarity));
            if i == selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(format!("{}{}{}", prefix, item.name, quantity)).style(style)
        })
        .collect();

    frame.render_widget(List::new(list_items).block(block), area);
}
