//! Opening screen: name the hero and preview the stats they start with.

use math_legends::character::{is_name_char, validate_name, Player, NAME_CHARSET_HINT};
use math_legends::core::MAX_NAME_LENGTH;
use math_legends::monsters::{eligible_monster_count, MONSTER_CATALOG};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct NameEntryScreen {
    input: String,
    error: Option<String>,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: None,
        }
    }

    /// Characters a name can never hold are refused at the keyboard.
    pub fn push(&mut self, c: char) {
        if !is_name_char(c) {
            self.error = Some(format!("Only {} are allowed", NAME_CHARSET_HINT));
        } else if self.input.chars().count() >= MAX_NAME_LENGTH {
            self.error = Some(format!("{} characters at most", MAX_NAME_LENGTH));
        } else {
            self.input.push(c);
            self.error = None;
        }
    }

    pub fn pop(&mut self) {
        self.input.pop();
        self.error = None;
    }

    /// The trimmed name, or `None` with the reason kept for display.
    pub fn submit(&mut self) -> Option<String> {
        match validate_name(&self.input) {
            Ok(name) => Some(name),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn reject(&mut self, reason: String) {
        self.error = Some(reason);
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(1),
            ])
            .split(area);

        let banner = vec![
            Line::from(Span::styled(
                "MATH LEGENDS",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Solve to strike. Solve to block.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(banner).alignment(Alignment::Center), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);
        self.draw_name_field(f, columns[0]);
        self.draw_hero_card(f, columns[1]);

        let keys = Paragraph::new("[Enter] Enter the arena   [Backspace] Erase   [Esc] Quit")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(keys, rows[2]);
    }

    fn draw_name_field(&self, f: &mut Frame, area: Rect) {
        let border = if self.error.is_some() {
            Color::Red
        } else {
            Color::Cyan
        };
        let used = self.input.chars().count();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{}_", self.input),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("{}/{}", used, MAX_NAME_LENGTH),
                Style::default().fg(if used == MAX_NAME_LENGTH {
                    Color::Yellow
                } else {
                    Color::DarkGray
                }),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Use {}.", NAME_CHARSET_HINT),
                Style::default().fg(Color::Gray),
            )),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        let block = Block::default()
            .title(" Name your hero ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// The stats a fresh hero starts with, under the name typed so far.
    fn draw_hero_card(&self, f: &mut Frame, area: Rect) {
        let name = self.input.trim();
        let hero = Player::new(if name.is_empty() { "???" } else { name }.to_string());
        let first_foes: Vec<&str> = MONSTER_CATALOG[..eligible_monster_count(hero.level)]
            .iter()
            .map(|(foe, _)| *foe)
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                hero.name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Level {}", hero.level)),
            Line::from(Span::styled(
                format!("HP {}/{}", hero.current_hp, hero.max_hp),
                Style::default().fg(Color::Green),
            )),
            Line::from(format!(
                "STR {}  DEF {}  DMG {}",
                hero.strength, hero.defense, hero.damage
            )),
            Line::from(format!("Purse {}", hero.coins)),
            Line::from(""),
            Line::from(Span::styled(
                format!("First foes: {}", first_foes.join(", ")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default().title(" Hero card ").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
