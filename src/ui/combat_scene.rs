use math_legends::character::Player;
use math_legends::combat::{CombatController, CombatPhase};
use math_legends::monsters::Monster;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draws the arena: both HP bars, the problem to solve and the combat log
pub fn draw_combat_scene(
    frame: &mut Frame,
    area: Rect,
    controller: &CombatController,
    answer_input: &str,
) {
    let combat_block = Block::default()
        .borders(Borders::ALL)
        .title("Combat Arena");

    let inner = combat_block.inner(area);
    frame.render_widget(combat_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player HP bar
            Constraint::Length(3), // Monster HP bar
            Constraint::Length(6), // Problem
            Constraint::Min(3),    // Combat log
        ])
        .split(inner);

    draw_player_hp(frame, chunks[0], controller.player());
    draw_monster_hp(frame, chunks[1], controller.current_monster(), controller.phase());
    draw_problem(frame, chunks[2], controller, answer_input);
    draw_combat_log(frame, chunks[3], controller);
}

fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_player_hp(frame: &mut Frame, area: Rect, player: &Player) {
    let ratio = player.hp_ratio().clamp(0.0, 1.0);
    let label = format!("HP: {}/{}", player.current_hp, player.max_hp);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(player.name.as_str()))
        .gauge_style(Style::default().fg(hp_color(ratio)).add_modifier(Modifier::BOLD))
        .label(label)
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

fn draw_monster_hp(frame: &mut Frame, area: Rect, monster: Option<&Monster>, phase: &CombatPhase) {
    if let Some(monster) = monster {
        let ratio = monster.hp_ratio().clamp(0.0, 1.0);
        let label = format!("{}: {}/{}", monster.name, monster.hp, monster.max_hp);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Level {}", monster.level)),
            )
            .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .label(label)
            .ratio(ratio);

        frame.render_widget(gauge, area);
        return;
    }

    let text = match phase {
        CombatPhase::Shop => "The merchant is open for business",
        CombatPhase::GameOver => "The arena is silent",
        _ => "No monster in sight",
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
    )))
    .block(Block::default().borders(Borders::ALL).title("Monster"))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_problem(frame: &mut Frame, area: Rect, controller: &CombatController, answer_input: &str) {
    let (title, color) = match controller.phase() {
        CombatPhase::PlayerTurn => ("Attack!", Color::Cyan),
        CombatPhase::MonsterTurn { .. } => ("Defend!", Color::Magenta),
        CombatPhase::GameOver => ("Game Over", Color::Red),
        CombatPhase::Shop => ("Shop", Color::Yellow),
        CombatPhase::Idle => ("Waiting", Color::Gray),
    };

    let mut lines = Vec::new();
    match controller.active_problem() {
        Some(problem) if controller.pending().is_none() => {
            lines.push(Line::from(Span::styled(
                problem.question.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::raw("Answer: "),
                Span::styled(
                    format!("{}_", answer_input),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        _ => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        controller.message().to_string(),
        Style::default().fg(Color::Yellow),
    )));
    match controller.phase() {
        CombatPhase::Idle => lines.push(Line::from("Press [f] to find a monster.")),
        CombatPhase::GameOver => lines.push(Line::from(Span::styled(
            format!(
                "You defeated {} monsters. Press [r] to play again.",
                controller.monsters_defeated()
            ),
            Style::default().fg(Color::Red),
        ))),
        _ => {}
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_combat_log(frame: &mut Frame, area: Rect, controller: &CombatController) {
    let items: Vec<ListItem> = controller
        .combat_log()
        .entries()
        .rev()
        .map(|entry| {
            let style = if entry.is_player_action {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            ListItem::new(entry.message.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(list, area);
}
