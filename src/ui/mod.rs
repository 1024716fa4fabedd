pub mod combat_scene;
pub mod inventory_panel;
pub mod name_entry;
pub mod shop_scene;

use math_legends::combat::{CombatController, CombatPhase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Frontend-only state of the game screen.
#[derive(Debug, Default)]
pub struct GameView {
    pub answer_input: String,
    pub selected_item: usize,
    pub selected_stock: usize,
    /// Last rejected action, shown in the footer
    pub notice: Option<String>,
}

impl GameView {
    /// Keeps both cursors inside their lists.
    pub fn clamp_selection(&mut self, items: usize, stock: usize) {
        self.selected_item = self.selected_item.min(items.saturating_sub(1));
        self.selected_stock = self.selected_stock.min(stock.saturating_sub(1));
    }
}

/// Main UI drawing function
pub fn draw_game(frame: &mut Frame, controller: &CombatController, view: &GameView) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(v_chunks[0]);

    if controller.phase() == &CombatPhase::Shop {
        shop_scene::draw_shop_scene(
            frame,
            h_chunks[0],
            controller.shop_stock(),
            &controller.player().coins,
            view.selected_stock,
            controller.message(),
        );
    } else {
        combat_scene::draw_combat_scene(frame, h_chunks[0], controller, &view.answer_input);
    }

    inventory_panel::draw_inventory_panel(
        frame,
        h_chunks[1],
        controller.player(),
        controller.inventory(),
        view.selected_item,
        controller.monsters_defeated(),
    );

    draw_footer(frame, v_chunks[1], controller.phase(), view.notice.as_deref());
}

fn draw_footer(frame: &mut Frame, area: Rect, phase: &CombatPhase, notice: Option<&str>) {
    if let Some(notice) = notice {
        let paragraph = Paragraph::new(notice.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match phase {
        CombatPhase::Shop => "[↑↓] Select  [Enter] Buy  [Esc] Leave shop",
        CombatPhase::GameOver => "[r] Restart  [q] Quit",
        phase if phase.is_combat() => {
            "[0-9 -] Answer  [Enter] Submit  [↑↓] Select item  [u] Use  [d] Flee  [q] Quit"
        }
        _ => "[f] Find monster  [↑↓] Select item  [u] Use  [q] Quit",
    };
    let paragraph = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
