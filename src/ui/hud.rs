use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::theme::Theme;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let label = Style::default().fg(theme.hud_fg);
    let value = Style::default().fg(theme.hud_accent);
    let line = Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("   Length ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled("   Tick ", label),
        Span::styled(format!("{}ms", state.tick_interval().as_millis()), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        status_area,
    );

    play_area
}
