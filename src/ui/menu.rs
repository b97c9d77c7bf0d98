use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::GameStatus;
use crate::theme::Theme;

/// Draws the pre-game hint while the board waits for the first direction key.
pub fn render_start_hint(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 70, 35);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("VIPER").style(
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Arrows/WASD to move"),
        Line::from("[Q]/[X] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" ready ")),
        popup,
    );
}

/// Draws the game-over popup with the outcome message and final score.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    status: GameStatus,
    score: u32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let (title, outcome) = match status {
        GameStatus::Won => ("YOU WIN", "You are a winner"),
        GameStatus::SelfCollision => ("GAME OVER", "You hit yourself"),
        GameStatus::WallCollision => ("GAME OVER", "You hit the boundary"),
        GameStatus::Running => return,
    };

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from(title))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(outcome),
        Line::from(format!("Score = {score}")),
        Line::from(""),
        Line::from("[Enter]/[Space] Play Again"),
        Line::from("[Q]/[X] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(theme.menu_footer))),
        body_row,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
