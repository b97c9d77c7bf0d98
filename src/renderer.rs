use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Position;
use crate::theme::{GlyphSet, Theme};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_hint};

/// Immutable presentation choices for one session.
#[derive(Debug)]
pub struct RenderView<'a> {
    pub theme: &'a Theme,
    pub glyphs: &'a GlyphSet,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, view: &RenderView<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, view.theme);
    let board = centered_board(play_area, state.grid());

    // The bordered block IS the wall ring: its inner area maps 1:1 onto the
    // grid interior.
    let block = Block::bordered()
        .border_set(view.glyphs.border.clone())
        .border_style(
            Style::default()
                .fg(view.theme.border_fg)
                .bg(view.theme.border_bg),
        );
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_fruit(frame, inner, state, view);
    render_snake(frame, inner, state, view);

    if state.awaiting_first_input() {
        render_start_hint(frame, board, view.theme);
        return;
    }

    if state.status.is_terminal() {
        render_game_over_menu(frame, board, state.status, state.score, view.theme);
    }
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, state: &GameState, view: &RenderView<'_>) {
    let Some((x, y)) = logical_to_terminal(inner, state.grid(), state.fruit.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, view.glyphs.fruit, Style::new().fg(view.theme.fruit));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, view: &RenderView<'_>) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            let glyph = head_glyph(state.direction(), view.glyphs);
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new()
                    .fg(view.theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, view.glyphs.tail, Style::new().fg(view.theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, view.glyphs.body, Style::new().fg(view.theme.snake_body));
    }
}

fn head_glyph(direction: Option<Direction>, glyphs: &GlyphSet) -> &'static str {
    match direction {
        // Holding still before the first input.
        None => glyphs.body,
        Some(Direction::Up) => glyphs.head_up,
        Some(Direction::Down) => glyphs.head_down,
        Some(Direction::Left) => glyphs.head_left,
        Some(Direction::Right) => glyphs.head_right,
    }
}

/// Centers a grid-sized board inside `area`, clamping to what fits.
fn centered_board(area: Rect, grid: GridSize) -> Rect {
    let width = grid.width.min(area.width);
    let height = grid.height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Maps an interior grid cell to a terminal cell inside the board border.
///
/// Wall-ring and out-of-grid positions return `None`; a head that just died
/// on the ring simply is not painted over the border.
fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_interior(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.col - 1).ok()?;
    let y_offset = u16::try_from(position.row - 1).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
