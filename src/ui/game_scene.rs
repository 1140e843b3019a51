//! UI rendering for the game scene: playfield, bird, pipes, score bar,
//! game-over and debug overlays.
//!
//! The simulation works in abstract units; each terminal cell covers
//! `UNITS_PER_COL` x `UNITS_PER_ROW` units, so the playfield size tracks
//! the terminal size and the world keeps sane proportions despite
//! non-square cells.

use crate::game::types::{GameState, BIRD_SIZE, BIRD_X};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal units covered by one terminal column.
pub const UNITS_PER_COL: f64 = 15.0;
/// Vertical units covered by one terminal row (cells are ~1:2).
pub const UNITS_PER_ROW: f64 = 30.0;

/// Split a frame area into the playfield and the 2-line status bar,
/// both inside the outer border. The single source of truth for scene
/// geometry: `render` draws into these rects and the main loop sizes the
/// simulation from the same split, so collision geometry always matches
/// what is displayed.
fn layout_areas(frame_area: Rect) -> (Rect, Rect) {
    let inner = Rect {
        x: frame_area.x.saturating_add(1),
        y: frame_area.y.saturating_add(1),
        width: frame_area.width.saturating_sub(2),
        height: frame_area.height.saturating_sub(2),
    };
    let play = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };
    let status = Rect {
        y: inner.y + play.height,
        height: inner.height - play.height,
        ..inner
    };
    (play, status)
}

/// The playfield cell area for a given frame area, for callers that need
/// playfield dimensions without drawing.
pub fn play_area(frame_area: Rect) -> Rect {
    layout_areas(frame_area).0
}

/// Playfield dimensions in simulation units for a cell area.
pub fn playfield_size(play: Rect) -> (f64, f64) {
    (
        f64::from(play.width) * UNITS_PER_COL,
        f64::from(play.height) * UNITS_PER_ROW,
    )
}

/// Render the whole scene.
pub fn render(frame: &mut Frame, area: Rect, game: &GameState, debug_overlay: bool) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Birb ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let (play, status) = layout_areas(area);
    render_playfield(frame, play, game);
    render_status_bar(frame, status, game);

    if debug_overlay {
        render_debug_overlay(frame, play, game);
    }
    if game.game_over {
        render_game_over(frame, area, game);
    }
}

/// Render the playfield cell by cell: sky, pipe segments, bird.
fn render_playfield(frame: &mut Frame, area: Rect, game: &GameState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (_, playfield_height) = playfield_size(area);
    let bird = game.bird_rect();
    let top_pipe = game.top_pipe_rect();
    let bottom_pipe = game.bottom_pipe_rect(playfield_height);

    let bird_glyph = if game.bird_velocity < -0.5 {
        "▲" // climbing
    } else if game.bird_velocity > 8.0 {
        "▼" // falling fast
    } else {
        "►"
    };
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let pipe_style = Style::default().fg(Color::Green);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let unit_y = (f64::from(row) + 0.5) * UNITS_PER_ROW;
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let unit_x = (f64::from(col) + 0.5) * UNITS_PER_COL;

            if bird.contains(unit_x, unit_y) {
                spans.push(Span::styled(bird_glyph, bird_style));
            } else if top_pipe.contains(unit_x, unit_y) || bottom_pipe.contains(unit_x, unit_y) {
                spans.push(Span::styled("█", pipe_style));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Two-line status bar: score, then controls.
fn render_status_bar(frame: &mut Frame, area: Rect, game: &GameState) {
    if area.height < 1 {
        return;
    }

    let score = Paragraph::new(format!("Score: {}", game.score))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(score, Rect { height: 1, ..area });

    if area.height >= 2 {
        let controls = Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[D]", Style::default().fg(Color::White)),
            Span::styled(" Debug  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]);
        let controls_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(controls).alignment(Alignment::Center),
            controls_area,
        );
    }
}

/// Centered game-over box over the scene.
fn render_game_over(frame: &mut Frame, area: Rect, game: &GameState) {
    let width = 34.min(area.width);
    let height = 5.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let text = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Score: {}", game.score)),
        Line::from(Span::styled(
            "Press any key to restart",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner,
    );
}

/// Per-tick diagnostics in the top-left corner, derived from the same
/// geometry the collision checks use.
fn render_debug_overlay(frame: &mut Frame, area: Rect, game: &GameState) {
    let (_, playfield_height) = playfield_size(area);
    let bird = game.bird_rect();
    let hit_top = bird.intersects(&game.top_pipe_rect());
    let hit_bottom = bird.intersects(&game.bottom_pipe_rect(playfield_height));
    let out_of_bounds =
        game.bird_y <= 0.0 || game.bird_y >= playfield_height - BIRD_SIZE;

    let lines = vec![
        Line::from(format!(
            "bird: x={:.0} y={:.1} v={:+.2}",
            BIRD_X, game.bird_y, game.bird_velocity
        )),
        Line::from(format!("pipe: x={:.1} gap={:.0}", game.pipe_x, game.gap_height)),
        Line::from(format!(
            "top={:.0} bottom={:.0}",
            game.top_pipe_height, game.bottom_pipe_top
        )),
        Line::from(format!(
            "hit: top={} bottom={} oob={}",
            hit_top, hit_bottom, out_of_bounds
        )),
    ];

    let height = (lines.len() as u16).min(area.height);
    let debug_area = Rect {
        width: area.width.min(36),
        height,
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Magenta)),
        debug_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_area(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_playfield_and_status_tile_the_inner_area() {
        let (play, status) = layout_areas(frame_area(80, 24));
        assert_eq!(play.x, 1);
        assert_eq!(play.y, 1);
        assert_eq!(play.width, 78);
        assert_eq!(play.height, 20);
        assert_eq!(status.y, play.y + play.height);
        assert_eq!(status.height, 2);
        assert_eq!(play.height + status.height, 22);
    }

    #[test]
    fn test_play_area_matches_render_split() {
        for (w, h) in [(80u16, 24u16), (40, 10), (10, 6), (5, 4), (3, 3), (0, 0)] {
            let (play, status) = layout_areas(frame_area(w, h));
            assert_eq!(play_area(frame_area(w, h)), play);
            // The split never spills past the bordered interior, even on
            // terminals too short for the status bar.
            let inner_height = h.saturating_sub(2);
            assert_eq!(play.height + status.height, inner_height);
            assert!(status.height <= 2);
        }
    }

    #[test]
    fn test_short_terminal_gives_status_bar_priority() {
        // 5 rows: 3 inner rows, so 1 playfield row + 2 status rows.
        let (play, status) = layout_areas(frame_area(30, 5));
        assert_eq!(play.height, 1);
        assert_eq!(status.height, 2);

        // 3 rows: 1 inner row, all of it status.
        let (play, status) = layout_areas(frame_area(30, 3));
        assert_eq!(play.height, 0);
        assert_eq!(status.height, 1);
    }

    #[test]
    fn test_playfield_size_scales_cells_to_units() {
        let play = play_area(frame_area(80, 24));
        let (width, height) = playfield_size(play);
        assert_eq!(width, 78.0 * UNITS_PER_COL);
        assert_eq!(height, 20.0 * UNITS_PER_ROW);
    }
}
