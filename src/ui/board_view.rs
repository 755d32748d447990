//! Board rendering for the Gomoku GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board should show this frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub last_move: Option<Pos>,
    pub hint: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Accept clicks and show the hover preview
    pub interactive: bool,
    pub paused: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);

        if scene.paused {
            // Hide the position while paused
            self.draw_pause_overlay(&painter);
            return None;
        }

        self.draw_stones(&painter, scene.board);

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = scene.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = scene.hint {
            self.draw_hint(&painter, pos);
        }

        let mut clicked_pos = None;

        if scene.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if scene.board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos);
                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O across, 0-14 down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let letter = (b'A' + i as u8) as char;
            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 14.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for color in [Stone::Black, Stone::White] {
            if let Some(stones) = board.stones(color) {
                for pos in stones.iter_ones() {
                    self.draw_stone(painter, pos, color);
                }
            }
        }
    }

    /// Draw a single stone with a soft highlight
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow = center + Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight = center + Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(highlight, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
                painter.circle_stroke(center, radius, Stroke::new(1.0, WHITE_STONE_OUTLINE));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Red ring around the suggested cell
    fn draw_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(HINT_RING_WIDTH, HINT_RING));
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_black());
    }

    fn draw_pause_overlay(&self, painter: &Painter) {
        painter.rect_filled(self.board_rect, CornerRadius::same(4), pause_veil());
        painter.text(
            self.board_rect.center(),
            egui::Align2::CENTER_CENTER,
            "PAUSED\npress Esc to resume",
            egui::FontId::proportional(28.0),
            TEXT_PRIMARY,
        );
    }

    /// Convert screen coordinates to board position, snapping to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;
        Pos::from_xy(x, y)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
