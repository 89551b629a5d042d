//! Board rendering and pointer input

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// What the board needs to know to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub to_move: Stone,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Clicks are reported only when a human may move
    pub accepts_input: bool,
}

/// Draws the grid and stones and maps clicks to cells
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 32.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board; returns the cell clicked this frame, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available = ui.available_size();
        let side = available.x.min(available.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        for stone in [Stone::Black, Stone::White] {
            if let Some(bits) = frame.board.stones(stone) {
                for pos in bits.iter_ones() {
                    self.draw_stone(&painter, pos, stone);
                }
            }
        }
        if let Some(pos) = frame.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !frame.accepts_input {
            return None;
        }
        let cell = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let open = frame.board.is_empty(cell);
        self.draw_hover(&painter, cell, frame.to_move, open);
        (response.clicked() && open).then_some(cell)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);

        for i in 0..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }

        for (row, col) in STAR_POINTS {
            painter.circle_filled(self.board_to_screen(Pos::new(row, col)), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters A-O and row numbers 15-1 (top to bottom)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);
        let rect = self.board_rect;

        for i in 0..BOARD_SIZE {
            let along = BOARD_MARGIN + i as f32 * self.cell_size;
            let letter = char::from(b'A' + i as u8).to_string();
            let number = (BOARD_SIZE - i).to_string();

            for y in [rect.min.y + 12.0, rect.max.y - 12.0] {
                painter.text(Pos2::new(rect.min.x + along, y), Align2::CENTER_CENTER, &letter, font.clone(), GRID_LINE);
            }
            for x in [rect.min.x + 12.0, rect.max.x - 12.0] {
                painter.text(Pos2::new(x, rect.min.y + along), Align2::CENTER_CENTER, &number, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::splat(2.0), radius, STONE_SHADOW);
        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(center - Vec2::splat(radius * 0.3), radius * 0.2, BLACK_STONE_SHINE);
            }
            Stone::White => {
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_RIM));
            }
            Stone::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let ring = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), ring, stroke);
        }
    }

    fn draw_hover(&self, painter: &Painter, pos: Pos, to_move: Stone, open: bool) {
        let color = match (open, to_move) {
            (false, _) => HOVER_BLOCKED,
            (true, Stone::Black) => HOVER_BLACK,
            (true, Stone::White) => HOVER_WHITE,
            (true, Stone::Empty) => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.cell_size * STONE_RADIUS_RATIO, color);
    }

    /// Nearest intersection under the pointer
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let rel = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (rel.x / self.cell_size).round() as i32;
        let row = (rel.y / self.cell_size).round() as i32;
        Pos::try_new(row, col)
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size
    }
}
