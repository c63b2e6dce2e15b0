//! Board rendering for the Connect Four GUI

use crate::board::{Board, Cell, Move, Player, COLS, ROWS};
use crate::rules::Line;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board.
///
/// The top row of the drawing area is the drop-selection strip; the grid
/// sits below it with board row 0 at the bottom.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Whole drawing area including the selection strip
    area: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            area: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any.
    ///
    /// `turn` is the player whose disc follows the pointer; `None` disables
    /// input (computer to move, or game over).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        turn: Option<Player>,
        last_move: Option<Move>,
        winning_line: Option<Line>,
    ) -> Option<usize> {
        let available = ui.available_size();
        self.cell_size = (available.x / COLS as f32)
            .min(available.y / (ROWS as f32 + 1.0))
            .max(10.0);

        let size = Vec2::new(
            self.cell_size * COLS as f32,
            self.cell_size * (ROWS as f32 + 1.0),
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.area = response.rect;

        painter.rect_filled(self.area, CornerRadius::ZERO, BACKGROUND);
        self.draw_grid(&painter, board);

        if let Some(mv) = last_move {
            painter.circle_filled(
                self.cell_center(mv.row, mv.col),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Hover preview in the selection strip, then click
        let player = turn?;
        let pointer = response.hover_pos()?;
        let col = self.screen_to_column(pointer)?;
        let playable = board.is_column_playable(col);
        let color = if playable {
            disc_color(player.to_cell())
        } else {
            hover_invalid()
        };
        let strip_center = Pos2::new(pointer.x, self.area.min.y + self.cell_size * 0.5);
        painter.circle_filled(strip_center, self.cell_size * DISC_RADIUS_RATIO, color);

        (response.clicked() && playable).then_some(col)
    }

    /// Draw the blue board with one hole or disc per cell
    fn draw_grid(&self, painter: &Painter, board: &Board) {
        let grid = Rect::from_min_max(
            Pos2::new(self.area.min.x, self.area.min.y + self.cell_size),
            self.area.max,
        );
        painter.rect_filled(grid, CornerRadius::same(6), BOARD_BG);

        let radius = self.cell_size * DISC_RADIUS_RATIO;
        for row in 0..ROWS {
            for col in 0..COLS {
                let color = match board.get(row, col) {
                    Cell::Empty => HOLE,
                    cell => disc_color(cell),
                };
                painter.circle_filled(self.cell_center(row, col), radius, color);
            }
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &Line) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let first = self.cell_center(line[0].0, line[0].1);
        let last = self.cell_center(line[line.len() - 1].0, line[line.len() - 1].1);
        painter.line_segment([first, last], stroke);

        for &(row, col) in line {
            let radius = self.cell_size * DISC_RADIUS_RATIO + 2.0;
            painter.circle_stroke(self.cell_center(row, col), radius, stroke);
        }
    }

    /// Screen center of board cell (row, col); row 0 is drawn lowest
    pub fn cell_center(&self, row: usize, col: usize) -> Pos2 {
        let x = self.area.min.x + (col as f32 + 0.5) * self.cell_size;
        let y = self.area.min.y + ((ROWS - row) as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }

    /// Column under a screen position
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        let x = (screen_pos.x - self.area.min.x) / self.cell_size;
        if x >= 0.0 && x < COLS as f32 {
            Some(x as usize)
        } else {
            None
        }
    }
}

fn disc_color(cell: Cell) -> Color32 {
    match cell {
        Cell::Player1 => PLAYER1_DISC,
        Cell::Player2 => PLAYER2_DISC,
        Cell::Empty => HOLE,
    }
}
