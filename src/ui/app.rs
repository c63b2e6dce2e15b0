//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::{error, info};

use super::board_view::BoardView;
use super::theme::*;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, Outcome, HUMAN};

/// Main Connect Four application
pub struct ConnectFourApp {
    game: Game,
    board_view: BoardView,
    /// Set once the frame showing the human's disc has been drawn
    computer_due: bool,
    message: Option<String>,
}

impl ConnectFourApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: &GameConfig) -> Self {
        Self {
            game: Game::new(config),
            board_view: BoardView::default(),
            computer_due: false,
            message: None,
        }
    }

    fn new_game(&mut self) {
        info!("new game");
        self.game.reset();
        self.computer_due = false;
        self.message = None;
    }

    /// Let the computer move one frame after it became its turn
    fn drive_computer(&mut self, ctx: &Context) {
        if !self.game.is_computer_turn() {
            self.computer_due = false;
            return;
        }
        if !self.computer_due {
            self.computer_due = true;
            ctx.request_repaint();
            return;
        }
        self.computer_due = false;
        match self.game.play_computer() {
            Ok(_) => self.message = None,
            Err(GameError::Search(err)) => self.message = Some(err.to_string()),
            Err(err) => {
                error!(%err, "computer move failed");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Search depth: {}", self.game.search_depth()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CONNECT FOUR").size(20.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_search_card(ui);

                if let Some(outcome) = self.game.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new(msg).size(11.0).color(STATUS_BUSY));
                    });
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (text, color) = if self.game.is_over() {
                ("Game over", TEXT_SECONDARY)
            } else if self.game.is_human_turn() {
                ("Your move (red)", STATUS_OK)
            } else {
                ("Computer thinking (yellow)", STATUS_BUSY)
            };
            ui.label(RichText::new(text).size(16.0).strong().color(color));
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render stats of the computer's last search
    fn render_search_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST SEARCH").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.game.last_search() {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("Column {}", result.column + 1))
                            .size(14.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for the computer...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let text = match outcome {
            Outcome::Winner(HUMAN) => "You win!",
            Outcome::Winner(_) => "The computer wins",
            Outcome::Draw => "Draw",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let turn = self.game.is_human_turn().then_some(HUMAN);
                let clicked = self.board_view.show(
                    ui,
                    self.game.board(),
                    turn,
                    self.game.last_move(),
                    self.game.winning_line(),
                );

                if let Some(col) = clicked {
                    match self.game.play_human(col) {
                        Ok(_) => self.message = None,
                        Err(err) => self.message = Some(err.to_string()),
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.drive_computer(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.game.is_computer_turn() {
            ctx.request_repaint();
        }
    }
}
