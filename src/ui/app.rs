//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use crate::game::{GameController, GameEvent, GameMode, Outcome};
use crate::Stone;

use super::board_view::{BoardFrame, BoardView};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    game: GameController,
    board_view: BoardView,
    show_debug: bool,
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, game: GameController) -> Self {
        Self {
            game,
            board_view: BoardView::default(),
            show_debug: true,
            message: None,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.game.reset(mode);
        self.message = None;
    }

    fn undo(&mut self) {
        if let Err(err) = self.game.try_undo() {
            self.message = Some(err.to_string());
        }
    }

    /// Turn queued controller events into status text
    fn process_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::StonePlaced { .. } | GameEvent::GameReset { .. } => self.message = None,
                GameEvent::MovesUndone { cells } => {
                    self.message = Some(format!("Took back {} move(s)", cells.len()));
                }
                GameEvent::AiThinkingEnded { best_move: None, .. } => {
                    self.message = Some("AI could not find a move".to_string());
                }
                other => debug!(?other, "event"),
            }
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for mode in GameMode::ALL {
                        if ui.button(format!("New Game ({})", mode.label())).clicked() {
                            self.new_game(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.game.mode().label());
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU 15x15").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.game.outcome().cloned() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.game.current_player();
            let (fill, rim) = match turn {
                Stone::White => (WHITE_STONE, WHITE_STONE_RIM),
                _ => (BLACK_STONE, BLACK_STONE_SHINE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(44.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, rim));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.game.is_terminal() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.game.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
                    } else if self.game.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Waiting".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(8.0);
            let ledger = self.game.session().ledger();
            ui.label(
                RichText::new(format!(
                    "Black {}  White {}",
                    ledger.count_by(Stone::Black),
                    ledger.count_by(Stone::White)
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let button = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            ui.horizontal(|ui| {
                button.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Undo (U)").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.undo();
                    }
                });
                ui.add_space(4.0);
                button.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.new_game(self.game.mode());
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_list().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_history_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ScrollArea::vertical()
                .max_height(160.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for mv in self.game.move_list() {
                        let text = format!("{:>3}. {} {}", mv.index, mv.stone.name(), mv.pos.notation());
                        ui.label(RichText::new(text).size(11.0).monospace().color(TEXT_SECONDARY));
                    }
                });
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(DEBUG_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = self.game.last_ai_result() else {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                    return;
                };
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(STATUS_OK));
                        ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} cells", result.candidates)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });
                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", pos.notation())).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &Outcome) {
        let headline = match outcome {
            Outcome::Win { winner, .. } => format!("{} WINS!", winner.name().to_uppercase()),
            Outcome::Draw => "DRAW".to_string(),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game(self.game.mode());
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let accepts_input =
                    !self.game.is_terminal() && !self.game.is_ai_thinking() && self.game.is_human_turn();
                let frame = BoardFrame {
                    board: self.game.board(),
                    to_move: self.game.current_player(),
                    last_move: self.game.last_move().map(|m| m.pos),
                    winning_line: self.game.winning_line(),
                    accepts_input,
                };
                let clicked = self.board_view.show(ui, &frame);

                if let Some(pos) = clicked {
                    if let Err(err) = self.game.try_move(pos.row.into(), pos.col.into()) {
                        self.message = Some(err.to_string());
                    }
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.undo();
        }
        if new_game {
            self.new_game(self.game.mode());
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.game.poll_ai();
        self.process_events();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.game.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
