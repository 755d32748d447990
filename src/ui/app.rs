//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use std::time::Instant;

use super::board_view::{BoardScene, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::config::GameConfig;
use crate::session::{GameStatus, MOVE_LIMIT, OPPONENT, PLAYER};
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn toggle_fullscreen(ctx: &Context) {
        let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_hint();
                        ui.close_menu();
                    }
                    if ui.button("Pause (Esc)").clicked() {
                        self.state.toggle_pause();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Fullscreen (F11)").clicked() {
                        Self::toggle_fullscreen(ctx);
                        ui.close_menu();
                    }
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: Black  |  Computer: White");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                let status = self.state.session.status();
                if status.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, status);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.session.next_to_move();
            let (stone_char, color_name, accent, glyph) = if turn == Stone::Black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.session.status().is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.session.is_paused() {
                        ("Paused", TIMER_WARNING)
                    } else if self.state.is_opponent_pending() {
                        ("Computer thinking...", TIMER_WARNING)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Elapsed time and the move counter
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⏱ TIME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let secs = self.state.session.elapsed_secs();
            let color = if self.state.session.is_paused() { TIMER_WARNING } else { TEXT_PRIMARY };
            ui.label(RichText::new(format!("{}s", secs)).size(24.0).color(color));

            ui.add_space(6.0);
            let remaining = self.state.session.moves_remaining();
            let counter_color = if remaining == 0 {
                TIMER_CRITICAL
            } else if remaining <= MOVE_LIMIT / 10 {
                TIMER_WARNING
            } else {
                TEXT_SECONDARY
            };
            ui.label(RichText::new(format!("Moves left: {}", remaining)).size(12.0).color(counter_color));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⚡ ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                let action = |ui: &mut egui::Ui, label: &str| {
                    btn_frame
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            )
                            .clicked()
                        })
                        .inner
                };

                if action(ui, "↩ Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if action(ui, "💡 Hint") {
                    self.state.request_hint();
                }
                ui.add_space(4.0);
                let pause_label = if self.state.session.is_paused() { "▶ Resume" } else { "⏸ Pause" };
                if action(ui, pause_label) {
                    self.state.toggle_pause();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last opponent decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("🔧 AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = self.state.session.last_ai_result() {
                    ui.label(RichText::new(format!("{:?}", result.kind)).size(11.0).strong().color(TIMER_NORMAL));
                    ui.label(
                        RichText::new(format!(
                            "own {} + 0.8 × block {} = {:.1}",
                            result.own_score, result.block_score, result.score
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} cells, {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(pos) = result.best_move {
                        let col = (b'A' + pos.col) as char;
                        ui.label(RichText::new(format!("→ {}{}", col, pos.row)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("Waiting for the computer...").size(10.0).color(TEXT_MUTED));
                }

                let stats = self.state.session.engine().stats();
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{} searches, {} cells total", stats.searches, stats.nodes))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, status: GameStatus) {
        let (headline, detail) = match status {
            GameStatus::Won(winner) if winner == PLAYER => ("BLACK WINS!", "five in a row, well played"),
            GameStatus::Won(winner) if winner == OPPONENT => ("WHITE WINS!", "the computer made five"),
            GameStatus::Won(_) => ("GAME OVER", ""),
            GameStatus::Draw => ("DRAW", "the board is full"),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🎉 GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    let clicked = Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new("🔄 New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            )
                            .clicked()
                        })
                        .inner;
                    if clicked {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let session = &self.state.session;
            let scene = BoardScene {
                board: session.board(),
                last_move: session.last_move(),
                hint: self.state.hint,
                winning_line: session.winning_line(),
                interactive: self.state.is_human_turn() && !session.is_paused(),
                paused: session.is_paused(),
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (pause, fullscreen, debug, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F11),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if pause {
            self.state.toggle_pause();
        }
        if fullscreen {
            Self::toggle_fullscreen(ctx);
        }
        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.state.request_hint();
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.state.tick(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up for the opponent's reply, and once a second for the timer
        if let Some(wait) = self.state.opponent_wait(now) {
            ctx.request_repaint_after(wait);
        }
        if !self.state.session.is_paused() && !self.state.session.status().is_over() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
