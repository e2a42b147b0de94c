//! Main application for the four-in-a-row GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::AppConfig;
use crate::session::{GameMode, Phase};
use crate::setup::SetupStep;
use crate::Outcome;

/// Main application
pub struct FourInRowApp {
    state: GameState,
    board_view: BoardView,
}

impl FourInRowApp {
    /// Create the app from the loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig, seed: Option<u64>) -> Self {
        Self {
            state: GameState::new(Duration::from_millis(config.ai_delay_ms), seed),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.state.session.can_undo(), egui::Button::new("Undo (U)"))
                        .clicked()
                    {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.session.phase() {
                        Phase::Setup => "Setup",
                        _ => match self.state.session.mode() {
                            GameMode::VsComputer => "vs Computer",
                            GameMode::TwoPlayer => "Two players",
                        },
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with status and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                if self.state.session.phase() != Phase::Setup {
                    self.render_actions_card(ui);
                }

                if let Phase::Ended(outcome) = self.state.session.phase() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
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
            ui.label(RichText::new("FOUR IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("5 × 5").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Status line with the colour of the player to move
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let session = &self.state.session;
            let color = match session.phase() {
                Phase::Setup => TEXT_SECONDARY,
                Phase::InProgress if self.state.is_ai_thinking() => STATUS_THINKING,
                Phase::InProgress => STATUS_TURN,
                Phase::Ended(_) if self.state.is_computer_win() => STATUS_LOSS,
                Phase::Ended(_) => WIN_HIGHLIGHT,
            };

            ui.horizontal(|ui| {
                if session.is_active() {
                    let piece = session.players().get(session.current_player());
                    ui.label(RichText::new("●").size(22.0).color(piece_color(piece.color)));
                }
                ui.label(RichText::new(self.state.status_text()).size(15.0).strong().color(color));
            });
        });
    }

    /// Undo / restart buttons and move counter
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let undo = egui::Button::new(RichText::new("↩ Undo").color(TEXT_PRIMARY)).fill(BUTTON_BG);
                if ui.add_enabled(self.state.session.can_undo(), undo).clicked() {
                    self.state.undo();
                }

                ui.add_space(4.0);

                let restart = egui::Button::new(RichText::new("⟲ Restart").color(TEXT_PRIMARY)).fill(BUTTON_BG);
                if ui.add(restart).clicked() {
                    self.state.restart();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(selection) = self.state.last_ai_selection {
                ui.label(
                    RichText::new(format!("Computer: {} ({:?})", selection.pos, selection.kind))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let headline = match outcome {
            Outcome::Win(_) if self.state.is_computer_win() => "YOU LOST",
            Outcome::Win(_) => "🎉 GAME OVER",
            Outcome::Draw => "DRAW",
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(headline).size(12.0).color(TEXT_PRIMARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("Play again").size(14.0).strong()).clicked() {
                        self.state.restart();
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

    /// Mode and city choice, shown instead of the board during setup
    fn render_setup(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(self.state.status_text());
                ui.add_space(20.0);

                match self.state.setup.step().clone() {
                    SetupStep::ChooseMode => {
                        if ui.button(RichText::new("Two players").size(16.0)).clicked() {
                            self.state.choose_mode(GameMode::TwoPlayer);
                        }
                        ui.add_space(8.0);
                        if ui.button(RichText::new("Play the computer").size(16.0)).clicked() {
                            self.state.choose_mode(GameMode::VsComputer);
                        }
                    }
                    SetupStep::ChooseCity { .. } => {
                        for city in self.state.setup.city_options() {
                            let button = egui::Button::new(RichText::new(city.name).size(15.0).color(TEXT_PRIMARY))
                                .fill(piece_color(city.color).gamma_multiply(0.6))
                                .min_size(CITY_BUTTON_SIZE.into());
                            if ui.add(button).clicked() {
                                self.state.choose_city(city.name);
                            }
                            ui.add_space(4.0);
                        }
                    }
                    SetupStep::Ready { .. } => {}
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let session = &self.state.session;
            let winning_line = session.winning_line();

            let clicked = self.board_view.show(
                ui,
                session.board(),
                session.players(),
                session.current_player(),
                session.last_move(),
                winning_line.as_deref(),
                self.state.accepts_clicks(),
            );

            // Occupied cells and off-turn clicks are silently ignored
            if let Some(pos) = clicked {
                let _ = self.state.try_place(pos, Instant::now());
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, restart) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.state.undo();
        }
        if restart {
            self.state.restart();
        }
    }
}

impl eframe::App for FourInRowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Play the computer's move once its delay has passed
        let now = Instant::now();
        self.state.check_ai(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        if self.state.session.phase() == Phase::Setup {
            self.render_setup(ctx);
        } else {
            self.render_board(ctx);
        }

        // Wake up again when the computer is due
        if let Some(remaining) = self.state.ai_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
