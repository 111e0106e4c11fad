//! Main application UI.
//! Draws the flashcard, the known/unknown controls and the progress counter,
//! and drives the trainer's flip timer from the frame loop.

use chrono::Local;
use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, Sense, Vec2};
use flashy_app::export::json::{WordExport, default_file_name, export_json_to_path};
use flashy_app::{CardFace, Config, Trainer, TrainerState};
use std::time::Instant;

const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0xB1, 0xDD, 0xC6);
const CARD_FRONT_COLOR: Color32 = Color32::WHITE;
const CARD_BACK_COLOR: Color32 = Color32::from_rgb(0x91, 0xC2, 0xAF);
const CONGRATS_COLOR: Color32 = Color32::from_rgb(0x2E, 0x8B, 0x57);
const CARD_SIZE: Vec2 = Vec2::new(800.0, 526.0);

/// Main application state
pub struct FlashyApp {
    trainer: Trainer,
    config: Config,

    show_status_dialog: bool,
    status_message: String,
}

impl eframe::App for FlashyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.trainer.tick(now);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(BACKGROUND_COLOR)
                    .inner_margin(egui::Margin::same(40.0)),
            )
            .show(ctx, |ui| self.render_trainer(ui));

        if self.show_status_dialog {
            egui::Window::new("Flashy")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(&self.status_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_status_dialog = false;
                    }
                });
        }

        // Button actions may have scheduled a new flip during this frame
        if let Some(due_in) = self.trainer.flip_due_in(Instant::now()) {
            ctx.request_repaint_after(due_in);
        }
    }
}

impl FlashyApp {
    pub fn new(trainer: Trainer, config: Config) -> Self {
        Self {
            trainer,
            config,
            show_status_dialog: false,
            status_message: String::new(),
        }
    }

    fn render_trainer(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            self.render_card(ui);
            ui.add_space(20.0);

            // Store actions to execute after UI rendering
            let mut action_unknown = false;
            let mut action_known = false;
            let mut action_reset = false;
            let mut action_export = false;

            let enabled = self.trainer.controls_enabled();
            ui.columns(2, |columns| {
                columns[0].vertical_centered(|ui| {
                    let wrong = egui::Button::new(
                        RichText::new("✘").size(48.0).color(Color32::from_rgb(0xE7, 0x4C, 0x3C)),
                    )
                    .min_size(Vec2::splat(100.0));
                    if ui.add_enabled(enabled, wrong).clicked() {
                        action_unknown = true;
                    }
                });
                columns[1].vertical_centered(|ui| {
                    let right = egui::Button::new(
                        RichText::new("✔").size(48.0).color(Color32::from_rgb(0x27, 0xAE, 0x60)),
                    )
                    .min_size(Vec2::splat(100.0));
                    if ui.add_enabled(enabled, right).clicked() {
                        action_known = true;
                    }
                });
            });

            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("Words Left: {}", self.trainer.remaining())).size(16.0),
            );
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Reset Progress").size(14.0))
                    .clicked()
                {
                    action_reset = true;
                }
                if ui
                    .button(RichText::new("Export Words…").size(14.0))
                    .clicked()
                {
                    action_export = true;
                }
            });

            // Execute deferred actions
            let now = Instant::now();
            if action_unknown {
                self.trainer.mark_unknown(now);
            }
            if action_known {
                if let Err(e) = self.trainer.mark_known(now) {
                    self.show_status(format!("Could not save progress: {e}"));
                }
            }
            if action_reset {
                if let Err(e) = self.trainer.reset(now) {
                    log::error!("{e}");
                    self.show_status(format!("Reset failed: {e}"));
                }
            }
            if action_export {
                self.handle_export();
            }
        });
    }

    /// Paints the card face with its language label and word
    fn render_card(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(CARD_SIZE, Sense::hover());
        let painter = ui.painter_at(rect);

        let (fill, title, word, text_color) = match (self.trainer.state(), self.trainer.current_card())
        {
            (TrainerState::AllLearned, _) | (_, None) => (
                CARD_FRONT_COLOR,
                "Congrats!".to_string(),
                "You learned all words!".to_string(),
                CONGRATS_COLOR,
            ),
            (_, Some(card)) => match self.trainer.face() {
                CardFace::Front => (
                    CARD_FRONT_COLOR,
                    self.config.source_language.clone(),
                    card.source_term.clone(),
                    Color32::BLACK,
                ),
                CardFace::Back => (
                    CARD_BACK_COLOR,
                    self.config.target_language.clone(),
                    card.target_term.clone(),
                    Color32::WHITE,
                ),
            },
        };

        painter.rect_filled(rect, 16.0, fill);
        painter.text(
            rect.center_top() + Vec2::new(0.0, 150.0),
            Align2::CENTER_CENTER,
            title,
            FontId::proportional(40.0),
            text_color,
        );
        painter.text(
            rect.center_top() + Vec2::new(0.0, 260.0),
            Align2::CENTER_CENTER,
            word,
            FontId::proportional(60.0),
            text_color,
        );
    }

    /// Handles export of the remaining words to a JSON file
    fn handle_export(&mut self) {
        let now = Local::now();
        // Open file save dialog
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(default_file_name(now))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        let export = WordExport::new(
            self.trainer.deck().pairs(),
            &self.config.source_language,
            &self.config.target_language,
            now,
        );
        match export_json_to_path(&export, &path) {
            Ok(()) => self.show_status(format!(
                "Exported {} words to {}",
                export.words.len(),
                path.display()
            )),
            Err(e) => {
                log::error!("{e}");
                self.show_status(format!("Export failed: {e}"));
            }
        }
    }

    fn show_status(&mut self, message: String) {
        self.status_message = message;
        self.show_status_dialog = true;
    }
}
