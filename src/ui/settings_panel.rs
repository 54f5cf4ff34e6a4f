//! Settings panel for leave policy, logging, and UI options.

use eframe::egui::{self, RichText};

use super::app::App;
use super::components::{back_button, colors, panel_header};
use crate::config::LeaveConfig;
use crate::logging;

/// Show the settings panel.
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut egui::Ui) -> bool {
    let go_back = back_button(ui);
    panel_header(ui, "Settings");

    egui::ScrollArea::vertical().show(ui, |ui| {
        // Leave Policy
        ui.group(|ui| {
            ui.heading("Leave Policy");
            ui.add_space(5.0);

            egui::Grid::new("leave_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Max days per holiday:");
                    if ui
                        .add(egui::DragValue::new(&mut app.config.leave.max_duration_days).range(1..=366))
                        .changed()
                    {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Yearly allowance (days):");
                    if ui
                        .add(egui::DragValue::new(&mut app.config.leave.yearly_allowance_days).range(1..=366))
                        .changed()
                    {
                        app.config_modified = true;
                    }
                    ui.end_row();
                });

            ui.add_space(5.0);
            ui.label(RichText::new("Applies to new and modified holidays; stored ones are not re-checked.").weak());
        });

        ui.add_space(15.0);

        // Database (read-only while connected)
        ui.group(|ui| {
            ui.heading("Database");
            ui.add_space(5.0);

            let db = &app.config.database;
            egui::Grid::new("db_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Driver:");
                    ui.label(db.driver.label());
                    ui.end_row();

                    ui.label("Database:");
                    ui.label(&db.name);
                    ui.end_row();

                    if db.driver.default_port() != 0 {
                        ui.label("Server:");
                        ui.label(format!("{}:{}", db.host, db.port));
                        ui.end_row();
                    }
                });

            ui.add_space(5.0);
            ui.label(RichText::new("Edit the config file or rerun setup to change the connection.").weak());
        });

        ui.add_space(15.0);

        // Logging and UI Options
        ui.group(|ui| {
            ui.heading("Options");
            ui.add_space(5.0);

            if ui
                .checkbox(&mut app.config.ui.confirm_delete, "Ask before deleting")
                .changed()
            {
                app.config_modified = true;
            }

            if ui
                .checkbox(&mut app.config.logging.file_enabled, "Write log files (after restart)")
                .changed()
            {
                app.config_modified = true;
            }

            if let Some(dir) = logging::log_dir() {
                ui.label(RichText::new(format!("Log folder: {}", dir.display())).weak());
            }
        });

        ui.add_space(20.0);

        // Action buttons
        ui.horizontal(|ui| {
            let save_btn = egui::Button::new("Save Settings");
            if ui.add_enabled(app.config_modified, save_btn).clicked() {
                app.save_config();
            }

            if app.config_modified {
                ui.label(RichText::new("(unsaved changes)").color(colors::WARNING).italics());
            }

            if ui.button("Reset Leave Policy").clicked() {
                app.config.leave = LeaveConfig::default();
                app.config_modified = true;
            }
        });

        ui.add_space(5.0);
        ui.label(RichText::new(format!("Config file: {}", app.config_path.display())).weak());
    });

    go_back
}
