//! First-run setup wizard for configuration.

use std::path::PathBuf;
use std::sync::mpsc;

use eframe::egui::{self, Color32, RichText};

use crate::config::{AppConfig, DatabaseDriver};
use crate::db;

/// Connection test state.
#[derive(Default, Clone)]
pub enum ConnectionTestState {
    #[default]
    NotTested,
    Testing,
    Success,
    Failed(String),
}

/// Setup wizard state.
pub struct SetupWizard {
    /// Current step (0-3).
    pub current_step: usize,
    /// Configuration being built.
    pub config: AppConfig,
    /// Database connection test state.
    pub db_test_state: ConnectionTestState,
    /// Wizard completed flag.
    pub completed: bool,
    /// Port input as string for text editing.
    port_input: String,
    /// Policy inputs as strings.
    max_duration_input: String,
    allowance_input: String,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    pub fn new() -> Self {
        Self::from_config(AppConfig::default())
    }

    /// Start from an existing (possibly invalid) configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            current_step: 0,
            port_input: config.database.port.to_string(),
            max_duration_input: config.leave.max_duration_days.to_string(),
            allowance_input: config.leave.yearly_allowance_days.to_string(),
            config,
            db_test_state: ConnectionTestState::NotTested,
            completed: false,
        }
    }

    /// Check if user can proceed to next step.
    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            0 => true, // Welcome - always can proceed
            1 => matches!(self.db_test_state, ConnectionTestState::Success),
            2 => self.validate_leave_step().is_ok(),
            3 => true, // Confirmation
            _ => false,
        }
    }

    /// Validate leave policy inputs.
    fn validate_leave_step(&self) -> Result<(), String> {
        if self.max_duration_input.trim().parse::<u32>().is_err() || self.allowance_input.trim().parse::<u32>().is_err()
        {
            return Err("Enter whole numbers of days".to_string());
        }
        self.config.leave.validate().map_err(|e| e.to_string())
    }

    /// Switch backend, resetting the port and the test result.
    pub fn set_driver(&mut self, driver: DatabaseDriver) {
        if self.config.database.driver == driver {
            return;
        }
        self.config.database.driver = driver;
        self.config.database.port = driver.default_port();
        self.port_input = driver.default_port().to_string();
        if driver == DatabaseDriver::Sqlite {
            self.config.database.name = "holidays.db".to_string();
        }
        self.db_test_state = ConnectionTestState::NotTested;
    }

    /// Get step title.
    fn step_title(&self) -> &'static str {
        match self.current_step {
            0 => "Welcome",
            1 => "Database Configuration",
            2 => "Leave Policy",
            3 => "Confirmation",
            _ => "Setup",
        }
    }

    /// Total number of steps.
    const TOTAL_STEPS: usize = 4;
}

/// Setup wizard application.
pub struct SetupApp {
    pub wizard: SetupWizard,
    pub initial_error: Option<String>,
    pub config_path: PathBuf,
    pub rt: tokio::runtime::Runtime,
    db_test_rx: Option<mpsc::Receiver<Result<(), String>>>,
}

impl SetupApp {
    pub fn new(
        wizard: SetupWizard,
        initial_error: Option<String>,
        config_path: PathBuf,
        rt: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            wizard,
            initial_error,
            config_path,
            rt,
            db_test_rx: None,
        }
    }

    /// Test database connection asynchronously.
    fn start_db_test(&mut self) {
        if let Err(e) = self.wizard.config.database.validate() {
            self.wizard.db_test_state = ConnectionTestState::Failed(e.to_string());
            return;
        }

        let conn_str = self.wizard.config.database.connection_string();
        let (tx, rx) = mpsc::channel();
        self.db_test_rx = Some(rx);
        self.wizard.db_test_state = ConnectionTestState::Testing;

        self.rt.spawn(async move {
            let result = db::test_connection_string(&conn_str).await;
            let _ = tx.send(result);
        });
    }

    /// Check for async test results.
    fn poll_test_results(&mut self) {
        if let Some(rx) = &self.db_test_rx
            && let Ok(result) = rx.try_recv()
        {
            self.wizard.db_test_state = match result {
                Ok(()) => ConnectionTestState::Success,
                Err(e) => ConnectionTestState::Failed(e),
            };
            self.db_test_rx = None;
        }
    }
}

impl eframe::App for SetupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async test results
        self.poll_test_results();

        // Request repaint while testing
        if matches!(self.wizard.db_test_state, ConnectionTestState::Testing) {
            ctx.request_repaint();
        }

        // Show initial error dialog
        if let Some(err) = self.initial_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(Color32::from_rgb(255, 100, 100), &err);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.initial_error = None;
                    }
                });
            return;
        }

        // Main wizard panel
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Holiday Manager Setup").size(24.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "Step {} of {}",
                            self.wizard.current_step + 1,
                            SetupWizard::TOTAL_STEPS
                        ));
                    });
                });

                ui.separator();
                ui.add_space(10.0);

                // Step title
                ui.heading(self.wizard.step_title());
                ui.add_space(20.0);

                // Step content
                let needs_db_test = match self.wizard.current_step {
                    0 => {
                        show_welcome_step(ui);
                        false
                    }
                    1 => show_database_step(ui, &mut self.wizard),
                    2 => {
                        show_leave_step(ui, &mut self.wizard);
                        false
                    }
                    3 => {
                        show_confirmation_step(ui, &self.wizard, &self.config_path);
                        false
                    }
                    _ => false,
                };

                if needs_db_test {
                    self.start_db_test();
                }

                ui.add_space(30.0);
                ui.separator();

                // Navigation buttons
                ui.horizontal(|ui| {
                    if self.wizard.current_step > 0 && ui.button("< Back").clicked() {
                        self.wizard.current_step -= 1;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.wizard.current_step < SetupWizard::TOTAL_STEPS - 1 {
                            let btn_text = if self.wizard.current_step == 0 {
                                "Get Started >"
                            } else {
                                "Next >"
                            };
                            let enabled = self.wizard.can_proceed();
                            if ui.add_enabled(enabled, egui::Button::new(btn_text)).clicked() {
                                self.wizard.current_step += 1;
                            }
                        } else {
                            // Final step - Save & Exit
                            if ui.button("Save & Exit").clicked() {
                                self.wizard.completed = true;
                            }
                        }
                    });
                });
            });
        });

        // Handle completion
        if self.wizard.completed {
            match self.wizard.config.save(&self.config_path) {
                Ok(()) => {
                    tracing::info!("Config written to {}", self.config_path.display());
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    self.initial_error = Some(format!("Failed to save config: {}", e));
                    self.wizard.completed = false;
                }
            }
        }
    }
}

fn show_welcome_step(ui: &mut egui::Ui) {
    ui.label("Welcome to Holiday Manager!");
    ui.add_space(10.0);
    ui.label("This wizard will help you configure the application.");
    ui.add_space(20.0);
    ui.label("You will need:");
    ui.add_space(5.0);
    ui.label("  - A PostgreSQL or MySQL server, or a folder for a SQLite file");
    ui.label("  - Your company's holiday limits");
}

fn show_database_step(ui: &mut egui::Ui, wizard: &mut SetupWizard) -> bool {
    let mut needs_test = false;
    let mut driver = wizard.config.database.driver;

    egui::Grid::new("db_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Driver:");
            egui::ComboBox::from_id_salt("db_driver")
                .selected_text(driver.label())
                .show_ui(ui, |ui| {
                    for d in DatabaseDriver::ALL {
                        ui.selectable_value(&mut driver, d, d.label());
                    }
                });
            ui.end_row();

            let file_based = wizard.config.database.driver == DatabaseDriver::Sqlite;

            if !file_based {
                ui.label("Host:");
                ui.text_edit_singleline(&mut wizard.config.database.host);
                ui.end_row();

                ui.label("Port:");
                if ui.text_edit_singleline(&mut wizard.port_input).changed()
                    && let Ok(p) = wizard.port_input.parse()
                {
                    wizard.config.database.port = p;
                }
                ui.end_row();
            }

            ui.label(if file_based { "Database file:" } else { "Database:" });
            ui.text_edit_singleline(&mut wizard.config.database.name);
            ui.end_row();

            if !file_based {
                ui.label("Username:");
                ui.text_edit_singleline(&mut wizard.config.database.username);
                ui.end_row();

                ui.label("Password:");
                ui.add(egui::TextEdit::singleline(&mut wizard.config.database.password).password(true));
                ui.end_row();
            }
        });

    wizard.set_driver(driver);

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        let testing = matches!(wizard.db_test_state, ConnectionTestState::Testing);
        if ui.add_enabled(!testing, egui::Button::new("Test Connection")).clicked() {
            needs_test = true;
        }

        ui.add_space(10.0);

        match &wizard.db_test_state {
            ConnectionTestState::NotTested => {
                ui.label("Not tested");
            }
            ConnectionTestState::Testing => {
                ui.spinner();
                ui.label("Testing...");
            }
            ConnectionTestState::Success => {
                ui.colored_label(Color32::from_rgb(100, 200, 100), "Connection successful!");
            }
            ConnectionTestState::Failed(e) => {
                ui.colored_label(Color32::from_rgb(255, 100, 100), format!("Failed: {}", e));
            }
        }
    });

    needs_test
}

fn show_leave_step(ui: &mut egui::Ui, wizard: &mut SetupWizard) {
    ui.label("Limits applied when holidays are requested or modified.");
    ui.add_space(10.0);

    egui::Grid::new("leave_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Max days per holiday:");
            if ui.text_edit_singleline(&mut wizard.max_duration_input).changed()
                && let Ok(d) = wizard.max_duration_input.trim().parse()
            {
                wizard.config.leave.max_duration_days = d;
            }
            ui.end_row();

            ui.label("Yearly allowance (days):");
            if ui.text_edit_singleline(&mut wizard.allowance_input).changed()
                && let Ok(d) = wizard.allowance_input.trim().parse()
            {
                wizard.config.leave.yearly_allowance_days = d;
            }
            ui.end_row();
        });

    // Validation feedback
    if let Err(e) = wizard.validate_leave_step() {
        ui.add_space(10.0);
        ui.colored_label(Color32::from_rgb(255, 100, 100), e);
    }
}

fn show_confirmation_step(ui: &mut egui::Ui, wizard: &SetupWizard, config_path: &std::path::Path) {
    ui.label("Review your configuration:");
    ui.add_space(10.0);

    let db = &wizard.config.database;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Database");
        if db.driver == DatabaseDriver::Sqlite {
            ui.label(format!("  {} file {}", db.driver.label(), db.name));
        } else {
            ui.label(format!(
                "  {} {}@{}:{}/{}",
                db.driver.label(),
                db.username,
                db.host,
                db.port,
                db.name
            ));
        }
    });

    ui.add_space(10.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Leave Policy");
        ui.label(format!("  Max per holiday: {} days", wizard.config.leave.max_duration_days));
        ui.label(format!("  Yearly allowance: {} days", wizard.config.leave.yearly_allowance_days));
    });

    ui.add_space(20.0);
    ui.label(format!("Click 'Save & Exit' to write {}.", config_path.display()));
    ui.label("You will need to restart the application after setup.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_step_requires_successful_test() {
        let mut wizard = SetupWizard::new();
        assert!(wizard.can_proceed());

        wizard.current_step = 1;
        assert!(!wizard.can_proceed());

        wizard.db_test_state = ConnectionTestState::Success;
        assert!(wizard.can_proceed());
    }

    #[test]
    fn test_set_driver_resets_port_and_test() {
        let mut wizard = SetupWizard::new();
        wizard.db_test_state = ConnectionTestState::Success;

        wizard.set_driver(DatabaseDriver::Mysql);
        assert_eq!(wizard.config.database.port, 3306);
        assert!(matches!(wizard.db_test_state, ConnectionTestState::NotTested));

        wizard.set_driver(DatabaseDriver::Sqlite);
        assert_eq!(wizard.config.database.name, "holidays.db");
    }

    #[test]
    fn test_leave_step_validation() {
        let mut wizard = SetupWizard::new();
        wizard.current_step = 2;
        assert!(wizard.can_proceed());

        wizard.allowance_input = "many".to_string();
        assert!(!wizard.can_proceed());

        wizard.allowance_input = "0".to_string();
        wizard.config.leave.yearly_allowance_days = 0;
        assert!(!wizard.can_proceed());
    }
}
