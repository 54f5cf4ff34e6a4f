//! Main application UI.

use std::path::PathBuf;

use chrono::{DateTime, Datelike, Local, NaiveDate};
use eframe::egui::{self, Align, Layout};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::entities::employees;
use crate::entities::holidays;
use crate::entities::sea_orm_active_enums::{HolidayType, Position, Role};
use crate::models::employee::{CreateEmployee, UpdateEmployee};
use crate::models::holiday::{HolidayRequest, HolidayRow};
use crate::rules::{self, HolidayPeriod, ISO_DATE_FORMAT};
use crate::{db, export, holidays as holiday_ops, staff};

use super::components::colors;
use super::{dashboard, holiday_panel, settings_panel, staff_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Employees,
    Holidays,
    Settings,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Employees => "Employees",
            Panel::Holidays => "Holidays",
            Panel::Settings => "Settings",
        }
    }
}

/// Messages sent from async tasks back to the UI thread.
pub enum UiMessage {
    // Data loading
    EmployeesLoaded(Vec<employees::Model>),
    HolidaysLoaded(Vec<HolidayRow>),
    LoadError(String),

    // CRUD operations
    EmployeeSaved(employees::Model),
    EmployeeDeleted(i32),
    HolidaySaved { holiday: holidays::Model, modified: bool },
    HolidayDeleted(i32),
    OperationFailed(AppError),
}

/// Form state for employee CRUD.
#[derive(Clone)]
pub struct EmployeeForm {
    pub id: Option<i32>,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub salary: String,
    pub role: Role,
    pub position: Position,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: None,
            last_name: String::new(),
            first_name: String::new(),
            email: String::new(),
            phone: String::new(),
            salary: String::new(),
            role: Role::Employee,
            position: Position::Engineer,
            is_open: false,
            is_editing: false,
        }
    }
}

impl EmployeeForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create a form pre-filled for editing an existing employee.
    pub fn edit(emp: &employees::Model) -> Self {
        Self {
            id: Some(emp.id),
            last_name: emp.last_name.clone(),
            first_name: emp.first_name.clone(),
            email: emp.email.clone(),
            phone: emp.phone.clone().unwrap_or_default(),
            salary: format!("{:.2}", emp.salary),
            role: emp.role,
            position: emp.position,
            is_open: true,
            is_editing: true,
        }
    }
}

/// Form state for holiday CRUD.
#[derive(Clone)]
pub struct HolidayForm {
    pub id: Option<i32>,
    pub employee_id: Option<i32>,
    pub start_date_input: String,
    pub end_date_input: String,
    /// Date picker state, mirrored into the text inputs when changed.
    pub start_pick: NaiveDate,
    pub end_pick: NaiveDate,
    pub holiday_type: HolidayType,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for HolidayForm {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            id: None,
            employee_id: None,
            start_date_input: String::new(),
            end_date_input: String::new(),
            start_pick: today,
            end_pick: today,
            holiday_type: HolidayType::Paid,
            is_open: false,
            is_editing: false,
        }
    }
}

impl HolidayForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Empty form for a new holiday, optionally for a preselected employee.
    pub fn new_for(employee_id: Option<i32>) -> Self {
        Self {
            employee_id,
            is_open: true,
            ..Default::default()
        }
    }

    /// Create a form pre-filled from a table row.
    pub fn edit(row: &HolidayRow) -> Self {
        Self {
            id: Some(row.id),
            employee_id: Some(row.employee_id),
            start_date_input: row.start_date.format(ISO_DATE_FORMAT).to_string(),
            end_date_input: row.end_date.format(ISO_DATE_FORMAT).to_string(),
            start_pick: row.start_date,
            end_pick: row.end_date,
            holiday_type: row.holiday_type,
            is_open: true,
            is_editing: true,
        }
    }

    /// Period typed so far, if both dates are valid and ordered.
    pub fn period(&self) -> Option<HolidayPeriod> {
        HolidayPeriod::parse(&self.start_date_input, &self.end_date_input).ok()
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Employee(i32, String),
    Holiday(i32, String),
}

/// Main application state.
pub struct App {
    // Runtime and database
    pub rt: tokio::runtime::Runtime,
    pub pool: DatabaseConnection,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub current_panel: Panel,

    // Cached data
    pub employees: Vec<employees::Model>,
    pub holidays: Vec<HolidayRow>,

    // Loading states
    pub is_loading: bool,

    // Forms
    pub employee_form: EmployeeForm,
    pub holiday_form: HolidayForm,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub config_modified: bool,

    // Search/filter state
    pub employee_search: String,
    pub holiday_employee_filter: Option<i32>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(pool: DatabaseConnection, config: AppConfig, config_path: PathBuf, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut app = Self {
            rt,
            pool,
            tx,
            rx,
            current_panel: Panel::default(),
            employees: Vec::new(),
            holidays: Vec::new(),
            is_loading: false,
            employee_form: EmployeeForm::default(),
            holiday_form: HolidayForm::default(),
            log_messages: Vec::new(),
            config,
            config_path,
            config_modified: false,
            employee_search: String::new(),
            holiday_employee_filter: None,
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
        };

        // Load initial data
        app.refresh_all();

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Reload employees and holidays.
    pub fn refresh_all(&mut self) {
        self.load_employees();
        self.load_holidays();
    }

    /// Load employees from database.
    pub fn load_employees(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        self.is_loading = true;

        self.rt.spawn(async move {
            match db::employee::list_all(&pool).await {
                Ok(emps) => {
                    let _ = tx.send(UiMessage::EmployeesLoaded(emps));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Load holidays from database.
    pub fn load_holidays(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        self.is_loading = true;

        self.rt.spawn(async move {
            match db::holiday::list_all(&pool).await {
                Ok(rows) => {
                    let _ = tx.send(UiMessage::HolidaysLoaded(rows));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Create a new employee.
    pub fn create_employee(&mut self, data: CreateEmployee) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match staff::create_employee(&pool, data).await {
                Ok(emp) => {
                    let _ = tx.send(UiMessage::EmployeeSaved(emp));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e));
                }
            }
        });
    }

    /// Update an existing employee.
    pub fn update_employee(&mut self, id: i32, data: UpdateEmployee) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match staff::update_employee(&pool, id, data).await {
                Ok(emp) => {
                    let _ = tx.send(UiMessage::EmployeeSaved(emp));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e));
                }
            }
        });
    }

    /// Delete an employee and their holidays.
    pub fn delete_employee(&mut self, id: i32) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match staff::delete_employee(&pool, id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::EmployeeDeleted(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e));
                }
            }
        });
    }

    /// Submit a new holiday, or changes to the holiday `id`.
    pub fn save_holiday(&mut self, id: Option<i32>, request: HolidayRequest) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        let policy = self.config.leave.clone();

        self.rt.spawn(async move {
            let result = match id {
                Some(id) => holiday_ops::modify_holiday(&pool, &policy, id, &request).await,
                None => holiday_ops::add_holiday(&pool, &policy, &request).await,
            };
            match result {
                Ok(holiday) => {
                    let _ = tx.send(UiMessage::HolidaySaved {
                        holiday,
                        modified: id.is_some(),
                    });
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e));
                }
            }
        });
    }

    /// Delete a holiday.
    pub fn delete_holiday(&mut self, id: i32) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match holiday_ops::delete_holiday(&pool, id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::HolidayDeleted(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e));
                }
            }
        });
    }

    /// Ask for confirmation (when enabled) before deleting.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        if self.config.ui.confirm_delete {
            self.delete_target = Some(target);
            self.show_delete_confirm = true;
        } else {
            self.delete_target = Some(target);
            self.confirm_delete();
        }
    }

    /// Export employees to Excel.
    pub fn export_employees(&mut self) {
        let default_name = export::generate_export_filename("employees");
        let Some(path) = export::show_save_dialog(&default_name) else {
            return;
        };

        match export::export_employees_to_excel(&self.employees, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported employees: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Export the visible holidays to Excel.
    pub fn export_holidays(&mut self) {
        let default_name = export::generate_export_filename("holidays");
        let Some(path) = export::show_save_dialog(&default_name) else {
            return;
        };

        let rows: Vec<HolidayRow> = self.filtered_holidays().into_iter().cloned().collect();
        match export::export_holidays_to_excel(&rows, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported {} holidays: {}", rows.len(), path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Write the current configuration back to its file.
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.validate() {
            self.error_message = Some(e.to_string());
            return;
        }

        match self.config.save(&self.config_path) {
            Ok(()) => {
                self.config_modified = false;
                self.success_message = Some("Settings saved".to_string());
                self.log_success(format!("Settings saved to {}", self.config_path.display()));
            }
            Err(e) => {
                tracing::error!("Failed to save config: {}", e);
                self.error_message = Some(format!("Failed to save config: {}", e));
            }
        }
    }

    /// Display name of an employee from the cached list.
    pub fn employee_name(&self, id: i32) -> Option<String> {
        self.employees.iter().find(|e| e.id == id).map(|e| e.display_name())
    }

    /// Holidays matching the employee filter.
    pub fn filtered_holidays(&self) -> Vec<&HolidayRow> {
        self.holidays
            .iter()
            .filter(|h| self.holiday_employee_filter.is_none_or(|id| h.employee_id == id))
            .collect()
    }

    /// Number of employees on holiday today.
    pub fn on_leave_today(&self) -> usize {
        let today = Local::now().date_naive();
        self.holidays.iter().filter(|h| h.is_active_on(today)).count()
    }

    /// Days already taken in `year` by an employee, from the cached table.
    ///
    /// `exclude_id` leaves out the holiday being edited.
    pub fn days_taken(&self, employee_id: i32, year: i32, exclude_id: Option<i32>) -> i64 {
        let periods: Vec<HolidayPeriod> = self
            .holidays
            .iter()
            .filter(|h| h.employee_id == employee_id && Some(h.id) != exclude_id)
            .filter_map(|h| HolidayPeriod::new(h.start_date, h.end_date).ok())
            .collect();
        rules::days_taken_in_year(&periods, year)
    }

    /// Remaining allowance for the current year.
    pub fn remaining_this_year(&self, employee_id: i32) -> i64 {
        let taken = self.days_taken(employee_id, Local::now().year(), None);
        rules::remaining_allowance(taken, &self.config.leave)
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::EmployeesLoaded(emps) => {
                    self.employees = emps;
                    self.is_loading = false;
                }
                UiMessage::HolidaysLoaded(rows) => {
                    self.holidays = rows;
                    self.is_loading = false;
                }
                UiMessage::LoadError(e) => {
                    tracing::error!("Failed to load data: {}", e);
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                    self.is_loading = false;
                }
                UiMessage::EmployeeSaved(emp) => {
                    self.success_message = Some(format!("Employee '{}' saved", emp.display_name()));
                    self.log_success(format!("Employee saved: {}", emp.display_name()));
                    self.employee_form.reset();
                    self.refresh_all();
                }
                UiMessage::EmployeeDeleted(id) => {
                    self.employees.retain(|e| e.id != id);
                    self.holidays.retain(|h| h.employee_id != id);
                    if self.holiday_employee_filter == Some(id) {
                        self.holiday_employee_filter = None;
                    }
                    self.success_message = Some("Employee deleted".to_string());
                    self.log_success("Employee deleted");
                }
                UiMessage::HolidaySaved { holiday, modified } => {
                    let verb = if modified { "modified" } else { "added" };
                    self.success_message = Some(format!("Holiday {verb} successfully"));
                    self.log_success(format!(
                        "Holiday {} {verb}: {} to {}",
                        holiday.id, holiday.start_date, holiday.end_date
                    ));
                    self.holiday_form.reset();
                    self.load_holidays();
                }
                UiMessage::HolidayDeleted(id) => {
                    self.holidays.retain(|h| h.id != id);
                    self.success_message = Some("Holiday deleted".to_string());
                    self.log_success(format!("Holiday {id} deleted"));
                }
                UiMessage::OperationFailed(e) => {
                    let message = e.to_string();
                    self.error_message = Some(message.clone());
                    if e.is_rule_violation() {
                        self.log_warning(message);
                    } else {
                        tracing::error!("Operation failed: {}", message);
                        self.log_error(message);
                    }
                }
            }
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("View", |ui| {
                    for panel in [Panel::Dashboard, Panel::Employees, Panel::Holidays] {
                        if ui.button(panel.name()).clicked() {
                            self.current_panel = panel;
                            ui.close();
                        }
                    }
                    ui.separator();
                    if ui.button("Refresh").clicked() {
                        self.refresh_all();
                        ui.close();
                    }
                });
                ui.menu_button("Settings", |ui| {
                    if ui.button("Leave Policy").clicked() {
                        self.current_panel = Panel::Settings;
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    if self.is_loading {
                        ui.spinner();
                    }
                    ui.colored_label(
                        colors::SUCCESS,
                        format!(
                            "Database: {} ({})",
                            self.config.database.name,
                            self.config.database.driver.label()
                        ),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "Max {} days per holiday, {} days per year",
                            self.config.leave.max_duration_days, self.config.leave.yearly_allowance_days
                        ));
                    });
                });
            });
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Employee(_, name) => (
                    "Delete Employee",
                    format!("Delete employee '{}' and all of their holidays?", name),
                ),
                DeleteTarget::Holiday(id, name) => ("Delete Holiday", format!("Delete holiday {} of '{}'?", id, name)),
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                            self.log_info("Deletion cancelled");
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take() {
            match target {
                DeleteTarget::Employee(id, name) => {
                    self.log_info(format!("Deleting employee: {}", name));
                    self.delete_employee(id);
                }
                DeleteTarget::Holiday(id, name) => {
                    self.log_info(format!("Deleting holiday {} of {}", id, name));
                    self.delete_holiday(id);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint while async operations are pending
        if self.is_loading {
            ctx.request_repaint();
        }

        // Menu bar
        self.show_menu_bar(ctx);

        // Status bar
        self.show_status_bar(ctx);

        // Modal dialogs (error, success, delete confirmation)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Dashboard => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.current_panel = next;
                }
            }
            Panel::Employees => {
                if staff_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Holidays => {
                if holiday_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
            Panel::Settings => {
                if settings_panel::show(self, ui) {
                    self.current_panel = Panel::Dashboard;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, start: (i32, u32, u32), end: (i32, u32, u32)) -> HolidayRow {
        let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        let end = NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap();
        HolidayRow {
            id,
            employee_id: 3,
            employee_name: "Dupont Marie".to_string(),
            start_date: start,
            end_date: end,
            holiday_type: HolidayType::Paid,
            days: (end - start).num_days() + 1,
        }
    }

    #[test]
    fn test_holiday_form_edit_prefills_iso_dates() {
        let form = HolidayForm::edit(&row(9, (2024, 7, 1), (2024, 7, 5)));
        assert_eq!(form.id, Some(9));
        assert_eq!(form.employee_id, Some(3));
        assert_eq!(form.start_date_input, "2024-07-01");
        assert_eq!(form.end_date_input, "2024-07-05");
        assert!(form.is_editing);
        assert_eq!(form.period().map(|p| p.days()), Some(5));
    }

    #[test]
    fn test_holiday_form_period_requires_valid_dates() {
        let mut form = HolidayForm::new_for(Some(1));
        assert!(form.is_open);
        assert!(form.period().is_none());

        form.start_date_input = "2024-07-05".to_string();
        form.end_date_input = "2024-07-01".to_string();
        assert!(form.period().is_none());
    }

    #[test]
    fn test_employee_form_edit_formats_salary() {
        let emp = employees::Model {
            id: 4,
            last_name: "Dupont".to_string(),
            first_name: "Marie".to_string(),
            email: "marie@example.com".to_string(),
            phone: None,
            salary: 3200.5,
            role: Role::Admin,
            position: Position::Pilot,
        };
        let form = EmployeeForm::edit(&emp);
        assert_eq!(form.salary, "3200.50");
        assert_eq!(form.phone, "");
        assert_eq!(form.role, Role::Admin);
    }
}
