//! Holiday panel: table of requests, employee filter, and the request form.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, HolidayForm};
use super::components::{
    action_button, back_button, colors, danger_action_button, panel_header, primary_button_with_icon, styled_button,
    styled_button_with_icon,
};
use crate::holidays::holiday_types;
use crate::models::holiday::HolidayRequest;
use crate::rules::{self, ISO_DATE_FORMAT};

/// Show the holiday panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Holidays");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        ui.add_enabled_ui(!app.employees.is_empty(), |ui| {
            if primary_button_with_icon(ui, PLUS, "Request Holiday").clicked() {
                app.holiday_form = HolidayForm::new_for(app.holiday_employee_filter);
            }
        });

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.refresh_all();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_holidays();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Employee filter
    ui.horizontal(|ui| {
        ui.label("Employee:");
        let selected = app
            .holiday_employee_filter
            .and_then(|id| app.employee_name(id))
            .unwrap_or_else(|| "All".to_string());
        egui::ComboBox::from_id_salt("holiday_emp_filter")
            .width(220.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(app.holiday_employee_filter.is_none(), "All")
                    .clicked()
                {
                    app.holiday_employee_filter = None;
                }
                for emp in &app.employees {
                    if ui
                        .selectable_label(app.holiday_employee_filter == Some(emp.id), emp.display_name())
                        .clicked()
                    {
                        app.holiday_employee_filter = Some(emp.id);
                    }
                }
            });

        if let Some(id) = app.holiday_employee_filter {
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!(
                    "{} of {} days left this year",
                    app.remaining_this_year(id),
                    app.config.leave.yearly_allowance_days
                ))
                .weak(),
            );

            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.holiday_employee_filter = None;
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    // Form dialog
    if app.holiday_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered: Vec<_> = app.filtered_holidays().into_iter().cloned().collect();

    ui.label(format!(
        "Showing {} of {} holidays",
        filtered.len(),
        app.holidays.len()
    ));

    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("holiday_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("holidays_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("ID");
                ui.strong("Employee");
                ui.strong("Start Date");
                ui.strong("End Date");
                ui.strong("Type");
                ui.strong("Days");
                ui.strong("Actions");
                ui.end_row();

                for row in &filtered {
                    ui.label(row.id.to_string());
                    if ui.link(&row.employee_name).on_hover_text("Open").clicked() {
                        app.holiday_form = HolidayForm::edit(row);
                    }
                    ui.label(row.start_date.format(ISO_DATE_FORMAT).to_string());
                    ui.label(row.end_date.format(ISO_DATE_FORMAT).to_string());
                    ui.label(row.holiday_type.label());
                    ui.label(row.days.to_string());

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.holiday_form = HolidayForm::edit(row);
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.request_delete(DeleteTarget::Holiday(row.id, row.employee_name.clone()));
                        }
                    });

                    ui.end_row();
                }
            });
    });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.holiday_form.is_editing {
        "Modify Holiday"
    } else {
        "Request Holiday"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("holiday_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Employee:");
                    let selected = app
                        .holiday_form
                        .employee_id
                        .and_then(|id| app.employee_name(id))
                        .unwrap_or_else(|| "Select...".to_string());
                    egui::ComboBox::from_id_salt("holiday_form_emp")
                        .width(250.0)
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for emp in &app.employees {
                                ui.selectable_value(&mut app.holiday_form.employee_id, Some(emp.id), emp.display_name());
                            }
                        });
                    ui.end_row();

                    let form = &mut app.holiday_form;

                    ui.label("Start Date:");
                    date_input(ui, "holiday_start", &mut form.start_date_input, &mut form.start_pick);
                    ui.end_row();

                    ui.label("End Date:");
                    date_input(ui, "holiday_end", &mut form.end_date_input, &mut form.end_pick);
                    ui.end_row();

                    ui.label("Type:");
                    egui::ComboBox::from_id_salt("holiday_form_type")
                        .width(150.0)
                        .selected_text(form.holiday_type.label())
                        .show_ui(ui, |ui| {
                            for kind in holiday_types() {
                                ui.selectable_value(&mut form.holiday_type, kind, kind.label());
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(10.0);
            show_balance_hint(app, ui);

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.holiday_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        save_holiday(app);
                    }
                });
            });
        });
}

/// ISO text field paired with a calendar picker; either one updates the other.
fn date_input(ui: &mut Ui, id: &str, text: &mut String, picked: &mut chrono::NaiveDate) {
    ui.horizontal(|ui| {
        let is_valid = text.trim().is_empty() || rules::parse_iso_date(text).is_ok();
        let text_color = if is_valid {
            ui.visuals().text_color()
        } else {
            colors::ERROR
        };

        let response = ui.add(
            egui::TextEdit::singleline(text)
                .desired_width(110.0)
                .hint_text("YYYY-MM-DD")
                .text_color(text_color),
        );
        if response.changed()
            && let Ok(date) = rules::parse_iso_date(text)
        {
            *picked = date;
        }

        if ui.add(DatePickerButton::new(picked).id_salt(id)).changed() {
            *text = picked.format(ISO_DATE_FORMAT).to_string();
        }
    });
}

/// Preview of the period length and yearly balance for the typed dates.
fn show_balance_hint(app: &App, ui: &mut Ui) {
    let form = &app.holiday_form;
    let (Some(employee_id), Some(period)) = (form.employee_id, form.period()) else {
        ui.label(RichText::new("Enter both dates as YYYY-MM-DD").weak());
        return;
    };

    let policy = &app.config.leave;
    let days = period.days();
    let taken = app.days_taken(employee_id, period.year(), form.id);
    let remaining = rules::remaining_allowance(taken, policy);

    ui.label(format!(
        "{} day(s). {} of {} days already taken in {}, {} left.",
        days,
        taken,
        policy.yearly_allowance_days,
        period.year(),
        remaining
    ));

    if let Err(e) = rules::check_duration(&period, policy) {
        ui.colored_label(colors::WARNING, e.to_string());
    } else if let Err(e) = rules::check_allowance(taken, &period, policy) {
        ui.colored_label(colors::WARNING, e.to_string());
    }
}

fn save_holiday(app: &mut App) {
    let form = &app.holiday_form;

    let Some(employee_id) = form.employee_id else {
        app.error_message = Some("Select an employee".to_string());
        return;
    };

    let request = HolidayRequest {
        employee_id,
        start_date: form.start_date_input.clone(),
        end_date: form.end_date_input.clone(),
        holiday_type: form.holiday_type,
    };
    let id = form.id.filter(|_| form.is_editing);

    app.save_holiday(id, request);
}
