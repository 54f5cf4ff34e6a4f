//! Employee management panel with full CRUD, search, and filter functionality.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, CALENDAR_PLUS, FILE_XLS, PENCIL, PLUS, TRASH};
use sea_orm::Iterable;

use super::app::{App, DeleteTarget, EmployeeForm, HolidayForm, Panel};
use super::components::{
    action_button, back_button, colors, danger_action_button, panel_header, primary_button_with_icon, styled_button,
    styled_button_with_icon,
};
use crate::entities::sea_orm_active_enums::{Position, Role};
use crate::models::employee::{CreateEmployee, UpdateEmployee};

/// Show the staff panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Staff");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Employee").clicked() {
            app.employee_form = EmployeeForm {
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_employees();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_employees();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.employee_search)
                .desired_width(200.0)
                .hint_text("Name or email..."),
        );

        if !app.employee_search.is_empty() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.employee_search.clear();
            }
        }
    });

    ui.add_space(15.0);

    // Table
    if let Some(panel) = show_table(app, ui) {
        app.current_panel = panel;
    }

    // Form dialog
    if app.employee_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;
    let needle = app.employee_search.trim().to_lowercase();

    let filtered: Vec<_> = app
        .employees
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.display_name().to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    ui.label(format!(
        "Showing {} of {} employees",
        filtered.len(),
        app.employees.len()
    ));

    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("staff_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("employees_grid")
            .num_columns(8)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Phone");
                ui.strong("Salary");
                ui.strong("Role");
                ui.strong("Position");
                ui.strong("Days Left");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for emp in &filtered {
                    ui.label(emp.display_name());
                    ui.label(&emp.email);
                    ui.label(emp.phone.as_deref().unwrap_or("-"));
                    ui.label(format!("{:.2}", emp.salary));
                    ui.label(emp.role.label());
                    ui.label(emp.position.label());

                    let remaining = app.remaining_this_year(emp.id);
                    if remaining == 0 {
                        ui.colored_label(colors::WARNING, "0");
                    } else {
                        ui.label(remaining.to_string());
                    }

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.employee_form = EmployeeForm::edit(emp);
                        }
                        ui.add_space(4.0);
                        if action_button(ui, CALENDAR_PLUS, "Request holiday").clicked() {
                            app.holiday_form = HolidayForm::new_for(Some(emp.id));
                            next_panel = Some(Panel::Holidays);
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.request_delete(DeleteTarget::Employee(emp.id, emp.display_name()));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    next_panel
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.employee_form.is_editing {
        "Edit Employee"
    } else {
        "Add Employee"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .max_height(500.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                egui::Grid::new("emp_form_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        let form = &mut app.employee_form;

                        ui.label("Last Name:");
                        ui.add(egui::TextEdit::singleline(&mut form.last_name).desired_width(250.0));
                        ui.end_row();

                        ui.label("First Name:");
                        ui.add(egui::TextEdit::singleline(&mut form.first_name).desired_width(250.0));
                        ui.end_row();

                        ui.label("Email:");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.email)
                                .desired_width(250.0)
                                .hint_text("name@company.com"),
                        );
                        ui.end_row();

                        ui.label("Phone:");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.phone)
                                .desired_width(150.0)
                                .hint_text("Optional"),
                        );
                        ui.end_row();

                        ui.label("Salary:");
                        ui.vertical(|ui| {
                            let is_valid = form.salary.trim().is_empty() || parse_salary(&form.salary).is_some();
                            let text_color = if is_valid {
                                ui.visuals().text_color()
                            } else {
                                colors::ERROR
                            };
                            ui.add(
                                egui::TextEdit::singleline(&mut form.salary)
                                    .desired_width(120.0)
                                    .hint_text("0.00")
                                    .text_color(text_color),
                            );
                            if !is_valid {
                                ui.colored_label(colors::ERROR, "Invalid amount");
                            }
                        });
                        ui.end_row();

                        ui.label("Role:");
                        egui::ComboBox::from_id_salt("emp_form_role")
                            .width(150.0)
                            .selected_text(form.role.label())
                            .show_ui(ui, |ui| {
                                for role in Role::iter() {
                                    ui.selectable_value(&mut form.role, role, role.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Position:");
                        egui::ComboBox::from_id_salt("emp_form_position")
                            .width(150.0)
                            .selected_text(form.position.label())
                            .show_ui(ui, |ui| {
                                for position in Position::iter() {
                                    ui.selectable_value(&mut form.position, position, position.label());
                                }
                            });
                        ui.end_row();
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.employee_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        save_employee(app);
                    }
                });
            });
        });
}

/// Accept "1234.5" as well as "1 234,50".
fn parse_salary(input: &str) -> Option<f64> {
    let cleaned: String = input.trim().chars().filter(|c| !c.is_whitespace()).collect();
    cleaned
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn save_employee(app: &mut App) {
    let form = &app.employee_form;

    let salary = if form.salary.trim().is_empty() {
        0.0
    } else {
        match parse_salary(&form.salary) {
            Some(v) => v,
            None => {
                app.error_message = Some("Invalid salary (must be a positive number)".to_string());
                return;
            }
        }
    };

    let phone = Some(form.phone.trim().to_string()).filter(|p| !p.is_empty());

    match form.id.filter(|_| form.is_editing) {
        Some(id) => {
            let data = UpdateEmployee {
                last_name: Some(form.last_name.clone()),
                first_name: Some(form.first_name.clone()),
                email: Some(form.email.clone()),
                phone: Some(phone),
                salary: Some(salary),
                role: Some(form.role),
                position: Some(form.position),
            };
            if let Err(e) = data.validate() {
                app.error_message = Some(e.to_string());
                return;
            }
            app.update_employee(id, data);
        }
        None => {
            let data = CreateEmployee {
                last_name: form.last_name.clone(),
                first_name: form.first_name.clone(),
                email: form.email.clone(),
                phone,
                salary,
                role: form.role,
                position: form.position,
            };
            if let Err(e) = data.validate() {
                app.error_message = Some(e.to_string());
                return;
            }
            app.create_employee(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("1234.5"), Some(1234.5));
        assert_eq!(parse_salary(" 1 234,50 "), Some(1234.5));
        assert_eq!(parse_salary("-3"), None);
        assert_eq!(parse_salary("abc"), None);
    }
}
