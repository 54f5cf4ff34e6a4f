//! Dashboard panel with stats, navigation cards, quick actions, and activity log.

use chrono::{Datelike, Local};
use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CALENDAR_BLANK, GEAR, USERS};

use super::app::{App, HolidayForm, LogLevel, Panel};
use super::components::dashboard_card;

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Holiday Manager").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Employee Records and Holiday Requests").size(14.0).weak());

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 510.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(
                ui,
                "Total Employees",
                &app.employees.len().to_string(),
                "Registered staff",
            );
            stat_card(
                ui,
                "Holidays",
                &count_this_year(app).to_string(),
                "Starting this year",
            );
            stat_card(
                ui,
                "On Leave Today",
                &app.on_leave_today().to_string(),
                "Employees away",
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 3.0;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_height = card_width * 0.75;
        let card_size = egui::vec2(card_width, card_height);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "Manage Staff", "Employee records", USERS, card_size).clicked() {
                next_panel = Some(Panel::Employees);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Holidays", "Requests & balances", CALENDAR_BLANK, card_size).clicked() {
                next_panel = Some(Panel::Holidays);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Settings", "Leave policy", GEAR, card_size).clicked() {
                next_panel = Some(Panel::Settings);
            }
        });

        ui.add_space(30.0);
    });

    // Two-column layout: Quick Actions | Recent Activity
    let available_width = ui.available_width();
    let column_width = (available_width - 40.0) / 2.0;

    ui.horizontal(|ui| {
        ui.add_space(10.0);

        // Left column - Quick Actions
        ui.vertical(|ui| {
            ui.set_width(column_width);

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(15))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);

                    ui.label(RichText::new("Quick Actions").strong());
                    ui.add_space(10.0);

                    ui.add_enabled_ui(!app.employees.is_empty(), |ui| {
                        if ui.button("Request Holiday").clicked() {
                            app.holiday_form = HolidayForm::new_for(None);
                            next_panel = Some(Panel::Holidays);
                        }
                    });

                    ui.add_space(5.0);

                    if ui.button("Export Holidays").clicked() {
                        app.holiday_employee_filter = None;
                        app.export_holidays();
                    }

                    ui.add_space(5.0);

                    if ui.button("Add Employee").clicked() {
                        app.employee_form.reset();
                        app.employee_form.is_open = true;
                        next_panel = Some(Panel::Employees);
                    }
                });
        });

        ui.add_space(20.0);

        // Right column - Recent Activity
        ui.vertical(|ui| {
            ui.set_width(column_width);

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(15))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);

                    ui.label(RichText::new("Recent Activity").strong());
                    ui.add_space(10.0);

                    ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                        if app.log_messages.is_empty() {
                            ui.label(RichText::new("No recent activity").weak());
                        } else {
                            for entry in app.log_messages.iter().rev().take(10) {
                                let color = match entry.level {
                                    LogLevel::Info => Color32::GRAY,
                                    LogLevel::Success => Color32::from_rgb(100, 200, 100),
                                    LogLevel::Warning => Color32::from_rgb(230, 180, 50),
                                    LogLevel::Error => Color32::from_rgb(230, 100, 100),
                                };

                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                            .small()
                                            .color(Color32::DARK_GRAY),
                                    );
                                    ui.label(RichText::new(&entry.message).color(color));
                                });
                            }
                        }
                    });
                });
        });
    });

    ui.add_space(20.0);

    // Upcoming leave
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Upcoming Holidays").strong());
            ui.add_space(10.0);

            let today = Local::now().date_naive();
            let mut upcoming: Vec<_> = app.holidays.iter().filter(|h| h.end_date >= today).collect();
            upcoming.sort_by_key(|h| (h.start_date, h.id));

            if upcoming.is_empty() {
                ui.label(RichText::new("Nobody is planned to be away").weak());
            }
            for h in upcoming.into_iter().take(5) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{} to {}", h.start_date, h.end_date)).monospace());
                    ui.label(&h.employee_name);
                    ui.label(RichText::new(h.holiday_type.label()).weak());
                });
            }
        });

    next_panel
}

/// Render a stat card with title, value, and subtitle.
fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Count holidays starting in the current year.
fn count_this_year(app: &App) -> usize {
    let year = Local::now().year();
    app.holidays.iter().filter(|h| h.start_date.year() == year).count()
}
