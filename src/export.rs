//! Excel export functionality.

use crate::entities::employees;
use crate::models::holiday::HolidayRow;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::{Path, PathBuf};

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Export the holiday table to an Excel file.
pub fn export_holidays_to_excel(rows: &[HolidayRow], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Holidays")?;

    let header_format = header_format();

    // Headers
    let headers = ["ID", "Employee", "Start Date", "End Date", "Type", "Days"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 8)?; // ID
    worksheet.set_column_width(1, 30)?; // Employee
    worksheet.set_column_width(2, 12)?; // Start Date
    worksheet.set_column_width(3, 12)?; // End Date
    worksheet.set_column_width(4, 10)?; // Type
    worksheet.set_column_width(5, 8)?; // Days

    // Data rows
    for (idx, record) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_number(row, 0, record.id)?;
        worksheet.write_string(row, 1, &record.employee_name)?;
        worksheet.write_string(row, 2, record.start_date.to_string())?;
        worksheet.write_string(row, 3, record.end_date.to_string())?;
        worksheet.write_string(row, 4, record.holiday_type.label())?;
        worksheet.write_number(row, 5, record.days as f64)?;
    }

    // Autofilter
    if !rows.is_empty() {
        let last_row = rows.len() as u32;
        worksheet.autofilter(0, 0, last_row, 5)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export employees to Excel file.
pub fn export_employees_to_excel(employees: &[employees::Model], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Employees")?;

    let header_format = header_format();
    let salary_format = Format::new().set_num_format("#,##0.00");

    // Headers
    let headers = ["Last Name", "First Name", "Email", "Phone", "Salary", "Role", "Position"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 20)?; // Last Name
    worksheet.set_column_width(1, 20)?; // First Name
    worksheet.set_column_width(2, 30)?; // Email
    worksheet.set_column_width(3, 16)?; // Phone
    worksheet.set_column_width(4, 12)?; // Salary
    worksheet.set_column_width(5, 10)?; // Role
    worksheet.set_column_width(6, 14)?; // Position

    // Data rows
    for (idx, emp) in employees.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &emp.last_name)?;
        worksheet.write_string(row, 1, &emp.first_name)?;
        worksheet.write_string(row, 2, &emp.email)?;
        worksheet.write_string(row, 3, emp.phone.as_deref().unwrap_or(""))?;
        worksheet.write_number_with_format(row, 4, emp.salary, &salary_format)?;
        worksheet.write_string(row, 5, emp.role.label())?;
        worksheet.write_string(row, 6, emp.position.label())?;
    }

    // Autofilter
    if !employees.is_empty() {
        let last_row = employees.len() as u32;
        worksheet.autofilter(0, 0, last_row, 6)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::sea_orm_active_enums::HolidayType;
    use chrono::NaiveDate;

    #[test]
    fn test_export_filename_shape() {
        let name = generate_export_filename("holidays");
        assert!(name.starts_with("holidays_"));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(name.len(), "holidays_".len() + 15 + ".xlsx".len());
    }

    #[test]
    fn test_export_holidays_writes_file() {
        let rows = vec![HolidayRow {
            id: 1,
            employee_id: 7,
            employee_name: "Dupont Marie".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            holiday_type: HolidayType::Paid,
            days: 5,
        }];

        let path = std::env::temp_dir().join(format!("holiday_export_test_{}.xlsx", std::process::id()));
        export_holidays_to_excel(&rows, &path).unwrap();

        let size = std::fs::metadata(&path).unwrap().len();
        assert!(size > 0);
        let _ = std::fs::remove_file(&path);
    }
}
