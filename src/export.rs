// src/export.rs

//! Renders the answer log into an `.xlsx` workbook on disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use sqlx::SqlitePool;

use crate::{error::AppError, models::answer::AnswerRecord, store};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Answer records";
const HEADERS: [&str; 6] = ["No.", "User", "Quiz ID", "Selected", "Result", "Time"];
const COLUMN_WIDTHS: [f64; 6] = [8.0, 20.0, 15.0, 12.0, 12.0, 18.0];

const HEADER_FILL: u32 = 0x4472C4;
const BORDER_GREY: u32 = 0xD0D0D0;
const CORRECT_FONT: u32 = 0x008000;
const CORRECT_FILL: u32 = 0xE2EFDA;
const WRONG_FONT: u32 = 0xFF0000;
const WRONG_FILL: u32 = 0xFCE4D6;

/// Where an export landed and how many answer rows it holds.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub file_name: String,
    /// Data rows, excluding the header.
    pub rows: usize,
}

/// Reads every answer record and writes them to a new workbook in `export_dir`.
pub async fn export_all(pool: &SqlitePool, export_dir: &Path) -> Result<ExportSummary, AppError> {
    let records = store::all_records(pool).await?;
    let export_dir = export_dir.to_path_buf();

    let summary = tokio::task::spawn_blocking(move || {
        write_workbook(&records, &export_dir, Local::now())
    })
    .await
    .map_err(|e| AppError::InternalServerError(e.to_string()))??;

    tracing::info!(
        "Exported {} answer records to {}",
        summary.rows,
        summary.path.display()
    );
    Ok(summary)
}

/// File name for an export generated at `at`.
pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("quiz_records_{}.xlsx", at.format("%Y%m%d_%H%M%S_%3f"))
}

/// First free path for an export at `at`. Earlier exports are never overwritten:
/// a taken name gets a `_1`, `_2`, ... suffix.
fn unused_export_path(export_dir: &Path, at: DateTime<Local>) -> (PathBuf, String) {
    let base = export_file_name(at);
    let mut file_name = base.clone();
    let mut n = 0;
    while export_dir.join(&file_name).exists() {
        n += 1;
        file_name = format!("{}_{}.xlsx", base.trim_end_matches(".xlsx"), n);
    }
    (export_dir.join(&file_name), file_name)
}

/// Writes `records` (already ordered newest first) under `export_dir`,
/// creating the directory if it is missing.
pub fn write_workbook(
    records: &[AnswerRecord],
    export_dir: &Path,
    at: DateTime<Local>,
) -> Result<ExportSummary, AppError> {
    std::fs::create_dir_all(export_dir)?;

    let (path, file_name) = unused_export_path(export_dir, at);

    let mut workbook = Workbook::new();
    fill_sheet(&mut workbook, records)?;
    workbook.save(&path)?;

    Ok(ExportSummary {
        path,
        file_name,
        rows: records.len(),
    })
}

fn fill_sheet(workbook: &mut Workbook, records: &[AnswerRecord]) -> Result<(), XlsxError> {
    let base = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_GREY));
    let header = base
        .clone()
        .set_font_size(12.0)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL));
    let name = base.clone().set_bold();
    let correct = base
        .clone()
        .set_bold()
        .set_font_color(Color::RGB(CORRECT_FONT))
        .set_background_color(Color::RGB(CORRECT_FILL));
    let wrong = base
        .clone()
        .set_bold()
        .set_font_color(Color::RGB(WRONG_FONT))
        .set_background_color(Color::RGB(WRONG_FILL));

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, (title, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, width)?;
        sheet.write_string_with_format(0, col, *title, &header)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let result_format = if record.is_correct { &correct } else { &wrong };

        sheet.write_number_with_format(row, 0, (i + 1) as f64, &base)?;
        sheet.write_string_with_format(row, 1, &record.user_name, &name)?;
        sheet.write_string_with_format(row, 2, &record.quiz_id, &base)?;
        sheet.write_string_with_format(row, 3, &record.selected_option, &base)?;
        sheet.write_string_with_format(row, 4, record.result_label(), result_format)?;
        sheet.write_string_with_format(row, 5, &record.clock_time(), &base)?;
    }

    Ok(())
}
