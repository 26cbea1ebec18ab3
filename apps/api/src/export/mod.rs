//! Spreadsheet export — bundles generated posts into a downloadable .xlsx.
//!
//! The workbook layout is fixed: one bold header row, then one row per post
//! with 1-based post numbers. An empty batch still produces a valid workbook.

use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::errors::AppError;
use crate::models::post::GeneratedPost;

const SHEET_NAME: &str = "Instagram Posts";
const EXPORT_FILENAME: &str = "generated_posts.xlsx";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const COLUMNS: [&str; 5] = [
    "Post Number",
    "Post Type",
    "Headline & Copy",
    "Hashtags",
    "Caption",
];

/// POST /api/export
///
/// Accepts GeneratedPost-shaped records (missing fields are defaulted by
/// serde) and answers with an xlsx file attachment.
pub async fn handle_export(
    Json(posts): Json<Vec<GeneratedPost>>,
) -> Result<impl IntoResponse, AppError> {
    let buffer = build_workbook(&posts).map_err(|e| AppError::Export(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        buffer,
    ))
}

/// Serializes posts into xlsx bytes.
pub fn build_workbook(posts: &[GeneratedPost]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (idx, post) in posts.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_number(row, 0, (idx + 1) as f64)?;
        worksheet.write_string(row, 1, post.post_type.as_str())?;
        worksheet.write_string(row, 2, &post.headline_copy)?;
        worksheet.write_string(row, 3, &post.hashtags)?;
        worksheet.write_string(row, 4, &post.caption)?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::PostType;

    fn sample_post() -> GeneratedPost {
        GeneratedPost {
            post_type: PostType::Carousel,
            headline_copy: "Slide 1: Why meal prep saves your week".to_string(),
            hashtags: "#mealprep #planning".to_string(),
            caption: "Five lunches, one hour".to_string(),
        }
    }

    #[test]
    fn test_empty_batch_yields_valid_workbook() {
        let buffer = build_workbook(&[]).unwrap();
        // xlsx is a ZIP container; a header-only workbook is still well-formed.
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_populated_workbook_is_larger_than_empty() {
        let empty = build_workbook(&[]).unwrap();
        let posts = vec![sample_post(), sample_post(), sample_post()];
        let populated = build_workbook(&posts).unwrap();
        assert!(populated.len() > empty.len());
    }

    #[test]
    fn test_defaulted_posts_export_without_error() {
        // Records that arrived with missing fields export as blanks, not errors.
        let posts = vec![GeneratedPost::default()];
        let buffer = build_workbook(&posts).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }
}
