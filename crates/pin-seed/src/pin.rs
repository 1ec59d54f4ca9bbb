//! The pin row as stored in `public."Pins"`.

use sqlx::FromRow;

/// One row of `public."Pins"`, fields in column order.
///
/// The table keeps its original quoted PascalCase column names; `"Zdjecia"`
/// is the bytea column holding the image bytes.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PinRow {
    #[sqlx(rename = "ID")]
    pub id: i32,
    #[sqlx(rename = "UserId")]
    pub user_id: i32,
    #[sqlx(rename = "Longitude")]
    pub longitude: f64,
    #[sqlx(rename = "Latitude")]
    pub latitude: f64,
    #[sqlx(rename = "PostTypeId")]
    pub post_type_id: i32,
    #[sqlx(rename = "CategoryId")]
    pub category_id: i32,
    #[sqlx(rename = "Title")]
    pub title: String,
    #[sqlx(rename = "Description")]
    pub description: String,
    #[sqlx(rename = "LikesUp")]
    pub likes_up: i32,
    #[sqlx(rename = "LikesDown")]
    pub likes_down: i32,
    #[sqlx(rename = "Zdjecia")]
    pub image: Vec<u8>,
}
