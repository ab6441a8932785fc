//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table availability as stored by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Free,
    Reserved,
}

/// Table type (terrace, booth, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableType {
    pub type_name: String,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub table_id: i64,
    pub table_name: String,
    pub table_seat: i32,
    pub table_price: f64,
    pub type_table: TableType,
}
