use serde::{Deserialize, Serialize};

/// One month of sales for the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub year: i32,
    pub month: String,
    #[serde(rename = "albumsSold", alias = "unitsSold")]
    pub units_sold: u64,
    pub selling_price: f64,
}

impl SalesRecord {
    pub fn new(year: i32, month: &str, units_sold: u64, selling_price: f64) -> Self {
        Self {
            year,
            month: month.to_string(),
            units_sold,
            selling_price,
        }
    }
}
