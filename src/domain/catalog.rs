use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Fixed set of marketplace categories. Stored as their SCREAMING_SNAKE_CASE
/// names in the `category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Supermarket,
    Computing,
    Travels,
    Baby,
    Appliances,
    Others,
    Books,
    Electronics,
    Phones,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Supermarket => "SUPERMARKET",
            Category::Computing => "COMPUTING",
            Category::Travels => "TRAVELS",
            Category::Baby => "BABY",
            Category::Appliances => "APPLIANCES",
            Category::Others => "OTHERS",
            Category::Books => "BOOKS",
            Category::Electronics => "ELECTRONICS",
            Category::Phones => "PHONES",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPERMARKET" => Ok(Category::Supermarket),
            "COMPUTING" => Ok(Category::Computing),
            "TRAVELS" => Ok(Category::Travels),
            "BABY" => Ok(Category::Baby),
            "APPLIANCES" => Ok(Category::Appliances),
            "OTHERS" => Ok(Category::Others),
            "BOOKS" => Ok(Category::Books),
            "ELECTRONICS" => Ok(Category::Electronics),
            "PHONES" => Ok(Category::Phones),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A live catalog entry. `quantity` is the stock on hand and must stay ≥ 0;
/// it is only ever decremented by successful checkouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub selling_price: BigDecimal,
    pub amount_discounted: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
}

/// Input for catalog insertion, with discount fields already resolved.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub selling_price: BigDecimal,
    pub amount_discounted: BigDecimal,
    pub percentage_discount: i32,
    pub quantity: i32,
    pub description: String,
    pub image_url: String,
    pub vendor_id: i64,
}
