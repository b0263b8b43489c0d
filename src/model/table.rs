use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the four persisted relations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Providers,
    Receivers,
    FoodListings,
    Claims,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Providers,
        Table::Receivers,
        Table::FoodListings,
        Table::Claims,
    ];

    /// Name of the table in the database.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Providers => "providers",
            Self::Receivers => "receivers",
            Self::FoodListings => "food_listings",
            Self::Claims => "claims",
        }
    }

    /// Primary key column.
    pub fn primary_key(&self) -> &'static str {
        match self {
            Self::Providers => "Provider_ID",
            Self::Receivers => "Receiver_ID",
            Self::FoodListings => "Food_ID",
            Self::Claims => "Claim_ID",
        }
    }

    /// Columns in their persisted order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Providers => &["Provider_ID", "Name", "Provider_Type", "Contact", "City"],
            Self::Receivers => &["Receiver_ID", "Name", "Receiver_Type", "Contact", "City"],
            Self::FoodListings => &[
                "Food_ID",
                "Food_Name",
                "Quantity",
                "Expiry_Date",
                "Provider_ID",
                "Provider_Type",
                "Location",
                "Food_Type",
                "Meal_Type",
            ],
            Self::Claims => &["Claim_ID", "Food_ID", "Receiver_ID", "Timestamp", "Status"],
        }
    }

    /// Singular label used in operator-facing messages, e.g. "Food ID 3".
    pub fn record_label(&self) -> &'static str {
        match self {
            Self::Providers => "Provider",
            Self::Receivers => "Receiver",
            Self::FoodListings => "Food",
            Self::Claims => "Claim",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
