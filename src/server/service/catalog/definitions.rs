//! The fixed, ordered report menu.

/// A parameterless report: stable key, question it answers, SQL and output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub sql: &'static str,
    pub columns: &'static [&'static str],
}

pub static REPORTS: [ReportDefinition; 24] = [
    ReportDefinition {
        key: "providers_receivers_per_city",
        title: "How many food providers and receivers are there in each city?",
        sql: "SELECT City, COUNT(*) AS Total, 'Providers' AS Type
              FROM providers
              GROUP BY City
              UNION ALL
              SELECT City, COUNT(*) AS Total, 'Receivers' AS Type
              FROM receivers
              GROUP BY City",
        columns: &["City", "Total", "Type"],
    },
    ReportDefinition {
        key: "quantity_by_provider_type",
        title: "Which type of food provider contributes the most food?",
        sql: "SELECT Provider_Type, SUM(Quantity) AS Total_Quantity
              FROM food_listings
              GROUP BY Provider_Type
              ORDER BY Total_Quantity DESC",
        columns: &["Provider_Type", "Total_Quantity"],
    },
    ReportDefinition {
        key: "provider_contacts_in_city",
        title: "What is the contact information of food providers in East Sheena?",
        sql: "SELECT Name, Contact
              FROM providers
              WHERE City = 'East Sheena'",
        columns: &["Name", "Contact"],
    },
    ReportDefinition {
        key: "claims_per_receiver",
        title: "Which receivers have claimed the most food?",
        sql: "SELECT r.Name, COUNT(c.Claim_ID) AS Total_Claims
              FROM claims c
              JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
              GROUP BY r.Name
              ORDER BY Total_Claims DESC",
        columns: &["Name", "Total_Claims"],
    },
    ReportDefinition {
        key: "total_food_quantity",
        title: "What is the total quantity of food available from all providers?",
        sql: "SELECT SUM(Quantity) AS Total_Food_Quantity
              FROM food_listings",
        columns: &["Total_Food_Quantity"],
    },
    ReportDefinition {
        key: "listings_per_city",
        title: "Which city has the highest number of food listings?",
        sql: "SELECT Location AS City, COUNT(*) AS Total_Listings
              FROM food_listings
              GROUP BY Location
              ORDER BY Total_Listings DESC",
        columns: &["City", "Total_Listings"],
    },
    ReportDefinition {
        key: "common_food_types",
        title: "What are the most commonly available food types?",
        sql: "SELECT Food_Type, COUNT(*) AS Count
              FROM food_listings
              GROUP BY Food_Type
              ORDER BY Count DESC",
        columns: &["Food_Type", "Count"],
    },
    ReportDefinition {
        key: "claims_per_food_item",
        title: "How many food claims have been made for each food item?",
        sql: "SELECT f.Food_Name, COUNT(c.Claim_ID) AS Total_Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY f.Food_Name
              ORDER BY Total_Claims DESC",
        columns: &["Food_Name", "Total_Claims"],
    },
    ReportDefinition {
        key: "successful_claims_per_provider",
        title: "Which provider has had the highest number of successful food claims?",
        sql: "SELECT p.Name, COUNT(c.Claim_ID) AS Successful_Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              WHERE c.Status = 'Completed'
              GROUP BY p.Name
              ORDER BY Successful_Claims DESC",
        columns: &["Name", "Successful_Claims"],
    },
    ReportDefinition {
        key: "claim_status_percentage",
        title: "What percentage of food claims are completed vs. pending vs. cancelled?",
        sql: "SELECT Status, COUNT(*) * 100.0 / (SELECT COUNT(*) FROM claims) AS Percentage
              FROM claims
              GROUP BY Status",
        columns: &["Status", "Percentage"],
    },
    ReportDefinition {
        key: "average_quantity_per_receiver",
        title: "What is the average quantity of food claimed per receiver?",
        sql: "SELECT r.Name, AVG(f.Quantity) AS Avg_Claimed_Quantity
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
              GROUP BY r.Name",
        columns: &["Name", "Avg_Claimed_Quantity"],
    },
    ReportDefinition {
        key: "most_claimed_meal_type",
        title: "Which meal type is claimed the most?",
        sql: "SELECT f.Meal_Type, COUNT(*) AS Claim_Count
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY f.Meal_Type
              ORDER BY Claim_Count DESC",
        columns: &["Meal_Type", "Claim_Count"],
    },
    ReportDefinition {
        key: "quantity_donated_per_provider",
        title: "What is the total quantity of food donated by each provider?",
        sql: "SELECT p.Name, SUM(f.Quantity) AS Total_Donated
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Name
              ORDER BY Total_Donated DESC",
        columns: &["Name", "Total_Donated"],
    },
    ReportDefinition {
        key: "expired_items",
        title: "How many expired food items are still listed?",
        sql: "SELECT COUNT(*) AS Expired_Items
              FROM food_listings
              WHERE Expiry_Date < DATE('now')",
        columns: &["Expired_Items"],
    },
    ReportDefinition {
        key: "top_cities_completed_claims",
        title: "What are the top 5 cities with the most completed claims?",
        sql: "SELECT f.Location AS City, COUNT(*) AS Completed_Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              WHERE c.Status = 'Completed'
              GROUP BY f.Location
              ORDER BY Completed_Claims DESC
              LIMIT 5",
        columns: &["City", "Completed_Claims"],
    },
    ReportDefinition {
        key: "top_donated_food_items",
        title: "What are the top 5 most donated food items?",
        sql: "SELECT Food_Name, SUM(Quantity) AS Total_Donated
              FROM food_listings
              GROUP BY Food_Name
              ORDER BY Total_Donated DESC
              LIMIT 5",
        columns: &["Food_Name", "Total_Donated"],
    },
    ReportDefinition {
        key: "inactive_providers",
        title: "Which providers are inactive?",
        sql: "SELECT p.Name, p.City
              FROM providers p
              LEFT JOIN food_listings f ON p.Provider_ID = f.Provider_ID
              WHERE f.Food_ID IS NULL",
        columns: &["Name", "City"],
    },
    ReportDefinition {
        key: "claims_trend",
        title: "Claims trend over time",
        sql: "SELECT DATE(Timestamp) AS Claim_Date, COUNT(*) AS Total_Claim
              FROM claims
              GROUP BY Claim_Date
              ORDER BY Claim_Date ASC",
        columns: &["Claim_Date", "Total_Claim"],
    },
    ReportDefinition {
        key: "claims_by_city",
        title: "Claims by city",
        sql: "SELECT f.Location AS City, COUNT(*) AS Total_Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY f.Location
              ORDER BY Total_Claims DESC",
        columns: &["City", "Total_Claims"],
    },
    ReportDefinition {
        key: "claims_after_expiry",
        title: "Claims made after food expiry",
        sql: "SELECT c.Claim_ID, f.Food_Name, f.Expiry_Date, c.Timestamp
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              WHERE DATE(c.Timestamp) > DATE(f.Expiry_Date)",
        columns: &["Claim_ID", "Food_Name", "Expiry_Date", "Timestamp"],
    },
    ReportDefinition {
        key: "providers_without_listings",
        title: "Providers without any food listings",
        sql: "SELECT p.Provider_ID, p.Name, p.City
              FROM providers p
              LEFT JOIN food_listings f ON p.Provider_ID = f.Provider_ID
              WHERE f.Food_ID IS NULL",
        columns: &["Provider_ID", "Name", "City"],
    },
    ReportDefinition {
        key: "quantity_by_meal_type",
        title: "Meal type vs. quantity donated",
        sql: "SELECT Meal_Type, SUM(Quantity) AS Total_Quantity
              FROM food_listings
              GROUP BY Meal_Type
              ORDER BY Total_Quantity DESC",
        columns: &["Meal_Type", "Total_Quantity"],
    },
    ReportDefinition {
        key: "food_type_distribution",
        title: "Distribution of food types donated",
        sql: "SELECT Food_Type, COUNT(*) AS Total_Listings
              FROM food_listings
              GROUP BY Food_Type
              ORDER BY Total_Listings DESC",
        columns: &["Food_Type", "Total_Listings"],
    },
    ReportDefinition {
        key: "top_donating_providers",
        title: "Top 10 food donating providers",
        sql: "SELECT p.Name, SUM(f.Quantity) AS Total_Quantity
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Name
              ORDER BY Total_Quantity DESC
              LIMIT 10",
        columns: &["Name", "Total_Quantity"],
    },
];

/// Finds a report by key or by title.
pub fn find_report(name: &str) -> Option<&'static ReportDefinition> {
    let name = name.trim();

    REPORTS
        .iter()
        .find(|report| report.key == name || report.title == name)
}
