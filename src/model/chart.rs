use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPointDto {
    pub label: String,
    pub value: i64,
}

/// Data series behind one of the summary bar charts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeriesDto {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPointDto>,
}
