//! Mock humanitarian indicators for six Ethiopian regions
//!
//! Figures are illustrative only and are compiled into the binary.

use super::error::SchemaResult;
use super::table::{Column, Dataset};

pub const REGION: &str = "Region";
pub const POPULATION: &str = "Population";
pub const LITERACY_RATE: &str = "Literacy Rate";
pub const FOOD_INSECURITY_RATE: &str = "Food Insecurity Rate";
pub const IDPS: &str = "IDPs";
pub const REFUGEES: &str = "Refugees";
pub const MALNUTRITION_RATE: &str = "Malnutrition Rate";
pub const WATER_ACCESS_RATE: &str = "Water Access Rate";

/// Build the eight-column, six-region mock table keyed by region
pub fn mock_dataset() -> SchemaResult<Dataset> {
    Dataset::new(vec![
        Column::text(
            REGION,
            ["Addis Ababa", "Oromia", "Amhara", "Tigray", "SNNPR", "Afar"],
        ),
        Column::integer(
            POPULATION,
            [12_345_678, 35_067_890, 20_012_345, 6_000_987, 20_012_389, 1_500_123],
        ),
        Column::integer(LITERACY_RATE, [92, 50, 55, 60, 45, 35]),
        Column::integer(FOOD_INSECURITY_RATE, [10, 45, 30, 40, 50, 60]),
        Column::integer(IDPS, [56_789, 876_543, 345_678, 2_345_678, 545_678, 98_765]),
        Column::integer(REFUGEES, [10_000, 20_000, 15_000, 50_000, 25_000, 8_000]),
        Column::integer(MALNUTRITION_RATE, [5, 15, 20, 18, 25, 30]),
        Column::integer(WATER_ACCESS_RATE, [90, 60, 65, 70, 50, 40]),
    ])?
    .with_key(REGION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColumnData;

    #[test]
    fn test_mock_shape() {
        let ds = mock_dataset().unwrap();
        assert_eq!(ds.row_count(), 6);
        assert_eq!(ds.column_count(), 8);
        assert_eq!(ds.key(), Some(REGION));
    }

    #[test]
    fn test_mock_keeps_large_values() {
        let ds = mock_dataset().unwrap();
        match &ds.column(POPULATION).unwrap().data {
            ColumnData::Integer(values) => assert_eq!(values[1], 35_067_890),
            other => panic!("unexpected column type: {:?}", other),
        }
    }
}
