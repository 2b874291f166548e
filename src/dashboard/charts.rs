//! The six dashboard charts

use crate::chart::{
    build_bar, build_histogram, build_line, build_line_markers, build_scatter, ChartArtifact,
    ChartResult, ChartSpec, ChartTheme, TickFormat,
};
use crate::dataset::mock::{
    FOOD_INSECURITY_RATE, IDPS, LITERACY_RATE, MALNUTRITION_RATE, POPULATION, REGION,
    WATER_ACCESS_RATE,
};
use crate::dataset::Dataset;

/// Chart artifacts, one field per chart on the page
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub population_bar: ChartArtifact,
    pub population_histogram: ChartArtifact,
    pub literacy_line: ChartArtifact,
    pub food_insecurity_line: ChartArtifact,
    pub idps_bar: ChartArtifact,
    pub malnutrition_scatter: ChartArtifact,
}

impl DashboardCharts {
    pub fn iter(&self) -> impl Iterator<Item = &ChartArtifact> {
        [
            &self.population_bar,
            &self.population_histogram,
            &self.literacy_line,
            &self.food_insecurity_line,
            &self.idps_bar,
            &self.malnutrition_scatter,
        ]
        .into_iter()
    }
}

pub fn population_bar_spec() -> ChartSpec {
    ChartSpec::bar(REGION, POPULATION)
        .title("Population by Region")
        .y_ticks(TickFormat::PlainInteger)
        .theme(ChartTheme::new("#FFFFAA", "#00FF00", "#FF00FF"))
}

pub fn population_histogram_spec() -> ChartSpec {
    ChartSpec::histogram(POPULATION, 5)
        .title("Population Distribution (Histogram) - ")
        .x_ticks(TickFormat::PlainInteger)
        .theme(ChartTheme::new("#FFCCCC", "#0000FF", "#FFFF00"))
}

pub fn literacy_line_spec() -> ChartSpec {
    ChartSpec::line(REGION, LITERACY_RATE)
        .title("Literacy Rate by Region")
        .y_ticks(TickFormat::PlainInteger)
        .theme(ChartTheme::new("#CCCCCC", "#FFA500", "#800000"))
}

pub fn food_insecurity_spec() -> ChartSpec {
    ChartSpec::line_markers(REGION, FOOD_INSECURITY_RATE)
        .title("Food Insecurity Rate by Region")
        .y_ticks(TickFormat::PlainInteger)
        .theme(ChartTheme::new("#EEFFEE", "#FF69B4", "#2F4F4F"))
}

pub fn idps_bar_spec() -> ChartSpec {
    ChartSpec::bar(REGION, IDPS)
        .title("Internally Displaced Persons (IDPs) by Region")
        .y_ticks(TickFormat::PlainInteger)
        .theme(ChartTheme::new("#C0C0C0", "#FFFF00", "#0000FF"))
}

pub fn malnutrition_scatter_spec() -> ChartSpec {
    ChartSpec::scatter(MALNUTRITION_RATE, WATER_ACCESS_RATE)
        .title("Malnutrition vs Water Access")
        .color_by(REGION)
        .x_ticks(TickFormat::PlainInteger)
        .y_ticks(TickFormat::PlainInteger)
        .theme(ChartTheme::new("#FFFFFF", "#7FFFD4", "#8B0000"))
}

/// Build every dashboard chart, stopping at the first failure
pub fn build_charts(dataset: &Dataset) -> ChartResult<DashboardCharts> {
    Ok(DashboardCharts {
        population_bar: build_bar(dataset, &population_bar_spec())?,
        population_histogram: build_histogram(dataset, &population_histogram_spec())?,
        literacy_line: build_line(dataset, &literacy_line_spec())?,
        food_insecurity_line: build_line_markers(dataset, &food_insecurity_spec())?,
        idps_bar: build_bar(dataset, &idps_bar_spec())?,
        malnutrition_scatter: build_scatter(dataset, &malnutrition_scatter_spec())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartError, ChartKind};
    use crate::dataset::{mock_dataset, Column};

    #[test]
    fn test_build_all() {
        let charts = build_charts(&mock_dataset().unwrap()).unwrap();
        assert_eq!(charts.iter().count(), 6);
        assert_eq!(charts.population_histogram.kind, ChartKind::Histogram { bins: 5 });
        assert_eq!(charts.food_insecurity_line.kind, ChartKind::LineMarkers);
        assert_eq!(charts.malnutrition_scatter.traces.len(), 6);
    }

    #[test]
    fn test_requested_axes_are_plain_integers() {
        let charts = build_charts(&mock_dataset().unwrap()).unwrap();
        let specs = [
            population_bar_spec(),
            population_histogram_spec(),
            literacy_line_spec(),
            food_insecurity_spec(),
            idps_bar_spec(),
            malnutrition_scatter_spec(),
        ];

        for (chart, spec) in charts.iter().zip(specs.iter()) {
            let requested = [
                (&chart.x_axis, spec.x_ticks),
                (&chart.y_axis, spec.y_ticks),
            ];
            for (axis, format) in requested {
                if format == TickFormat::PlainInteger {
                    assert!(axis.numeric, "{}: '{}' is not numeric", chart.title, axis.title);
                    assert_eq!(axis.tick_format, TickFormat::PlainInteger);
                }
            }
        }
    }

    #[test]
    fn test_missing_column_fails() {
        let dataset = Dataset::new(vec![
            Column::text(REGION, ["A"]),
            Column::integer(POPULATION, [1]),
        ])
        .unwrap();

        let err = build_charts(&dataset).unwrap_err();
        assert!(matches!(err, ChartError::UnknownField { ref field, .. } if field == LITERACY_RATE));
    }
}
