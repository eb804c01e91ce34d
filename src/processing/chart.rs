//! Bar-chart data for the visualization view.

use serde::Serialize;

use crate::types::Table;

/// How many numeric columns the bar chart plots.
pub const MAX_CHART_SERIES: usize = 2;

/// One plotted column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Column name.
    pub name: String,
    /// One bar per row; `None` for a missing cell.
    pub values: Vec<Option<f64>>,
}

/// Read-only chart view of a table. The x axis is the row position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Number of rows (bars per series).
    pub rows: usize,
    /// Up to [`MAX_CHART_SERIES`] series, in column order.
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Build bar-chart series from the first two numeric columns of `table`.
///
/// Boolean columns are not numeric here.
pub fn bar_chart(table: &Table) -> ChartData {
    let series = table
        .schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.data_type.is_numeric())
        .take(MAX_CHART_SERIES)
        .map(|(idx, f)| ChartSeries {
            name: f.name.clone(),
            values: table.column_values(idx).map(|v| v.as_f64()).collect(),
        })
        .collect();

    ChartData {
        rows: table.row_count(),
        series,
    }
}
