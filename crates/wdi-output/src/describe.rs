//! Descriptive statistics for a panel frame.
//!
//! Numeric columns report count, mean, sample standard deviation, min,
//! quartiles (linear interpolation) and max over non-missing values. String
//! columns report count, distinct values, the most frequent value and its
//! frequency; ties go to the value seen first.

use std::collections::HashMap;

use polars::prelude::{
    ChunkAgg, ChunkQuantile, ChunkVar, Column, DataFrame, DataType, QuantileMethod,
};

use crate::error::Result;

/// Statistics for a numeric column. `None` where the statistic is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Statistics for a string column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Numeric(NumericSummary),
    Text(TextSummary),
}

/// Summary of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub stats: ColumnStats,
}

/// Describes every column of `df`, in column order.
pub fn describe_frame(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    df.get_columns()
        .iter()
        .map(|column| {
            let stats = match column.dtype() {
                DataType::String => ColumnStats::Text(describe_text(column)?),
                _ => ColumnStats::Numeric(describe_numeric(column)?),
            };
            Ok(ColumnSummary {
                name: column.name().to_string(),
                stats,
            })
        })
        .collect()
}

fn describe_text(column: &Column) -> Result<TextSummary> {
    let values = column.str()?;
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut count = 0usize;
    for (order, value) in values.into_iter().flatten().enumerate() {
        count += 1;
        counts.entry(value).or_insert((0, order)).0 += 1;
    }
    let top = counts
        .iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then_with(|| b.1.1.cmp(&a.1.1)))
        .map(|(value, (freq, _))| ((*value).to_string(), *freq));
    Ok(TextSummary {
        count,
        unique: counts.len(),
        freq: top.as_ref().map_or(0, |(_, freq)| *freq),
        top: top.map(|(value, _)| value),
    })
}

fn describe_numeric(column: &Column) -> Result<NumericSummary> {
    let cast = column.cast(&DataType::Float64)?;
    let values = cast.f64()?;
    let count = values.len() - values.null_count();
    if count == 0 {
        return Ok(NumericSummary {
            count,
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
        });
    }
    Ok(NumericSummary {
        count,
        mean: values.mean(),
        std: if count > 1 { values.std(1) } else { None },
        min: values.min(),
        q25: values.quantile(0.25, QuantileMethod::Linear)?,
        median: values.quantile(0.5, QuantileMethod::Linear)?,
        q75: values.quantile(0.75, QuantileMethod::Linear)?,
        max: values.max(),
    })
}
