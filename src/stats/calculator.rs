//! Grade Aggregation Module
//! Per-subject averages, the overall average, and the label/value series fed to charts.

use crate::data::GradeRecord;
use indexmap::IndexMap;
use statrs::statistics::Statistics;
use thiserror::Error;
use tracing::debug;

/// Label of the synthetic overall entry appended to a chart series.
pub const OVERALL_LABEL: &str = "overall";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Division by zero: subject '{subject}' has no scores")]
    EmptySubject { subject: String },
    #[error("Division by zero: no subjects to average")]
    NoSubjects,
}

/// Average of one subject's scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAverage {
    pub subject: String,
    pub average: f64,
}

/// Ordered (label, value) pairs ready for a bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<(String, f64)>,
}

impl ChartSeries {
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value of the synthetic overall entry, if present.
    pub fn overall(&self) -> Option<f64> {
        self.points
            .last()
            .filter(|(label, _)| label == OVERALL_LABEL)
            .map(|(_, value)| *value)
    }
}

/// Pure grade computations.
pub struct GradeCalculator;

impl GradeCalculator {
    /// Arithmetic mean of one subject's scores.
    pub fn subject_average(
        subject: &str,
        scores: &IndexMap<String, f64>,
    ) -> Result<f64, AggregateError> {
        // statrs yields NaN for empty input
        if scores.is_empty() {
            return Err(AggregateError::EmptySubject {
                subject: subject.to_string(),
            });
        }
        Ok(Statistics::<f64>::mean(scores.values()))
    }

    /// One average per subject, in the record's subject order.
    pub fn subject_averages(record: &GradeRecord) -> Result<Vec<SubjectAverage>, AggregateError> {
        record
            .subjects
            .iter()
            .map(|(subject, scores)| {
                Ok(SubjectAverage {
                    subject: subject.clone(),
                    average: Self::subject_average(subject, scores)?,
                })
            })
            .collect()
    }

    /// Unweighted mean of the subject averages: every subject counts once,
    /// regardless of how many assessments it has.
    pub fn overall_average(averages: &[SubjectAverage]) -> Result<f64, AggregateError> {
        if averages.is_empty() {
            return Err(AggregateError::NoSubjects);
        }
        Ok(Statistics::<f64>::mean(averages.iter().map(|a| a.average)))
    }

    /// Build the chart series: one point per subject, optionally followed by
    /// the overall average.
    pub fn chart_series(
        record: &GradeRecord,
        include_overall: bool,
    ) -> Result<ChartSeries, AggregateError> {
        let averages = Self::subject_averages(record)?;

        let overall = if include_overall {
            Some(Self::overall_average(&averages)?)
        } else {
            None
        };

        let mut points: Vec<(String, f64)> = averages
            .into_iter()
            .map(|a| (a.subject, a.average))
            .collect();
        if let Some(overall) = overall {
            points.push((OVERALL_LABEL.to_string(), overall));
        }

        debug!(points = points.len(), include_overall, "built chart series");
        Ok(ChartSeries { points })
    }
}
