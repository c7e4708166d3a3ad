//! Pipeline driver
//!
//! # Execution Flow (strict order)
//!
//! 1. Infer the schema of the record type (cached per type)
//! 2. Convert the records into a table
//! 3. Validate the filter field of every row
//! 4. Return a new table holding the rows that passed
//!
//! Steps 1 and 2 fail the run. Step 3 never does: a row that fails
//! validation is logged and dropped.

use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::record::Record;
use crate::schema::{infer, SchemaInferencer};
use crate::table::{convert, Row, Table};
use crate::validation::{RowValidator, ValidationOutcome, ValidationRule};

use super::errors::PipelineResult;

/// Validation outcome of one row of the converted table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// Zero-based row position in the converted table
    pub row_index: usize,
    pub outcome: ValidationOutcome,
}

/// Everything a run produced: the converted table, the filtered table and
/// the per-row outcomes that decided the filter.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub table: Table,
    pub filtered: Table,
    pub outcomes: Vec<RowOutcome>,
}

impl PipelineReport {
    /// Number of rows dropped by validation
    pub fn rejected_count(&self) -> usize {
        self.table.len() - self.filtered.len()
    }
}

/// Runs record batches through inference, conversion and filtering.
#[derive(Debug, Default)]
pub struct Pipeline {
    inferencer: SchemaInferencer,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the pipeline and returns the filtered table
    pub fn run<R: Record>(
        &mut self,
        records: &[R],
        field_name: &str,
        rule: &ValidationRule,
    ) -> PipelineResult<Table> {
        Ok(self.run_with_report(records, field_name, rule)?.filtered)
    }

    /// Runs the pipeline and returns both tables plus per-row outcomes
    pub fn run_with_report<R: Record>(
        &mut self,
        records: &[R],
        field_name: &str,
        rule: &ValidationRule,
    ) -> PipelineResult<PipelineReport> {
        let record_type = R::record_type();
        let scope = ObservationScope::with_fields(
            "PIPELINE",
            &[
                ("field", field_name),
                ("record_type", record_type.name),
                ("rule", rule.name()),
            ],
        );

        let schema = match self.inferencer.infer_cached(&record_type) {
            Ok(schema) => schema,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e.into());
            }
        };
        let field_count = schema.len().to_string();
        log_event_with_fields(
            Event::SchemaInferred,
            &[("fields", field_count.as_str()), ("record_type", record_type.name)],
        );

        let table = match convert(records, Arc::clone(&schema)) {
            Ok(table) => table,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e.into());
            }
        };
        let rows_in = table.len().to_string();
        log_event_with_fields(Event::TableConverted, &[("rows", rows_in.as_str())]);

        let (filtered, outcomes) = filter_with_outcomes(&table, field_name, rule);
        for outcome in &outcomes {
            report_outcome(field_name, &table.rows()[outcome.row_index], outcome);
        }

        let rows_out = filtered.len().to_string();
        scope.complete_with_fields(&[("rows_in", rows_in.as_str()), ("rows_out", rows_out.as_str())]);

        Ok(PipelineReport {
            table,
            filtered,
            outcomes,
        })
    }

    /// Returns the schema inferencer and its cache
    pub fn inferencer(&self) -> &SchemaInferencer {
        &self.inferencer
    }
}

/// One-shot run without a schema cache
pub fn run<R: Record>(
    records: &[R],
    field_name: &str,
    rule: &ValidationRule,
) -> PipelineResult<Table> {
    let schema = Arc::new(infer(&R::record_type())?);
    let table = convert(records, schema)?;
    Ok(filter_table(&table, field_name, rule))
}

/// Returns a new table with the rows of `table` whose field passes `rule`.
///
/// Pure: nothing is logged and `table` is left untouched.
pub fn filter_table(table: &Table, field_name: &str, rule: &ValidationRule) -> Table {
    table.filter(|row| RowValidator::validate(row, field_name, rule))
}

fn filter_with_outcomes(
    table: &Table,
    field_name: &str,
    rule: &ValidationRule,
) -> (Table, Vec<RowOutcome>) {
    if table.schema().index_of(field_name).is_none() {
        log_event_with_fields(
            Event::FilterFieldUnknown,
            &[
                ("field", field_name),
                ("record_type", table.schema().record_type()),
            ],
        );
    }

    let outcomes: Vec<RowOutcome> = table
        .iter()
        .enumerate()
        .map(|(row_index, row)| RowOutcome {
            row_index,
            outcome: RowValidator::check(row, field_name, rule),
        })
        .collect();

    // Table::filter visits rows in order, one verdict per row
    let mut verdicts = outcomes.iter().map(|o| o.outcome.is_valid());
    let filtered = table.filter(|_| verdicts.next().unwrap_or(false));

    (filtered, outcomes)
}

fn report_outcome(field_name: &str, row: &Row, outcome: &RowOutcome) {
    let index = outcome.row_index.to_string();
    match &outcome.outcome {
        ValidationOutcome::Valid(parsed) => {
            let parsed = parsed.to_string();
            log_event_with_fields(
                Event::RowAccepted,
                &[
                    ("field", field_name),
                    ("parsed", parsed.as_str()),
                    ("row", index.as_str()),
                ],
            );
        }
        ValidationOutcome::Invalid(reason) => {
            let raw = row
                .get(field_name)
                .map(|v| v.to_string())
                .unwrap_or_default();
            let reason = reason.to_string();
            log_event_with_fields(
                Event::RowRejected,
                &[
                    ("field", field_name),
                    ("reason", reason.as_str()),
                    ("row", index.as_str()),
                    ("value", raw.as_str()),
                ],
            );
        }
    }
}
