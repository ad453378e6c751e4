//! Result validator - checks candidate records against the shape

use infoextract_domain::{CandidateRecord, ExtractionResult, ExtractionShape, Record};
use tracing::debug;

/// Filters and coerces candidate records into the declared shape
///
/// Never fails. Unknown keys are discarded, values that cannot be narrowed
/// to their declared kind are dropped, and record order is preserved.
pub struct ResultValidator<'a> {
    shape: &'a ExtractionShape,
}

impl<'a> ResultValidator<'a> {
    /// Create a validator for `shape`
    pub fn new(shape: &'a ExtractionShape) -> Self {
        Self { shape }
    }

    /// Validate every candidate, one output record per input record
    pub fn validate(&self, candidates: Vec<CandidateRecord>) -> ExtractionResult {
        let records = candidates
            .into_iter()
            .enumerate()
            .map(|(idx, candidate)| self.validate_record(idx, candidate))
            .collect();

        ExtractionResult::new(records)
    }

    fn validate_record(&self, idx: usize, candidate: CandidateRecord) -> Record {
        let mut record = Record::new();

        for (key, value) in candidate {
            let Some(kind) = self.shape.kind_of(&key) else {
                debug!(record = idx, field = %key, "Dropping unrequested field");
                continue;
            };

            let was_typed = kind.accepts(&value);
            match kind.coerce(value) {
                Some(coerced) => {
                    if !was_typed {
                        debug!(record = idx, field = %key, kind = %kind, "Coerced field");
                    }
                    record.insert(key, coerced);
                }
                None => {
                    debug!(record = idx, field = %key, kind = %kind, "Dropping field with wrong type");
                }
            }
        }

        record
    }
}

/// Validate `candidates` against `shape`
pub fn validate_records(
    candidates: Vec<CandidateRecord>,
    shape: &ExtractionShape,
) -> ExtractionResult {
    ResultValidator::new(shape).validate(candidates)
}
