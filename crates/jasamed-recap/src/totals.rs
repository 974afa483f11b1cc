//! Running claim totals across a batch of admissions.
//!
//! `TotalsAccumulator` is an explicit reducer: `fold` consumes one
//! admission's result and returns the advanced accumulator, `merge` combines
//! two accumulators.  Both are pure and the reduction is commutative and
//! associative, so a batch may be folded sequentially or map-reduced in
//! parallel with identical results.

use serde::Serialize;

use jasamed_contracts::AllocationResult;

/// Running sums of the tariff and every allocation field across a batch.
///
/// Fields not produced by a care kind (e.g. the operator share for an
/// outpatient encounter) simply contribute nothing to their sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TotalsAccumulator {
    pub record_count: u64,
    pub tariff_total: f64,
    pub claim_share_total: f64,
    pub lab_share_total: f64,
    pub radiology_share_total: f64,
    pub attending_share_total: f64,
    pub consult_share_total: f64,
    pub general_duty_share_total: f64,
    pub anesthesia_consult_share_total: f64,
    pub secondary_consult_share_total: f64,
    pub tertiary_consult_share_total: f64,
    pub operator_share_total: f64,
    pub anesthesia_share_total: f64,
    pub anesthesia_substitute_share_total: f64,
    pub distributed_total: f64,
    pub percent_of_claim_total: i64,
}

impl TotalsAccumulator {
    /// Fold one admission's result into the accumulator.
    #[must_use]
    pub fn fold(mut self, tariff: f64, result: &AllocationResult) -> Self {
        self.record_count += 1;
        self.tariff_total += tariff;
        self.lab_share_total += result.lab_share();
        self.radiology_share_total += result.radiology_share();
        self.attending_share_total += result.attending_share();
        self.distributed_total += result.total_distributed();
        self.percent_of_claim_total += result.percent_of_claim();

        match result {
            AllocationResult::Outpatient(a) => {
                self.claim_share_total += a.claim_share;
                self.consult_share_total += a.consult_share;
            }
            AllocationResult::Inpatient(a) => {
                self.general_duty_share_total += a.general_duty_share;
                self.anesthesia_consult_share_total += a.anesthesia_consult_share;
                self.secondary_consult_share_total += a.secondary_consult_share;
                self.tertiary_consult_share_total += a.tertiary_consult_share;
                self.operator_share_total += a.operator_share;
                self.anesthesia_share_total += a.anesthesia_share;
                self.anesthesia_substitute_share_total += a.anesthesia_substitute_share;
            }
        }

        self
    }

    /// Combine two accumulators (the parallel-reduce merge step).
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.record_count += other.record_count;
        self.tariff_total += other.tariff_total;
        self.claim_share_total += other.claim_share_total;
        self.lab_share_total += other.lab_share_total;
        self.radiology_share_total += other.radiology_share_total;
        self.attending_share_total += other.attending_share_total;
        self.consult_share_total += other.consult_share_total;
        self.general_duty_share_total += other.general_duty_share_total;
        self.anesthesia_consult_share_total += other.anesthesia_consult_share_total;
        self.secondary_consult_share_total += other.secondary_consult_share_total;
        self.tertiary_consult_share_total += other.tertiary_consult_share_total;
        self.operator_share_total += other.operator_share_total;
        self.anesthesia_share_total += other.anesthesia_share_total;
        self.anesthesia_substitute_share_total += other.anesthesia_substitute_share_total;
        self.distributed_total += other.distributed_total;
        self.percent_of_claim_total += other.percent_of_claim_total;
        self
    }

    /// Mean percent-of-claim across the batch; 0 for an empty batch.
    pub fn average_percent_of_claim(&self) -> f64 {
        if self.record_count == 0 {
            0.0
        } else {
            self.percent_of_claim_total as f64 / self.record_count as f64
        }
    }
}
