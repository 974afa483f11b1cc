//! Rate constants for the allocation formulas.
//!
//! All amounts are rupiah.  These values come from the hospital's
//! remuneration agreement and are deliberately plain constants — they change
//! rarely and together.

/// Fraction of the claim tariff distributable for an outpatient encounter.
pub const OUTPATIENT_CLAIM_FRACTION: f64 = 0.2;

/// Flat fee per laboratory request, outpatient.
pub const OUTPATIENT_LAB_FEE: f64 = 10_000.0;

/// Flat fee per laboratory request, inpatient.
pub const INPATIENT_LAB_FEE: f64 = 5_000.0;

/// Flat fee per non-ultrasound radiology request.
pub const RADIOLOGY_EXAM_FEE: f64 = 15_000.0;

/// Amount deducted from the tariff before the ultrasound percentage applies.
pub const ULTRASOUND_TARIFF_DEDUCTIBLE: f64 = 185_000.0;

/// Fraction of the post-deductible tariff paid per ultrasound exam.
pub const ULTRASOUND_TARIFF_FRACTION: f64 = 0.2;

/// Fraction of the claim tariff distributable for an inpatient stay.
pub const INPATIENT_CLAIM_FRACTION: f64 = 0.2;

/// Flat fee per general-duty ward-round entry.
pub const GENERAL_DUTY_VISIT_FEE: f64 = 20_000.0;

/// Fraction of the base allocation forming the operation pool.
pub const OPERATION_POOL_FRACTION: f64 = 0.7;

/// Surgeon's split of the operation pool.
pub const OPERATOR_POOL_SPLIT: f64 = 0.7;

/// Anesthesiologist's split of the operation pool.
pub const ANESTHESIA_POOL_SPLIT: f64 = 0.3;

/// Department name of the emergency department.  An IGD visit without a
/// recorded consult distributes nothing from the claim.
pub const EMERGENCY_DEPARTMENT: &str = "IGD";
