//! Simulated admission data for the Jasamed demo.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module acts as a stand-in for the hospital's
//! admission/treatment database in a production deployment.
//!
//! The batch covers the interesting corners: an operated stay with a
//! substituted anesthesiologist, a multi-doctor consult split, an IGD visit
//! with no consult, ultrasound radiology pricing, and a record whose
//! treatment detail arrives string-encoded with a null member.

use chrono::NaiveDate;

use jasamed_contracts::{
    decode_treatments, AdmissionRecord, CareKind, LabExam, RadiologyExam, TreatmentEntry,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid mock date")
}

fn entry(name: &str, staff_code: &str, staff_name: &str) -> TreatmentEntry {
    TreatmentEntry {
        name: name.to_string(),
        staff_code: staff_code.to_string(),
        staff_name: staff_name.to_string(),
        ..Default::default()
    }
}

fn lab(name: &str, staff_code: &str, staff_name: &str) -> LabExam {
    LabExam {
        name: name.to_string(),
        staff_code: staff_code.to_string(),
        staff_name: staff_name.to_string(),
        ..Default::default()
    }
}

fn radiology(name: &str, staff_code: &str, staff_name: &str) -> RadiologyExam {
    RadiologyExam {
        name: name.to_string(),
        staff_code: staff_code.to_string(),
        staff_name: staff_name.to_string(),
        ..Default::default()
    }
}

/// One month of fictional admissions.
pub fn admissions() -> Vec<AdmissionRecord> {
    vec![
        // Operated four-day stay, substituted anesthesiologist, shared
        // consult bucket across two specialists.
        AdmissionRecord {
            id: "SEP-2503-0001".to_string(),
            admission_date: Some(date(2025, 3, 3)),
            discharge_date: Some(date(2025, 3, 7)),
            tariff: 5_400_000.0,
            lab_request_count: 6,
            radiology_request_count: 2,
            treatments: vec![
                entry("Konsul Anastesi", "D21", "dr. Rahmat, Sp.An"),
                entry("Visite Dokter Spesialis", "D12", "dr. Lestari, Sp.PD"),
                entry("Visite Dokter Spesialis", "D14", "dr. Halim, Sp.B"),
                entry("Visite Dokter Spesialis", "D14", "dr. Halim, Sp.B"),
                entry("Visite Dokter", "D31", "dr. Putra"),
                entry("Visite Dokter", "D32", "dr. Nanda"),
            ],
            lab_exams: vec![
                lab("Darah Lengkap", "L01", "Analis Ratna"),
                lab("Elektrolit", "L02", "Analis Joko"),
            ],
            radiology_exams: vec![
                radiology("Thorax PA", "R01", "dr. Dewi, Sp.Rad"),
                radiology("BNO 3 Posisi", "R01", "dr. Dewi, Sp.Rad"),
            ],
            has_operation: true,
            operator_staff_name: "dr. Halim, Sp.B".to_string(),
            anesthesia_designation: "D21:dr. Wulan, Sp.An".to_string(),
            attending_staff_name: "dr. Lestari, Sp.PD".to_string(),
            attending_staff_code: "D12".to_string(),
            care: CareKind::Inpatient,
        },
        // Short stay, no operation, attending performed an emergency add-on.
        AdmissionRecord {
            id: "SEP-2503-0002".to_string(),
            admission_date: Some(date(2025, 3, 11)),
            discharge_date: Some(date(2025, 3, 12)),
            tariff: 1_750_000.0,
            lab_request_count: 3,
            radiology_request_count: 0,
            treatments: vec![
                entry("Emergency observation", "D12", "dr. Lestari, Sp.PD"),
                entry("Visite Dokter", "D31", "dr. Putra"),
            ],
            lab_exams: vec![lab("Gula Darah", "L01", "Analis Ratna")],
            radiology_exams: Vec::new(),
            has_operation: false,
            operator_staff_name: String::new(),
            anesthesia_designation: String::new(),
            attending_staff_name: "dr. Lestari, Sp.PD".to_string(),
            attending_staff_code: "D12".to_string(),
            care: CareKind::Inpatient,
        },
        // Outpatient visit with an ultrasound and a real consult.
        AdmissionRecord {
            id: "SEP-2503-0003".to_string(),
            admission_date: Some(date(2025, 3, 14)),
            discharge_date: Some(date(2025, 3, 14)),
            tariff: 480_000.0,
            lab_request_count: 2,
            radiology_request_count: 2,
            treatments: vec![entry("Konsul Kardiologi", "D17", "dr. Salim, Sp.JP")],
            lab_exams: vec![lab("Urinalisa", "L02", "Analis Joko")],
            radiology_exams: vec![
                radiology("USG Abdomen", "R02", "dr. Fajar, Sp.Rad"),
                radiology("Thorax PA", "R01", "dr. Dewi, Sp.Rad"),
            ],
            has_operation: false,
            operator_staff_name: String::new(),
            anesthesia_designation: String::new(),
            attending_staff_name: "dr. Gita, Sp.PD".to_string(),
            attending_staff_code: "D15".to_string(),
            care: CareKind::Outpatient {
                department: "Poli Penyakit Dalam".to_string(),
                consult_count: 1,
            },
        },
        // IGD visit without a consult: the claim share is suppressed and
        // only the support fees pay out.
        AdmissionRecord {
            id: "SEP-2503-0004".to_string(),
            admission_date: Some(date(2025, 3, 18)),
            discharge_date: Some(date(2025, 3, 18)),
            tariff: 320_000.0,
            lab_request_count: 1,
            radiology_request_count: 1,
            treatments: Vec::new(),
            lab_exams: vec![lab("Darah Rutin", "L01", "Analis Ratna")],
            radiology_exams: vec![radiology("Cruris AP/Lat", "R01", "dr. Dewi, Sp.Rad")],
            has_operation: false,
            operator_staff_name: String::new(),
            anesthesia_designation: String::new(),
            attending_staff_name: "dr. Bayu".to_string(),
            attending_staff_code: "D41".to_string(),
            care: CareKind::Outpatient {
                department: "IGD".to_string(),
                consult_count: 0,
            },
        },
        // Treatment detail arrives string-encoded with a null member; the
        // decoder drops the null and keeps the rest.
        AdmissionRecord {
            id: "SEP-2503-0005".to_string(),
            admission_date: Some(date(2025, 3, 21)),
            discharge_date: Some(date(2025, 3, 24)),
            tariff: 2_100_000.0,
            lab_request_count: 0,
            radiology_request_count: 1,
            treatments: decode_treatments(Some(
                r#"[
                    {"name":"Visite Dokter Spesialis","staff_code":"D17","staff_name":"dr. Salim, Sp.JP"},
                    null,
                    {"name":"Visite Dokter","staff_code":"D32","staff_name":"dr. Nanda"}
                ]"#,
            )),
            lab_exams: Vec::new(),
            radiology_exams: vec![radiology("Thorax PA", "R01", "dr. Dewi, Sp.Rad")],
            has_operation: false,
            operator_staff_name: String::new(),
            anesthesia_designation: "D21".to_string(),
            attending_staff_name: "dr. Gita, Sp.PD".to_string(),
            attending_staff_code: "D15".to_string(),
            care: CareKind::Inpatient,
        },
    ]
}
