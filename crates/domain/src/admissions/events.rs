use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Patient;

/// Snapshot raised once a bill is finalized
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct BillGenerated {
    pub patient_id: i32,
    pub name: String,
    pub patient_type: String,
    pub ward_number: i32,
    pub final_bill: Decimal,
}

impl BillGenerated {
    pub const EVENT_TYPE: &'static str = "Admission:BillGenerated";

    pub fn for_patient(patient: &Patient, final_bill: Decimal) -> Self {
        Self::new(
            patient.id(),
            patient.name().to_string(),
            patient.patient_type().to_string(),
            patient.ward(),
            final_bill,
        )
    }

    pub fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}
