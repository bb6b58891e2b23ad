use std::io::Write;

use rust_decimal::Decimal;

use crate::errors::Error;

use super::{billing::to_currency, BillGenerated, DispatchReport, Notifier, Observer, Patient};

/// Result of one admission
#[derive(Debug)]
pub struct Admission {
    pub event: BillGenerated,
    pub report: DispatchReport,
}

/// Publishes a `BillGenerated` event to its departments after billing a patient
pub struct Hospital {
    currency: String,
    notifier: Notifier,
}

impl Hospital {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            notifier: Notifier::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.notifier.subscribe(observer);
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Bills the patient, writes the bill summary and notifies every
    /// department before returning.
    pub fn admit<F>(
        &self,
        patient: &Patient,
        billing: F,
        out: &mut dyn Write,
    ) -> Result<Admission, Error>
    where
        F: Fn(Decimal) -> Decimal,
    {
        let base_amount = patient.base_charge();
        let final_bill = to_currency(billing(base_amount));

        tracing::info!(
            "Admitting patient {} ({}) base {} final {}",
            patient.id(),
            patient.patient_type(),
            base_amount,
            final_bill
        );

        writeln!(out)?;
        writeln!(out, "---- Patient Bill ----")?;
        writeln!(out, "ID     : {}", patient.id())?;
        writeln!(out, "Name   : {}", patient.name())?;
        writeln!(out, "Type   : {}", patient.patient_type())?;
        writeln!(out, "Doctor : {}", patient.doctor())?;
        writeln!(out, "Ward   : {}", patient.ward())?;
        writeln!(out, "Bill   : {}{}", self.currency, final_bill)?;

        let event = BillGenerated::for_patient(patient, final_bill);
        let report = self.notifier.dispatch(&event, out);

        Ok(Admission { event, report })
    }
}
