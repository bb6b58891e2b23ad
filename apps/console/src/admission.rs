use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use domain::admissions::{
    Accounts, Admission, BillingPolicy, Hospital, Patient, PatientCategory, Pharmacy,
};

use crate::{prompt::Prompter, Config};

/// Hospital with Pharmacy then Accounts subscribed
pub fn hospital(config: &Config) -> Hospital {
    let mut hospital = Hospital::new(config.currency_label.clone());
    hospital.subscribe(Box::new(Pharmacy));
    hospital.subscribe(Box::new(Accounts::new(config.currency_label.clone())));
    hospital
}

/// Collects one patient, bills them and notifies the departments.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
) -> Result<Admission> {
    let hospital = hospital(config);

    let id = prompter.ask_number("Patient ID: ")?;
    let name = prompter.ask("Name: ")?;
    let age = prompter.ask_number("Age: ")?;
    let doctor = prompter.ask("Doctor: ")?;
    let ward = prompter.ask_number("Ward No: ")?;

    let category_choice = prompter.choose("Patient type", &["General", "Emergency"])?;
    let category = PatientCategory::from_choice(category_choice);
    let patient = Patient::new(id, name, age, doctor, ward, category);

    let policy_choice = prompter.choose("Billing option", &["10% Tax", "5% Discount"])?;
    let policy = BillingPolicy::from_choice(policy_choice);

    let admission = hospital
        .admit(&patient, policy.strategy(), prompter.output())
        .context("Failed to write bill")?;

    if !admission.report.is_clean() {
        tracing::warn!(
            "{} of {} departments failed to receive bill for patient {}",
            admission.report.failures.len(),
            hospital.notifier().len(),
            admission.event.patient_id
        );
    }

    Ok(admission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn admit(input: &str) -> (Result<Admission>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let result = run(&mut prompter, &Config::default());
        let output = String::from_utf8(prompter.output().clone()).unwrap();
        (result, output)
    }

    #[test]
    fn general_patient_with_tax() {
        let (result, output) = admit("101\nAsha\n34\nDr. Rao\n4\n1\n1\n");

        let admission = result.unwrap();
        assert_eq!(admission.event.final_bill.to_string(), "1100.00");
        assert_eq!(admission.event.patient_type, "General");
        assert!(output.contains("Bill   : Rs.1100.00"));
        assert!(output.ends_with(
            "[Pharmacy] Medicines ready for Asha\n[Accounts] Collect Rs.1100.00\n"
        ));
    }

    #[test]
    fn emergency_patient_with_discount() {
        let (result, output) = admit("102\nRavi\n61\nDr. Sen\n1\n2\n2\n");

        let admission = result.unwrap();
        assert_eq!(admission.event.final_bill.to_string(), "2850.00");
        assert!(output.contains("1. 10% Tax\n2. 5% Discount\n"));
        assert!(output.contains("[Accounts] Collect Rs.2850.00"));
    }

    #[test]
    fn malformed_ward_stops_the_run() {
        let (result, output) = admit("101\nAsha\n34\nDr. Rao\nfour\n1\n1\n");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Ward No"));
        assert!(!output.contains("Patient Bill"));
    }

    #[test]
    fn malformed_menu_choices_name_their_menu() {
        let (category, _) = admit("101\nAsha\n34\nDr. Rao\n4\nx\n1\n");
        let (billing, output) = admit("101\nAsha\n34\nDr. Rao\n4\n1\nx\n");

        let category = category.unwrap_err().to_string();
        let billing = billing.unwrap_err().to_string();
        assert!(category.contains("Patient type"));
        assert!(billing.contains("Billing option"));
        assert!(!billing.contains("Patient type"));
        assert!(!output.contains("Patient Bill"));
    }
}
