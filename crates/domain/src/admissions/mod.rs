/// Patient model
pub mod patient;

/// Billing strategies
pub mod billing;

/// Events
pub mod events;

/// Department observers and dispatch
pub mod observers;

/// Hospital (event publisher)
pub mod hospital;

pub use billing::{BillingPolicy, BillingStrategy};
pub use events::BillGenerated;
pub use hospital::{Admission, Hospital};
pub use observers::{Accounts, DispatchReport, Notifier, Observer, ObserverFailure, Pharmacy};
pub use patient::{Patient, PatientCategory};
