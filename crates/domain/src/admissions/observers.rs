use std::io::Write;

use crate::errors::Error;

use super::BillGenerated;

/// A department reacting to a finalized bill
pub trait Observer {
    fn name(&self) -> &str;

    fn notify(&self, event: &BillGenerated, out: &mut dyn Write) -> Result<(), Error>;
}

/// Pharmacy department
#[derive(Clone, Debug, Default)]
pub struct Pharmacy;

impl Observer for Pharmacy {
    fn name(&self) -> &str {
        "Pharmacy"
    }

    fn notify(&self, event: &BillGenerated, out: &mut dyn Write) -> Result<(), Error> {
        writeln!(out, "[Pharmacy] Medicines ready for {}", event.name)?;
        Ok(())
    }
}

/// Accounts department
#[derive(Clone, Debug)]
pub struct Accounts {
    currency: String,
}

impl Accounts {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Observer for Accounts {
    fn name(&self) -> &str {
        "Accounts"
    }

    fn notify(&self, event: &BillGenerated, out: &mut dyn Write) -> Result<(), Error> {
        writeln!(out, "[Accounts] Collect {}{}", self.currency, event.final_bill)?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct ObserverFailure {
    pub observer: String,
    pub error: Error,
}

/// Outcome of one fan-out
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failures: Vec<ObserverFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Append-only, ordered list of observers
#[derive(Default)]
pub struct Notifier {
    observers: Vec<Box<dyn Observer>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        tracing::debug!("Subscribed {}", observer.name());
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer once, in subscription order. A failing observer
    /// is recorded and the remaining ones are still notified.
    pub fn dispatch(&self, event: &BillGenerated, out: &mut dyn Write) -> DispatchReport {
        tracing::info!(
            "Dispatching {} for patient {} to {} observers",
            event.event_type(),
            event.patient_id,
            self.observers.len()
        );

        let mut report = DispatchReport::default();

        for observer in self.observers.iter() {
            match observer.notify(event, out) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::error!("Observer {} failed: {}", observer.name(), e);
                    report.failures.push(ObserverFailure {
                        observer: observer.name().to_string(),
                        error: e,
                    });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::{cell::RefCell, rc::Rc};

    struct Delivery {
        label: &'static str,
        event: BillGenerated,
        address: *const BillGenerated,
    }

    type DeliveryLog = Rc<RefCell<Vec<Delivery>>>;

    struct Recorder {
        label: &'static str,
        log: DeliveryLog,
    }

    impl Recorder {
        fn boxed(label: &'static str, log: &DeliveryLog) -> Box<dyn Observer> {
            Box::new(Self {
                label,
                log: log.clone(),
            })
        }
    }

    impl Observer for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn notify(&self, event: &BillGenerated, _out: &mut dyn Write) -> Result<(), Error> {
            self.log.borrow_mut().push(Delivery {
                label: self.label,
                event: event.clone(),
                address: event as *const BillGenerated,
            });
            Ok(())
        }
    }

    struct Failing;

    impl Observer for Failing {
        fn name(&self) -> &str {
            "Failing"
        }

        fn notify(&self, _event: &BillGenerated, _out: &mut dyn Write) -> Result<(), Error> {
            Err(Error::Observer {
                observer: "Failing".to_string(),
                message: "printer jammed".to_string(),
            })
        }
    }

    fn sample_event() -> BillGenerated {
        BillGenerated::new(
            7,
            "Asha".to_string(),
            "General".to_string(),
            4,
            Decimal::new(110000, 2),
        )
    }

    #[test]
    fn observers_are_notified_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();
        notifier.subscribe(Recorder::boxed("A", &log));
        notifier.subscribe(Recorder::boxed("B", &log));

        let event = sample_event();
        let report = notifier.dispatch(&event, &mut Vec::new());

        let log = log.borrow();
        let order: Vec<&str> = log.iter().map(|delivery| delivery.label).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert!(log.iter().all(|delivery| delivery.event == event));
        assert!(log
            .iter()
            .all(|delivery| std::ptr::eq(delivery.address, &event)));
        assert_eq!(report.delivered, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn failing_observer_does_not_block_later_ones() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();
        notifier.subscribe(Box::new(Failing));
        notifier.subscribe(Recorder::boxed("after", &log));

        let report = notifier.dispatch(&sample_event(), &mut Vec::new());

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(report.delivered, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].observer, "Failing");
    }

    #[test]
    fn departments_print_their_notices() {
        let mut notifier = Notifier::new();
        notifier.subscribe(Box::new(Pharmacy));
        notifier.subscribe(Box::new(Accounts::new("Rs.")));

        let mut out = Vec::new();
        notifier.dispatch(&sample_event(), &mut out);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[Pharmacy] Medicines ready for Asha\n[Accounts] Collect Rs.1100.00\n"
        );
    }

    #[test]
    fn empty_notifier_delivers_nothing() {
        let notifier = Notifier::new();
        assert!(notifier.is_empty());
        let report = notifier.dispatch(&sample_event(), &mut Vec::new());
        assert_eq!(report.delivered, 0);
    }
}
