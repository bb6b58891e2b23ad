use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Patient category, which fixes the base charge
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatientCategory {
    /// Ward admission, base charge 1000
    General,
    /// Emergency admission, base charge 3000
    Emergency,
}

impl PatientCategory {
    /// Maps the console menu choice. `1` is General, anything else Emergency.
    pub fn from_choice(choice: i32) -> Self {
        if choice == 1 {
            Self::General
        } else {
            Self::Emergency
        }
    }

    pub fn base_charge(&self) -> Decimal {
        match self {
            Self::General => Decimal::new(1000, 0),
            Self::Emergency => Decimal::new(3000, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Emergency => "Emergency",
        }
    }
}

impl std::fmt::Display for PatientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admitted patient. Read-only once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Patient {
    id: i32,
    name: String,
    age: i32,
    doctor: String,
    ward: i32,
    admitted_at: DateTime<Utc>,
    category: PatientCategory,
}

impl Patient {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        age: i32,
        doctor: impl Into<String>,
        ward: i32,
        category: PatientCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            doctor: doctor.into(),
            ward,
            admitted_at: Utc::now(),
            category,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn doctor(&self) -> &str {
        &self.doctor
    }

    pub fn ward(&self) -> i32 {
        self.ward
    }

    pub fn admitted_at(&self) -> DateTime<Utc> {
        self.admitted_at
    }

    pub fn category(&self) -> PatientCategory {
        self.category
    }

    pub fn patient_type(&self) -> &'static str {
        self.category.as_str()
    }

    pub fn base_charge(&self) -> Decimal {
        self.category.base_charge()
    }
}
