/// Form input and submission
pub mod form;

/// Key-value storage
pub mod storage;

pub use form::{
    submit, Navigation, RegisteredUser, RegistrationForm, SUCCESS_PAGE, VALIDATION_MESSAGE,
};
pub use storage::{LocalStorage, MemoryStorage, REGISTERED_USER_KEY};
