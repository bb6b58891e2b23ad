use std::collections::HashMap;

use crate::errors::Error;

/// Key under which a successful registration is stored
pub const REGISTERED_USER_KEY: &str = "registeredUser";

/// String key-value store
pub trait LocalStorage {
    fn set_item(&mut self, key: &str, value: String) -> Result<(), Error>;

    fn get_item(&self, key: &str) -> Option<&str>;
}

/// Transient in-memory storage, dropped with the process
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn set_item(&mut self, key: &str, value: String) -> Result<(), Error> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}
