use std::collections::BTreeMap;

/// Query parameter holding the resume offset.
pub const PAGE_PARAM: &str = "page";

/// Where the page scroll offset survives a reload.
pub trait ScrollPositionStore {
    fn load(&self) -> Option<f64>;

    fn save(&mut self, offset: f64);
}

/// The URL query string, or whatever the host uses in its place.
pub trait QueryParamStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key`, or removes it when `value` is `None`.
    fn set(&mut self, key: &str, value: Option<&str>);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryScrollStore {
    offset: Option<f64>,
}

impl MemoryScrollStore {
    pub fn new(offset: Option<f64>) -> Self {
        Self { offset }
    }
}

impl ScrollPositionStore for MemoryScrollStore {
    fn load(&self) -> Option<f64> {
        self.offset
    }

    fn save(&mut self, offset: f64) {
        self.offset = Some(offset);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryQueryParams {
    params: BTreeMap<String, String>,
}

impl MemoryQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }
}

impl QueryParamStore for MemoryQueryParams {
    fn get(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.params.insert(key.to_string(), value.to_string());
            }
            None => {
                self.params.remove(key);
            }
        }
    }
}
