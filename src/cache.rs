use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Per-route cache of data behind a page. Entries live until invalidated.
#[derive(Clone)]
pub struct RouteCache<T: Clone> {
    entries: Arc<Mutex<HashMap<String, T>>>,
}

impl<T: Clone> Default for RouteCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RouteCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get(&self, route: &str) -> Option<T> {
        let map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.get(route).cloned()
    }

    pub fn put(&self, route: &str, value: T) {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(route.to_string(), value);
    }

    /// Mark a route stale. Returns true if something was cached.
    pub fn invalidate(&self, route: &str) -> bool {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(route).is_some()
    }
}
