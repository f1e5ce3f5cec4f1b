use std::cell::RefCell;
use std::collections::HashMap;

/// Memoized uniform-name lookups for one program.
///
/// Misses are cached too: a uniform the compiler optimized out (or a typo) is
/// queried once and answered from the cache afterwards.
#[derive(Debug)]
pub(super) struct UniformCache<L> {
    locations: RefCell<HashMap<String, Option<L>>>,
}

impl<L: Clone> UniformCache<L> {
    pub(super) fn new() -> Self {
        Self {
            locations: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached location of `name`, running `query` on first use.
    pub(super) fn resolve(&self, name: &str, query: impl FnOnce() -> Option<L>) -> Option<L> {
        if let Some(cached) = self.locations.borrow().get(name) {
            return cached.clone();
        }

        let location = query();
        if location.is_none() {
            log::debug!("uniform `{name}` not found in program");
        }
        self.locations
            .borrow_mut()
            .insert(name.to_string(), location.clone());
        location
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locations.borrow().len()
    }
}
