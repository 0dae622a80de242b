/*!
A bounded cache of compiled format pictures.
*/

use std::sync::{Arc, Mutex};

use crate::{
    civil::{CivilTime, TimeKind},
    compile::{compile_nodes, Mode, Node, Pattern},
    error::Error,
    locale::Locale,
};

/// The number of entries a cache holds by default.
const DEFAULT_CAPACITY: usize = 20;

/// Patterns longer than this many bytes are compiled on the spot and never
/// cached, so one giant pattern cannot pin an outsized compilation in a
/// slot.
const MAX_CACHED_PATTERN: usize = 128;

/// A bounded cache of compiled format pictures.
///
/// Rendering the same handful of pictures over and over is the common
/// case, so the cache keeps the most recently used compilations keyed by
/// pattern text and [`Mode`]. When it is full, the least recently used
/// entry is evicted. The cache is internally synchronized; a single
/// long-lived instance can be shared across threads.
///
/// Looking a pattern up through the cache is behaviorally identical to
/// calling [`Pattern::compile`] directly. The cache only changes where the
/// nodes come from.
#[derive(Debug)]
pub struct PatternCache {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    entries: Vec<Entry>,
    capacity: usize,
    counter: i32,
}

#[derive(Debug)]
struct Entry {
    pattern: String,
    mode: Mode,
    nodes: Arc<[Node]>,
    /// An entry is published by flipping this on only after compilation
    /// succeeded. A failed compilation leaves the slot invalid, to be
    /// recycled before anything valid is evicted.
    valid: bool,
    age: i32,
}

impl Entry {
    fn empty() -> Entry {
        Entry {
            pattern: String::new(),
            mode: Mode::Free,
            nodes: Vec::new().into(),
            valid: false,
            age: 0,
        }
    }
}

impl Default for PatternCache {
    fn default() -> PatternCache {
        PatternCache::new()
    }
}

impl PatternCache {
    /// Creates a cache with the default capacity of 20 entries.
    pub fn new() -> PatternCache {
        PatternCache::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` compiled patterns.
    ///
    /// A zero capacity is rounded up to one.
    pub fn with_capacity(capacity: usize) -> PatternCache {
        let capacity = capacity.max(1);
        PatternCache {
            inner: Mutex::new(Inner {
                entries: Vec::with_capacity(capacity),
                capacity,
                counter: 0,
            }),
        }
    }

    /// Returns the compilation of `pattern`, either from the cache or by
    /// compiling and caching it.
    ///
    /// Oversized patterns are compiled without touching the cache.
    pub fn fetch(&self, pattern: &str, mode: Mode) -> Result<Pattern, Error> {
        if pattern.len() > MAX_CACHED_PATTERN {
            trace!(
                "pattern of {} bytes exceeds cache limit of {} bytes, \
                 compiling without caching",
                pattern.len(),
                MAX_CACHED_PATTERN,
            );
            return Pattern::compile(pattern, mode);
        }
        let mut inner = self.lock();
        if let Some(nodes) = inner.search(pattern, mode) {
            trace!("cache hit for pattern {pattern:?}");
            return Ok(Pattern::from_nodes(nodes));
        }
        trace!("cache miss for pattern {pattern:?}, compiling");
        inner.insert(pattern, mode).map(Pattern::from_nodes)
    }

    /// Compiles (or fetches) `pattern` and renders `tm` with it, using the
    /// built-in English names.
    pub fn format(
        &self,
        pattern: &str,
        mode: Mode,
        tm: &CivilTime,
        kind: TimeKind,
    ) -> Result<String, Error> {
        self.fetch(pattern, mode)?.render(tm, kind)
    }

    /// Like [`PatternCache::format`], but localized names come from
    /// `locale`.
    pub fn format_with(
        &self,
        locale: &dyn Locale,
        pattern: &str,
        mode: Mode,
        tm: &CivilTime,
        kind: TimeKind,
    ) -> Result<String, Error> {
        self.fetch(pattern, mode)?.render_with(locale, tm, kind)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panic while holding the lock can only have happened outside
        // compilation (which does not panic), so the data is fine to keep
        // using.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[cfg(test)]
    fn set_counter(&self, counter: i32) {
        self.lock().counter = counter;
    }

    #[cfg(test)]
    fn counter(&self) -> i32 {
        self.lock().counter
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[cfg(test)]
    fn contains(&self, pattern: &str, mode: Mode) -> bool {
        self.lock()
            .entries
            .iter()
            .any(|e| e.valid && e.mode == mode && e.pattern == pattern)
    }

    #[cfg(test)]
    fn ages(&self) -> Vec<i32> {
        self.lock().entries.iter().map(|e| e.age).collect()
    }
}

impl Inner {
    /// Issues the next age. When the counter nears `i32::MAX` every age is
    /// halved first, which keeps the relative order of entries while
    /// making room for billions more bumps.
    fn bump(&mut self) -> i32 {
        if self.counter >= i32::MAX - 1 {
            debug!("age counter at {}, halving all entry ages", self.counter);
            for entry in self.entries.iter_mut() {
                entry.age >>= 1;
            }
            self.counter >>= 1;
        }
        self.counter += 1;
        self.counter
    }

    /// Looks for a valid entry and freshens its age on a hit.
    fn search(&mut self, pattern: &str, mode: Mode) -> Option<Arc<[Node]>> {
        let i = self.entries.iter().position(|e| {
            e.valid && e.mode == mode && e.pattern == pattern
        })?;
        let age = self.bump();
        self.entries[i].age = age;
        Some(Arc::clone(&self.entries[i].nodes))
    }

    /// Compiles `pattern` into a slot. The slot is only marked valid after
    /// compilation succeeds; an error leaves it invalid.
    fn insert(
        &mut self,
        pattern: &str,
        mode: Mode,
    ) -> Result<Arc<[Node]>, Error> {
        let age = self.bump();
        let i = self.slot();
        let entry = &mut self.entries[i];
        entry.valid = false;
        entry.pattern.clear();
        entry.pattern.push_str(pattern);
        entry.mode = mode;
        entry.age = age;

        let nodes: Arc<[Node]> = compile_nodes(pattern, mode)?.into();
        entry.nodes = Arc::clone(&nodes);
        entry.valid = true;
        Ok(nodes)
    }

    /// Picks the slot for a new entry: grow while below capacity, then
    /// recycle an invalid slot, then evict the entry with the smallest
    /// age.
    fn slot(&mut self) -> usize {
        if self.entries.len() < self.capacity {
            self.entries.push(Entry::empty());
            return self.entries.len() - 1;
        }
        let mut oldest = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.valid {
                return i;
            }
            if entry.age < self.entries[oldest].age {
                oldest = i;
            }
        }
        trace!("evicting pattern {:?}", self.entries[oldest].pattern);
        oldest
    }
}
