/// Millisecond timestamp supplied by the caller's clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    pub fn saturating_add(self, millis: u64) -> Tick {
        Tick(self.0.saturating_add(millis))
    }
}

/// Cached derived value keyed on its dependencies' versions.
#[derive(Debug)]
pub struct Memo<K, T> {
    cached: Option<(K, T)>,
}

impl<K: PartialEq, T> Memo<K, T> {
    pub fn new() -> Self {
        Self { cached: None }
    }

    pub fn is_fresh(&self, key: &K) -> bool {
        matches!(&self.cached, Some((cached, _)) if cached == key)
    }

    /// Returns the cached value, recomputing first if `key` changed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> T) -> &T {
        self.resolve(key, false, compute)
    }

    /// Like [`Memo::get_or_compute`], but a stale entry survives when
    /// `keep_stale` is set. The old key is kept so the entry stays stale.
    fn resolve(&mut self, key: K, keep_stale: bool, compute: impl FnOnce() -> T) -> &T {
        let entry = match self.cached.take() {
            Some((cached, value)) if keep_stale || cached == key => (cached, value),
            _ => (key, compute()),
        };
        &self.cached.insert(entry).1
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

impl<K: PartialEq, T> Default for Memo<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Memo`] that recomputes at most once per window.
///
/// The window opens at each recompute. A stale read inside it serves the
/// previous value and changes made meanwhile are coalesced; the first read at
/// or after the window's end recomputes with the latest dependencies. A stale
/// read after an idle period recomputes right away, as does an empty cache.
#[derive(Debug)]
pub struct RateLimited<K, T> {
    memo: Memo<K, T>,
    window_ms: u64,
    computed_at: Option<Tick>,
}

impl<K: PartialEq, T> RateLimited<K, T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            memo: Memo::new(),
            window_ms,
            computed_at: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Earliest tick at which the next recompute may run.
    pub fn due(&self) -> Option<Tick> {
        self.computed_at.map(|at| at.saturating_add(self.window_ms))
    }

    pub fn read(&mut self, key: K, now: Tick, compute: impl FnOnce() -> T) -> &T {
        let stale = !self.memo.is_fresh(&key);
        let in_window = self.due().is_some_and(|due| now < due);
        let keep_stale = stale && in_window;
        if stale && !keep_stale {
            self.computed_at = Some(now);
        }
        self.memo.resolve(key, keep_stale, compute)
    }
}
