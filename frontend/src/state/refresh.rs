use leptos::*;

/// Monotonic counter that tells dependent views to re-fetch.
///
/// Views never compare generations; any change means "load again".
#[derive(Debug, Clone, Copy)]
pub struct RefreshGeneration(RwSignal<u64>);

impl RefreshGeneration {
    pub fn new() -> Self {
        Self(create_rw_signal(0))
    }

    pub fn current(&self) -> u64 {
        self.0.get_untracked()
    }

    /// Tracked read, for use inside effects.
    pub fn track(&self) -> u64 {
        self.0.get()
    }

    pub fn bump(&self) {
        self.0.update(|generation| *generation += 1);
        log::debug!("refresh generation bumped to {}", self.current());
    }

    /// Runs `f` now and again after every bump.
    pub fn subscribe(&self, f: impl Fn(u64) + 'static) {
        let signal = self.0;
        create_effect(move |_| f(signal.get()));
    }
}

impl Default for RefreshGeneration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn bump_only_increases() {
        with_runtime(|| {
            let generation = RefreshGeneration::new();
            assert_eq!(generation.current(), 0);
            generation.bump();
            generation.bump();
            assert_eq!(generation.current(), 2);
        });
    }

    #[test]
    fn copies_share_the_counter() {
        with_runtime(|| {
            let generation = RefreshGeneration::new();
            let handle = generation;
            handle.bump();
            assert_eq!(generation.current(), 1);
        });
    }
}
