use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop flag shared between a recording loop and whoever wants
/// to end it. Checked once per iteration; a running capture or sleep is not
/// interrupted.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_flag() {
        let handle = StopHandle::new();
        let other = handle.clone();
        assert!(!handle.is_stopped());

        thread::spawn(move || other.stop()).join().unwrap();
        assert!(handle.is_stopped());

        handle.reset();
        assert!(!handle.is_stopped());
    }
}
