//! One-shot browser timers.
//!
//! Auto-dismissal and delayed navigation only make sense in the browser; on
//! native builds the callback is dropped without running.

/// Run `f` once after `delay_ms` milliseconds.
pub fn after<F>(delay_ms: u64, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    {
        let millis = u32::try_from(delay_ms).unwrap_or(u32::MAX);
        let _ = gloo_timers::callback::Timeout::new(millis, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}
