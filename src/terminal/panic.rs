//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Chain a hook that restores the terminal before the existing one prints
/// the report.
///
/// Install after `color_eyre::install()` so its report runs on a sane
/// terminal.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Reset to default hook to avoid affecting other tests
        let _ = panic::take_hook();
    }
}
