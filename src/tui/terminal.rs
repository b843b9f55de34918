//! Raw mode and alternate screen setup with guaranteed teardown.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, error, instrument};

type Step = (&'static str, fn() -> io::Result<()>);

const TEARDOWN: [Step; 3] = [
    ("disable raw mode", disable_raw_mode),
    ("leave alternate screen", leave_alternate_screen),
    ("show cursor", show_cursor),
];

fn leave_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn show_cursor() -> io::Result<()> {
    execute!(io::stdout(), Show)
}

/// Runs every step even if an earlier one fails, returning the first error.
fn run_all(steps: &[Step]) -> io::Result<()> {
    let mut first_error = None;
    for (name, step) in steps {
        if let Err(e) = step() {
            error!(step = *name, error = %e, "Terminal restore step failed");
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Puts the terminal in raw mode on the alternate screen. Restores it on drop.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    ///
    /// If entering the alternate screen fails, raw mode is undone before
    /// the error is returned.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }

    /// Restores the terminal now and reports the first failure.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        run_all(&TEARDOWN)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            debug!("Restoring terminal on drop");
            let _ = run_all(&TEARDOWN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_every_step_runs_after_a_failure() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        fn fails_first() -> io::Result<()> {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::other("raw mode"))
        }
        fn fails_second() -> io::Result<()> {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::other("screen"))
        }
        fn succeeds() -> io::Result<()> {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        let steps: [Step; 3] = [
            ("first", fails_first),
            ("second", fails_second),
            ("third", succeeds),
        ];
        let err = run_all(&steps).unwrap_err();

        assert_eq!(err.to_string(), "raw mode");
        assert_eq!(CALLS.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_clean_teardown_is_ok() {
        fn succeeds() -> io::Result<()> {
            Ok(())
        }

        let steps: [Step; 2] = [("first", succeeds), ("second", succeeds)];
        assert!(run_all(&steps).is_ok());
    }
}
