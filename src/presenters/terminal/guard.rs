use std::io::{self, Write, stdout};

use crossterm::{ExecutableCommand, cursor, terminal};

/// Puts the terminal into raw mode on the alternate screen with the cursor
/// hidden, and restores it when dropped.
pub struct TerminalGuard {
    restored: bool,
    // Terminal state is per-process; keep the guard on the thread that made it.
    _marker: std::marker::PhantomData<*const ()>,
}

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut guard = Self {
            restored: false,
            _marker: std::marker::PhantomData,
        };

        // Raw mode is already on; a failure here must still undo it.
        if let Err(err) = guard.enter_screen() {
            guard.restore();
            return Err(err);
        }

        Ok(guard)
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        let mut out = stdout();
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        Ok(())
    }

    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        let mut out = stdout();
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
