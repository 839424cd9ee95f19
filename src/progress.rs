use std::io::Write;

/// Receives one notification per written file.
pub trait Progress {
    fn advance(&mut self);
}

/// Prints a `.` to stdout for every written file.
#[derive(Debug, Default)]
pub struct Dots {
    printed: usize,
}

impl Dots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminates the line of dots, if any were printed.
    pub fn finish(&self) {
        if self.printed > 0 {
            println!();
        }
    }
}

impl Progress for Dots {
    fn advance(&mut self) {
        let mut stdout = std::io::stdout().lock();
        // progress is cosmetic, a closed stdout must not abort the run
        let _ = write!(stdout, ".");
        let _ = stdout.flush();
        self.printed += 1;
    }
}

/// Discards progress notifications.
impl Progress for () {
    fn advance(&mut self) {}
}
