use crossterm::{ExecutableCommand, cursor, terminal};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

pub struct Logger {
    start_time: Instant,
    quiet: bool,
    interactive: bool,
    // Guards the rewritable status line; install units report from many threads.
    current_line: Mutex<String>,
}

pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
    Shell,
}

impl Logger {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
            interactive: io::stdout().is_terminal(),
            current_line: Mutex::new(String::new()),
        }
    }

    fn clear_current_line(&self) {
        if self.quiet || !self.interactive {
            return;
        }

        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::MoveToColumn(0));
        let _ = stdout.execute(terminal::Clear(terminal::ClearType::CurrentLine));
        let _ = stdout.flush();
    }

    /// Rewrites the status line in place. Without a terminal the message is
    /// dropped, so piped output only carries final lines.
    pub fn update_line(&self, message: &str) {
        if self.quiet || !self.interactive {
            return;
        }

        let Ok(mut line) = self.current_line.lock() else {
            return;
        };

        self.clear_current_line();
        print!("{message}");
        let _ = io::stdout().flush();
        *line = message.to_string();
    }

    pub fn clear_status(&self) {
        let Ok(mut line) = self.current_line.lock() else {
            return;
        };

        self.clear_current_line();
        line.clear();
    }

    pub fn finish_line(&self, message: &str) {
        if self.quiet {
            return;
        }

        let Ok(mut line) = self.current_line.lock() else {
            return;
        };

        self.clear_current_line();
        println!("{message}");
        line.clear();
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.quiet && !matches!(level, LogLevel::Error) {
            return;
        }

        let (prefix, colored_message) = match level {
            LogLevel::Info => (
                "pacchetti".bright_cyan().bold().to_string(),
                message.white().to_string(),
            ),
            LogLevel::Success => (
                "✓".bright_green().bold().to_string(),
                message.bright_green().to_string(),
            ),
            LogLevel::Warning => (
                "⚠".bright_yellow().bold().to_string(),
                message.bright_yellow().to_string(),
            ),
            LogLevel::Error => (
                "✗".bright_red().bold().to_string(),
                message.bright_red().to_string(),
            ),
            LogLevel::Debug => (
                "•".bright_black().bold().to_string(),
                message.bright_black().to_string(),
            ),
            LogLevel::Shell => (
                "$".bright_blue().bold().to_string(),
                message.bright_black().to_string(),
            ),
        };

        let line = format!("{prefix} {colored_message}");
        if matches!(level, LogLevel::Error) {
            self.clear_current_line();
            eprintln!("{line}");
        } else {
            self.finish_line(&line);
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(&self, message: &str) {
        let final_message = format!(
            "{} {} {}",
            "✓".bright_green().bold(),
            message.bright_green(),
            format!("[{}]", format_elapsed(self.elapsed())).bright_black()
        );

        self.finish_line(&final_message);
    }

    pub fn progress(&self, message: &str, current: usize, total: usize) {
        let spinners = ["◐", "◓", "◑", "◒"];
        let spinner = spinners.get(current % spinners.len()).unwrap_or(&"◐");

        let progress_text = if total > 0 {
            format!(
                "{} {} ({}/{})",
                spinner.bright_cyan(),
                message.bright_white(),
                current.to_string().bright_cyan().bold(),
                total.to_string().bright_white()
            )
        } else {
            format!("{} {}", spinner.bright_cyan(), message.bright_white())
        };

        self.update_line(&progress_text);
    }

    pub fn status(&self, message: &str) {
        let status_msg = format!("{} {}", "◦".bright_cyan(), message.bright_white());
        self.update_line(&status_msg);
    }
}

#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.as_millis() < 1000 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_logger(quiet: bool) {
    let _ = LOGGER.set(Logger::new(quiet));
}

// Library code and tests may log before the CLI has configured anything.
fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(false))
}

pub fn status(message: &str) {
    get_logger().status(message);
}

pub fn info(message: &str) {
    get_logger().log(LogLevel::Info, message);
}

pub fn success(message: &str) {
    get_logger().log(LogLevel::Success, message);
}

pub fn warn(message: &str) {
    get_logger().log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    get_logger().log(LogLevel::Error, message);
}

pub fn debug(message: &str, debug_enabled: bool) {
    if debug_enabled {
        get_logger().log(LogLevel::Debug, message);
    }
}

pub fn shell(command: &str) {
    get_logger().log(LogLevel::Shell, command);
}

pub fn progress(message: &str, current: usize, total: usize) {
    get_logger().progress(message, current, total);
}

pub fn clear_status() {
    get_logger().clear_status();
}

pub fn finish(message: &str) {
    get_logger().finish(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_millis() {
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn test_logging_without_init_does_not_panic() {
        debug("not shown", false);
        status("resolving");
        progress("installing", 1, 3);
        clear_status();
    }
}
