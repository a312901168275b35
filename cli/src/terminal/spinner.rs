use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::colors;

pub(crate) static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

pub fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn report_progress(done: u32, total: u32) {
    get_spinner().set_message(
        format!(
            "Resolved {} of {} hosts...",
            done.to_string().green().bold(),
            total.to_string().bold()
        )
        .color(colors::TEXT_DEFAULT)
        .to_string(),
    );
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Writes log output without tearing the spinner line.
pub enum SpinnerWriter {
    Stdout,
    Stderr,
}

impl SpinnerWriter {
    fn write_through(&self, buf: &[u8]) -> std::io::Result<()> {
        match self {
            SpinnerWriter::Stdout => std::io::stdout().write_all(buf),
            SpinnerWriter::Stderr => std::io::stderr().write_all(buf),
        }
    }
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match SPINNER.get() {
            Some(pb) => pb.suspend(|| self.write_through(buf))?,
            None => self.write_through(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            SpinnerWriter::Stdout => std::io::stdout().flush(),
            SpinnerWriter::Stderr => std::io::stderr().flush(),
        }
    }
}
