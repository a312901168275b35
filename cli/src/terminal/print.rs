use std::{cell::Cell, fmt::Display};

use crate::terminal::{banner, colors, format};
use colored::*;
use ptrwalk_common::PRINT_TARGET;
use ptrwalk_common::network::host::HostRecord;
use ptrwalk_common::network::range::HostRange;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PTRWALK v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    banner::print();
    print(&output);
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

/// Decorated overview of the subnet, shown above the listing on a terminal.
pub fn subnet_details(range: &HostRange) {
    let network = range.network();
    let cidr: ColoredString = format!(
        "{}/{}",
        network.ip().to_string().color(colors::IPV4_ADDR),
        network.prefix().to_string().color(colors::IPV4_PREFIX)
    )
    .color(colors::SEPARATOR);
    let host_span: String = match (range.first(), range.last()) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "none".to_string(),
    };

    GLOBAL_KEY_WIDTH.set(9);
    header("subnet");
    aligned_line("Network", cidr);
    aligned_line("Netmask", range.mask().to_string().color(colors::IPV4_ADDR));
    aligned_line("Broadcast", range.broadcast().to_string().color(colors::IPV4_ADDR));
    aligned_line("Hosts", host_span);
    fat_separator();
}

pub fn summary(range: &HostRange) {
    print(&format::summary_line(range));
    mprint!();
}

pub fn record(record: &HostRecord) {
    print(&format::record_line(record));
}

pub fn end_of_hosts() {
    mprint!();
    mprint!();
    print(format::END_OF_HOSTS);
}
