// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::{cell::Cell, fmt::Display, sync::OnceLock, time::Duration};

use crate::terminal::{banner, colors, format};
use anyhow::bail;
use colored::*;
use sonda_common::models::report::{Finding, LocalFindings, PublicFindings, Report};
use sonda_common::models::target::Target;
use sonda_common::{config::Config, success};
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

static PRINT: OnceLock<Print> = OnceLock::new();

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

type Detail = (String, ColoredString);

#[macro_export]
macro_rules! sprint {
    () => {
        $crate::sprint!("")
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "sonda::print",
            raw_msg = %format_args!($($arg)*)
        )
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

pub struct Print {
    no_banner: bool,
    q_level: u8,
    redact: bool,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
            redact: cfg.redact,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        let term = Self::new(cfg);
        if PRINT.set(term).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    fn get() -> &'static Self {
        PRINT.get().expect("terminal has not been initialized")
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text_content: String = format!("⟦ SONDA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
        let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
        let text: ColoredString = text_content.bright_green().bold();
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
            .bright_black();
        let output: String = format!("{}{}{}", sep, text, sep);

        sprint!("{}", output);
        banner::print();
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.q_level > 0 {
            sprint!();
            return;
        }

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

        sprint!("{}", line);
    }

    /// Renders the full investigation report, section by section, in the
    /// order the lookups ran.
    pub fn report(report: &Report) {
        let p = Self::get();
        if p.q_level >= 2 {
            Self::raw_report(report);
            return;
        }

        sprint!();
        Self::header("investigation report");
        Self::preamble(report);

        let mut idx: usize = 0;
        if let Some(local) = &report.local {
            Self::local_section(local, report.target, &mut idx);
        }
        if let Some(public) = &report.public {
            Self::public_section(public, report.discovery.is_some(), &mut idx);
        }
    }

    fn preamble(report: &Report) {
        let p = Self::get();
        let target: Target = report.target;
        aligned_line("Target", format::addr_to_colored(&target.addr, p.redact));
        aligned_line(
            "Scope",
            format!("{} {}", target.scope, target.family()).color(colors::SECONDARY),
        );
        if let Some(Err(e)) = &report.discovery {
            aligned_line("Public IP", format::placeholder(e));
        }
    }

    fn local_section(local: &LocalFindings, target: Target, idx: &mut usize) {
        let p = Self::get();
        sprint!();
        tree_head(
            *idx,
            &format!(
                "Local findings for {}",
                format::addr_to_string(&target.addr, p.redact)
            ),
        );
        *idx += 1;
        as_tree(vec![
            format::reachability_to_detail(&local.reachability),
            format::hostname_to_detail(&local.hostname, p.redact),
        ]);

        sprint!();
        Self::raw_section(idx, "ARP table", &local.arp);
        sprint!();
        Self::raw_section(idx, "NetBIOS status", &local.netbios);
    }

    fn public_section(public: &PublicFindings, discovered: bool, idx: &mut usize) {
        let p = Self::get();
        let subject: String = format::addr_to_string(&public.subject, p.redact);
        let head: String = if discovered {
            format!("Public findings for {subject} (discovered)")
        } else {
            format!("Public findings for {subject}")
        };

        sprint!();
        tree_head(*idx, &head);
        *idx += 1;

        let mut details: Vec<Detail> = vec![format::hostname_to_detail(&public.hostname, p.redact)];
        match &public.geo {
            Ok(record) => details.extend(format::geo_to_details(record, p.redact)),
            Err(e) => details.push(("Geo Intel".to_string(), format::placeholder(e))),
        }
        as_tree(details);

        sprint!();
        Self::raw_section(idx, "WHOIS record", &public.whois);
    }

    fn raw_section(idx: &mut usize, name: &str, finding: &Finding<String>) {
        tree_head(*idx, name);
        *idx += 1;
        match finding {
            Ok(text) => raw_block(text),
            Err(e) => raw_block(&e.to_string()),
        }
    }

    /// Stripped-down rendition for `-qq`: stable `key: value` lines with
    /// no styling, meant for piping into other tools.
    fn raw_report(report: &Report) {
        let p = Self::get();
        sprint!(
            "target: {}",
            format::addr_to_string(&report.target.addr, p.redact)
        );
        sprint!("scope: {}", report.target.scope);

        if let Some(local) = &report.local {
            Self::raw_scalar("reachability", &local.reachability);
            sprint!(
                "hostname: {}",
                format::hostname_text(&local.hostname, p.redact)
            );
            Self::raw_blob("arp", &local.arp);
            Self::raw_blob("netbios", &local.netbios);
        }

        if let Some(discovery) = &report.discovery {
            match discovery {
                Ok(addr) => sprint!("public_ip: {}", format::addr_to_string(addr, p.redact)),
                Err(e) => sprint!("public_ip: {e}"),
            }
        }

        if let Some(public) = &report.public {
            match &public.geo {
                Ok(record) => {
                    for (key, value) in format::geo_rows(record, p.redact) {
                        sprint!("{}: {}", key.to_lowercase(), value);
                    }
                }
                Err(e) => sprint!("geo: {e}"),
            }
            sprint!("ptr: {}", format::hostname_text(&public.hostname, p.redact));
            Self::raw_blob("whois", &public.whois);
        }
    }

    fn raw_scalar<T: Display>(key: &str, finding: &Finding<T>) {
        match finding {
            Ok(value) => sprint!("{key}: {value}"),
            Err(e) => sprint!("{key}: {e}"),
        }
    }

    fn raw_blob(key: &str, finding: &Finding<String>) {
        match finding {
            Ok(text) if text.trim().is_empty() => sprint!("{key}: (no output)"),
            Ok(text) => {
                sprint!("{key}:");
                sprint!("{}", text.trim_end());
            }
            Err(e) => sprint!("{key}: {e}"),
        }
    }

    pub fn investigation_summary(lookups: usize, total_time: Duration) {
        let p = Self::get();
        let lookups: ColoredString = format!("{lookups} lookups").bold().green();
        let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
        let output: &ColoredString =
            &format!("Investigation Complete: {lookups} performed in {total_time}")
                .color(colors::TEXT_DEFAULT);

        match p.q_level {
            0 => {
                divider();
                centerln(output);
            }
            _ => {
                sprint!();
                success!("{output}")
            }
        }
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        sprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn divider() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    sprint!("{}", sep);
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
    sprint!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    );
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    sprint!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree(details: Vec<(String, ColoredString)>) {
    let padding_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last { "├─" } else { "└─" }.bright_black();

        let dots_count: usize = padding_width.saturating_sub(key.len());
        let dots: ColoredString = ".".repeat(dots_count).color(colors::SEPARATOR);

        sprint!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots,
            ":".color(colors::SEPARATOR),
            value
        );
    }
}

/// Indented, dimmed rendition of a raw command capture.
pub fn raw_block(text: &str) {
    let trimmed: &str = text.trim_end();
    if trimmed.is_empty() {
        sprint!("     {}", "(no output)".dimmed().italic());
        return;
    }
    for line in trimmed.lines() {
        sprint!("     {}", line.dimmed());
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat((TOTAL_WIDTH - console::measure_text_width(msg)) / 2);
    sprint!("{}{}{}", space, msg, space);
}
