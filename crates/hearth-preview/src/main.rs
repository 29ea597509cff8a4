//! Desktop preview for the hearth panel helpers.
//!
//! Prints the current local date and time in every clock style the panel
//! supports, then resolves each icon name given on the command line.
//!
//! ```text
//! $ hearth-preview mdi:thermometer door-open not-an-icon
//! ```
//!
//! Set `RUST_LOG=debug` to see fallback decisions from the resolver.

use chrono::{Datelike, Local, Timelike};
use log::{error, info};

use hearth_core::config::Config;
use hearth_core::datetime::{DateStyle, DateTimeFields, TimeSource, TimeStyle};
use hearth_core::icons::IconResolver;

/// Width of the name column in the icon listing.
const NAME_COLUMN_WIDTH: usize = 28;

/// Wall clock of the host machine in its local time zone.
struct HostClock;

impl TimeSource for HostClock {
    fn now(&self) -> DateTimeFields {
        let now = Local::now();
        DateTimeFields {
            year: now.year(),
            month: now.month() as i32,
            day: now.day() as i32,
            day_of_week: now.weekday().number_from_sunday() as i32,
            hour: now.hour() as i32,
            minute: now.minute() as i32,
            second: now.second() as i32,
        }
    }
}

fn print_clock(fields: &DateTimeFields, config: &Config<'_>) {
    println!("Date");
    for style in DateStyle::ALL {
        let marker = if style == config.clock.date_style { '*' } else { ' ' };
        println!(" {marker} {:<8} {}", style.label(), fields.format_date(style));
    }

    println!("Time");
    for style in TimeStyle::ALL {
        let marker = if style == config.clock.time_style { '*' } else { ' ' };
        println!(" {marker} {:<8} {}", style.label(), fields.format_time(style));
    }
}

fn print_icons<I: IntoIterator<Item = String>>(resolver: &IconResolver<'_>, names: I) {
    for name in names {
        let glyph = resolver.resolve(&name);
        match resolver.lookup(&name) {
            Some(entry) => println!(
                "{name:<width$} U+{:05X} {glyph}",
                entry.codepoint,
                width = NAME_COLUMN_WIDTH
            ),
            None => println!(
                "{name:<width$} U+{:05X} {glyph} (fallback)",
                glyph.codepoint(),
                width = NAME_COLUMN_WIDTH
            ),
        }
    }
}

fn main() {
    env_logger::init();
    info!("Starting hearth preview");

    let config = Config::default();
    let resolver = match IconResolver::from_config(&config.icons) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!("Invalid icon configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Icon table: {} entries", resolver.len());

    let fields = HostClock.now();
    print_clock(&fields, &config);

    let names: Vec<String> = std::env::args().skip(1).collect();
    if !names.is_empty() {
        println!("Icons");
        print_icons(&resolver, names);
    }

    info!("Preview exiting");
}
