//! Icon name resolution for the panel's Material Design Icons font.
//!
//! Home Assistant entities name their icons like `"mdi:thermometer"`. The
//! panel font places each icon at a private-use codepoint, so rendering an
//! icon means looking its name up in a sorted table and embedding the
//! codepoint's UTF-8 bytes in the label text.

mod table;

use log::{debug, warn};

use crate::config::{ConfigError, IconConfig};
use crate::glyph::Glyph;

/// Prefix used by Home Assistant for Material Design Icons.
pub const MDI_PREFIX: &str = "mdi:";

/// Codepoint shown for names missing from the table ("lightbulb").
pub const FALLBACK_CODEPOINT: u32 = 0xF1802;

/// Glyph shown for names missing from the table.
pub const FALLBACK_GLYPH: Glyph = Glyph::from_char('\u{F1802}');

/// All known icons, sorted by name.
pub static MDI_ICONS: &[IconEntry] = table::ENTRIES;

const _: () = assert!(
    is_sorted(table::ENTRIES),
    "MDI icon table must be sorted by name"
);

/// A single icon name and its font codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub name: &'static str,
    pub codepoint: u32,
}

impl IconEntry {
    pub const fn new(name: &'static str, codepoint: u32) -> Self {
        Self { name, codepoint }
    }
}

/// Check that `table` is strictly increasing by name under byte-wise order.
pub const fn is_sorted(table: &[IconEntry]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if !bytes_less(table[i - 1].name.as_bytes(), table[i].name.as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

const fn bytes_less(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

/// Resolves icon names to glyphs over a sorted table.
///
/// Unknown names are not an error: icons that have not been added to the
/// table yet render as the fallback glyph.
///
/// # Examples
/// ```ignore
/// let resolver = IconResolver::default();
/// label.push_str(&resolver.resolve("mdi:thermometer")).ok();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IconResolver<'a> {
    table: &'a [IconEntry],
    prefix: &'a str,
    fallback: Glyph,
}

impl Default for IconResolver<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl IconResolver<'static> {
    /// The built-in MDI table with the `"mdi:"` prefix and lightbulb fallback.
    pub const DEFAULT: Self = Self::new(table::ENTRIES, FALLBACK_GLYPH);
}

impl<'a> IconResolver<'a> {
    /// Create a resolver over `table`, which must be sorted by name.
    pub const fn new(table: &'a [IconEntry], fallback: Glyph) -> Self {
        Self {
            table,
            prefix: MDI_PREFIX,
            fallback,
        }
    }

    /// Build a resolver over the built-in table from an icon config section.
    pub fn from_config(config: &IconConfig<'a>) -> Result<Self, ConfigError> {
        let fallback = config.validate()?;
        Ok(Self {
            table: MDI_ICONS,
            prefix: config.prefix,
            fallback,
        })
    }

    /// Use a different name prefix than `"mdi:"`.
    pub const fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Resolve an icon name, with or without prefix, to its glyph.
    ///
    /// Falls back to the configured fallback glyph when the name is unknown.
    pub fn resolve(&self, icon_name: &str) -> Glyph {
        let Some(entry) = self.lookup(icon_name) else {
            debug!("Icon {:?} not in table, using fallback", icon_name);
            return self.fallback;
        };

        match Glyph::from_codepoint(entry.codepoint) {
            Ok(glyph) => glyph,
            Err(e) => {
                warn!("Icon {:?} has unusable codepoint: {}", entry.name, e);
                self.fallback
            }
        }
    }

    /// Find the table entry for an icon name, with or without prefix.
    pub fn lookup(&self, icon_name: &str) -> Option<&'a IconEntry> {
        let table = self.table;
        let name = self.strip_prefix(icon_name);
        table
            .binary_search_by(|entry| entry.name.as_bytes().cmp(name.as_bytes()))
            .ok()
            .map(|index| &table[index])
    }

    pub fn contains(&self, icon_name: &str) -> bool {
        self.lookup(icon_name).is_some()
    }

    /// Remove the prefix when something follows it.
    ///
    /// A bare `"mdi:"` is returned unchanged.
    pub fn strip_prefix<'n>(&self, icon_name: &'n str) -> &'n str {
        match icon_name.strip_prefix(self.prefix) {
            Some(rest) if !rest.is_empty() => rest,
            _ => icon_name,
        }
    }

    pub fn fallback(&self) -> Glyph {
        self.fallback
    }

    pub fn entries(&self) -> &'a [IconEntry] {
        self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Resolve an icon name against the built-in table.
pub fn resolve(icon_name: &str) -> Glyph {
    IconResolver::DEFAULT.resolve(icon_name)
}

/// Look up an icon name in the built-in table.
pub fn lookup(icon_name: &str) -> Option<&'static IconEntry> {
    IconResolver::DEFAULT.lookup(icon_name)
}
