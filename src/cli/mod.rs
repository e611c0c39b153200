// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the damerau command-line interface.
//!
//! Two subcommands: `distance` prints the edit distance between two strings,
//! `table` draws the whole dynamic-programming table. The CLI is where the
//! symbol unit gets decided (code points or bytes, optionally after NFC); the
//! library only ever sees two slices.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use damerau::Variant;

#[derive(Parser)]
#[command(
    name = "damerau",
    about = "Damerau-Levenshtein edit distance between two strings",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the edit distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Restricted (optimal string alignment) or unrestricted transpositions
        #[arg(long, value_enum, env = "DAMERAU_VARIANT", default_value_t = VariantArg::Restricted)]
        variant: VariantArg,

        /// What counts as one symbol
        #[arg(long, value_enum, env = "DAMERAU_UNIT", default_value_t = Unit::Chars)]
        unit: Unit,

        /// Stop once the distance is known to exceed this budget
        ///
        /// Prints `>K` instead of the distance when over budget. Only the
        /// restricted variant supports early termination.
        #[arg(long, value_name = "K")]
        max: Option<usize>,

        /// Apply Unicode NFC to both strings before splitting into symbols
        #[arg(long)]
        normalize: bool,

        /// Print a JSON object instead of a bare number
        #[arg(long)]
        json: bool,
    },

    /// Draw the restricted distance table for two strings
    Table {
        /// First string (rows)
        a: String,

        /// Second string (columns)
        b: String,

        /// What counts as one symbol
        #[arg(long, value_enum, env = "DAMERAU_UNIT", default_value_t = Unit::Chars)]
        unit: Unit,

        /// Apply Unicode NFC to both strings before splitting into symbols
        #[arg(long)]
        normalize: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Restricted,
    Unrestricted,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Restricted => Variant::Restricted,
            VariantArg::Unrestricted => Variant::Unrestricted,
        }
    }
}

/// Symbol unit for splitting command-line strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    /// Unicode scalar values
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Chars => "chars",
            Unit::Bytes => "bytes",
        }
    }
}

/// Two command-line strings split into symbols of the same unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pair {
    Chars(Vec<char>, Vec<char>),
    Bytes(Vec<u8>, Vec<u8>),
}

impl Pair {
    pub fn split(a: &str, b: &str, unit: Unit, normalize: bool) -> Self {
        let a = prepare(a, normalize);
        let b = prepare(b, normalize);
        match unit {
            Unit::Chars => Pair::Chars(a.chars().collect(), b.chars().collect()),
            Unit::Bytes => Pair::Bytes(a.into_bytes(), b.into_bytes()),
        }
    }

    /// Symbol counts of both sides.
    pub fn lens(&self) -> (usize, usize) {
        match self {
            Pair::Chars(a, b) => (a.len(), b.len()),
            Pair::Bytes(a, b) => (a.len(), b.len()),
        }
    }

    /// Printable label for each symbol of both sides, used as table headers.
    pub fn labels(&self) -> (Vec<String>, Vec<String>) {
        fn chars(s: &[char]) -> Vec<String> {
            s.iter().map(|ch| ch.to_string()).collect()
        }
        fn bytes(s: &[u8]) -> Vec<String> {
            s.iter()
                .map(|&byte| {
                    if byte.is_ascii_graphic() {
                        (byte as char).to_string()
                    } else {
                        format!("{:02x}", byte)
                    }
                })
                .collect()
        }
        match self {
            Pair::Chars(a, b) => (chars(a), chars(b)),
            Pair::Bytes(a, b) => (bytes(a), bytes(b)),
        }
    }
}

#[cfg(feature = "unicode-normalization")]
fn prepare(text: &str, normalize: bool) -> String {
    use unicode_normalization::UnicodeNormalization;
    if normalize {
        text.nfc().collect()
    } else {
        text.to_string()
    }
}

#[cfg(not(feature = "unicode-normalization"))]
fn prepare(text: &str, normalize: bool) -> String {
    if normalize {
        log::warn!("--normalize ignored: built without unicode-normalization");
    }
    text.to_string()
}
