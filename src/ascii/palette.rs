//! Palette (gradient string) definitions for ASCII rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::SampleError;

/// Classic 7-level gradient. This is the default palette.
pub const CLASSIC_PALETTE: &str = " .-=+#@";

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_PALETTE: &str = " .:-=+*#%@";

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_PALETTE: &str = " ░▒▓█";

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_PALETTE: &str = " .:#";

/// An ordered, non-empty sequence of characters, darkest first.
///
/// Each character stands for one luminance bucket. A palette can never be
/// empty; [`Palette::new`] rejects the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from a gradient string, one bucket per Unicode scalar value.
    pub fn new(gradient: &str) -> Result<Self, SampleError> {
        let chars: Vec<char> = gradient.chars().collect();
        if chars.is_empty() {
            return Err(SampleError::InvalidPalette);
        }
        Ok(Self { chars })
    }

    /// Number of buckets. Always at least 1.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            chars: CLASSIC_PALETTE.chars().collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::new(s)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Named palette presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Classic 7-level gradient
    #[default]
    Classic,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
}

impl CharSet {
    /// All presets, in listing order.
    pub const ALL: [CharSet; 4] = [
        CharSet::Classic,
        CharSet::Standard,
        CharSet::Blocks,
        CharSet::Minimal,
    ];

    /// Get the gradient string for this preset.
    pub fn gradient(&self) -> &'static str {
        match self {
            CharSet::Classic => CLASSIC_PALETTE,
            CharSet::Standard => STANDARD_PALETTE,
            CharSet::Blocks => BLOCKS_PALETTE,
            CharSet::Minimal => MINIMAL_PALETTE,
        }
    }

    /// Build the palette for this preset.
    pub fn palette(&self) -> Palette {
        Palette {
            chars: self.gradient().chars().collect(),
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Classic => "classic",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}
