//! Section layout configuration.
//!
//! A `BoardConfig` describes how the address line is wrapped onto the drawing
//! surface: how wide and tall each row is, where the first row begins and how
//! much space separates consecutive rows. It can be assembled with the builder
//! or loaded from a JSON file; both paths run the same validation.

use crate::constants::{DEFAULT_OFFSET_Y, DEFAULT_SECTION_GAP, DEFAULT_SECTION_START};
use crate::error::{SpanError, SpanResult};
use crate::input::coords::AddressMapper;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry of the sectioned drawing surface, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Total surface width
    pub width: i32,
    /// Total surface height
    pub height: i32,
    /// Width of one row; one pixel equals one address unit
    pub section_width: i32,
    /// Height of one row
    pub section_height: i32,
    /// Horizontal offset of every row
    #[serde(default = "default_section_start")]
    pub section_start: i32,
    /// Header height above the first row
    #[serde(default = "default_offset_y")]
    pub offset_y: i32,
    /// Vertical space between two rows
    #[serde(default = "default_section_gap")]
    pub section_gap: i32,
}

fn default_section_start() -> i32 {
    DEFAULT_SECTION_START
}

fn default_offset_y() -> i32 {
    DEFAULT_OFFSET_Y
}

fn default_section_gap() -> i32 {
    DEFAULT_SECTION_GAP
}

impl BoardConfig {
    /// Starts a builder for a `width` x `height` surface. Rows span the whole
    /// surface until narrowed with the builder methods.
    pub fn builder(width: i32, height: i32) -> BoardConfigBuilder {
        BoardConfigBuilder {
            config: Self {
                width,
                height,
                section_width: width,
                section_height: height,
                section_start: DEFAULT_SECTION_START,
                offset_y: DEFAULT_OFFSET_Y,
                section_gap: DEFAULT_SECTION_GAP,
            },
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> SpanResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> SpanResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        let sections = config.mapper()?.section_count();
        tracing::debug!(path = %path.display(), sections, "Loaded board config");
        Ok(config)
    }

    /// Row pitch: one row plus the gap below it.
    #[inline]
    pub fn pitch(&self) -> i32 {
        self.section_height + self.section_gap
    }

    /// Mapper for this layout; fails if the layout does not validate.
    pub fn mapper(&self) -> SpanResult<AddressMapper> {
        AddressMapper::new(*self)
    }

    /// Reject layouts the mapper cannot work with.
    pub fn validate(&self) -> SpanResult<()> {
        if self.section_width <= 0 {
            return Err(SpanError::InvalidConfig(format!(
                "section width must be positive, got {}",
                self.section_width
            )));
        }
        if self.section_height <= 0 {
            return Err(SpanError::InvalidConfig(format!(
                "section height must be positive, got {}",
                self.section_height
            )));
        }
        if self.section_start < 0 || self.offset_y < 0 || self.section_gap < 0 {
            return Err(SpanError::InvalidConfig(
                "section start, header offset and gap must not be negative".to_string(),
            ));
        }
        if self.section_height.checked_add(self.section_gap).is_none() {
            return Err(SpanError::InvalidConfig(format!(
                "section height {} plus gap {} overflows",
                self.section_height, self.section_gap
            )));
        }
        let sections = AddressMapper::unchecked(*self).section_count();
        if sections == 0 {
            return Err(SpanError::InvalidConfig(format!(
                "height {} leaves no room for a section of height {} below offset {}",
                self.height, self.section_height, self.offset_y
            )));
        }
        if self.section_width.checked_mul(sections).is_none() {
            return Err(SpanError::InvalidConfig(format!(
                "{sections} sections of width {} overflow the address line",
                self.section_width
            )));
        }
        Ok(())
    }
}

/// Builder for [`BoardConfig`].
#[derive(Debug, Clone)]
pub struct BoardConfigBuilder {
    config: BoardConfig,
}

impl BoardConfigBuilder {
    pub fn section_width(mut self, section_width: i32) -> Self {
        self.config.section_width = section_width;
        self
    }

    pub fn section_height(mut self, section_height: i32) -> Self {
        self.config.section_height = section_height;
        self
    }

    pub fn section_start(mut self, section_start: i32) -> Self {
        self.config.section_start = section_start;
        self
    }

    pub fn offset_y(mut self, offset_y: i32) -> Self {
        self.config.offset_y = offset_y;
        self
    }

    pub fn section_gap(mut self, section_gap: i32) -> Self {
        self.config.section_gap = section_gap;
        self
    }

    pub fn build(self) -> SpanResult<BoardConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
