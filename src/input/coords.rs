//! Coordinate conversion between the address line and the drawing surface.
//!
//! The address line is wrapped into rows ("sections") of `section_width`
//! units. This module centralizes every formula that maps between:
//!
//! - absolute line coordinates and `(section, offset)` pairs
//! - device pixels and absolute line coordinates (hit testing)
//! - boundaries and the device pixels a renderer paints them at
//!
//! All arithmetic is integer. A coordinate sitting exactly on a section edge
//! is two visual positions at once (the end of one row and the start of the
//! next), so every boundary query takes a `prefer_start` / `stick_to_start`
//! flag to pick one.

use crate::config::BoardConfig;
use crate::error::SpanResult;
use crate::model::Point;

/// A position expressed as row index plus offset within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPos {
    pub section: i32,
    pub offset: i32,
}

/// Device rectangle an interval covers within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub section: i32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Converts between address-line, section and device coordinates.
#[derive(Debug, Clone, Copy)]
pub struct AddressMapper {
    config: BoardConfig,
    section_count: i32,
}

impl AddressMapper {
    /// Mapper for `config`, which is validated first.
    pub fn new(config: BoardConfig) -> SpanResult<Self> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    /// Skips validation. Section width and pitch must be positive.
    pub(crate) fn unchecked(config: BoardConfig) -> Self {
        let mut mapper = Self {
            config,
            section_count: 0,
        };
        mapper.section_count = mapper.section_count_for(config.height);
        mapper
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of rows on the surface.
    #[inline]
    pub fn section_count(&self) -> i32 {
        self.section_count
    }

    #[inline]
    pub fn line_start(&self) -> Point {
        Point::new(0)
    }

    /// One past the last addressable unit of the last row.
    #[inline]
    pub fn line_end(&self) -> Point {
        Point::new(self.config.section_width * self.section_count)
    }

    /// `(section, offset)` to an absolute line coordinate.
    #[inline]
    pub fn to_absolute(&self, section: i32, offset: i32) -> Point {
        Point::new(section * self.config.section_width + offset)
    }

    /// Absolute line coordinate to `(section, offset)`.
    ///
    /// With `stick_to_start`, a multiple of the section width lands at offset 0
    /// of the following section; without it, at offset `section_width` of the
    /// preceding one. Zero is always `(0, 0)`.
    pub fn from_absolute(&self, point: Point, stick_to_start: bool) -> SectionPos {
        let x = point.x();
        let width = self.config.section_width;
        if x == 0 {
            SectionPos { section: 0, offset: 0 }
        } else if stick_to_start {
            SectionPos {
                section: x.div_euclid(width),
                offset: x.rem_euclid(width),
            }
        } else {
            SectionPos {
                section: (x - 1).div_euclid(width),
                offset: (x - 1).rem_euclid(width) + 1,
            }
        }
    }

    /// Rows that fit within `height` pixels.
    ///
    /// A row counts once the height reaches its last pixel.
    pub fn section_count_for(&self, height: i32) -> i32 {
        let c = &self.config;
        if height <= c.offset_y {
            return 0;
        }
        let used = height - c.offset_y;
        let pitch = c.pitch();
        if (used - 1) % pitch >= c.section_height - 1 {
            ceil_div(used, pitch)
        } else {
            used / pitch
        }
    }

    /// Device pixel to address-line point.
    ///
    /// Without `clamp`, pixels outside every row rectangle (including the gaps
    /// between rows) resolve to `None`. With `clamp`, the nearest row and the
    /// nearest offset within it are used, so the result is always `Some` on a
    /// surface with at least one row.
    pub fn device_to_address(&self, dx: i32, dy: i32, clamp: bool) -> Option<Point> {
        let c = &self.config;
        let pitch = c.pitch();

        if clamp {
            if self.section_count == 0 {
                return None;
            }
            let offset = (dx - c.section_start).clamp(0, c.section_width);
            let rel = dy - c.offset_y - 1;
            let row = if rel < 0 {
                0
            } else {
                let row = rel / pitch;
                let within = rel % pitch;
                if within >= c.section_height {
                    // inside the gap below `row`: snap to whichever row is closer
                    let into_gap = within - c.section_height;
                    if c.section_gap - into_gap < into_gap + 1 { row + 1 } else { row }
                } else {
                    row
                }
            };
            let row = row.min(self.section_count - 1);
            return Some(self.to_absolute(row, offset));
        }

        let inside_x = dx >= c.section_start && dx <= c.section_start + c.section_width;
        let inside_y = dy > c.offset_y
            && dy < c.height
            && (dy - c.offset_y - 1) % pitch <= c.section_height - 1;
        if !(inside_x && inside_y) {
            return None;
        }
        let row = ceil_div(dy - c.offset_y, pitch) - 1;
        if row >= self.section_count {
            return None;
        }
        Some(self.to_absolute(row, dx - c.section_start))
    }

    /// Device pixel where a boundary is painted.
    ///
    /// The line end has no following row, so it always resolves to the end of
    /// the last row regardless of `prefer_start`.
    pub fn canvas_position(&self, point: Point, prefer_start: bool) -> (i32, i32) {
        let c = &self.config;
        let stick = prefer_start && point != self.line_end();
        let pos = self.from_absolute(point, stick);
        (c.section_start + pos.offset, c.offset_y + pos.section * c.pitch())
    }

    /// Per-row rectangles covered by the span `[start, end]`.
    pub fn row_spans(&self, start: Point, end: Point) -> Vec<RowSpan> {
        let c = &self.config;
        let first = self.from_absolute(start, start != self.line_end());
        let last = self.from_absolute(end, false);

        (first.section..=last.section)
            .map(|section| {
                let x = if section == first.section {
                    c.section_start + first.offset
                } else {
                    c.section_start
                };
                let right = if section == last.section {
                    c.section_start + last.offset
                } else {
                    c.section_start + c.section_width
                };
                RowSpan {
                    section,
                    x,
                    y: c.offset_y + section * c.pitch(),
                    width: right - x,
                    height: c.section_height,
                }
            })
            .collect()
    }
}

#[inline]
fn ceil_div(x: i32, n: i32) -> i32 {
    x / n + i32::from(x % n != 0)
}
