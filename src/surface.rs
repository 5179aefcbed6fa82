//! Render-free drawing context.
//!
//! `HeadlessSurface` implements [`DrawingContext`] on top of an
//! [`AddressMapper`] without painting anything. It tracks what a real surface
//! would show (painted intervals, hover markers, labels, cursor) and records
//! every effective operation, which makes it the natural context for tests and
//! for replaying gesture scripts.

use crate::config::BoardConfig;
use crate::context::{CursorKind, Describer, DrawingContext};
use crate::error::SpanResult;
use crate::input::coords::{AddressMapper, RowSpan};
use crate::model::{Element, Element1D, Interval, Point};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    Draw(Element),
    Clear(Element),
    AddText(Element, String),
    ClearText(Element),
    Cursor(CursorKind),
}

impl fmt::Display for SurfaceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw(element) => write!(f, "draw {element}"),
            Self::Clear(element) => write!(f, "clear {element}"),
            Self::AddText(element, text) => write!(f, "text {element} {text:?}"),
            Self::ClearText(element) => write!(f, "clear-text {element}"),
            Self::Cursor(cursor) => write!(f, "cursor {cursor:?}"),
        }
    }
}

/// Labels every interval with its length; points get no label.
pub fn length_labels() -> Describer {
    Box::new(|element| element.as_interval().map(|interval| interval.length().to_string()))
}

pub struct HeadlessSurface {
    mapper: AddressMapper,
    describer: Option<Describer>,
    painted: BTreeSet<Interval>,
    markers: BTreeSet<Point>,
    labels: BTreeMap<Element, String>,
    cursor: CursorKind,
    ops: Vec<SurfaceOp>,
}

impl HeadlessSurface {
    /// Surface laid out by `config`; fails if the layout does not validate.
    pub fn new(config: BoardConfig) -> SpanResult<Self> {
        Ok(Self {
            mapper: config.mapper()?,
            describer: None,
            painted: BTreeSet::new(),
            markers: BTreeSet::new(),
            labels: BTreeMap::new(),
            cursor: CursorKind::Default,
            ops: Vec::new(),
        })
    }

    /// Install the label function. Without one no labels are shown.
    pub fn with_describer(mut self, describer: Describer) -> Self {
        self.describer = Some(describer);
        self
    }

    pub fn set_describer(&mut self, describer: Option<Describer>) {
        self.describer = describer;
    }

    pub fn mapper(&self) -> &AddressMapper {
        &self.mapper
    }

    /// Intervals currently painted, ascending.
    pub fn painted(&self) -> impl Iterator<Item = &Interval> {
        self.painted.iter()
    }

    /// Hover markers currently shown.
    pub fn markers(&self) -> impl Iterator<Item = &Point> {
        self.markers.iter()
    }

    pub fn labels(&self) -> &BTreeMap<Element, String> {
        &self.labels
    }

    pub fn label_for(&self, element: impl Into<Element>) -> Option<&str> {
        self.labels.get(&element.into()).map(String::as_str)
    }

    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the operation log.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Row rectangles a renderer would fill for the painted intervals.
    pub fn painted_spans(&self) -> Vec<RowSpan> {
        self.painted
            .iter()
            .flat_map(|interval| self.mapper.row_spans(interval.start(), interval.end()))
            .collect()
    }
}

impl DrawingContext for HeadlessSurface {
    fn draw(&mut self, element: Element) {
        self.ops.push(SurfaceOp::Draw(element));
        match element {
            Element::Point(point) => {
                self.markers.insert(point);
            }
            Element::Interval(interval) => {
                self.painted.insert(interval);
                self.add_text(element);
            }
        }
    }

    fn clear(&mut self, element: Element) {
        self.ops.push(SurfaceOp::Clear(element));
        match element {
            Element::Point(point) => {
                self.markers.remove(&point);
            }
            Element::Interval(interval) => {
                self.painted.remove(&interval);
                self.clear_text(element);
            }
        }
    }

    fn add_text(&mut self, element: Element) {
        let Some(describer) = self.describer.as_ref() else {
            return;
        };
        if let Some(text) = describer(&element) {
            self.ops.push(SurfaceOp::AddText(element, text.clone()));
            self.labels.insert(element, text);
        }
    }

    fn clear_text(&mut self, element: Element) {
        if self.labels.remove(&element).is_some() {
            self.ops.push(SurfaceOp::ClearText(element));
        }
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.ops.push(SurfaceOp::Cursor(cursor));
        }
    }

    fn pointer_to_address(&self, x: i32, y: i32, clamp: bool) -> Option<Point> {
        self.mapper.device_to_address(x, y, clamp)
    }

    fn line_start(&self) -> Point {
        self.mapper.line_start()
    }

    fn line_end(&self) -> Point {
        self.mapper.line_end()
    }
}

impl fmt::Debug for HeadlessSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessSurface")
            .field("mapper", &self.mapper)
            .field("painted", &self.painted)
            .field("markers", &self.markers)
            .field("labels", &self.labels)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
