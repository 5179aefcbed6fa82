//! Property-based tests for 1D geometry and address mapping.

use proptest::prelude::*;
use spanboard::config::BoardConfig;
use spanboard::input::coords::SectionPos;
use spanboard::{Element1D, Interval, Point};

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (-500i32..500, 1i32..200).prop_map(|(start, len)| Interval::from_coords(start, start + len).unwrap())
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn displacement_is_antisymmetric(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(a.displacement(&b), -b.displacement(&a));
        prop_assert_eq!(a.distance(&b) == 0, a.overlaps(&b));
    }

    #[test]
    fn overlap_matches_shared_coordinates(a in interval_strategy(), b in interval_strategy()) {
        let shared = a.start() <= b.end() && b.start() <= a.end();
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn moved_interval_keeps_length(a in interval_strategy(), n in -1000i32..1000) {
        let moved = a.moved_by(n);
        prop_assert_eq!(moved.length(), a.length());
        prop_assert_eq!(a.start().displacement(&moved.start()), n);
    }

    #[test]
    fn device_round_trip(
        rows in 1i32..6,
        gap in 0i32..8,
        x in 0i32..1000,
    ) {
        let config = BoardConfig::builder(400, 10 + rows * (12 + gap))
            .section_width(200)
            .section_height(12)
            .section_gap(gap)
            .offset_y(10)
            .section_start(30)
            .build()
            .unwrap();
        let mapper = config.mapper().unwrap();
        let point = Point::new(x % (mapper.line_end().x() + 1));

        let (dx, dy) = mapper.canvas_position(point, true);
        prop_assert_eq!(mapper.device_to_address(dx, dy + 1, false), Some(point));
        prop_assert_eq!(mapper.device_to_address(dx, dy + 1, true), Some(point));
    }

    #[test]
    fn section_round_trip(
        width in 1i32..500,
        rows in 1i32..6,
        section in 0i32..100,
        offset in 0i32..1000,
    ) {
        let config = BoardConfig::builder(width, rows * 10).section_height(10).build().unwrap();
        let mapper = config.mapper().unwrap();
        prop_assert_eq!(mapper.section_count(), rows);

        let section = section % rows;
        let offset = offset % width;
        let point = mapper.to_absolute(section, offset);
        prop_assert_eq!(mapper.from_absolute(point, true), SectionPos { section, offset });

        // the end of a row is only recovered when sticking to the end
        let end = mapper.to_absolute(section, offset + 1);
        prop_assert_eq!(mapper.from_absolute(end, false), SectionPos { section, offset: offset + 1 });
    }
}
