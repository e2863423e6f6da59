#[cfg(test)]
mod tests {
    use autopark::sensing::{
        Channel, Depth, Direction, DistanceReading, DistanceSelector, RawScan, MAX_RANGE,
    };
    use rstest::rstest;

    fn reading_with(values: &[(Channel, f64)]) -> DistanceReading {
        let mut scan = RawScan::empty();
        for (channel, value) in values {
            scan.set(*channel, *value);
        }
        DistanceReading::from_raw(&scan)
    }

    // A missing sample must resolve to "far", never to a false near-reading,
    // for every direction and both sensor rings.
    #[rstest]
    #[case(Depth::Upper)]
    #[case(Depth::Lower)]
    fn no_detection_reads_as_max_range(#[case] depth: Depth) {
        let reading = DistanceReading::from_raw(&RawScan::empty());
        for direction in Direction::ALL {
            assert_eq!(reading.at(Channel { direction, depth }), MAX_RANGE);
        }
    }

    // Infinite and NaN raw samples are sensor-timeout representations and
    // degrade to MAX_RANGE as well.
    #[rstest]
    #[case(f64::INFINITY)]
    #[case(f64::NAN)]
    fn invalid_samples_read_as_max_range(#[case] raw: f64) {
        let channel = Channel::upper(Direction::NorthWest);
        let reading = reading_with(&[(channel, raw)]);
        assert_eq!(reading.at(channel), MAX_RANGE);
    }

    // Normalization is the identity inside [0, MAX_RANGE] and clamps outside.
    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.37, 1.37)]
    #[case(MAX_RANGE, MAX_RANGE)]
    #[case(MAX_RANGE + 2.5, MAX_RANGE)]
    #[case(-0.4, 0.0)]
    fn normalization_clamps(#[case] raw: f64, #[case] expected: f64) {
        let channel = Channel::lower(Direction::SouthEast);
        let reading = reading_with(&[(channel, raw)]);
        assert_eq!(reading.at(channel), expected);
    }

    // Direct value construction clamps too, so the invariant holds no
    // matter which constructor built the reading.
    #[test]
    fn from_values_clamps() {
        let mut values = [[3.0; 2]; 8];
        values[0][0] = 9.0;
        values[1][1] = -1.0;
        let reading = DistanceReading::from_values(values);
        assert_eq!(reading.upper(Direction::NorthEast), MAX_RANGE);
        assert_eq!(reading.lower(Direction::NorthWest), 0.0);
        assert_eq!(reading.upper(Direction::EastNorth), 3.0);
    }

    #[test]
    fn min_selector_picks_closest_obstacle() {
        let ne = Channel::upper(Direction::NorthEast);
        let nw = Channel::upper(Direction::NorthWest);
        let wn = Channel::upper(Direction::WestNorth);
        let reading = reading_with(&[(ne, 2.5), (nw, 1.2), (wn, 4.0)]);
        let selector = DistanceSelector::MinOf(vec![ne, nw, wn]);
        assert_eq!(selector.select(&reading), 1.2);
    }

    #[test]
    fn max_selector_picks_widest_opening() {
        let wn = Channel::upper(Direction::WestNorth);
        let en = Channel::upper(Direction::EastNorth);
        let reading = reading_with(&[(wn, 1.0), (en, 3.5)]);
        let selector = DistanceSelector::MaxOf(vec![wn, en]);
        assert_eq!(selector.select(&reading), 3.5);
    }

    // Both inverting selectors map a close echo to a wide gap; they differ
    // only on no-detection, which plain inversion collapses to 0.
    #[rstest]
    #[case(1.5, MAX_RANGE - 1.5)]
    #[case(0.0, MAX_RANGE)]
    fn inverted_selector(#[case] raw: f64, #[case] expected: f64) {
        let channel = Channel::lower(Direction::SouthEast);
        let reading = reading_with(&[(channel, raw)]);
        assert_eq!(DistanceSelector::Inverted(channel).select(&reading), expected);
        assert_eq!(DistanceSelector::Opening(channel).select(&reading), expected);
    }

    #[test]
    fn inverted_selector_on_no_detection_collapses_to_zero() {
        let channel = Channel::upper(Direction::NorthEast);
        let reading = DistanceReading::from_raw(&RawScan::empty());
        let selector = DistanceSelector::Inverted(channel);
        assert_eq!(selector.select(&reading), 0.0);
    }

    // An empty stretch beside the platform is an open space, not a wall:
    // the opening selector keeps a no-detection reading at MAX_RANGE.
    #[test]
    fn opening_selector_on_no_detection_stays_far() {
        let channel = Channel::lower(Direction::SouthEast);
        let reading = DistanceReading::from_raw(&RawScan::empty());
        let selector = DistanceSelector::Opening(channel);
        assert_eq!(selector.select(&reading), MAX_RANGE);
    }

    #[test]
    fn difference_selector_is_symmetric() {
        let wn = Channel::upper(Direction::WestNorth);
        let en = Channel::upper(Direction::EastNorth);
        let reading = reading_with(&[(wn, 1.0), (en, 3.5)]);
        let ab = DistanceSelector::Difference(wn, en);
        let ba = DistanceSelector::Difference(en, wn);
        assert_eq!(ab.select(&reading), 2.5);
        assert_eq!(ab.select(&reading), ba.select(&reading));
    }

    // Every selector result stays inside the sensing range.
    #[test]
    fn selector_results_stay_bounded() {
        let reading = DistanceReading::from_raw(&RawScan::empty());
        let channel = Channel::upper(Direction::SouthWest);
        let selectors = [
            DistanceSelector::Component(channel),
            DistanceSelector::MinOf(vec![channel]),
            DistanceSelector::MaxOf(vec![channel]),
            DistanceSelector::Inverted(channel),
            DistanceSelector::Opening(channel),
            DistanceSelector::Difference(channel, Channel::upper(Direction::NorthEast)),
        ];
        for selector in selectors {
            let value = selector.select(&reading);
            assert!((0.0..=MAX_RANGE).contains(&value), "{:?} -> {}", selector, value);
        }
    }
}
