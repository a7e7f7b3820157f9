use crate::domain::{EarthquakeRecord, MagnitudeFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing was fetched at all.
    NoData,
    /// Records were fetched, but none pass the active filter.
    NoMatches,
}

/// Keeps the records with `magnitude >= threshold`, in their original order.
/// A threshold of zero (or below) returns the input unchanged.
pub fn apply_magnitude_filter(records: &[EarthquakeRecord], threshold: f64) -> Vec<EarthquakeRecord> {
    if threshold <= 0.0 {
        return records.to_vec();
    }

    records.iter().filter(|record| record.magnitude >= threshold).cloned().collect()
}

pub fn filtered(records: &[EarthquakeRecord], filter: &MagnitudeFilter) -> Vec<EarthquakeRecord> {
    apply_magnitude_filter(records, filter.threshold())
}

/// Classifies why the displayed list is empty, `None` when it is not.
pub fn empty_state(records: &[EarthquakeRecord], displayed: &[EarthquakeRecord]) -> Option<EmptyState> {
    match (records.is_empty(), displayed.is_empty()) {
        (true, _) => Some(EmptyState::NoData),
        (false, true) => Some(EmptyState::NoMatches),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn records() -> Vec<EarthquakeRecord> {
        vec![record("A", 2.1), record("B", 4.5), record("C", 3.0), record("D", 5.0), record("E", 4.0)]
    }

    fn ids(records: &[EarthquakeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn zero_threshold_returns_the_input_unchanged() {
        assert_eq!(apply_magnitude_filter(&records(), 0.0), records());
    }

    #[rstest]
    #[case(2.0, vec!["A", "B", "C", "D", "E"])]
    #[case(3.0, vec!["B", "C", "D", "E"])]
    #[case(4.0, vec!["B", "D", "E"])]
    #[case(4.6, vec!["D"])]
    #[case(7.0, vec![])]
    fn threshold_keeps_records_in_order(#[case] threshold: f64, #[case] expected: Vec<&str>) {
        let result = apply_magnitude_filter(&records(), threshold);

        assert!(result.iter().all(|r| r.magnitude >= threshold));
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = apply_magnitude_filter(&records(), 4.0);
        let twice = apply_magnitude_filter(&once, 4.0);

        assert_eq!(once, twice);
    }

    #[test]
    fn filtered_uses_the_filter_threshold() {
        assert_eq!(ids(&filtered(&records(), &MagnitudeFilter::at_least(4.5))), vec!["B", "D"]);
        assert_eq!(filtered(&records(), &MagnitudeFilter::none()).len(), 5);
    }

    #[test]
    fn empty_state_distinguishes_no_data_from_no_matches() {
        let all = records();
        let none = apply_magnitude_filter(&all, 6.0);

        assert_eq!(empty_state(&[], &[]), Some(EmptyState::NoData));
        assert_eq!(empty_state(&all, &none), Some(EmptyState::NoMatches));
        assert_eq!(empty_state(&all, &all), None);
    }
}
