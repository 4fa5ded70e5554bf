/// Strips the replication prefix from an ecCodes BUFR key name.
///
/// Keys inside replicated sequences carry a `#N#` marker, for example
/// `#4#blockNumber`; the bare name is the third `#`-separated segment.
/// Input without that shape is returned unchanged.
pub fn strip_replication(key: &str) -> &str {
    let segments: Vec<&str> = key.split('#').collect();
    if segments.len() < 3 { key } else { segments[2] }
}

/// Keys marking the start of a new subset in uncompressed messages.
///
/// WIGOS BUFRs carry no `subsetNumber` key at all; the identifier
/// series opens each subset there instead.
pub fn is_subset_boundary(key: &str) -> bool {
    matches!(key, "subsetNumber" | "wigosIdentifierSeries")
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_strip_replication {
        ($(($name:ident, $input:expr, $expected:expr),)*) => ($(
            #[test]
            fn $name() {
                assert_eq!(strip_replication($input), $expected);
            }
        )*);
    }

    test_strip_replication! {
        (replicated_key_yields_bare_name, "#4#blockNumber", "blockNumber"),
        (first_replication_yields_bare_name, "#1#airTemperature", "airTemperature"),
        (plain_key_is_unchanged, "blockNumber", "blockNumber"),
        (single_separator_is_unchanged, "#4blockNumber", "#4blockNumber"),
        (empty_input_is_unchanged, "", ""),
        (extra_separators_yield_third_segment, "#4#stationNumber#code", "stationNumber"),
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_replication("#12#stationNumber");
        assert_eq!(strip_replication(once), once);
    }

    #[test]
    fn boundary_markers() {
        assert!(is_subset_boundary("subsetNumber"));
        assert!(is_subset_boundary("wigosIdentifierSeries"));
        assert!(!is_subset_boundary("blockNumber"));
        assert!(!is_subset_boundary("#1#subsetNumber"));
    }
}
