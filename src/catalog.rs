//! Static FRED series catalog and unit labels.

/// One tracked indicator: output key plus the FRED series it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesEntry {
    pub key: &'static str,
    pub series_id: &'static str,
}

pub const SERIES: [SeriesEntry; 6] = [
    SeriesEntry { key: "GDP", series_id: "GDP" },
    SeriesEntry { key: "CPI", series_id: "CPIAUCSL" },
    SeriesEntry { key: "UNEMPLOYMENT", series_id: "UNRATE" },
    SeriesEntry { key: "FED_FUNDS", series_id: "FEDFUNDS" },
    SeriesEntry { key: "TREASURY_10Y", series_id: "DGS10" },
    SeriesEntry { key: "M2", series_id: "M2SL" },
];

const UNITS: [(&str, &str); 6] = [
    ("GDP", "Billions of Dollars"),
    ("CPIAUCSL", "Index 1982-1984=100"),
    ("UNRATE", "Percent"),
    ("FEDFUNDS", "Percent"),
    ("DGS10", "Percent"),
    ("M2SL", "Billions of Dollars"),
];

/// Unit label for a FRED series id, or `""` if the id is not in the catalog.
pub fn unit_for(series_id: &str) -> &'static str {
    UNITS
        .iter()
        .find(|(id, _)| *id == series_id)
        .map(|(_, unit)| *unit)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_labels_for_known_series() {
        assert_eq!(unit_for("GDP"), "Billions of Dollars");
        assert_eq!(unit_for("CPIAUCSL"), "Index 1982-1984=100");
        assert_eq!(unit_for("UNRATE"), "Percent");
        assert_eq!(unit_for("FEDFUNDS"), "Percent");
        assert_eq!(unit_for("DGS10"), "Percent");
        assert_eq!(unit_for("M2SL"), "Billions of Dollars");
    }

    #[test]
    fn unit_label_empty_for_unknown_series() {
        assert_eq!(unit_for("NOT_A_SERIES"), "");
        assert_eq!(unit_for(""), "");
    }

    #[test]
    fn every_catalog_entry_has_a_unit_and_unique_key() {
        for entry in SERIES {
            assert!(!unit_for(entry.series_id).is_empty(), "{} has no unit", entry.series_id);
        }
        let mut keys: Vec<_> = SERIES.iter().map(|e| e.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SERIES.len());
    }
}
