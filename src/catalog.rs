//! Static descriptor catalog for land SYNOP parameters.
//!
//! Maps native ecCodes key names to WMO descriptor codes and display
//! labels. The table is configuration data, built once and shared
//! read-only for the whole process.

use std::collections::HashMap;
use std::sync::LazyLock;

/// One supported SYNOP parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// 6-digit WMO descriptor code, e.g. `012101`.
    pub code: &'static str,
    /// Short output label, e.g. `TA`.
    pub mnemonic: &'static str,
    /// Long display label, unit-annotated.
    pub description: &'static str,
}

macro_rules! synop_table {
    ($(($key:expr, $code:expr, $mnemonic:expr, $description:expr),)*) => {
        &[$(($key, Descriptor { code: $code, mnemonic: $mnemonic, description: $description }),)*]
    };
}

/// Land SYNOP parameters in native-key order.
///
/// The list is ordered and may name the same native key more than once;
/// the last entry wins when the lookup map is built. Several native
/// keys alias one mnemonic on purpose, since the WMO tables carry more
/// than one descriptor for the same quantity (e.g. air temperature at
/// 2 m versus at sensor height, both shown as `TA`).
pub const SYNOP_LAND: &[(&str, Descriptor)] = synop_table! {
    ("blockNumber", "001001", "wmo_block", "WMO BLOCK NUMBER [NUMERIC]"),
    ("stationNumber", "001002", "wmo_station", "WMO STATION NUMBER [NUMERIC]"),
    ("stationOrSiteName", "001015", "station_name", "STATION OR SITE NAME [CCITTIA5]"),
    ("shipOrMobileLandStationIdentifier", "001011", "mobile_station_name", "SHIP OR MOBILE STATION OR SITE NAME [CCITTIA5]"),
    ("longStationName", "001019", "station_name", "STATION OR SITE NAME [CCITTIA5]"),
    ("stationType", "002001", "type_of_station", "TYPE OF STATION [CODE TABLE]"),
    ("year", "004001", "obsyear", "YEAR [A]"),
    ("month", "004002", "obsmonth", "MONTH [MON]"),
    ("day", "004003", "obsday", "DAY [D]"),
    ("hour", "004004", "obshour", "HOUR [H]"),
    ("minute", "004005", "obsminute", "MINUTE [MIN]"),
    ("latitude", "005001", "latitude", "LATITUDE (HIGH ACCURACY) [DEG]"),
    ("longitude", "006001", "longitude", "LONGITUDE (HIGH ACCURACY) [DEG]"),
    ("heightOfStation", "007001", "height_of_station", "HEIGHT OF STATION [M]"),
    ("heightOfStationGroundAboveMeanSeaLevel", "007030", "height_of_station", "HEIGHT OF STATION GROUND ABOVE MEAN SEA LEVEL [M]"),
    ("nonCoordinatePressure", "010004", "P0", "PRESSURE [PA]"),
    ("nonCoordinateGeopotentialHeight", "010009", "GPH", "GEOPOTENTIAL HEIGHT [GPM]"),
    ("pressureReducedToMeanSeaLevel", "010051", "PSEA", "PRESSURE REDUCED TO MEAN SEA LEVEL [PA]"),
    ("3HourPressureChange", "010061", "PPP", "3-HOUR PRESSURE CHANGE [PA]"),
    ("characteristicOfPressureTendency", "010063", "Pa", "CHARACTERISTIC OF PRESSURE TENDENCY [CODE TABLE]"),
    ("windDirection", "011001", "WD", "WIND DIRECTION [DEGREETRUE]"),
    ("windSpeed", "011002", "WS", "WIND SPEED [M/S]"),
    ("windDirectionAt10M", "011011", "WD", "WIND DIRECTION AT 10 M [DEG]"),
    ("windSpeedAt10M", "011012", "WS", "WIND SPEED AT 10 M [M/S]"),
    ("airTemperature", "012001", "TA", "DRY BULB TEMPERATURE [K]"),
    ("dewpointTemperature", "012003", "TD", "DEW POINT TEMPERATURE [K]"),
    ("airTemperatureAt2M", "012004", "TA", "DRY BULB TEMPERATURE AT 2M [K]"),
    ("dewpointTemperatureAt2M", "012006", "TD", "DEW POINT TEMPERATURE AT 2M [K]"),
    ("airTemperature", "012101", "TA", "TEMPERATURE/AIR TEMPERATURE [K]"),
    ("dewpointTemperature", "012103", "TD", "DEWPOINT TEMPERATURE [K]"),
    ("relativeHumidity", "013003", "RH", "RELATIVE HUMIDITY [%]"),
    ("horizontalVisibility", "020001", "VV", "HORIZONTAL VISIBILITY [M]"),
    ("verticalVisibility", "020002", "VEV", "VERTICAL VISIBILITY [M]"),
    ("presentWeather", "020003", "WW", "PRESENT WEATHER [CODE TABLE]"),
    ("pastWeather1", "020004", "W1", "PAST WEATHER (1) [CODE TABLE]"),
    ("pastWeather2", "020005", "W2", "PAST WEATHER (2) [CODE TABLE]"),
    ("cloudCoverTotal", "020010", "NH", "CLOUD COVER (TOTAL) [%]"),
    ("verticalSignificanceSurfaceObservations", "008002", "vertical_significance", "VERTICAL SIGNIFICANCE (SURFACE OBSERVATIONS) [CODE TABLE]"),
    ("cloudAmount", "020011", "CN", "CLOUD AMOUNT [CODE TABLE]"),
    ("heightOfBaseOfCloud", "020013", "CH", "HEIGHT OF BASE OF CLOUD [M]"),
    ("cloudType", "020012", "CT", "CLOUD TYPE [CODE TABLE]"),
    ("totalPrecipitationOrTotalWaterEquivalent", "013011", "PR", "TOTAL PRECIPITATION/TOTAL WATER EQUIVALENT [KGM-2]"),
    ("totalPrecipitationPast1Hour", "013019", "PR_1H", "TOTAL PRECIPITATION PAST 1 HOUR [KGM-2]"),
    ("totalPrecipitationPast3Hours", "013020", "PR_3H", "TOTAL PRECIPITATION PAST 3 HOURS [KGM-2]"),
    ("totalPrecipitationPast6Hours", "013021", "PR_6H", "TOTAL PRECIPITATION PAST 6 HOURS [KGM-2]"),
    ("totalPrecipitationPast12Hours", "013022", "PR_12H", "TOTAL PRECIPITATION PAST 12 HOURS [KGM-2]"),
    ("totalPrecipitationPast24Hours", "013023", "PR_24H", "TOTAL PRECIPITATION PAST 24 HOURS [KGM-2]"),
    ("totalSnowDepth", "013013", "SD", "TOTAL SNOW DEPTH [M]"),
    ("groundMinimumTemperaturePast12Hours", "012013", "TGINST", "GROUND MINIMUM TEMPERATURE, PAST 12 HOURS [K]"),
    ("groundMinimumTemperaturePast12Hours", "012113", "TG", "GROUND MINIMUM TEMPERATURE, PAST 12 HOURS [K]"),
    ("maximumTemperatureAtHeightAndOverPeriodSpecified", "012011", "TAMAX", "MAXIMUM TEMPERATURE AT 2M [K]"),
    ("minimumTemperatureAtHeightAndOverPeriodSpecified", "012012", "TAMIN", "MINIMUM TEMPERATURE AT 2M [K]"),
    ("maximumTemperatureAtHeightAndOverPeriodSpecified", "012111", "TAMAX", "MAXIMUM TEMPERATURE, AT HEIGHT AND OVER PERIOD SPECIFIED [K]"),
    ("minimumTemperatureAtHeightAndOverPeriodSpecified", "012112", "TAMIN", "MINIMUM TEMPERATURE, AT HEIGHT AND OVER PERIOD SPECIFIED [K]"),
    ("maximumTemperatureAt2MPast12Hours", "012014", "TAMAX12H", "MAXIMUM TEMPERATURE AT 2M, PAST 12 HOURS [K]"),
    ("minimumTemperatureAt2MPast12Hours", "012015", "TAMIN12H", "MINIMUM TEMPERATURE AT 2M, PAST 12 HOURS [K]"),
    ("maximumTemperatureAt2MPast24Hours", "012016", "TAMAX24H", "MAXIMUM TEMPERATURE AT 2M, PAST 24 HOURS [K]"),
    ("minimumTemperatureAt2MPast24Hours", "012017", "TAMIN24H", "MINIMUM TEMPERATURE AT 2M, PAST 24 HOURS [K]"),
    ("evapotranspiration", "013031", "EVAPOTRANSPIRATION", "EVAPOTRANSPIRATION"),
    ("netRadiationIntegratedOver24Hours", "014015", "NET", "NET RADIATION INTEGRATED OVER 24HOURS"),
    ("totalSunshine", "014031", "SUNDUR", "TOTAL SUNSHINE [MIN]"),
    ("stateOfGround", "020062", "E", "STATE OF THE GROUND (WITH OR WITHOUT SNOW) [CODE TABLE]"),
    ("specialPhenomena", "020063", "SPECHEN", "SPECIAL PHENOMENA"),
    ("maximumWindGustSpeed", "011041", "WG", "MAXIMUM WIND GUST SPEED [M/S]"),
    ("centre", "001031", "???", "IDENTIFICATION OF ORIGINATING/GENERATING CENTRE"),
    ("generatingApplication", "001032", "???", "GENERATING APPLICATION"),
    ("timePeriod", "004025", "timeperiod", "TIME PERIOD OR DISPLACEMENT"),
};

/// Fixed header keys of sections 0-3. These never produce parameter
/// lines; header mode prints them verbatim.
pub const HEADER_KEYS: &[&str] = &[
    "edition",
    "masterTableNumber",
    "updateSequenceNumber",
    "dataCategory",
    "dataSubCategory",
    "internationalDataSubCategory",
    "bufrHeaderCentre",
    "bufrHeaderSubCentre",
    "masterTablesVersionNumber",
    "localTablesVersionNumber",
    "numberOfSubsets",
    "typicalYear",
    "typicalMonth",
    "typicalDay",
    "typicalHour",
    "typicalMinute",
    "typicalSecond",
    "typicalDate",
    "typicalTime",
    "observedData",
    "compressedData",
    "unexpandedDescriptors",
];

static SYNOP_MAP: LazyLock<HashMap<&'static str, &'static Descriptor>> =
    LazyLock::new(|| SYNOP_LAND.iter().map(|(key, entry)| (*key, entry)).collect());

/// Looks up a canonical (prefix-stripped) key name.
pub fn lookup(key: &str) -> Option<&'static Descriptor> {
    SYNOP_MAP.get(key).copied()
}

pub fn is_header_key(key: &str) -> bool {
    HEADER_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        let entry = lookup("blockNumber").unwrap();
        assert_eq!(entry.code, "001001");
        assert_eq!(entry.mnemonic, "wmo_block");
        assert_eq!(entry.description, "WMO BLOCK NUMBER [NUMERIC]");
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert_eq!(lookup("oceanographicSalinity"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn duplicate_native_keys_resolve_to_the_last_entry() {
        let entry = lookup("airTemperature").unwrap();
        assert_eq!(entry.code, "012101");
        assert_eq!(entry.mnemonic, "TA");

        let entry = lookup("groundMinimumTemperaturePast12Hours").unwrap();
        assert_eq!(entry.code, "012113");
        assert_eq!(entry.mnemonic, "TG");
    }

    #[test]
    fn aliased_keys_share_a_mnemonic() {
        let ta = lookup("airTemperature").unwrap();
        let ta2m = lookup("airTemperatureAt2M").unwrap();
        assert_eq!(ta.mnemonic, ta2m.mnemonic);
        assert_ne!(ta.code, ta2m.code);
    }

    #[test]
    fn every_entry_has_a_mnemonic_and_description() {
        for (key, entry) in SYNOP_LAND {
            assert!(!key.is_empty());
            assert_eq!(entry.code.len(), 6, "bad code for {key}");
            assert!(!entry.mnemonic.is_empty(), "empty mnemonic for {key}");
            assert!(!entry.description.is_empty(), "empty description for {key}");
        }
    }

    #[test]
    fn boundary_and_header_keys_stay_out_of_the_catalog() {
        assert_eq!(lookup("subsetNumber"), None);
        assert_eq!(lookup("wigosIdentifierSeries"), None);
        for key in HEADER_KEYS {
            assert_eq!(lookup(key), None, "{key} must not be a parameter");
        }
    }

    #[test]
    fn header_keys_are_recognized() {
        assert!(is_header_key("numberOfSubsets"));
        assert!(is_header_key("compressedData"));
        assert!(!is_header_key("airTemperature"));
    }
}
