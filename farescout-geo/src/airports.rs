use std::collections::HashMap;
use std::sync::OnceLock;

/// A known airport. The table is static and immutable for the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub timezone: &'static str,
}

// Candidate for generation from the openflights CSV if the table grows.
const AIRPORTS: &[Airport] = &[
    // Northeast US
    Airport { code: "JFK", name: "John F. Kennedy International", city: "New York", country: "US", lat: 40.6413, lon: -73.7781, timezone: "America/New_York" },
    Airport { code: "EWR", name: "Newark Liberty International", city: "Newark", country: "US", lat: 40.6895, lon: -74.1745, timezone: "America/New_York" },
    Airport { code: "LGA", name: "LaGuardia", city: "New York", country: "US", lat: 40.7769, lon: -73.8740, timezone: "America/New_York" },
    Airport { code: "BOS", name: "Logan International", city: "Boston", country: "US", lat: 42.3656, lon: -71.0096, timezone: "America/New_York" },
    Airport { code: "PHL", name: "Philadelphia International", city: "Philadelphia", country: "US", lat: 39.8744, lon: -75.2424, timezone: "America/New_York" },
    Airport { code: "DCA", name: "Ronald Reagan Washington National", city: "Washington", country: "US", lat: 38.8521, lon: -77.0377, timezone: "America/New_York" },
    Airport { code: "IAD", name: "Washington Dulles International", city: "Washington", country: "US", lat: 38.9531, lon: -77.4565, timezone: "America/New_York" },
    Airport { code: "BWI", name: "Baltimore/Washington International", city: "Baltimore", country: "US", lat: 39.1754, lon: -76.6684, timezone: "America/New_York" },
    // Midwest US
    Airport { code: "ORD", name: "O'Hare International", city: "Chicago", country: "US", lat: 41.9742, lon: -87.9073, timezone: "America/Chicago" },
    Airport { code: "MDW", name: "Chicago Midway International", city: "Chicago", country: "US", lat: 41.7868, lon: -87.7522, timezone: "America/Chicago" },
    Airport { code: "MSP", name: "Minneapolis-Saint Paul International", city: "Minneapolis", country: "US", lat: 44.8848, lon: -93.2223, timezone: "America/Chicago" },
    Airport { code: "DTW", name: "Detroit Metropolitan Wayne County", city: "Detroit", country: "US", lat: 42.2162, lon: -83.3554, timezone: "America/Detroit" },
    Airport { code: "STL", name: "St. Louis Lambert International", city: "St. Louis", country: "US", lat: 38.7500, lon: -90.3700, timezone: "America/Chicago" },
    // South US
    Airport { code: "ATL", name: "Hartsfield-Jackson Atlanta International", city: "Atlanta", country: "US", lat: 33.6407, lon: -84.4277, timezone: "America/New_York" },
    Airport { code: "CLT", name: "Charlotte Douglas International", city: "Charlotte", country: "US", lat: 35.2144, lon: -80.9473, timezone: "America/New_York" },
    Airport { code: "RDU", name: "Raleigh-Durham International", city: "Raleigh", country: "US", lat: 35.8801, lon: -78.7880, timezone: "America/New_York" },
    Airport { code: "BNA", name: "Nashville International", city: "Nashville", country: "US", lat: 36.1263, lon: -86.6774, timezone: "America/Chicago" },
    Airport { code: "DFW", name: "Dallas/Fort Worth International", city: "Dallas", country: "US", lat: 32.8998, lon: -97.0403, timezone: "America/Chicago" },
    Airport { code: "DAL", name: "Dallas Love Field", city: "Dallas", country: "US", lat: 32.8471, lon: -96.8518, timezone: "America/Chicago" },
    Airport { code: "IAH", name: "George Bush Intercontinental", city: "Houston", country: "US", lat: 29.9902, lon: -95.3368, timezone: "America/Chicago" },
    Airport { code: "HOU", name: "William P. Hobby", city: "Houston", country: "US", lat: 29.6454, lon: -95.2789, timezone: "America/Chicago" },
    Airport { code: "AUS", name: "Austin-Bergstrom International", city: "Austin", country: "US", lat: 30.1975, lon: -97.6664, timezone: "America/Chicago" },
    // Florida
    Airport { code: "MIA", name: "Miami International", city: "Miami", country: "US", lat: 25.7959, lon: -80.2870, timezone: "America/New_York" },
    Airport { code: "FLL", name: "Fort Lauderdale-Hollywood International", city: "Fort Lauderdale", country: "US", lat: 26.0742, lon: -80.1506, timezone: "America/New_York" },
    Airport { code: "PBI", name: "Palm Beach International", city: "West Palm Beach", country: "US", lat: 26.6832, lon: -80.0956, timezone: "America/New_York" },
    Airport { code: "MCO", name: "Orlando International", city: "Orlando", country: "US", lat: 28.4312, lon: -81.3081, timezone: "America/New_York" },
    Airport { code: "TPA", name: "Tampa International", city: "Tampa", country: "US", lat: 27.9772, lon: -82.5311, timezone: "America/New_York" },
    // Mountain / Southwest US
    Airport { code: "DEN", name: "Denver International", city: "Denver", country: "US", lat: 39.8561, lon: -104.6737, timezone: "America/Denver" },
    Airport { code: "SLC", name: "Salt Lake City International", city: "Salt Lake City", country: "US", lat: 40.7899, lon: -111.9791, timezone: "America/Denver" },
    Airport { code: "PHX", name: "Phoenix Sky Harbor International", city: "Phoenix", country: "US", lat: 33.4352, lon: -112.0101, timezone: "America/Phoenix" },
    Airport { code: "LAS", name: "Harry Reid International", city: "Las Vegas", country: "US", lat: 36.0840, lon: -115.1537, timezone: "America/Los_Angeles" },
    // West coast US
    Airport { code: "LAX", name: "Los Angeles International", city: "Los Angeles", country: "US", lat: 33.9416, lon: -118.4085, timezone: "America/Los_Angeles" },
    Airport { code: "BUR", name: "Hollywood Burbank", city: "Burbank", country: "US", lat: 34.2007, lon: -118.3590, timezone: "America/Los_Angeles" },
    Airport { code: "ONT", name: "Ontario International", city: "Ontario", country: "US", lat: 34.0560, lon: -117.6012, timezone: "America/Los_Angeles" },
    Airport { code: "LGB", name: "Long Beach", city: "Long Beach", country: "US", lat: 33.8177, lon: -118.1516, timezone: "America/Los_Angeles" },
    Airport { code: "SNA", name: "John Wayne", city: "Santa Ana", country: "US", lat: 33.6762, lon: -117.8675, timezone: "America/Los_Angeles" },
    Airport { code: "SAN", name: "San Diego International", city: "San Diego", country: "US", lat: 32.7338, lon: -117.1933, timezone: "America/Los_Angeles" },
    Airport { code: "SFO", name: "San Francisco International", city: "San Francisco", country: "US", lat: 37.6213, lon: -122.3790, timezone: "America/Los_Angeles" },
    Airport { code: "OAK", name: "Oakland International", city: "Oakland", country: "US", lat: 37.7126, lon: -122.2197, timezone: "America/Los_Angeles" },
    Airport { code: "SJC", name: "San Jose Mineta International", city: "San Jose", country: "US", lat: 37.3639, lon: -121.9289, timezone: "America/Los_Angeles" },
    Airport { code: "SEA", name: "Seattle-Tacoma International", city: "Seattle", country: "US", lat: 47.4502, lon: -122.3088, timezone: "America/Los_Angeles" },
    Airport { code: "PDX", name: "Portland International", city: "Portland", country: "US", lat: 45.5898, lon: -122.5951, timezone: "America/Los_Angeles" },
    // International
    Airport { code: "YYZ", name: "Toronto Pearson International", city: "Toronto", country: "CA", lat: 43.6777, lon: -79.6248, timezone: "America/Toronto" },
    Airport { code: "YVR", name: "Vancouver International", city: "Vancouver", country: "CA", lat: 49.1967, lon: -123.1815, timezone: "America/Vancouver" },
    Airport { code: "MEX", name: "Mexico City International", city: "Mexico City", country: "MX", lat: 19.4361, lon: -99.0719, timezone: "America/Mexico_City" },
    Airport { code: "CUN", name: "Cancun International", city: "Cancun", country: "MX", lat: 21.0365, lon: -86.8771, timezone: "America/Cancun" },
    Airport { code: "LHR", name: "London Heathrow", city: "London", country: "GB", lat: 51.4700, lon: -0.4543, timezone: "Europe/London" },
    Airport { code: "CDG", name: "Paris Charles de Gaulle", city: "Paris", country: "FR", lat: 49.0097, lon: 2.5479, timezone: "Europe/Paris" },
    Airport { code: "FRA", name: "Frankfurt am Main", city: "Frankfurt", country: "DE", lat: 50.0379, lon: 8.5622, timezone: "Europe/Berlin" },
    Airport { code: "AMS", name: "Amsterdam Schiphol", city: "Amsterdam", country: "NL", lat: 52.3105, lon: 4.7683, timezone: "Europe/Amsterdam" },
    Airport { code: "DUB", name: "Dublin", city: "Dublin", country: "IE", lat: 53.4264, lon: -6.2499, timezone: "Europe/Dublin" },
    Airport { code: "NRT", name: "Narita International", city: "Tokyo", country: "JP", lat: 35.7720, lon: 140.3929, timezone: "Asia/Tokyo" },
    Airport { code: "HND", name: "Tokyo Haneda", city: "Tokyo", country: "JP", lat: 35.5494, lon: 139.7798, timezone: "Asia/Tokyo" },
    Airport { code: "ICN", name: "Incheon International", city: "Seoul", country: "KR", lat: 37.4602, lon: 126.4407, timezone: "Asia/Seoul" },
    Airport { code: "SYD", name: "Sydney Kingsford Smith", city: "Sydney", country: "AU", lat: -33.9399, lon: 151.1753, timezone: "Australia/Sydney" },
];

fn index() -> &'static HashMap<&'static str, &'static Airport> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Airport>> = OnceLock::new();
    INDEX.get_or_init(|| AIRPORTS.iter().map(|a| (a.code, a)).collect())
}

/// Look up an airport by IATA code. Case-insensitive; unknown codes
/// return `None` rather than erroring.
pub fn lookup(code: &str) -> Option<&'static Airport> {
    let upper = code.trim().to_ascii_uppercase();
    index().get(upper.as_str()).copied()
}
