use chrono::NaiveDate;

use crate::itinerary::Itinerary;

/// Build the booking URL for an itinerary.
///
/// Priority: provider booking token when it is already a URL, then a
/// carrier deep link for airlines we have templates for, then a universal
/// flight-search fallback.
pub fn booking_link(itinerary: &Itinerary) -> String {
    if let Some(token) = &itinerary.booking_token {
        if token.starts_with("https://") || token.starts_with("http://") {
            return token.clone();
        }
    }

    let Some(leg) = itinerary.first_leg() else {
        return fallback_link("", "", None);
    };
    let date = leg.depart_at.date_naive();

    carrier_link(&leg.airline, &leg.origin, &leg.destination, date)
        .unwrap_or_else(|| fallback_link(&leg.origin, &leg.destination, Some(date)))
}

/// Carrier-specific deep link, if the airline is one we template.
fn carrier_link(airline: &str, origin: &str, destination: &str, date: NaiveDate) -> Option<String> {
    let name = airline.to_lowercase();
    let o = encode(origin);
    let d = encode(destination);
    let dt = encode(&date.to_string());

    let url = if name.contains("united") {
        format!("https://www.united.com/en/us/fsr/choose-flights?f={o}&t={d}&d={dt}&tt=1")
    } else if name.contains("american") {
        format!("https://www.aa.com/booking/find-flights?origin={o}&destination={d}&departDate={dt}")
    } else if name.contains("delta") {
        format!("https://www.delta.com/flight-search/book-a-flight?origin={o}&destination={d}&departureDate={dt}")
    } else if name.contains("southwest") {
        format!("https://www.southwest.com/air/booking/select.html?originationAirportCode={o}&destinationAirportCode={d}&departureDate={dt}")
    } else if name.contains("jetblue") {
        format!("https://www.jetblue.com/booking/flights?from={o}&to={d}&depart={dt}")
    } else if name.contains("alaska") {
        format!("https://www.alaskaair.com/planbook/flights?O={o}&D={d}&OD={dt}")
    } else if name.contains("spirit") {
        format!("https://www.spirit.com/book/flights?from={o}&to={d}&departDate={dt}")
    } else if name.contains("frontier") {
        format!("https://booking.flyfrontier.com/Flight/Select?o1={o}&d1={d}&dd1={dt}")
    } else {
        return None;
    };

    Some(url)
}

/// Universal search-engine fallback.
fn fallback_link(origin: &str, destination: &str, date: Option<NaiveDate>) -> String {
    let mut q = format!("flights from {origin} to {destination}");
    if let Some(date) = date {
        q.push_str(&format!(" on {date}"));
    }
    format!("https://www.google.com/travel/flights?q={}", encode(&q))
}

/// Percent-encode a query-string value.
///
/// Unreserved characters per RFC 3986 pass through untouched.
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
