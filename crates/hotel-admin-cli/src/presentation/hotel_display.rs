//! Hotel summary display for CLI output.

use std::fmt::Write as _;

use hotel_admin_gui::{Hotel, format_usd};

/// Multi-line summary of one hotel, optionally preceded by a title.
pub fn hotel_summary(hotel: &Hotel, title: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        let _ = writeln!(out, "{title}");
    }
    let _ = writeln!(out, "  ID: {}", hotel.id);
    let _ = writeln!(out, "  Name: {}", hotel.name);
    if let Some(description) = &hotel.description {
        let _ = writeln!(out, "  Description: {description}");
    }
    let _ = writeln!(out, "  Location: {}", hotel.location);
    let _ = writeln!(out, "  Address: {}", hotel.address);
    let _ = writeln!(out, "  Rating: {}", hotel.rating);
    let _ = write!(out, "  Price Per Night: {}", format_usd(hotel.price_per_night));
    if !hotel.rooms.is_empty() {
        let names: Vec<&str> = hotel.rooms.iter().map(|r| r.name.as_str()).collect();
        let _ = write!(out, "\n  Rooms: {}", names.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_admin_core::Room;

    #[test]
    fn test_summary_lists_fields() {
        let hotel = Hotel {
            id: "h1".to_string(),
            name: "Seaside".to_string(),
            description: None,
            location: "Porto".to_string(),
            address: "Avenida 12".to_string(),
            rating: 4.5,
            photos: Vec::new(),
            price_per_night: 1250.0,
            rooms: vec![Room {
                id: "r1".to_string(),
                name: "Suite".to_string(),
            }],
        };

        let text = hotel_summary(&hotel, Some("Hotel created:"));

        assert!(text.starts_with("Hotel created:\n  ID: h1\n"));
        assert!(!text.contains("Description"));
        assert!(text.contains("  Rating: 4.5\n"));
        assert!(text.contains("  Price Per Night: $1,250.00"));
        assert!(text.ends_with("  Rooms: Suite"));
    }
}
