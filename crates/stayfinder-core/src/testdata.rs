//! Shared hotel fixture for repository, service and API tests.
//!
//! Fifteen Zagreb hotels around a fixed query point. The radius-query
//! expectations in the repository tests are precomputed against these
//! coordinates, so the fixture must not drift.

use crate::domain::{GeoPoint, Hotel, NewHotel};

/// The query point used by the search tests (Zagreb city center area).
#[must_use]
pub fn query_point() -> GeoPoint {
    GeoPoint::new(15.950_064_8, 45.769_841)
}

/// The fixture hotels, IDs 1..=15, in insertion order.
///
/// The trailing comment on each entry is its approximate great-circle
/// distance from [`query_point`].
#[must_use]
pub fn hotels() -> Vec<Hotel> {
    let hotel = |id: i64, name: &str, price: f64, x: f64, y: f64| Hotel {
        id,
        name: name.to_string(),
        price,
        location: GeoPoint::new(x, y),
    };

    vec![
        hotel(1, "Hotel Esplanade", 180.0, 15.973_413_2, 45.805_370_7), // ~4.35 km
        hotel(2, "Palace Hotel", 120.0, 15.975_092_7, 45.808_519), // ~4.72 km
        hotel(3, "Dubrovnik Hotel", 150.0, 15.971_673_8, 45.812_666_5), // ~5.05 km
        hotel(4, "Hotel International", 100.0, 15.971_481_8, 45.799_072_1), // ~3.65 km
        hotel(5, "Hotel Academia", 135.0, 15.975_865_2, 45.819_354_9), // ~5.86 km
        hotel(6, "Sundial Boutique Hotel", 130.0, 15.950_555_2, 45.773_478_1), // ~0.41 km
        hotel(7, "Best Western Premier Hotel Astoria", 110.0, 15.975_513_1, 45.807_190_5), // ~4.60 km
        hotel(8, "Hotel Pleso", 75.0, 16.061_802_9, 45.730_066_3), // ~9.73 km
        hotel(9, "Hotel Antunović", 140.0, 15.896_266_6, 45.797_470_6), // ~5.18 km
        hotel(10, "Admiral Hotel", 95.0, 15.916_527, 45.794_741_4), // ~3.80 km
        hotel(11, "Manda Heritage Hotel", 115.0, 15.981_193, 45.811_448_3), // ~5.22 km
        hotel(12, "Timeout Heritage Hotel", 130.0, 15.970_934_1, 45.813_236), // ~5.09 km
        hotel(13, "Canopy by Hilton Zagreb", 165.0, 15.982_591_2, 45.805_724_2), // ~4.72 km
        hotel(14, "Sheraton Zagreb Hotel", 170.0, 15.982_079_2, 45.806_973_1), // ~4.82 km
        hotel(15, "Hotel Jägerhorn", 120.0, 15.971_122_1, 45.813_232_4), // ~5.09 km
    ]
}

/// The fixture as unpersisted hotels, in the same order.
///
/// Inserting these sequentially into a fresh repository reproduces the
/// fixture IDs 1..=15.
#[must_use]
pub fn new_hotels() -> Vec<NewHotel> {
    hotels().iter().map(Hotel::to_new_hotel).collect()
}
