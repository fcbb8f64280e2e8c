/// Stock Ghana reference tables
///
/// Centroids and city points are approximate (OpenStreetMap), population is
/// the 2021 census by region, the boundary is a coarse national outline.

use crate::coordinate::Coordinate;
use crate::reference::{PlaceTable, RegionPopulation};
use once_cell::sync::Lazy;

pub static REGION_CENTROIDS: Lazy<PlaceTable> = Lazy::new(|| {
    PlaceTable::from_entries([
        ("greater accra", 5.6037, -0.1870),
        ("ashanti", 6.7, -1.6),
        ("western", 5.09, -1.94),
        ("western north", 6.2, -2.5),
        ("central", 5.3, -1.1),
        ("eastern", 6.2, -0.5),
        ("volta", 6.7, 0.5),
        ("oti", 8.0, 0.5),
        ("northern", 9.5, -1.0),
        ("savannah", 9.0, -1.8),
        ("north east", 10.5, -0.3),
        ("upper east", 10.8, -0.8),
        ("upper west", 10.3, -2.4),
        ("bono", 7.5, -2.3),
        ("bono east", 7.8, -1.5),
        ("ahafo", 6.9, -2.4),
        ("brong ahafo", 7.5, -1.7),
    ])
});

pub static CITIES: Lazy<PlaceTable> = Lazy::new(|| {
    PlaceTable::from_entries([
        // Greater Accra
        ("accra", 5.6037, -0.1870),
        ("tema", 5.6698, -0.0166),
        ("teshie", 5.5796, -0.1062),
        ("nungua", 5.5913, -0.0775),
        ("madina", 5.6699, -0.1668),
        ("adenta", 5.7095, -0.1575),
        ("ashaiman", 5.6894, -0.0360),
        ("dansoman", 5.5467, -0.2614),
        ("kasoa", 5.5345, -0.4178),
        ("east legon", 5.6350, -0.1540),
        ("osu", 5.5593, -0.1790),
        ("legon", 5.6505, -0.1862),
        ("weija", 5.5600, -0.3500),
        ("achimota", 5.6300, -0.2370),
        // Ashanti
        ("kumasi", 6.6885, -1.6244),
        ("ejisu", 6.7270, -1.4600),
        ("bekwai", 6.4560, -1.5710),
        ("mampong", 7.0650, -1.4030),
        ("obuasi", 6.2060, -1.6620),
        ("agogo", 6.7940, -1.0810),
        ("konongo", 6.6170, -1.2130),
        ("offinso", 7.0380, -1.6650),
        ("ejura", 7.3840, -1.3620),
        ("tepa", 7.0190, -1.9100),
        ("nkawie", 6.6150, -1.8010),
        // Western / Western North
        ("takoradi", 4.8976, -1.7603),
        ("sekondi", 4.9140, -1.7100),
        ("tarkwa", 5.3040, -1.9940),
        ("axim", 4.8660, -2.2410),
        ("bogoso", 5.5380, -2.0000),
        ("bibiani", 6.4630, -2.3300),
        ("enchi", 5.8280, -2.8130),
        ("sefwi wiawso", 6.2050, -2.4900),
        ("juaboso", 6.2380, -2.8340),
        // Central
        ("cape coast", 5.1036, -1.2466),
        ("winneba", 5.3530, -0.6230),
        ("mankessim", 5.2670, -1.0150),
        ("agona swedru", 5.5300, -0.8950),
        ("assin-foso", 5.8000, -1.2500),
        // Eastern
        ("koforidua", 6.0941, -0.2636),
        ("nkawkaw", 6.5500, -0.7700),
        ("asamankese", 5.8630, -0.6600),
        ("akwatia", 6.0400, -0.8000),
        ("somanya", 6.1060, -0.0150),
        ("nsawam", 5.8030, -0.3560),
        ("suhum", 6.0400, -0.4500),
        ("akosombo", 6.2920, 0.0450),
        // Volta / Oti
        ("ho", 6.6012, 0.4693),
        ("hohoe", 7.1510, 0.4740),
        ("keta", 5.9190, 0.9870),
        ("kpando", 6.9950, 0.2980),
        ("aflao", 6.1170, 1.1940),
        ("sogakope", 6.0050, 0.6330),
        ("nkwanta", 8.2610, 0.5080),
        // Northern / Savannah
        ("tamale", 9.4007, -0.8393),
        ("yendi", 9.4330, -0.0100),
        ("bimbilla", 8.8530, -0.0580),
        ("damongo", 9.0870, -1.8200),
        ("salaga", 8.5570, -0.5190),
        ("bole", 9.0330, -2.4860),
        // Upper East / Upper West
        ("bolgatanga", 10.7870, -0.8540),
        ("bawku", 11.0590, -0.2420),
        ("navrongo", 10.8940, -1.0930),
        ("sandema", 10.6250, -1.0620),
        ("wa", 10.0601, -2.5099),
        ("tumu", 10.8800, -1.9700),
        ("nadawli", 10.3920, -2.6530),
        ("lawra", 10.6310, -2.8980),
        // Bono / Bono East / Ahafo
        ("sunyani", 7.3349, -2.3265),
        ("berekum", 7.4500, -2.5800),
        ("techiman", 7.5833, -1.9394),
        ("wenchi", 7.7410, -2.1060),
        ("kintampo", 8.0560, -1.7310),
        ("goaso", 6.8020, -2.5150),
        ("atebubu", 7.7500, -0.9830),
        ("yeji", 8.2250, -0.6580),
    ])
});

pub static REGION_POPULATION: Lazy<RegionPopulation> = Lazy::new(|| {
    RegionPopulation::from_entries([
        ("Greater Accra", 5_455_692),
        ("Ashanti", 5_440_463),
        ("Western", 2_060_585),
        ("Western North", 880_921),
        ("Central", 2_859_821),
        ("Eastern", 2_925_653),
        ("Volta", 1_659_040),
        ("Oti", 747_248),
        ("Northern", 2_310_939),
        ("Savannah", 653_266),
        ("North East", 658_946),
        ("Upper East", 1_301_226),
        ("Upper West", 904_695),
        ("Bono", 1_208_649),
        ("Bono East", 1_203_400),
        ("Ahafo", 564_668),
    ])
});

/// Clockwise from the south-western coast, closed
pub static BOUNDARY: Lazy<Vec<Coordinate>> = Lazy::new(|| {
    [
        (5.10, -3.10),
        (5.90, -2.95),
        (6.60, -3.25),
        (7.40, -2.95),
        (8.20, -2.60),
        (9.00, -2.70),
        (9.50, -2.70),
        (10.30, -2.95),
        (11.00, -2.90),
        (11.00, -1.20),
        (11.10, -0.60),
        (11.10, 0.00),
        (10.50, 0.35),
        (9.50, 0.25),
        (8.50, 0.60),
        (7.50, 0.55),
        (6.90, 0.65),
        (6.25, 1.25),
        (6.05, 1.22),
        (5.85, 0.95),
        (5.75, 0.40),
        (5.55, -0.20),
        (5.20, -1.00),
        (4.95, -1.60),
        (4.75, -2.05),
        (4.90, -2.60),
        (5.10, -3.10),
    ]
    .into_iter()
    .map(|(lat, lng)| Coordinate::new(lat, lng))
    .collect()
});
