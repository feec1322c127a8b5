//! Native-script city names and their OpenWeather spellings.

/// Cities offered as one-click picks.
pub const POPULAR_CITIES: &[&str] = &["Seoul", "Tokyo", "New York", "London", "Paris", "Sydney"];

const CITY_NAMES: &[(&str, &str)] = &[
    // Korea
    ("서울", "Seoul"),
    ("부산", "Busan"),
    ("인천", "Incheon"),
    ("대구", "Daegu"),
    ("대전", "Daejeon"),
    ("광주", "Gwangju"),
    ("울산", "Ulsan"),
    ("수원", "Suwon"),
    ("창원", "Changwon"),
    ("성남", "Seongnam"),
    ("용인", "Yongin"),
    ("고양", "Goyang"),
    ("청주", "Cheongju"),
    ("전주", "Jeonju"),
    ("천안", "Cheonan"),
    ("안산", "Ansan"),
    ("제주", "Jeju"),
    ("포항", "Pohang"),
    ("춘천", "Chuncheon"),
    ("강릉", "Gangneung"),
    // World
    ("도쿄", "Tokyo"),
    ("오사카", "Osaka"),
    ("교토", "Kyoto"),
    ("베이징", "Beijing"),
    ("상하이", "Shanghai"),
    ("홍콩", "Hong Kong"),
    ("타이베이", "Taipei"),
    ("방콕", "Bangkok"),
    ("싱가포르", "Singapore"),
    ("뉴욕", "New York"),
    ("로스앤젤레스", "Los Angeles"),
    ("LA", "Los Angeles"),
    ("샌프란시스코", "San Francisco"),
    ("시카고", "Chicago"),
    ("런던", "London"),
    ("파리", "Paris"),
    ("로마", "Rome"),
    ("베를린", "Berlin"),
    ("마드리드", "Madrid"),
    ("바르셀로나", "Barcelona"),
    ("시드니", "Sydney"),
    ("멜버른", "Melbourne"),
    ("두바이", "Dubai"),
    ("모스크바", "Moscow"),
];

/// Exact, case-sensitive table lookup.
pub fn lookup(name: &str) -> Option<&'static str> {
    CITY_NAMES
        .iter()
        .find(|(native, _)| *native == name)
        .map(|(_, english)| *english)
}

/// All `(native, english)` pairs in table order.
pub fn known_cities() -> impl Iterator<Item = (&'static str, &'static str)> {
    CITY_NAMES.iter().copied()
}

/// Turn user input into the city string OpenWeather expects.
///
/// The input is trimmed and looked up in the table; unknown names pass through
/// unchanged. Returns `None` when nothing is left after trimming.
pub fn normalize_city(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(lookup(trimmed).unwrap_or(trimmed).to_string())
}
