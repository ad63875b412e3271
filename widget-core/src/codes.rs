//! WMO weather interpretation codes, as reported by Open-Meteo.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Description/icon pair for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Fallback for codes the table does not know.
pub const UNKNOWN: CodeInfo = CodeInfo { description: "Unknown", icon: "❓" };

const fn info(description: &'static str, icon: &'static str) -> CodeInfo {
    CodeInfo { description, icon }
}

/// Look up a weather code in the static table.
pub fn lookup(code: u16) -> CodeInfo {
    match code {
        0 => info("Clear sky", "☀️"),
        1 => info("Mainly clear", "🌤️"),
        2 => info("Partly cloudy", "⛅"),
        3 => info("Overcast", "☁️"),
        45 => info("Foggy", "🌫️"),
        48 => info("Rime fog", "🌫️"),
        51 => info("Light drizzle", "🌦️"),
        53 => info("Moderate drizzle", "🌦️"),
        55 => info("Dense drizzle", "🌧️"),
        61 => info("Slight rain", "🌧️"),
        63 => info("Moderate rain", "🌧️"),
        65 => info("Heavy rain", "⛈️"),
        71 => info("Slight snow", "🌨️"),
        73 => info("Moderate snow", "❄️"),
        75 => info("Heavy snow", "❄️"),
        77 => info("Snow grains", "🌨️"),
        80 => info("Slight rain showers", "🌦️"),
        81 => info("Moderate rain showers", "🌧️"),
        82 => info("Violent rain showers", "⛈️"),
        85 => info("Slight snow showers", "🌨️"),
        86 => info("Heavy snow showers", "❄️"),
        95 => info("Thunderstorm", "⛈️"),
        96 => info("Thunderstorm w/ hail", "⛈️"),
        99 => info("Thunderstorm w/ heavy hail", "⛈️"),
        _ => UNKNOWN,
    }
}
