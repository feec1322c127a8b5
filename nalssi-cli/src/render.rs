//! Human-facing output: terminal text and a standalone HTML page.

use std::fmt::{self, Write};

use chrono::{Datelike, NaiveDate, Weekday};
use nalssi_core::{Condition, CurrentWeather, DailyForecast, WeatherReport};

pub const FALLBACK_ICON: &str = "🌍";
pub const FORECAST_UNAVAILABLE: &str = "Weekly forecast data is unavailable.";

pub fn icon_for(condition: &Condition) -> &'static str {
    match condition {
        Condition::Clear => "☀️",
        Condition::Clouds => "☁️",
        Condition::Rain => "🌧️",
        Condition::Drizzle => "🌦️",
        Condition::Thunderstorm => "⛈️",
        Condition::Snow => "❄️",
        Condition::Mist | Condition::Fog | Condition::Haze => "🌫️",
        Condition::Other(_) => FALLBACK_ICON,
    }
}

/// Weekday name; Korean when the response language is `kr`.
pub fn weekday_label(date: NaiveDate, lang: &str) -> String {
    if lang != "kr" {
        return date.format("%A").to_string();
    }

    let name = match date.weekday() {
        Weekday::Mon => "월요일",
        Weekday::Tue => "화요일",
        Weekday::Wed => "수요일",
        Weekday::Thu => "목요일",
        Weekday::Fri => "금요일",
        Weekday::Sat => "토요일",
        Weekday::Sun => "일요일",
    };
    name.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn write_text(out: &mut impl Write, report: &WeatherReport, lang: &str) -> fmt::Result {
    write_current_text(out, &report.current)?;

    let Some(daily) = &report.daily else {
        return Ok(());
    };

    writeln!(out)?;
    if daily.is_empty() {
        return writeln!(out, "{FORECAST_UNAVAILABLE}");
    }

    writeln!(out, "📅 {}-day forecast", daily.len())?;
    for day in daily {
        writeln!(
            out,
            "  {}  {:<9}  {}  {:>6.1}°C / {:>6.1}°C  {}",
            day.date.format("%m/%d"),
            weekday_label(day.date, lang),
            icon_for(&day.condition),
            day.temp_max_c,
            day.temp_min_c,
            day.description,
        )?;
    }

    Ok(())
}

fn write_current_text(out: &mut impl Write, current: &CurrentWeather) -> fmt::Result {
    writeln!(out, "{} {}, {}", icon_for(&current.condition), current.city, current.country)?;
    writeln!(
        out,
        "  🌡️ Temperature  {}°C (feels like {}°C)",
        current.temperature_c, current.feels_like_c
    )?;
    writeln!(out, "  💧 Humidity     {}%", current.humidity_pct)?;
    writeln!(out, "  💨 Wind         {} m/s", current.wind_speed_mps)?;
    writeln!(out, "  Condition       {}", capitalize(&current.description))?;
    writeln!(out, "  Pressure        {} hPa", current.pressure_hpa)
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; color: #262730; }
.metrics { display: flex; gap: 2rem; }
.metric { flex: 1; }
.metric .value { font-size: 2em; }
.days { display: flex; gap: 1rem; }
.card { flex: 1; background-color: #f0f2f6; padding: 15px; border-radius: 10px; text-align: center; }
.card .icon { font-size: 2.5em; margin: 10px 0; }
.muted { color: #666; font-size: 0.9em; }
.error { color: #b00020; }
footer { text-align: center; margin-top: 2rem; }";

fn write_page_start(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>🌤️ {}</title>", escape_html(title))?;
    writeln!(out, "<style>\n{PAGE_STYLE}\n</style>\n</head>\n<body>")
}

fn write_page_end(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<hr>\n<footer><small>Powered by OpenWeather API</small></footer>")?;
    writeln!(out, "</body>\n</html>")
}

pub fn write_html(out: &mut impl Write, report: &WeatherReport, lang: &str) -> fmt::Result {
    let current = &report.current;
    write_page_start(out, &format!("{}, {}", current.city, current.country))?;

    writeln!(
        out,
        "<h1>{} {}, {}</h1>",
        icon_for(&current.condition),
        escape_html(&current.city),
        escape_html(&current.country)
    )?;
    writeln!(out, "<div class=\"metrics\">")?;
    writeln!(
        out,
        "<div class=\"metric\"><div>🌡️ Temperature</div><div class=\"value\">{}°C</div>\
         <div class=\"muted\">feels like {}°C</div></div>",
        current.temperature_c, current.feels_like_c
    )?;
    writeln!(
        out,
        "<div class=\"metric\"><div>💧 Humidity</div><div class=\"value\">{}%</div></div>",
        current.humidity_pct
    )?;
    writeln!(
        out,
        "<div class=\"metric\"><div>💨 Wind</div><div class=\"value\">{} m/s</div></div>",
        current.wind_speed_mps
    )?;
    writeln!(out, "</div>\n<hr>")?;
    writeln!(
        out,
        "<p><strong>Condition:</strong> {}</p>\n<p><strong>Pressure:</strong> {} hPa</p>",
        escape_html(&capitalize(&current.description)),
        current.pressure_hpa
    )?;

    if let Some(daily) = &report.daily {
        writeln!(out, "<hr>")?;
        if daily.is_empty() {
            writeln!(out, "<p class=\"error\">{FORECAST_UNAVAILABLE}</p>")?;
        } else {
            writeln!(out, "<h2>📅 Weekly forecast ({} days)</h2>", daily.len())?;
            writeln!(out, "<div class=\"days\">")?;
            for day in daily {
                write_day_card(out, day, lang)?;
            }
            writeln!(out, "</div>")?;
        }
    }

    write_page_end(out)
}

fn write_day_card(out: &mut impl Write, day: &DailyForecast, lang: &str) -> fmt::Result {
    writeln!(out, "<div class=\"card\">")?;
    writeln!(out, "<h4>{}</h4>", weekday_label(day.date, lang))?;
    writeln!(out, "<p class=\"muted\">{}</p>", day.date.format("%m/%d"))?;
    writeln!(out, "<div class=\"icon\">{}</div>", icon_for(&day.condition))?;
    writeln!(out, "<p><strong>{:.1}°C</strong></p>", day.temp_max_c)?;
    writeln!(out, "<p class=\"muted\">{:.1}°C</p>", day.temp_min_c)?;
    writeln!(out, "<p>{}</p>", escape_html(&day.description))?;
    writeln!(out, "</div>")
}

/// Page shown when the lookup failed.
pub fn write_html_error(out: &mut impl Write, query: &str, message: &str) -> fmt::Result {
    write_page_start(out, query)?;
    writeln!(out, "<p class=\"error\">❌ {}</p>", escape_html(message))?;
    write_page_end(out)
}

pub fn render_text(report: &WeatherReport, lang: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_text(&mut out, report, lang)?;
    Ok(out)
}

pub fn render_html(report: &WeatherReport, lang: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_html(&mut out, report, lang)?;
    Ok(out)
}

pub fn render_html_error(query: &str, message: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_html_error(&mut out, query, message)?;
    Ok(out)
}
