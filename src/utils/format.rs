use chrono::{DateTime, Utc};

#[cfg(all(feature = "web"))]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Format through `Intl.DateTimeFormat` with the browser's default locale,
/// which decides between 12h and 24h.
#[cfg(all(feature = "web"))]
fn locale_time(ts: &DateTime<Utc>, seconds: bool) -> String {
    use js_sys::{Array, Date, Intl, Object, Reflect};
    use wasm_bindgen::JsValue;

    let d = Date::new(&JsValue::from_f64(ts.timestamp_millis() as f64));
    let two_digit = JsValue::from_str("2-digit");
    let opts = Object::new();
    let _ = Reflect::set(&opts, &JsValue::from_str("hour"), &two_digit);
    let _ = Reflect::set(&opts, &JsValue::from_str("minute"), &two_digit);
    if seconds {
        let _ = Reflect::set(&opts, &JsValue::from_str("second"), &two_digit);
    }

    let formatter = Intl::DateTimeFormat::new(&Array::new(), &opts);
    match formatter
        .format()
        .call1(&JsValue::NULL, &d)
        .ok()
        .and_then(|v| v.as_string())
    {
        Some(s) => s,
        None => {
            let mut s = format!(
                "{}:{}",
                pad2(d.get_hours() as i32),
                pad2(d.get_minutes() as i32)
            );
            if seconds {
                s.push(':');
                s.push_str(&pad2(d.get_seconds() as i32));
            }
            s
        }
    }
}

/// Localized local hour and minute, no seconds.
#[cfg(all(feature = "web"))]
pub fn format_time(ts: &DateTime<Utc>) -> String {
    locale_time(ts, false)
}

/// Localized local time with seconds.
#[cfg(all(feature = "web"))]
pub fn format_clock(ts: &DateTime<Utc>) -> String {
    locale_time(ts, true)
}

#[cfg(not(all(feature = "web")))]
pub fn format_time(ts: &DateTime<Utc>) -> String {
    localized_time(&ts.with_timezone(&chrono::Local), system_locale(), false)
}

#[cfg(not(all(feature = "web")))]
pub fn format_clock(ts: &DateTime<Utc>) -> String {
    localized_time(&ts.with_timezone(&chrono::Local), system_locale(), true)
}

/// Locale named by `LC_ALL`, `LC_TIME` or `LANG`, first non-empty wins.
#[cfg(not(all(feature = "web")))]
fn system_locale() -> Option<chrono::Locale> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|v| !v.is_empty())
        .and_then(|v| parse_locale(&v))
}

/// `en_US.UTF-8` / `de_DE@euro` style names; codeset and modifier ignored.
#[cfg(not(all(feature = "web")))]
fn parse_locale(raw: &str) -> Option<chrono::Locale> {
    let name = raw.split(['.', '@']).next()?;
    chrono::Locale::try_from(name).ok()
}

/// 12h when the locale's own time format carries an AM/PM marker, else 24h.
/// Without a locale the output is plain 24h.
#[cfg(not(all(feature = "web")))]
fn localized_time<Tz>(
    ts: &DateTime<Tz>,
    locale: Option<chrono::Locale>,
    seconds: bool,
) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(locale) = locale else {
        let fmt = if seconds { "%H:%M:%S" } else { "%H:%M" };
        return ts.format(fmt).to_string();
    };

    let marker = ts.format_localized("%p", locale).to_string();
    let twelve_hour =
        !marker.is_empty() && ts.format_localized("%X", locale).to_string().contains(&marker);
    let fmt = match (twelve_hour, seconds) {
        (true, false) => "%I:%M %p",
        (true, true) => "%I:%M:%S %p",
        (false, false) => "%H:%M",
        (false, true) => "%H:%M:%S",
    };
    ts.format_localized(fmt, locale).to_string()
}

pub fn format_uptime(uptime: f64) -> String {
    format!("{:.2}%", uptime)
}

pub fn format_response_time(ms: u32) -> String {
    format!("{}ms", ms)
}
