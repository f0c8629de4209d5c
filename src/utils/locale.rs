use chrono::{DateTime, Datelike, Local, Weekday};

// Fixed es-ES name tables. chrono's localized formatting sits behind an
// unstable feature flag, so weekday and month names are mapped by hand.
// Spanish convention keeps them lowercase.
const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Clock string with two-digit hour, minute and second: "15:04:05".
pub fn format_time(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Long-form date: "jueves, 7 de marzo de 2024".
pub fn format_date(t: &DateTime<Local>) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(t.weekday()),
        t.day(),
        MONTHS[t.month0() as usize],
        t.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn formats_time_with_two_digit_fields() {
        assert_eq!(format_time(&local(2024, 3, 7, 15, 4, 5)), "15:04:05");
        assert_eq!(format_time(&local(2024, 12, 1, 5, 4, 9)), "05:04:09");
        assert_eq!(format_time(&local(2024, 12, 1, 0, 0, 0)), "00:00:00");
    }

    #[test]
    fn formats_long_form_spanish_date() {
        assert_eq!(
            format_date(&local(2024, 3, 7, 15, 4, 5)),
            "jueves, 7 de marzo de 2024"
        );
        // Single-digit day stays unpadded
        assert_eq!(
            format_date(&local(2024, 12, 1, 0, 0, 0)),
            "domingo, 1 de diciembre de 2024"
        );
    }
}
