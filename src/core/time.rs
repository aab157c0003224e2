use time::{format_description::well_known::Rfc3339, OffsetDateTime, PrimitiveDateTime};

/// Current UTC wall clock without offset, matching the `TIMESTAMP` columns.
pub(crate) fn primitive_now_utc() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

pub(crate) fn format_primitive(value: PrimitiveDateTime) -> String {
    value.assume_utc().format(&Rfc3339).unwrap_or_else(|_| value.assume_utc().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month, Time};

    #[test]
    fn format_primitive_outputs_utc_z() {
        let date = Date::from_calendar_date(2024, Month::March, 9).unwrap();
        let time = Time::from_hms(8, 5, 0).unwrap();
        assert_eq!(format_primitive(PrimitiveDateTime::new(date, time)), "2024-03-09T08:05:00Z");
    }

    #[test]
    fn primitive_now_is_close_to_offset_now() {
        let before = OffsetDateTime::now_utc();
        let now = primitive_now_utc().assume_utc();
        assert!(now >= before.replace_nanosecond(0).unwrap());
    }
}
