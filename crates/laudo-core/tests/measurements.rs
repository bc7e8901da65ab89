use jiff::civil::date;
use laudo_core::error::CoreError;
use laudo_core::measurements::{
    SUFFICIENT_FOLLOW_UP_MONTHS, density, follow_up_months, follow_up_months_from_now, format_date,
    format_locale_number, is_sufficient_follow_up, parse_date, parse_locale_number, volume,
};

#[test]
fn volume_is_ellipsoid_product() {
    let v = volume(4.0, 3.0, 5.0);
    assert!((v - 31.2).abs() < 1e-9);
}

#[test]
fn volume_with_missing_dimension_is_zero() {
    assert_eq!(volume(4.0, 0.0, 5.0), 0.0);
    assert_eq!(volume(4.0, -1.0, 5.0), 0.0);
    assert_eq!(volume(f64::NAN, 1.0, 1.0), 0.0);
}

#[test]
fn density_is_zero_without_volume() {
    assert_eq!(density(6.5, 0.0), 0.0);
    assert!((density(6.0, 40.0) - 0.15).abs() < 1e-9);
}

#[test]
fn volume_and_density_never_negative() {
    for a in [0.0, 0.5, 1.0, 3.2] {
        for b in [0.0, 1.1, 2.0] {
            let v = volume(a, b, 2.5);
            assert!(v >= 0.0);
            let d = density(4.2, v);
            assert!(d >= 0.0);
            if v == 0.0 {
                assert_eq!(d, 0.0);
            }
        }
    }
}

#[test]
fn parses_both_decimal_separators() {
    assert_eq!(parse_locale_number("1,5"), 1.5);
    assert_eq!(parse_locale_number(" 2.25 "), 2.25);
    assert_eq!(parse_locale_number("12"), 12.0);
}

#[test]
fn unparsable_number_reads_as_zero() {
    assert_eq!(parse_locale_number(""), 0.0);
    assert_eq!(parse_locale_number("1,"), 1.0);
    assert_eq!(parse_locale_number("abc"), 0.0);
    assert_eq!(parse_locale_number("1.234,5"), 0.0);
}

#[test]
fn formats_with_decimal_comma() {
    assert_eq!(format_locale_number(1.5, 2), "1,50");
    assert_eq!(format_locale_number(31.2, 1), "31,2");
    assert_eq!(format_locale_number(0.149, 2), "0,15");
    assert_eq!(format_locale_number(7.0, 0), "7");
    assert_eq!(format_locale_number(-0.01, 1), "0,0");
}

#[test]
fn parses_iso_and_brazilian_dates() {
    assert_eq!(parse_date("2024-10-16").unwrap(), date(2024, 10, 16));
    assert_eq!(parse_date("16/10/2024").unwrap(), date(2024, 10, 16));
    assert!(matches!(parse_date("31/02/2024"), Err(CoreError::InvalidDate(_))));
    assert!(matches!(parse_date("ontem"), Err(CoreError::InvalidDate(_))));
}

#[test]
fn twenty_four_months_is_sufficient() {
    let today = date(2026, 10, 16);
    let months = follow_up_months("2024-10-16", today).unwrap();
    assert_eq!(months, 24);
    assert!(is_sufficient_follow_up(months, SUFFICIENT_FOLLOW_UP_MONTHS));
}

#[test]
fn one_day_short_is_not_sufficient() {
    let today = date(2026, 10, 16);
    let months = follow_up_months("17/10/2024", today).unwrap();
    assert_eq!(months, 23);
    assert!(!is_sufficient_follow_up(months, SUFFICIENT_FOLLOW_UP_MONTHS));
}

#[test]
fn future_prior_date_is_invalid() {
    let today = date(2026, 10, 16);
    assert!(matches!(
        follow_up_months("2026-10-17", today),
        Err(CoreError::InvalidDate(_))
    ));
    assert_eq!(follow_up_months("2026-10-16", today).unwrap(), 0);
}

#[test]
fn formats_dates_day_first() {
    assert_eq!(format_date(date(2024, 3, 5)), "05/03/2024");
}

#[test]
fn follow_up_from_the_local_clock() {
    let today = jiff::Zoned::now().date();
    assert_eq!(follow_up_months_from_now(&format_date(today)).unwrap(), 0);

    let year_ago = today.saturating_sub(jiff::Span::new().years(1));
    assert_eq!(follow_up_months_from_now(&year_ago.to_string()).unwrap(), 12);

    assert!(matches!(
        follow_up_months_from_now("9999-01-01"),
        Err(CoreError::InvalidDate(_))
    ));
}
