use kalends::{
    civil::{datetime, Era, Weekday},
    fmt::strtime,
    tz, Instant, ToSpan,
};

/// The assassination of Julius Caesar: the Ides of March, 44 BCE, in the
/// evening, written at the offset of Rome.
#[test]
fn ides_of_march() {
    let ides = datetime(-43, 3, 15, 21, 0, 0, 0, 120);

    assert_eq!(ides.weekday(), Weekday::Friday);
    assert_eq!(ides.era_year(), (44, Era::BCE));
    assert_eq!(ides.to_instant().as_microsecond(), -1_350_536_400_000_000);

    assert_eq!(
        strtime::format(strtime::ISO_8601_SPACED, &ides).unwrap(),
        "-0043-03-15 21:00:00.000000 +02:00",
    );
    assert_eq!(
        strtime::format("%A %d, %R %L (%B)", &ides).unwrap(),
        "March 15, XLIV BCE (Friday)",
    );
    assert_eq!(
        strtime::format("%b, %d %A %J %L", &ides).unwrap(),
        "Fri, 15 March 44 BCE",
    );
}

/// The attack on Pearl Harbor began at 7:48 in Hawaii. The same instant
/// reads as December 8 in Japan and early afternoon in Washington.
#[test]
fn pearl_harbor_across_offsets() {
    let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);

    assert_eq!(hawaii.weekday(), Weekday::Sunday);
    assert_eq!(hawaii.to_unix_second(), -885_706_920);
    assert_eq!(
        strtime::format(strtime::ISO_8601, &hawaii).unwrap(),
        "1941-12-07T07:48:00.000000-10:30",
    );

    let stamp = "at %I:%0M %p, on %A %d, %Y (UTC%t%0Z:%0z)";
    assert_eq!(
        strtime::format(stamp, &hawaii).unwrap(),
        "at 7:48 a.m., on December 7, 1941 (UTC-10:30)",
    );

    let japan = hawaii.to_offset(tz::offset(9));
    assert_eq!(japan.day(), 8);
    assert_eq!(japan.weekday(), Weekday::Monday);
    assert_eq!(
        strtime::format(stamp, &japan).unwrap(),
        "at 3:18 a.m., on December 8, 1941 (UTC+09:00)",
    );

    let washington = hawaii.to_offset(tz::offset(-5));
    assert_eq!(
        strtime::format(stamp, &washington).unwrap(),
        "at 1:18 p.m., on December 7, 1941 (UTC-05:00)",
    );

    // Three renderings, one moment.
    assert_eq!(hawaii, japan);
    assert_eq!(hawaii, washington);
    assert!(hawaii.until(japan).is_zero());
}

/// Easter computed for the years the other scenarios visit.
#[test]
fn easter_sundays() {
    let sighting = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
    let easter = sighting.easter();
    assert_eq!((easter.month(), easter.day()), (4, 5));
    assert_eq!(easter.weekday(), Weekday::Sunday);
    // Clock fields and offset ride along unchanged.
    assert_eq!(easter.hour(), 21);
    assert_eq!(easter.offset(), tz::offset(2));

    let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
    let easter = hawaii.easter();
    assert_eq!((easter.month(), easter.day()), (4, 13));
    assert_eq!(easter.weekday(), Weekday::Sunday);
    assert_eq!(
        strtime::format("Easter that year: %d.%0m.%J %L", &easter).unwrap(),
        "Easter that year: 13.04.1941 CE",
    );

    // Below the computus' original domain the date stays in the
    // March/April window and still falls on a proleptic Sunday.
    let ides = datetime(-43, 3, 15, 21, 0, 0, 0, 120);
    let easter = ides.easter();
    assert_eq!((easter.month(), easter.day()), (4, 7));
    assert_eq!(easter.weekday(), Weekday::Sunday);
    assert_eq!(
        strtime::format("Easter that year: %d.%0m.%J %L", &easter).unwrap(),
        "Easter that year: 7.04.44 BCE",
    );

    // The Ides to that Easter is three weeks and two days.
    assert_eq!(ides.until(easter), 3.weeks().days(2));
}

/// Out of range fields carry over instead of failing: January 32nd is
/// February 1st.
#[test]
fn construction_carries_overflow() {
    let dt = datetime(2015, 1, 32, 0, 0, 0, 0, 0);
    assert_eq!((dt.year(), dt.month(), dt.day()), (2015, 2, 1));

    // Hour 24 is the end of the day written the long way, not a carry.
    let dt = datetime(2015, 6, 11, 24, 0, 0, 0, 0);
    assert_eq!((dt.day(), dt.hour()), (11, 0));

    let dt = datetime(2015, 2, 29, 0, 0, 0, 0, 0);
    assert_eq!((dt.month(), dt.day()), (3, 1));
    let dt = datetime(2016, 2, 29, 0, 0, 0, 0, 0);
    assert_eq!((dt.month(), dt.day()), (2, 29));

    let dt = datetime(2015, 13, 1, 0, 0, 0, 0, 0);
    assert_eq!((dt.year(), dt.month()), (2016, 1));
}

/// ISO week numbers around New Year, including a 53 week year and a
/// December that belongs to the next ISO year.
#[test]
fn iso_week_boundaries() {
    let dt = datetime(2015, 12, 31, 0, 0, 0, 0, 0);
    assert_eq!((dt.iso_week_year(), dt.iso_week_number()), (2015, 53));

    let dt = datetime(2016, 1, 1, 0, 0, 0, 0, 0);
    assert_eq!((dt.iso_week_year(), dt.iso_week_number()), (2015, 53));
    // The week date preset keeps the calendar year.
    assert_eq!(
        strtime::format(strtime::ISO_8601_WEEK_DATE, &dt).unwrap(),
        "2016-W53-5",
    );

    let dt = datetime(2014, 12, 29, 0, 0, 0, 0, 0);
    assert_eq!((dt.iso_week_year(), dt.iso_week_number()), (2015, 1));
    assert_eq!(
        strtime::format(strtime::ISO_8601_WEEK_DATE, &dt).unwrap(),
        "2014-W01-1",
    );

    let dt = datetime(2015, 6, 11, 0, 0, 0, 0, 0);
    assert_eq!(
        strtime::format(strtime::ISO_8601_WEEK_DATE, &dt).unwrap(),
        "2015-W24-4",
    );
}

/// The Unix bridge agrees with the civil layer at and around the epoch.
#[test]
fn unix_bridge() {
    let epoch = datetime(1970, 1, 1, 0, 0, 0, 0, 0);
    assert_eq!(epoch.to_unix_second(), 0);
    assert_eq!(epoch.weekday(), Weekday::Thursday);
    assert_eq!(epoch.to_instant(), Instant::UNIX_EPOCH);

    let sighting = datetime(2015, 6, 11, 19, 53, 12, 0, 0);
    assert_eq!(sighting.to_unix_second(), 1_434_052_392);

    let decoded = Instant::from_unix_second(-885_706_920)
        .to_datetime(tz::Offset::from_minutes(-630));
    assert_eq!((decoded.month(), decoded.day()), (12, 7));
    assert_eq!((decoded.hour(), decoded.minute()), (7, 48));
}

/// Span arithmetic carried out on a fixed base: one week, one day, one
/// hour, one minute and one second later.
#[test]
fn span_arithmetic() {
    let easter = datetime(2015, 4, 5, 12, 0, 0, 0, 0);
    let later = easter
        + 1.weeks().days(1).hours(1).minutes(1).seconds(1).microseconds(1);
    assert_eq!(
        strtime::format(strtime::ISO_8601_SPACED, &later).unwrap(),
        "2015-04-13 13:01:01.000001 +00:00",
    );
    assert_eq!(later - 1.weeks().days(1), datetime(2015, 4, 5, 13, 1, 1, 1, 0));
}

/// How long before the 2015 sighting the attack on Pearl Harbor happened.
#[test]
fn pearl_harbor_to_sighting() {
    let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
    let sighting = datetime(2015, 6, 11, 21, 53, 12, 0, 120);

    let diff = hawaii.until(sighting);
    assert_eq!(diff, 3835.weeks().days(4).hours(1).minutes(35).seconds(12));
    assert_eq!(hawaii + diff, sighting);
    assert_eq!(sighting.since(hawaii), diff);
}

/// The default rendering, end to end through `Display`.
#[test]
fn default_display() {
    let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
    assert_eq!(dt.to_string(), "Thu, 2015-06-11 21:53:12.543294+02:00");

    let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
    assert_eq!(hawaii.to_string(), "Sun, 1941-12-07 07:48:00.000000-10:30");
}
