/*!
Prints a small almanac: the current time rendered through the preset
templates, then a couple of historical moments shown at several offsets,
with Easter computed for each of their years.

Run with `cargo run --example almanac`.
*/

use kalends::{
    civil::{datetime, DateTime},
    fmt::strtime,
    tz, ToSpan,
};

fn main() {
    let now = DateTime::now();

    println!("=============== Now ================");
    println!(" - {}", now.strftime(strtime::ISO_8601_SPACED));
    println!(" - {}", now.strftime(strtime::ISO_8601));
    println!(" - {}", now.strftime(strtime::RFC_2822ISH));
    println!(" - {}", now.strftime(strtime::ISO_8601_WEEK_DATE));
    println!(" - {}", now.strftime("%b %a %d, %Y, %I:%0M %p"));
    println!(" - {}", now.strftime("%d %r %Y, %H:%0M"));
    println!(" - {}", now.strftime("%d.%0m.%Y %H:%0M"));
    println!(" - {}", now.strftime(strtime::US_SHORT));

    let easter = now.easter();
    println!(" - {}", easter.strftime("Easter that year: %d.%0m.%J %L"));
    let bump = 1.weeks().days(1).hours(1).minutes(1).seconds(1);
    println!(
        "   in 1w 1d 1h 1m 1s from that Easter: {}",
        (easter + bump).strftime(strtime::ISO_8601_SPACED),
    );

    println!();
    println!("== Assassination of Julius Caesar ==");
    let ides = datetime(-43, 3, 15, 21, 0, 0, 0, 120);
    println!(" - {}", ides.strftime(strtime::ISO_8601_SPACED));
    println!(" - {}", ides.strftime("%A %d, %R %L (%B)"));
    println!(" - {}", ides.strftime("%b, %d %A %J %L"));
    let easter = ides.easter();
    println!(" - {}", easter.strftime("Easter that year: %d.%0m.%J %L"));
    let to_easter = ides.until(easter);
    println!(
        "   ({} weeks and {} days later)",
        to_easter.get_weeks(),
        to_easter.get_days(),
    );

    println!();
    println!("====== Attack on Pearl Harbor ======");
    let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
    println!(" - {}", hawaii.strftime(strtime::ISO_8601));
    let stamp = "at %I:%0M %p, on %A %d, %Y (UTC%t%0Z:%0z)";
    println!(" - {}", hawaii.strftime(stamp));
    println!(" - {}", hawaii.to_offset(tz::offset(9)).strftime(stamp));
    println!(" - {}", hawaii.to_offset(tz::offset(-5)).strftime(stamp));

    let since = now.since(hawaii);
    println!();
    println!(
        "The attack began {} weeks, {} days, {} hours and {} minutes ago.",
        since.get_weeks(),
        since.get_days(),
        since.get_hours(),
        since.get_minutes(),
    );
}
