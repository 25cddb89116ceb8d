use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Duration, Utc};
use ical::generator::{Emitter, IcalCalendarBuilder, IcalEventBuilder};
use ical::ical_property;
use ical::property::Property;
use log::warn;

use super::models::{AppState, ErrorResponse};
use crate::halving::ProjectedHalving;

/// How many upcoming halvings the calendar carries.
const CALENDAR_EVENTS: usize = 5;

const PRODID: &str = "-//Bitcoin Halving Calendar//example.com//";

/// Halvings have no intrinsic duration; one hour is a display convention.
const EVENT_HOURS: i64 = 1;

/// iCalendar file with the next few projected halvings. Served at
/// `/btc-halving-ical` and `/ical`.
pub async fn halving_calendar(state: web::Data<AppState>) -> impl Responder {
    let est = match state.estimator.estimate().await {
        Ok(est) => est,
        Err(err) => {
            warn!("halving estimation failed: {err}");
            return HttpResponse::InternalServerError().json(ErrorResponse::estimation_failed());
        }
    };

    let body = build_calendar(&est.upcoming(CALENDAR_EVENTS), Utc::now());
    HttpResponse::Ok()
        .content_type("text/calendar")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"bitcoin_halvings.ics\"",
        ))
        .body(body)
}

fn ical_stamp(time: DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// One VEVENT per projected halving. UIDs are keyed on the halving
/// height so re-downloads update events instead of duplicating them.
fn build_calendar(halvings: &[ProjectedHalving], generated_at: DateTime<Utc>) -> String {
    let mut cal = IcalCalendarBuilder::version("2.0")
        .gregorian()
        .prodid(PRODID)
        .build();

    let stamp = ical_stamp(generated_at);
    for halving in halvings {
        let event = IcalEventBuilder::tzid("UTC")
            .uid(format!("btc-halving-{}@example.com", halving.height))
            .changed(stamp.clone())
            .start(ical_stamp(halving.time))
            .end(ical_stamp(halving.time + Duration::hours(EVENT_HOURS)))
            .set(ical_property!(
                "SUMMARY",
                format!("Bitcoin Halving {}", halving.ordinal)
            ))
            .build();
        cal.events.push(event);
    }

    cal.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halving::{HALVING_INTERVAL, HalvingEstimate};
    use chrono::TimeZone;

    #[test]
    fn calendar_lists_each_projected_halving() {
        let est = HalvingEstimate {
            next_halving: Utc.with_ymd_and_hms(2024, 4, 20, 0, 9, 27).unwrap(),
            next_height: 4 * HALVING_INTERVAL,
            blocks_remaining: 1,
            avg_block_secs: 600.0,
        };
        let generated_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        let body = build_calendar(&est.upcoming(3), generated_at);

        assert!(body.starts_with("BEGIN:VCALENDAR"));
        assert!(body.contains("PRODID:-//Bitcoin Halving Calendar//example.com//"));
        assert_eq!(body.matches("BEGIN:VEVENT").count(), 3);
        assert!(body.contains("SUMMARY:Bitcoin Halving 4"));
        assert!(body.contains("SUMMARY:Bitcoin Halving 6"));
        assert!(body.contains("DTSTART"));
        assert!(body.contains("20240420T000927Z"));
        // One-hour placeholder duration.
        assert!(body.contains("20240420T010927Z"));
        assert!(body.contains("UID:btc-halving-840000@example.com"));
    }

    #[test]
    fn empty_projection_still_yields_a_calendar() {
        let body = build_calendar(&[], Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(body.starts_with("BEGIN:VCALENDAR"));
        assert!(!body.contains("BEGIN:VEVENT"));
        assert!(body.trim_end().ends_with("END:VCALENDAR"));
    }
}
