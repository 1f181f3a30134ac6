//! Static source corpora used across harnesses.
//!
//! Each corpus is a small but realistic rendition of one source: the three
//! published sheet tabs, the public events feed, and the almanac file. The
//! sheet headers deliberately carry mixed case, accents, and stray spacing,
//! since that is what hand-maintained spreadsheets actually export.

/// Monthly-photo sheet: month key pre-formatted as `MM-YYYY`.
pub const PHOTOS_CSV: &str = "\
Month,Image,Title,Author,Location,Description short,Description long
08-2026,https://img.example.org/perseids.jpg,Perseids over the bay,M. Salvà,Cap Blanc,Meteor shower,\"Perseid maximum, shot from the cliffs\"
09-2026,https://img.example.org/moon.jpg,Harvest Moon,A. Pons,Serra Nord,Full moon rising,
,,skipped — no month key,,,,
08-2026,https://img.example.org/perseids-v2.jpg,Perseids over the bay (retake),M. Salvà,Cap Blanc,Meteor shower,
";

/// Special-dates sheet: day/month/year dates, code + title + time.
pub const SPECIAL_DATES_CSV: &str = "\
Date,Code,Key,Title,Time
12/08/2026,PER,,Perseid maximum,02:00
12/08/2026,,LUN,Moon at apogee,
13/13/2026,BAD,,Impossible month,
 7/09/2026,ECL,,Partial lunar eclipse,20:30
,,,,
";

/// Holidays sheet: two rows collide on Christmas, the later one wins.
pub const HOLIDAYS_CSV: &str = "\
Date,Name
01/01/2026,Cap d'Any
25/12/2026,Christmas
25/12/2026,Nadal
15/08/2026,
not-a-date,Stray row
";

/// Events feed: two well-formed blocks (one with a folded summary and a
/// TZID parameter), a block with no parseable start, and stray lines.
pub const EVENTS_ICS: &str = "BEGIN:VCALENDAR\r\n\
PRODID:-//astrocal tests//EN\r\n\
BEGIN:VEVENT\r\n\
SUMMARY:Star Party\r\n\
DTSTART:20260815T210000Z\r\n\
DTEND:20260815T235900Z\r\n\
LOCATION:Palma\r\n\
URL:https://example.org/star-party\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
SUMMARY:Observació\r\n\
\u{20}\u{20}pública\r\n\
DTSTART;TZID=Europe/Madrid:20260902T220000\r\n\
DESCRIPTION:Telescopes a la plaça\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
SUMMARY:No start stamp\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// The same feed as served through a CORS proxy that prepends chatter.
pub fn proxied_events_ics() -> String {
    format!("Title: public calendar\nFetched-By: proxy\n\n{EVENTS_ICS}")
}

/// Almanac file content for a few August days.
pub const ALMANAC_JSON: &str = r##"{
  "days": {
    "2026-08-12": {
      "moon": { "phase": "new moon", "illumination_percent": 1.0 },
      "day_color": { "color": "#000000" }
    },
    "2026-08-15": {
      "moon": { "phase": "waxing crescent", "illumination_percent": 8.5 }
    },
    "2026-09-07": {
      "moon": { "phase": "full moon", "illumination_percent": 99.6 }
    }
  }
}"##;

/// Write the almanac fixture to a temp file and return its guard.
pub fn almanac_file() -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("create almanac temp file");
    file.write_all(ALMANAC_JSON.as_bytes()).expect("write almanac fixture");
    file
}
