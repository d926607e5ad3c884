use slint::{ModelRc, SharedString, VecModel};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use bibmap_core::{HomeSection, Place};

use super::types::{FacetOption, HomeCardData, HomeSectionData, PlaceDetail};

/// Wrap a list of strings as a Slint model
pub fn string_model(values: &[String]) -> ModelRc<SharedString> {
    let items: Vec<SharedString> = values.iter().map(|v| SharedString::from(v.as_str())).collect();
    ModelRc::from(Rc::new(VecModel::from(items)))
}

/// Checkbox rows for one facet, in display order
pub fn facet_option_model(options: &[(String, bool)]) -> ModelRc<FacetOption> {
    let items: Vec<FacetOption> = options
        .iter()
        .map(|(label, checked)| FacetOption {
            label: SharedString::from(label.as_str()),
            checked: *checked,
        })
        .collect();
    ModelRc::from(Rc::new(VecModel::from(items)))
}

/// Drawer contents for a place; empty fields read as "—"
pub fn place_detail(place: &Place) -> PlaceDetail {
    PlaceDetail {
        title: SharedString::from(place.name.as_str()),
        meta: SharedString::from(place.meta.as_str()),
        kind: SharedString::from(or_dash(&place.kind)),
        book: SharedString::from(or_dash(&place.book)),
        refs: string_model(&place.refs),
        tags: string_model(&place.tags),
    }
}

pub fn home_section_model(sections: &[HomeSection]) -> ModelRc<HomeSectionData> {
    let items: Vec<HomeSectionData> = sections
        .iter()
        .map(|section| {
            let cards: Vec<HomeCardData> = section
                .cards
                .iter()
                .map(|card| HomeCardData {
                    kicker: SharedString::from(card.kicker),
                    title: SharedString::from(card.title),
                    desc: SharedString::from(card.desc),
                })
                .collect();

            HomeSectionData {
                title: SharedString::from(section.title),
                cards: ModelRc::from(Rc::new(VecModel::from(cards))),
            }
        })
        .collect();
    ModelRc::from(Rc::new(VecModel::from(items)))
}

/// Status bar text after a filter pass
pub fn format_match_summary(shown: usize, total: usize) -> String {
    match (shown, total) {
        (_, 0) => "No places loaded".to_string(),
        (0, _) => "No matches".to_string(),
        (s, t) if s == t => format!("Showing all {} places", t),
        (s, t) => format!("Showing {} of {} places", s, t),
    }
}

pub fn format_zoom(zoom: f64) -> String {
    format!("z{:.0}", zoom)
}

/// Home page footer line for the current year
pub fn format_footer(year: i64) -> String {
    format!("© {} BibleMapped", year)
}

/// Gregorian year of the system clock, in UTC
pub fn current_year() -> i64 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();
    year_from_unix_days(seconds.div_euclid(86_400))
}

// Civil-from-days over 400-year eras of 146097 days, counted from 0000-03-01
fn year_from_unix_days(days: i64) -> i64 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let year = yoe + era * 400;
    // January and February belong to the next civil year
    if mp >= 10 {
        year + 1
    } else {
        year
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}
