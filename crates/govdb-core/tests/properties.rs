//! Collection-wide properties of the pipeline, checked over generated data.

use govdb_core::prelude::{
    parse_json, query, sort_slice, to_delimited_text, to_json, Approach, Column, Country,
    Criteria, Enforcement, Investment, NameMatch, Policy, Region, Score, SortDirection, SortSpec,
};
use proptest::prelude::*;

const REGIONS: &[&str] = &["Europe", "Americas", "Asia", "Middle East", "Atlantis"];
const APPROACHES: &[&str] = &["comprehensive", "innovation-first", "state-led", "balanced"];
const NAMES: &[&str] = &["Åland", "Chile", "Côte d'Ivoire", "Deutschland", "Ísland", "Peru"];

// Any finite non-negative score, with round buckets mixed in so ties stay common.
fn arb_score() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u8..5).prop_map(|b| f64::from(b) * 10.0),
        prop::num::f64::POSITIVE
            | prop::num::f64::NORMAL
            | prop::num::f64::SUBNORMAL
            | prop::num::f64::ZERO,
        0.0..100.0f64,
    ]
}

fn arb_country() -> impl Strategy<Value = Country> {
    (
        prop::sample::select(NAMES),
        prop::sample::select(REGIONS),
        prop::sample::select(APPROACHES),
        (arb_score(), arb_score(), arb_score()),
        any::<bool>(),
        0u64..1_000_000_000_000,
        "[ -~]{0,12}",
    )
        .prop_map(|(name, region, approach, scores, active, total, penalties)| {
            let (overall, regulatory_readiness, innovation) = scores;
            Country {
                id: String::new(),
                name: name.to_string(),
                flag: String::new(),
                region: Region::from(region.to_string()),
                approach: Approach::from(approach.to_string()),
                policy: Policy {
                    key: format!("{name} act"),
                    status: "Active".into(),
                    philosophy: "x".into(),
                    enforcement: Enforcement { penalties, active },
                },
                investment: Investment {
                    total,
                    infrastructure: "compute".into(),
                },
                score: Score {
                    overall,
                    regulatory_readiness,
                    innovation,
                },
            }
        })
}

fn arb_countries() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(arb_country(), 0..24).prop_map(|mut v| {
        for (i, c) in v.iter_mut().enumerate() {
            c.id = format!("c{i}");
        }
        v
    })
}

fn arb_criteria() -> impl Strategy<Value = Criteria> {
    (
        prop::option::of(prop::sample::select(&["", " ", "a", "E", "land", "CH", "d "][..])),
        prop::option::of(prop::sample::select(
            &["", "all", "ALL", "Europe", "Asia", "asia", "Atlantis"][..],
        )),
        prop::option::of(prop::sample::select(
            &["all", "balanced", "Balanced", "state-led", "laissez-faire"][..],
        )),
        prop::option::of(0u8..5),
    )
        .prop_map(|(search, region, approach, min_bucket)| {
            let mut criteria = Criteria::new();
            criteria.search_text = search.map(str::to_string);
            criteria.region = region.map(str::to_string);
            criteria.approach = approach.map(str::to_string);
            if let Some(b) = min_bucket {
                criteria = criteria.filter(
                    format!("score.overall>={}", u32::from(b) * 10)
                        .parse()
                        .unwrap(),
                );
            }
            criteria
        })
}

fn satisfies(c: &Country, criteria: &Criteria) -> bool {
    let search_ok = criteria
        .search_text
        .as_deref()
        .map_or(true, |q| c.name_contains(q));
    let region_ok = match criteria.region.as_deref() {
        None | Some("") | Some("all") => true,
        Some(r) => c.region.as_str() == r,
    };
    let approach_ok = match criteria.approach.as_deref() {
        None | Some("") | Some("all") => true,
        Some(a) => c.approach.as_str() == a,
    };
    let filters_ok = criteria
        .extra_filters
        .iter()
        .all(|f| f.matches(c).unwrap());
    search_ok && region_ok && approach_ok && filters_ok
}

proptest! {
    #[test]
    fn query_returns_exactly_the_satisfying_records(
        records in arb_countries(),
        criteria in arb_criteria(),
    ) {
        let out = query(&records, &criteria).unwrap();
        let expected: Vec<&Country> = records.iter().filter(|c| satisfies(c, &criteria)).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn region_all_is_the_same_as_unset(records in arb_countries()) {
        let all = query(&records, &Criteria::new().region("all")).unwrap();
        let unset = query(&records, &Criteria::new()).unwrap();
        prop_assert_eq!(all, unset);
    }

    #[test]
    fn sort_is_stable_in_both_directions(records in arb_countries(), descending in any::<bool>()) {
        let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
        let spec = SortSpec::new("score.overall", direction).unwrap();
        let sorted = sort_slice(&records, &spec).unwrap();

        prop_assert_eq!(sorted.len(), records.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.score.overall == b.score.overall {
                // Ids are "c<input index>", so input order is recoverable.
                let ia: usize = a.id[1..].parse().unwrap();
                let ib: usize = b.id[1..].parse().unwrap();
                prop_assert!(ia < ib, "tie between {} and {} reordered", a.id, b.id);
            } else if descending {
                prop_assert!(a.score.overall > b.score.overall);
            } else {
                prop_assert!(a.score.overall < b.score.overall);
            }
        }
    }

    #[test]
    fn json_round_trip_is_identity(records in arb_countries()) {
        let json = to_json(&records).unwrap();
        prop_assert_eq!(parse_json(&json).unwrap(), records);
    }

    #[test]
    fn delimited_cells_parse_back_to_their_values(records in arb_countries()) {
        let columns = [
            Column::new("id", "id"),
            Column::new("penalties", "policy.enforcement.penalties"),
        ];
        let text = to_delimited_text(&records, &columns).unwrap();
        let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        prop_assert_eq!(rows.len(), records.len());
        for (row, c) in rows.iter().zip(&records) {
            prop_assert_eq!(&row[0], c.id.as_str());
            prop_assert_eq!(&row[1], c.policy.enforcement.penalties.as_str());
        }
    }
}
