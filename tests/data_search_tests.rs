use name_trends::core::{NameLookup, NameSeries};
use name_trends::data::{parse_selection, search_names};

fn lookup() -> NameLookup {
    ["Kate", "Katherine", "Mark", "Annika", "Anna"]
        .into_iter()
        .map(|name| (name.to_owned(), NameSeries::from_pairs([(1900, 1)])))
        .collect()
}

#[test]
fn search_is_case_insensitive_substring() {
    let lookup = lookup();

    assert_eq!(search_names(&lookup, "kat"), ["Kate", "Katherine"]);
    assert_eq!(search_names(&lookup, "ANN"), ["Annika", "Anna"]);
    assert_eq!(search_names(&lookup, "k"), ["Kate", "Katherine", "Mark", "Annika"]);
    assert!(search_names(&lookup, "zz").is_empty());
}

#[test]
fn empty_search_matches_everything() {
    assert_eq!(search_names(&lookup(), "").len(), 5);
}

#[test]
fn selection_keeps_query_order_and_drops_unknown_tokens() {
    let lookup = lookup();

    assert_eq!(parse_selection(&lookup, "mark  kate nobody"), ["Mark", "Kate"]);
    assert_eq!(parse_selection(&lookup, "Anna anna ANNA Kate"), ["Anna", "Kate"]);
    assert!(parse_selection(&lookup, "   ").is_empty());
}

#[test]
fn accented_names_fold_case_beyond_ascii() {
    let mut lookup = lookup();
    lookup.insert("Élodie".to_owned(), NameSeries::from_pairs([(1990, 400)]));
    lookup.insert("Zoë".to_owned(), NameSeries::from_pairs([(2000, 250)]));

    assert_eq!(search_names(&lookup, "élodie"), ["Élodie"]);
    assert_eq!(parse_selection(&lookup, "élodie"), ["Élodie"]);
    assert_eq!(parse_selection(&lookup, "ZOË élodie"), ["Zoë", "Élodie"]);
}
