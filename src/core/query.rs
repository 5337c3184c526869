//! Query-string rules for the BFF endpoints.
//!
//! Parameters the BFF should not see are never pushed, as opposed to being
//! sent empty: the BFF treats `gender=` and a missing `gender` differently.

use crate::domain::params::{PoultriesPagination, SearchParams};
use crate::domain::ports::Query;
use crate::utils::error::Result;

/// Drops blank entries and comma-joins the rest. `None` when nothing is left.
pub fn join_filter<S: AsRef<str>>(values: &[S]) -> Option<String> {
    let kept: Vec<&str> = values
        .iter()
        .map(AsRef::as_ref)
        .filter(|v| !v.is_empty())
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(","))
    }
}

fn push_opt(query: &mut Query, name: &'static str, value: Option<String>) {
    if let Some(value) = value {
        query.push((name, value));
    }
}

pub fn breeders_query(keyword: &str) -> Query {
    vec![("keyword", keyword.to_string())]
}

pub fn breeder_poultries_query(pagination: Option<&PoultriesPagination>) -> Result<Query> {
    let mut query = Query::new();
    if let Some(pagination) = pagination {
        query.push(("pagination", serde_json::to_string(pagination)?));
    }
    Ok(query)
}

pub fn home_query(user_id: Option<&str>) -> Query {
    let mut query = Query::new();
    push_opt(&mut query, "userId", user_id.map(str::to_string));
    query
}

pub fn search_query(params: &SearchParams) -> Result<Query> {
    let mut query = Query::new();

    push_opt(&mut query, "gender", join_filter(&params.gender));
    push_opt(&mut query, "type", join_filter(&params.kind));
    push_opt(&mut query, "tail", join_filter(&params.tail));
    push_opt(&mut query, "dewlap", join_filter(&params.dewlap));
    push_opt(&mut query, "crest", join_filter(&params.crest));
    push_opt(&mut query, "keyword", params.keyword.clone());
    push_opt(
        &mut query,
        "genderCategory",
        join_filter(&params.gender_category),
    );

    if let Some(prices) = &params.prices {
        query.push(("prices", serde_json::to_string(prices)?));
    }

    push_opt(&mut query, "sort", params.sort.clone());
    push_opt(
        &mut query,
        "favoriteExternalId",
        params
            .favorite_external_id
            .clone()
            .filter(|id| !id.is_empty()),
    );
    query.push(("page", params.page.to_string()));

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::PriceRange;

    fn value<'a>(query: &'a Query, name: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_join_filter_drops_blanks() {
        assert_eq!(join_filter(&["", "M", ""]), Some("M".to_string()));
        assert_eq!(join_filter(&["M", "F"]), Some("M,F".to_string()));
        assert_eq!(join_filter::<&str>(&[]), None);
        assert_eq!(join_filter(&["", ""]), None);
    }

    #[test]
    fn test_search_query_omits_empty_filters() {
        let params = SearchParams::new().gender(["", "M", ""]).crest([""]);
        let query = search_query(&params).unwrap();

        assert_eq!(value(&query, "gender"), Some("M"));
        assert_eq!(value(&query, "crest"), None);
        assert_eq!(value(&query, "type"), None);
        assert_eq!(value(&query, "genderCategory"), None);
        assert_eq!(value(&query, "page"), Some("0"));
    }

    #[test]
    fn test_search_query_full() {
        let params = SearchParams::new()
            .gender(["M"])
            .kind(["INDIAN_GIANT", "SHAMO"])
            .tail(["LONG"])
            .dewlap(["DOUBLE"])
            .crest(["PEA"])
            .gender_category(["ROOSTER"])
            .keyword("galo")
            .prices(PriceRange::new(Some(10), Some(50)))
            .sort("MIN_TO_MAX")
            .page(3)
            .favorite_external_id("user-42");

        let query = search_query(&params).unwrap();
        let names: Vec<&str> = query.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "gender",
                "type",
                "tail",
                "dewlap",
                "crest",
                "keyword",
                "genderCategory",
                "prices",
                "sort",
                "favoriteExternalId",
                "page"
            ]
        );
        assert_eq!(value(&query, "type"), Some("INDIAN_GIANT,SHAMO"));
        assert_eq!(value(&query, "prices"), Some(r#"{"min":10,"max":50}"#));
        assert_eq!(value(&query, "favoriteExternalId"), Some("user-42"));
        assert_eq!(value(&query, "page"), Some("3"));
    }

    #[test]
    fn test_favorite_external_id_only_when_non_empty() {
        let query = search_query(&SearchParams::new().favorite_external_id("")).unwrap();
        assert_eq!(value(&query, "favoriteExternalId"), None);
    }

    #[test]
    fn test_prices_serialization_skips_missing_bounds() {
        let query =
            search_query(&SearchParams::new().prices(PriceRange::new(None, Some(90)))).unwrap();
        assert_eq!(value(&query, "prices"), Some(r#"{"max":90}"#));
    }

    #[test]
    fn test_prices_keep_fractional_bounds() {
        let prices = PriceRange::from_f64(Some(99.9), Some(150.5)).unwrap();
        let query = search_query(&SearchParams::new().prices(prices)).unwrap();
        assert_eq!(value(&query, "prices"), Some(r#"{"min":99.9,"max":150.5}"#));
    }

    #[test]
    fn test_pagination_json() {
        let pagination = PoultriesPagination::default().for_sale(1).females(2);
        let query = breeder_poultries_query(Some(&pagination)).unwrap();
        assert_eq!(
            value(&query, "pagination"),
            Some(r#"{"forSale":1,"females":2}"#)
        );

        assert!(breeder_poultries_query(None).unwrap().is_empty());
    }

    #[test]
    fn test_breeders_and_home_queries() {
        assert_eq!(breeders_query(""), vec![("keyword", String::new())]);
        assert_eq!(breeders_query("sítio"), vec![("keyword", "sítio".to_string())]);
        assert!(home_query(None).is_empty());
        assert_eq!(home_query(Some("u-1")), vec![("userId", "u-1".to_string())]);
    }
}
