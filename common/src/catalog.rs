//! Search, category filtering and sorting for the catalog collections.
//!
//! The three content types (videos, courses, projects) share one pipeline:
//! an optional case-insensitive text search over title/description/tags,
//! an exact-match category restriction, then an optional sort. The pipeline
//! is pure (the input slice is never mutated) and never fails: malformed or
//! absent per-record data degrades to a zero default for sorting purposes.

use serde::{Deserialize, Serialize};

/// The field surface the filter/sort pipeline operates on. Every catalog
/// variant exposes the shared searchable fields; the numeric accessors
/// default to `None` for variants that do not carry them, which makes the
/// corresponding sorts a stable no-op (all keys parse to zero).
pub trait CatalogRecord {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> Option<&str>;
    fn tags(&self) -> &[String];

    /// Human view-count string ("12K"). Videos only.
    fn views(&self) -> Option<&str> {
        None
    }

    /// Star rating. Courses only.
    fn rating(&self) -> Option<f64> {
        None
    }

    /// Comma-grouped enrollment string ("12,345"). Courses only.
    fn students(&self) -> Option<&str> {
        None
    }
}

/// Ordering policy applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Views,
    Rating,
    Students,
    Recent,
}

impl SortKey {
    /// Maps a sort-select value to a key. Unrecognized values yield `None`,
    /// which the pipeline treats as "leave the order unchanged", not as an
    /// error.
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "views" => Some(SortKey::Views),
            "rating" => Some(SortKey::Rating),
            "students" => Some(SortKey::Students),
            "recent" => Some(SortKey::Recent),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Views => "views",
            SortKey::Rating => "rating",
            SortKey::Students => "students",
            SortKey::Recent => "recent",
        }
    }
}

/// The complete filter state of one catalog view. An empty `search` or
/// `category` means "no restriction"; `sort: None` keeps storage order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: String,
    pub sort: Option<SortKey>,
}

impl FilterCriteria {
    /// Criteria with no search and no category, only a sort. This is the
    /// reset state of a catalog page (each page picks its own default key).
    pub fn with_sort(sort: SortKey) -> Self {
        FilterCriteria {
            sort: Some(sort),
            ..Default::default()
        }
    }
}

/// Applies search, category and sort in that order and returns the records
/// to display. Both filters are conjunctive. Sorting is stable, so records
/// with equal keys keep their post-filter relative order, which also makes
/// repeated calls with identical inputs return identical output.
pub fn filter_items<T>(records: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: CatalogRecord + Clone,
{
    let mut filtered: Vec<T> = records
        .iter()
        .filter(|r| matches_search(*r, &criteria.search))
        .filter(|r| matches_category(*r, &criteria.category))
        .cloned()
        .collect();

    match criteria.sort {
        Some(SortKey::Views) => {
            filtered.sort_by(|a, b| parse_views(b.views()).cmp(&parse_views(a.views())));
        }
        Some(SortKey::Rating) => {
            filtered.sort_by(|a, b| {
                b.rating()
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating().unwrap_or(0.0))
            });
        }
        Some(SortKey::Students) => {
            filtered.sort_by(|a, b| parse_students(b.students()).cmp(&parse_students(a.students())));
        }
        // "Recent" inverts whatever order survived filtering: collections
        // are stored oldest-first, so the reversal shows newest first.
        Some(SortKey::Recent) => filtered.reverse(),
        None => {}
    }

    filtered
}

/// Distinct non-empty category labels in first-seen order.
pub fn categories<T: CatalogRecord>(records: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if let Some(category) = record.category() {
            if !category.is_empty() && !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
    }
    seen
}

fn matches_search<T: CatalogRecord>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record.title().to_lowercase().contains(&term)
        || record.description().to_lowercase().contains(&term)
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&term))
}

fn matches_category<T: CatalogRecord>(record: &T, category: &str) -> bool {
    category.is_empty() || record.category() == Some(category)
}

/// "12K" -> 12000, "870" -> 870. Anything that does not parse as an
/// integer after stripping the suffix (including an absent field) is 0.
fn parse_views(views: Option<&str>) -> i64 {
    let raw = match views {
        Some(v) => v,
        None => return 0,
    };
    match raw.strip_suffix('K') {
        Some(thousands) => thousands.parse::<i64>().map(|n| n * 1000).unwrap_or(0),
        None => raw.parse().unwrap_or(0),
    }
}

/// "12,345" -> 12345. Absent or unparseable -> 0.
fn parse_students(students: Option<&str>) -> i64 {
    students
        .map(|s| s.replace(',', ""))
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Project, Video};

    fn video(id: u32, title: &str, views: Option<&str>) -> Video {
        Video {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            category: None,
            tags: Vec::new(),
            url: None,
            thumbnail: None,
            duration: Some("14:02".to_string()),
            views: views.map(str::to_string),
        }
    }

    fn course(id: u32, rating: Option<f64>, students: Option<&str>) -> Course {
        Course {
            id,
            title: format!("Course {}", id),
            description: String::new(),
            category: Some("DevOps".to_string()),
            tags: Vec::new(),
            url: None,
            thumbnail: None,
            rating,
            students: students.map(str::to_string),
            price: None,
        }
    }

    fn project(id: u32, category: Option<&str>) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            description: String::new(),
            category: category.map(str::to_string),
            tags: Vec::new(),
            url: None,
            thumbnail: None,
            client: None,
            completion_date: None,
            technologies: Vec::new(),
        }
    }

    fn ids<T>(records: &[T], id_of: impl Fn(&T) -> u32) -> Vec<u32> {
        records.iter().map(id_of).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let records = vec![
            video(1, "Docker Basics", Some("5K")),
            video(2, "K8s Deep Dive", Some("12K")),
        ];
        let out = filter_items(&records, &FilterCriteria::default());
        assert_eq!(out, records);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let records = vec![
            video(1, "Docker Basics", Some("5K")),
            video(2, "K8s Deep Dive", Some("12K")),
        ];
        let criteria = FilterCriteria {
            search: "docker".to_string(),
            ..Default::default()
        };
        let out = filter_items(&records, &criteria);
        assert_eq!(ids(&out, |v| v.id), vec![1]);
    }

    #[test]
    fn search_matches_description_and_tags() {
        let mut by_description = video(1, "Pipelines", None);
        by_description.description = "GitHub Actions end to end".to_string();
        let mut by_tag = video(2, "Shipping", None);
        by_tag.tags = vec!["github-actions".to_string(), "ci".to_string()];
        let miss = video(3, "Terraform", None);

        let criteria = FilterCriteria {
            search: "github".to_string(),
            ..Default::default()
        };
        let out = filter_items(&[by_description, by_tag, miss], &criteria);
        assert_eq!(ids(&out, |v| v.id), vec![1, 2]);
    }

    #[test]
    fn whitespace_search_is_a_literal_filter() {
        // Only the empty string disables the search; " " must be treated
        // as a real substring query.
        let mut spaced = video(1, "Docker Basics", None);
        spaced.description = String::new();
        let mut unspaced = video(2, "Docker", None);
        unspaced.description = String::new();

        let criteria = FilterCriteria {
            search: " ".to_string(),
            ..Default::default()
        };
        let out = filter_items(&[spaced, unspaced], &criteria);
        assert_eq!(ids(&out, |v| v.id), vec![1]);
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let records = vec![
            project(1, Some("CI/CD")),
            project(2, Some("ci/cd")),
            project(3, None),
        ];
        let criteria = FilterCriteria {
            category: "CI/CD".to_string(),
            ..Default::default()
        };
        let out = filter_items(&records, &criteria);
        assert_eq!(ids(&out, |p| p.id), vec![1]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let mut a = project(1, Some("Cloud"));
        a.title = "AWS migration".to_string();
        let b = project(2, Some("Cloud"));
        let mut c = project(3, Some("Monitoring"));
        c.title = "AWS dashboards".to_string();

        let criteria = FilterCriteria {
            search: "aws".to_string(),
            category: "Cloud".to_string(),
            ..Default::default()
        };
        // Record 2 matches the category but not the search, record 3 the
        // search but not the category; neither may leak through.
        let out = filter_items(&[a, b, c], &criteria);
        assert_eq!(ids(&out, |p| p.id), vec![1]);
    }

    #[test]
    fn views_sort_descends_with_k_suffix_expanded() {
        let records = vec![
            video(1, "Docker Basics", Some("5K")),
            video(2, "K8s Deep Dive", Some("12K")),
        ];
        let out = filter_items(&records, &FilterCriteria::with_sort(SortKey::Views));
        assert_eq!(ids(&out, |v| v.id), vec![2, 1]);
    }

    #[test]
    fn unparseable_views_sink_to_zero() {
        let records = vec![
            video(1, "a", None),
            video(2, "b", Some("870")),
            video(3, "c", Some("lots")),
            video(4, "d", Some("2K")),
        ];
        let out = filter_items(&records, &FilterCriteria::with_sort(SortKey::Views));
        // The two zero-valued records keep their pre-sort relative order.
        assert_eq!(ids(&out, |v| v.id), vec![4, 2, 1, 3]);
    }

    #[test]
    fn rating_sort_descends_with_absent_as_zero() {
        let records = vec![
            course(1, Some(4.5), None),
            course(2, None, None),
            course(3, Some(4.8), None),
        ];
        let out = filter_items(&records, &FilterCriteria::with_sort(SortKey::Rating));
        assert_eq!(ids(&out, |c| c.id), vec![3, 1, 2]);
    }

    #[test]
    fn students_sort_strips_grouping_commas() {
        let records = vec![
            course(1, None, Some("9,876")),
            course(2, None, Some("12,345")),
            course(3, None, Some("987")),
        ];
        let out = filter_items(&records, &FilterCriteria::with_sort(SortKey::Students));
        assert_eq!(ids(&out, |c| c.id), vec![2, 1, 3]);
    }

    #[test]
    fn absent_students_ties_with_explicit_zero_stably() {
        let records = vec![course(1, None, None), course(2, None, Some("0"))];
        let out = filter_items(&records, &FilterCriteria::with_sort(SortKey::Students));
        assert_eq!(ids(&out, |c| c.id), vec![1, 2]);
    }

    #[test]
    fn recent_reverses_the_filtered_order() {
        let records = vec![video(1, "a", None), video(2, "b", None), video(3, "c", None)];
        let out = filter_items(&records, &FilterCriteria::with_sort(SortKey::Recent));
        assert_eq!(ids(&out, |v| v.id), vec![3, 2, 1]);
    }

    #[test]
    fn refiltering_with_empty_criteria_is_a_noop() {
        let records = vec![
            video(1, "Docker Basics", Some("5K")),
            video(2, "K8s Deep Dive", Some("12K")),
            video(3, "Docker Compose", Some("3K")),
        ];
        let criteria = FilterCriteria {
            search: "docker".to_string(),
            sort: Some(SortKey::Views),
            ..Default::default()
        };
        let once = filter_items(&records, &criteria);
        let twice = filter_items(&once, &FilterCriteria::default());
        assert_eq!(once, twice);
    }

    #[test]
    fn output_is_deterministic_across_calls() {
        let records = vec![
            video(1, "a", Some("2K")),
            video(2, "b", Some("2K")),
            video(3, "c", Some("2K")),
        ];
        let criteria = FilterCriteria::with_sort(SortKey::Views);
        assert_eq!(
            filter_items(&records, &criteria),
            filter_items(&records, &criteria)
        );
    }

    #[test]
    fn input_collection_is_untouched() {
        let records = vec![video(1, "a", Some("1K")), video(2, "b", Some("9K"))];
        let before = records.clone();
        let _ = filter_items(&records, &FilterCriteria::with_sort(SortKey::Views));
        assert_eq!(records, before);
    }

    #[test]
    fn categories_dedupes_and_skips_absent() {
        let records = vec![
            project(1, Some("CI/CD")),
            project(2, Some("CI/CD")),
            project(3, None),
        ];
        assert_eq!(categories(&records), vec!["CI/CD".to_string()]);
    }

    #[test]
    fn categories_keeps_first_seen_order_and_skips_empty() {
        let records = vec![
            project(1, Some("Cloud")),
            project(2, Some("")),
            project(3, Some("Monitoring")),
            project(4, Some("Cloud")),
        ];
        assert_eq!(
            categories(&records),
            vec!["Cloud".to_string(), "Monitoring".to_string()]
        );
    }

    #[test]
    fn every_extracted_category_exists_on_some_record() {
        let records = vec![
            project(1, Some("Cloud")),
            project(2, Some("Monitoring")),
            project(3, None),
        ];
        for category in categories(&records) {
            assert!(!category.is_empty());
            assert!(records.iter().any(|r| r.category.as_deref() == Some(&*category)));
        }
    }

    #[test]
    fn unknown_sort_value_parses_to_none() {
        assert_eq!(SortKey::parse("recent"), Some(SortKey::Recent));
        assert_eq!(SortKey::parse("views"), Some(SortKey::Views));
        assert_eq!(SortKey::parse("alphabetical"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn sort_key_round_trips_through_its_select_value() {
        for key in [
            SortKey::Views,
            SortKey::Rating,
            SortKey::Students,
            SortKey::Recent,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        // The select wiring maps an optional key by value.
        assert_eq!(Some(SortKey::Rating).map(SortKey::as_str), Some("rating"));
        assert_eq!(None::<SortKey>.map(SortKey::as_str).unwrap_or(""), "");
    }

    #[test]
    fn views_parsing_edge_cases() {
        assert_eq!(parse_views(Some("12K")), 12_000);
        assert_eq!(parse_views(Some("870")), 870);
        // A fractional thousands string fails the integer parse entirely;
        // it is ranked as zero rather than rounded.
        assert_eq!(parse_views(Some("1.2K")), 0);
        assert_eq!(parse_views(Some("")), 0);
        assert_eq!(parse_views(None), 0);
    }

    #[test]
    fn students_parsing_edge_cases() {
        assert_eq!(parse_students(Some("12,345")), 12_345);
        assert_eq!(parse_students(Some("987")), 987);
        assert_eq!(parse_students(Some("n/a")), 0);
        assert_eq!(parse_students(None), 0);
    }
}
