//! Pure filter engine for the catalog and gallery
//!
//! Every predicate treats an empty or absent control as "pass", the active
//! predicates are AND-ed, and string comparisons are case-insensitive
//! throughout. Filtering preserves source order and is idempotent.

use crate::model::{GalleryItem, Package};

/// Default price ceiling for the slider control.
pub const MAX_PRICE: u64 = 200_000;
/// Price slider granularity.
pub const PRICE_STEP: u64 = 5_000;
/// Price slider lower bound.
pub const MIN_PRICE: u64 = 5_000;

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Active controls over the package listing.
#[derive(Clone, Debug, PartialEq)]
pub struct PackageFilter {
    /// Upper price bound (inclusive); `None` means no bound.
    pub price_ceiling: Option<u64>,
    /// Selected categories; membership is case-insensitive. Empty = all.
    pub categories: Vec<String>,
    pub region: Option<String>,
    pub sub_category: Option<String>,
    /// Case-insensitive substring over title OR location.
    pub query: String,
}

impl Default for PackageFilter {
    fn default() -> Self {
        Self {
            price_ceiling: None,
            categories: Vec::new(),
            region: None,
            sub_category: None,
            query: String::new(),
        }
    }
}

impl PackageFilter {
    /// Whether any control is active.
    pub fn is_active(&self) -> bool {
        self.price_ceiling.is_some()
            || !self.categories.is_empty()
            || self.region.is_some()
            || self.sub_category.is_some()
            || !self.query.trim().is_empty()
    }

    /// Reset every control (the "clear all filters" action).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Toggle a category in or out of the selected set.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self
            .categories
            .iter()
            .position(|c| eq_ignore_case(c, category))
        {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Whether `package` passes every active predicate.
    pub fn matches(&self, package: &Package) -> bool {
        if let Some(ceiling) = self.price_ceiling {
            if package.price > ceiling {
                return false;
            }
        }

        if !self.categories.is_empty()
            && !self
                .categories
                .iter()
                .any(|c| eq_ignore_case(c, &package.category))
        {
            return false;
        }

        if let Some(region) = &self.region {
            // Absent item field never matches a present filter
            match &package.region {
                Some(item_region) if eq_ignore_case(item_region, region) => {}
                _ => return false,
            }
        }

        if let Some(sub) = &self.sub_category {
            match &package.sub_category {
                Some(item_sub) if eq_ignore_case(item_sub, sub) => {}
                _ => return false,
            }
        }

        let query = self.query.trim();
        if !query.is_empty()
            && !contains_ignore_case(&package.title, query)
            && !contains_ignore_case(&package.location, query)
        {
            return false;
        }

        true
    }

    /// Filter `packages` preserving source order.
    pub fn apply<'a>(&self, packages: &'a [Package]) -> Vec<&'a Package> {
        packages.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Active controls over the gallery grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryFilter {
    pub year: Option<i32>,
    pub category: Option<String>,
    pub query: String,
}

impl GalleryFilter {
    pub fn matches(&self, item: &GalleryItem) -> bool {
        if let Some(year) = self.year {
            if item.year != year {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !eq_ignore_case(&item.category, category) {
                return false;
            }
        }

        let query = self.query.trim();
        if !query.is_empty()
            && !contains_ignore_case(&item.title, query)
            && !contains_ignore_case(&item.location, query)
        {
            return false;
        }

        true
    }

    pub fn apply<'a>(&self, items: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Distinct years present in the gallery, newest first, for the year picker.
pub fn gallery_years(items: &[GalleryItem]) -> Vec<i32> {
    let mut years: Vec<i32> = items.iter().map(|i| i.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(id: i64, title: &str, price: u64, category: &str) -> Package {
        Package {
            id,
            title: title.into(),
            description: String::new(),
            image: String::new(),
            price,
            rating: 4.0,
            location: "India".into(),
            region: None,
            category: category.into(),
            sub_category: None,
            duration: "3 Days".into(),
            featured: false,
        }
    }

    fn catalog() -> Vec<Package> {
        vec![
            pkg(1, "Goa Weekend", 12_000, "Weekend"),
            pkg(2, "Kerala Backwaters", 28_000, "Domestic"),
            {
                let mut p = pkg(3, "Bali Escape", 45_000, "International");
                p.region = Some("Asia".into());
                p.sub_category = Some("Beach".into());
                p.location = "Bali, Indonesia".into();
                p
            },
            {
                let mut p = pkg(4, "Swiss Alps", 150_000, "International");
                p.region = Some("Europe".into());
                p
            },
        ]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let packages = catalog();
        let filter = PackageFilter::default();

        let result = filter.apply(&packages);
        assert_eq!(result.len(), packages.len());
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let packages = catalog();
        let filter = PackageFilter {
            price_ceiling: Some(28_000),
            ..Default::default()
        };

        let ids: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn category_membership_is_case_insensitive() {
        let packages = catalog();
        let filter = PackageFilter {
            categories: vec!["international".into()],
            ..Default::default()
        };

        let ids: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn multiple_categories_are_a_union() {
        let packages = catalog();
        let filter = PackageFilter {
            categories: vec!["Weekend".into(), "Domestic".into()],
            ..Default::default()
        };

        let ids: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn absent_region_never_matches_a_present_filter() {
        let packages = catalog();
        let filter = PackageFilter {
            region: Some("Asia".into()),
            ..Default::default()
        };

        let ids: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn query_matches_title_or_location() {
        let packages = catalog();

        let by_title = PackageFilter {
            query: "kerala".into(),
            ..Default::default()
        };
        assert_eq!(by_title.apply(&packages).len(), 1);

        let by_location = PackageFilter {
            query: "indonesia".into(),
            ..Default::default()
        };
        assert_eq!(by_location.apply(&packages)[0].id, 3);
    }

    #[test]
    fn predicates_conjoin() {
        let packages = catalog();
        let filter = PackageFilter {
            price_ceiling: Some(50_000),
            categories: vec!["International".into()],
            region: Some("asia".into()),
            sub_category: Some("beach".into()),
            query: "bali".into(),
        };

        let ids: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn filtering_is_order_stable_and_idempotent() {
        let packages = catalog();
        let filter = PackageFilter {
            price_ceiling: Some(200_000),
            ..Default::default()
        };

        let once: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();
        let twice: Vec<i64> = filter.apply(&packages).iter().map(|p| p.id).collect();

        assert_eq!(once, twice);
        assert!(once.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn toggle_category_adds_and_removes() {
        let mut filter = PackageFilter::default();

        filter.toggle_category("Weekend");
        assert_eq!(filter.categories, vec!["Weekend".to_string()]);

        // Case-insensitive removal
        filter.toggle_category("WEEKEND");
        assert!(filter.categories.is_empty());
    }

    #[test]
    fn clear_resets_every_control() {
        let mut filter = PackageFilter {
            price_ceiling: Some(10_000),
            categories: vec!["Weekend".into()],
            region: Some("Asia".into()),
            sub_category: Some("Beach".into()),
            query: "goa".into(),
        };
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter, PackageFilter::default());
    }

    fn photo(id: i64, title: &str, year: i32, category: &str) -> GalleryItem {
        GalleryItem {
            id,
            title: title.into(),
            image: String::new(),
            year,
            category: category.into(),
            location: String::new(),
        }
    }

    #[test]
    fn gallery_filter_by_year_and_category() {
        let items = vec![
            photo(1, "Taj Mahal", 2024, "Heritage"),
            photo(2, "Santorini", 2025, "Beach"),
            photo(3, "Jaipur", 2024, "heritage"),
        ];

        let filter = GalleryFilter {
            year: Some(2024),
            category: Some("Heritage".into()),
            query: String::new(),
        };

        let ids: Vec<i64> = filter.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn gallery_years_are_distinct_newest_first() {
        let items = vec![
            photo(1, "a", 2024, ""),
            photo(2, "b", 2025, ""),
            photo(3, "c", 2024, ""),
        ];

        assert_eq!(gallery_years(&items), vec![2025, 2024]);
    }
}
