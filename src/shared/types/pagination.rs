//! Page windowing over filtered collections
//!
//! [`Paginator`] wraps any iterator without evaluating it, so filters applied
//! upstream (`Iterator::filter`, query adapters, ...) are still part of the
//! source when the page is cut. [`Paginator::get_range`] forces the source
//! exactly once, orders it with a stable sort and slices one page out of it.
//! [`PageWindow::paginate`] then projects the page into its output shape.
//!
//! ```ignore
//! let page = Paginator::from(doctors.into_iter().filter(|d| d.is_active))
//!     .get_range(offset, limit, |d| d.last_name.clone(), 1)
//!     .paginate(DoctorDto::from);
//! ```
//!
//! Invalid numeric input is never an error: offsets below 1 become 1 and
//! limits below 1 fall back to the default page size.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

/// Page size applied when the caller supplies no usable limit.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Pages are numbered from 1.
pub const FIRST_PAGE: u64 = 1;

// ── Direction ──────────────────────────────────────────────────────

/// Resolved sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Map the raw wire value onto a direction.
    ///
    /// Only exactly `1` means ascending. `-1`, `0` and every other value
    /// sort descending; existing clients depend on this mapping.
    pub const fn from_raw(raw: i32) -> Self {
        if raw == 1 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

impl From<i32> for SortDirection {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

// ── Errors ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// The named sort field has no key extractor on the entity.
    #[error("Unknown sort field '{field}' (expected one of: {})", .allowed.join(", "))]
    UnknownSortKey {
        field: String,
        allowed: &'static [&'static str],
    },
}

// ── Sort keys ──────────────────────────────────────────────────────

/// Comparable key extracted from an entity for one named field.
///
/// All keys of a single field share a variant, so the cross-variant order
/// only matters for [`SortKey::Missing`], which sorts before any value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    #[default]
    Missing,
    Int(i64),
    Text(String),
    Time(DateTime<Utc>),
    Date(NaiveDate),
    Bool(bool),
}

impl SortKey {
    /// Case-insensitive text key.
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }
}

impl From<i32> for SortKey {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for SortKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<DateTime<Utc>> for SortKey {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDate> for SortKey {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<bool> for SortKey {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<SortKey>> From<Option<T>> for SortKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Entities that can be ordered by a field name taken from a request.
pub trait Sortable {
    /// Field names accepted by [`Sortable::sort_key`], in wire (camelCase) form.
    const SORT_FIELDS: &'static [&'static str];

    /// Field used when the request names none.
    const DEFAULT_SORT_FIELD: &'static str = "id";

    /// Key for `field`, or `None` if the entity has no such field.
    fn sort_key(&self, field: &str) -> Option<SortKey>;
}

/// Resolve a requested field name to its canonical spelling.
pub fn resolve_sort_field<T: Sortable>(field: &str) -> Result<&'static str, PagingError> {
    T::SORT_FIELDS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(field.trim()))
        .ok_or_else(|| PagingError::UnknownSortKey {
            field: field.to_string(),
            allowed: T::SORT_FIELDS,
        })
}

// ── Request ────────────────────────────────────────────────────────

/// Raw paging input as received from a caller, before clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingRequest {
    /// 1-based page number.
    pub offset: i64,
    /// Page size; `None` means "use the default".
    pub limit: Option<i64>,
    /// Named sort field; `None` means the entity default.
    pub sort_by: Option<String>,
    /// Raw direction, see [`SortDirection::from_raw`].
    pub sort_direction: i32,
}

impl PagingRequest {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: i32) -> Self {
        self.sort_by = Some(field.into());
        self.sort_direction = direction;
        self
    }

    pub fn direction(&self) -> SortDirection {
        SortDirection::from_raw(self.sort_direction)
    }
}

impl Default for PagingRequest {
    fn default() -> Self {
        Self {
            offset: 1,
            limit: None,
            sort_by: None,
            sort_direction: 1,
        }
    }
}

/// Offsets below 1 are served as the first page.
pub fn clamp_offset(offset: i64) -> u64 {
    u64::try_from(offset)
        .ok()
        .filter(|page| *page >= FIRST_PAGE)
        .unwrap_or(FIRST_PAGE)
}

/// Limits below 1 fall back to `default_limit` (itself at least 1).
pub fn clamp_limit(limit: i64, default_limit: u64) -> u64 {
    u64::try_from(limit)
        .ok()
        .filter(|size| *size >= 1)
        .unwrap_or_else(|| default_limit.max(1))
}

// ── Page metadata & output ─────────────────────────────────────────

/// Metadata of one served page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PageMeta {
    /// A zero `page_size` is treated as 1.
    pub fn new(current_page: u64, page_size: u64, total_items: u64) -> Self {
        let page_size = page_size.max(1);
        Self {
            current_page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
        }
    }

    /// Number of source elements before this page.
    pub fn skip(&self) -> u64 {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }

    /// Number of items this page holds.
    pub fn expected_len(&self) -> u64 {
        self.total_items
            .saturating_sub(self.skip())
            .min(self.page_size)
    }

    pub fn is_beyond_end(&self) -> bool {
        self.current_page > self.total_pages
    }
}

/// One page of results, serialized as
/// `{ currentPage, pageSize, totalItems, totalPages, items }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub items: Vec<T>,
}

impl<T> Paged<T> {
    fn from_parts(meta: PageMeta, items: Vec<T>) -> Self {
        Self {
            current_page: meta.current_page,
            page_size: meta.page_size,
            total_items: meta.total_items,
            total_pages: meta.total_pages,
            items,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

// ── Paginator ──────────────────────────────────────────────────────

/// Lazy page builder over a source collection.
///
/// Nothing is evaluated until one of the `get_range` variants runs.
#[derive(Debug, Clone)]
pub struct Paginator<I> {
    source: Option<I>,
    default_limit: u64,
}

impl<I> Paginator<I> {
    pub fn new(source: I) -> Self {
        Self::from_option(Some(source))
    }

    /// A missing source behaves as an empty collection.
    pub fn from_option(source: Option<I>) -> Self {
        Self {
            source,
            default_limit: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size used when the requested limit is below 1.
    pub fn with_default_limit(mut self, default_limit: u64) -> Self {
        self.default_limit = default_limit.max(1);
        self
    }
}

impl<T> Paginator<std::iter::Empty<T>> {
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<I> From<I> for Paginator<I> {
    fn from(source: I) -> Self {
        Self::new(source)
    }
}

impl<I: IntoIterator> Paginator<I> {
    /// Order the whole source by `key` and cut page `offset` of size `limit`.
    ///
    /// Equal keys keep their source order in both directions, so repeated
    /// calls over the same source return identical pages.
    pub fn get_range<K, F>(
        self,
        offset: i64,
        limit: i64,
        key: F,
        direction: i32,
    ) -> PageWindow<I::Item>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        let rows: Vec<I::Item> = self.source.into_iter().flatten().collect();
        cut_window(rows, offset, limit, self.default_limit, key, direction)
    }
}

impl<I> Paginator<I>
where
    I: IntoIterator,
    I::Item: Sortable,
{
    /// [`Paginator::get_range`] keyed by a field name.
    ///
    /// The field is resolved before the source is touched; an unknown name
    /// fails fast and nothing is evaluated.
    pub fn get_range_by(
        self,
        offset: i64,
        limit: i64,
        field: &str,
        direction: i32,
    ) -> Result<PageWindow<I::Item>, PagingError> {
        let field = resolve_sort_field::<I::Item>(field)?;
        Ok(self.get_range(
            offset,
            limit,
            |row| row.sort_key(field).unwrap_or_default(),
            direction,
        ))
    }
}

impl<I, T, E> Paginator<I>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    /// [`Paginator::get_range`] over a fallible source.
    ///
    /// The first upstream error is returned unchanged and no page is built.
    pub fn try_get_range<K, F>(
        self,
        offset: i64,
        limit: i64,
        key: F,
        direction: i32,
    ) -> Result<PageWindow<T>, E>
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        let rows = self
            .source
            .into_iter()
            .flatten()
            .collect::<Result<Vec<T>, E>>()?;
        Ok(cut_window(
            rows,
            offset,
            limit,
            self.default_limit,
            key,
            direction,
        ))
    }
}

fn cut_window<T, K, F>(
    mut rows: Vec<T>,
    offset: i64,
    limit: i64,
    default_limit: u64,
    mut key: F,
    direction: i32,
) -> PageWindow<T>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    let current_page = clamp_offset(offset);
    let page_size = clamp_limit(limit, default_limit);

    // Both sorts are stable.
    match SortDirection::from_raw(direction) {
        SortDirection::Ascending => rows.sort_by_cached_key(|row| key(row)),
        SortDirection::Descending => rows.sort_by_cached_key(|row| Reverse(key(row))),
    }

    let total_items = u64::try_from(rows.len()).unwrap_or(u64::MAX);
    let meta = PageMeta::new(current_page, page_size, total_items);

    let skip = usize::try_from(meta.skip()).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);
    let items: Vec<T> = rows.into_iter().skip(skip).take(take).collect();

    PageWindow { items, meta }
}

// ── Window ─────────────────────────────────────────────────────────

/// A cut page waiting to be projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<T> {
    items: Vec<T>,
    meta: PageMeta,
}

impl<T> PageWindow<T> {
    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Project every item, keeping order and metadata.
    pub fn paginate<R, F>(self, project: F) -> Paged<R>
    where
        F: FnMut(T) -> R,
    {
        let items = self.items.into_iter().map(project).collect();
        Paged::from_parts(self.meta, items)
    }

    /// Fallible projection; one failing item fails the whole page.
    pub fn try_paginate<R, E, F>(self, project: F) -> Result<Paged<R>, E>
    where
        F: FnMut(T) -> Result<R, E>,
    {
        let items = self
            .items
            .into_iter()
            .map(project)
            .collect::<Result<Vec<R>, E>>()?;
        Ok(Paged::from_parts(self.meta, items))
    }

    pub fn into_paged(self) -> Paged<T> {
        self.paginate(|item| item)
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: i32,
        group: &'static str,
    }

    impl Sortable for Row {
        const SORT_FIELDS: &'static [&'static str] = &["id", "group"];

        fn sort_key(&self, field: &str) -> Option<SortKey> {
            match field {
                "id" => Some(self.id.into()),
                "group" => Some(SortKey::text(self.group)),
                _ => None,
            }
        }
    }

    fn ids(n: i32) -> Vec<i32> {
        (1..=n).collect()
    }

    fn page_ids(page: &Paged<i32>) -> Vec<i32> {
        page.items.clone()
    }

    #[test]
    fn first_page_of_twenty_five() {
        let page = Paginator::from(ids(25))
            .get_range(1, 10, |id| *id, 1)
            .into_paged();

        assert_eq!(page_ids(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn last_page_is_partial() {
        let page = Paginator::from(ids(25))
            .get_range(3, 10, |id| *id, 1)
            .into_paged();

        assert_eq!(page_ids(&page), vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_beyond_end_is_empty_but_described() {
        let page = Paginator::from(ids(25))
            .get_range(4, 10, |id| *id, 1)
            .into_paged();

        assert!(page.items.is_empty());
        assert_eq!(page.current_page, 4);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.meta().is_beyond_end());
    }

    #[test]
    fn empty_source_has_zero_pages() {
        for (offset, limit) in [(1, 10), (5, 1), (-3, 0), (1, 1000)] {
            let page = Paginator::from(Vec::<i32>::new())
                .get_range(offset, limit, |id| *id, 1)
                .into_paged();
            assert!(page.items.is_empty());
            assert_eq!(page.total_items, 0);
            assert_eq!(page.total_pages, 0);
        }
    }

    #[test]
    fn missing_source_is_treated_as_empty() {
        let page = Paginator::<Vec<i32>>::from_option(None)
            .get_range(1, 10, |id| *id, 1)
            .into_paged();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);

        let page = Paginator::<std::iter::Empty<i32>>::empty()
            .get_range(2, 5, |id| *id, 1)
            .into_paged();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn zero_limit_falls_back_to_default_page_size() {
        let page = Paginator::from(ids(50))
            .get_range(1, 0, |id| *id, 1)
            .into_paged();

        assert_eq!(page.page_size, 20);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn negative_limit_falls_back_to_configured_default() {
        let page = Paginator::from(ids(50))
            .with_default_limit(15)
            .get_range(1, -4, |id| *id, 1)
            .into_paged();

        assert_eq!(page.page_size, 15);
        assert_eq!(page.items.len(), 15);
    }

    #[test]
    fn offsets_below_one_serve_first_page() {
        for offset in [0, -1, i64::MIN] {
            let page = Paginator::from(ids(5))
                .get_range(offset, 2, |id| *id, 1)
                .into_paged();
            assert_eq!(page.current_page, 1);
            assert_eq!(page_ids(&page), vec![1, 2]);
        }
    }

    #[test]
    fn huge_offset_does_not_overflow() {
        let page = Paginator::from(ids(5))
            .get_range(i64::MAX, i64::MAX, |id| *id, 1)
            .into_paged();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn limit_larger_than_total_returns_everything() {
        let page = Paginator::from(ids(7))
            .get_range(1, 100, |id| *id, 1)
            .into_paged();
        assert_eq!(page.items.len(), 7);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn descending_with_minus_one() {
        let page = Paginator::from(ids(5))
            .get_range(1, 5, |id| *id, -1)
            .into_paged();
        assert_eq!(page_ids(&page), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn only_exactly_one_is_ascending() {
        assert_eq!(SortDirection::from_raw(1), SortDirection::Ascending);
        for raw in [0, -1, 2, i32::MAX, i32::MIN] {
            assert_eq!(SortDirection::from_raw(raw), SortDirection::Descending);
        }

        let page = Paginator::from(ids(3))
            .get_range(1, 3, |id| *id, 0)
            .into_paged();
        assert_eq!(page_ids(&page), vec![3, 2, 1]);
    }

    #[test]
    fn equal_keys_keep_source_order_in_both_directions() {
        let rows = vec![
            Row { id: 1, group: "b" },
            Row { id: 2, group: "a" },
            Row { id: 3, group: "b" },
            Row { id: 4, group: "a" },
            Row { id: 5, group: "b" },
        ];

        let asc: Vec<i32> = Paginator::from(rows.clone())
            .get_range(1, 10, |r| r.group, 1)
            .paginate(|r| r.id)
            .items;
        assert_eq!(asc, vec![2, 4, 1, 3, 5]);

        let desc: Vec<i32> = Paginator::from(rows)
            .get_range(1, 10, |r| r.group, -1)
            .paginate(|r| r.id)
            .items;
        assert_eq!(desc, vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let rows: Vec<Row> = (1..=30)
            .map(|id| Row {
                id,
                group: if id % 3 == 0 { "x" } else { "y" },
            })
            .collect();

        let first = Paginator::from(rows.clone()).get_range(2, 7, |r| r.group, 1);
        let second = Paginator::from(rows).get_range(2, 7, |r| r.group, 1);
        assert_eq!(first, second);
        assert_eq!(first.into_paged(), second.into_paged());
    }

    #[test]
    fn pages_partition_the_source() {
        let mut seen = Vec::new();
        for offset in 1..=4 {
            let page = Paginator::from(ids(23))
                .get_range(offset, 6, |id| *id, 1)
                .into_paged();
            seen.extend(page.items);
        }
        assert_eq!(seen, ids(23));
    }

    #[test]
    fn metadata_matches_item_count() {
        for total in 0..=12 {
            for limit in 1..=5 {
                let expected_pages = (total + limit - 1) / limit;
                for offset in 1..=(expected_pages + 2) {
                    let page = Paginator::from(ids(i32::try_from(total).unwrap()))
                        .get_range(offset, limit, |id| *id, 1)
                        .into_paged();
                    let meta = page.meta();
                    assert_eq!(page.total_pages, u64::try_from(expected_pages).unwrap());
                    assert_eq!(u64::try_from(page.items.len()).unwrap(), meta.expected_len());
                    assert!(page.items.len() <= usize::try_from(limit).unwrap());
                }
            }
        }
    }

    #[test]
    fn upstream_filter_is_applied_lazily() {
        let evaluated = Cell::new(0);
        let source = ids(20)
            .into_iter()
            .inspect(|_| evaluated.set(evaluated.get() + 1))
            .filter(|id| id % 2 == 0);

        let paginator = Paginator::from(source);
        assert_eq!(evaluated.get(), 0);

        let page = paginator.get_range(1, 3, |id| *id, 1).into_paged();
        assert_eq!(evaluated.get(), 20);
        assert_eq!(page_ids(&page), vec![2, 4, 6]);
        assert_eq!(page.total_items, 10);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn projection_keeps_order_and_metadata() {
        let page = Paginator::from(ids(12))
            .get_range(2, 5, |id| *id, -1)
            .paginate(|id| format!("#{id}"));

        assert_eq!(page.items, vec!["#7", "#6", "#5", "#4", "#3"]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn failing_projection_fails_whole_page() {
        let result: Result<Paged<i32>, String> = Paginator::from(ids(5))
            .get_range(1, 5, |id| *id, 1)
            .try_paginate(|id| {
                if id == 4 {
                    Err(format!("cannot map {id}"))
                } else {
                    Ok(id * 10)
                }
            });
        assert_eq!(result, Err("cannot map 4".to_string()));
    }

    #[test]
    fn upstream_failure_propagates_unchanged() {
        let source: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2), Err("connection reset"), Ok(4)];
        let result = Paginator::from(source).try_get_range(1, 10, |id| *id, 1);
        assert_eq!(result.unwrap_err(), "connection reset");

        let source: Vec<Result<i32, &str>> = vec![Ok(3), Ok(1), Ok(2)];
        let page = Paginator::from(source)
            .try_get_range(1, 2, |id| *id, 1)
            .unwrap()
            .into_paged();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn named_sort_field_resolves_case_insensitively() {
        let rows = vec![
            Row { id: 1, group: "B" },
            Row { id: 2, group: "a" },
            Row { id: 3, group: "c" },
        ];
        let page = Paginator::from(rows)
            .get_range_by(1, 10, "GROUP", 1)
            .unwrap()
            .paginate(|r| r.id);
        assert_eq!(page.items, vec![2, 1, 3]);
    }

    #[test]
    fn unknown_sort_field_fails_before_evaluation() {
        let evaluated = Cell::new(false);
        let source = std::iter::once(Row { id: 1, group: "a" }).inspect(|_| evaluated.set(true));

        let err = Paginator::from(source)
            .get_range_by(1, 10, "salary", 1)
            .unwrap_err();

        assert!(!evaluated.get());
        assert_eq!(
            err,
            PagingError::UnknownSortKey {
                field: "salary".into(),
                allowed: &["id", "group"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Unknown sort field 'salary' (expected one of: id, group)"
        );
    }

    #[test]
    fn missing_keys_sort_first() {
        let mut keys = vec![SortKey::from(Some(3)), SortKey::from(None::<i32>), SortKey::from(1)];
        keys.sort();
        assert_eq!(keys, vec![SortKey::Missing, SortKey::Int(1), SortKey::Int(3)]);
    }

    #[test]
    fn clamping_helpers() {
        assert_eq!(clamp_offset(-7), 1);
        assert_eq!(clamp_offset(0), 1);
        assert_eq!(clamp_offset(9), 9);
        assert_eq!(clamp_limit(0, 20), 20);
        assert_eq!(clamp_limit(-1, 0), 1);
        assert_eq!(clamp_limit(42, 20), 42);
    }

    #[test]
    fn paged_serializes_camel_case() {
        let page = Paginator::from(ids(3)).get_range(1, 2, |id| *id, 1).into_paged();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentPage": 1,
                "pageSize": 2,
                "totalItems": 3,
                "totalPages": 2,
                "items": [1, 2]
            })
        );
    }

    #[test]
    fn request_defaults() {
        let request = PagingRequest::default();
        assert_eq!(request.offset, 1);
        assert_eq!(request.limit, None);
        assert_eq!(request.direction(), SortDirection::Ascending);

        let request = PagingRequest::new(2, 5).sorted_by("name", -1);
        assert_eq!(request.limit, Some(5));
        assert_eq!(request.sort_by.as_deref(), Some("name"));
        assert_eq!(request.direction(), SortDirection::Descending);
    }
}
