//! Pure table engine: everything the table shows is a function of the rows,
//! the column schema and a [`TableQuery`].

use super::pagination::total_pages;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Filter sentinel meaning "no restriction".
pub const ALL: &str = "all";

/// Sortable, filterable value extracted from a row for one column.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text shown in the cell and in filter options.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Total order: empty < numbers < text; text compares case-insensitively.
    pub fn compare(&self, other: &Self) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

type Extractor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Column schema entry.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub filterable: bool,
    value: Extractor<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            filterable: self.filterable,
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Column<T> {
    /// Sortable, unfiltered column.
    pub fn new<F, V>(key: &'static str, label: &'static str, value: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self {
            key,
            label,
            sortable: true,
            filterable: false,
            value: Arc::new(move |row| value(row).into()),
        }
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.value)(row)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// Interaction state of a table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortState>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Select a filter value for a column; [`ALL`] clears it.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        if value == ALL || value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn filter_value(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or(ALL)
    }

    /// Ascending -> descending -> unsorted; another column starts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(SortState { key: current, direction }) if current == key => match direction {
                SortDirection::Ascending => Some(SortState {
                    key: current,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// Result of [`run_query`]: the visible page plus counters for the footer.
#[derive(Clone, Debug)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    pub total_matched: usize,
    pub total_pages: usize,
    /// Clamped into `1..=total_pages`
    pub page: usize,
    /// 0-based offset of the first visible row
    pub offset: usize,
}

impl<T> TableView<T> {
    /// "Showing X–Y of Z"
    pub fn summary(&self) -> String {
        if self.total_matched == 0 {
            return "No records found".to_string();
        }
        format!(
            "Showing {}–{} of {}",
            self.offset + 1,
            self.offset + self.rows.len(),
            self.total_matched
        )
    }
}

/// Distinct non-empty display values of a column, in sort order.
pub fn filter_options<T>(rows: &[T], column: &Column<T>) -> Vec<String> {
    let mut values: Vec<CellValue> = rows
        .iter()
        .map(|row| column.value(row))
        .filter(|v| !v.is_empty())
        .collect();
    values.sort_by(|a, b| a.compare(b));

    let mut options: Vec<String> = Vec::new();
    for value in values {
        let text = value.display();
        if !options.contains(&text) {
            options.push(text);
        }
    }
    options
}

fn matches_search<T: Serialize>(row: &T, needle: &str) -> bool {
    serde_json::to_string(row)
        .map(|json| json.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// Apply search, filters, sort and pagination.
pub fn run_query<T>(rows: &[T], columns: &[Column<T>], query: &TableQuery) -> TableView<T>
where
    T: Serialize + Clone,
{
    let mut matched: Vec<&T> = rows.iter().collect();

    let needle = query.search.trim().to_lowercase();
    if !needle.is_empty() {
        matched.retain(|row| matches_search(*row, &needle));
    }

    for (key, selected) in &query.filters {
        let Some(column) = columns.iter().find(|c| c.filterable && c.key == key.as_str()) else {
            continue;
        };
        // stale selections behave like "all"
        if !filter_options(rows, column).contains(selected) {
            continue;
        }
        matched.retain(|row| column.value(row).display() == *selected);
    }

    if let Some(sort) = &query.sort {
        if let Some(column) = columns.iter().find(|c| c.sortable && c.key == sort.key) {
            matched.sort_by(|a, b| {
                let ord = column.value(a).compare(&column.value(b));
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
    }

    let total_matched = matched.len();
    let total_pages = total_pages(total_matched, query.page_size);
    let page = query.page.clamp(1, total_pages);
    let offset = (page - 1) * query.page_size;

    let rows = matched
        .into_iter()
        .skip(offset)
        .take(query.page_size)
        .cloned()
        .collect();

    TableView {
        rows,
        total_matched,
        total_pages,
        page,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Kid {
        name: String,
        branch: String,
        age: Option<u32>,
    }

    fn kid(name: &str, branch: &str, age: Option<u32>) -> Kid {
        Kid {
            name: name.into(),
            branch: branch.into(),
            age,
        }
    }

    fn columns() -> Vec<Column<Kid>> {
        vec![
            Column::new("name", "Name", |k: &Kid| k.name.clone()),
            Column::new("branch", "Branch", |k: &Kid| k.branch.clone()).filterable(),
            Column::new("age", "Age", |k: &Kid| k.age).filterable(),
        ]
    }

    fn sample() -> Vec<Kid> {
        vec![
            kid("Budi", "Kemang", Some(7)),
            kid("alya", "Senayan", Some(10)),
            kid("Citra", "Kemang", None),
            kid("Dimas", "Senayan", Some(7)),
            kid("Eka", "", Some(12)),
        ]
    }

    fn names(view: &TableView<Kid>) -> Vec<&str> {
        view.rows.iter().map(|k| k.name.as_str()).collect()
    }

    #[test]
    fn test_cell_order_is_empty_then_numbers_then_text() {
        let mut values = vec![
            CellValue::text("beta"),
            CellValue::Number(3.0),
            CellValue::text("  "),
            CellValue::text("Alpha"),
            CellValue::Number(-1.5),
        ];
        values.sort_by(|a, b| a.compare(b));
        assert_eq!(
            values,
            vec![
                CellValue::Empty,
                CellValue::Number(-1.5),
                CellValue::Number(3.0),
                CellValue::text("Alpha"),
                CellValue::text("beta"),
            ]
        );
    }

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::Number(7.0).display(), "7");
        assert_eq!(CellValue::Number(12.5).display(), "12.5");
        assert_eq!(CellValue::from(None::<u32>).display(), "");
    }

    #[test]
    fn test_search_is_case_insensitive_over_serialized_row() {
        let mut q = TableQuery::new(10);
        q.set_search("KEMANG");
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(names(&view), vec!["Budi", "Citra"]);
    }

    #[test]
    fn test_filter_options_are_distinct_and_skip_empty() {
        let cols = columns();
        assert_eq!(filter_options(&sample(), &cols[1]), vec!["Kemang", "Senayan"]);
        assert_eq!(filter_options(&sample(), &cols[2]), vec!["7", "10", "12"]);
    }

    #[test]
    fn test_filters_combine() {
        let mut q = TableQuery::new(10);
        q.set_filter("branch", "Senayan");
        q.set_filter("age", "7");
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(names(&view), vec!["Dimas"]);
    }

    #[test]
    fn test_stale_filter_degrades_to_all() {
        let mut q = TableQuery::new(10);
        q.set_filter("branch", "Closed Branch");
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(view.total_matched, 5);
    }

    #[test]
    fn test_filter_on_unfilterable_column_is_ignored() {
        let mut q = TableQuery::new(10);
        q.set_filter("name", "Budi");
        assert_eq!(run_query(&sample(), &columns(), &q).total_matched, 5);
    }

    #[test]
    fn test_selecting_all_clears_filter() {
        let mut q = TableQuery::new(10);
        q.set_filter("branch", "Kemang");
        q.set_filter("branch", ALL);
        assert!(q.filters.is_empty());
        assert_eq!(q.filter_value("branch"), ALL);
    }

    #[test]
    fn test_sort_cycle() {
        let mut q = TableQuery::new(10);
        q.toggle_sort("name");
        assert_eq!(q.sort_direction("name"), Some(SortDirection::Ascending));
        q.toggle_sort("name");
        assert_eq!(q.sort_direction("name"), Some(SortDirection::Descending));
        q.toggle_sort("name");
        assert_eq!(q.sort, None);

        q.toggle_sort("name");
        q.toggle_sort("age");
        assert_eq!(q.sort_direction("age"), Some(SortDirection::Ascending));
        assert_eq!(q.sort_direction("name"), None);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let mut q = TableQuery::new(10);
        q.toggle_sort("name");
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(names(&view), vec!["alya", "Budi", "Citra", "Dimas", "Eka"]);
    }

    #[test]
    fn test_sort_is_stable_and_puts_empty_first() {
        let mut q = TableQuery::new(10);
        q.toggle_sort("age");
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(names(&view), vec!["Citra", "Budi", "Dimas", "alya", "Eka"]);

        q.toggle_sort("age");
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(names(&view), vec!["Eka", "alya", "Budi", "Dimas", "Citra"]);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let view = run_query(&sample(), &columns(), &TableQuery::new(10));
        assert_eq!(view.rows, sample());
    }

    #[test]
    fn test_paging_and_summary() {
        let mut q = TableQuery::new(2);
        q.set_page(2);
        let view = run_query(&sample(), &columns(), &q);
        assert_eq!(names(&view), vec!["Citra", "Dimas"]);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.summary(), "Showing 3–4 of 5");
    }

    #[test]
    fn test_page_is_clamped_when_rows_shrink() {
        let mut q = TableQuery::new(2);
        q.set_page(3);
        let view = run_query(&sample()[..2], &columns(), &q);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_empty_result() {
        let mut q = TableQuery::new(10);
        q.set_search("nobody");
        let view = run_query(&sample(), &columns(), &q);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.summary(), "No records found");
    }

    #[test]
    fn test_search_and_filter_reset_page() {
        let mut q = TableQuery::new(2);
        q.set_page(3);
        q.set_search("a");
        assert_eq!(q.page, 1);

        q.set_page(2);
        q.set_filter("branch", "Kemang");
        assert_eq!(q.page, 1);
    }

    fn kid_strategy() -> impl Strategy<Value = Kid> {
        ("[a-d]{0,4}", prop::sample::select(vec!["", "Kemang", "Senayan"]), prop::option::of(0u32..6))
            .prop_map(|(name, branch, age)| kid(&name, branch, age))
    }

    proptest! {
        #[test]
        fn adding_criteria_never_grows_the_result(
            rows in prop::collection::vec(kid_strategy(), 0..40),
            search in "[a-d]{0,2}",
            extra in "[a-d]",
            branch in prop::sample::select(vec!["Kemang", "Senayan", "Nowhere"]),
            age in 0u32..6,
        ) {
            let cols = columns();
            let mut q = TableQuery::new(1000);
            q.set_search(search.clone());
            let base = run_query(&rows, &cols, &q).total_matched;

            let mut narrower = q.clone();
            narrower.set_search(format!("{}{}", search, extra));
            prop_assert!(run_query(&rows, &cols, &narrower).total_matched <= base);

            let mut filtered = q.clone();
            filtered.set_filter("branch", branch);
            let after_branch = run_query(&rows, &cols, &filtered).total_matched;
            prop_assert!(after_branch <= base);

            filtered.set_filter("age", &age.to_string());
            prop_assert!(run_query(&rows, &cols, &filtered).total_matched <= after_branch);
        }

        #[test]
        fn sorted_rows_are_ordered(rows in prop::collection::vec(kid_strategy(), 0..40), descending in any::<bool>()) {
            let cols = columns();
            let mut q = TableQuery::new(1000);
            q.toggle_sort("age");
            if descending {
                q.toggle_sort("age");
            }
            let view = run_query(&rows, &cols, &q);
            for pair in view.rows.windows(2) {
                let ord = cols[2].value(&pair[0]).compare(&cols[2].value(&pair[1]));
                if descending {
                    prop_assert_ne!(ord, Ordering::Less);
                } else {
                    prop_assert_ne!(ord, Ordering::Greater);
                }
            }
            prop_assert_eq!(view.total_matched, rows.len());
        }

        #[test]
        fn changing_search_or_filter_resets_page(page in 1usize..50, text in "[a-z]{0,5}") {
            let mut q = TableQuery::new(10);
            q.set_page(page);
            q.set_search(text);
            prop_assert_eq!(q.page, 1);

            q.set_page(page);
            q.set_filter("branch", "Kemang");
            prop_assert_eq!(q.page, 1);
        }
    }
}
