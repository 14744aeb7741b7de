use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

pub type SearchFields<T> = Rc<dyn Fn(&T) -> Vec<String>>;
pub type FilterPredicate<T> = Rc<dyn Fn(&T) -> bool>;
pub type SortComparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// User-selected knobs for one browser view.
///
/// Closures cannot be compared, so `filter_key` and `sort_key` carry the
/// identity of the selection that produced `filter_predicate` and
/// `sort_comparator`. Two params with equal keys are assumed to filter and
/// sort the same way.
pub struct ViewParams<T> {
    pub search_text: String,
    pub search_fields: SearchFields<T>,
    pub filter_key: String,
    pub filter_predicate: FilterPredicate<T>,
    pub sort_key: String,
    pub sort_comparator: SortComparator<T>,
    pub page_size: usize,
    pub current_page: i64,
}

impl<T> ViewParams<T> {
    /// Matches everything, keeps collection order, starts on page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            search_fields: Rc::new(|_| Vec::new()),
            filter_key: String::new(),
            filter_predicate: Rc::new(|_| true),
            sort_key: String::new(),
            sort_comparator: Rc::new(|_, _| Ordering::Equal),
            page_size,
            current_page: 1,
        }
    }

    pub fn with_search<F>(mut self, text: impl Into<String>, fields: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + 'static,
    {
        self.search_text = text.into();
        self.search_fields = Rc::new(fields);
        self
    }

    pub fn with_filter<F>(mut self, key: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.filter_key = key.into();
        self.filter_predicate = Rc::new(predicate);
        self
    }

    pub fn with_sort<F>(mut self, key: impl Into<String>, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.sort_key = key.into();
        self.sort_comparator = Rc::new(comparator);
        self
    }

    pub fn at_page(mut self, page: i64) -> Self {
        self.current_page = page;
        self
    }
}

impl<T> Clone for ViewParams<T> {
    fn clone(&self) -> Self {
        Self {
            search_text: self.search_text.clone(),
            search_fields: Rc::clone(&self.search_fields),
            filter_key: self.filter_key.clone(),
            filter_predicate: Rc::clone(&self.filter_predicate),
            sort_key: self.sort_key.clone(),
            sort_comparator: Rc::clone(&self.sort_comparator),
            page_size: self.page_size,
            current_page: self.current_page,
        }
    }
}

impl<T> fmt::Debug for ViewParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewParams")
            .field("search_text", &self.search_text)
            .field("filter_key", &self.filter_key)
            .field("sort_key", &self.sort_key)
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a, T> {
    pub visible_records: Vec<&'a T>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub effective_page: i64,
}

impl<T> DerivedView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.total_matching == 0
    }
}

/// Owned copy of a derived view, handed out by services once the source
/// collection goes out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub rows: Vec<T>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub effective_page: i64,
}

impl<T: Clone> From<DerivedView<'_, T>> for PageResult<T> {
    fn from(view: DerivedView<'_, T>) -> Self {
        Self {
            rows: view.visible_records.into_iter().cloned().collect(),
            total_matching: view.total_matching,
            total_pages: view.total_pages,
            effective_page: view.effective_page,
        }
    }
}
