// src/query.rs

//! Filter, sort and paginate over the question collection.
//!
//! Everything here is a pure function of its inputs; handlers take the store's
//! read lock, run the pipeline over the borrowed slice and release it.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::question::{Category, Question, QuestionType},
};

/// Largest page size a client may ask for.
pub const MAX_PAGE_SIZE: usize = 100;

/// Conjunctive filter criteria. Empty sets mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub categories: Vec<Category>,
    pub types: Vec<QuestionType>,
    /// Lowercased search term; empty matches everything.
    search: String,
}

impl QuestionFilter {
    pub fn new(categories: Vec<Category>, types: Vec<QuestionType>, search: &str) -> Self {
        Self {
            categories,
            types,
            search: search.to_lowercase(),
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        let category_match =
            self.categories.is_empty() || self.categories.contains(&question.category);
        let type_match = self.types.is_empty() || self.types.contains(&question.question_type);
        let search_match = self.search.is_empty()
            || question.question_text.to_lowercase().contains(&self.search);

        category_match && type_match && search_match
    }
}

/// Ascending sort key for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Difficulty,
    Date,
}

/// 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self, AppError> {
        if page == 0 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }
        if per_page == 0 || per_page > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "perPage must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self { page, per_page })
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// One page of results plus the totals the client needs to render pager
/// controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Complete listing request: what to keep, how to order it, which page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: QuestionFilter,
    pub sort: SortKey,
    pub page: PageRequest,
}

pub fn filter_questions<'a>(questions: &'a [Question], filter: &QuestionFilter) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q)).collect()
}

/// Stable ascending sort, so equal keys keep their collection order.
pub fn sort_questions(questions: &mut [&Question], key: SortKey) {
    match key {
        SortKey::Id => questions.sort_by_key(|q| q.id),
        SortKey::Difficulty => questions.sort_by_key(|q| q.difficulty),
        SortKey::Date => questions.sort_by_key(|q| q.date),
    }
}

/// Cuts one page out of `items`. Pages past the end come back empty; the
/// totals still describe the whole list.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(request.per_page);

    let page_items = items
        .iter()
        .skip(request.offset())
        .take(request.per_page)
        .cloned()
        .collect();

    Page {
        items: page_items,
        page: request.page,
        per_page: request.per_page,
        total_items,
        total_pages,
    }
}

/// Runs filter, sort and paginate in that order.
pub fn list_questions(questions: &[Question], query: &ListQuery) -> Page<Question> {
    let mut matched = filter_questions(questions, &query.filter);
    sort_questions(&mut matched, query.sort);

    let page = paginate(&matched, query.page);
    Page {
        items: page.items.into_iter().cloned().collect(),
        page: page.page,
        per_page: page.per_page,
        total_items: page.total_items,
        total_pages: page.total_pages,
    }
}
