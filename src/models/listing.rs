// src/models/listing.rs

use std::str::FromStr;

use serde::Deserialize;

use crate::{
    error::AppError,
    query::{ListQuery, PageRequest, QuestionFilter, SortKey},
};

/// Query parameters for listing questions.
///
/// `category` and `type` take comma-separated lists, e.g.
/// `/api/questions?category=math,football&type=open-ended&sort=difficulty`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListParams {
    pub fn into_query(self, default_page_size: usize) -> Result<ListQuery, AppError> {
        let categories = parse_list(self.category.as_deref())?;
        let types = parse_list(self.question_type.as_deref())?;

        Ok(ListQuery {
            filter: QuestionFilter::new(categories, types, self.search.as_deref().unwrap_or("")),
            sort: self.sort.unwrap_or_default(),
            page: PageRequest::new(
                self.page.unwrap_or(1),
                self.per_page.unwrap_or(default_page_size),
            )?,
        })
    }
}

fn parse_list<T>(raw: Option<&str>) -> Result<Vec<T>, AppError>
where
    T: FromStr + PartialEq,
    T::Err: std::fmt::Display,
{
    let mut values = Vec::new();
    for part in raw.unwrap_or("").split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let value = part
            .parse::<T>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if !values.contains(&value) {
            values.push(value);
        }
    }
    Ok(values)
}
