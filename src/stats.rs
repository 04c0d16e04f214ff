// src/stats.rs

//! Chart-ready aggregates over the question collection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::question::{Category, Difficulty, Question, QuestionType};

/// Palette for the category and type charts, assigned by position.
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// Highlight of a difficulty bar relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Lowest,
    Highest,
    Neutral,
}

impl Highlight {
    pub fn color(&self) -> &'static str {
        match self {
            Highlight::Lowest => "#FF6B6B",
            Highlight::Highest => "#4CAF50",
            Highlight::Neutral => "#8884d8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyBucket {
    pub name: String,
    pub difficulty: Difficulty,
    pub value: usize,
    pub highlight: Highlight,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub by_category: Vec<ChartSlice>,
    pub by_type: Vec<ChartSlice>,
    pub by_difficulty: Vec<DifficultyBucket>,
}

/// Counts per difficulty level that occurs, ordered by level, with the
/// smallest count marked lowest and the largest marked highest.
///
/// Ties go to the lower difficulty level. When the same bucket would be both
/// (one bucket, or all counts equal) it stays lowest and nothing is highest.
pub fn difficulty_distribution(questions: &[Question]) -> Vec<DifficultyBucket> {
    let mut counts: BTreeMap<Difficulty, usize> = BTreeMap::new();
    for q in questions {
        *counts.entry(q.difficulty).or_insert(0) += 1;
    }

    // min_by_key/max_by_key keep the first and last extreme respectively, so
    // walk the levels in reverse for the max to land on the lowest level.
    let lowest = counts
        .iter()
        .min_by_key(|(_, count)| **count)
        .map(|(difficulty, _)| *difficulty);
    let highest = counts
        .iter()
        .rev()
        .max_by_key(|(_, count)| **count)
        .map(|(difficulty, _)| *difficulty);

    counts
        .into_iter()
        .map(|(difficulty, value)| {
            let highlight = if Some(difficulty) == lowest {
                Highlight::Lowest
            } else if Some(difficulty) == highest {
                Highlight::Highest
            } else {
                Highlight::Neutral
            };

            DifficultyBucket {
                name: format!("Difficulty {}", difficulty.value()),
                difficulty,
                value,
                highlight,
                color: highlight.color(),
            }
        })
        .collect()
}

pub fn category_distribution(questions: &[Question]) -> Vec<ChartSlice> {
    Category::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| ChartSlice {
            name: category.as_str(),
            value: questions.iter().filter(|q| q.category == *category).count(),
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

pub fn type_distribution(questions: &[Question]) -> Vec<ChartSlice> {
    QuestionType::ALL
        .iter()
        .enumerate()
        .map(|(i, question_type)| ChartSlice {
            name: question_type.as_str(),
            value: questions
                .iter()
                .filter(|q| q.question_type == *question_type)
                .count(),
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

pub fn statistics(questions: &[Question]) -> Statistics {
    Statistics {
        total: questions.len(),
        by_category: category_distribution(questions),
        by_type: type_distribution(questions),
        by_difficulty: difficulty_distribution(questions),
    }
}
