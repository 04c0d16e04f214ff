// src/store.rs

use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::question::{Question, QuestionDraft},
};

/// Store handle shared between request handlers and the generator task.
pub type SharedStore = Arc<RwLock<QuestionStore>>;

/// Ordered in-memory collection of questions.
///
/// Insertion order is preserved; it is the order the listing pipeline sees
/// before sorting, so ties under a sort key keep it.
#[derive(Debug, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
    /// Highest id handed out or loaded so far.
    last_id: i64,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records. Fails on duplicate ids.
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(AppError::Conflict(format!("Duplicate question id {}", q.id)));
            }
        }

        let last_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        Ok(Self { questions, last_id })
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Appends a new question and returns it with its assigned id.
    pub fn add(&mut self, draft: QuestionDraft) -> Question {
        let id = self.next_id(Utc::now().timestamp_millis());
        let date = draft.date.unwrap_or_else(Utc::now);
        let question = Question::from_draft(id, draft, date);

        self.questions.push(question.clone());
        question
    }

    /// Replaces every field of the question with `id`, keeping the id and,
    /// unless the draft carries one, the stored date.
    pub fn update(&mut self, id: i64, draft: QuestionDraft) -> Result<Question, AppError> {
        let slot = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(AppError::NotFound("Question not found".to_string()))?;

        let date = draft.date.unwrap_or(slot.date);
        *slot = Question::from_draft(id, draft, date);
        Ok(slot.clone())
    }

    /// Removes the question with `id` and returns it.
    pub fn delete(&mut self, id: i64) -> Result<Question, AppError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(AppError::NotFound("Question not found".to_string()))?;

        Ok(self.questions.remove(index))
    }

    /// Timestamp-derived id, bumped past the last one issued so ids stay
    /// strictly increasing even within the same millisecond.
    fn next_id(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::question::{Category, Difficulty, QuestionType},
        seed::sample_questions,
    };

    fn draft(text: &str) -> QuestionDraft {
        QuestionDraft {
            question_text: text.to_string(),
            category: Category::Football,
            question_type: QuestionType::MultiChoice,
            correct_answer: "Pele".to_string(),
            wrong_answers: Some(vec!["Zico".to_string(), "Kaka".to_string()]),
            difficulty: Difficulty::Hard,
            date: None,
        }
    }

    fn seeded() -> QuestionStore {
        QuestionStore::with_questions(sample_questions()).unwrap()
    }

    #[test]
    fn add_grows_store_and_is_retrievable() {
        let mut store = seeded();
        let before = store.len();

        let added = store.add(draft("Who scored 1000 goals?"));

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.get(added.id), Some(&added));
        assert_eq!(store.all().last(), Some(&added));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut store = seeded();
        let a = store.add(draft("a"));
        let b = store.add(draft("b"));
        let c = store.add(draft("c"));

        assert!(a.id > 30);
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn next_id_never_goes_backwards() {
        let mut store = QuestionStore::new();
        assert_eq!(store.next_id(100), 100);
        assert_eq!(store.next_id(100), 101);
        assert_eq!(store.next_id(50), 102);
        assert_eq!(store.next_id(500), 500);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut store = seeded();
        let others: Vec<Question> = store.all().iter().filter(|q| q.id != 7).cloned().collect();

        let removed = store.delete(7).unwrap();

        assert_eq!(removed.id, 7);
        assert!(store.get(7).is_none());
        assert_eq!(store.all(), others.as_slice());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = seeded();
        assert!(matches!(store.delete(9999), Err(AppError::NotFound(_))));
        assert_eq!(store.len(), 30);
    }

    #[test]
    fn update_replaces_fields_and_keeps_id_and_date() {
        let mut store = seeded();
        let original = store.get(3).cloned().unwrap();
        let neighbours: Vec<Question> = store.all().iter().filter(|q| q.id != 3).cloned().collect();

        let updated = store.update(3, draft("Replaced text")).unwrap();

        assert_eq!(updated.id, 3);
        assert_eq!(updated.question_text, "Replaced text");
        assert_eq!(updated.category, Category::Football);
        assert_eq!(updated.date, original.date);
        assert_eq!(store.get(3), Some(&updated));
        // Position in the collection is unchanged.
        assert_eq!(store.all()[2].id, 3);

        let untouched: Vec<Question> = store.all().iter().filter(|q| q.id != 3).cloned().collect();
        assert_eq!(untouched, neighbours);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = seeded();
        assert!(matches!(store.update(9999, draft("x")), Err(AppError::NotFound(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut questions = sample_questions();
        questions.push(questions[0].clone());
        assert!(matches!(
            QuestionStore::with_questions(questions),
            Err(AppError::Conflict(_))
        ));
    }
}
