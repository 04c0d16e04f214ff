// src/generator.rs

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use rand::{Rng, seq::SliceRandom};

use crate::{
    models::question::{
        Category, Difficulty, Question, QuestionDraft, QuestionType, WRONG_ANSWER_COUNT,
    },
    store::SharedStore,
};

/// Questions added by the background task when it finds the store empty.
const INITIAL_BATCH: usize = 5;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("lorem")
}

/// A capitalized 4–10 word sentence ending in a question mark.
fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(4..=10);
    let mut text = (0..len).map(|_| word(rng)).collect::<Vec<_>>().join(" ");

    if let Some(first) = text.get(0..1) {
        let upper = first.to_uppercase();
        text.replace_range(0..1, &upper);
    }
    text.push('?');
    text
}

/// Builds a random draft that satisfies the question invariants.
pub fn random_draft<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let question_type = *QuestionType::ALL.choose(rng).unwrap_or(&QuestionType::OpenEnded);
    let correct_answer = word(rng).to_string();

    let wrong_answers = match question_type {
        QuestionType::MultiChoice => {
            let mut distractors = Vec::with_capacity(WRONG_ANSWER_COUNT);
            while distractors.len() < WRONG_ANSWER_COUNT {
                let candidate = word(rng);
                if candidate != correct_answer && !distractors.iter().any(|d: &String| d == candidate) {
                    distractors.push(candidate.to_string());
                }
            }
            Some(distractors)
        }
        QuestionType::OpenEnded => None,
    };

    let seconds_ago = rng.gen_range(0..24 * 60 * 60);

    QuestionDraft {
        question_text: sentence(rng),
        category: *Category::ALL.choose(rng).unwrap_or(&Category::Math),
        question_type,
        correct_answer,
        wrong_answers,
        difficulty: *Difficulty::ALL.choose(rng).unwrap_or(&Difficulty::Easy),
        date: Some(Utc::now() - ChronoDuration::seconds(seconds_ago)),
    }
}

/// Adds `count` random questions to the store under one write lock.
pub async fn generate_into(store: &SharedStore, count: usize) -> Vec<Question> {
    let drafts: Vec<QuestionDraft> = {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| random_draft(&mut rng)).collect()
    };

    let mut store = store.write().await;
    drafts.into_iter().map(|draft| store.add(draft)).collect()
}

/// Background task: seeds a small batch into an empty store, then adds one
/// random question per tick for the life of the process.
pub fn spawn_generator(store: SharedStore, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if store.read().await.is_empty() {
            let added = generate_into(&store, INITIAL_BATCH).await;
            tracing::info!("Generator seeded {} questions into empty store", added.len());
        }

        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let added = generate_into(&store, 1).await;
            for q in &added {
                tracing::debug!("Generated question {} ({})", q.id, q.category.as_str());
            }
        }
    })
}
