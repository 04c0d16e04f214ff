// src/seed.rs

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::question::{
    Category::{self, Football, Math},
    Difficulty::{self, Easy, Hard, Medium},
    Question,
    QuestionType::{MultiChoice, OpenEnded},
};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn open(
    id: i64,
    category: Category,
    text: &str,
    answer: &str,
    difficulty: Difficulty,
    date: DateTime<Utc>,
) -> Question {
    Question {
        id,
        question_text: text.to_string(),
        category,
        question_type: OpenEnded,
        correct_answer: answer.to_string(),
        wrong_answers: None,
        difficulty,
        date,
    }
}

fn choice(
    id: i64,
    category: Category,
    text: &str,
    answer: &str,
    wrong: [&str; 2],
    difficulty: Difficulty,
    date: DateTime<Utc>,
) -> Question {
    Question {
        id,
        question_text: text.to_string(),
        category,
        question_type: MultiChoice,
        correct_answer: answer.to_string(),
        wrong_answers: Some(wrong.iter().map(|w| w.to_string()).collect()),
        difficulty,
        date,
    }
}

/// The sample question bank the store starts with: 15 math questions
/// followed by 15 football questions, ids 1 through 30.
pub fn sample_questions() -> Vec<Question> {
    vec![
        open(1, Math, "What is the derivative of x²?", "2x", Medium, day(2024, 1, 15)),
        open(2, Math, "Solve the equation: 2x + 5 = 13", "4", Easy, day(2024, 1, 16)),
        choice(3, Math, "What is the area of a circle with radius 5?", "78.54", ["50", "100"], Medium, day(2024, 1, 17)),
        open(4, Math, "What is 15% of 200?", "30", Easy, day(2024, 1, 18)),
        open(5, Math, "Solve: 3x - 7 = 20", "9", Medium, day(2024, 1, 19)),
        choice(6, Math, "What is the square root of 144?", "12", ["10", "14"], Easy, day(2024, 1, 20)),
        open(7, Math, "Calculate the volume of a cube with side 4", "64", Medium, day(2024, 1, 21)),
        open(8, Math, "What is 3² × 4?", "36", Easy, day(2024, 1, 22)),
        choice(9, Math, "Find the perimeter of a rectangle 5 by 8", "26", ["20", "30"], Medium, day(2024, 1, 23)),
        choice(10, Math, "What is the sine of 90 degrees?", "1", ["0", "0.5"], Hard, day(2024, 1, 24)),
        open(11, Math, "Solve: log₂(8) = ?", "3", Hard, day(2024, 1, 25)),
        choice(12, Math, "What is the sum of angles in a triangle?", "180", ["90", "360"], Medium, day(2024, 1, 26)),
        open(13, Math, "What is 5! (5 factorial)?", "120", Medium, day(2024, 1, 27)),
        choice(14, Math, "Solve: x² = 64", "8", ["6", "10"], Medium, day(2024, 1, 28)),
        choice(15, Math, "What is 1/4 as a decimal?", "0.25", ["0.5", "0.1"], Easy, day(2024, 1, 29)),
        choice(16, Football, "Who won the 2022 FIFA World Cup?", "Argentina", ["France", "Brazil"], Easy, day(2024, 2, 1)),
        open(17, Football, "In which year was the first FIFA World Cup held?", "1930", Hard, day(2024, 2, 2)),
        open(18, Football, "How many players are on a football field per team during a match?", "11", Easy, day(2024, 2, 3)),
        choice(19, Football, "Who has won the most Ballon d'Or awards?", "Lionel Messi", ["Cristiano Ronaldo", "Pele"], Medium, day(2024, 2, 4)),
        choice(20, Football, "Which country has won the most World Cup titles?", "Brazil", ["Germany", "Italy"], Medium, day(2024, 2, 5)),
        choice(21, Football, "What is the diameter of a standard football?", "22 cm", ["20 cm", "24 cm"], Hard, day(2024, 2, 6)),
        open(22, Football, "In which year was the Premier League founded?", "1992", Medium, day(2024, 2, 7)),
        choice(23, Football, "Who scored the most goals in a single World Cup tournament?", "Miroslav Klose", ["Ronaldo", "Pelé"], Hard, day(2024, 2, 8)),
        choice(24, Football, "What is the maximum length of a football pitch?", "120 meters", ["100 meters", "110 meters"], Medium, day(2024, 2, 9)),
        choice(25, Football, "Who won the UEFA Champions League in 2023?", "Manchester City", ["Real Madrid", "Inter Milan"], Easy, day(2024, 2, 10)),
        choice(26, Football, "What color is the penalty spot?", "White", ["Black", "Red"], Easy, day(2024, 2, 11)),
        open(27, Football, "How long does a standard football match last?", "90 minutes", Easy, day(2024, 2, 12)),
        choice(28, Football, "Which country invented football?", "England", ["Brazil", "Italy"], Medium, day(2024, 2, 13)),
        open(
            29,
            Football,
            "What is the offside rule in football?",
            "A player is in an offside position if they are closer to the opponent's goal line than both the ball and the second-last opponent",
            Hard,
            day(2024, 2, 14),
        ),
        choice(30, Football, "How many substitutions are allowed in a standard football match?", "5", ["3", "4"], Medium, day(2024, 2, 15)),
    ]
}
