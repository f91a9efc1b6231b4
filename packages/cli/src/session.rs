//! Interactive console quiz session.
//!
//! Input and output are injected so the loop is testable; `main` wires in
//! locked stdin/stdout. Solving time is measured here, around the prompt,
//! and handed to the engine as part of the observation.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::time::Instant;

use thiserror::Error;

use dyscalc_algo::{EngineError, Observation, ThetaEngine, TARGET_P};

use crate::pool::PoolEntry;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub learner_id: String,
    /// Stop after this many answered questions; `None` runs until the
    /// pool is exhausted or the learner quits.
    pub max_questions: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub questions_asked: usize,
    pub final_theta: f64,
    pub final_level: i32,
}

enum Answer {
    Choice(u8),
    Quit,
}

fn prompt_for_answer(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Answer, SessionError> {
    loop {
        write!(output, "answer (1/2), q to quit: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like quitting
            return Ok(Answer::Quit);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "1" => return Ok(Answer::Choice(1)),
            "2" => return Ok(Answer::Choice(2)),
            "q" => return Ok(Answer::Quit),
            other => {
                writeln!(output, "invalid input {other:?}; enter 1, 2 or q")?;
            }
        }
    }
}

pub fn run_session(
    engine: &ThetaEngine,
    pool: &[PoolEntry],
    options: &SessionOptions,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<SessionSummary, SessionError> {
    let learner = options.learner_id.as_str();
    let mut used: HashSet<&str> = HashSet::new();
    let mut asked = 0usize;

    writeln!(output, "answer with 1 or 2, q to quit")?;
    writeln!(output, "target success probability = {TARGET_P:.2}")?;
    writeln!(output)?;

    loop {
        let available: Vec<&PoolEntry> = pool
            .iter()
            .filter(|entry| !used.contains(entry.quiz_id.as_str()))
            .collect();
        if available.is_empty() {
            writeln!(output, "no items left, ending session")?;
            break;
        }

        let selected = *engine.pick(learner, &available)?;
        let snapshot = engine.level(learner);
        let header = format!(
            "[level {:2} | θ={:+.3} | target p={TARGET_P:.2}] id={} | {} | {}",
            snapshot.level_int,
            snapshot.theta,
            selected.quiz_id,
            selected.cell.category,
            selected.cell.difficulty,
        );
        writeln!(output, "{}", "-".repeat(header.chars().count()))?;
        writeln!(output, "{header}")?;
        writeln!(output, "{}", "-".repeat(header.chars().count()))?;
        writeln!(output, "{}", selected.question)?;
        writeln!(output, "1) {}", selected.option1)?;
        writeln!(output, "2) {}", selected.option2)?;

        let started = Instant::now();
        let answer = prompt_for_answer(input, output)?;
        let elapsed = started.elapsed().as_secs_f64();

        let choice = match answer {
            Answer::Choice(choice) => choice,
            Answer::Quit => {
                writeln!(output, "ending session")?;
                break;
            }
        };

        let correct = choice == selected.correct_index;
        let observation = Observation::new(correct, elapsed)?;
        let result = engine.update(learner, selected.cell, observation)?;

        used.insert(selected.quiz_id.as_str());
        asked += 1;

        writeln!(
            output,
            "{} | {elapsed:.2}s | p̂={:.2} | grad={:+.3} | θ={:+.3} → level {} ({:.3})",
            if correct { "correct" } else { "wrong" },
            result.pred_prob,
            result.grad,
            result.theta,
            result.level_int,
            result.level_float,
        )?;
        writeln!(output)?;

        tracing::debug!(
            learner,
            quiz_id = %selected.quiz_id,
            correct,
            elapsed,
            theta = result.theta,
            level = result.level_int,
            "answer processed"
        );

        if options.max_questions.is_some_and(|cap| asked >= cap) {
            writeln!(output, "question cap reached, ending session")?;
            break;
        }
    }

    let snapshot = engine.level(learner);
    Ok(SessionSummary {
        questions_asked: asked,
        final_theta: snapshot.theta,
        final_level: snapshot.level_int,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use dyscalc_algo::{Category, Cell, Difficulty};

    fn entry(quiz_id: &str, category: Category, difficulty: Difficulty) -> PoolEntry {
        PoolEntry {
            quiz_id: quiz_id.to_string(),
            cell: Cell::new(category, difficulty),
            question: format!("question {quiz_id}"),
            option1: "left".to_string(),
            option2: "right".to_string(),
            correct_index: 1,
        }
    }

    fn options() -> SessionOptions {
        SessionOptions {
            learner_id: "child_test".to_string(),
            max_questions: None,
        }
    }

    #[test]
    fn quits_immediately_on_q() {
        let engine = ThetaEngine::new();
        let pool = vec![entry("q1", Category::Lexical, Difficulty::Easy)];
        let mut input = Cursor::new("q\n");
        let mut output = Vec::new();

        let summary =
            run_session(&engine, &pool, &options(), &mut input, &mut output).unwrap();
        assert_eq!(summary.questions_asked, 0);
        assert_eq!(summary.final_theta, 0.0);
    }

    #[test]
    fn answers_update_state_and_items_are_not_repeated() {
        let engine = ThetaEngine::new();
        let pool = vec![
            entry("q1", Category::Lexical, Difficulty::Easy),
            entry("q2", Category::Lexical, Difficulty::Easy),
        ];
        let mut input = Cursor::new("1\n1\n");
        let mut output = Vec::new();

        let summary =
            run_session(&engine, &pool, &options(), &mut input, &mut output).unwrap();
        assert_eq!(summary.questions_asked, 2);
        assert!(summary.final_theta > 0.0);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("id=q1"));
        assert!(text.contains("id=q2"));
        assert!(text.contains("no items left"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let engine = ThetaEngine::new();
        let pool = vec![entry("q1", Category::Lexical, Difficulty::Easy)];
        let mut input = Cursor::new("x\n3\n2\n");
        let mut output = Vec::new();

        let summary =
            run_session(&engine, &pool, &options(), &mut input, &mut output).unwrap();
        assert_eq!(summary.questions_asked, 1);
        // option 2 was wrong, θ moves down
        assert!(summary.final_theta < 0.0);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("invalid input").count(), 2);
    }

    #[test]
    fn question_cap_ends_the_session() {
        let engine = ThetaEngine::new();
        let pool = vec![
            entry("q1", Category::Lexical, Difficulty::Easy),
            entry("q2", Category::Lexical, Difficulty::Easy),
            entry("q3", Category::Lexical, Difficulty::Easy),
        ];
        let session_options = SessionOptions {
            learner_id: "child_test".to_string(),
            max_questions: Some(1),
        };
        let mut input = Cursor::new("1\n1\n1\n");
        let mut output = Vec::new();

        let summary =
            run_session(&engine, &pool, &session_options, &mut input, &mut output).unwrap();
        assert_eq!(summary.questions_asked, 1);
    }

    #[test]
    fn eof_is_treated_as_quit() {
        let engine = ThetaEngine::new();
        let pool = vec![entry("q1", Category::Lexical, Difficulty::Easy)];
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let summary =
            run_session(&engine, &pool, &options(), &mut input, &mut output).unwrap();
        assert_eq!(summary.questions_asked, 0);
    }
}
