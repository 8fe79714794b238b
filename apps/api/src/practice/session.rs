#![allow(dead_code)]

//! Practice session — the state behind stepping through a question list.
//!
//! Plain data plus transitions; no UI, no persistence. A session lives as long
//! as the caller holds it and is rebuilt from the `questions` navigation
//! parameter when needed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::questions::models::Question;

/// A user-triggered transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "index", rename_all = "snake_case")]
pub enum PracticeAction {
    Next,
    Previous,
    Skip,
    JumpTo(usize),
    ToggleTips,
    ToggleAnswer,
    MarkComplete,
    Restart,
}

/// How a quick-navigation button for an index is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavMarker {
    Current,
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// 1-based position of the current question; 0 for an empty session.
    pub position: usize,
    pub total: usize,
    pub completed: usize,
    pub percent: f32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    questions: Vec<Question>,
    current: usize,
    completed: BTreeSet<usize>,
    show_tips: bool,
    show_answer: bool,
}

impl PracticeSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn show_tips(&self) -> bool {
        self.show_tips
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// True on the final question, where the client offers a fresh
    /// generation instead of Next.
    pub fn is_last(&self) -> bool {
        !self.is_empty() && self.current == self.len() - 1
    }

    pub fn apply(&mut self, action: PracticeAction) {
        match action {
            PracticeAction::Next => self.next(),
            PracticeAction::Previous => self.previous(),
            PracticeAction::Skip => self.skip(),
            PracticeAction::JumpTo(index) => self.jump_to(index),
            PracticeAction::ToggleTips => self.toggle_tips(),
            PracticeAction::ToggleAnswer => self.toggle_answer(),
            PracticeAction::MarkComplete => self.mark_complete(),
            PracticeAction::Restart => self.restart(),
        }
    }

    /// Advances one question. No-op on the last one.
    pub fn next(&mut self) {
        if self.current + 1 < self.len() {
            self.current += 1;
            self.hide_reveals();
        }
    }

    /// Steps back one question. No-op on the first one.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.hide_reveals();
        }
    }

    pub fn skip(&mut self) {
        self.next();
    }

    /// Quick navigation. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len() {
            self.current = index;
            self.hide_reveals();
        }
    }

    pub fn toggle_tips(&mut self) {
        self.show_tips = !self.show_tips;
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn mark_complete(&mut self) {
        if !self.is_empty() {
            self.completed.insert(self.current);
        }
    }

    /// The only transition that clears completed questions.
    pub fn restart(&mut self) {
        self.current = 0;
        self.completed.clear();
        self.hide_reveals();
    }

    pub fn progress(&self) -> Progress {
        let total = self.len();
        let position = if total == 0 { 0 } else { self.current + 1 };
        let percent = if total == 0 {
            0.0
        } else {
            position as f32 / total as f32 * 100.0
        };
        Progress {
            position,
            total,
            completed: self.completed.len(),
            percent,
        }
    }

    pub fn marker(&self, index: usize) -> NavMarker {
        if index == self.current {
            NavMarker::Current
        } else if self.completed.contains(&index) {
            NavMarker::Completed
        } else {
            NavMarker::Pending
        }
    }

    pub fn markers(&self) -> Vec<NavMarker> {
        (0..self.len()).map(|i| self.marker(i)).collect()
    }

    /// Tips for the current question, only while revealed.
    pub fn visible_tips(&self) -> Option<&str> {
        if !self.show_tips {
            return None;
        }
        self.current_question().map(|q| q.tips.as_str())
    }

    /// Suggested answer for the current question, only while revealed and
    /// only when the model supplied one.
    pub fn visible_answer(&self) -> Option<&str> {
        if !self.show_answer {
            return None;
        }
        self.current_question()
            .and_then(|q| q.suggested_answer.as_deref())
    }

    fn hide_reveals(&mut self) {
        self.show_tips = false;
        self.show_answer = false;
    }
}
