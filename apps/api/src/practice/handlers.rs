use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::practice::navigation::decode_questions_param;
use crate::practice::session::{NavMarker, PracticeSession, Progress};

#[derive(Debug, Deserialize)]
pub struct PracticeQuery {
    pub questions: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeView {
    pub session: PracticeSession,
    pub progress: Progress,
    pub markers: Vec<NavMarker>,
    pub is_empty: bool,
}

impl From<PracticeSession> for PracticeView {
    fn from(session: PracticeSession) -> Self {
        Self {
            progress: session.progress(),
            markers: session.markers(),
            is_empty: session.is_empty(),
            session,
        }
    }
}

/// GET /api/practice?questions=…
///
/// Initial practice state for a navigation parameter. Always 200: an absent
/// or malformed parameter is the empty state.
pub async fn handle_practice(Query(query): Query<PracticeQuery>) -> Json<PracticeView> {
    let questions = decode_questions_param(query.questions.as_deref());
    Json(PracticeSession::new(questions).into())
}
