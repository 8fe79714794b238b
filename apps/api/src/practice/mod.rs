// Guided practice over a generated question list.
// Session state machine plus the `questions` navigation parameter codec.

pub mod handlers;
pub mod navigation;
pub mod session;
