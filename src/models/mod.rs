mod turn;

pub use turn::{ConversationTurn, Role};
