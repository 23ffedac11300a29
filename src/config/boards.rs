use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardsConfig {
    #[serde(default)]
    pub deals_board_id: Option<String>,
    #[serde(default)]
    pub work_orders_board_id: Option<String>,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            deals_board_id: None,
            work_orders_board_id: None,
        }
    }
}
