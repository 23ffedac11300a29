use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bi")]
#[command(about = "Conversational business-intelligence client for monday.com boards", long_about = None)]
pub struct Args {
    #[arg(
        long = "endpoint",
        help = "Query backend URL (default: http://127.0.0.1:8000/query)"
    )]
    pub endpoint: Option<String>,

    #[arg(long = "monday-api-key", help = "monday.com API key")]
    pub monday_api_key: Option<String>,

    #[arg(long = "gemini-api-key", help = "Gemini API key")]
    pub gemini_api_key: Option<String>,

    #[arg(long = "deals-board-id", help = "Identifier of the deals board")]
    pub deals_board_id: Option<String>,

    #[arg(
        long = "work-orders-board-id",
        help = "Identifier of the work orders board"
    )]
    pub work_orders_board_id: Option<String>,

    #[arg(
        long = "timeout",
        help = "Request timeout in seconds (waits indefinitely when unset)"
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Log request/response details to stderr"
    )]
    pub verbose: bool,

    #[arg(help = "Question to ask; starts an interactive session when omitted")]
    pub question: Vec<String>,
}
