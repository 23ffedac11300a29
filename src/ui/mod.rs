mod output;

pub use output::{
    print_answer, print_banner, print_config, print_error, print_help, print_history, print_trace,
};
