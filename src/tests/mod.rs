mod end_to_end;

pub use base::run_with_logger;
