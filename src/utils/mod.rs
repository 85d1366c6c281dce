pub mod environment;
pub mod paths;

pub use environment::resolve_input_dir;
pub use paths::{MAX_FILE_SIZE_BYTES, validate_file_size};
