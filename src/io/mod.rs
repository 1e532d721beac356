//! File I/O for roll configurations and computed quantities.

pub mod json;

pub use json::{
    from_json_string, read_config, read_result, to_json_string, write_config, write_result,
};
