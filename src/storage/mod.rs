pub mod json_backend;

pub use json_backend::{
    export_to_path, import_from_path, Snapshot, DEFAULT_EXPORT_FILE_NAME, SNAPSHOT_SCHEMA_VERSION,
};
