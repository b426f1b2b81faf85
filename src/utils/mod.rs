pub mod redact;

pub use redact::mask_database_url;
