pub mod config;
pub mod config_validator;
pub mod error;
pub mod metadata_record;
pub mod property;
pub mod run;
