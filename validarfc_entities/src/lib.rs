//! sea-orm entities for the validation store.

pub mod validations;
