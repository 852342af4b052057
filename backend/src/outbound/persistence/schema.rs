//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Employee records.
    ///
    /// `id` is a `BIGSERIAL` assigned by the database on insert.
    employees (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        department -> Varchar,
    }
}
