//! Internal Diesel row structs for the `employees` table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use super::schema::employees;

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Insertable struct for rows whose identifier the database assigns.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub department: &'a str,
}

/// Insertable struct carrying an explicit identifier, used for upserts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct StoredEmployeeRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub department: &'a str,
}

/// Changeset applied when an upsert hits an existing identifier.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub department: &'a str,
}
