//! Shared utility constants for repositories

// ============================================================================
// SQL Column Constants
//
// These constants define the column lists for each entity type, shared by
// SELECT and RETURNING clauses.
// ============================================================================

/// SQL columns for cat queries
pub const CAT_COLUMNS: &str = r#"
    id, cat_name, weight, filename, birthdate,
    lat, lng, owner, created_at
"#;

/// SQL columns for user mirror queries
pub const USER_COLUMNS: &str = r#"
    id, user_name, email, role, created_at, updated_at
"#;
