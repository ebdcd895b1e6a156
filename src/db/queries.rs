//! SQL statements for the destinations table
//!
//! Contains all queries used by the application.

/// Idempotent schema bootstrap issued at startup
pub const CREATE_DESTINATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS destinations (
        id SERIAL PRIMARY KEY,
        country VARCHAR(100) NOT NULL,
        capital VARCHAR(100),
        population INTEGER,
        region VARCHAR(100)
    )
"#;

/// All destinations, most recently created first
pub const LIST_DESTINATIONS: &str = r#"
    SELECT id, country, capital, population, region
    FROM destinations
    ORDER BY id DESC
"#;

/// Insert one enriched destination, returning the stored row
pub const INSERT_DESTINATION: &str = r#"
    INSERT INTO destinations (country, capital, population, region)
    VALUES ($1, $2, $3, $4)
    RETURNING id, country, capital, population, region
"#;

/// Delete a destination by id
pub const DELETE_DESTINATION: &str = r#"
    DELETE FROM destinations WHERE id = $1
"#;
