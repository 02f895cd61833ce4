//! Table definitions for the `user`, `cafe` and `reservation` tables.
//!
//! There are no migrations: the schema is either dropped and recreated on
//! startup, or created when missing. Foreign keys are declared here but the
//! pool turns enforcement off, see [`crate::database::sqlite::connect`].

/// Drop order matters once foreign keys are switched on, so reservations go first.
pub const DROP_TABLES: [&str; 3] = [
    r#"DROP TABLE IF EXISTS reservation"#,
    r#"DROP TABLE IF EXISTS "user""#,
    r#"DROP TABLE IF EXISTS cafe"#,
];

pub const CREATE_TABLES: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER NOT NULL,
        email VARCHAR(120) NOT NULL,
        password VARCHAR(60) NOT NULL,
        name VARCHAR(100) NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        PRIMARY KEY (id),
        UNIQUE (email)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cafe (
        id INTEGER NOT NULL,
        name VARCHAR(100) NOT NULL,
        address VARCHAR(200) NOT NULL,
        description TEXT,
        rating FLOAT DEFAULT 0.0,
        image_url VARCHAR(200),
        open_hours VARCHAR(100),
        available_tables INTEGER DEFAULT 0,
        distance VARCHAR(50),
        PRIMARY KEY (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservation (
        id INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        cafe_id INTEGER NOT NULL,
        date_time DATETIME NOT NULL,
        number_of_guests INTEGER NOT NULL,
        status VARCHAR(20) DEFAULT 'confirmed',
        PRIMARY KEY (id),
        FOREIGN KEY(user_id) REFERENCES "user" (id),
        FOREIGN KEY(cafe_id) REFERENCES cafe (id)
    )
    "#,
];
