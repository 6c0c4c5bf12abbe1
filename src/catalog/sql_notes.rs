//! SQL statement notes

use super::types::SqlStatement;

static SQL_STATEMENTS: &[SqlStatement] = &[
    SqlStatement {
        statement: "SELECT",
        description: "Retrieve rows from one or more tables.",
        example: "SELECT name, email FROM users WHERE active = true;",
    },
    SqlStatement {
        statement: "INSERT",
        description: "Add new rows to a table.",
        example: "INSERT INTO users (name, email) VALUES ('Ada', 'ada@example.com');",
    },
    SqlStatement {
        statement: "UPDATE",
        description: "Modify existing rows.",
        example: "UPDATE users SET active = false WHERE last_login < '2020-01-01';",
    },
    SqlStatement {
        statement: "DELETE",
        description: "Remove rows from a table.",
        example: "DELETE FROM sessions WHERE expires_at < NOW();",
    },
    SqlStatement {
        statement: "CREATE TABLE",
        description: "Define a new table and its columns.",
        example: "CREATE TABLE users (id SERIAL PRIMARY KEY, name TEXT NOT NULL);",
    },
    SqlStatement {
        statement: "ALTER TABLE",
        description: "Change the structure of an existing table.",
        example: "ALTER TABLE users ADD COLUMN created_at TIMESTAMP;",
    },
    SqlStatement {
        statement: "DROP TABLE",
        description: "Delete a table and all of its data.",
        example: "DROP TABLE IF EXISTS sessions;",
    },
    SqlStatement {
        statement: "JOIN",
        description: "Combine rows from two tables on a related column.",
        example: "SELECT o.id, u.name FROM orders o JOIN users u ON u.id = o.user_id;",
    },
    SqlStatement {
        statement: "GROUP BY",
        description: "Aggregate rows that share the same values.",
        example: "SELECT country, COUNT(*) FROM users GROUP BY country;",
    },
    SqlStatement {
        statement: "ORDER BY",
        description: "Sort the result set.",
        example: "SELECT name FROM users ORDER BY created_at DESC;",
    },
    SqlStatement {
        statement: "CREATE INDEX",
        description: "Build an index to speed up lookups on a column.",
        example: "CREATE INDEX idx_users_email ON users (email);",
    },
];

pub fn sql_statements() -> &'static [SqlStatement] {
    SQL_STATEMENTS
}
