/// Idempotent DDL for the employees table, applied in order at start-up.
pub const EMPLOYEE_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS employees (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        position_id INTEGER NOT NULL,
        position_name TEXT NOT NULL,
        parent_id INTEGER NULL REFERENCES employees(id)
    )",
    "CREATE INDEX IF NOT EXISTS employees_position_id_idx ON employees (position_id)",
    "CREATE INDEX IF NOT EXISTS employees_parent_id_idx ON employees (parent_id)",
];
