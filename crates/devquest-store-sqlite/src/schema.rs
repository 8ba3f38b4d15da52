//! SQL schema for the DevQuest SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Singleton row; the CHECK pins its id so a second row cannot appear.
CREATE TABLE IF NOT EXISTS player_profile (
    id              INTEGER PRIMARY KEY CHECK (id = 1),
    name            TEXT NOT NULL,
    title           TEXT NOT NULL,
    dev_class       TEXT NOT NULL,
    avatar_initials TEXT NOT NULL,
    level           INTEGER NOT NULL,
    xp              INTEGER NOT NULL,
    xp_next_level   INTEGER NOT NULL,
    strength        INTEGER NOT NULL,
    intelligence    INTEGER NOT NULL,
    dexterity       INTEGER NOT NULL,
    wisdom          INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS skills (
    id            INTEGER PRIMARY KEY,
    skill_id      TEXT NOT NULL UNIQUE,
    name          TEXT NOT NULL,
    category      TEXT NOT NULL,      -- 'frontend' | 'backend' | 'data'
    category_name TEXT NOT NULL,
    level         INTEGER NOT NULL,
    max_level     INTEGER NOT NULL,
    unlocked      INTEGER NOT NULL,
    description   TEXT NOT NULL DEFAULT '',
    color         TEXT NOT NULL,
    projects      TEXT NOT NULL DEFAULT '[]',   -- JSON array
    CHECK (level >= 0 AND level <= max_level)
);

CREATE TABLE IF NOT EXISTS achievements (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    icon        TEXT NOT NULL DEFAULT 'trophy',
    category    TEXT NOT NULL DEFAULT 'general',
    color       TEXT NOT NULL DEFAULT '#f0c040',
    unlocked    INTEGER NOT NULL DEFAULT 0,
    unlock_date TEXT                  -- ISO date; written once, at unlock
);

-- Strictly append-only; stats are derived from it.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS activity_log (
    id          INTEGER PRIMARY KEY,
    action      TEXT NOT NULL,
    xp_gained   INTEGER NOT NULL,
    description TEXT NOT NULL,
    created_at  TEXT NOT NULL         -- RFC 3339 UTC
);

-- Append-only; two rows per chat turn, user then oracle.
CREATE TABLE IF NOT EXISTS chat_messages (
    id         INTEGER PRIMARY KEY,
    role       TEXT NOT NULL,         -- 'user' | 'oracle'
    text       TEXT NOT NULL,
    topic      TEXT,                  -- oracle rows only
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS blog_posts (
    id         INTEGER PRIMARY KEY,
    title      TEXT NOT NULL,
    content    TEXT NOT NULL,
    category   TEXT NOT NULL DEFAULT 'update',
    tags       TEXT NOT NULL DEFAULT '[]',      -- JSON array
    color      TEXT NOT NULL DEFAULT '#8b5cf6',
    pinned     INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS cv_analyses (
    id         INTEGER PRIMARY KEY,
    filename   TEXT NOT NULL,
    file_size  INTEGER NOT NULL,
    score      INTEGER NOT NULL,
    sections   TEXT NOT NULL,         -- JSON
    strengths  TEXT NOT NULL,         -- JSON
    weaknesses TEXT NOT NULL,         -- JSON
    tips       TEXT NOT NULL,         -- JSON
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS activity_action_idx  ON activity_log(action);
CREATE INDEX IF NOT EXISTS activity_created_idx ON activity_log(created_at);
CREATE INDEX IF NOT EXISTS chat_role_idx        ON chat_messages(role);

PRAGMA user_version = 1;
";
