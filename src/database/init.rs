//! This module defines shared database types and the schema bootstrap.
//! The consumer owns connection configuration and passes the pool in;
//! `ensure_schema` is safe to run on every startup.

use sqlx::{PgPool, Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`).
/// This is used throughout the application to provide a consistent, clear name
/// for the shared database connection state.
pub type DbPool = Pool<Postgres>;

/// Creates the subsystem's enum types and tables if they do not exist yet.
/// Every statement is idempotent, so repeated startups are harmless.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    // CREATE TYPE has no IF NOT EXISTS; swallow the duplicate_object error instead.
    sqlx::query(
        r#"DO $$ BEGIN
            CREATE TYPE activity_type AS ENUM (
                'flashcard_studied', 'ai_chat', 'resource_viewed',
                'resource_uploaded', 'message_sent', 'event_created',
                'study_plan_created', 'document_analyzed', 'mood_logged'
            );
        EXCEPTION WHEN duplicate_object THEN NULL; END $$"#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"DO $$ BEGIN
            CREATE TYPE achievement_category AS ENUM (
                'study', 'collaboration', 'consistency', 'milestone'
            );
        EXCEPTION WHEN duplicate_object THEN NULL; END $$"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS progress_profiles (
            owner TEXT PRIMARY KEY,
            xp BIGINT NOT NULL DEFAULT 0,
            level INT NOT NULL DEFAULT 1
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS user_activities (
            activity_id SERIAL PRIMARY KEY,
            owner TEXT NOT NULL,
            activity_type activity_type NOT NULL,
            activity_date TEXT NOT NULL,
            details TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS user_activities_owner_idx ON user_activities (owner)")
        .execute(pool)
        .await?;

    // (owner, title) unique: an achievement is granted at most once per user,
    // and concurrent page loads racing the same grant collapse into one row.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS achievements (
            achievement_id SERIAL PRIMARY KEY,
            owner TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            badge_icon TEXT NOT NULL,
            category achievement_category NOT NULL,
            earned_date DATE NOT NULL,
            UNIQUE (owner, title)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS pets (
            pet_id SERIAL PRIMARY KEY,
            owner TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            species TEXT NOT NULL,
            level INT NOT NULL DEFAULT 1,
            xp BIGINT NOT NULL DEFAULT 0,
            happiness INT NOT NULL DEFAULT 80,
            hunger INT NOT NULL DEFAULT 20,
            last_fed TIMESTAMPTZ NOT NULL DEFAULT now(),
            color TEXT NOT NULL DEFAULT '#FF6B9D',
            accessories TEXT[] NOT NULL DEFAULT '{}'
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
