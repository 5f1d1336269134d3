//! Team and membership repository

use sqlx::SqlitePool;

/// Team record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    pub creator: String,
}

/// Listing row: team name with its member count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamCountRecord {
    pub name: String,
    pub member_count: i64,
}

/// Team repository
pub struct TeamRepository;

impl TeamRepository {
    /// Find team by name
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<TeamRecord>> {
        sqlx::query_as::<_, TeamRecord>(
            r#"SELECT id, name, creator FROM teams WHERE name = ?1"#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Create the team and enroll the creator in one transaction
    pub async fn create_with_creator(
        pool: &SqlitePool,
        name: &str,
        creator: &str,
    ) -> sqlx::Result<TeamRecord> {
        let mut tx = pool.begin().await?;

        let team = sqlx::query_as::<_, TeamRecord>(
            r#"
            INSERT INTO teams (name, creator)
            VALUES (?1, ?2)
            RETURNING id, name, creator
            "#,
        )
        .bind(name)
        .bind(creator)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"INSERT INTO team_members (team_name, username) VALUES (?1, ?2)"#)
            .bind(name)
            .bind(creator)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(team)
    }

    /// Idempotent enrollment; an existing (team, user) pair is left alone
    pub async fn add_member(pool: &SqlitePool, team_name: &str, username: &str) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"INSERT OR IGNORE INTO team_members (team_name, username) VALUES (?1, ?2)"#,
        )
        .bind(team_name)
        .bind(username)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Team the user belongs to, if any
    ///
    /// Ordered by row id so the pick stays deterministic even over legacy
    /// data that holds more than one membership row.
    pub async fn membership(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT team_name
            FROM team_members
            WHERE username = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Remove every membership row for a user, returning the number removed
    pub async fn remove_membership(pool: &SqlitePool, username: &str) -> sqlx::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM team_members WHERE username = ?1"#)
            .bind(username)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove one member from one team, returning the number removed
    pub async fn remove_member(
        pool: &SqlitePool,
        team_name: &str,
        username: &str,
    ) -> sqlx::Result<u64> {
        let result =
            sqlx::query(r#"DELETE FROM team_members WHERE team_name = ?1 AND username = ?2"#)
                .bind(team_name)
                .bind(username)
                .execute(pool)
                .await?;

        Ok(result.rows_affected())
    }

    /// Delete memberships then the team row in one transaction
    pub async fn delete_with_members(pool: &SqlitePool, name: &str) -> sqlx::Result<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM team_members WHERE team_name = ?1"#)
            .bind(name)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"DELETE FROM teams WHERE name = ?1"#)
            .bind(name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }

    /// Usernames of a team's members, in join order
    pub async fn members(pool: &SqlitePool, team_name: &str) -> sqlx::Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT username
            FROM team_members
            WHERE team_name = ?1
            ORDER BY id
            "#,
        )
        .bind(team_name)
        .fetch_all(pool)
        .await
    }

    /// All teams with member counts; zero-member teams are included
    pub async fn list_with_counts(pool: &SqlitePool) -> sqlx::Result<Vec<TeamCountRecord>> {
        sqlx::query_as::<_, TeamCountRecord>(
            r#"
            SELECT t.name AS name, COUNT(m.username) AS member_count
            FROM teams t
            LEFT JOIN team_members m ON m.team_name = t.name
            GROUP BY t.id, t.name
            ORDER BY t.name
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
