//! Team service: creation, membership, admin actions, listings

use crate::error::{AppError, AppResult};
use crate::repositories::{TeamRepository, UserRepository};
use fittrack_shared::validation;
use fittrack_shared::TeamOverview;
use sqlx::SqlitePool;
use tracing::info;

/// Team service
pub struct TeamService;

impl TeamService {
    /// Create a team and enroll the creator as its first member
    ///
    /// A user already on a team cannot create another one.
    pub async fn create(pool: &SqlitePool, name: &str, creator: &str) -> AppResult<()> {
        validation::validate_team_name(name).map_err(AppError::Validation)?;

        if !UserRepository::username_exists(pool, creator).await? {
            return Err(AppError::NotFound(format!("User '{creator}' not found")));
        }
        if let Some(current) = TeamRepository::membership(pool, creator).await? {
            return Err(AppError::Conflict(format!(
                "Already a member of team '{current}'"
            )));
        }

        TeamRepository::create_with_creator(pool, name, creator)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Team name already exists"))?;

        info!(team = name, creator, "Team created");
        Ok(())
    }

    /// Join a team
    ///
    /// Joining the team the user is already on is a no-op; joining while on
    /// a different team is a conflict.
    pub async fn join(pool: &SqlitePool, name: &str, username: &str) -> AppResult<()> {
        if TeamRepository::find_by_name(pool, name).await?.is_none() {
            return Err(AppError::NotFound(format!("Team '{name}' not found")));
        }
        if !UserRepository::username_exists(pool, username).await? {
            return Err(AppError::NotFound(format!("User '{username}' not found")));
        }

        match TeamRepository::membership(pool, username).await? {
            Some(current) if current == name => return Ok(()),
            Some(current) => {
                return Err(AppError::Conflict(format!(
                    "Already a member of team '{current}'"
                )));
            }
            None => {}
        }

        TeamRepository::add_member(pool, name, username).await?;
        info!(team = name, username, "Member joined");
        Ok(())
    }

    /// Leave the user's current team, whichever it is
    pub async fn leave(pool: &SqlitePool, username: &str) -> AppResult<()> {
        let removed = TeamRepository::remove_membership(pool, username).await?;
        if removed == 0 {
            return Err(AppError::NotFound(
                "You are not a member of any team".to_string(),
            ));
        }
        info!(username, "Member left team");
        Ok(())
    }

    /// Delete a team and all of its memberships; admin only
    pub async fn delete(pool: &SqlitePool, name: &str, requester: &str) -> AppResult<()> {
        let Some(team) = TeamRepository::find_by_name(pool, name).await? else {
            return Err(AppError::NotFound(format!("Team '{name}' not found")));
        };
        if team.creator != requester {
            return Err(AppError::Forbidden(
                "Only the team admin can delete the team".to_string(),
            ));
        }

        TeamRepository::delete_with_members(pool, name).await?;
        info!(team = name, requester, "Team deleted");
        Ok(())
    }

    /// Remove another member from the team; admin only
    ///
    /// Admins leave via [`TeamService::leave`] instead of removing
    /// themselves here.
    pub async fn remove_member(
        pool: &SqlitePool,
        name: &str,
        requester: &str,
        target: &str,
    ) -> AppResult<()> {
        let Some(team) = TeamRepository::find_by_name(pool, name).await? else {
            return Err(AppError::NotFound(format!("Team '{name}' not found")));
        };
        if team.creator != requester {
            return Err(AppError::Forbidden(
                "Only the team admin can remove members".to_string(),
            ));
        }
        if target == requester {
            return Err(AppError::Validation(
                "Admins cannot remove themselves; leave the team instead".to_string(),
            ));
        }

        let removed = TeamRepository::remove_member(pool, name, target).await?;
        if removed == 0 {
            return Err(AppError::NotFound(format!(
                "'{target}' is not a member of team '{name}'"
            )));
        }

        info!(team = name, requester, target, "Member removed");
        Ok(())
    }

    /// Name of the team the user belongs to, if any
    pub async fn team_of(pool: &SqlitePool, username: &str) -> AppResult<Option<String>> {
        Ok(TeamRepository::membership(pool, username).await?)
    }

    /// Whether the user is the admin (creator) of the team
    pub async fn is_admin(pool: &SqlitePool, name: &str, username: &str) -> AppResult<bool> {
        let team = TeamRepository::find_by_name(pool, name).await?;
        Ok(team.is_some_and(|t| t.creator == username))
    }

    /// Member usernames for a team, in join order
    pub async fn members(pool: &SqlitePool, name: &str) -> AppResult<Vec<String>> {
        if TeamRepository::find_by_name(pool, name).await?.is_none() {
            return Err(AppError::NotFound(format!("Team '{name}' not found")));
        }
        Ok(TeamRepository::members(pool, name).await?)
    }

    /// Every team with its member count, ordered by name
    pub async fn list(pool: &SqlitePool) -> AppResult<Vec<TeamOverview>> {
        let rows = TeamRepository::list_with_counts(pool).await?;
        Ok(rows
            .into_iter()
            .map(|r| TeamOverview {
                name: r.name,
                member_count: r.member_count,
            })
            .collect())
    }
}
