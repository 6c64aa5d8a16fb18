use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::access_code::AccessCode;
use crate::domain::invite::errors::InviteError;
use crate::domain::invite::models::CreateInviteCommand;
use crate::domain::invite::models::InviteId;
use crate::domain::invite::models::UserInvite;
use crate::domain::invite::ports::InviteRepository;
use crate::domain::invite::ports::InviteServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for issuing and redeeming user invites.
pub struct InviteService<IR, UR>
where
    IR: InviteRepository,
    UR: UserRepository,
{
    repository: Arc<IR>,
    users: Arc<UR>,
}

impl<IR, UR> InviteService<IR, UR>
where
    IR: InviteRepository,
    UR: UserRepository,
{
    /// Create a new invite service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Invite persistence implementation
    /// * `users` - Credential store, consulted for already-registered emails
    pub fn new(repository: Arc<IR>, users: Arc<UR>) -> Self {
        Self { repository, users }
    }

    async fn find(&self, code: &AccessCode) -> Result<UserInvite, InviteError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| InviteError::NotFound(code.to_string()))
    }
}

#[async_trait]
impl<IR, UR> InviteServicePort for InviteService<IR, UR>
where
    IR: InviteRepository,
    UR: UserRepository,
{
    async fn create_invite(&self, command: CreateInviteCommand) -> Result<UserInvite, InviteError> {
        let invite = UserInvite {
            id: InviteId::new(),
            code: AccessCode::generate(),
            email: command.email,
            role: command.role,
            created_by: command.created_by,
            expires_at: command.expires_at,
            used_at: None,
            used_by: None,
            created_at: Utc::now(),
        };

        let created = self.repository.create(invite).await?;
        tracing::info!(
            invite_id = %created.id,
            role = %created.role,
            created_by = %created.created_by,
            "Invite created"
        );

        Ok(created)
    }

    async fn get_invite(&self, code: &AccessCode) -> Result<UserInvite, InviteError> {
        let invite = self.find(code).await?;
        invite.ensure_redeemable(Utc::now())?;
        Ok(invite)
    }

    async fn use_invite(
        &self,
        code: &AccessCode,
        used_by: &UserId,
    ) -> Result<UserInvite, InviteError> {
        let now = Utc::now();
        let invite = self.find(code).await?;
        invite.ensure_redeemable(now)?;

        if let Some(email) = &invite.email {
            if self.users.find_by_email(email).await?.is_some() {
                tracing::warn!(invite_id = %invite.id, "Invite target email already registered");
                return Err(InviteError::EmailAlreadyRegistered(email.to_string()));
            }
        }

        if let Some(used) = self.repository.mark_used(&invite.id, used_by, now).await? {
            tracing::info!(invite_id = %used.id, used_by = %used_by, "Invite used");
            return Ok(used);
        }

        // Lost the conditional update; report why from the current state.
        let current = self.find(code).await?;
        current.ensure_redeemable(now)?;
        tracing::warn!(invite_id = %current.id, "Invite redemption raced");
        Err(InviteError::AlreadyUsed)
    }

    async fn list_invites(&self) -> Result<Vec<UserInvite>, InviteError> {
        self.repository.list_all().await
    }

    async fn delete_invite(&self, id: &InviteId) -> Result<(), InviteError> {
        self.repository.delete(id).await?;
        tracing::info!(invite_id = %id, "Invite deleted");
        Ok(())
    }
}
