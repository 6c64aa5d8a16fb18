use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::access_code::AccessCode;
use crate::domain::invite::errors::InviteError;
use crate::domain::invite::models::CreateInviteCommand;
use crate::domain::invite::models::InviteId;
use crate::domain::invite::models::UserInvite;
use crate::domain::user::models::UserId;

/// Port for invite operations.
#[async_trait]
pub trait InviteServicePort: Send + Sync + 'static {
    /// Issue a new single-use invite.
    ///
    /// # Returns
    /// Created invite with a fresh 16-character hex code
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_invite(&self, command: CreateInviteCommand) -> Result<UserInvite, InviteError>;

    /// Look up a redeemable invite.
    ///
    /// # Errors
    /// * `NotFound` - No such code
    /// * `AlreadyUsed` - Invite was redeemed (checked before expiry)
    /// * `Expired` - Expiry has passed
    /// * `DatabaseError` - Database operation failed
    async fn get_invite(&self, code: &AccessCode) -> Result<UserInvite, InviteError>;

    /// Redeem an invite on behalf of a user.
    ///
    /// # Returns
    /// Invite with `used_at` and `used_by` set
    ///
    /// # Errors
    /// * `NotFound` - No such code
    /// * `AlreadyUsed` - Invite was redeemed, including by a concurrent request
    /// * `Expired` - Expiry has passed
    /// * `EmailAlreadyRegistered` - Invite's target email belongs to an existing account
    /// * `DatabaseError` - Database operation failed
    async fn use_invite(&self, code: &AccessCode, used_by: &UserId)
        -> Result<UserInvite, InviteError>;

    /// List all invites, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_invites(&self) -> Result<Vec<UserInvite>, InviteError>;

    /// Remove an invite.
    ///
    /// # Errors
    /// * `NotFound` - No such invite
    /// * `DatabaseError` - Database operation failed
    async fn delete_invite(&self, id: &InviteId) -> Result<(), InviteError>;
}

/// Persistence operations for invites.
#[async_trait]
pub trait InviteRepository: Send + Sync + 'static {
    /// Persist a new invite.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, invite: UserInvite) -> Result<UserInvite, InviteError>;

    /// Retrieve an invite by code.
    ///
    /// # Returns
    /// Optional invite (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_code(&self, code: &AccessCode) -> Result<Option<UserInvite>, InviteError>;

    /// Retrieve all invites, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<UserInvite>, InviteError>;

    /// Atomically mark an invite used if it is unused and unexpired at `now`.
    ///
    /// # Returns
    /// The updated invite, or None if the precondition no longer held
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn mark_used(
        &self,
        id: &InviteId,
        used_by: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Option<UserInvite>, InviteError>;

    /// Remove an invite.
    ///
    /// # Errors
    /// * `NotFound` - Invite does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &InviteId) -> Result<(), InviteError>;
}
