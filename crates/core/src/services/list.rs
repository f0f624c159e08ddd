//! List lifecycle service.

use reelist_common::{AppResult, SlugScope};
use reelist_db::entities::{list, list_slug_history};
use reelist_db::repositories::ListRepository;
use serde::Deserialize;
use validator::Validate;

use super::slug::SlugService;

/// Input for creating a list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListInput {
    /// Display name; also the source of the slug.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Input for renaming a list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameListInput {
    /// New display name; a fresh slug is allocated from it.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Service for managing lists.
#[derive(Clone)]
pub struct ListService {
    list_repo: ListRepository,
    slugs: SlugService,
}

impl ListService {
    /// Create a new list service.
    #[must_use]
    pub const fn new(list_repo: ListRepository, slugs: SlugService) -> Self {
        Self { list_repo, slugs }
    }

    /// Get a list by ID.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<list::Model>> {
        self.list_repo.find_by_id(id).await
    }

    /// Get a user's list by its live slug.
    pub async fn get_by_slug(&self, owner_id: i64, slug: &str) -> AppResult<Option<list::Model>> {
        self.list_repo.find_by_slug(owner_id, slug).await
    }

    /// List a user's lists, most recently updated first.
    pub async fn list_for_user(
        &self,
        user_id: i64,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<list::Model>> {
        self.list_repo.find_by_user(user_id, limit, offset).await
    }

    /// Retired slugs for a list, oldest first.
    pub async fn slug_history(&self, list_id: i64) -> AppResult<Vec<list_slug_history::Model>> {
        self.list_repo.slug_history(list_id).await
    }

    /// Create a new list with a freshly allocated slug.
    pub async fn create(&self, user_id: i64, input: CreateListInput) -> AppResult<list::Model> {
        input.validate()?;

        let slug = self
            .slugs
            .allocate(user_id, &input.name, SlugScope::List)
            .await?;

        self.list_repo.create(user_id, &input.name, &slug).await
    }

    /// Rename a list the actor owns.
    ///
    /// A fresh slug is allocated against both live and retired slugs, then
    /// the prior slug is retired into the history table in the same
    /// transaction as the update. Absent and not-owned lists both surface as
    /// not-found.
    pub async fn rename(
        &self,
        actor_id: i64,
        list_id: i64,
        input: RenameListInput,
    ) -> AppResult<list::Model> {
        input.validate()?;

        let list = self.list_repo.get_owned(list_id, actor_id).await?;

        let slug = self
            .slugs
            .allocate(list.user_id, &input.name, SlugScope::List)
            .await?;

        self.list_repo.rename(list_id, &input.name, &slug).await
    }

    /// Delete a list the actor owns. Dependents cascade.
    pub async fn delete(&self, actor_id: i64, list_id: i64) -> AppResult<()> {
        self.list_repo.get_owned(list_id, actor_id).await?;
        self.list_repo.delete(list_id).await
    }
}
