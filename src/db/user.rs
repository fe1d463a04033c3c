use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn find_user_by_id(&self, id: &Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(*id).one(&self.database_connection).await?)
    }

    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn count_users(&self) -> Result<u64, AppError> {
        Ok(User::find().count(&self.database_connection).await?)
    }

    /// Insert a new user. The unique constraints on username and email are
    /// the last line of defense against check-then-insert races.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        let uid = token::new_id();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            email: Set(payload.email),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            password: Set(payload.password),
            is_active: Set(payload.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(uid)
    }

    pub async fn set_username(
        &self,
        user: UserModel,
        username: String,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        am.username = Set(username);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn set_password(&self, user: UserModel, password: String) -> Result<(), AppError> {
        let mut am: UserActive = user.into();
        am.password = Set(password);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    pub async fn activate_user(&self, user: UserModel) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        am.is_active = Set(true);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_user(&self, user: UserModel) -> Result<(), AppError> {
        user.delete(&self.database_connection).await?;
        Ok(())
    }
}
