use crate::domain::User;
use chrono::NaiveDateTime;

#[derive(sqlx::FromRow, PartialEq, Eq, Clone, Debug)]
pub struct DbUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl TryFrom<DbUser> for User {
    type Error = anyhow::Error;

    // the column default always fills created_at, a NULL means the row was written by hand
    fn try_from(db_user: DbUser) -> Result<Self, Self::Error> {
        let created_at = db_user
            .created_at
            .ok_or_else(|| anyhow::anyhow!("User {} has no created_at timestamp", db_user.id))?;

        Ok(User {
            id: db_user.id,
            email: db_user.email,
            password: db_user.password,
            name: db_user.name,
            created_at,
        })
    }
}
