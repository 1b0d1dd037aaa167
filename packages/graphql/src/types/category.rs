use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use uuid::Uuid;

#[derive(SimpleObject, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(SimpleObject)]
pub struct DeletedCategory {
    pub id: Uuid,
}

impl From<&models::categories::Model> for Category {
    fn from(c: &models::categories::Model) -> Self {
        Category {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
            description: c.description.clone(),
            created_at: c.created_at,
        }
    }
}
