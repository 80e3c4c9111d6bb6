use sea_orm::EntityTrait;

use crate::error::ServiceError;

/// Turns a validated request payload into an insertable active model.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> Result<<E as EntityTrait>::ActiveModel, ServiceError>;
}
