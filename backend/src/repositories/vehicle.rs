//! Vehicle repository.
//!
//! `VehicleRepositoryTrait` is the seam handlers talk to, so tests can swap in
//! `MockVehicleRepositoryTrait` and assert exactly which store calls happen.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::vehicle::{Vehicle, VehicleQuery};
use crate::types::VehicleId;

const TABLE_NAME: &str = "vehicles";
const SELECT_COLUMNS: &str = "id, title, description, vehicle_type, manufacturer, model, year, \
     mileage, price, location, featured, status, seats, fuel_type, transmission, color, images, \
     created_at, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepositoryTrait: Send + Sync {
    /// Every row matching the optional status, in the query's ordering.
    async fn list(&self, db: &PgPool, query: VehicleQuery) -> Result<Vec<Vehicle>, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: VehicleId) -> Result<Vehicle, AppError>;

    async fn create(&self, db: &PgPool, item: &Vehicle) -> Result<Vehicle, AppError>;

    async fn update(&self, db: &PgPool, item: &Vehicle) -> Result<Vehicle, AppError>;

    async fn delete(&self, db: &PgPool, id: VehicleId) -> Result<(), AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VehicleRepository;

impl VehicleRepository {
    pub fn new() -> Self {
        Self
    }

    fn base_select_query() -> String {
        format!("SELECT {} FROM {}", SELECT_COLUMNS, TABLE_NAME)
    }

    fn list_query(query: &VehicleQuery) -> String {
        let filter = if query.status.is_some() {
            " WHERE status = $1"
        } else {
            ""
        };
        format!(
            "{}{} ORDER BY {}",
            Self::base_select_query(),
            filter,
            query.ordering.order_by_clause()
        )
    }
}

#[async_trait]
impl VehicleRepositoryTrait for VehicleRepository {
    async fn list(&self, db: &PgPool, query: VehicleQuery) -> Result<Vec<Vehicle>, AppError> {
        let sql = Self::list_query(&query);
        let mut statement = sqlx::query_as::<_, Vehicle>(&sql);
        if let Some(status) = query.status {
            statement = statement.bind(status);
        }
        let rows = statement.fetch_all(db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, db: &PgPool, id: VehicleId) -> Result<Vehicle, AppError> {
        let query = format!("{} WHERE id = $1", Self::base_select_query());
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".into()))
    }

    async fn create(&self, db: &PgPool, item: &Vehicle) -> Result<Vehicle, AppError> {
        let query = format!(
            "INSERT INTO {} ({}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Vehicle>(&query)
            .bind(item.id)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.vehicle_type)
            .bind(&item.manufacturer)
            .bind(&item.model)
            .bind(item.year)
            .bind(item.mileage)
            .bind(item.price)
            .bind(&item.location)
            .bind(item.featured)
            .bind(item.status)
            .bind(item.seats)
            .bind(&item.fuel_type)
            .bind(&item.transmission)
            .bind(&item.color)
            .bind(&item.images)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn update(&self, db: &PgPool, item: &Vehicle) -> Result<Vehicle, AppError> {
        let query = format!(
            "UPDATE {} SET title = $2, description = $3, vehicle_type = $4, manufacturer = $5, \
             model = $6, year = $7, mileage = $8, price = $9, location = $10, featured = $11, \
             status = $12, seats = $13, fuel_type = $14, transmission = $15, color = $16, \
             images = $17, updated_at = $18 \
             WHERE id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(item.id)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.vehicle_type)
            .bind(&item.manufacturer)
            .bind(&item.model)
            .bind(item.year)
            .bind(item.mileage)
            .bind(item.price)
            .bind(&item.location)
            .bind(item.featured)
            .bind(item.status)
            .bind(item.seats)
            .bind(&item.fuel_type)
            .bind(&item.transmission)
            .bind(&item.color)
            .bind(&item.images)
            .bind(item.updated_at)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".into()))
    }

    async fn delete(&self, db: &PgPool, id: VehicleId) -> Result<(), AppError> {
        let query = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleStatus;

    #[test]
    fn vehicle_select_columns_include_expected_fields() {
        for column in ["vehicle_type", "featured", "status", "images", "created_at"] {
            assert!(SELECT_COLUMNS.contains(column), "missing {column}");
        }
    }

    #[test]
    fn public_list_query_filters_status_and_orders_featured_first() {
        let sql = VehicleRepository::list_query(&VehicleQuery::public_listing());
        assert!(sql.contains("WHERE status = $1"));
        assert!(sql.ends_with("ORDER BY featured DESC, created_at DESC"));
    }

    #[test]
    fn admin_list_query_without_status_has_no_filter() {
        let sql = VehicleRepository::list_query(&VehicleQuery::admin_listing(None));
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY created_at DESC"));

        let sql =
            VehicleRepository::list_query(&VehicleQuery::admin_listing(Some(VehicleStatus::Vendido)));
        assert!(sql.contains("WHERE status = $1"));
    }
}
