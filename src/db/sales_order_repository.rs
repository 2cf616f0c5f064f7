use crate::db::models::{NewSalesOrder, SalesOrder};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for the `sales_orders` table
pub struct SalesOrderRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> SalesOrderRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        SalesOrderRepository { conn }
    }

    /// Retrieves every sales order ordered by identifier
    pub fn list_orders(&mut self) -> Result<Vec<SalesOrder>, Error> {
        use crate::schema::sales_orders::dsl::*;

        let found = sales_orders
            .order_by(order_id.asc())
            .load::<SalesOrder>(self.conn)?;
        Ok(found)
    }

    /// Inserts a new sales order.
    ///
    /// The car and client references are stored as given, without checking
    /// that they exist.
    pub fn insert_order(&mut self, new_order: &NewSalesOrder) -> Result<bool, Error> {
        use crate::schema::sales_orders;

        let inserted = diesel::insert_into(sales_orders::table)
            .values(new_order)
            .execute(self.conn)?;
        Ok(inserted == 1)
    }

    pub fn remove_order(&mut self, the_order_id: i32) -> Result<bool, Error> {
        use crate::schema::sales_orders;

        let deleted =
            diesel::delete(sales_orders::table.find(the_order_id)).execute(self.conn)?;
        Ok(deleted > 0)
    }

    pub fn update_order(
        &mut self,
        the_order_id: i32,
        changes: &NewSalesOrder,
    ) -> Result<bool, Error> {
        use crate::schema::sales_orders;

        let updated = diesel::update(sales_orders::table.find(the_order_id))
            .set(changes)
            .execute(self.conn)?;
        Ok(updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_connection;
    use chrono::NaiveDate;

    fn order(car_id: i32, client_id: i32, value: f64) -> NewSalesOrder {
        NewSalesOrder {
            car_id,
            client_id,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            order_value: value,
        }
    }

    #[test]
    fn orders_accept_dangling_references() {
        let mut conn = test_connection();
        let mut repo = SalesOrderRepository::new(&mut conn);

        assert!(repo.insert_order(&order(99, 77, 52000.0)).unwrap());

        let orders = repo.list_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, 1);
        assert_eq!(orders[0].car_id, 99);
        assert_eq!(orders[0].client_id, 77);
        assert_eq!(
            orders[0].order_date,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn update_and_remove_target_a_single_order() {
        let mut conn = test_connection();
        let mut repo = SalesOrderRepository::new(&mut conn);
        repo.insert_order(&order(1, 1, 10000.0)).unwrap();
        repo.insert_order(&order(2, 2, 20000.0)).unwrap();

        assert!(repo.update_order(2, &order(2, 3, 25000.0)).unwrap());
        assert!(repo.remove_order(1).unwrap());
        assert!(!repo.remove_order(1).unwrap());

        let orders = repo.list_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, 2);
        assert_eq!(orders[0].client_id, 3);
        assert_eq!(orders[0].order_value, 25000.0);
    }
}
