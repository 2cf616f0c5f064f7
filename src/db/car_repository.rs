use crate::db::models::{Car, NewCar};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for the `cars` table
pub struct CarRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        CarRepository { conn }
    }

    /// Retrieves every car ordered by identifier
    ///
    /// # Errors
    ///
    /// Returns an Error if the query fails
    pub fn list_cars(&mut self) -> Result<Vec<Car>, Error> {
        use crate::schema::cars::dsl::*;

        let found = cars.order_by(car_id.asc()).load::<Car>(self.conn)?;
        Ok(found)
    }

    /// Inserts a new car, the identifier is assigned by SQLite
    ///
    /// # Returns
    ///
    /// `true` when exactly one row was written
    pub fn insert_car(&mut self, new_car: &NewCar) -> Result<bool, Error> {
        use crate::schema::cars;

        let inserted = diesel::insert_into(cars::table)
            .values(new_car)
            .execute(self.conn)?;
        Ok(inserted == 1)
    }

    /// Deletes the car with the given identifier
    ///
    /// # Returns
    ///
    /// `false` when no car has that identifier
    pub fn remove_car(&mut self, the_car_id: i32) -> Result<bool, Error> {
        use crate::schema::cars;

        let deleted = diesel::delete(cars::table.find(the_car_id)).execute(self.conn)?;
        Ok(deleted > 0)
    }

    /// Overwrites every attribute of the car with the given identifier
    ///
    /// # Returns
    ///
    /// `false` when no car has that identifier
    pub fn update_car(&mut self, the_car_id: i32, changes: &NewCar) -> Result<bool, Error> {
        use crate::schema::cars;

        let updated = diesel::update(cars::table.find(the_car_id))
            .set(changes)
            .execute(self.conn)?;
        Ok(updated > 0)
    }
}
