use crate::db::models::{Client, NewClient};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for the `clients` table
pub struct ClientRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        ClientRepository { conn }
    }

    /// Retrieves every client ordered by identifier
    pub fn list_clients(&mut self) -> Result<Vec<Client>, Error> {
        use crate::schema::clients::dsl::*;

        let found = clients
            .order_by(client_id.asc())
            .load::<Client>(self.conn)?;
        Ok(found)
    }

    /// Inserts a new client and reports whether a row was written
    pub fn insert_client(&mut self, new_client: &NewClient) -> Result<bool, Error> {
        use crate::schema::clients;

        let inserted = diesel::insert_into(clients::table)
            .values(new_client)
            .execute(self.conn)?;
        Ok(inserted == 1)
    }

    /// Deletes a client. Sales orders pointing at it are left untouched.
    pub fn remove_client(&mut self, the_client_id: i32) -> Result<bool, Error> {
        use crate::schema::clients;

        let deleted = diesel::delete(clients::table.find(the_client_id)).execute(self.conn)?;
        Ok(deleted > 0)
    }

    pub fn update_client(&mut self, the_client_id: i32, changes: &NewClient) -> Result<bool, Error> {
        use crate::schema::clients;

        let updated = diesel::update(clients::table.find(the_client_id))
            .set(changes)
            .execute(self.conn)?;
        Ok(updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_connection;

    fn client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            cpf: "123.456.789-00".to_string(),
            phone: "(16) 99999-0000".to_string(),
        }
    }

    #[test]
    fn insert_then_list_returns_assigned_identifiers() {
        let mut conn = test_connection();
        let mut repo = ClientRepository::new(&mut conn);

        assert!(repo.insert_client(&client("Maria")).unwrap());
        assert!(repo.insert_client(&client("João")).unwrap());

        let clients = repo.list_clients().unwrap();
        let names: Vec<_> = clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Maria", "João"]);
        assert_eq!(clients[1].client_id, 2);
    }

    #[test]
    fn identifiers_are_not_reused_after_removal() {
        let mut conn = test_connection();
        let mut repo = ClientRepository::new(&mut conn);
        repo.insert_client(&client("Maria")).unwrap();
        repo.insert_client(&client("João")).unwrap();

        assert!(repo.remove_client(2).unwrap());
        repo.insert_client(&client("Ana")).unwrap();

        let ids: Vec<_> = repo
            .list_clients()
            .unwrap()
            .iter()
            .map(|c| c.client_id)
            .collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn update_of_unknown_client_changes_nothing() {
        let mut conn = test_connection();
        let mut repo = ClientRepository::new(&mut conn);
        repo.insert_client(&client("Maria")).unwrap();

        assert!(!repo.update_client(5, &client("Pedro")).unwrap());
        assert!(repo.update_client(1, &client("Maria Silva")).unwrap());
        assert_eq!(repo.list_clients().unwrap()[0].name, "Maria Silva");
    }
}
