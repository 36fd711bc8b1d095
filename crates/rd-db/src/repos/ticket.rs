//! Ticket repository: insert, filtered search, status update, delete.

use rd_core::entities::{NewTicket, Ticket};
use rd_core::enums::{STATUS_COMPLETED, TicketView};

use crate::TicketStore;
use crate::error::DatabaseError;
use crate::helpers::{escape_like, get_opt_string, get_string_or_empty, is_unique_violation};

const SELECT_COLS: &str = "id, case_id, phone, email, model, status, remarks, date";

fn row_to_ticket(row: &libsql::Row) -> Result<Ticket, DatabaseError> {
    Ok(Ticket {
        id: row.get(0)?,
        case_id: get_string_or_empty(row, 1)?,
        phone: get_string_or_empty(row, 2)?,
        email: get_opt_string(row, 3)?,
        model: get_string_or_empty(row, 4)?,
        status: get_string_or_empty(row, 5)?,
        remarks: get_opt_string(row, 6)?,
        date: get_string_or_empty(row, 7)?,
    })
}

async fn fetch_by_id(conn: &libsql::Connection, id: i64) -> Result<Option<Ticket>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM tickets WHERE id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_ticket(&row)?)),
        None => Ok(None),
    }
}

impl TicketStore {
    /// Insert a new ticket and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateCaseId` if the case ID already exists,
    /// or another `DatabaseError` if the write fails.
    pub async fn insert(&self, ticket: NewTicket) -> Result<Ticket, DatabaseError> {
        let handle = self.connect().await?;
        let result = handle
            .conn
            .execute(
                "INSERT INTO tickets (case_id, phone, email, model, status, remarks, date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    ticket.case_id.as_str(),
                    ticket.phone.as_str(),
                    ticket.email.as_deref(),
                    ticket.model.as_str(),
                    ticket.status.as_str(),
                    ticket.remarks.as_deref(),
                    ticket.date.as_str()
                ],
            )
            .await;

        match result {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(DatabaseError::DuplicateCaseId(ticket.case_id));
            }
            Err(e) => return Err(e.into()),
        }

        let id = handle.conn.last_insert_rowid();
        Ok(ticket.into_ticket(id))
    }

    /// Fetch one ticket by id.
    pub async fn get(&self, id: i64) -> Result<Option<Ticket>, DatabaseError> {
        let handle = self.connect().await?;
        fetch_by_id(&handle.conn, id).await
    }

    /// List tickets in `view`, newest first.
    ///
    /// A non-blank `search` matches phone, email, case ID, or model as a
    /// case-insensitive substring.
    pub async fn query(
        &self,
        search: Option<&str>,
        view: TicketView,
    ) -> Result<Vec<Ticket>, DatabaseError> {
        let mut sql = format!(
            "SELECT {SELECT_COLS} FROM tickets WHERE status {} ?1",
            view.status_operator()
        );
        let mut params: Vec<libsql::Value> = vec![STATUS_COMPLETED.into()];

        if let Some(term) = search.map(str::trim).filter(|s| !s.is_empty()) {
            sql.push_str(
                " AND (phone LIKE ?2 ESCAPE '\\' OR email LIKE ?2 ESCAPE '\\' \
                 OR case_id LIKE ?2 ESCAPE '\\' OR model LIKE ?2 ESCAPE '\\')",
            );
            params.push(format!("%{}%", escape_like(term)).into());
        }
        sql.push_str(" ORDER BY id DESC");

        let handle = self.connect().await?;
        let mut rows = handle
            .conn
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut tickets = Vec::new();
        while let Some(row) = rows.next().await? {
            tickets.push(row_to_ticket(&row)?);
        }
        Ok(tickets)
    }

    /// Set the status of ticket `id`.
    ///
    /// Returns `None` when no such ticket exists (nothing is written).
    /// Otherwise returns the ticket carrying the new status, for the caller's
    /// notification. The read and the write are not isolated from other
    /// writers.
    pub async fn update_status(
        &self,
        id: i64,
        new_status: &str,
    ) -> Result<Option<Ticket>, DatabaseError> {
        let handle = self.connect().await?;
        let Some(current) = fetch_by_id(&handle.conn, id).await? else {
            return Ok(None);
        };

        handle
            .conn
            .execute(
                "UPDATE tickets SET status = ?1 WHERE id = ?2",
                libsql::params![new_status, id],
            )
            .await?;

        Ok(Some(Ticket {
            status: new_status.to_string(),
            ..current
        }))
    }

    /// Delete ticket `id`. Returns whether a row was removed; a missing id is
    /// not an error.
    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let handle = self.connect().await?;
        let affected = handle
            .conn
            .execute("DELETE FROM tickets WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rd_core::enums::STATUS_LOGGED;

    use super::*;
    use crate::test_support::helpers::test_store;

    fn new_ticket(case_id: &str, phone: &str, email: Option<&str>, model: &str) -> NewTicket {
        NewTicket {
            case_id: case_id.into(),
            phone: phone.into(),
            email: email.map(String::from),
            model: model.into(),
            status: STATUS_LOGGED.into(),
            remarks: Some("No power".into()),
            date: "2026-02-09 14:30".into(),
        }
    }

    #[tokio::test]
    async fn insert_roundtrip() {
        let (_dir, store) = test_store().await;

        let inserted = store
            .insert(new_ticket("CMT-ABC12345", "0123456789", Some("a@example.com"), "AlphaX"))
            .await
            .unwrap();
        assert!(inserted.id > 0);

        let fetched = store.get(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn insert_duplicate_case_id_fails_without_overwrite() {
        let (_dir, store) = test_store().await;
        let first = store
            .insert(new_ticket("CMT-DUPLICATE", "111", None, "First"))
            .await
            .unwrap();

        let result = store
            .insert(new_ticket("CMT-DUPLICATE", "222", None, "Second"))
            .await;
        assert!(
            matches!(result, Err(DatabaseError::DuplicateCaseId(ref id)) if id == "CMT-DUPLICATE")
        );

        let all = store.query(None, TicketView::Active).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].model, "First");
    }

    #[tokio::test]
    async fn null_email_roundtrips_as_none() {
        let (_dir, store) = test_store().await;
        let t = store
            .insert(new_ticket("CMT-NOEMAIL1", "0123", None, "BetaPhone"))
            .await
            .unwrap();
        let fetched = store.get(t.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, None);
    }

    #[tokio::test]
    async fn query_orders_newest_first() {
        let (_dir, store) = test_store().await;
        for (i, model) in ["One", "Two", "Three"].iter().enumerate() {
            store
                .insert(new_ticket(&format!("CMT-0000000{i}"), "0", None, model))
                .await
                .unwrap();
        }

        let models: Vec<String> = store
            .query(None, TicketView::Active)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.model)
            .collect();
        assert_eq!(models, vec!["Three", "Two", "One"]);
    }

    #[tokio::test]
    async fn query_search_matches_any_column_case_insensitively() {
        let (_dir, store) = test_store().await;
        store
            .insert(new_ticket("CMT-ABC12345", "0123456789", None, "AlphaX"))
            .await
            .unwrap();
        store
            .insert(new_ticket("CMT-XYZ98765", "0198765432", Some("beta@shop.test"), "Gamma"))
            .await
            .unwrap();

        let by_model = store.query(Some("alpha"), TicketView::Active).await.unwrap();
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].model, "AlphaX");

        let by_email = store.query(Some("BETA@"), TicketView::Active).await.unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].case_id, "CMT-XYZ98765");

        let by_case = store.query(Some("abc123"), TicketView::Active).await.unwrap();
        assert_eq!(by_case.len(), 1);

        let by_phone = store.query(Some("01"), TicketView::Active).await.unwrap();
        assert_eq!(by_phone.len(), 2);

        let none = store.query(Some("999"), TicketView::Active).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn query_search_treats_wildcards_literally() {
        let (_dir, store) = test_store().await;
        store
            .insert(new_ticket("CMT-AAAA0001", "0", None, "Model_1"))
            .await
            .unwrap();
        store
            .insert(new_ticket("CMT-AAAA0002", "0", None, "ModelX1"))
            .await
            .unwrap();

        let hits = store.query(Some("l_1"), TicketView::Active).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].model, "Model_1");

        assert!(store.query(Some("%"), TicketView::Active).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_search_lists_everything() {
        let (_dir, store) = test_store().await;
        store
            .insert(new_ticket("CMT-AAAA0001", "0", None, "A"))
            .await
            .unwrap();
        assert_eq!(store.query(Some("   "), TicketView::Active).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_status_moves_between_views() {
        let (_dir, store) = test_store().await;
        let t = store
            .insert(new_ticket("CMT-MOVE0001", "0", Some("a@example.com"), "AlphaX"))
            .await
            .unwrap();

        let updated = store.update_status(t.id, STATUS_COMPLETED).await.unwrap().unwrap();
        assert_eq!(updated.status, STATUS_COMPLETED);
        assert_eq!(updated.email.as_deref(), Some("a@example.com"));
        assert_eq!(updated.case_id, "CMT-MOVE0001");

        assert!(store.query(None, TicketView::Active).await.unwrap().is_empty());
        let completed = store.query(None, TicketView::Completed).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, t.id);
    }

    #[tokio::test]
    async fn update_status_missing_id_returns_none() {
        let (_dir, store) = test_store().await;
        let t = store
            .insert(new_ticket("CMT-KEEP0001", "0", None, "A"))
            .await
            .unwrap();

        assert!(store.update_status(t.id + 100, "Completed").await.unwrap().is_none());
        let unchanged = store.get(t.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, STATUS_LOGGED);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (_dir, store) = test_store().await;
        let t = store
            .insert(new_ticket("CMT-GONE0001", "0", None, "A"))
            .await
            .unwrap();

        assert!(store.delete(t.id).await.unwrap());
        assert!(!store.delete(t.id).await.unwrap());
        assert!(store.get(t.id).await.unwrap().is_none());
    }
}
