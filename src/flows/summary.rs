use tracing::instrument;

use crate::client::Gateway;
use crate::models::ClientSummaryRow;
use crate::notify::{NotificationKind, Notifier};
use crate::session::SessionContext;

/// Loads the receipt summary for the session's current client. Employees
/// without a client selected get one validation notification and an empty
/// table; a backend failure likewise empties the table and notifies once.
#[instrument(skip(gateway, notifier, session), fields(user = %session.username))]
pub async fn load_client_summary(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    session: &SessionContext,
) -> Vec<ClientSummaryRow> {
    let Some(client) = session.current_client.as_deref() else {
        notifier.notify(NotificationKind::Validation, "Select a client first");
        return Vec::new();
    };

    match gateway.client_summary(client).await {
        Ok(rows) => rows,
        Err(e) => {
            notifier.notify(e.notification_kind(), &e.to_string());
            Vec::new()
        }
    }
}
