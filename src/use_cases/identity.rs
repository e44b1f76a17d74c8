use crate::domain::entities::SessionIdentity;
use crate::domain::errors::DashboardError;
use crate::domain::ports::OperatorPrompt;

// Returns the session user id, asking the operator for one the first time
// it is needed. A cancelled dialog or an empty answer declines: the
// operator is alerted and the session is left unauthenticated, so the next
// privileged operation asks again.
pub fn ensure_user_id<O: OperatorPrompt>(
    session: &mut SessionIdentity,
    operator: &O,
) -> Result<String, DashboardError> {
    if let Some(user_id) = &session.user_id {
        return Ok(user_id.clone());
    }

    match operator.request_user_id() {
        Some(answer) if !answer.is_empty() => {
            session.user_id = Some(answer.clone());
            Ok(answer)
        }
        _ => {
            operator.alert("A user ID is required.");
            Err(DashboardError::IdentityDeclined)
        }
    }
}
