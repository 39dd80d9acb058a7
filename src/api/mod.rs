use rocket::{http::Status, Catcher, Request, Route};

use crate::model::api::{Empty, Reply};

mod admin;
mod public;
mod voting;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(admin::routes());
    routes.extend(public::routes());
    routes.extend(voting::routes());
    routes
}

/// Catchers that keep failures outside our handlers (bad JSON, unknown routes)
/// in the same `{status, message}` shape as everything else.
pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request<'_>) -> Reply<Empty> {
    let message = match status.code {
        400 | 422 => "Malformed request body".to_string(),
        404 => "No such operation".to_string(),
        code if code >= 500 => "Internal server error".to_string(),
        _ => status.reason_lossy().to_string(),
    };
    Reply::Error {
        message,
        code: status,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::{serde_json, Value},
    };

    use crate::store::ElectionStore;

    #[backend_test]
    async fn unknown_route_gets_json_error(client: Client) {
        let response = client.get("/no-such-thing").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "No such operation");
    }

    #[backend_test]
    async fn malformed_body_changes_nothing(client: Client, store: Arc<ElectionStore>) {
        let response = client
            .post("/register-voter")
            .header(ContentType::JSON)
            .body("{not json")
            .dispatch()
            .await;
        assert_eq!(response.status().class(), Status::BadRequest.class());
        let body: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(body["status"], "error");

        assert!(store.audit_log(0).unwrap().is_empty());
    }
}
