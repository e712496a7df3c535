//! Stateless HTTP request builder and response parser for the Bootcamp API.
//!
//! # Design
//! `BootcampClient` holds only the endpoint and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `ApiClient` runs the round-trip in between.
//!
//! Lookup and mutation paths differ on purpose: a single object is read from
//! `{segment}/id/{id}` but replaced and deleted at `{segment}/{id}`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::RemoteObject;

/// Builds requests and parses responses for every `RemoteObject` kind.
#[derive(Debug, Clone)]
pub struct BootcampClient {
    endpoint: String,
}

impl BootcampClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn collection_url<R: RemoteObject>(&self) -> String {
        format!("{}/{}", self.endpoint, R::SEGMENT)
    }

    fn lookup_url<R: RemoteObject>(&self, id: &str) -> String {
        format!("{}/{}/id/{id}", self.endpoint, R::SEGMENT)
    }

    fn object_url<R: RemoteObject>(&self, id: &str) -> String {
        format!("{}/{}/{id}", self.endpoint, R::SEGMENT)
    }

    pub fn build_list<R: RemoteObject>(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url::<R>(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get<R: RemoteObject>(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.lookup_url::<R>(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create<R: RemoteObject>(&self, fields: &R::Fields) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(fields).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url::<R>(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update<R: RemoteObject>(
        &self,
        id: &str,
        fields: &R::Fields,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(fields).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.object_url::<R>(id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete<R: RemoteObject>(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.object_url::<R>(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list<R: RemoteObject>(&self, response: HttpResponse) -> Result<Vec<R>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Parse the single object returned by get, create and update.
    pub fn parse_object<R: RemoteObject>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Only the status matters; the body is discarded.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Any malformed body, invalid UTF-8 included, is a decode failure.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.text().into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dev, DevFields, Engineer, EngineerFields};

    fn client() -> BootcampClient {
        BootcampClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status, body)
    }

    #[test]
    fn build_list_engineers_produces_correct_request() {
        let req = client().build_list::<Engineer>();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/engineers");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_devs_uses_singular_segment() {
        let req = client().build_list::<Dev>();
        assert_eq!(req.url, "http://localhost:8080/dev");
    }

    #[test]
    fn lookup_path_has_id_segment() {
        let req = client().build_get::<Engineer>("UCS24");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/engineers/id/UCS24");

        let req = client().build_get::<Dev>("D1");
        assert_eq!(req.url, "http://localhost:8080/dev/id/D1");
    }

    #[test]
    fn mutation_paths_have_no_id_segment() {
        let fields = EngineerFields::new("Ryan", "ryan@ferrets.com");
        let req = client().build_update::<Engineer>("UCS24", &fields).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:8080/engineers/UCS24");

        let req = client().build_delete::<Dev>("D1");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8080/dev/D1");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_engineer_sends_write_shape() {
        let fields = EngineerFields::new("Ryan", "ryan@ferrets.com");
        let req = client().build_create::<Engineer>(&fields).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/engineers");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ryan", "email": "ryan@ferrets.com"})
        );
    }

    #[test]
    fn build_update_dev_sends_full_engineer_list() {
        let fields = DevFields::new(
            "dev_ferrets",
            vec![
                EngineerFields::new("Ryan", "ryan@ferrets.com"),
                EngineerFields::new("Jane Smith", "jane.smith@example.com"),
            ],
        );
        let req = client().build_update::<Dev>("D1", &fields).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "dev_ferrets");
        assert_eq!(body["engineers"].as_array().unwrap().len(), 2);
        assert_eq!(body["engineers"][1]["name"], "Jane Smith");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_dev_with_empty_list_still_sends_field() {
        let fields = DevFields::new("dev_ferrets", Vec::new());
        let req = client().build_update::<Dev>("D1", &fields).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["engineers"], serde_json::json!([]));
    }

    #[test]
    fn parse_list_engineers_success() {
        let engineers = client()
            .parse_list::<Engineer>(response(
                200,
                r#"[{"id":"UCS24","name":"Ryan","email":"ryan@ferrets.com"}]"#,
            ))
            .unwrap();
        assert_eq!(engineers.len(), 1);
        assert_eq!(engineers[0].id, "UCS24");
    }

    #[test]
    fn parse_list_rejects_single_object() {
        let err = client()
            .parse_list::<Engineer>(response(
                200,
                r#"{"id":"UCS24","name":"Ryan","email":"ryan@ferrets.com"}"#,
            ))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_dev_keeps_engineer_order() {
        let dev = client()
            .parse_object::<Dev>(response(
                200,
                r#"{"id":"D1","name":"dev_ferrets","engineers":[
                    {"id":"B","name":"Second","email":"b@x.com"},
                    {"id":"A","name":"First","email":"a@x.com"}]}"#,
            ))
            .unwrap();
        let ids: Vec<&str> = dev.engineers.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn parse_get_not_found() {
        let err = client()
            .parse_object::<Engineer>(response(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let engineer = client()
            .parse_object::<Engineer>(response(
                201,
                r#"{"id":"UCS24","name":"Ryan","email":"ryan@ferrets.com"}"#,
            ))
            .unwrap();
        assert_eq!(engineer.name, "Ryan");
    }

    #[test]
    fn parse_create_wrong_status() {
        let err = client()
            .parse_object::<Engineer>(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(err.is_transport());
    }

    #[test]
    fn parse_bad_json_is_decode_error() {
        let err = client()
            .parse_object::<Dev>(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_invalid_utf8_is_decode_error() {
        let err = client()
            .parse_list::<Engineer>(HttpResponse::new(200, b"[\xff\xfe]".to_vec()))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn bad_status_body_is_kept_as_text() {
        let err = client()
            .parse_object::<Dev>(HttpResponse::new(502, b"gateway \xff".to_vec()))
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 502);
                assert!(body.starts_with("gateway "));
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn parse_delete_ignores_body() {
        assert!(client().parse_delete(response(200, "deleted!")).is_ok());
        assert!(client().parse_delete(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_reports_bad_status() {
        let err = client().parse_delete(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        let err = client().parse_delete(response(503, "down")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BootcampClient::new("http://localhost:8080/");
        assert_eq!(client.endpoint(), "http://localhost:8080");
        let req = client.build_list::<Engineer>();
        assert_eq!(req.url, "http://localhost:8080/engineers");
    }
}
