//! In-memory implementation of the DevOps Bootcamp API.
//!
//! Single objects are read from `/{segment}/id/{id}` and replaced or deleted
//! at `/{segment}/{id}`, matching the real backend. Collections keep
//! insertion order. Updates are full replacements.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dev {
    pub id: String,
    pub name: String,
    pub engineers: Vec<Engineer>,
}

#[derive(Deserialize)]
pub struct EngineerInput {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct DevInput {
    pub name: String,
    #[serde(default)]
    pub engineers: Vec<EngineerInput>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub engineers: Vec<Engineer>,
    pub devs: Vec<Dev>,
}

pub type Db = Arc<RwLock<Store>>;

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

fn engineer(id: &str, name: &str, email: &str) -> Engineer {
    Engineer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

impl Store {
    /// Fixture with three engineers and two dev groups.
    pub fn seeded() -> Self {
        let ryan = engineer("UCS24", "Ryan", "ryan@ferrets.com");
        let john = engineer("UCS25", "John Doe", "john.doe@example.com");
        let jane = engineer("UCS26", "Jane Smith", "jane.smith@example.com");
        Self {
            devs: vec![
                Dev {
                    id: "DEV01".to_string(),
                    name: "dev_ferrets".to_string(),
                    engineers: vec![ryan.clone()],
                },
                Dev {
                    id: "DEV02".to_string(),
                    name: "dev_badgers".to_string(),
                    engineers: vec![john.clone(), jane.clone()],
                },
            ],
            engineers: vec![ryan, john, jane],
        }
    }
}

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn seeded_app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/engineers", get(list_engineers).post(create_engineer))
        .route("/engineers/id/{id}", get(get_engineer))
        .route("/engineers/{id}", put(update_engineer).delete(delete_engineer))
        .route("/dev", get(list_devs).post(create_dev))
        .route("/dev/id/{id}", get(get_dev))
        .route("/dev/{id}", put(update_dev).delete(delete_dev))
        .with_state(db)
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

fn materialize(engineers: Vec<EngineerInput>) -> Vec<Engineer> {
    engineers
        .into_iter()
        .map(|e| Engineer {
            id: e.id.unwrap_or_else(new_id),
            name: e.name,
            email: e.email,
        })
        .collect()
}

// --- engineers ---

async fn list_engineers(State(db): State<Db>) -> Json<Vec<Engineer>> {
    Json(db.read().await.engineers.clone())
}

async fn create_engineer(
    State(db): State<Db>,
    Json(input): Json<EngineerInput>,
) -> (StatusCode, Json<Engineer>) {
    let created = Engineer {
        id: new_id(),
        name: input.name,
        email: input.email,
    };
    db.write().await.engineers.push(created.clone());
    (StatusCode::CREATED, Json(created))
}

async fn get_engineer(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Engineer>, StatusCode> {
    let store = db.read().await;
    store
        .engineers
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_engineer(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<EngineerInput>,
) -> Result<Json<Engineer>, StatusCode> {
    let mut store = db.write().await;
    let found = store
        .engineers
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    found.name = input.name;
    found.email = input.email;
    Ok(Json(found.clone()))
}

async fn delete_engineer(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let index = store
        .engineers
        .iter()
        .position(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store.engineers.remove(index);
    Ok(StatusCode::NO_CONTENT)
}

// --- dev ---

async fn list_devs(State(db): State<Db>) -> Json<Vec<Dev>> {
    Json(db.read().await.devs.clone())
}

async fn create_dev(
    State(db): State<Db>,
    Json(input): Json<DevInput>,
) -> (StatusCode, Json<Dev>) {
    let created = Dev {
        id: new_id(),
        name: input.name,
        engineers: materialize(input.engineers),
    };
    db.write().await.devs.push(created.clone());
    (StatusCode::CREATED, Json(created))
}

async fn get_dev(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Dev>, StatusCode> {
    let store = db.read().await;
    store
        .devs
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_dev(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<DevInput>,
) -> Result<Json<Dev>, StatusCode> {
    let mut store = db.write().await;
    let found = store
        .devs
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    found.name = input.name;
    found.engineers = materialize(input.engineers);
    Ok(Json(found.clone()))
}

async fn delete_dev(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let index = store
        .devs
        .iter()
        .position(|d| d.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store.devs.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
