//! HTTP front end for the shopping list.
//!
//! # Overview
//! Routes `/items` requests to the operations in `shopping_core::ops` and
//! turns their results into JSON responses. All failures, including
//! unmatched routes, leave through [`error::ApiError`].
//!
//! # Design
//! The store is injected as shared state (`Db`). Each request holds the lock
//! for the duration of one operation, so individual operations never
//! interleave. There is no coordination across requests: two clients
//! editing the same item see last-write-wins.

pub mod config;
pub mod dto;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shopping_core::{ops, Item, ItemPatch, ItemStore, NewItem};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use dto::{Added, ItemList, Message, Updated};
use error::ApiError;

pub type Db = Arc<RwLock<ItemStore>>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(Db::default())
}

/// Router over the given store.
pub fn router(db: Db) -> Router {
    Router::new()
        .nest("/items", item_routes())
        .fallback(not_found)
        .with_state(db)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

fn item_routes() -> Router<Db> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{name}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .method_not_allowed_fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<ItemList> {
    let store = db.read().await;
    Json(ItemList {
        items: ops::list(&store),
    })
}

async fn get_item(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let store = db.read().await;
    Ok(Json(ops::get(&store, &name)?))
}

async fn create_item(
    State(db): State<Db>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Added>), ApiError> {
    // No JSON body decodes as an empty item, which fails the required-field check.
    let input = match payload {
        Ok(Json(input)) => input,
        Err(JsonRejection::MissingJsonContentType(_)) => NewItem::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let added = ops::create(&mut *db.write().await, input)?;
    tracing::debug!(name = %added.name, "item added");
    Ok((StatusCode::CREATED, Json(Added { added })))
}

async fn update_item(
    State(db): State<Db>,
    Path(name): Path<String>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> Result<Json<Updated>, ApiError> {
    // A PATCH with no JSON body changes nothing but still has to find the item.
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(JsonRejection::MissingJsonContentType(_)) => ItemPatch::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let updated = ops::update(&mut *db.write().await, &name, patch)?;
    tracing::debug!(%name, "item updated");
    Ok(Json(Updated { updated }))
}

async fn delete_item(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Message>, ApiError> {
    ops::delete(&mut *db.write().await, &name)?;
    tracing::debug!(%name, "item deleted");
    Ok(Json(Message {
        message: "Deleted".to_string(),
    }))
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
