//! Song API routes

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::core::SongService;
use crate::errors::SongError;
use crate::models::{SongFilter, SongUpdate};

/// Add song request
#[derive(Debug, Deserialize)]
pub struct AddSongBody {
    pub song: String,
    pub group: String,
}

/// List songs request
#[derive(Debug, Deserialize)]
pub struct ListSongsBody {
    #[serde(default)]
    pub filter: SongFilter,
    #[serde(default)]
    pub page: u32,
}

/// Song text query parameters
#[derive(Debug, Deserialize)]
pub struct SongTextQuery {
    pub id: i64,
    pub verse: Option<usize>,
}

fn internal_error(err: SongError) -> HttpResponse {
    tracing::error!("request failed: {}", err);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "unexpected error" }))
}

/// List songs matching a filter, one page at a time
#[post("/list-songs")]
pub async fn list_songs(
    body: web::Json<ListSongsBody>,
    service: web::Data<SongService>,
) -> impl Responder {
    match service.list(&body.filter, body.page).await {
        Ok(songs) => HttpResponse::Ok().json(serde_json::json!({ "songs": songs })),
        Err(SongError::NoSongs) => HttpResponse::NoContent().finish(),
        Err(e) => internal_error(e),
    }
}

/// Add a new song to the depository
#[post("/song")]
pub async fn add_song(
    body: web::Json<AddSongBody>,
    service: web::Data<SongService>,
) -> impl Responder {
    match service.add(&body.song, &body.group).await {
        Ok(id) => HttpResponse::Created().json(serde_json::json!({ "id": id })),
        Err(e @ SongError::Validation(_)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e @ SongError::SongDetail) => {
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => internal_error(e),
    }
}

/// Edit any of a song's fields
#[put("/song/{song_id}")]
pub async fn modify_song(
    path: web::Path<i64>,
    body: web::Json<SongUpdate>,
    service: web::Data<SongService>,
) -> impl Responder {
    let song_id = path.into_inner();

    match service.modify(song_id, &body).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e @ SongError::SongNotFound) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => internal_error(e),
    }
}

/// Delete a song from the depository
#[delete("/song/{song_id}")]
pub async fn delete_song(path: web::Path<i64>, service: web::Data<SongService>) -> impl Responder {
    let song_id = path.into_inner();

    match service.remove(song_id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e @ SongError::SongNotFound) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => internal_error(e),
    }
}

/// Get one verse of a song's text (verse defaults to 0)
#[get("/song-text")]
pub async fn get_song_text(
    query: web::Query<SongTextQuery>,
    service: web::Data<SongService>,
) -> impl Responder {
    let verse = query.verse.unwrap_or(0);

    match service.verse(query.id, verse).await {
        Ok(text) => HttpResponse::Ok().json(serde_json::json!({ "text": text })),
        Err(e) if e.is_not_found() => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => internal_error(e),
    }
}

/// Configure song routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_songs)
        .service(add_song)
        .service(modify_song)
        .service(delete_song)
        .service(get_song_text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{memory_pool, SongTable};
    use crate::models::Song;
    use crate::plugins::MusicInfoClient;
    use actix_web::{test, App};
    use chrono::{NaiveDate, Utc};

    async fn test_table() -> SongTable {
        SongTable::new(memory_pool().await, 10)
    }

    fn test_service(table: &SongTable) -> web::Data<SongService> {
        web::Data::new(SongService::new(
            table.clone(),
            MusicInfoClient::new("http://127.0.0.1:1"),
        ))
    }

    async fn seed_song(table: &SongTable) -> i64 {
        let now = Utc::now();
        table
            .create(&Song {
                id: 0,
                created_at: now,
                updated_at: now,
                name: "Starlight".to_string(),
                group: "Muse".to_string(),
                text: "A\n\nB\n\nC".to_string(),
                release_date: NaiveDate::from_ymd_opt(2006, 7, 3).unwrap(),
                link: "https://example.com/watch".to_string(),
            })
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_list_songs_empty_is_no_content() {
        let table = test_table().await;
        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/list-songs")
            .set_json(serde_json::json!({ "filter": {}, "page": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_list_songs_returns_page() {
        let table = test_table().await;
        seed_song(&table).await;

        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/list-songs")
            .set_json(serde_json::json!({ "filter": { "group": "Mus" } }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["songs"].as_array().unwrap().len(), 1);
        assert_eq!(body["songs"][0]["song"], "Starlight");
        assert_eq!(body["songs"][0]["group"], "Muse");
    }

    #[actix_web::test]
    async fn test_add_song_unavailable_provider_is_503() {
        let table = test_table().await;
        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/song")
            .set_json(serde_json::json!({ "song": "Starlight", "group": "Muse" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[actix_web::test]
    async fn test_add_song_blank_name_is_400() {
        let table = test_table().await;
        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/song")
            .set_json(serde_json::json!({ "song": "  ", "group": "Muse" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_modify_missing_song_is_404() {
        let table = test_table().await;
        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/song/42")
            .set_json(serde_json::json!({ "text": "new text" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_song_roundtrip() {
        let table = test_table().await;
        let id = seed_song(&table).await;

        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/song/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/song/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_song_text_returns_requested_verse() {
        let table = test_table().await;
        let id = seed_song(&table).await;

        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/song-text?id={}&verse=1", id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "B");

        // verse defaults to 0
        let req = test::TestRequest::get()
            .uri(&format!("/song-text?id={}", id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "A");
    }

    #[actix_web::test]
    async fn test_song_text_out_of_range_verse_is_404() {
        let table = test_table().await;
        let id = seed_song(&table).await;

        let app = test::init_service(
            App::new()
                .app_data(test_service(&table))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/song-text?id={}&verse=3", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
