pub mod carbon;
pub mod forum;
pub mod health;
pub mod news;
pub mod swagger;
pub mod tips;
pub mod tracker;
pub mod users;

use actix_web::{error, web, HttpRequest};
use crate::utils::AppError;

/// Registers every route plus the extractor error handlers. Shared by
/// `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .route("/", web::get().to(health::read_root))
        .route("/health", web::get().to(health::health_check))
        // Users
        .route("/signup", web::post().to(users::signup))
        .route("/users", web::get().to(users::list_users))
        // Eco tips (static)
        .route("/tips", web::get().to(tips::get_tips))
        // Tracker
        .service(
            web::scope("/tracker")
                .route("/log", web::post().to(tracker::log_action))
                .route("/leaderboard", web::get().to(tracker::get_leaderboard))
                .route("/user/{user_id}", web::get().to(tracker::get_user_tracker))
                .route("/user/{user_id}/summary", web::get().to(tracker::get_user_summary)),
        )
        // News proxy
        .route("/news", web::get().to(news::get_eco_news))
        // Forum
        .service(
            web::scope("/forum")
                .route("/post", web::post().to(forum::create_post))
                .route("/posts", web::get().to(forum::list_posts))
                .route("/post/{post_id}/comments", web::post().to(forum::add_comment))
                .route("/post/{post_id}/comments", web::get().to(forum::list_comments))
                .route(
                    "/post/{post_id}/comments/{comment_id}/replies",
                    web::post().to(forum::add_reply),
                )
                .route(
                    "/post/{post_id}/comments/{comment_id}/replies",
                    web::get().to(forum::list_replies),
                ),
        )
        // Carbon footprint
        .route("/carbon", web::post().to(carbon::record_footprint))
        .route("/carbon", web::get().to(carbon::list_footprints));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        log::warn!("⚠️ Rejected body: {}", err);
        AppError::InvalidRequest(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        log::warn!("⚠️ Rejected query: {}", err);
        AppError::InvalidRequest(err.to_string()).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::InvalidRequest(err.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{drop_db, fresh_db, lazy_db};
    use crate::database::MongoDB;
    use crate::services::NewsClient;
    use actix_web::{http::StatusCode, test, App};
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    async fn app_data(news_url: &str) -> (web::Data<MongoDB>, web::Data<NewsClient>) {
        let db = lazy_db().await;
        let news = NewsClient::new(news_url, Some("test-key".into())).unwrap();
        (web::Data::new(db), web::Data::new(news))
    }

    #[actix_web::test]
    async fn test_root_welcome() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let resp: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp, json!({ "message": "Welcome to The GreenSphere API 🌱" }));
    }

    #[actix_web::test]
    async fn test_tips_known_and_unknown() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let energy: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/tips?category=energy").to_request(),
        )
        .await;
        assert_eq!(
            energy,
            json!({
                "category": "energy",
                "tips": ["Switch to LED bulbs", "Unplug unused devices", "Use energy-efficient appliances"]
            })
        );

        let unknown: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/tips?category=foo").to_request(),
        )
        .await;
        assert_eq!(unknown, json!({ "category": "foo", "tips": [] }));
    }

    #[actix_web::test]
    async fn test_tips_requires_category() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/tips").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn test_malformed_bodies_never_reach_handlers() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let cases = [
            ("/signup", json!({ "username": "ada", "email": "ada@example.com" })),
            ("/tracker/log", json!({ "user_id": "u1", "action": "bike", "category": "transportation", "points": "ten" })),
            ("/tracker/log", json!({ "user_id": "u1", "action": "bike", "category": "transportation", "points": 10.5 })),
            ("/forum/post", json!({ "user_id": "u1", "title": "hi" })),
        ];

        for (uri, body) in cases {
            let req = test::TestRequest::post().uri(uri).set_json(&body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{} {}", uri, body);
        }
    }

    #[actix_web::test]
    async fn test_news_passthrough_keeps_status_and_body() {
        let server = MockServer::start_async().await;
        let upstream = json!({ "status": "error", "code": "rateLimited", "message": "Too many requests" });
        let body = upstream.clone();
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/everything").query_param("pageSize", "5");
                then.status(429).json_body(body);
            })
            .await;

        let (db, news) = app_data(&server.url("/v2/everything")).await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/news").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, upstream);
    }

    #[actix_web::test]
    async fn test_news_unreachable_is_bad_gateway() {
        // Port 9 (discard) is closed on test hosts
        let (db, news) = app_data("http://127.0.0.1:9/v2/everything").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/news").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_comment_on_malformed_post_id() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/forum/post/not-an-id/comments").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_reply_on_malformed_comment_id() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let post_id = mongodb::bson::oid::ObjectId::new().to_hex();
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/forum/post/{}/comments/not-an-id/replies", post_id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "detail": "Invalid comment id 'not-an-id'" }));
    }

    #[actix_web::test]
    async fn test_blank_comment_and_reply_are_unprocessable() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(App::new().app_data(db).app_data(news).configure(configure)).await;

        let post_id = mongodb::bson::oid::ObjectId::new().to_hex();
        let comment_id = mongodb::bson::oid::ObjectId::new().to_hex();
        let blank = json!({ "user_id": "u1", "content": "  \n " });

        for uri in [
            format!("/forum/post/{}/comments", post_id),
            format!("/forum/post/{}/comments/{}/replies", post_id, comment_id),
        ] {
            let req = test::TestRequest::post().uri(&uri).set_json(&blank).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "detail": "content must not be blank" }));
        }
    }

    #[actix_web::test]
    async fn test_responses_are_gzip_encoded_on_request() {
        let (db, news) = app_data("http://127.0.0.1:9/unused").await;
        let app = test::init_service(
            App::new()
                .app_data(db)
                .app_data(news)
                .wrap(actix_web::middleware::Compress::default())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/tips?category=energy")
            .insert_header((actix_web::http::header::ACCEPT_ENCODING, "gzip"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(actix_web::http::header::CONTENT_ENCODING).unwrap(),
            "gzip"
        );
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_full_flow_against_mongodb() {
        let db = fresh_db().await;
        let news = NewsClient::new("http://127.0.0.1:9/unused", None).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .app_data(web::Data::new(news))
                .configure(configure),
        )
        .await;

        // Signup, then duplicate
        let signup = json!({ "username": "ada", "email": "ada@example.com", "password": "pw" });
        let resp = test::call_service(&app, test::TestRequest::post().uri("/signup").set_json(&signup).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body_json::<Value, _>(resp).await, json!({ "msg": "User successfully created" }));

        let resp = test::call_service(&app, test::TestRequest::post().uri("/signup").set_json(&signup).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(test::read_body_json::<Value, _>(resp).await, json!({ "detail": "Email already registered" }));

        let users: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
        assert_eq!(users[0]["username"], "ada");
        assert!(users[0]["_id"].is_string());

        // Tracker
        for points in [10, 20, 100] {
            let action = json!({ "user_id": "u1", "action": "bike", "category": "transportation", "points": points });
            let resp: Value = test::call_and_read_body_json(
                &app,
                test::TestRequest::post().uri("/tracker/log").set_json(&action).to_request(),
            )
            .await;
            assert_eq!(resp, json!({ "msg": "Action logged" }));
        }
        let summary: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/tracker/user/u1/summary").to_request(),
        )
        .await;
        assert_eq!(summary, json!({ "total_points": 130, "level": "Eco Starter" }));

        let entries: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/tracker/user/u1").to_request(),
        )
        .await;
        assert_eq!(entries.as_array().unwrap().len(), 3);

        // Forum ordering
        for title in ["older", "newer"] {
            let post = json!({ "user_id": "u1", "title": title, "content": "..." });
            test::call_service(&app, test::TestRequest::post().uri("/forum/post").set_json(&post).to_request()).await;
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        let posts: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/forum/posts").to_request()).await;
        assert_eq!(posts[0]["title"], "newer");
        assert_eq!(posts[1]["title"], "older");

        // Comment and reply on the newest post
        let post_id = posts[0]["_id"].as_str().unwrap().to_string();
        let comment = json!({ "user_id": "u2", "content": "great idea" });
        let added: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri(&format!("/forum/post/{}/comments", post_id.to_uppercase()))
                .set_json(&comment)
                .to_request(),
        )
        .await;
        assert_eq!(added["msg"], "Comment added");
        let comment_id = added["id"].as_str().unwrap().to_string();

        let reply = json!({ "user_id": "u1", "content": "thanks" });
        let added: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri(&format!("/forum/post/{}/comments/{}/replies", post_id, comment_id))
                .set_json(&reply)
                .to_request(),
        )
        .await;
        assert_eq!(added["msg"], "Reply added");

        let replies: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri(&format!("/forum/post/{}/comments/{}/replies", post_id, comment_id))
                .to_request(),
        )
        .await;
        assert_eq!(replies.as_array().unwrap().len(), 1);
        assert_eq!(replies[0]["post_id"], post_id.as_str());
        assert_eq!(replies[0]["content"], "thanks");

        let health = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(health.status(), StatusCode::OK);

        drop_db(&db).await;
    }
}
