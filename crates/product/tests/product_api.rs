use product::{handler::AppRouter, run_migrations, state::AppState};
use reqwest::StatusCode;
use serde_json::{Value, json};
use shared::config::{ConnectionManager, ConnectionPool};

struct TestServer {
    base_url: String,
    pool: ConnectionPool,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let pool = ConnectionManager::new_pool("sqlite::memory:", 1, 1)
            .await
            .expect("failed to open in-memory database");
        run_migrations(&pool).await.expect("failed to migrate");

        let app = AppRouter::build(AppState::new(pool.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/products"),
            pool,
            handle,
        }
    }

    async fn sql(&self, statement: &str) {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .expect("fixture statement failed");
    }

    async fn row_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM product_tbl")
            .fetch_one(&self.pool)
            .await
            .expect("count failed")
    }

    async fn row(&self, id: i64) -> Option<(i64, String, i32, i64)> {
        sqlx::query_as("SELECT id, name, quantity, price FROM product_tbl WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .expect("lookup failed")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn add_product_assigns_id_and_grows_table_by_one() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(&srv.base_url)
        .json(&json!({ "name": "headset", "quantity": 2, "price": 7999 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["name"], "headset");
    assert_eq!(created["quantity"], 2);
    assert_eq!(created["price"], 7999);
    let id = created["id"].as_i64().expect("store-assigned id");
    assert!(id > 0);
    assert_eq!(srv.row_count().await, 1);

    let listed: Vec<Value> = client
        .get(&srv.base_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["name"], "headset");
}

#[tokio::test]
async fn get_products_lists_seeded_rows() {
    let srv = TestServer::spawn().await;
    srv.sql("INSERT INTO product_tbl (id, name, quantity, price) VALUES (4, 'AC', 1, 34000)")
        .await;

    let res = reqwest::get(&srv.base_url).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let products: Vec<Value> = res.json().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], 4);
    assert_eq!(products[0]["name"], "AC");
    assert_eq!(srv.row_count().await, 1);

    srv.sql("DELETE FROM product_tbl WHERE name = 'AC'").await;
    assert_eq!(srv.row_count().await, 0);
}

#[tokio::test]
async fn find_product_by_id_returns_seeded_row() {
    let srv = TestServer::spawn().await;
    srv.sql("INSERT INTO product_tbl (id, name, quantity, price) VALUES (1, 'CAR', 1, 334000)")
        .await;

    let res = reqwest::get(format!("{}/1", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let product: Value = res.json().await.unwrap();
    assert_eq!(product["id"], 1);
    assert_eq!(product["name"], "CAR");
    assert_eq!(product["quantity"], 1);
    assert_eq!(product["price"], 334000);

    srv.sql("DELETE FROM product_tbl WHERE id = 1").await;
}

#[tokio::test]
async fn find_product_by_id_is_404_when_absent() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/77", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn update_product_overwrites_fields_and_keeps_id() {
    let srv = TestServer::spawn().await;
    srv.sql("INSERT INTO product_tbl (id, name, quantity, price) VALUES (2, 'shoes', 1, 999)")
        .await;

    let res = reqwest::Client::new()
        .put(format!("{}/update/2", srv.base_url))
        .json(&json!({ "name": "shoes", "quantity": 1, "price": 1999 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        srv.row(2).await,
        Some((2, "shoes".to_string(), 1, 1999))
    );
    assert_eq!(srv.row_count().await, 1);
}

#[tokio::test]
async fn update_changes_only_name_quantity_and_price() {
    let srv = TestServer::spawn().await;
    srv.sql(
        "INSERT INTO product_tbl (id, name, quantity, price) VALUES (3, 'lamp', 2, 500), (4, 'desk', 1, 9000)",
    )
    .await;

    let res = reqwest::Client::new()
        .put(format!("{}/update/3", srv.base_url))
        .json(&json!({ "id": 99, "name": "floor lamp", "quantity": 7, "price": 650 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 3);

    assert_eq!(
        srv.row(3).await,
        Some((3, "floor lamp".to_string(), 7, 650))
    );
    assert_eq!(srv.row(4).await, Some((4, "desk".to_string(), 1, 9000)));
    assert_eq!(srv.row(99).await, None);
}

#[tokio::test]
async fn update_of_absent_product_is_404_and_creates_nothing() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .put(format!("{}/update/5", srv.base_url))
        .json(&json!({ "name": "ghost", "quantity": 1, "price": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(srv.row_count().await, 0);
}

#[tokio::test]
async fn delete_product_removes_seeded_row() {
    let srv = TestServer::spawn().await;
    srv.sql("INSERT INTO product_tbl (id, name, quantity, price) VALUES (8, 'books', 5, 1499)")
        .await;
    assert_eq!(srv.row_count().await, 1);

    let res = reqwest::Client::new()
        .delete(format!("{}/delete/8", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(srv.row_count().await, 0);
}

#[tokio::test]
async fn delete_of_absent_id_leaves_table_untouched() {
    let srv = TestServer::spawn().await;
    srv.sql("INSERT INTO product_tbl (id, name, quantity, price) VALUES (1, 'CAR', 1, 334000)")
        .await;

    let res = reqwest::Client::new()
        .delete(format!("{}/delete/404", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(srv.row_count().await, 1);
}

#[tokio::test]
async fn delete_twice_is_idempotent() {
    let srv = TestServer::spawn().await;
    srv.sql(
        "INSERT INTO product_tbl (id, name, quantity, price) VALUES (8, 'books', 5, 1499), (9, 'pens', 50, 99)",
    )
    .await;
    let client = reqwest::Client::new();

    let first = client
        .delete(format!("{}/delete/8", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let after_first: Vec<Value> = client.get(&srv.base_url).send().await.unwrap().json().await.unwrap();

    let second = client
        .delete(format!("{}/delete/8", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NO_CONTENT);
    let after_second: Vec<Value> = client.get(&srv.base_url).send().await.unwrap().json().await.unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.len(), 1);
    assert_eq!(after_second[0]["id"], 9);
}

#[tokio::test]
async fn find_by_name_returns_lowest_id_match() {
    let srv = TestServer::spawn().await;
    srv.sql(
        "INSERT INTO product_tbl (id, name, quantity, price) VALUES (6, 'books', 1, 100), (2, 'books', 3, 300)",
    )
    .await;

    let res = reqwest::get(format!("{}/name/books", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: Value = res.json().await.unwrap();
    assert_eq!(product["id"], 2);

    let missing = reqwest::get(format!("{}/name/magazines", srv.base_url))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_bodies_are_client_errors() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let missing_field = client
        .post(&srv.base_url)
        .json(&json!({ "name": "headset", "price": 7999 }))
        .send()
        .await
        .unwrap();
    assert!(missing_field.status().is_client_error());

    let not_json = client
        .post(&srv.base_url)
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert!(not_json.status().is_client_error());

    let invalid = client
        .post(&srv.base_url)
        .json(&json!({ "name": "", "quantity": -1, "price": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    let body: Value = invalid.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["details"]["quantity"].is_array());

    assert_eq!(srv.row_count().await, 0);
}

#[tokio::test]
async fn create_with_explicit_id_uses_that_id() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(&srv.base_url)
        .json(&json!({ "id": 4, "name": "AC", "quantity": 1, "price": 34000 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(srv.row(4).await, Some((4, "AC".to_string(), 1, 34000)));
}

#[tokio::test]
async fn store_assigned_ids_past_i32_max_keep_the_table_readable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let edge = client
        .post(&srv.base_url)
        .json(&json!({ "id": 2147483647, "name": "edge", "quantity": 1, "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(edge.status(), StatusCode::CREATED);

    let next = client
        .post(&srv.base_url)
        .json(&json!({ "name": "next", "quantity": 1, "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(next.status(), StatusCode::CREATED);
    let created: Value = next.json().await.unwrap();
    assert_eq!(created["id"], 2147483648_i64);
    assert_eq!(srv.row_count().await, 2);

    let listed = client.get(&srv.base_url).send().await.unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let products: Vec<Value> = listed.json().await.unwrap();
    assert_eq!(products.len(), 2);

    let fetched = reqwest::get(format!("{}/2147483648", srv.base_url))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[tokio::test]
async fn metrics_and_openapi_are_exposed() {
    let srv = TestServer::spawn().await;
    let root = srv.base_url.trim_end_matches("/products").to_string();

    reqwest::get(&srv.base_url).await.unwrap();

    let metrics = reqwest::get(format!("{root}/metrics")).await.unwrap();
    assert_eq!(metrics.status(), StatusCode::OK);
    let text = metrics.text().await.unwrap();
    assert!(text.contains("product_query_service_request_counter_total"));

    let docs = reqwest::get(format!("{root}/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(docs.status(), StatusCode::OK);
    let openapi: Value = docs.json().await.unwrap();
    assert!(openapi["paths"]["/products/update/{id}"]["put"].is_object());
    assert!(openapi["paths"]["/products/delete/{id}"]["delete"].is_object());
}
