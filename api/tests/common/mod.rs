#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use ayurdiet_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use clap::Parser;
use serde_json::{Value, json};

/// Spins up the full router with a text-generation backend that refuses
/// connections, so every recommendation resolves to the fallback.
pub async fn test_server() -> TestServer {
    let args = Args::parse_from([
        "ayurdiet-api",
        "--hf-base-url",
        "http://127.0.0.1:9",
        "--generation-timeout-secs",
        "2",
    ]);

    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn patient_payload(name: &str) -> Value {
    json!({
        "name": name,
        "age": 34,
        "gender": "female",
        "contact": "asha@example.com",
        "prakriti": { "vata": 20, "pitta": 50, "kapha": 30 },
        "currentConditions": ["acidity"],
        "allergies": [],
        "dietaryRestrictions": ["vegetarian"]
    })
}

pub async fn create_patient(server: &TestServer, name: &str) -> String {
    let response = server.post("/patients").json(&patient_payload(name)).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<Value>();
    body["patient"]["id"].as_str().unwrap().to_string()
}

pub async fn food_id(server: &TestServer, name: &str) -> String {
    let body = server
        .get("/foods")
        .add_query_param("search", name)
        .await
        .json::<Value>();

    body["foods"]
        .as_array()
        .unwrap()
        .iter()
        .find(|food| food["name"] == name)
        .and_then(|food| food["id"].as_str())
        .unwrap()
        .to_string()
}
