mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn patient_lifecycle() {
    let server = common::test_server().await;
    let patient_id = common::create_patient(&server, "Asha Rao").await;

    let body = server
        .get(&format!("/patients/{patient_id}"))
        .await
        .json::<Value>();
    assert_eq!(body["patient"]["name"], "Asha Rao");
    assert_eq!(body["patient"]["prakriti"]["dominantDosha"], "Pitta");

    let response = server
        .put(&format!("/patients/{patient_id}"))
        .json(&json!({ "prakriti": { "vata": 10, "pitta": 20, "kapha": 70 } }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["patient"]["prakriti"]["dominantDosha"], "Kapha");

    let body = server.get("/patients").await.json::<Value>();
    assert_eq!(body["patients"].as_array().unwrap().len(), 1);

    server
        .delete(&format!("/patients/{patient_id}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/patients/{patient_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_are_rejected() {
    let server = common::test_server().await;

    let mut payload = common::patient_payload("");
    server
        .post("/patients")
        .json(&payload)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    payload["name"] = json!("Ravi");
    payload["prakriti"] = json!({ "vata": 120, "pitta": 0, "kapha": 0 });
    server
        .post("/patients")
        .json(&payload)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/patients")
        .text("{not json")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn deleting_a_patient_cascades() {
    let server = common::test_server().await;
    let patient_id = common::create_patient(&server, "Meera Iyer").await;
    let rice = common::food_id(&server, "Basmati Rice").await;

    server
        .post("/diet-plans")
        .json(&json!({
            "patientId": patient_id,
            "duration": 7,
            "meals": [{ "name": "Lunch", "time": "12:30", "items": [
                { "foodId": rice, "quantity": 1.0, "unit": "serving" }
            ]}]
        }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/appointments")
        .json(&json!({
            "patientId": patient_id,
            "date": "2026-11-02T09:30:00Z",
            "type": "consultation"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&format!("/patients/{patient_id}"))
        .await
        .assert_status_ok();

    let plans = server
        .get("/diet-plans")
        .add_query_param("patient_id", &patient_id)
        .await
        .json::<Value>();
    assert!(plans["dietPlans"].as_array().unwrap().is_empty());

    let appointments = server
        .get("/appointments")
        .add_query_param("patient_id", &patient_id)
        .await
        .json::<Value>();
    assert!(appointments["appointments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn appointments_filter_by_status_and_date() {
    let server = common::test_server().await;
    let patient_id = common::create_patient(&server, "Kiran Das").await;

    let mut ids = Vec::new();
    for date in ["2026-11-10T10:00:00Z", "2026-11-03T10:00:00Z"] {
        let body = server
            .post("/appointments")
            .json(&json!({ "patientId": patient_id, "date": date, "type": "follow-up" }))
            .await
            .json::<Value>();
        assert_eq!(body["appointment"]["status"], "scheduled");
        ids.push(body["appointment"]["id"].as_str().unwrap().to_string());
    }

    let body = server.get("/appointments").await.json::<Value>();
    let dates: Vec<&str> = body["appointments"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|appointment| appointment["date"].as_str())
        .collect();
    assert_eq!(dates.len(), 2);
    assert!(dates[0].starts_with("2026-11-03"));

    server
        .put(&format!("/appointments/{}", ids[0]))
        .json(&json!({ "status": "completed" }))
        .await
        .assert_status_ok();

    let body = server
        .get("/appointments")
        .add_query_param("status", "completed")
        .await
        .json::<Value>();
    assert_eq!(body["appointments"].as_array().unwrap().len(), 1);

    let body = server
        .get("/appointments")
        .add_query_param("from", "2026-11-01T00:00:00Z")
        .add_query_param("to", "2026-11-10T10:00:00Z")
        .await
        .json::<Value>();
    assert_eq!(body["appointments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn booking_for_unknown_patient_is_not_found() {
    let server = common::test_server().await;

    server
        .post("/appointments")
        .json(&json!({
            "patientId": "0195f0a8-5c1e-7d2b-9a40-3c2f7e1b6d55",
            "date": "2026-11-02T09:30:00Z",
            "type": "diet-review"
        }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
