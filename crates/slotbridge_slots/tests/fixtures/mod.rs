// Shared fixtures for the slot integration tests
#![allow(dead_code)]

use serde_json::{json, Value};
use slotbridge_config::SlotServiceConfig;
use wiremock::MockServer;

pub const FACILITY_ID: &str = "6f1c1f1e-8d2b-4c59-9a57-3b7e4c0f2a11";
pub const USERNAME: &str = "scheduler";
pub const PASSWORD: &str = "hunter2";

pub fn slot_service_config(server: &MockServer) -> SlotServiceConfig {
    SlotServiceConfig {
        base_url: format!("{}/api/availability", server.uri()),
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
        timeout_secs: 5,
    }
}

/// Config pointing at a local port nothing listens on.
pub fn unreachable_service_config() -> SlotServiceConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    SlotServiceConfig {
        base_url: format!("http://{addr}/api/availability"),
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
        timeout_secs: 5,
    }
}

fn open_day(busy: Value) -> Value {
    json!({
        "WorkPeriod": { "StartHour": 9, "LunchStartHour": 12, "LunchEndHour": 13, "EndHour": 17 },
        "BusySlots": busy
    })
}

/// Week of 2024-07-01: Monday with 09:00-10:00 busy, Tuesday free, rest closed.
pub fn weekly_availability_json() -> Value {
    json!({
        "Facility": { "FacilityId": FACILITY_ID, "Name": "Clinic", "Address": "Main St 1" },
        "SlotDurationMinutes": 30,
        "Monday": open_day(json!([
            { "Start": "2024-07-01T09:00:00", "End": "2024-07-01T10:00:00" }
        ])),
        "Tuesday": open_day(Value::Null),
        "Wednesday": null,
        "Thursday": null,
        "Friday": null,
        "Saturday": null,
        "Sunday": null
    })
}

pub fn booking_json(start: &str, end: &str) -> Value {
    json!({
        "facilityId": FACILITY_ID,
        "start": start,
        "end": end,
        "comments": "Annual checkup",
        "name": "Ada",
        "secondName": "Lovelace",
        "email": "ada@example.com",
        "phone": "555-0100"
    })
}
