use crate::*;
use httpmock::prelude::*;
use serde_json::json;

fn test_config(server: &MockServer) -> ClientConfig {
    shared::logger::init_test_logger();
    ClientConfig::new(server.base_url(), "w1").with_token("test-token")
}

fn website_body() -> serde_json::Value {
    json!({
        "websiteLabels": { "hero": { "title": "Sam & Alex" } },
        "websiteSections": [
            { "id": "hero", "enabled": true, "order": 0 },
            { "id": "rsvp", "enabled": false, "order": 1 }
        ]
    })
}

mod test_website;
