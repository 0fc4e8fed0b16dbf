/*
[INPUT]:  Authenticated session (no parameters)
[OUTPUT]: Free time per day for the coming week, route legs
[POS]:    HTTP layer - Calendar and Directions backed endpoints
[UPDATE]: When adding schedule endpoints or changing response format
*/

use crate::http::{DashboardClient, Result};
use crate::types::{CalendarWeek, DirectionsResult, Snapshot};
use reqwest::Method;

impl DashboardClient {
    /// Remaining free work and personal time for the next five days
    ///
    /// GET /calendar
    pub async fn calendar(&self) -> Result<Snapshot<CalendarWeek>> {
        let builder = self.request(Method::GET, "/calendar")?;
        self.send_json(builder).await
    }

    /// Route legs for the Go panel
    ///
    /// GET /directions
    pub async fn directions(&self) -> Result<DirectionsResult> {
        let builder = self.request(Method::GET, "/directions")?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, DashboardClient};
    use crate::types::{CalendarWeek, Snapshot};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_calendar() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "startDay": 5,
            "workHoursPerDay": [28800000, 27000000, 28800000, 0, 28800000],
            "personalHoursPerDay": [57600000, 57600000, 54000000, 57600000, 57600000]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/calendar"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = DashboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");
        let response = client.calendar().await.expect("calendar failed");

        assert_eq!(
            response,
            Snapshot::Data(CalendarWeek {
                start_day: 5,
                work_hours_per_day: vec![28_800_000, 27_000_000, 28_800_000, 0, 28_800_000],
                personal_hours_per_day: vec![57_600_000, 57_600_000, 54_000_000, 57_600_000, 57_600_000],
            })
        );
    }

    #[tokio::test]
    async fn test_directions() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/directions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "map": { "routes": { "myArrayList": [
                    { "map": { "legs": { "myArrayList": [
                        { "map": {
                            "duration": { "map": { "text": "1 hour 2 mins" } },
                            "distance": { "map": { "text": "80 km" } },
                            "start_address": "Mountain View, CA",
                            "end_address": "San Francisco, CA"
                        } }
                    ] } } }
                ] } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DashboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");
        let directions = client.directions().await.expect("directions failed");

        let leg = directions.legs().next().expect("one leg");
        assert_eq!(leg.duration, "1 hour 2 mins");
        assert_eq!(leg.end_address, "San Francisco, CA");
    }
}
