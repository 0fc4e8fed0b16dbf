/*
[INPUT]:  Authenticated session
[OUTPUT]: Browser API key served by the backend secret store
[POS]:    HTTP layer - secret manager endpoint
[UPDATE]: When the key delivery format changes
*/

use crate::http::{DashboardClient, Result};
use reqwest::Method;

impl DashboardClient {
    /// Opaque API key, returned as-is (no JSON decoding)
    ///
    /// GET /secret-manager
    pub async fn api_key(&self) -> Result<String> {
        let builder = self.request(Method::GET, "/secret-manager")?;
        self.send_text(builder).await
    }
}
