/*
[INPUT]:  Mail panel settings (day/hour windows, subject phrases)
[OUTPUT]: Gmail summary, actionable emails, reading plan
[POS]:    HTTP layer - Gmail backed endpoints
[UPDATE]: When adding mail endpoints or changing query parameters
*/

use crate::http::{DashboardClient, Result};
use crate::types::{ActionableMessage, GmailSummary, PlanMail, Snapshot};
use reqwest::Method;

impl DashboardClient {
    /// Unread counts for the last `n_days` days and `m_hours` hours
    ///
    /// GET /gmail?nDays={n_days}&mHours={m_hours}
    pub async fn gmail(&self, n_days: u32, m_hours: u32) -> Result<Snapshot<GmailSummary>> {
        let builder = self
            .request(Method::GET, "/gmail")?
            .query(&[("nDays", n_days), ("mHours", m_hours)]);
        self.send_json(builder).await
    }

    /// Emails whose subject contains any of `phrases`
    ///
    /// GET /gmail-actionable-emails?subjectLinePhrases={a,b}&unreadOnly={bool}&nDays={n}
    pub async fn actionable_emails(
        &self,
        phrases: &[String],
        unread_only: bool,
        n_days: u32,
    ) -> Result<Vec<ActionableMessage>> {
        let phrases = phrases.join(",");
        let builder = self
            .request(Method::GET, "/gmail-actionable-emails")?
            .query(&[
                ("subjectLinePhrases", phrases),
                ("unreadOnly", unread_only.to_string()),
                ("nDays", n_days.to_string()),
            ]);
        self.send_json(builder).await
    }

    /// Reading time for unread mail and free slots to read it in
    ///
    /// GET /plan-mail
    pub async fn plan_mail(&self) -> Result<PlanMail> {
        let builder = self.request(Method::GET, "/plan-mail")?;
        self.send_json(builder).await
    }
}
