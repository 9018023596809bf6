//! Member API operations.

use async_trait::async_trait;
use gymdesk_core::member::Member;
use gymdesk_core::storage::{MemberStore, Result};
use reqwest::Method;

use super::GymdeskClient;

const MEMBERS_PATH: &str = "/api/members";

fn member_path(id: &str) -> String {
    format!("{MEMBERS_PATH}/{id}")
}

#[async_trait]
impl MemberStore for GymdeskClient {
    async fn fetch_members(&self) -> Result<Vec<Member>> {
        let response = self.send(self.request(Method::GET, MEMBERS_PATH)).await?;
        self.handle_response(response, MEMBERS_PATH).await
    }

    async fn insert_member(&self, member: &Member) -> Result<()> {
        let request = self.request(Method::POST, MEMBERS_PATH).json(member);
        let response = self.send(request).await?;
        self.handle_empty_response(response, &member.id).await
    }

    async fn replace_member(&self, id: &str, member: &Member) -> Result<()> {
        let request = self.request(Method::PUT, &member_path(id)).json(member);
        let response = self.send(request).await?;
        self.handle_empty_response(response, id).await
    }

    async fn remove_member(&self, id: &str) -> Result<()> {
        let response = self
            .send(self.request(Method::DELETE, &member_path(id)))
            .await?;
        self.handle_empty_response(response, id).await
    }
}
