use serde_json::Value;

use super::{BackendClient, BackendError};
use crate::error::AdminResult;
use crate::models::{DeleteImpact, Item, SeedResult, SeedSource, ValidationResult};
use crate::registry::{item_type_config, ItemTypeConfig};

/// Routes of one item type, resolved through the registry.
pub struct ItemApi<'a> {
    client: &'a BackendClient,
    config: &'static ItemTypeConfig,
}

impl<'a> ItemApi<'a> {
    /// Fails with `UnknownItemType` before any request is made.
    pub fn new(client: &'a BackendClient, item_type: &str) -> AdminResult<Self> {
        Ok(Self {
            client,
            config: item_type_config(item_type)?,
        })
    }

    pub fn config(&self) -> &'static ItemTypeConfig {
        self.config
    }

    pub async fn list(&self) -> Result<Vec<Item>, BackendError> {
        // Some backends answer `null` instead of `[]` for an empty table
        let items: Option<Vec<Item>> = self.client.get(self.config.endpoints.list).await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn get(&self, id: u64) -> Result<Item, BackendError> {
        self.client.get(&self.config.endpoints.detail_path(id)).await
    }

    pub async fn delete_impact(&self, id: u64) -> Result<DeleteImpact, BackendError> {
        self.client
            .get(&self.config.endpoints.delete_impact_path(id))
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), BackendError> {
        let _: Value = self
            .client
            .delete(&self.config.endpoints.delete_path(id))
            .await?;
        Ok(())
    }

    pub async fn seed(&self, source: &SeedSource) -> Result<SeedResult, BackendError> {
        self.client.post(self.config.endpoints.seed, source).await
    }

    /// Dry run of [`seed`](Self::seed). Types without a validate route are
    /// reported valid without asking the backend.
    pub async fn validate(&self, source: &SeedSource) -> Result<ValidationResult, BackendError> {
        match self.config.endpoints.validate {
            Some(path) => self.client.post(path, source).await,
            None => Ok(ValidationResult::assumed_valid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use serde_json::json;

    #[test]
    fn test_unknown_type_is_rejected() {
        let client = BackendClient::new("http://localhost:8080");
        assert!(matches!(
            ItemApi::new(&client, "beer"),
            Err(AdminError::UnknownItemType(_))
        ));
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/cheese/all")
            .with_status(200)
            .with_body(
                json!([
                    {"ID": 1, "name": "Oka", "type": "Pâte pressée", "origin": "Quebec", "producer": "Oka"},
                    {"ID": 2, "name": "Brie", "type": "Pâte molle", "origin": "France", "producer": "Donge"}
                ])
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("GET", "/api/cheese/2")
            .with_status(200)
            .with_body(json!({"ID": 2, "name": "Brie", "origin": "France"}).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/api/gin/all")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let client = BackendClient::new(server.url()).with_token("t");
        let cheeses = ItemApi::new(&client, "cheese").unwrap();

        let items = cheeses.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display_value("origin"), "Quebec");

        let brie = cheeses.get(2).await.unwrap();
        assert_eq!(brie.name, "Brie");

        let gins = ItemApi::new(&client, "gin").unwrap();
        assert!(gins.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_impact_and_delete() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/admin/wine/5/delete-impact")
            .with_status(200)
            .with_body(
                json!({
                    "can_delete": true,
                    "warnings": [],
                    "impact": {"ratings_count": 2, "users_affected": 1, "sharings_count": 0,
                               "affected_users": [{"id": 8, "display_name": "luc", "ratings_count": 2}]}
                })
                .to_string(),
            )
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/admin/wine/5")
            .with_status(200)
            .with_body(r#"{"message": "Wine deleted successfully"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let wines = ItemApi::new(&client, "wine").unwrap();

        let impact = wines.delete_impact(5).await.unwrap();
        assert_eq!(impact.impact.users_affected, 1);
        wines.delete(5).await.unwrap();
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_seed_and_validate_bodies() {
        let mut server = mockito::Server::new_async().await;
        let validate = server
            .mock("POST", "/admin/coffee/validate")
            .match_body(mockito::Matcher::Json(json!({"url": "https://x.test/coffees.json"})))
            .with_status(200)
            .with_body(r#"{"valid": true, "errors": [], "item_count": 12, "duplicates": 3}"#)
            .create_async()
            .await;
        let seed = server
            .mock("POST", "/admin/coffee/seed")
            .match_body(mockito::Matcher::Json(json!({"data": {"coffees": [{"name": "Kochere"}]}})))
            .with_status(200)
            .with_body(r#"{"added": 1, "skipped": 0, "errors": []}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let coffees = ItemApi::new(&client, "coffee").unwrap();

        let report = coffees
            .validate(&SeedSource::Url("https://x.test/coffees.json".into()))
            .await
            .unwrap();
        assert_eq!((report.item_count, report.duplicates), (12, 3));

        let result = coffees
            .seed(&SeedSource::Data(json!({"coffees": [{"name": "Kochere"}]})))
            .await
            .unwrap();
        assert_eq!(result.added, 1);

        validate.assert_async().await;
        seed.assert_async().await;
    }

    #[tokio::test]
    async fn test_validate_without_endpoint() {
        let mut config: ItemTypeConfig = *item_type_config("gin").unwrap();
        config.endpoints.validate = None;
        let config: &'static ItemTypeConfig = Box::leak(Box::new(config));

        // Nothing listens here; the call must not leave the process
        let client = BackendClient::new("http://127.0.0.1:9");
        let api = ItemApi {
            client: &client,
            config,
        };
        let report = api
            .validate(&SeedSource::Data(json!({"gins": []})))
            .await
            .unwrap();
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }
}
