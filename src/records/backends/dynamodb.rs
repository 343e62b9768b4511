use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use rusoto_dynamodb::{AttributeValue, DynamoDb, DynamoDbClient, PutItemInput};

use crate::records::template::RecordStore;
use crate::records::ImageRecord;
use crate::utils::resolve_region;

pub struct DynamoDbBackend {
    table: String,
    client: DynamoDbClient,
}

impl DynamoDbBackend {
    pub fn new(table: String, region: Option<&str>, endpoint: Option<&str>) -> Result<Self> {
        let region = resolve_region(region, endpoint)?;
        let client = DynamoDbClient::new(region);

        Ok(Self { table, client })
    }
}

#[async_trait]
impl RecordStore for DynamoDbBackend {
    #[instrument(skip(self, record), level = "debug")]
    async fn put_record(&self, record: &ImageRecord) -> Result<()> {
        debug!("Writing record {} to table {}", record.id, &self.table);

        let input = PutItemInput {
            table_name: self.table.clone(),
            item: to_item(record),
            ..Default::default()
        };

        self.client.put_item(input).await?;
        Ok(())
    }
}

fn string_attr(value: impl Into<String>) -> AttributeValue {
    AttributeValue {
        s: Some(value.into()),
        ..Default::default()
    }
}

fn number_attr(value: impl ToString) -> AttributeValue {
    AttributeValue {
        n: Some(value.to_string()),
        ..Default::default()
    }
}

/// Flattens the record into a DynamoDB item.
///
/// `Size` is stored as a number, everything else as a string.
fn to_item(record: &ImageRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::with_capacity(6);
    item.insert("ID".to_string(), string_attr(record.id.to_string()));
    item.insert("Filename".to_string(), string_attr(record.filename.as_str()));
    item.insert("Timestamp".to_string(), string_attr(record.timestamp.as_str()));
    item.insert("Status".to_string(), string_attr(record.status.as_str()));
    item.insert("Size".to_string(), number_attr(record.size));
    item.insert("Format".to_string(), string_attr(record.format.as_str()));
    item
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_item_matches_record_schema() {
        let id = Uuid::new_v4();
        let record = ImageRecord::processed(id, format!("processed/{}.png", id), 4096, "PNG", Utc::now());
        let item = to_item(&record);

        assert_eq!(item.len(), 6);
        assert_eq!(item["ID"].s.as_deref(), Some(id.to_string().as_str()));
        assert_eq!(item["Size"].n.as_deref(), Some("4096"));
        assert!(item["Size"].s.is_none());
        assert_eq!(item["Status"].s.as_deref(), Some("processed"));
        assert_eq!(item["Format"].s.as_deref(), Some("PNG"));
        assert_eq!(item["Timestamp"].s.as_deref(), Some(record.timestamp.as_str()));
    }
}
