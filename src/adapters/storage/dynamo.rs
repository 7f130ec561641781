use crate::adapters::storage::keys::{PARTITION_KEY, SORT_KEY};
use crate::config::StorageConfig;
use crate::domain::ports::{Item, ItemKey, KeyValueStore};
use crate::utils::error::{Result, ServiceError};
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use serde_json::{Number, Value};
use std::collections::HashMap;

const CONDITION_NOT_EXISTS: &str = "attribute_not_exists(PK)";

#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
    table: String,
}

impl DynamoStore {
    pub fn new(client: DynamoClient, table: String) -> Self {
        Self { client, table }
    }

    /// Builds a client from the default AWS credential chain.
    /// `endpoint_url` points the client at DynamoDB Local when set.
    pub async fn connect(config: &StorageConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        tracing::debug!(
            "DynamoDB client ready (table: {}, region: {})",
            config.table,
            config.region
        );
        Self::new(DynamoClient::new(&sdk_config), config.table.clone())
    }
}

impl KeyValueStore for DynamoStore {
    async fn put(&self, key: ItemKey, item: Item, must_not_exist: bool) -> Result<()> {
        let attributes = to_attributes(&key, item);

        let mut request = self
            .client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(attributes));
        if must_not_exist {
            request = request.condition_expression(CONDITION_NOT_EXISTS);
        }

        match request.send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_conditional_check_failed_exception() {
                    Err(ServiceError::Conflict {
                        partition: key.partition,
                        sort: key.sort,
                    })
                } else {
                    Err(ServiceError::storage(format!(
                        "failed to put dynamo item {}: {}",
                        key,
                        DisplayErrorContext(&service_err)
                    )))
                }
            }
        }
    }

    async fn get(&self, key: ItemKey) -> Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(PARTITION_KEY, AttributeValue::S(key.partition.clone()))
            .key(SORT_KEY, AttributeValue::S(key.sort.clone()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|err| {
                ServiceError::storage(format!(
                    "failed to get dynamo item {}: {}",
                    key,
                    DisplayErrorContext(&err)
                ))
            })?;

        output.item().map(from_attributes).transpose()
    }
}

fn to_attributes(key: &ItemKey, item: Item) -> HashMap<String, AttributeValue> {
    let mut attributes: HashMap<String, AttributeValue> = item
        .into_iter()
        .map(|(name, value)| (name, to_attribute(value)))
        .collect();
    attributes.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(key.partition.clone()),
    );
    attributes.insert(SORT_KEY.to_string(), AttributeValue::S(key.sort.clone()));
    attributes
}

fn from_attributes(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    attributes
        .iter()
        .filter(|(name, _)| name.as_str() != PARTITION_KEY && name.as_str() != SORT_KEY)
        .map(|(name, value)| Ok((name.clone(), from_attribute(value)?)))
        .collect()
}

fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => AttributeValue::L(values.into_iter().map(to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(name, value)| (name, to_attribute(value)))
                .collect(),
        ),
    }
}

fn from_attribute(value: &AttributeValue) -> Result<Value> {
    Ok(match value {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::L(values) => {
            Value::Array(values.iter().map(from_attribute).collect::<Result<_>>()?)
        }
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(name, value)| Ok((name.clone(), from_attribute(value)?)))
                .collect::<Result<_>>()?,
        ),
        other => {
            return Err(ServiceError::storage(format!(
                "unsupported dynamo attribute type: {:?}",
                other
            )))
        }
    })
}

fn parse_number(raw: &str) -> Result<Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(i.into());
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Ok(u.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| ServiceError::storage(format!("invalid dynamo number: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        match value {
            Value::Object(map) => map,
            _ => panic!("test item must be an object"),
        }
    }

    #[test]
    fn test_to_attributes_adds_key_attributes() {
        let key = ItemKey {
            partition: "CUSTOMER#c1".to_string(),
            sort: "SUBSCRIPTION#s1".to_string(),
        };
        let attrs = to_attributes(&key, item(json!({"Status": "new"})));

        assert_eq!(attrs["PK"], AttributeValue::S("CUSTOMER#c1".to_string()));
        assert_eq!(attrs["SK"], AttributeValue::S("SUBSCRIPTION#s1".to_string()));
        assert_eq!(attrs["Status"], AttributeValue::S("new".to_string()));
    }

    #[test]
    fn test_from_attributes_strips_key_attributes() {
        let key = ItemKey {
            partition: "CUSTOMER#c1".to_string(),
            sort: "CUSTOMER#c1".to_string(),
        };
        let original = item(json!({
            "CustomerId": "c1",
            "Count": 3,
            "Ratio": 0.5,
            "Active": true,
            "Tags": ["a", "b"],
            "Meta": {"source": "test", "empty": null}
        }));

        let attrs = to_attributes(&key, original.clone());
        let restored = from_attributes(&attrs).unwrap();

        assert!(!restored.contains_key("PK"));
        assert!(!restored.contains_key("SK"));
        assert_eq!(restored, original);
    }

    #[test]
    fn test_string_sets_become_arrays() {
        let value = from_attribute(&AttributeValue::Ss(vec!["x".to_string()])).unwrap();
        assert_eq!(value, json!(["x"]));
    }

    #[test]
    fn test_invalid_number_is_storage_error() {
        let err = from_attribute(&AttributeValue::N("abc".to_string())).unwrap_err();
        assert!(matches!(err, ServiceError::StorageError { .. }));
    }
}
