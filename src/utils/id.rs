use uuid::Uuid;

/// New internal identifier for a customer or subscription record.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
