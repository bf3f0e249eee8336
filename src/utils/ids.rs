use uuid::Uuid;

/// Short random id with a readable prefix, e.g. `m_3f9a1c2b`.
pub fn new_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_format() {
        let id = new_id("spin");
        assert!(id.starts_with("spin_"));
        assert_eq!(id.len(), "spin_".len() + 8);
    }

    #[test]
    fn test_new_ids_differ() {
        assert_ne!(new_id("m"), new_id("m"));
    }
}
