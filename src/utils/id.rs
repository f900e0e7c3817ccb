use uuid::Uuid;

/// New record id: the entity prefix followed by a random v4 UUID.
/// No collision check is made before insert.
pub fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_prefix_and_token() {
        let id = generate_id("pay_");
        let token = id.strip_prefix("pay_").unwrap();
        assert!(Uuid::parse_str(token).is_ok());
    }

    #[test]
    fn test_generate_id_is_unique() {
        assert_ne!(generate_id("d_"), generate_id("d_"));
    }
}
