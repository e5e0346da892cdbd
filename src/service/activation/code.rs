use uuid::Uuid;

pub const ACTIVATION_CODE_LEN: usize = 10;

/// Generates a user-facing activation code: the first characters of a random v4 UUID,
/// hyphens stripped and upper-cased. Codes are not checked for uniqueness.
pub fn generate_activation_code() -> String {
    let mut code = Uuid::new_v4().simple().to_string().to_uppercase();
    code.truncate(ACTIVATION_CODE_LEN);
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        for _ in 0..100 {
            let code = generate_activation_code();
            assert_eq!(code.len(), ACTIVATION_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()), "{code}");
        }
    }

    #[test]
    fn test_codes_differ() {
        assert_ne!(generate_activation_code(), generate_activation_code());
    }
}
