pub fn validate_hostname(hostname: &str) -> Result<(), String> {
    if hostname.is_empty() {
        return Err("hostname cannot be empty".to_string());
    }
    if hostname.len() > 253 {
        return Err("hostname cannot exceed 253 characters".to_string());
    }
    Ok(())
}
