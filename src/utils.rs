//! Utility functions

use uuid7::uuid7;

// time-ordered reference attached to every processed request in the logs
pub fn new_request_ref() -> String {
    format!("req_{}", uuid7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_refs_are_unique() {
        let a = new_request_ref();
        let b = new_request_ref();
        assert!(a.starts_with("req_"));
        assert_ne!(a, b);
    }
}
