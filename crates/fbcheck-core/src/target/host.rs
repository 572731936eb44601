//! Known Firebase Realtime Database host domains.

/// Domains that serve Realtime Database instances (legacy US and regional).
pub const KNOWN_FIREBASE_DOMAINS: &[&str] = &["firebaseio.com", "firebasedatabase.app"];

/// True if `host` contains one of the known Firebase database domains.
pub fn is_known_firebase_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    KNOWN_FIREBASE_DOMAINS.iter().any(|d| host.contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_domains() {
        assert!(is_known_firebase_host("x-default-rtdb.firebaseio.com"));
        assert!(is_known_firebase_host("x.asia-southeast1.firebasedatabase.app"));
        assert!(is_known_firebase_host("X.FIREBASEIO.COM"));
    }

    #[test]
    fn other_hosts() {
        assert!(!is_known_firebase_host("example.com"));
        assert!(!is_known_firebase_host("localhost"));
        assert!(!is_known_firebase_host("firebase.google.com"));
    }
}
