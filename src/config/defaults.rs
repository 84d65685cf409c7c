//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [api] Section Defaults
// ============================================================================

pub mod api {
    pub fn base_url() -> String {
        "https://www.googleapis.com/blogger/v3".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn template() -> PathBuf {
        PathBuf::from("public").join("index-template.html")
    }

    pub mod blogger {
        use std::path::PathBuf;

        pub fn output() -> PathBuf {
            "dist-blogger".into()
        }

        pub fn hosting_url() -> String {
            "YOUR_HOSTING_URL".into()
        }
    }

    pub mod jsdelivr {
        use std::path::PathBuf;

        pub fn output() -> PathBuf {
            "dist-jsdelivr".into()
        }

        pub fn base_url() -> Option<String> {
            None
        }
    }
}
