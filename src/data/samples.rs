//! Bundled sample content.
//!
//! Shown before the first fetch completes, when no credentials are
//! configured, and (for pages) whenever a fetch fails.

use super::types::{Page, Post};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_owned()).collect()
}

/// Sample posts used to seed the post store.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Getting Started with Vue.js".into(),
            content: "Vue.js is a progressive framework for building user interfaces. Unlike other monolithic frameworks, Vue is designed from the ground up to be incrementally adoptable.".into(),
            author: "John Doe".into(),
            date: "2025-06-15".into(),
            tags: tags(&["Vue", "JavaScript", "Frontend"]),
        },
        Post {
            id: 2,
            title: "Embedding Vue in Blogger".into(),
            content: "Learn how to embed a Vue.js SPA into your Blogger site for dynamic functionality without leaving the Blogger platform.".into(),
            author: "Jane Smith".into(),
            date: "2025-06-20".into(),
            tags: tags(&["Vue", "Blogger", "Embedding"]),
        },
        Post {
            id: 3,
            title: "State Management with Pinia".into(),
            content: "Pinia is the new standard for state management in Vue applications, replacing Vuex. It offers a simpler API with full TypeScript support.".into(),
            author: "Alex Johnson".into(),
            date: "2025-06-25".into(),
            tags: tags(&["Vue", "Pinia", "State Management"]),
        },
    ]
}

/// Sample pages used to seed the page store and as its failure fallback.
pub fn sample_pages() -> Vec<Page> {
    vec![
        Page {
            id: "page-1".into(),
            title: "About Us".into(),
            content: "<p>This is the about us page content.</p>".into(),
            published: "2025-06-15".into(),
            updated: "2025-06-15".into(),
            url: "/p/about-us.html".into(),
        },
        Page {
            id: "page-2".into(),
            title: "Contact".into(),
            content: "<p>This is the contact page content.</p>".into(),
            published: "2025-06-16".into(),
            updated: "2025-06-16".into(),
            url: "/p/contact.html".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_unique() {
        let posts = sample_posts();
        let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());

        let pages = sample_pages();
        let ids: HashSet<_> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pages.len());
    }

    #[test]
    fn test_every_sample_post_is_tagged_vue() {
        assert!(sample_posts().iter().all(|p| p.has_tag("Vue")));
    }
}
