//! Listing page URLs.

/// `<route>?search=<query>` with the query percent-encoded.
pub fn search_url(listing_route: &str, query: &str) -> String {
    format!("{listing_route}?search={}", urlencoding::encode(query))
}

/// `<route>?category=<name>` with the name percent-encoded.
pub fn category_url(listing_route: &str, category: &str) -> String {
    format!("{listing_route}?category={}", urlencoding::encode(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(search_url("/shop", "clove oil"), "/shop?search=clove%20oil");
        assert_eq!(search_url("/shop", "a&b=c"), "/shop?search=a%26b%3Dc");
    }

    #[test]
    fn test_category_url() {
        assert_eq!(category_url("/shop", "Herbal Tea"), "/shop?category=Herbal%20Tea");
    }
}
