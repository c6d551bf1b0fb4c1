// Derived image URLs
//
// Every picture shown for an event is an Unsplash photo addressed by the
// opaque id carried in the event. Pure string construction, no network
// contract: format, fit and quality parameters are fixed per surface.

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";

/// Square card photo for the grid view
pub fn card_photo_url(photo_id: &str) -> String {
    format!("{IMAGE_BASE}{photo_id}?auto=format&fit=crop&w=600&q=80")
}

/// Wide cover photo for the detail view
pub fn cover_photo_url(photo_id: &str) -> String {
    format!("{IMAGE_BASE}{photo_id}?auto=format&fit=crop&w=1200&q=80")
}

/// Host portrait
pub fn avatar_url(avatar_id: &str) -> String {
    format!("{IMAGE_BASE}{avatar_id}?auto=format&fit=crop&w=200&h=200&q=80")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_interpolate_the_id_with_fixed_parameters() {
        assert_eq!(
            card_photo_url("1446776811953-b23d57bd21aa"),
            "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?auto=format&fit=crop&w=600&q=80"
        );
        assert!(cover_photo_url("abc").contains("w=1200"));
        assert!(avatar_url("abc").contains("w=200&h=200"));
    }
}
