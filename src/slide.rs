use crate::constants::SLIDE_COUNT;
use crate::content::SlideContent;

/// One displayable card. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub image_url: String,
}

// Fallback destinations used when the content service fails or comes up short.
const FALLBACK_KEYWORDS: [&str; SLIDE_COUNT] = [
    "arctic", "safari", "ocean", "tokyo", "swiss", "desert", "amazon", "bali",
];

const FALLBACK_BODY: &str =
    "Discover the hidden beauty of the world through our curated experiences.";

/// Deterministic image URL for a keyword at a track position. The position is
/// part of the seed, so a repeated keyword still gets a distinct image.
pub fn image_url(keyword: &str, position: usize) -> String {
    format!("https://picsum.photos/seed/{keyword}-{position}/1600/1000")
}

/// Turn whatever the content service produced into exactly `SLIDE_COUNT`
/// records.
///
/// Fewer than `SLIDE_COUNT` triples discards the whole batch in favor of the
/// built-in fallback set; there is no partial merge. Never fails.
pub fn build_slide_set(triples: &[SlideContent]) -> Vec<SlideRecord> {
    if triples.len() >= SLIDE_COUNT {
        triples
            .iter()
            .take(SLIDE_COUNT)
            .enumerate()
            .map(|(idx, item)| SlideRecord {
                id: format!("slide-{idx}"),
                heading: item.heading.clone(),
                body: item.text.clone(),
                image_url: image_url(&item.keyword, idx),
            })
            .collect()
    } else {
        FALLBACK_KEYWORDS
            .iter()
            .enumerate()
            .map(|(idx, key)| SlideRecord {
                id: format!("fb-{idx}"),
                heading: key.to_uppercase(),
                body: FALLBACK_BODY.to_string(),
                image_url: image_url(key, idx),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(count: usize) -> Vec<SlideContent> {
        (0..count)
            .map(|i| SlideContent {
                heading: format!("Destination {i}"),
                text: format!("Text {i}"),
                keyword: format!("key{i}"),
            })
            .collect()
    }

    #[test]
    fn always_returns_exactly_eight_records() {
        for count in [0, 3, SLIDE_COUNT, 12] {
            assert_eq!(build_slide_set(&triples(count)).len(), SLIDE_COUNT);
        }
    }

    #[test]
    fn an_undersized_batch_is_replaced_wholesale_by_the_fallback() {
        let records = build_slide_set(&triples(3));
        assert!(records.iter().all(|r| r.id.starts_with("fb-")));
        assert_eq!(records[0].heading, "ARCTIC");
        assert_eq!(records[7].heading, "BALI");
        assert!(records.iter().all(|r| r.body == FALLBACK_BODY));
    }

    #[test]
    fn an_oversized_batch_is_truncated_to_the_first_eight() {
        let records = build_slide_set(&triples(12));
        assert_eq!(records.len(), SLIDE_COUNT);
        assert_eq!(records[0].id, "slide-0");
        assert_eq!(records[7].heading, "Destination 7");
    }

    #[test]
    fn image_urls_are_deterministic_and_distinct_per_position() {
        assert_eq!(image_url("bali", 2), image_url("bali", 2));
        assert_ne!(image_url("bali", 2), image_url("bali", 5));
        assert_eq!(
            image_url("bali", 2),
            "https://picsum.photos/seed/bali-2/1600/1000"
        );
    }

    #[test]
    fn a_repeated_keyword_still_yields_distinct_urls() {
        let mut items = triples(SLIDE_COUNT);
        for item in items.iter_mut() {
            item.keyword = "ocean".to_string();
        }
        let records = build_slide_set(&items);
        for i in 1..records.len() {
            assert_ne!(records[i].image_url, records[i - 1].image_url);
        }
    }
}
