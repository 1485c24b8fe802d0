/// Decides which candidate leaves the pool next while supplemental keywords
/// are drawn for one article.
pub trait DrawStrategy {
    /// Index into the current pool, given the article index, the number of
    /// candidates already drawn, and the pool size (always non-zero here).
    fn next_index(&self, article_index: usize, drawn: usize, pool_len: usize) -> usize;
}

/// Deterministic draw keyed off the article index, so identical requests map
/// to identical keyword sets.
pub struct IndexedDraw;

impl DrawStrategy for IndexedDraw {
    fn next_index(&self, article_index: usize, drawn: usize, pool_len: usize) -> usize {
        (article_index + drawn) % pool_len
    }
}

// Build the 4-slot keyword list for one article: the cycled primary keyword,
// the driving secondary keyword, and up to two supplemental keywords drawn
// from the remaining secondary pool without replacement.
pub fn select_keywords(
    primary: &[String],
    secondary: &[String],
    index: usize,
    driver: &str,
    strategy: &dyn DrawStrategy,
) -> [String; 4] {
    let chosen_primary = &primary[index % primary.len()];

    let mut pool: Vec<&str> = secondary
        .iter()
        .map(String::as_str)
        .filter(|k| *k != driver && *k != chosen_primary.as_str())
        .collect();

    let mut drawn: Vec<&str> = Vec::new();
    while drawn.len() < 2 && !pool.is_empty() {
        let at = strategy.next_index(index, drawn.len(), pool.len());
        drawn.push(pool.remove(at));
    }
    while drawn.len() < 2 {
        drawn.push("");
    }

    // Dedup by value, first occurrence wins, then pad back out to four slots.
    let mut slots: Vec<String> = Vec::with_capacity(4);
    for candidate in [chosen_primary.as_str(), driver, drawn[0], drawn[1]] {
        if !slots.iter().any(|s| s == candidate) {
            slots.push(candidate.to_string());
        }
    }
    while slots.len() < 4 {
        slots.push(String::new());
    }

    slots.try_into().expect("slot list is padded to four entries")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_selection() {
        let slots = select_keywords(
            &keywords(&["p"]),
            &keywords(&["a", "b", "c"]),
            0,
            "a",
            &IndexedDraw,
        );
        assert_eq!(slots, ["p", "a", "b", "c"]);
    }

    #[test]
    fn test_draw_follows_index() {
        let slots = select_keywords(
            &keywords(&["p"]),
            &keywords(&["a", "b", "c", "d"]),
            1,
            "b",
            &IndexedDraw,
        );
        assert_eq!(slots, ["p", "b", "c", "a"]);

        let slots = select_keywords(
            &keywords(&["p", "q"]),
            &keywords(&["a", "b", "c", "d", "e"]),
            2,
            "c",
            &IndexedDraw,
        );
        assert_eq!(slots, ["p", "c", "d", "a"]);
    }

    #[test]
    fn test_dedup_when_primary_drives() {
        let slots = select_keywords(
            &keywords(&["a"]),
            &keywords(&["a", "b"]),
            0,
            "a",
            &IndexedDraw,
        );
        assert_eq!(slots, ["a", "b", "", ""]);
    }

    #[test]
    fn test_pads_when_pool_runs_dry() {
        let slots = select_keywords(
            &keywords(&["p"]),
            &keywords(&["only"]),
            0,
            "only",
            &IndexedDraw,
        );
        assert_eq!(slots, ["p", "only", "", ""]);
    }

    #[test]
    fn test_non_empty_slots_unique() {
        let secondary = keywords(&["a", "b", "a", "c", "b"]);
        for (i, driver) in secondary.iter().enumerate() {
            let slots = select_keywords(&keywords(&["a"]), &secondary, i, driver, &IndexedDraw);
            assert_eq!(slots.len(), 4);
            let filled: Vec<&String> = slots.iter().filter(|s| !s.is_empty()).collect();
            for (x, a) in filled.iter().enumerate() {
                for b in &filled[x + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_stable_for_identical_inputs() {
        let primary = keywords(&["p", "q"]);
        let secondary = keywords(&["a", "b", "c", "d"]);
        let first = select_keywords(&primary, &secondary, 3, "d", &IndexedDraw);
        let second = select_keywords(&primary, &secondary, 3, "d", &IndexedDraw);
        assert_eq!(first, second);
    }
}
